//! Configuration file loading.

use std::path::Path;

use super::{
    ConfigError,
    ServerSettings,
};

/// File name looked up in the working directory.
const CONFIG_FILE: &str = "garhwali-server.json";

/// Load and validate the server settings from `dir`.
///
/// A missing `garhwali-server.json` yields the defaults; a present but
/// unreadable, unparseable or invalid one is an error.
pub fn load(dir: &Path) -> Result<ServerSettings, ConfigError> {
    let settings = load_from_dir(dir)?.unwrap_or_default();
    settings.validate().map_err(ConfigError::ValidationErrors)?;
    Ok(settings)
}

/// # Returns
/// - `Ok(Some(settings))`: the configuration file was found and parsed
/// - `Ok(None)`: no configuration file present
/// - `Err(ConfigError)`: read or parse failure
fn load_from_dir(dir: &Path) -> Result<Option<ServerSettings>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let settings: ServerSettings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}
