use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "upstream.timeoutSecs")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Top-level server settings, every field defaulted so a partial (or absent)
/// configuration file is valid.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerSettings {
    /// Address the HTTP listener binds to.
    pub bind_addr: String,

    /// Directory holding the two backing files.
    pub data_dir: PathBuf,

    pub upstream: UpstreamConfig,
}

/// The external definition service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpstreamConfig {
    pub base_url: String,

    /// Bound on each upstream request, end to end.
    pub timeout_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:5000".to_string(),
            data_dir: PathBuf::from("data"),
            upstream: UpstreamConfig::default(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.dictionaryapi.dev/api/v2/entries/en".to_string(),
            timeout_secs: 10,
        }
    }
}

impl ServerSettings {
    /// Backing file for approved translations.
    #[must_use]
    pub fn translations_path(&self) -> PathBuf {
        self.data_dir.join("garhwali_translations.json")
    }

    /// Backing file for the pending request queue.
    #[must_use]
    pub fn requests_path(&self) -> PathBuf {
        self.data_dir.join("translation_requests.json")
    }

    /// # Errors
    /// - `bindAddr` is not a parseable socket address
    /// - `upstream.baseUrl` is empty or not an HTTP(S) URL
    /// - `upstream.timeoutSecs` is zero
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.bind_addr.parse::<std::net::SocketAddr>().is_err() {
            errors.push(ValidationError::new(
                "bindAddr",
                format!("'{}' is not a valid socket address. Example: \"0.0.0.0:5000\"", self.bind_addr),
            ));
        }

        if self.upstream.base_url.is_empty() {
            errors.push(ValidationError::new(
                "upstream.baseUrl",
                "The URL cannot be empty. Example: \"https://api.dictionaryapi.dev/api/v2/entries/en\"",
            ));
        } else if !self.upstream.base_url.starts_with("http://")
            && !self.upstream.base_url.starts_with("https://")
        {
            errors.push(ValidationError::new(
                "upstream.baseUrl",
                format!("'{}' must start with http:// or https://", self.upstream.base_url),
            ));
        }

        if self.upstream.timeout_secs == 0 {
            errors.push(ValidationError::new(
                "upstream.timeoutSecs",
                "The timeout must be at least 1 second",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
