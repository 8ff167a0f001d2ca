//! JSON file persistence shared by both stores.
//!
//! Writes go through a temp file in the same directory followed by a rename,
//! so a crash mid-write never leaves a truncated file behind.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure while reading or writing a backing file.
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode contents for {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and parse a JSON file.
///
/// Returns `Ok(None)` when the file does not exist — the first-run case is
/// not an error. A file that exists but cannot be read or parsed is.
pub(super) fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, PersistError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "backing file not found");
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|source| PersistError::Read { path: path.to_path_buf(), source })?;
    let value = serde_json::from_str(&content)
        .map_err(|source| PersistError::Parse { path: path.to_path_buf(), source })?;

    Ok(Some(value))
}

/// Serialize `value` and write it to `path` atomically.
///
/// A failed write is retried once before the error is surfaced; transient
/// faults (e.g. the filesystem briefly out of handles) should not lose a
/// contribution.
pub(super) fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<(), PersistError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|source| PersistError::Encode { path: path.to_path_buf(), source })?;

    if let Err(first) = write_atomic(path, json.as_bytes()) {
        tracing::warn!(path = %path.display(), error = %first, "write failed, retrying once");
        return write_atomic(path, json.as_bytes());
    }

    Ok(())
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), PersistError> {
    let tmp = tmp_path(path);

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .map_err(|source| PersistError::Write { path: path.to_path_buf(), source })?;
    }

    fs::write(&tmp, bytes)
        .map_err(|source| PersistError::Write { path: path.to_path_buf(), source })?;
    fs::rename(&tmp, path)
        .map_err(|source| PersistError::Write { path: path.to_path_buf(), source })?;

    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeMap;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn load_json_missing_file_is_none() {
        let dir = TempDir::new().unwrap();

        let loaded: Option<BTreeMap<String, String>> =
            load_json(&dir.path().join("absent.json")).unwrap();

        assert!(loaded.is_none());
    }

    #[test]
    fn load_json_rejects_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "not json").unwrap();

        let result: Result<Option<BTreeMap<String, String>>, _> = load_json(&path);

        assert!(matches!(result, Err(PersistError::Parse { .. })));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        let mut value = BTreeMap::new();
        value.insert("ghar".to_string(), "घर".to_string());

        save_json(&path, &value).unwrap();
        let loaded: Option<BTreeMap<String, String>> = load_json(&path).unwrap();

        assert_eq!(loaded, Some(value));
    }

    #[test]
    fn save_json_creates_missing_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("data.json");

        save_json(&path, &Vec::<String>::new()).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn save_json_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");

        save_json(&path, &Vec::<String>::new()).unwrap();

        assert!(!tmp_path(&path).exists());
    }
}
