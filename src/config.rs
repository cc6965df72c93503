use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Where and under which key the board is persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Fixed key the serialized board lives under
    pub storage_key: String,
    /// Project directory for file-backed storage
    pub data_dir: PathBuf,
}

impl StoreConfig {
    pub const DEFAULT_KEY: &'static str = "kanban-data";

    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Parses a JSON configuration; missing fields fall back to defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| BoardError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON configuration file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref()).await?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        if !is_valid_storage_key(&self.storage_key) {
            return Err(BoardError::ConfigError(format!(
                "storage_key '{}' must be non-empty and must not contain path separators",
                self.storage_key
            )));
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: Self::DEFAULT_KEY.to_string(),
            data_dir: PathBuf::from("."),
        }
    }
}

/// Whether `key` can name a stored value: non-blank, no path separators,
/// not `.` or `..`
pub(crate) fn is_valid_storage_key(key: &str) -> bool {
    !key.trim().is_empty() && !key.contains(['/', '\\']) && key != "." && key != ".."
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.storage_key, "kanban-data");
        assert_eq!(config.data_dir, PathBuf::from("."));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = StoreConfig::from_json_str(r#"{"data_dir": "/tmp/boards"}"#).unwrap();
        assert_eq!(config.storage_key, "kanban-data");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/boards"));
    }

    #[test]
    fn test_invalid_keys_rejected() {
        assert!(matches!(
            StoreConfig::from_json_str(r#"{"storage_key": "  "}"#),
            Err(BoardError::ConfigError(_))
        ));
        assert!(StoreConfig::default().with_key("../escape").validate().is_err());
        assert!(StoreConfig::from_json_str("not json").is_err());
    }

    #[test]
    fn test_storage_key_rules() {
        assert!(is_valid_storage_key("kanban-data"));
        assert!(!is_valid_storage_key(""));
        assert!(!is_valid_storage_key("   "));
        assert!(!is_valid_storage_key("a/b"));
        assert!(!is_valid_storage_key("a\\b"));
        assert!(!is_valid_storage_key("."));
        assert!(!is_valid_storage_key(".."));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("lanes.json");
        std::fs::write(&path, r#"{"storage_key": "team-board"}"#).unwrap();

        let config = StoreConfig::load(&path).await.unwrap();
        assert_eq!(config.storage_key, "team-board");
    }
}
