use crate::{
    config::{is_valid_storage_key, StoreConfig},
    error::{BoardError, Result},
    storage::KeyValueStore,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-based key-value storage: one JSON file per key
pub struct FileStorage {
    root_path: PathBuf,
}

impl FileStorage {
    const LANES_DIR: &'static str = ".lanes";

    /// Creates a new FileStorage instance for the given project root
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            root_path: project_root.as_ref().join(Self::LANES_DIR),
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(&config.data_dir)
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    fn value_file(&self, key: &str) -> Result<PathBuf> {
        if !is_valid_storage_key(key) {
            return Err(BoardError::StorageError(format!(
                "invalid storage key '{}'",
                key
            )));
        }
        Ok(self.root_path.join(format!("{}.json", key)))
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let file_path = self.value_file(key)?;

        if !file_path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&file_path).await?;
        Ok(Some(contents))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let file_path = self.value_file(key)?;
        self.ensure_directory_exists(&self.root_path).await?;

        fs::write(file_path, value).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{Board, Direction},
        session::BoardSession,
        storage::{BoardSource, BoardStore},
    };
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_value() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        assert_eq!(storage.get("kanban-data").await.unwrap(), None);
        assert!(!storage.root_path().exists());
    }

    #[tokio::test]
    async fn test_set_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        storage.set("kanban-data", "[1,2,3]").await.unwrap();

        assert!(temp_dir.path().join(".lanes/kanban-data.json").exists());
        assert_eq!(
            storage.get("kanban-data").await.unwrap().as_deref(),
            Some("[1,2,3]")
        );
    }

    #[tokio::test]
    async fn test_set_overwrites_previous_value() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        storage.set("kanban-data", "first").await.unwrap();
        storage.set("kanban-data", "second").await.unwrap();

        assert_eq!(
            storage.get("kanban-data").await.unwrap().as_deref(),
            Some("second")
        );
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        storage.set("a", "one").await.unwrap();
        assert_eq!(storage.get("b").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        assert!(matches!(
            storage.set("../outside", "x").await,
            Err(BoardError::StorageError(_))
        ));
        assert!(storage.get("").await.is_err());
    }

    #[tokio::test]
    async fn test_from_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = StoreConfig::new(temp_dir.path());
        let storage = FileStorage::from_config(&config);

        assert_eq!(storage.root_path(), temp_dir.path().join(".lanes"));
    }

    #[tokio::test]
    async fn test_board_survives_reload_from_disk() {
        let temp_dir = TempDir::new().unwrap();
        let config = StoreConfig::new(temp_dir.path());

        let mut session = BoardSession::open(BoardStore::from_config(
            FileStorage::from_config(&config),
            &config,
        ))
        .await
        .unwrap();
        session.add_task(0, Some("Book flights")).await.unwrap();
        session.move_task(0, Direction::Right, 2).await.unwrap();
        let expected = session.into_board();

        let store = BoardStore::from_config(FileStorage::from_config(&config), &config);
        let loaded = store.load().await.unwrap();

        assert_eq!(loaded.source, BoardSource::Stored);
        assert_eq!(loaded.board, expected);
        assert_ne!(loaded.board, Board::default_data());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_left_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        storage.set("kanban-data", "[{\"broken\"").await.unwrap();

        let store = BoardStore::new(storage);
        let loaded = store.load().await.unwrap();

        assert!(loaded.warning().is_some());
        assert_eq!(loaded.board, Board::default_data());
        let on_disk =
            std::fs::read_to_string(temp_dir.path().join(".lanes/kanban-data.json")).unwrap();
        assert_eq!(on_disk, "[{\"broken\"");
    }
}
