use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Column index {index} out of range for board with {len} columns")]
    ColumnOutOfRange { index: usize, len: usize },

    #[error("Task index {index} out of range for column {column} with {len} tasks")]
    TaskOutOfRange {
        column: usize,
        index: usize,
        len: usize,
    },

    #[error("Cannot move from column {column} by {offset}: board has {len} columns")]
    MoveOutOfRange {
        column: usize,
        offset: isize,
        len: usize,
    },

    #[error("Invalid move direction: {0}")]
    InvalidDirection(String),

    #[error("Stored board data is corrupt: {0}")]
    CorruptData(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl BoardError {
    /// True for errors caused by a caller passing indices that don't match
    /// the current board.
    pub fn is_index_fault(&self) -> bool {
        matches!(
            self,
            Self::ColumnOutOfRange { .. } | Self::TaskOutOfRange { .. } | Self::MoveOutOfRange { .. }
        )
    }
}

#[cfg(feature = "sqlite-storage")]
impl From<rusqlite::Error> for BoardError {
    fn from(err: rusqlite::Error) -> Self {
        Self::StorageError(err.to_string())
    }
}
