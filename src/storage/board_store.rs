use crate::{
    config::StoreConfig,
    domain::Board,
    error::{BoardError, Result},
    storage::KeyValueStore,
};

/// Where a loaded board came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardSource {
    /// Parsed from the stored value
    Stored,
    /// Nothing was stored; the built-in data set was used
    Default,
    /// The stored value was corrupt; the built-in data set was used instead.
    /// Carries the warning to show the user.
    Recovered(String),
}

impl BoardSource {
    /// User-facing warning when the stored board could not be read
    pub fn warning(&self) -> Option<&str> {
        match self {
            Self::Recovered(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Result of loading a board at session start
#[derive(Debug, Clone)]
pub struct LoadedBoard {
    pub board: Board,
    pub source: BoardSource,
}

impl LoadedBoard {
    pub fn warning(&self) -> Option<&str> {
        self.source.warning()
    }
}

/// Bridges a [`Board`] to key-value storage under a single fixed key
pub struct BoardStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> BoardStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            key: StoreConfig::DEFAULT_KEY.to_string(),
        }
    }

    pub fn from_config(storage: S, config: &StoreConfig) -> Self {
        Self {
            storage,
            key: config.storage_key.clone(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Loads the stored board, falling back to the built-in data set.
    ///
    /// A corrupt stored value is reported through [`BoardSource::Recovered`]
    /// and left in place. An empty stored value counts as nothing stored.
    /// Only storage failures are returned as errors.
    pub async fn load(&self) -> Result<LoadedBoard> {
        let stored = self.storage.get(&self.key).await?;
        let Some(raw) = stored.filter(|raw| !raw.is_empty()) else {
            log::info!("no stored board under '{}', using default data", self.key);
            return Ok(LoadedBoard {
                board: Board::default_data(),
                source: BoardSource::Default,
            });
        };

        match Self::parse(&raw) {
            Ok(board) => {
                log::info!(
                    "loaded board under '{}' with {} columns",
                    self.key,
                    board.len()
                );
                Ok(LoadedBoard {
                    board,
                    source: BoardSource::Stored,
                })
            }
            Err(err) => {
                log::warn!(
                    "stored board under '{}' is unreadable, using default data: {}",
                    self.key,
                    err
                );
                Ok(LoadedBoard {
                    board: Board::default_data(),
                    source: BoardSource::Recovered(err.to_string()),
                })
            }
        }
    }

    /// Serializes the board and overwrites the stored value
    pub async fn save(&self, board: &Board) -> Result<()> {
        let json = serde_json::to_string_pretty(board)?;
        self.storage.set(&self.key, &json).await?;
        log::debug!("saved board under '{}'", self.key);
        Ok(())
    }

    fn parse(raw: &str) -> Result<Board> {
        serde_json::from_str(raw).map_err(|e| BoardError::CorruptData(e.to_string()))
    }
}
