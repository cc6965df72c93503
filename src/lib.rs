//! # Lanes Core
//!
//! Board state engine for a per-person kanban board.
//!
//! This crate owns the board data model (columns, tasks, ordering), the three
//! mutating operations (add, complete, move) and the load/persist contract
//! against a key-value store. Rendering and text entry are left to the
//! caller, which re-reads the board after every operation.

pub mod config;
pub mod domain;
pub mod error;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use config::StoreConfig;
pub use domain::{
    board::{Board, Column, ColumnEdge, Direction},
    task::Task,
};
pub use error::{BoardError, Result};
pub use session::BoardSession;
pub use storage::{BoardSource, BoardStore, KeyValueStore, LoadedBoard, MemoryStorage};

#[cfg(feature = "file-storage")]
pub use storage::FileStorage;
