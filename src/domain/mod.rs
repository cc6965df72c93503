pub mod board;
pub mod task;

pub use board::{Board, Column, ColumnEdge, Direction};
pub use task::Task;
