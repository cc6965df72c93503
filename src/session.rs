//! Owning wrapper around one board for the lifetime of a session.
//!
//! The session holds the only [`Board`] and persists it after every
//! operation that changed it. Callers re-render from the board returned by
//! each operation.

use crate::{
    domain::{Board, Direction},
    error::Result,
    storage::{BoardSource, BoardStore, KeyValueStore},
};

pub struct BoardSession<S> {
    board: Board,
    store: BoardStore<S>,
    source: BoardSource,
}

impl<S: KeyValueStore> BoardSession<S> {
    /// Loads the board once from `store`
    pub async fn open(store: BoardStore<S>) -> Result<Self> {
        let loaded = store.load().await?;
        Ok(Self {
            board: loaded.board,
            store,
            source: loaded.source,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn source(&self) -> &BoardSource {
        &self.source
    }

    /// Warning to show when stored data was corrupt at load time
    pub fn warning(&self) -> Option<&str> {
        self.source.warning()
    }

    pub fn store(&self) -> &BoardStore<S> {
        &self.store
    }

    /// Appends a task; `None` or empty text leaves the board and storage alone.
    ///
    /// If the save fails the in-memory board keeps the change and the error
    /// is returned.
    pub async fn add_task(&mut self, column: usize, text: Option<&str>) -> Result<&Board> {
        if self.board.add_task(column, text)? {
            self.store.save(&self.board).await?;
        }
        Ok(&self.board)
    }

    /// Removes a task and persists the board
    pub async fn complete_task(&mut self, column: usize, task: usize) -> Result<&Board> {
        self.board.complete_task(column, task)?;
        self.store.save(&self.board).await?;
        Ok(&self.board)
    }

    /// Moves a task to the end of the adjacent column and persists the board
    pub async fn move_task(
        &mut self,
        column: usize,
        direction: Direction,
        task: usize,
    ) -> Result<&Board> {
        self.board.move_task(column, direction, task)?;
        self.store.save(&self.board).await?;
        Ok(&self.board)
    }

    /// Ends the session, handing back the board
    pub fn into_board(self) -> Board {
        self.board
    }
}
