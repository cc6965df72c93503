use crate::{
    domain::task::Task,
    error::{BoardError, Result},
};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt, str::FromStr};

/// A named, colored list of tasks belonging to one person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    #[serde(rename = "displayName")]
    pub display_name: String,
    /// Presentation only; never interpreted by the board.
    #[serde(rename = "favoriteColor")]
    pub accent_color: String,
    pub tasks: Vec<Task>,
}

impl Column {
    pub fn new(display_name: impl Into<String>, accent_color: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            accent_color: accent_color.into(),
            tasks: Vec::new(),
        }
    }

    pub fn with_tasks<I, T>(mut self, tasks: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Task>,
    {
        self.tasks.extend(tasks.into_iter().map(Into::into));
        self
    }

    /// Text shown when asking the user for a new task in this column
    pub fn add_prompt(&self) -> String {
        format!(
            "What task would you like to add for {}?",
            self.display_name
        )
    }

    fn check_task(&self, column: usize, index: usize) -> Result<()> {
        if index < self.tasks.len() {
            Ok(())
        } else {
            Err(BoardError::TaskOutOfRange {
                column,
                index,
                len: self.tasks.len(),
            })
        }
    }
}

/// Direction of a move, relative to the fixed column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Signed column offset: -1 for left, +1 for right
    pub fn offset(self) -> isize {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }
}

impl TryFrom<i8> for Direction {
    type Error = BoardError;

    fn try_from(value: i8) -> Result<Self> {
        match value {
            -1 => Ok(Self::Left),
            1 => Ok(Self::Right),
            other => Err(BoardError::InvalidDirection(other.to_string())),
        }
    }
}

impl FromStr for Direction {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "left" | "-1" => Ok(Self::Left),
            "right" | "+1" | "1" => Ok(Self::Right),
            _ => Err(BoardError::InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Where a column sits in the board, which decides the move controls a
/// renderer should offer for its tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnEdge {
    /// Leftmost column: no move left
    First,
    /// Rightmost column: no move right
    Last,
    /// The board's only column: no moves at all
    Only,
    Middle,
}

/// The board: an ordered, fixed-length sequence of columns.
///
/// Serialized as a bare array of columns. Deserialization rejects boards with
/// no columns or with duplicate column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Column>", into = "Vec<Column>")]
pub struct Board {
    columns: Vec<Column>,
}

impl Board {
    /// Creates a board from its columns, enforcing the board invariants
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let board = Self { columns };
        board.validate()?;
        Ok(board)
    }

    /// The built-in data set used when nothing valid is stored
    pub fn default_data() -> Self {
        Self {
            columns: vec![
                Column::new("Alice", "#e4572e")
                    .with_tasks(["Buy groceries", "Call the dentist"]),
                Column::new("Bob", "#17bebb").with_tasks(["Fix the bike", "Plan the trip"]),
                Column::new("Carol", "#76b041").with_tasks(["Water the plants"]),
            ],
        }
    }

    /// Checks that the board has at least one column and unique column names
    pub fn validate(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(BoardError::CorruptData("board has no columns".to_string()));
        }

        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.display_name.as_str()) {
                return Err(BoardError::CorruptData(format!(
                    "duplicate column name '{}'",
                    column.display_name
                )));
            }
        }

        Ok(())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Total number of tasks across all columns
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|col| col.tasks.len()).sum()
    }

    /// Position of a column relative to the board edges
    pub fn edge(&self, column: usize) -> Result<ColumnEdge> {
        self.check_column(column)?;
        let last = self.columns.len() - 1;
        Ok(match (column == 0, column == last) {
            (true, true) => ColumnEdge::Only,
            (true, false) => ColumnEdge::First,
            (false, true) => ColumnEdge::Last,
            (false, false) => ColumnEdge::Middle,
        })
    }

    /// Whether a task in `column` may move in `direction`
    pub fn can_move(&self, column: usize, direction: Direction) -> bool {
        column < self.columns.len() && self.destination(column, direction).is_ok()
    }

    /// Appends a task to a column.
    ///
    /// Missing or empty text is a no-op and returns `Ok(false)`.
    pub fn add_task(&mut self, column: usize, text: Option<&str>) -> Result<bool> {
        self.check_column(column)?;

        let Some(text) = text.filter(|t| !t.is_empty()) else {
            return Ok(false);
        };

        self.columns[column].tasks.push(Task::new(text));
        log::debug!("added task to column {}", column);
        Ok(true)
    }

    /// Removes a task; later tasks in the column shift up by one
    pub fn complete_task(&mut self, column: usize, task: usize) -> Result<Task> {
        self.check_column(column)?;
        self.columns[column].check_task(column, task)?;

        let removed = self.columns[column].tasks.remove(task);
        log::debug!("completed task {} in column {}", task, column);
        Ok(removed)
    }

    /// Moves a task to the end of the adjacent column.
    ///
    /// Every index is checked before anything is removed, so a fault leaves
    /// the board untouched.
    pub fn move_task(&mut self, column: usize, direction: Direction, task: usize) -> Result<()> {
        self.check_column(column)?;
        let target = self.destination(column, direction)?;
        self.columns[column].check_task(column, task)?;

        let moved = self.columns[column].tasks.remove(task);
        self.columns[target].tasks.push(moved);
        log::debug!(
            "moved task {} from column {} to column {}",
            task,
            column,
            target
        );
        Ok(())
    }

    fn check_column(&self, index: usize) -> Result<()> {
        if index < self.columns.len() {
            Ok(())
        } else {
            Err(BoardError::ColumnOutOfRange {
                index,
                len: self.columns.len(),
            })
        }
    }

    fn destination(&self, column: usize, direction: Direction) -> Result<usize> {
        column
            .checked_add_signed(direction.offset())
            .filter(|target| *target < self.columns.len())
            .ok_or(BoardError::MoveOutOfRange {
                column,
                offset: direction.offset(),
                len: self.columns.len(),
            })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::default_data()
    }
}

impl TryFrom<Vec<Column>> for Board {
    type Error = BoardError;

    fn try_from(columns: Vec<Column>) -> Result<Self> {
        Self::new(columns)
    }
}

impl From<Board> for Vec<Column> {
    fn from(board: Board) -> Self {
        board.columns
    }
}
