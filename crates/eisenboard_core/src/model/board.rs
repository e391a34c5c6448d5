//! Board aggregate: the four ordered task lists.
//!
//! # Responsibility
//! - Own the in-memory source of truth for all tasks.
//! - Provide append/relocate/snapshot/clear primitives for controllers.
//!
//! # Invariants
//! - A task id appears in at most one quadrant list.
//! - Relocation transfers ownership; it never copies a task.
//! - List order is display order and is preserved by every operation
//!   except `relocate`, which re-appends the moved task at the end of
//!   the target list.

use crate::model::quadrant::Quadrant;
use crate::model::task::{Task, TaskId};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from board mutations.
#[derive(Debug, PartialEq, Eq)]
pub enum BoardError {
    /// The referenced task is not on the board (stale drag reference).
    TaskNotFound(TaskId),
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TaskNotFound(id) => write!(f, "task not found on board: {id}"),
        }
    }
}

impl Error for BoardError {}

/// The aggregate of all four quadrant task lists.
///
/// This is the unit of persistence and the single source of truth; the
/// list view and the store are projections synchronized by explicit
/// `populate`/`persist` calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    lists: [Vec<Task>; 4],
}

impl Board {
    /// Creates an empty board (all quadrants empty).
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new task with the given label at the end of a quadrant.
    ///
    /// Returns the generated task id.
    pub fn append(&mut self, quadrant: Quadrant, label: impl Into<String>) -> TaskId {
        let task = Task::new(label);
        let id = task.id;
        self.lists[quadrant.index()].push(task);
        id
    }

    /// Moves a task to the end of the target quadrant's list.
    ///
    /// Moving a task to the quadrant it is already in is valid and
    /// re-appends it at the end.
    pub fn relocate(&mut self, id: TaskId, target: Quadrant) -> Result<(), BoardError> {
        let source = self.locate(id).ok_or(BoardError::TaskNotFound(id))?;
        let position = self.lists[source.index()]
            .iter()
            .position(|task| task.id == id)
            .ok_or(BoardError::TaskNotFound(id))?;
        let task = self.lists[source.index()].remove(position);
        self.lists[target.index()].push(task);
        Ok(())
    }

    /// Returns the quadrant currently owning the task, if any.
    pub fn locate(&self, id: TaskId) -> Option<Quadrant> {
        Quadrant::ALL
            .into_iter()
            .find(|quadrant| self.lists[quadrant.index()].iter().any(|task| task.id == id))
    }

    /// Ordered tasks of one quadrant.
    pub fn tasks(&self, quadrant: Quadrant) -> &[Task] {
        &self.lists[quadrant.index()]
    }

    /// Ordered labels of one quadrant, without mutating display state.
    pub fn snapshot(&self, quadrant: Quadrant) -> Vec<String> {
        self.lists[quadrant.index()]
            .iter()
            .map(|task| task.label.clone())
            .collect()
    }

    /// Empties one quadrant's list.
    pub fn clear(&mut self, quadrant: Quadrant) {
        self.lists[quadrant.index()].clear();
    }

    /// Total task count across all quadrants.
    pub fn task_count(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    /// Whether every quadrant is empty.
    pub fn is_empty(&self) -> bool {
        self.task_count() == 0
    }
}
