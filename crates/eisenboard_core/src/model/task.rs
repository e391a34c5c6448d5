//! Task domain model.
//!
//! # Responsibility
//! - Define the single-attribute task record (free-text label).
//! - Provide an opaque synthetic identifier for display addressing.
//!
//! # Invariants
//! - `id` is stable for the task lifetime and never reused.
//! - `id` is a display/drag addressing aid only; persisted board state
//!   carries labels and order, never ids.

use uuid::Uuid;

/// Opaque identifier for a task while it is on the board.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// A single board task: one line of free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Synthetic stable id used by the view and drag controller.
    pub id: TaskId,
    /// User-entered label; the only persisted attribute.
    pub label: String,
}

impl Task {
    /// Creates a task with a generated id.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
        }
    }

    /// Creates a task with a caller-provided id.
    ///
    /// Used by tests and by callers that already minted a reference.
    pub fn with_id(id: TaskId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}
