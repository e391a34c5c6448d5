//! Board use-case service.
//!
//! # Responsibility
//! - Own the in-memory board and the store it is projected into.
//! - Apply the lenient persistence policy: absent or malformed persisted
//!   state loads as an empty board, and save failures are logged but never
//!   surfaced (best-effort local caching).
//!
//! # Invariants
//! - Every mutating operation persists before returning.
//! - `persist` is idempotent given the current board state.
//! - Task labels are user content and are never logged.

use crate::model::board::Board;
use crate::model::quadrant::Quadrant;
use crate::model::task::TaskId;
use crate::store::board_store::BoardStore;
use log::{info, warn};

/// Use-case service owning the board and its store projection.
pub struct BoardService<S: BoardStore> {
    store: S,
    board: Board,
}

impl<S: BoardStore> BoardService<S> {
    /// Loads persisted state at startup.
    ///
    /// Missing or malformed persisted data yields an empty board; the
    /// failure is logged and never surfaced.
    pub fn open(store: S) -> Self {
        let board = match store.load() {
            Ok(Some(board)) => {
                info!(
                    "event=board_load module=service status=ok tasks={}",
                    board.task_count()
                );
                board
            }
            Ok(None) => {
                info!("event=board_load module=service status=ok tasks=0 first_run=true");
                Board::new()
            }
            Err(err) => {
                warn!(
                    "event=board_load module=service status=degraded fallback=empty error={err}"
                );
                Board::new()
            }
        };

        Self { store, board }
    }

    /// Read access to the source of truth.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Creates a task from free-text input plus the two priority flags.
    ///
    /// The label is trimmed first; a whitespace-only label is a silent
    /// no-op. On success the board is persisted and the new task's id and
    /// resolved quadrant are returned.
    pub fn add_task(
        &mut self,
        label: &str,
        urgent: bool,
        important: bool,
    ) -> Option<(TaskId, Quadrant)> {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return None;
        }

        let quadrant = Quadrant::classify(urgent, important);
        let id = self.board.append(quadrant, trimmed);
        info!(
            "event=task_add module=service status=ok quadrant={quadrant} tasks={}",
            self.board.task_count()
        );
        self.persist();
        Some((id, quadrant))
    }

    /// Transfers a task to the target quadrant and persists.
    ///
    /// Returns the source quadrant, or `None` when the id is stale (no
    /// board mutation, no save).
    pub fn relocate_task(&mut self, id: TaskId, target: Quadrant) -> Option<Quadrant> {
        let source = self.board.locate(id)?;
        if self.board.relocate(id, target).is_err() {
            return None;
        }
        info!("event=task_relocate module=service status=ok from={source} to={target}");
        self.persist();
        Some(source)
    }

    /// Best-effort save of the current board.
    ///
    /// Safe to call redundantly, e.g. once more at session end.
    pub fn persist(&self) {
        if let Err(err) = self.store.save(&self.board) {
            warn!("event=board_save module=service status=error error={err}");
        }
    }
}
