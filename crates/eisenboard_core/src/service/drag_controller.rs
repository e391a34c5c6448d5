//! Drag-and-drop mediation between quadrant lists.
//!
//! # Responsibility
//! - Track the explicit two-state drag machine (idle / dragging).
//! - Turn a completed drop into a board relocation plus a save, and mirror
//!   the move in the displayed lists.
//!
//! # Invariants
//! - The dragged task is referenced by its explicit id, never by ambient
//!   transfer-data side channels.
//! - An abandoned or stale drag leaves board, view, and store untouched.

use crate::model::quadrant::Quadrant;
use crate::model::task::TaskId;
use crate::service::board_service::BoardService;
use crate::store::board_store::BoardStore;
use crate::view::task_list::TaskListView;
use log::debug;

/// Drag machine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// A task item is being dragged; carries the transferable reference.
    Dragging(TaskId),
}

/// Mediates picking up a task item and dropping it into another quadrant.
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Begins a drag on the given task item.
    ///
    /// A drag started while another is in flight replaces it; the UI
    /// surface only ever delivers one active drag.
    pub fn begin_drag(&mut self, task: TaskId) {
        debug!("event=drag_begin module=drag status=ok");
        self.state = DragState::Dragging(task);
    }

    /// Whether a hover target should suppress the environment's default
    /// reject-drop behavior. True exactly while a drag is in flight; has
    /// no other effect.
    pub fn allow_drop(&self) -> bool {
        self.is_dragging()
    }

    /// Completes the drag over a quadrant's list area.
    ///
    /// Relocates the dragged task through the board service (which
    /// persists) and mirrors the move in the view. A stale reference is
    /// treated as an abandoned drag: no relocation, no save. Either way
    /// the machine returns to idle.
    pub fn drop_on<S: BoardStore>(
        &mut self,
        service: &mut BoardService<S>,
        view: &mut TaskListView,
        target: Quadrant,
    ) -> bool {
        let DragState::Dragging(task) = std::mem::take(&mut self.state) else {
            return false;
        };

        match service.relocate_task(task, target) {
            Some(_) => {
                view.relocate(task, target);
                true
            }
            None => {
                debug!("event=drag_drop module=drag status=abandoned reason=stale_ref");
                false
            }
        }
    }

    /// Abandons the drag (released outside any valid target).
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            debug!("event=drag_cancel module=drag status=ok");
        }
        self.state = DragState::Idle;
    }
}
