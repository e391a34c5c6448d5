//! Entry panel state and new-task submission.
//!
//! # Responsibility
//! - Hold the panel's UI state: visibility, draft label, priority flags.
//! - Dispatch a submitted draft through classification, the board service,
//!   and the displayed list.
//!
//! # Invariants
//! - Visibility toggling is pure UI state; it never persists anything.
//! - A whitespace-only draft submits as a no-op and leaves all panel
//!   state untouched.
//! - A successful submission clears the draft and resets both flags.

use crate::model::task::TaskId;
use crate::service::board_service::BoardService;
use crate::store::board_store::BoardStore;
use crate::view::task_list::TaskListView;

/// Controller for the collapsible add-task panel.
///
/// The panel starts hidden (collapsed), matching first render.
#[derive(Debug, Default)]
pub struct PanelController {
    visible: bool,
    draft: String,
    urgent: bool,
    important: bool,
}

impl PanelController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Flips panel visibility. No persistence.
    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }

    pub fn set_draft(&mut self, label: impl Into<String>) {
        self.draft = label.into();
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_urgent(&mut self, urgent: bool) {
        self.urgent = urgent;
    }

    pub fn set_important(&mut self, important: bool) {
        self.important = important;
    }

    pub fn flags(&self) -> (bool, bool) {
        (self.urgent, self.important)
    }

    /// Submits the current draft as a new task.
    ///
    /// The draft is trimmed; an empty result is silently rejected with no
    /// state change. Otherwise the quadrant is resolved from the flags,
    /// the task is appended to board and view, a save is triggered, and
    /// the input state is reset.
    pub fn submit<S: BoardStore>(
        &mut self,
        service: &mut BoardService<S>,
        view: &mut TaskListView,
    ) -> Option<TaskId> {
        let (id, quadrant) = service.add_task(&self.draft, self.urgent, self.important)?;

        if let Some(task) = service
            .board()
            .tasks(quadrant)
            .iter()
            .find(|task| task.id == id)
        {
            view.append(quadrant, task);
        }

        self.draft.clear();
        self.urgent = false;
        self.important = false;
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::PanelController;

    #[test]
    fn toggle_twice_restores_visibility() {
        let mut panel = PanelController::new();
        assert!(!panel.is_visible());

        panel.toggle_visibility();
        assert!(panel.is_visible());

        panel.toggle_visibility();
        assert!(!panel.is_visible());
    }
}
