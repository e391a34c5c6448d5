//! Task list view: per-quadrant widget lists.
//!
//! # Responsibility
//! - Maintain the displayed item list for each quadrant.
//! - Mint stable element ids so the UI surface and drag controller can
//!   address individual items.
//!
//! # Invariants
//! - Widget order mirrors board order for every quadrant.
//! - `populate` is clear-then-append, so repopulating from a loaded board
//!   never duplicates items.

use crate::model::board::Board;
use crate::model::quadrant::Quadrant;
use crate::model::task::{Task, TaskId};

/// Element id of a quadrant's list container, `{quadrant}-list`.
pub fn list_element_id(quadrant: Quadrant) -> String {
    format!("{quadrant}-list")
}

/// Element id of a single task item, `task-{id}`.
pub fn task_element_id(id: TaskId) -> String {
    format!("task-{id}")
}

/// One displayed task item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskWidget {
    /// Board task this widget projects.
    pub task: TaskId,
    /// Stable element id used for addressing in the UI surface.
    pub element_id: String,
    /// Displayed text.
    pub label: String,
    /// Items are always created draggable.
    pub draggable: bool,
}

impl TaskWidget {
    fn new(task: &Task) -> Self {
        Self {
            task: task.id,
            element_id: task_element_id(task.id),
            label: task.label.clone(),
            draggable: true,
        }
    }

    /// Transferable reference emitted when a drag begins on this item.
    pub fn drag_payload(&self) -> TaskId {
        self.task
    }
}

/// The displayed lists for all four quadrants.
#[derive(Debug, Clone, Default)]
pub struct TaskListView {
    lists: [Vec<TaskWidget>; 4],
}

impl TaskListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a widget for the task at the end of the quadrant's list.
    pub fn append(&mut self, quadrant: Quadrant, task: &Task) {
        self.lists[quadrant.index()].push(TaskWidget::new(task));
    }

    /// Removes the item from its current list and appends it to the end of
    /// the target list, label preserved.
    ///
    /// Returns `false` when no widget carries the given task id.
    pub fn relocate(&mut self, id: TaskId, target: Quadrant) -> bool {
        for quadrant in Quadrant::ALL {
            let list = &mut self.lists[quadrant.index()];
            if let Some(position) = list.iter().position(|widget| widget.task == id) {
                let widget = list.remove(position);
                self.lists[target.index()].push(widget);
                return true;
            }
        }
        false
    }

    /// Ordered labels of one displayed list, without mutating it.
    pub fn snapshot(&self, quadrant: Quadrant) -> Vec<String> {
        self.lists[quadrant.index()]
            .iter()
            .map(|widget| widget.label.clone())
            .collect()
    }

    /// Empties one displayed list.
    pub fn clear(&mut self, quadrant: Quadrant) {
        self.lists[quadrant.index()].clear();
    }

    /// Rebuilds every list from the board.
    ///
    /// Used when repopulating from storage at startup.
    pub fn populate(&mut self, board: &Board) {
        for quadrant in Quadrant::ALL {
            self.clear(quadrant);
            for task in board.tasks(quadrant) {
                self.append(quadrant, task);
            }
        }
    }

    /// Widgets of one quadrant in display order.
    pub fn widgets(&self, quadrant: Quadrant) -> &[TaskWidget] {
        &self.lists[quadrant.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::{list_element_id, task_element_id, TaskListView};
    use crate::model::board::Board;
    use crate::model::quadrant::Quadrant;
    use crate::model::task::Task;

    #[test]
    fn element_id_conventions() {
        let task = Task::new("x");
        assert_eq!(
            list_element_id(Quadrant::UrgentImportant),
            "urgent-important-list"
        );
        assert_eq!(task_element_id(task.id), format!("task-{}", task.id));
    }

    #[test]
    fn appended_widgets_are_draggable_and_ordered() {
        let mut view = TaskListView::new();
        let first = Task::new("first");
        let second = Task::new("second");
        view.append(Quadrant::UrgentNotImportant, &first);
        view.append(Quadrant::UrgentNotImportant, &second);

        let widgets = view.widgets(Quadrant::UrgentNotImportant);
        assert_eq!(widgets.len(), 2);
        assert!(widgets.iter().all(|widget| widget.draggable));
        assert_eq!(widgets[0].drag_payload(), first.id);
        assert_eq!(
            view.snapshot(Quadrant::UrgentNotImportant),
            ["first", "second"]
        );
    }

    #[test]
    fn populate_twice_does_not_duplicate() {
        let mut board = Board::new();
        board.append(Quadrant::NotUrgentNotImportant, "only once");

        let mut view = TaskListView::new();
        view.populate(&board);
        view.populate(&board);

        assert_eq!(
            view.snapshot(Quadrant::NotUrgentNotImportant),
            ["only once"]
        );
    }

    #[test]
    fn relocate_moves_widget_to_end_of_target() {
        let mut view = TaskListView::new();
        let moving = Task::new("moving");
        let staying = Task::new("staying");
        view.append(Quadrant::UrgentImportant, &moving);
        view.append(Quadrant::NotUrgentImportant, &staying);

        assert!(view.relocate(moving.id, Quadrant::NotUrgentImportant));
        assert!(view.widgets(Quadrant::UrgentImportant).is_empty());
        assert_eq!(
            view.snapshot(Quadrant::NotUrgentImportant),
            ["staying", "moving"]
        );

        let stale = Task::new("never added");
        assert!(!view.relocate(stale.id, Quadrant::UrgentImportant));
    }
}
