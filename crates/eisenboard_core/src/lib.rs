//! Core domain logic for the Eisenboard quadrant task board.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::board::{Board, BoardError};
pub use model::quadrant::Quadrant;
pub use model::task::{Task, TaskId};
pub use service::board_service::BoardService;
pub use service::drag_controller::{DragController, DragState};
pub use service::panel_controller::PanelController;
pub use store::board_store::{BoardStore, SqliteBoardStore, StoreError, StoreResult};
pub use view::task_list::{list_element_id, task_element_id, TaskListView, TaskWidget};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
