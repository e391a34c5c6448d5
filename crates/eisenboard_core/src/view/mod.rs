//! Display projections of the board.
//!
//! # Responsibility
//! - Mirror the board into the widget lists the UI surface renders.
//! - Keep element-id conventions in one place.

pub mod task_list;
