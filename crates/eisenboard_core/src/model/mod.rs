//! Domain model for the quadrant task board.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Keep the in-memory `Board` as the single source of truth; display and
//!   storage are projections of it.
//!
//! # Invariants
//! - Every task belongs to exactly one quadrant at any instant.
//! - The quadrant set is fixed and never grows or shrinks at runtime.

pub mod board;
pub mod quadrant;
pub mod task;
