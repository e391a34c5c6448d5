//! Storage adapter layer.
//!
//! # Responsibility
//! - Define the board persistence contract used by services.
//! - Isolate SQLite and JSON codec details from orchestration code.
//!
//! # Invariants
//! - Read paths reject malformed persisted state instead of masking it;
//!   the lenient fallback to an empty board is a service-layer policy.

pub mod board_store;
