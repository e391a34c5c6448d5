//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate board mutations and persistence into use-case level APIs.
//! - Keep UI layers decoupled from storage details.

pub mod board_service;
pub mod drag_controller;
pub mod panel_controller;
