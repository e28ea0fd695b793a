//! Core types and definitions for the arena planner.
//!
//! This crate defines the vocabulary shared across the workspace:
//! targets, arena state, mutation commands, the import payload schema,
//! insight views, and constants. It has no runtime state of its own.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod payload;
pub mod state;
pub mod target;
pub mod types;
