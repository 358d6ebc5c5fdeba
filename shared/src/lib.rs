//! Shared types for the Centreboard UI and server
//!
//! This crate contains common types used across the platform:
//! - Collection centre wire types (summaries, detail records)
//! - Block configuration and the editor state machine

pub mod block;
pub mod types;

pub use block::*;
pub use types::*;
