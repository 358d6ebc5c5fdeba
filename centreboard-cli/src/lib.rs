//! Centreboard Library
//!
//! Core modules for the collection centre directory service.

pub mod api;
pub mod config;
pub mod directory;
pub mod server;

// Re-export AppState for convenience
pub use server::AppState;
