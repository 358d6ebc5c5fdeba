//! API endpoints for the collection centre directory
//!
//! Provides the read-only REST surface:
//! - Centre listing (summaries for the selection UI)
//! - Centre detail lookup by slug
//!
//! There are no mutation endpoints; the backing directory is bundled
//! with the binary.

pub mod centres;

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::AppState;

/// Create the API router with the directory endpoints
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/centres", get(centres::list_centres))
        .route("/centre/:slug", get(centres::get_centre))
}
