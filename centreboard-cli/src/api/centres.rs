//! Collection centre API endpoints
//!
//! Read-only handlers over the injected [`CentreDirectory`]. The slug
//! route is constrained to `[a-zA-Z0-9-]+`; anything else is treated
//! as a routing miss (plain 404) rather than a validation error, so a
//! malformed path is indistinguishable from an unknown route.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::{debug, info};

use centreboard_shared::{is_valid_slug, ErrorBody};

use crate::directory::DirectoryError;
use crate::AppState;

/// List all centre summaries, in fixed insertion order
pub async fn list_centres(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let summaries = state.directory.summaries();
    debug!("Listing {} centres", summaries.len());
    (StatusCode::OK, Json(summaries.to_vec()))
}

/// Get the detail record for a centre slug
///
/// Returns 404 with a structured `centre_not_found` body when the slug
/// has no detail record. A summary-only slug is the normal case here,
/// not an internal error.
pub async fn get_centre(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    if !is_valid_slug(&slug) {
        debug!("Routing miss for malformed slug: {:?}", slug);
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    }

    match state.directory.detail(&slug) {
        Ok(detail) => (StatusCode::OK, Json(detail.clone())).into_response(),
        Err(DirectoryError::NotFound { slug }) => {
            info!("No detail record for centre: {}", slug);
            (
                StatusCode::NOT_FOUND,
                Json(ErrorBody::centre_not_found(&slug)),
            )
                .into_response()
        }
    }
}
