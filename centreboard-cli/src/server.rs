//! Web server for the Centreboard UI and directory API
//!
//! Serves the embedded editor UI and the read-only centre directory
//! REST API.

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, Response, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use rust_embed::RustEmbed;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api;
use crate::directory::CentreDirectory;

/// Embedded UI assets (compiled WASM app)
#[derive(RustEmbed)]
#[folder = "../ui/dist/"]
struct UiAssets;

/// Server state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<CentreDirectory>,
}

/// Start the web server
pub async fn start_server(
    port: u16,
    directory: CentreDirectory,
) -> anyhow::Result<tokio::task::JoinHandle<anyhow::Result<()>>> {
    let state = Arc::new(AppState {
        directory: Arc::new(directory),
    });

    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Centreboard listening on {}", addr);

    let handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .map_err(|e| anyhow::anyhow!("Server error: {}", e))
    });

    Ok(handle)
}

/// Build the full application router
///
/// Split out from [`start_server`] so integration tests can drive the
/// router without binding a socket.
pub fn build_router(state: Arc<AppState>) -> Router {
    // Read-only public API; permissive CORS is fine
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // API info endpoint
        .route("/api/info", get(api_info))
        // Directory API
        .nest("/api/v1", api::create_api_router())
        // Serve UI assets - index.html for root
        .route("/", get(serve_index))
        // Use fallback for all other paths (static files and SPA routing)
        .fallback(serve_static)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// API info endpoint - returns version and directory size for the UI
async fn api_info(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let info = serde_json::json!({
        "version": env!("CARGO_PKG_VERSION"),
        "centre_count": state.directory.len(),
    });
    (StatusCode::OK, axum::Json(info))
}

/// Serve index.html
async fn serve_index() -> impl IntoResponse {
    serve_file("index.html")
}

/// Serve static files from embedded assets (fallback handler)
async fn serve_static(req: Request<Body>) -> impl IntoResponse {
    let path = req.uri().path().to_string();
    tracing::debug!("Fallback handler called for path: {}", path);

    // Try the exact path first
    if let Some(response) = try_serve_file(&path) {
        return response.into_response();
    }

    // For SPA routing, serve index.html for non-asset paths
    if !path.contains('.') {
        return serve_file("index.html").into_response();
    }

    // 404 for missing assets
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

fn try_serve_file(path: &str) -> Option<Response<Body>> {
    let path = path.trim_start_matches('/');
    UiAssets::get(path).map(|content| {
        let mime = mime_guess::from_path(path)
            .first_or_octet_stream()
            .to_string();

        Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, mime)
            .header(header::CACHE_CONTROL, "public, max-age=3600")
            .body(Body::from(content.data.to_vec()))
            .unwrap()
    })
}

fn serve_file(path: &str) -> Response<Body> {
    match UiAssets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path)
                .first_or_octet_stream()
                .to_string();

            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, mime)
                .body(Body::from(content.data.to_vec()))
                .unwrap()
        }
        None => Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::from("Not Found"))
            .unwrap(),
    }
}
