//! Viewer HTTP server.
//!
//! Every request to `/` performs one feed load and responds with the
//! rendered page, including failed loads (the page shows the error).

use std::future::Future;
use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::feed_page::FeedPage;
use super::page::RenderPage;
use crate::application::FeedViewer;
use crate::error::{Error, Result};

/// Shared state available to all route handlers.
pub struct AppState {
    pub viewer: FeedViewer,
}

/// Build the viewer router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(feed))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /
async fn feed(State(state): State<Arc<AppState>>) -> RenderPage<FeedPage> {
    RenderPage(FeedPage::new(state.viewer.load().await))
}

/// GET /health
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Serve the viewer on an already-bound listener until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections.
pub async fn serve<F>(listener: TcpListener, state: Arc<AppState>, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "Viewer listening");
    }
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| Error::Server(e.to_string()))
}
