//! HTTP request handling for the instrumentation interface
//!
//! One route: the root path answers GET and POST identically with the
//! current poll result as JSON. Everything else is a plain-text 404.

use crate::server::{verdict, WatchSet};
use crate::types::PollResponse;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Shared handler state: the watch set behind a mutex so at most one
/// poll-and-respond cycle runs at a time. Unserialized polls would corrupt
/// per-source offset tracking and duplicate or drop lines.
#[derive(Clone)]
pub struct AppState {
    watch: Arc<Mutex<WatchSet>>,
}

impl AppState {
    /// Wrap an opened watch set for sharing across connections.
    pub fn new(watch: WatchSet) -> Self {
        Self {
            watch: Arc::new(Mutex::new(watch)),
        }
    }
}

/// Build the instrumentation router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        // POST bodies are accepted and ignored; both methods poll.
        .route("/", get(poll).post(poll))
        .fallback(not_found)
        .with_state(state)
}

async fn poll(State(state): State<AppState>) -> Response {
    let mut watch = state.watch.lock().await;
    match watch.poll_all().await {
        Ok(logs) => {
            let verdict = verdict::evaluate(&logs);
            debug!("poll cycle: {} sources, verdict {}", logs.len(), verdict);
            Json(PollResponse { logs, verdict }).into_response()
        }
        Err(e) => {
            warn!("poll cycle failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/plain")],
        "Not found\n",
    )
        .into_response()
}
