//! HTTP surface for the docket service.
//!
//! # Design
//! The router is built from an explicit `AppState` so every test can run
//! against its own isolated store and render destination. Handlers are thin:
//! they extract, call into `docket_core`, and let `HttpError` decide the
//! response shape.

pub mod config;
pub mod error;
mod handlers;
pub mod telemetry;

use std::{future::Future, sync::Arc};

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use docket_core::{DocumentRenderer, TodoStore};
use tokio::net::TcpListener;

use crate::config::Settings;

/// Default cap on `/upload` request bodies.
pub const DEFAULT_UPLOAD_LIMIT: usize = 8 << 20;

#[derive(Debug, Clone)]
pub struct AppState {
    pub store: TodoStore,
    pub renderer: Arc<DocumentRenderer>,
    pub upload_limit: usize,
}

impl AppState {
    pub fn new(store: TodoStore, renderer: DocumentRenderer) -> Self {
        Self {
            store,
            renderer: Arc::new(renderer),
            upload_limit: DEFAULT_UPLOAD_LIMIT,
        }
    }

    pub fn with_upload_limit(mut self, bytes: usize) -> Self {
        self.upload_limit = bytes;
        self
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let store = if settings.todos.seed {
            TodoStore::seeded()
        } else {
            TodoStore::new()
        };
        let renderer = DocumentRenderer::new(&settings.render.output_path);
        Self::new(store, renderer).with_upload_limit(settings.uploads.max_request_bytes.get())
    }
}

pub fn app(state: AppState) -> Router {
    let upload_limit = state.upload_limit;
    Router::new()
        .route("/", get(handlers::index))
        .route("/todos", get(handlers::list_todos).post(handlers::add_todo))
        .route(
            "/todos/{id}",
            get(handlers::get_todo).patch(handlers::toggle_todo),
        )
        .route(
            "/upload",
            post(handlers::upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    run_until(listener, state, std::future::pending()).await
}

/// Serve until `shutdown` resolves, then drain in-flight requests.
pub async fn run_until<F>(
    listener: TcpListener,
    state: AppState,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown)
        .await
}
