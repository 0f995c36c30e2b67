//! HTTP surface: `GET /health` and `POST /analyze`, thin adapters over
//! [`promptlint_core::Analyzer`].

mod error;
mod handlers;
mod server;

pub use error::{ApiError, ApiResult};
pub use server::serve;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use promptlint_core::Analyzer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
}

impl AppState {
    pub fn new(analyzer: Analyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/analyze", post(handlers::analyze))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        .layer(TraceLayer::new_for_http())
}
