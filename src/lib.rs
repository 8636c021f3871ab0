//! corona-city library interface
//!
//! Exposes the application state and router for integration testing.

pub mod api;
pub mod cities;
pub mod config;
pub mod error;
pub mod services;

pub use crate::error::{ApiError, ApiResult};

use axum::Router;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

use crate::services::{ImageProvider, StatsProvider};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// National statistics source
    pub stats: Arc<dyn StatsProvider>,
    /// City image lookup
    pub images: Arc<dyn ImageProvider>,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
    /// Last upstream error for diagnostics
    pub last_error: Arc<RwLock<Option<String>>>,
}

impl AppState {
    pub fn new(stats: Arc<dyn StatsProvider>, images: Arc<dyn ImageProvider>) -> Self {
        Self {
            stats,
            images,
            startup_time: Utc::now(),
            last_error: Arc::new(RwLock::new(None)),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        // UI routes (HTML page + script)
        .merge(api::ui_routes())
        // API routes
        .merge(api::summary_routes())
        .route("/api/buildinfo", get(api::get_build_info))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
