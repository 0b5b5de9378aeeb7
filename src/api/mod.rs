//! HTTP API module.
//!
//! This module contains the axum router, the timer/settings/sound endpoint
//! handlers, the two upstream proxy endpoints, and the error mapping.

pub mod consultant;
pub mod error;
pub mod handlers;
pub mod responses;
pub mod youtube;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/timer", get(timer_status_handler))
        .route("/api/timer/start", post(timer_start_handler))
        .route("/api/timer/pause", post(timer_pause_handler))
        .route("/api/timer/reset", post(timer_reset_handler))
        .route("/api/timer/mode", post(timer_mode_handler))
        .route(
            "/api/settings",
            get(settings_get_handler).patch(settings_update_handler),
        )
        .route("/api/sound", get(sound_status_handler))
        .route("/api/sound/ambient", post(sound_ambient_handler))
        .route(
            "/api/sound/media",
            post(sound_media_apply_handler).delete(sound_media_close_handler),
        )
        .route("/api/sound/play", post(sound_play_handler))
        .route("/api/consultant", post(consultant::consultant_handler))
        .route("/api/youtube/search", get(youtube::search_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
