//! HTTP endpoint handlers for the timer, settings, and sound surfaces.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use crate::sound::{AmbientSound, SoundCoordinator};
use crate::state::AppState;
use crate::types::{Settings, TimerMode, TimerSession};

use super::error::ApiError;
use super::responses::{HealthResponse, TimerResponse};

// ============================================================================
// Health
// ============================================================================

/// Handle GET /health.
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(state.uptime_seconds()))
}

// ============================================================================
// Timer
// ============================================================================

/// Handle GET /api/timer - current session snapshot.
pub async fn timer_status_handler(State(state): State<Arc<AppState>>) -> Json<TimerSession> {
    let engine = state.engine.lock().await;
    Json(engine.session().clone())
}

/// Handle POST /api/timer/start.
pub async fn timer_start_handler(State(state): State<Arc<AppState>>) -> Json<TimerResponse> {
    let mut engine = state.engine.lock().await;
    engine.start();
    info!("Timer start requested");
    Json(TimerResponse::ok("Timer started", engine.session().clone()))
}

/// Handle POST /api/timer/pause.
pub async fn timer_pause_handler(State(state): State<Arc<AppState>>) -> Json<TimerResponse> {
    let mut engine = state.engine.lock().await;
    engine.pause();
    info!("Timer pause requested");
    Json(TimerResponse::ok("Timer paused", engine.session().clone()))
}

/// Handle POST /api/timer/reset.
pub async fn timer_reset_handler(State(state): State<Arc<AppState>>) -> Json<TimerResponse> {
    let mut engine = state.engine.lock().await;
    engine.reset();
    info!("Timer reset requested");
    Json(TimerResponse::ok("Timer reset", engine.session().clone()))
}

/// Request body for POST /api/timer/mode.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchModeRequest {
    pub mode: TimerMode,
    #[serde(default)]
    pub auto_start: bool,
}

/// Handle POST /api/timer/mode.
pub async fn timer_mode_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SwitchModeRequest>,
) -> Json<TimerResponse> {
    let mut engine = state.engine.lock().await;
    engine.switch_mode(request.mode, request.auto_start);
    info!(mode = request.mode.as_str(), "Timer mode switched");
    Json(TimerResponse::ok(
        format!("Switched to {}", request.mode.as_str()),
        engine.session().clone(),
    ))
}

// ============================================================================
// Settings
// ============================================================================

/// Handle GET /api/settings.
pub async fn settings_get_handler(State(state): State<Arc<AppState>>) -> Json<Settings> {
    let engine = state.engine.lock().await;
    Json(engine.settings().clone())
}

/// Request body for PATCH /api/settings.
///
/// Durations arrive as raw JSON numbers; fractional or out-of-range values
/// are rounded and clamped by the settings store, never rejected.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub focus_minutes: Option<f64>,
    pub short_break_minutes: Option<f64>,
    pub long_break_minutes: Option<f64>,
    pub auto_start_next: Option<bool>,
}

/// Handle PATCH /api/settings.
pub async fn settings_update_handler(
    State(state): State<Arc<AppState>>,
    Json(update): Json<SettingsUpdate>,
) -> Json<Settings> {
    let mut engine = state.engine.lock().await;
    let mut settings = engine.settings().clone();

    if let Some(minutes) = update.focus_minutes {
        settings.set_focus_minutes(minutes);
    }
    if let Some(minutes) = update.short_break_minutes {
        settings.set_short_break_minutes(minutes);
    }
    if let Some(minutes) = update.long_break_minutes {
        settings.set_long_break_minutes(minutes);
    }
    if let Some(auto) = update.auto_start_next {
        settings.set_auto_start_next(auto);
    }

    engine.update_settings(settings);
    info!("Settings updated");
    Json(engine.settings().clone())
}

// ============================================================================
// Sound
// ============================================================================

/// Handle GET /api/sound - coordinator snapshot.
pub async fn sound_status_handler(State(state): State<Arc<AppState>>) -> Json<SoundCoordinator> {
    Json(state.sound().clone())
}

/// Request body for POST /api/sound/ambient.
#[derive(Debug, Deserialize)]
pub struct AmbientRequest {
    pub sound: AmbientSound,
}

/// Handle POST /api/sound/ambient.
///
/// Refused while external media is open; the browser shows the message as an
/// informational notice.
pub async fn sound_ambient_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AmbientRequest>,
) -> Result<Json<SoundCoordinator>, ApiError> {
    let mut sound = state.sound();
    if sound.is_media_active() {
        return Err(ApiError::Conflict(
            "Close external media before selecting an ambient sound".to_string(),
        ));
    }
    sound.select_ambient(request.sound);
    Ok(Json(sound.clone()))
}

/// Request body for POST /api/sound/media.
#[derive(Debug, Deserialize)]
pub struct MediaRequest {
    pub url: String,
}

/// Handle POST /api/sound/media.
pub async fn sound_media_apply_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MediaRequest>,
) -> Result<Json<SoundCoordinator>, ApiError> {
    if request.url.trim().is_empty() {
        return Err(ApiError::BadRequest("url is required".to_string()));
    }
    let mut sound = state.sound();
    sound.apply_media_url(request.url);
    Ok(Json(sound.clone()))
}

/// Handle DELETE /api/sound/media.
pub async fn sound_media_close_handler(
    State(state): State<Arc<AppState>>,
) -> Json<SoundCoordinator> {
    let mut sound = state.sound();
    sound.close_media();
    Json(sound.clone())
}

/// Request body for POST /api/sound/play.
#[derive(Debug, Default, Deserialize)]
pub struct PlayRequest {
    /// Explicit playing state; omitted means toggle
    pub on: Option<bool>,
}

/// Handle POST /api/sound/play.
pub async fn sound_play_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PlayRequest>,
) -> Json<SoundCoordinator> {
    let mut sound = state.sound();
    sound.play(request.on);
    Json(sound.clone())
}
