//! focusd - HTTP backend for a Pomodoro focus timer.
//!
//! Serves the browser frontend's API:
//! - countdown engine (focus / short break / long break cycling)
//! - user settings with clamped durations
//! - ambient sound / external media coordination
//! - chat-consultant and video-search proxies

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use focusd::api::create_router;
use focusd::config::Config;
use focusd::engine::countdown_task;
use focusd::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing(&config);

    info!("Starting focusd v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: host={}, port={}, focus={}min, short-break={}min, long-break={}min, interval={}",
        config.host,
        config.port,
        config.focus,
        config.short_break,
        config.long_break,
        config.long_break_interval
    );

    let state = AppState::from_config(&config);

    // One-second countdown tick; active only while the session is running
    tokio::spawn(countdown_task(Arc::clone(&state.engine)));

    let app = create_router(Arc::clone(&state));

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET    /health             - Health check");
    info!("  GET    /api/timer          - Current session");
    info!("  POST   /api/timer/start    - Start the countdown");
    info!("  POST   /api/timer/pause    - Pause the countdown");
    info!("  POST   /api/timer/reset    - Reset the current phase");
    info!("  POST   /api/timer/mode     - Switch focus/break mode");
    info!("  GET    /api/settings       - Read settings");
    info!("  PATCH  /api/settings       - Update settings (clamped)");
    info!("  GET    /api/sound          - Sound selection snapshot");
    info!("  POST   /api/sound/ambient  - Select an ambient soundscape");
    info!("  POST   /api/sound/media    - Apply an external media URL");
    info!("  DELETE /api/sound/media    - Close external media");
    info!("  POST   /api/sound/play     - Set or toggle playback");
    info!("  POST   /api/consultant     - Chat-completion proxy");
    info!("  GET    /api/youtube/search - Video search proxy");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for logging.
fn init_tracing(config: &Config) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("focusd={},tower_http=info", config.log_level()))
    });

    fmt().with_env_filter(filter).init();
}

/// Completes when the process receives ctrl-c.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
