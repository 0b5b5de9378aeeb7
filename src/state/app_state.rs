//! Main application state.
//!
//! One explicit context struct owns every shared piece — the engine, the
//! sound coordinator, and the upstream HTTP client — and is handed by `Arc`
//! to the router and the countdown task. No module-level globals.

use std::sync::{Arc, Mutex as StdMutex, MutexGuard};
use std::time::Instant;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::engine::PomodoroEngine;
use crate::sound::{try_create_player, CuePlayer, SoundCoordinator, SoundDirector};
use crate::types::Settings;

/// Shared application state.
pub struct AppState {
    /// Countdown engine; the tick task and the handlers serialize through
    /// this lock
    pub engine: Arc<Mutex<PomodoroEngine>>,
    /// Sound selection, shared with the engine's playback director
    pub sound: Arc<StdMutex<SoundCoordinator>>,
    /// Client reused by both proxy endpoints
    pub http: reqwest::Client,
    /// Server start, for uptime reporting
    pub start_time: Instant,
}

impl AppState {
    /// Creates the full state graph: coordinator, cue player (if audio is
    /// available), playback director, and engine.
    pub fn new(settings: Settings, long_break_interval: u32, no_sound: bool) -> Arc<Self> {
        let sound = Arc::new(StdMutex::new(SoundCoordinator::new()));
        let cue = try_create_player(no_sound).map(|player| player as Arc<dyn CuePlayer>);
        let director = Arc::new(SoundDirector::new(Arc::clone(&sound), cue));
        let engine = PomodoroEngine::new(settings, director)
            .with_long_break_interval(long_break_interval);

        Arc::new(Self {
            engine: Arc::new(Mutex::new(engine)),
            sound,
            http: reqwest::Client::new(),
            start_time: Instant::now(),
        })
    }

    /// Creates the state from parsed server configuration.
    pub fn from_config(config: &Config) -> Arc<Self> {
        Self::new(
            config.initial_settings(),
            config.long_break_interval,
            config.no_sound,
        )
    }

    /// Locks the sound coordinator, recovering from poisoning.
    pub fn sound(&self) -> MutexGuard<'_, SoundCoordinator> {
        self.sound
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Seconds since the server started.
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("start_time", &self.start_time)
            .finish_non_exhaustive()
    }
}
