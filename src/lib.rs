//! Focus timer server library.
//!
//! This library provides the core functionality for the focusd server:
//! - Pomodoro countdown engine with focus/break cycling
//! - Bounds-clamped settings store
//! - Sound coordination (ambient soundscapes vs. external media) and the
//!   completion cue
//! - HTTP API: timer/settings/sound endpoints plus the chat-consultant and
//!   video-search proxies

pub mod api;
pub mod config;
pub mod engine;
pub mod sound;
pub mod state;
pub mod types;

// Re-export commonly used types for convenience
pub use config::Config;
pub use engine::{countdown_task, PomodoroEngine, DEFAULT_LONG_BREAK_INTERVAL};
pub use state::AppState;
pub use types::{Settings, TimerMode, TimerSession, TimerStatus};

// Re-export sound types
pub use sound::{
    try_create_player, AmbientSound, CuePlayer, MockCuePlayer, Playback, PlaybackCall,
    RecordingPlayback, RodioCuePlayer, SoundCoordinator, SoundDirector, SoundError,
};
