//! Countdown engine for the focus timer.
//!
//! This module provides the core state machine:
//! - Status transitions (idle → running → paused/finished)
//! - Mode transitions (focus → short/long break → focus)
//! - Countdown driven by a 1-second tokio interval
//! - Cycle counting with a long break every Nth completed focus phase
//! - Focus-linked playback signals through the injected [`Playback`] seam

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::debug;

use crate::sound::Playback;
use crate::types::{Settings, TimerMode, TimerSession, TimerStatus};

/// Completed focus phases between long breaks.
pub const DEFAULT_LONG_BREAK_INTERVAL: u32 = 4;

// ============================================================================
// PomodoroEngine
// ============================================================================

/// The countdown state machine.
///
/// Every operation is a total function over the engine's state: invalid
/// requests (pausing an idle timer, starting a running one) are no-ops, and
/// nothing here returns an error. Playback side effects go through the
/// injected [`Playback`] capability and are fire-and-forget.
pub struct PomodoroEngine {
    /// Current countdown state
    session: TimerSession,
    /// Current user settings
    settings: Settings,
    /// Focus phases per long break
    long_break_interval: u32,
    /// Playback signal sink
    playback: Arc<dyn Playback>,
}

impl PomodoroEngine {
    /// Creates a new engine in `focus`/`idle` with the focus duration loaded.
    pub fn new(settings: Settings, playback: Arc<dyn Playback>) -> Self {
        Self {
            session: TimerSession::new(&settings),
            settings,
            long_break_interval: DEFAULT_LONG_BREAK_INTERVAL,
            playback,
        }
    }

    /// Overrides how many focus phases sit between long breaks (min 1).
    pub fn with_long_break_interval(mut self, interval: u32) -> Self {
        self.long_break_interval = interval.max(1);
        self
    }

    /// Returns the current session state.
    pub fn session(&self) -> &TimerSession {
        &self.session
    }

    /// Returns the current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns a mutable reference to the session (for testing).
    #[cfg(test)]
    pub fn session_mut(&mut self) -> &mut TimerSession {
        &mut self.session
    }

    /// Starts (or resumes) the countdown.
    ///
    /// No-op when already running. Entering a running focus phase signals
    /// ambient playback to start.
    pub fn start(&mut self) {
        if self.session.status == TimerStatus::Running {
            return;
        }
        self.session.status = TimerStatus::Running;
        debug!(mode = self.session.mode.as_str(), "countdown started");

        if self.session.mode == TimerMode::Focus {
            self.playback.start_ambient();
        }
    }

    /// Pauses the countdown.
    ///
    /// Only meaningful from `running`; idempotent otherwise. Pausing a focus
    /// phase signals ambient playback to stop.
    pub fn pause(&mut self) {
        if self.session.status != TimerStatus::Running {
            return;
        }
        self.session.status = TimerStatus::Paused;
        debug!(
            remaining = self.session.time_left_seconds,
            "countdown paused"
        );

        if self.session.mode == TimerMode::Focus {
            self.playback.stop_ambient();
        }
    }

    /// Resets the countdown for the current mode.
    ///
    /// Restores the configured duration, returns to `idle`, and stops
    /// focus-linked playback. Never changes the cycle count.
    pub fn reset(&mut self) {
        self.session.status = TimerStatus::Idle;
        self.session.time_left_seconds = self.settings.duration_seconds(self.session.mode);
        debug!(mode = self.session.mode.as_str(), "countdown reset");

        self.playback.stop_ambient();
    }

    /// Switches to a new mode.
    ///
    /// Loads the new mode's configured duration and either starts the
    /// countdown immediately (`auto_start`) or leaves it idle. Ambient
    /// playback starts only when auto-starting into focus and stops in every
    /// other case. Never changes the cycle count — cycles are counted on
    /// natural completion only.
    pub fn switch_mode(&mut self, new_mode: TimerMode, auto_start: bool) {
        self.session.mode = new_mode;
        self.session.status = if auto_start {
            TimerStatus::Running
        } else {
            TimerStatus::Idle
        };
        self.session.time_left_seconds = self.settings.duration_seconds(new_mode);
        debug!(
            mode = new_mode.as_str(),
            auto_start, "switched timer mode"
        );

        if new_mode == TimerMode::Focus && auto_start {
            self.playback.start_ambient();
        } else {
            self.playback.stop_ambient();
        }
    }

    /// Replaces the settings.
    ///
    /// When any of the three durations changed and the countdown is not
    /// running, the remaining time is recomputed from the new duration for
    /// the current mode. An in-flight countdown is never altered.
    pub fn update_settings(&mut self, settings: Settings) {
        let durations_changed = settings.durations_differ(&self.settings);
        self.settings = settings;

        if durations_changed && self.session.status != TimerStatus::Running {
            self.session.time_left_seconds = self.settings.duration_seconds(self.session.mode);
            debug!(
                remaining = self.session.time_left_seconds,
                "remaining time reloaded after settings change"
            );
        }
    }

    /// Advances the countdown by one second.
    ///
    /// Only acts while `running`. When the decrement would reach zero, the
    /// remaining time clamps to 0, the status passes through `finished`, and
    /// the completion is resolved before this call returns — `finished` is
    /// never observable between ticks.
    pub fn tick(&mut self) {
        if self.session.status != TimerStatus::Running {
            return;
        }

        if self.session.time_left_seconds > 1 {
            self.session.time_left_seconds -= 1;
            return;
        }

        self.session.time_left_seconds = 0;
        self.session.status = TimerStatus::Finished;
        self.handle_completion();
    }

    /// Resolves a `finished` status into the next phase.
    ///
    /// Fires exactly once per transition into `finished`.
    fn handle_completion(&mut self) {
        self.playback.completion_cue();

        let auto_start = self.settings.auto_start_next();
        if self.session.mode == TimerMode::Focus {
            self.session.cycle_count += 1;
            let next = if self.session.cycle_count % self.long_break_interval == 0 {
                TimerMode::LongBreak
            } else {
                TimerMode::ShortBreak
            };
            debug!(
                cycle = self.session.cycle_count,
                next = next.as_str(),
                "focus phase completed"
            );
            self.switch_mode(next, auto_start);
        } else {
            debug!(mode = self.session.mode.as_str(), "break completed");
            self.switch_mode(TimerMode::Focus, auto_start);
        }
    }
}

impl std::fmt::Debug for PomodoroEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PomodoroEngine")
            .field("session", &self.session)
            .field("settings", &self.settings)
            .field("long_break_interval", &self.long_break_interval)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Countdown task
// ============================================================================

/// Background task driving the one-second tick.
///
/// The engine's mutex serializes ticks against API-driven transitions, so a
/// tick fully resolves (including any completion handling) before the next
/// one or any command can run. Ticks while the countdown is not running are
/// no-ops.
pub async fn countdown_task(engine: Arc<Mutex<PomodoroEngine>>) {
    let mut ticker = interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;
        engine.lock().await.tick();
    }
}

// ============================================================================
// Tests
// ============================================================================
