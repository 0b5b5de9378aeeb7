//! Core data types for the focus timer.
//!
//! This module defines the data structures used for:
//! - The countdown session (mode/status axes plus remaining time)
//! - User-configurable settings with bounds-clamped setters

use serde::{Deserialize, Serialize};

// ============================================================================
// TimerMode
// ============================================================================

/// The phase a session counts down through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimerMode {
    /// A focused work period
    Focus,
    /// A short break between focus periods
    ShortBreak,
    /// A long break after several completed focus periods
    LongBreak,
}

impl TimerMode {
    /// Returns the wire-format string for the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerMode::Focus => "focus",
            TimerMode::ShortBreak => "short-break",
            TimerMode::LongBreak => "long-break",
        }
    }

    /// Returns true for either break mode.
    pub fn is_break(&self) -> bool {
        matches!(self, TimerMode::ShortBreak | TimerMode::LongBreak)
    }
}

impl Default for TimerMode {
    fn default() -> Self {
        TimerMode::Focus
    }
}

// ============================================================================
// TimerStatus
// ============================================================================

/// Whether the countdown is advancing.
///
/// `Finished` is transient: it exists only inside the tick that produced it
/// and is resolved to the next mode's `Idle` or `Running` before the tick
/// returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerStatus {
    /// Countdown has not started (or was reset)
    Idle,
    /// Countdown is advancing one second per tick
    Running,
    /// Countdown is suspended, remaining time preserved
    Paused,
    /// Countdown reached zero this tick
    Finished,
}

impl TimerStatus {
    /// Returns the wire-format string for the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerStatus::Idle => "idle",
            TimerStatus::Running => "running",
            TimerStatus::Paused => "paused",
            TimerStatus::Finished => "finished",
        }
    }
}

impl Default for TimerStatus {
    fn default() -> Self {
        TimerStatus::Idle
    }
}

// ============================================================================
// Settings
// ============================================================================

/// Upper bound for the focus duration in minutes.
pub const FOCUS_MINUTES_MAX: u32 = 120;
/// Upper bound for the short break duration in minutes.
pub const SHORT_BREAK_MINUTES_MAX: u32 = 60;
/// Upper bound for the long break duration in minutes.
pub const LONG_BREAK_MINUTES_MAX: u32 = 120;

/// User-configurable durations plus the auto-start flag.
///
/// A pure bounded-value container: each setter rounds its input to the
/// nearest integer and clamps it into the documented range. Out-of-range or
/// fractional inputs are silently adjusted, never rejected — no operation on
/// this type fails.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    focus_minutes: u32,
    short_break_minutes: u32,
    long_break_minutes: u32,
    auto_start_next: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            focus_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 15,
            auto_start_next: false,
        }
    }
}

impl Settings {
    /// Focus duration in minutes.
    pub fn focus_minutes(&self) -> u32 {
        self.focus_minutes
    }

    /// Short break duration in minutes.
    pub fn short_break_minutes(&self) -> u32 {
        self.short_break_minutes
    }

    /// Long break duration in minutes.
    pub fn long_break_minutes(&self) -> u32 {
        self.long_break_minutes
    }

    /// Whether a completed phase starts the next one immediately.
    pub fn auto_start_next(&self) -> bool {
        self.auto_start_next
    }

    /// Sets the focus duration, rounded and clamped to `[1, 120]` minutes.
    pub fn set_focus_minutes(&mut self, minutes: f64) {
        self.focus_minutes = clamp_minutes(minutes, FOCUS_MINUTES_MAX);
    }

    /// Sets the short break duration, rounded and clamped to `[1, 60]` minutes.
    pub fn set_short_break_minutes(&mut self, minutes: f64) {
        self.short_break_minutes = clamp_minutes(minutes, SHORT_BREAK_MINUTES_MAX);
    }

    /// Sets the long break duration, rounded and clamped to `[1, 120]` minutes.
    pub fn set_long_break_minutes(&mut self, minutes: f64) {
        self.long_break_minutes = clamp_minutes(minutes, LONG_BREAK_MINUTES_MAX);
    }

    /// Sets the auto-start flag.
    pub fn set_auto_start_next(&mut self, value: bool) {
        self.auto_start_next = value;
    }

    /// Returns the configured duration for a mode, in seconds.
    pub fn duration_seconds(&self, mode: TimerMode) -> u32 {
        let minutes = match mode {
            TimerMode::Focus => self.focus_minutes,
            TimerMode::ShortBreak => self.short_break_minutes,
            TimerMode::LongBreak => self.long_break_minutes,
        };
        minutes * 60
    }

    /// Returns true if any of the three durations differs from `other`.
    pub fn durations_differ(&self, other: &Settings) -> bool {
        self.focus_minutes != other.focus_minutes
            || self.short_break_minutes != other.short_break_minutes
            || self.long_break_minutes != other.long_break_minutes
    }
}

/// Rounds to the nearest whole minute and clamps into `[1, max]`.
fn clamp_minutes(minutes: f64, max: u32) -> u32 {
    if !minutes.is_finite() {
        return 1;
    }
    let rounded = minutes.round();
    if rounded <= 1.0 {
        1
    } else if rounded >= max as f64 {
        max
    } else {
        rounded as u32
    }
}

// ============================================================================
// TimerSession
// ============================================================================

/// The countdown state for one browser session.
///
/// The session lives for the lifetime of the server process and is never
/// serialized to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerSession {
    /// Which configured duration applies
    pub mode: TimerMode,
    /// Whether the countdown advances
    pub status: TimerStatus,
    /// Seconds remaining in the current phase
    pub time_left_seconds: u32,
    /// Completed focus phases; decides when a long break is due
    pub cycle_count: u32,
}

impl TimerSession {
    /// Creates a fresh session in `focus`/`idle` with the configured focus
    /// duration loaded.
    pub fn new(settings: &Settings) -> Self {
        Self {
            mode: TimerMode::Focus,
            status: TimerStatus::Idle,
            time_left_seconds: settings.duration_seconds(TimerMode::Focus),
            cycle_count: 0,
        }
    }

    /// Returns true while the countdown is advancing.
    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Running
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // TimerMode Tests
    // ------------------------------------------------------------------------

    mod timer_mode_tests {
        use super::*;

        #[test]
        fn test_default_is_focus() {
            assert_eq!(TimerMode::default(), TimerMode::Focus);
        }

        #[test]
        fn test_as_str() {
            assert_eq!(TimerMode::Focus.as_str(), "focus");
            assert_eq!(TimerMode::ShortBreak.as_str(), "short-break");
            assert_eq!(TimerMode::LongBreak.as_str(), "long-break");
        }

        #[test]
        fn test_is_break() {
            assert!(!TimerMode::Focus.is_break());
            assert!(TimerMode::ShortBreak.is_break());
            assert!(TimerMode::LongBreak.is_break());
        }

        #[test]
        fn test_serialize_kebab_case() {
            let json = serde_json::to_string(&TimerMode::ShortBreak).unwrap();
            assert_eq!(json, "\"short-break\"");

            let mode: TimerMode = serde_json::from_str("\"long-break\"").unwrap();
            assert_eq!(mode, TimerMode::LongBreak);
        }
    }

    // ------------------------------------------------------------------------
    // TimerStatus Tests
    // ------------------------------------------------------------------------

    mod timer_status_tests {
        use super::*;

        #[test]
        fn test_default_is_idle() {
            assert_eq!(TimerStatus::default(), TimerStatus::Idle);
        }

        #[test]
        fn test_as_str() {
            assert_eq!(TimerStatus::Idle.as_str(), "idle");
            assert_eq!(TimerStatus::Running.as_str(), "running");
            assert_eq!(TimerStatus::Paused.as_str(), "paused");
            assert_eq!(TimerStatus::Finished.as_str(), "finished");
        }

        #[test]
        fn test_serialize_lowercase() {
            let json = serde_json::to_string(&TimerStatus::Running).unwrap();
            assert_eq!(json, "\"running\"");
        }
    }

    // ------------------------------------------------------------------------
    // Settings Tests
    // ------------------------------------------------------------------------

    mod settings_tests {
        use super::*;

        #[test]
        fn test_default_values() {
            let settings = Settings::default();
            assert_eq!(settings.focus_minutes(), 25);
            assert_eq!(settings.short_break_minutes(), 5);
            assert_eq!(settings.long_break_minutes(), 15);
            assert!(!settings.auto_start_next());
        }

        #[test]
        fn test_set_focus_minutes_clamps_high() {
            let mut settings = Settings::default();
            settings.set_focus_minutes(500.0);
            assert_eq!(settings.focus_minutes(), 120);
        }

        #[test]
        fn test_set_focus_minutes_clamps_low() {
            let mut settings = Settings::default();
            settings.set_focus_minutes(0.0);
            assert_eq!(settings.focus_minutes(), 1);

            settings.set_focus_minutes(-10.0);
            assert_eq!(settings.focus_minutes(), 1);
        }

        #[test]
        fn test_set_focus_minutes_rounds_fractional() {
            let mut settings = Settings::default();
            settings.set_focus_minutes(24.6);
            assert_eq!(settings.focus_minutes(), 25);

            settings.set_focus_minutes(24.4);
            assert_eq!(settings.focus_minutes(), 24);
        }

        #[test]
        fn test_set_focus_minutes_non_finite() {
            let mut settings = Settings::default();
            settings.set_focus_minutes(f64::NAN);
            assert_eq!(settings.focus_minutes(), 1);

            settings.set_focus_minutes(f64::INFINITY);
            assert_eq!(settings.focus_minutes(), 1);
        }

        #[test]
        fn test_set_short_break_minutes_clamps() {
            let mut settings = Settings::default();
            settings.set_short_break_minutes(999.0);
            assert_eq!(settings.short_break_minutes(), 60);

            settings.set_short_break_minutes(0.2);
            assert_eq!(settings.short_break_minutes(), 1);
        }

        #[test]
        fn test_set_long_break_minutes_clamps() {
            let mut settings = Settings::default();
            settings.set_long_break_minutes(121.0);
            assert_eq!(settings.long_break_minutes(), 120);

            settings.set_long_break_minutes(120.0);
            assert_eq!(settings.long_break_minutes(), 120);
        }

        #[test]
        fn test_set_auto_start_next() {
            let mut settings = Settings::default();
            settings.set_auto_start_next(true);
            assert!(settings.auto_start_next());
        }

        #[test]
        fn test_boundary_values_accepted() {
            let mut settings = Settings::default();
            settings.set_focus_minutes(1.0);
            assert_eq!(settings.focus_minutes(), 1);
            settings.set_focus_minutes(120.0);
            assert_eq!(settings.focus_minutes(), 120);
        }

        #[test]
        fn test_duration_seconds() {
            let settings = Settings::default();
            assert_eq!(settings.duration_seconds(TimerMode::Focus), 25 * 60);
            assert_eq!(settings.duration_seconds(TimerMode::ShortBreak), 5 * 60);
            assert_eq!(settings.duration_seconds(TimerMode::LongBreak), 15 * 60);
        }

        #[test]
        fn test_durations_differ() {
            let a = Settings::default();
            let mut b = Settings::default();
            assert!(!a.durations_differ(&b));

            b.set_auto_start_next(true);
            assert!(!a.durations_differ(&b));

            b.set_focus_minutes(30.0);
            assert!(a.durations_differ(&b));
        }

        #[test]
        fn test_serialize_camel_case() {
            let settings = Settings::default();
            let json = serde_json::to_string(&settings).unwrap();
            assert!(json.contains("\"focusMinutes\":25"));
            assert!(json.contains("\"shortBreakMinutes\":5"));
            assert!(json.contains("\"longBreakMinutes\":15"));
            assert!(json.contains("\"autoStartNext\":false"));
        }
    }

    // ------------------------------------------------------------------------
    // TimerSession Tests
    // ------------------------------------------------------------------------

    mod timer_session_tests {
        use super::*;

        #[test]
        fn test_new_session() {
            let settings = Settings::default();
            let session = TimerSession::new(&settings);

            assert_eq!(session.mode, TimerMode::Focus);
            assert_eq!(session.status, TimerStatus::Idle);
            assert_eq!(session.time_left_seconds, 25 * 60);
            assert_eq!(session.cycle_count, 0);
        }

        #[test]
        fn test_new_session_uses_current_settings() {
            let mut settings = Settings::default();
            settings.set_focus_minutes(50.0);
            let session = TimerSession::new(&settings);

            assert_eq!(session.time_left_seconds, 50 * 60);
        }

        #[test]
        fn test_is_running() {
            let settings = Settings::default();
            let mut session = TimerSession::new(&settings);
            assert!(!session.is_running());

            session.status = TimerStatus::Running;
            assert!(session.is_running());

            session.status = TimerStatus::Paused;
            assert!(!session.is_running());
        }

        #[test]
        fn test_serialize_camel_case() {
            let settings = Settings::default();
            let session = TimerSession::new(&settings);
            let json = serde_json::to_string(&session).unwrap();

            assert!(json.contains("\"mode\":\"focus\""));
            assert!(json.contains("\"status\":\"idle\""));
            assert!(json.contains("\"timeLeftSeconds\":1500"));
            assert!(json.contains("\"cycleCount\":0"));
        }

        #[test]
        fn test_deserialize() {
            let json = r#"{"mode":"short-break","status":"paused","timeLeftSeconds":42,"cycleCount":3}"#;
            let session: TimerSession = serde_json::from_str(json).unwrap();

            assert_eq!(session.mode, TimerMode::ShortBreak);
            assert_eq!(session.status, TimerStatus::Paused);
            assert_eq!(session.time_left_seconds, 42);
            assert_eq!(session.cycle_count, 3);
        }
    }
}
