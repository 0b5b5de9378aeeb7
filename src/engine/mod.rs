//! Countdown engine module.
//!
//! This module contains the core countdown functionality:
//! - `pomodoro`: state machine, completion handling, and the tick task

pub mod pomodoro;

pub use pomodoro::{countdown_task, PomodoroEngine, DEFAULT_LONG_BREAK_INTERVAL};
