//! Sound coordination for the focus timer.
//!
//! This module provides:
//!
//! - Exclusive-source selection between ambient soundscapes and external
//!   media (`SoundCoordinator`)
//! - Completion-cue playback with graceful degradation when audio is
//!   unavailable (`RodioCuePlayer`)
//! - The fire-and-forget [`Playback`] capability the countdown engine
//!   drives, so the engine never depends on concrete audio APIs
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────┐   Playback    ┌────────────────┐
//! │ PomodoroEngine │──────────────▶│  SoundDirector │
//! └────────────────┘               └───────┬────────┘
//!                                          │
//!                          ┌───────────────┴───────────────┐
//!                          ▼                               ▼
//!                 ┌──────────────────┐            ┌─────────────────┐
//!                 │ SoundCoordinator │            │  RodioCuePlayer │
//!                 │ (source + flag)  │            │ (embedded bell) │
//!                 └──────────────────┘            └─────────────────┘
//! ```

mod coordinator;
mod cue;
mod embedded;
mod error;

pub use coordinator::{AmbientSound, SoundCoordinator};
pub use cue::{try_create_player, CuePlayer, MockCuePlayer, RodioCuePlayer};
pub use embedded::{cue_wav, CUE_WAV_DATA};
pub use error::SoundError;

use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

// ============================================================================
// Playback capability
// ============================================================================

/// Fire-and-forget playback signals issued by the countdown engine.
///
/// Every method is infallible at this boundary: implementations swallow and
/// log failures, so a blocked or missing audio device never throws into the
/// engine's control flow.
pub trait Playback: Send + Sync {
    /// Start ambient playback (entering or resuming a focus period).
    fn start_ambient(&self);

    /// Stop ambient playback (leaving a focus period).
    fn stop_ambient(&self);

    /// Play the phase-completion cue.
    fn completion_cue(&self);
}

// ============================================================================
// SoundDirector
// ============================================================================

/// Production [`Playback`] implementation.
///
/// Drives the shared [`SoundCoordinator`]'s playing flag for ambient
/// start/stop and plays the completion cue through an optional
/// [`CuePlayer`]. The ambient signals only apply while external media is
/// inactive; an open media source is left untouched.
pub struct SoundDirector {
    coordinator: Arc<Mutex<SoundCoordinator>>,
    cue: Option<Arc<dyn CuePlayer>>,
}

impl SoundDirector {
    /// Creates a director over the shared coordinator.
    ///
    /// Pass `None` for the cue player when audio is unavailable; the
    /// completion cue degrades to a debug log line.
    pub fn new(coordinator: Arc<Mutex<SoundCoordinator>>, cue: Option<Arc<dyn CuePlayer>>) -> Self {
        Self { coordinator, cue }
    }

    fn set_ambient_playing(&self, on: bool) {
        let mut coordinator = self
            .coordinator
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if coordinator.is_media_active() {
            debug!("external media active, leaving playback untouched");
            return;
        }
        coordinator.play(Some(on));
    }
}

impl Playback for SoundDirector {
    fn start_ambient(&self) {
        self.set_ambient_playing(true);
    }

    fn stop_ambient(&self) {
        self.set_ambient_playing(false);
    }

    fn completion_cue(&self) {
        match &self.cue {
            Some(cue) => {
                if let Err(e) = cue.play() {
                    warn!("Completion cue failed: {}", e);
                }
            }
            None => debug!("No audio device, skipping completion cue"),
        }
    }
}

impl std::fmt::Debug for SoundDirector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoundDirector")
            .field("has_cue", &self.cue.is_some())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// RecordingPlayback
// ============================================================================

/// A playback signal observed by [`RecordingPlayback`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCall {
    StartAmbient,
    StopAmbient,
    CompletionCue,
}

/// Recording playback stub for testing the engine's side effects.
#[derive(Debug, Default)]
pub struct RecordingPlayback {
    calls: Mutex<Vec<PlaybackCall>>,
}

impl RecordingPlayback {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All signals received so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<PlaybackCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of signals of the given kind received so far.
    #[must_use]
    pub fn count_of(&self, call: PlaybackCall) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| **c == call).count()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl Playback for RecordingPlayback {
    fn start_ambient(&self) {
        self.calls.lock().unwrap().push(PlaybackCall::StartAmbient);
    }

    fn stop_ambient(&self) {
        self.calls.lock().unwrap().push(PlaybackCall::StopAmbient);
    }

    fn completion_cue(&self) {
        self.calls.lock().unwrap().push(PlaybackCall::CompletionCue);
    }
}

// ============================================================================
// Tests
// ============================================================================
