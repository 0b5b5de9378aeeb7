//! Sound system error types.
//!
//! Errors here are informational: cue playback is fire-and-forget, so every
//! failure ends as a log line, never as a fault in the engine's control flow.

use thiserror::Error;

/// Errors that can occur while playing the completion cue.
#[derive(Debug, Error)]
pub enum SoundError {
    /// Audio device is not available (e.g., headless host, no speakers).
    #[error("Audio device not available: {0}")]
    DeviceNotAvailable(String),

    /// Failed to decode the embedded cue data.
    #[error("Failed to decode cue audio: {0}")]
    DecodeError(String),

    /// Failed to create or use the audio output stream.
    #[error("Audio stream error: {0}")]
    StreamError(String),

    /// Generic playback error.
    #[error("Playback error: {0}")]
    PlaybackError(String),
}

impl SoundError {
    /// Returns true if this error is related to device availability.
    #[must_use]
    pub fn is_device_error(&self) -> bool {
        matches!(self, Self::DeviceNotAvailable(_) | Self::StreamError(_))
    }
}
