//! Completion-cue playback.
//!
//! Uses rodio for the actual audio output. The output stream is owned by a
//! dedicated audio thread (it must not move across threads); playback
//! requests reach it over a crossbeam channel, so `RodioCuePlayer` itself is
//! cheap to share and safe to call from async handlers.

use std::io::Cursor;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use rodio::{Decoder, OutputStream, Sink};
use tracing::{debug, warn};

use super::embedded::cue_wav;
use super::error::SoundError;

/// Trait for completion-cue playback implementations.
///
/// Playback is non-blocking: the cue keeps playing after the call returns.
pub trait CuePlayer: Send + Sync {
    /// Plays the completion cue.
    ///
    /// # Errors
    ///
    /// Returns an error if the playback request cannot be issued. Decode or
    /// sink failures on the audio thread are logged, not returned.
    fn play(&self) -> Result<(), SoundError>;

    /// Returns true if cue playback is disabled.
    fn is_disabled(&self) -> bool;

    /// Enables cue playback.
    fn enable(&self);

    /// Disables cue playback.
    fn disable(&self);
}

// ============================================================================
// RodioCuePlayer
// ============================================================================

enum CueCommand {
    Play,
}

/// A cue player backed by a dedicated rodio audio thread.
pub struct RodioCuePlayer {
    tx: Sender<CueCommand>,
    disabled: AtomicBool,
}

impl RodioCuePlayer {
    /// Creates a new cue player.
    ///
    /// Spawns the audio thread and waits for it to open the default output
    /// device.
    ///
    /// # Arguments
    ///
    /// * `disabled` - If true, all playback requests are silently skipped.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::DeviceNotAvailable` if no audio output device is
    /// available, or `SoundError::StreamError` if the audio thread cannot be
    /// spawned.
    pub fn new(disabled: bool) -> Result<Self, SoundError> {
        let (tx, rx) = unbounded();
        let (ready_tx, ready_rx) = bounded(1);

        std::thread::Builder::new()
            .name("focusd-audio".to_string())
            .spawn(move || audio_thread(rx, ready_tx))
            .map_err(|e| SoundError::StreamError(e.to_string()))?;

        match ready_rx.recv() {
            Ok(Ok(())) => {
                debug!("Audio output stream initialized");
                Ok(Self {
                    tx,
                    disabled: AtomicBool::new(disabled),
                })
            }
            Ok(Err(e)) => Err(e),
            Err(_) => Err(SoundError::StreamError(
                "audio thread exited before reporting readiness".to_string(),
            )),
        }
    }

    /// Creates a disabled cue player.
    ///
    /// Useful for tests and for `--no-sound` runs; the audio thread is still
    /// started but every play request is skipped.
    ///
    /// # Errors
    ///
    /// May still fail if the audio device cannot be opened.
    pub fn disabled() -> Result<Self, SoundError> {
        Self::new(true)
    }
}

impl CuePlayer for RodioCuePlayer {
    fn play(&self) -> Result<(), SoundError> {
        if self.disabled.load(Ordering::Relaxed) {
            debug!("Cue playback disabled, skipping");
            return Ok(());
        }

        self.tx
            .send(CueCommand::Play)
            .map_err(|_| SoundError::PlaybackError("audio thread stopped".to_string()))
    }

    fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::Relaxed)
    }

    fn enable(&self) {
        self.disabled.store(false, Ordering::Relaxed);
        debug!("Cue playback enabled");
    }

    fn disable(&self) {
        self.disabled.store(true, Ordering::Relaxed);
        debug!("Cue playback disabled");
    }
}

impl std::fmt::Debug for RodioCuePlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RodioCuePlayer")
            .field("disabled", &self.disabled.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

/// Audio thread body: owns the output stream and plays cues on request.
fn audio_thread(rx: Receiver<CueCommand>, ready: Sender<Result<(), SoundError>>) {
    let (stream, handle) = match OutputStream::try_default() {
        Ok(pair) => pair,
        Err(e) => {
            let _ = ready.send(Err(SoundError::DeviceNotAvailable(e.to_string())));
            return;
        }
    };
    // The stream must stay alive for playback to continue.
    let _stream = stream;
    let _ = ready.send(Ok(()));

    while let Ok(CueCommand::Play) = rx.recv() {
        let decoder = match Decoder::new(Cursor::new(cue_wav())) {
            Ok(decoder) => decoder,
            Err(e) => {
                warn!("Failed to decode cue audio: {}", e);
                continue;
            }
        };
        match Sink::try_new(&handle) {
            Ok(sink) => {
                sink.append(decoder);
                sink.detach();
                debug!("Cue playback started (detached)");
            }
            Err(e) => warn!("Failed to open audio sink: {}", e),
        }
    }
}

/// Creates a cue player, returning None if audio is unavailable.
///
/// If audio initialization fails, a warning is logged and None is returned;
/// the caller degrades to silent operation.
#[must_use]
pub fn try_create_player(disabled: bool) -> Option<Arc<RodioCuePlayer>> {
    match RodioCuePlayer::new(disabled) {
        Ok(player) => Some(Arc::new(player)),
        Err(e) => {
            warn!("Audio not available, completion cue disabled: {}", e);
            None
        }
    }
}

// ============================================================================
// MockCuePlayer
// ============================================================================

/// Mock cue player for testing.
#[derive(Debug, Default)]
pub struct MockCuePlayer {
    plays: std::sync::Mutex<usize>,
    disabled: AtomicBool,
    should_fail: AtomicBool,
}

impl MockCuePlayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    #[must_use]
    pub fn play_count(&self) -> usize {
        *self.plays.lock().unwrap()
    }
}

impl CuePlayer for MockCuePlayer {
    fn play(&self) -> Result<(), SoundError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(SoundError::PlaybackError("mock failure".to_string()));
        }
        if self.disabled.load(Ordering::SeqCst) {
            return Ok(());
        }
        *self.plays.lock().unwrap() += 1;
        Ok(())
    }

    fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::SeqCst)
    }

    fn enable(&self) {
        self.disabled.store(false, Ordering::SeqCst);
    }

    fn disable(&self) {
        self.disabled.store(true, Ordering::SeqCst);
    }
}
