//! Sound selection state.
//!
//! Tracks which audio source is active — one of a small fixed set of
//! ambient soundscapes, or an externally supplied media URL — plus whether
//! playback is on. The two source kinds are exclusive: activating one
//! silences the other. Actual audio output happens in the browser; the
//! server only coordinates the selection.

use serde::{Deserialize, Serialize};
use tracing::debug;

// ============================================================================
// AmbientSound
// ============================================================================

/// The fixed set of ambient soundscapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmbientSound {
    Rain,
    Fire,
    Windy,
}

impl AmbientSound {
    /// Returns the wire-format string for the soundscape.
    pub fn as_str(&self) -> &'static str {
        match self {
            AmbientSound::Rain => "rain",
            AmbientSound::Fire => "fire",
            AmbientSound::Windy => "windy",
        }
    }
}

// ============================================================================
// SoundCoordinator
// ============================================================================

/// Exclusive-choice store between an ambient soundscape and external media.
///
/// The coordinator never fails: every operation is a plain state update.
/// Policy checks (such as refusing an ambient selection while external media
/// is open) belong to the API layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoundCoordinator {
    ambient: Option<AmbientSound>,
    media_url: Option<String>,
    media_active: bool,
    playing: bool,
}

impl SoundCoordinator {
    /// Creates a coordinator with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected ambient soundscape, if any.
    pub fn ambient(&self) -> Option<AmbientSound> {
        self.ambient
    }

    /// The applied external media URL, if any.
    pub fn media_url(&self) -> Option<&str> {
        self.media_url.as_deref()
    }

    /// Whether external-media mode is active.
    pub fn is_media_active(&self) -> bool {
        self.media_active
    }

    /// Whether playback is currently on.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Selects an ambient soundscape.
    ///
    /// Silences and clears external-media mode: only one source kind is
    /// active at a time.
    pub fn select_ambient(&mut self, sound: AmbientSound) {
        debug!(sound = sound.as_str(), "ambient soundscape selected");
        if self.media_active {
            self.media_url = None;
            self.media_active = false;
            self.playing = false;
        }
        self.ambient = Some(sound);
    }

    /// Applies an external media URL.
    ///
    /// Activates external-media mode, stops the ambient soundscape, and
    /// leaves playback off — playing requires an explicit subsequent
    /// [`play`](Self::play).
    pub fn apply_media_url(&mut self, url: impl Into<String>) {
        let url = url.into();
        debug!(url = url.as_str(), "external media applied");
        self.media_url = Some(url);
        self.media_active = true;
        self.ambient = None;
        self.playing = false;
    }

    /// Closes external media: clears the URL, deactivates external-media
    /// mode, and stops playback.
    pub fn close_media(&mut self) {
        debug!("external media closed");
        self.media_url = None;
        self.media_active = false;
        self.playing = false;
    }

    /// Sets the playing state, or toggles it when `on` is `None`.
    pub fn play(&mut self, on: Option<bool>) {
        self.playing = on.unwrap_or(!self.playing);
        debug!(playing = self.playing, "playback state changed");
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod ambient_sound_tests {
        use super::*;

        #[test]
        fn test_as_str() {
            assert_eq!(AmbientSound::Rain.as_str(), "rain");
            assert_eq!(AmbientSound::Fire.as_str(), "fire");
            assert_eq!(AmbientSound::Windy.as_str(), "windy");
        }

        #[test]
        fn test_serde_lowercase() {
            let json = serde_json::to_string(&AmbientSound::Windy).unwrap();
            assert_eq!(json, "\"windy\"");

            let sound: AmbientSound = serde_json::from_str("\"fire\"").unwrap();
            assert_eq!(sound, AmbientSound::Fire);
        }
    }

    mod coordinator_tests {
        use super::*;

        #[test]
        fn test_new_is_empty() {
            let coordinator = SoundCoordinator::new();
            assert!(coordinator.ambient().is_none());
            assert!(coordinator.media_url().is_none());
            assert!(!coordinator.is_media_active());
            assert!(!coordinator.is_playing());
        }

        #[test]
        fn test_select_ambient() {
            let mut coordinator = SoundCoordinator::new();
            coordinator.select_ambient(AmbientSound::Rain);

            assert_eq!(coordinator.ambient(), Some(AmbientSound::Rain));
            assert!(!coordinator.is_playing());
        }

        #[test]
        fn test_select_ambient_silences_media() {
            let mut coordinator = SoundCoordinator::new();
            coordinator.apply_media_url("https://example.com/watch?v=abc");
            coordinator.play(Some(true));

            coordinator.select_ambient(AmbientSound::Fire);

            assert_eq!(coordinator.ambient(), Some(AmbientSound::Fire));
            assert!(coordinator.media_url().is_none());
            assert!(!coordinator.is_media_active());
            assert!(!coordinator.is_playing());
        }

        #[test]
        fn test_apply_media_url() {
            let mut coordinator = SoundCoordinator::new();
            coordinator.select_ambient(AmbientSound::Rain);
            coordinator.play(Some(true));

            coordinator.apply_media_url("https://example.com/watch?v=abc");

            assert_eq!(
                coordinator.media_url(),
                Some("https://example.com/watch?v=abc")
            );
            assert!(coordinator.is_media_active());
            assert!(coordinator.ambient().is_none());
            // playback requires an explicit play after applying
            assert!(!coordinator.is_playing());
        }

        #[test]
        fn test_close_media() {
            let mut coordinator = SoundCoordinator::new();
            coordinator.apply_media_url("https://example.com/watch?v=abc");
            coordinator.play(Some(true));

            coordinator.close_media();

            assert!(coordinator.media_url().is_none());
            assert!(!coordinator.is_media_active());
            assert!(!coordinator.is_playing());
        }

        #[test]
        fn test_play_explicit() {
            let mut coordinator = SoundCoordinator::new();
            coordinator.play(Some(true));
            assert!(coordinator.is_playing());

            coordinator.play(Some(true));
            assert!(coordinator.is_playing());

            coordinator.play(Some(false));
            assert!(!coordinator.is_playing());
        }

        #[test]
        fn test_play_toggle() {
            let mut coordinator = SoundCoordinator::new();
            coordinator.play(None);
            assert!(coordinator.is_playing());

            coordinator.play(None);
            assert!(!coordinator.is_playing());
        }

        #[test]
        fn test_serialize_snapshot() {
            let mut coordinator = SoundCoordinator::new();
            coordinator.apply_media_url("https://example.com/watch?v=abc");

            let json = serde_json::to_string(&coordinator).unwrap();
            assert!(json.contains("\"ambient\":null"));
            assert!(json.contains("\"mediaUrl\":\"https://example.com/watch?v=abc\""));
            assert!(json.contains("\"mediaActive\":true"));
            assert!(json.contains("\"playing\":false"));
        }
    }
}
