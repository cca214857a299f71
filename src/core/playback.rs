//! # Playback Binding
//!
//! The showcase owns exactly one media handle. `PlaybackBinding` keeps that
//! handle in step with [`ViewState`]:
//!
//! 1. If the selected `(group, index)` differs from what is loaded, stop the
//!    old clip and load the new source.
//! 2. Then apply the requested play/pause flag.
//!
//! Playback failures are logged and otherwise ignored; `is_playing` stays
//! what the user asked for.

use std::fmt;

use log::{debug, warn};

use crate::core::catalog::{Group, GroupCatalog};
use crate::core::showcase::ViewState;

#[derive(Debug, Clone, PartialEq)]
pub enum MediaError {
    /// The source could not be opened.
    Load { source: String, reason: String },
    /// The platform refused to start playback (e.g. autoplay blocked).
    Playback(String),
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::Load { source, reason } => write!(f, "failed to load '{source}': {reason}"),
            MediaError::Playback(msg) => write!(f, "playback refused: {msg}"),
        }
    }
}

impl std::error::Error for MediaError {}

/// A single media element.
pub trait MediaPlayer {
    /// Point the element at a new source. Playback starts paused.
    fn load(&mut self, source: &str, poster: &str) -> Result<(), MediaError>;
    fn play(&mut self) -> Result<(), MediaError>;
    fn pause(&mut self);
    /// Halt and rewind the current clip.
    fn stop(&mut self);
    /// Fraction of the current loop already played, in `[0, 1]`.
    fn progress(&self) -> f32;
    /// Whether the element is actually running (may differ from what was requested).
    fn is_running(&self) -> bool;
}

pub struct PlaybackBinding<P: MediaPlayer> {
    player: P,
    bound: Option<(Group, usize)>,
    applied_playing: Option<bool>,
}

impl<P: MediaPlayer> PlaybackBinding<P> {
    pub fn new(player: P) -> Self {
        Self {
            player,
            bound: None,
            applied_playing: None,
        }
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }

    /// The `(group, index)` currently loaded into the player.
    pub fn bound(&self) -> Option<(Group, usize)> {
        self.bound
    }

    /// Reconcile the player with `view`. Returns `true` if the source changed.
    pub fn sync(&mut self, view: &ViewState, catalog: &GroupCatalog) -> bool {
        let Some(item) = view.current_item(catalog) else {
            if self.bound.take().is_some() {
                self.player.stop();
            }
            self.applied_playing = None;
            return false;
        };

        let key = (view.active_group, view.resolved_index(catalog));
        let retarget = self.bound != Some(key);

        if retarget {
            if self.bound.is_some() {
                self.player.stop();
            }
            debug!(
                "Loading showcase clip {}#{} ({})",
                key.0, item.id, item.video_source
            );
            if let Err(e) = self.player.load(&item.video_source, &item.poster) {
                warn!("Showcase media load failed: {}", e);
            }
            self.bound = Some(key);
            self.applied_playing = None;
        }

        if self.applied_playing != Some(view.is_playing) {
            if view.is_playing {
                if let Err(e) = self.player.play() {
                    warn!("Showcase playback did not start: {}", e);
                }
            } else {
                self.player.pause();
            }
            self.applied_playing = Some(view.is_playing);
        }

        retarget
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingPlayer;

    #[test]
    fn test_first_sync_loads_then_plays() {
        let catalog = GroupCatalog::builtin();
        let mut binding = PlaybackBinding::new(RecordingPlayer::default());

        assert!(binding.sync(&ViewState::default(), &catalog));
        assert_eq!(
            binding.player().calls,
            vec![
                "load /Passenger Alpha.bc06b347f5b526ad9a60.mp4".to_string(),
                "play".to_string(),
            ]
        );
        assert_eq!(binding.bound(), Some((Group::Passenger, 0)));
    }

    #[test]
    fn test_sync_is_idempotent() {
        let catalog = GroupCatalog::builtin();
        let view = ViewState::default();
        let mut binding = PlaybackBinding::new(RecordingPlayer::default());
        binding.sync(&view, &catalog);
        let calls = binding.player().calls.len();

        assert!(!binding.sync(&view, &catalog));
        assert_eq!(binding.player().calls.len(), calls);
    }

    #[test]
    fn test_switching_items_hands_off() {
        let catalog = GroupCatalog::builtin();
        let mut view = ViewState::default();
        let mut binding = PlaybackBinding::new(RecordingPlayer::default());
        binding.sync(&view, &catalog);
        binding.player_mut().calls.clear();

        view.select_group(Group::Commercial);
        assert!(binding.sync(&view, &catalog));
        assert_eq!(
            binding.player().calls,
            vec![
                "stop".to_string(),
                "load /Commercial Alpha.92c92d40f9116c837d1d.mp4".to_string(),
                "play".to_string(),
            ]
        );
    }

    #[test]
    fn test_pause_after_retarget_applies_flag_after_load() {
        let catalog = GroupCatalog::builtin();
        let mut view = ViewState::default();
        let mut binding = PlaybackBinding::new(RecordingPlayer::default());
        binding.sync(&view, &catalog);
        binding.player_mut().calls.clear();

        view.toggle_play();
        view.select_group(Group::Commercial);
        binding.sync(&view, &catalog);
        assert_eq!(binding.player().calls.last().map(String::as_str), Some("pause"));
        assert_eq!(binding.player().calls[0], "stop");
    }

    #[test]
    fn test_refused_playback_keeps_requested_state() {
        let catalog = GroupCatalog::builtin();
        let view = ViewState::default();
        let mut binding = PlaybackBinding::new(RecordingPlayer::refusing());

        binding.sync(&view, &catalog);
        assert!(view.is_playing);
        assert!(!binding.player().is_running());
        // Not retried every frame.
        let calls = binding.player().calls.len();
        binding.sync(&view, &catalog);
        assert_eq!(binding.player().calls.len(), calls);
    }
}
