//! # Clip Player
//!
//! A terminal can't decode video, so clips are simulated: a loaded source
//! loops on a wall clock and reports how far through the loop it is. That's
//! all the page needs to draw the progress ring and the "now playing" state.

use std::time::{Duration, Instant};

use crate::core::playback::{MediaError, MediaPlayer};

pub struct ClipPlayer {
    clip_length: Duration,
    source: Option<String>,
    /// Set while running: the instant the current run started.
    started_at: Option<Instant>,
    /// Loop time accumulated before the current run.
    carried: Duration,
}

impl ClipPlayer {
    pub fn new(clip_length: Duration) -> Self {
        Self {
            clip_length: clip_length.max(Duration::from_millis(1)),
            source: None,
            started_at: None,
            carried: Duration::ZERO,
        }
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    fn played(&self, now: Instant) -> Duration {
        let running = self
            .started_at
            .map(|start| now.saturating_duration_since(start))
            .unwrap_or_default();
        self.carried + running
    }

    /// Loop position at `now`, in `[0, 1)`.
    pub fn progress_at(&self, now: Instant) -> f32 {
        let played = self.played(now).as_secs_f64();
        let length = self.clip_length.as_secs_f64();
        ((played % length) / length) as f32
    }

    fn play_at(&mut self, now: Instant) -> Result<(), MediaError> {
        if self.source.is_none() {
            return Err(MediaError::Playback("no source loaded".to_string()));
        }
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
        Ok(())
    }

    fn pause_at(&mut self, now: Instant) {
        if self.started_at.is_some() {
            self.carried = self.played(now);
            self.started_at = None;
        }
    }
}

impl MediaPlayer for ClipPlayer {
    // The poster is drawn from the catalog, the player only tracks the clip
    fn load(&mut self, source: &str, _poster: &str) -> Result<(), MediaError> {
        self.stop();
        if source.trim().is_empty() {
            self.source = None;
            return Err(MediaError::Load {
                source: source.to_string(),
                reason: "empty source".to_string(),
            });
        }
        self.source = Some(source.to_string());
        Ok(())
    }

    fn play(&mut self) -> Result<(), MediaError> {
        self.play_at(Instant::now())
    }

    fn pause(&mut self) {
        self.pause_at(Instant::now());
    }

    fn stop(&mut self) {
        self.started_at = None;
        self.carried = Duration::ZERO;
    }

    fn progress(&self) -> f32 {
        self.progress_at(Instant::now())
    }

    fn is_running(&self) -> bool {
        self.started_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_fails_to_load() {
        let mut player = ClipPlayer::new(Duration::from_secs(8));
        let err = player.load("  ", "").unwrap_err();
        assert!(matches!(err, MediaError::Load { .. }));
        assert!(player.play().is_err());
        assert!(!player.is_running());
    }

    #[test]
    fn test_progress_loops() {
        let mut player = ClipPlayer::new(Duration::from_secs(4));
        player.load("/clip.mp4", "/clip.mp4").unwrap();
        let t0 = Instant::now();
        player.play_at(t0).unwrap();

        assert!((player.progress_at(t0 + Duration::from_secs(1)) - 0.25).abs() < 1e-3);
        assert!((player.progress_at(t0 + Duration::from_secs(5)) - 0.25).abs() < 1e-3);
    }

    #[test]
    fn test_pause_freezes_progress() {
        let mut player = ClipPlayer::new(Duration::from_secs(4));
        player.load("/clip.mp4", "").unwrap();
        let t0 = Instant::now();
        player.play_at(t0).unwrap();
        player.pause_at(t0 + Duration::from_secs(2));

        assert!(!player.is_running());
        assert!((player.progress_at(t0 + Duration::from_secs(3)) - 0.5).abs() < 1e-3);

        // Resuming continues from the pause point.
        player.play_at(t0 + Duration::from_secs(10)).unwrap();
        assert!((player.progress_at(t0 + Duration::from_secs(11)) - 0.75).abs() < 1e-3);
    }

    #[test]
    fn test_load_rewinds() {
        let mut player = ClipPlayer::new(Duration::from_secs(4));
        player.load("/a.mp4", "").unwrap();
        let t0 = Instant::now();
        player.play_at(t0).unwrap();
        player.pause_at(t0 + Duration::from_secs(3));

        player.load("/b.mp4", "/b.jpg").unwrap();
        assert_eq!(player.source(), Some("/b.mp4"));
        assert_eq!(player.progress_at(t0 + Duration::from_secs(9)), 0.0);
    }
}
