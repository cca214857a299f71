//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::catalog::GroupCatalog;
use crate::core::contact::ContactFields;
use crate::core::playback::{MediaError, MediaPlayer};
use crate::core::state::App;
use crate::submission::{ContactSubmitter, SubmitError};

/// A media player that records every call it receives.
#[derive(Default)]
pub struct RecordingPlayer {
    pub calls: Vec<String>,
    refuse_play: bool,
    running: bool,
}

impl RecordingPlayer {
    /// A player whose `play()` always fails, like a browser blocking autoplay.
    pub fn refusing() -> Self {
        Self {
            refuse_play: true,
            ..Default::default()
        }
    }
}

impl MediaPlayer for RecordingPlayer {
    fn load(&mut self, source: &str, _poster: &str) -> Result<(), MediaError> {
        self.calls.push(format!("load {source}"));
        self.running = false;
        Ok(())
    }

    fn play(&mut self) -> Result<(), MediaError> {
        self.calls.push("play".to_string());
        if self.refuse_play {
            return Err(MediaError::Playback("autoplay blocked".to_string()));
        }
        self.running = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.calls.push("pause".to_string());
        self.running = false;
    }

    fn stop(&mut self) {
        self.calls.push("stop".to_string());
        self.running = false;
    }

    fn progress(&self) -> f32 {
        0.0
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

/// A submitter with a fixed answer that remembers what it was given.
pub struct ScriptedSubmitter {
    outcome: Result<(), SubmitError>,
    received: Mutex<Vec<ContactFields>>,
}

impl ScriptedSubmitter {
    pub fn succeeding() -> Self {
        Self {
            outcome: Ok(()),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: SubmitError) -> Self {
        Self {
            outcome: Err(error),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn received(&self) -> Vec<ContactFields> {
        self.received
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ContactSubmitter for ScriptedSubmitter {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn submit(&self, fields: &ContactFields) -> Result<(), SubmitError> {
        if let Ok(mut received) = self.received.lock() {
            received.push(fields.clone());
        }
        self.outcome.clone()
    }
}

/// A submitter that never answers.
pub struct HangingSubmitter;

#[async_trait]
impl ContactSubmitter for HangingSubmitter {
    fn name(&self) -> &str {
        "hanging"
    }

    async fn submit(&self, _fields: &ContactFields) -> Result<(), SubmitError> {
        std::future::pending().await
    }
}

/// Creates a test App with the built-in catalog and a succeeding submitter.
pub fn test_app() -> App {
    App::new(Arc::new(ScriptedSubmitter::succeeding()), GroupCatalog::builtin())
}
