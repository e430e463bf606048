//! Speech-to-text capture session.
//!
//! Tracks whether the recognizer is listening and the latest transcript. The
//! recognizer itself is a platform engine behind [`SpeechRecognizer`]; results
//! arrive as [`CaptureEvent`]s.

use crate::{Error, Result};

/// Locale the recognizer listens in
pub const CAPTURE_LOCALE: &str = "ar-SA";

/// Platform speech-recognition engine
pub trait SpeechRecognizer {
    /// Ask for microphone access and begin listening
    fn start(&self, locale: &str) -> std::result::Result<(), String>;

    /// Stop listening
    fn stop(&self);
}

/// Callback from the recognizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureEvent {
    /// Latest hypothesis for the whole utterance
    Result(String),
    /// Recognition finished
    End,
    /// Recognition failed
    Error(String),
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CaptureSession {
    listening: bool,
    transcript: String,
}

impl CaptureSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Clear the transcript and start listening.
    ///
    /// If the recognizer refuses to start the session returns to idle.
    pub fn start(&mut self, recognizer: &dyn SpeechRecognizer) -> Result<()> {
        self.transcript.clear();
        self.listening = true;
        if let Err(error) = recognizer.start(CAPTURE_LOCALE) {
            tracing::warn!("Speech recognition failed to start: {error}");
            self.listening = false;
            return Err(Error::Recognition(error));
        }
        Ok(())
    }

    /// Stop listening; the transcript is kept
    pub fn stop(&mut self, recognizer: &dyn SpeechRecognizer) {
        let was_listening = self.listening;
        self.listening = false;
        if was_listening {
            recognizer.stop();
        }
    }

    pub fn clear(&mut self) {
        self.transcript.clear();
    }

    pub fn handle(&mut self, event: CaptureEvent) {
        match event {
            CaptureEvent::Result(text) => self.transcript = text,
            CaptureEvent::End => self.listening = false,
            CaptureEvent::Error(error) => {
                tracing::warn!("Speech recognition error: {error}");
                self.listening = false;
            }
        }
    }
}
