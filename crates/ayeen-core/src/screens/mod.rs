//! Screen interaction logic.
//!
//! Each handler is a pure function from the current settings and a user action
//! to a [`Reaction`]: at most one settings mutation plus the feedback to play.
//! Feedback is computed from the settings as they were when the action began.

mod home;
mod settings;

pub use home::{
    handle_home_action, HomeAction, MICROPHONE_ERROR_MESSAGE, MICROPHONE_ERROR_TITLE,
    WELCOME_ANNOUNCEMENT,
};
pub use settings::{
    handle_settings_action, next_on_ladder, SettingsAction, SettingsRow, PITCH_LADDER,
    RATE_LADDER, SAVED_ANNOUNCEMENT, SCREEN_READER_ANNOUNCEMENT,
};

use crate::capture::{CaptureSession, SpeechRecognizer};
use crate::feedback::{Effect, EffectRunner};
use crate::storage::KeyValueStore;
use crate::store::{Mutation, PendingWrite, SettingsStore};
use crate::Result;

/// Screens the app can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Home,
    Settings,
}

/// Request to the speech-to-text session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptureCommand {
    Start,
    Clear,
}

/// Outcome of one user interaction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reaction {
    pub mutation: Option<Mutation>,
    pub effects: Vec<Effect>,
    pub navigate: Option<Screen>,
    pub capture: Option<CaptureCommand>,
}

impl Reaction {
    /// Apply the mutation, if any, then play the feedback.
    ///
    /// Navigation and capture requests are left on the reaction for the
    /// caller; see [`Reaction::dispatch_with_capture`] for screens that own a
    /// capture session.
    pub fn dispatch<S>(
        &self,
        store: &mut SettingsStore<S>,
        runner: &EffectRunner<'_>,
    ) -> Result<Option<PendingWrite>>
    where
        S: KeyValueStore + 'static,
    {
        let write = self
            .mutation
            .clone()
            .map(|mutation| store.apply(mutation))
            .transpose()?;
        runner.run(&self.effects);
        Ok(write)
    }

    /// [`Reaction::dispatch`], then carry out the capture request.
    ///
    /// A recognizer that refuses to start leaves the session idle and raises
    /// the microphone error alert.
    pub fn dispatch_with_capture<S>(
        &self,
        store: &mut SettingsStore<S>,
        session: &mut CaptureSession,
        recognizer: &dyn SpeechRecognizer,
        runner: &EffectRunner<'_>,
    ) -> Result<Option<PendingWrite>>
    where
        S: KeyValueStore + 'static,
    {
        let write = self.dispatch(store, runner)?;
        match self.capture {
            Some(CaptureCommand::Start) => {
                if session.start(recognizer).is_err() {
                    runner.run(&[Effect::Alert {
                        title: MICROPHONE_ERROR_TITLE.to_string(),
                        message: MICROPHONE_ERROR_MESSAGE.to_string(),
                    }]);
                }
            }
            Some(CaptureCommand::Clear) => session.clear(),
            None => {}
        }
        Ok(write)
    }
}
