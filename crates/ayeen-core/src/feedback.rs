//! Speech and haptic feedback as data.
//!
//! Screens never call the platform engines directly. They return [`Effect`]
//! values built from the current settings, and an [`EffectRunner`] hands them
//! to whichever [`SpeechSynthesizer`] and [`HapticEngine`] the host provides.
//! Every call is fire-and-forget.

use crate::models::{Language, Settings};

/// Text queued for the speech engine
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub language: Language,
    pub rate: f64,
    pub pitch: f64,
}

impl Utterance {
    /// Utterance voiced with the user's language, rate, and pitch
    pub fn new(settings: &Settings, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: settings.language,
            rate: settings.tts_rate,
            pitch: settings.tts_pitch,
        }
    }

    /// Same voice settings with a fixed language
    #[must_use]
    pub const fn in_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}

/// Impact strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImpactStyle {
    Light,
    Medium,
    Heavy,
}

/// Notification outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

/// A discrete vibration pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Haptic {
    Impact(ImpactStyle),
    Selection,
    Notification(NotificationKind),
}

/// One side effect requested by a screen
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Speak(Utterance),
    Haptic(Haptic),
    /// A blocking notice shown to the user
    Alert { title: String, message: String },
}

/// Platform text-to-speech engine
pub trait SpeechSynthesizer {
    fn speak(&self, utterance: &Utterance);
}

/// Platform vibration engine
pub trait HapticEngine {
    fn trigger(&self, haptic: Haptic);
}

/// Platform dialog surface
pub trait AlertPresenter {
    fn alert(&self, title: &str, message: &str);
}

/// Collects effects, dropping the ones the user has switched off
#[derive(Debug, Default)]
pub struct Effects {
    effects: Vec<Effect>,
}

impl Effects {
    pub const fn new() -> Self {
        Self {
            effects: Vec::new(),
        }
    }

    /// Queue speech if spoken feedback is enabled
    pub fn speak(&mut self, settings: &Settings, text: impl Into<String>) -> &mut Self {
        if settings.tts_enabled {
            self.effects
                .push(Effect::Speak(Utterance::new(settings, text)));
        }
        self
    }

    /// Queue a prepared utterance if spoken feedback is enabled
    pub fn utterance(&mut self, settings: &Settings, utterance: Utterance) -> &mut Self {
        if settings.tts_enabled {
            self.effects.push(Effect::Speak(utterance));
        }
        self
    }

    /// Queue a vibration if haptics are enabled
    pub fn haptic(&mut self, settings: &Settings, haptic: Haptic) -> &mut Self {
        if settings.haptic_enabled {
            self.effects.push(Effect::Haptic(haptic));
        }
        self
    }

    /// Queue an alert; alerts are never suppressed by settings
    pub fn alert(&mut self, title: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.effects.push(Effect::Alert {
            title: title.into(),
            message: message.into(),
        });
        self
    }

    pub fn into_vec(self) -> Vec<Effect> {
        self.effects
    }
}

/// Executes effects against the platform engines
pub struct EffectRunner<'a> {
    speech: &'a dyn SpeechSynthesizer,
    haptics: &'a dyn HapticEngine,
    alerts: &'a dyn AlertPresenter,
}

impl<'a> EffectRunner<'a> {
    pub fn new(
        speech: &'a dyn SpeechSynthesizer,
        haptics: &'a dyn HapticEngine,
        alerts: &'a dyn AlertPresenter,
    ) -> Self {
        Self {
            speech,
            haptics,
            alerts,
        }
    }

    /// Run effects in order
    pub fn run<'e>(&self, effects: impl IntoIterator<Item = &'e Effect>) {
        for effect in effects {
            match effect {
                Effect::Speak(utterance) => self.speech.speak(utterance),
                Effect::Haptic(haptic) => self.haptics.trigger(*haptic),
                Effect::Alert { title, message } => self.alerts.alert(title, message),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::models::SettingChange;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<String>>,
    }

    impl SpeechSynthesizer for Recorder {
        fn speak(&self, utterance: &Utterance) {
            self.calls.borrow_mut().push(format!(
                "speak {} {}",
                utterance.language.speech_locale(),
                utterance.text
            ));
        }
    }

    impl HapticEngine for Recorder {
        fn trigger(&self, haptic: Haptic) {
            self.calls.borrow_mut().push(format!("haptic {haptic:?}"));
        }
    }

    impl AlertPresenter for Recorder {
        fn alert(&self, title: &str, _message: &str) {
            self.calls.borrow_mut().push(format!("alert {title}"));
        }
    }

    #[test]
    fn utterance_carries_voice_settings() {
        let settings = Settings::default()
            .with(SettingChange::TtsRate(1.3))
            .with(SettingChange::Language(Language::En));
        let utterance = Utterance::new(&settings, "hello");

        assert_eq!(utterance.language, Language::En);
        assert!((utterance.rate - 1.3).abs() < f64::EPSILON);
        assert!((utterance.pitch - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn disabled_channels_are_dropped() {
        let settings = Settings::default()
            .with(SettingChange::TtsEnabled(false))
            .with(SettingChange::HapticEnabled(false));

        let mut effects = Effects::new();
        effects
            .speak(&settings, "ignored")
            .haptic(&settings, Haptic::Selection)
            .alert("title", "message");

        assert_eq!(
            effects.into_vec(),
            vec![Effect::Alert {
                title: "title".to_string(),
                message: "message".to_string(),
            }]
        );
    }

    #[test]
    fn runner_dispatches_in_order() {
        let settings = Settings::default();
        let mut effects = Effects::new();
        effects
            .haptic(&settings, Haptic::Impact(ImpactStyle::Heavy))
            .speak(&settings, "مرحبا")
            .alert("تنبيه", "...");
        let effects = effects.into_vec();

        let recorder = Recorder::default();
        EffectRunner::new(&recorder, &recorder, &recorder).run(&effects);

        assert_eq!(
            recorder.calls.into_inner(),
            vec![
                "haptic Impact(Heavy)".to_string(),
                "speak ar-SA مرحبا".to_string(),
                "alert تنبيه".to_string(),
            ]
        );
    }
}
