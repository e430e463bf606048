//! Application settings model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Theme mode options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme
    Light,
    /// Dark theme
    Dark,
    /// Follow the host device's color scheme
    #[default]
    Auto,
}

impl ThemeMode {
    /// Wire name of the mode
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }
}

/// Text size preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

impl FontSize {
    /// All sizes, smallest first
    pub const ALL: [Self; 4] = [Self::Small, Self::Medium, Self::Large, Self::ExtraLarge];

    /// Numeric multiplier applied to base font sizes
    pub const fn scale(self) -> f64 {
        match self {
            Self::Small => 0.9,
            Self::Medium => 1.0,
            Self::Large => 1.2,
            Self::ExtraLarge => 1.4,
        }
    }

    /// Next size, wrapping from the largest back to the smallest
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Small => Self::Medium,
            Self::Medium => Self::Large,
            Self::Large => Self::ExtraLarge,
            Self::ExtraLarge => Self::Small,
        }
    }

    /// Wire name of the size
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::ExtraLarge => "extra-large",
        }
    }
}

/// Spoken and announced language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Arabic
    #[default]
    Ar,
    /// English
    En,
}

impl Language {
    /// Locale tag handed to the speech engine
    pub const fn speech_locale(self) -> &'static str {
        match self {
            Self::Ar => "ar-SA",
            Self::En => "en-US",
        }
    }

    /// The other supported language
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ar => Self::En,
            Self::En => Self::Ar,
        }
    }

    /// Wire name of the language
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::En => "en",
        }
    }
}

/// Application settings
///
/// Field names on the wire are the camelCase names persisted by earlier
/// releases, so stored blobs stay readable across versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct Settings {
    /// Display theme preference
    pub theme: ThemeMode,
    /// Use the high-contrast palette
    pub high_contrast: bool,
    /// Text size preference
    pub font_size: FontSize,
    /// Whether spoken feedback is active
    pub tts_enabled: bool,
    /// Speech rate multiplier
    pub tts_rate: f64,
    /// Speech pitch multiplier
    pub tts_pitch: f64,
    /// Voice identifier
    pub tts_voice: String,
    /// Whether vibration feedback fires
    pub haptic_enabled: bool,
    /// Whether pages announce themselves on load
    pub auto_speak: bool,
    /// Spoken and announced language
    pub language: Language,
    /// Whether confirmation sounds play
    pub sound_effects: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Auto,
            high_contrast: false,
            font_size: FontSize::Medium,
            tts_enabled: true,
            tts_rate: 0.9,
            tts_pitch: 1.0,
            tts_voice: "default".to_string(),
            haptic_enabled: true,
            auto_speak: true,
            language: Language::Ar,
            sound_effects: true,
        }
    }
}

impl Settings {
    /// Replace the single field named by `change`
    pub fn apply(&mut self, change: SettingChange) {
        match change {
            SettingChange::Theme(value) => self.theme = value,
            SettingChange::HighContrast(value) => self.high_contrast = value,
            SettingChange::FontSize(value) => self.font_size = value,
            SettingChange::TtsEnabled(value) => self.tts_enabled = value,
            SettingChange::TtsRate(value) => self.tts_rate = value,
            SettingChange::TtsPitch(value) => self.tts_pitch = value,
            SettingChange::TtsVoice(value) => self.tts_voice = value,
            SettingChange::HapticEnabled(value) => self.haptic_enabled = value,
            SettingChange::AutoSpeak(value) => self.auto_speak = value,
            SettingChange::Language(value) => self.language = value,
            SettingChange::SoundEffects(value) => self.sound_effects = value,
        }
    }

    /// Copy of these settings with `change` applied
    #[must_use]
    pub fn with(mut self, change: SettingChange) -> Self {
        self.apply(change);
        self
    }

    /// Font scale derived from [`Settings::font_size`]
    pub const fn font_scale(&self) -> f64 {
        self.font_size.scale()
    }

    /// Current value of one field, as a change that would restore it
    pub fn current(&self, key: SettingKey) -> SettingChange {
        match key {
            SettingKey::Theme => SettingChange::Theme(self.theme),
            SettingKey::HighContrast => SettingChange::HighContrast(self.high_contrast),
            SettingKey::FontSize => SettingChange::FontSize(self.font_size),
            SettingKey::TtsEnabled => SettingChange::TtsEnabled(self.tts_enabled),
            SettingKey::TtsRate => SettingChange::TtsRate(self.tts_rate),
            SettingKey::TtsPitch => SettingChange::TtsPitch(self.tts_pitch),
            SettingKey::TtsVoice => SettingChange::TtsVoice(self.tts_voice.clone()),
            SettingKey::HapticEnabled => SettingChange::HapticEnabled(self.haptic_enabled),
            SettingKey::AutoSpeak => SettingChange::AutoSpeak(self.auto_speak),
            SettingKey::Language => SettingChange::Language(self.language),
            SettingKey::SoundEffects => SettingChange::SoundEffects(self.sound_effects),
        }
    }

    /// Build settings from a stored blob, merging its fields over the defaults.
    ///
    /// Unknown fields are ignored. A known field holding a value of the wrong
    /// type, or one [`SettingChange::validate`] rejects, keeps its default.
    /// A payload that is not a JSON object is an error, and so is one that
    /// fails to parse as a whole. That includes numbers outside the `f64`
    /// range such as `1e999`, which discard the other fields along with them.
    pub fn from_stored(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw)?;
        let Value::Object(fields) = value else {
            return Err(Error::InvalidInput(
                "stored settings must be a JSON object".to_string(),
            ));
        };

        let mut settings = Self::default();
        for (name, value) in fields {
            let Ok(key) = name.parse::<SettingKey>() else {
                tracing::debug!("Ignoring unknown stored setting '{name}'");
                continue;
            };
            match SettingChange::from_json(key, value) {
                Ok(change) => settings.apply(change),
                Err(error) => {
                    tracing::warn!("Keeping default for stored setting '{key}': {error}");
                }
            }
        }
        Ok(settings)
    }

    /// Serialize the full record for storage
    pub fn to_stored(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Closed set of settings field names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    Theme,
    HighContrast,
    FontSize,
    TtsEnabled,
    TtsRate,
    TtsPitch,
    TtsVoice,
    HapticEnabled,
    AutoSpeak,
    Language,
    SoundEffects,
}

impl SettingKey {
    /// Every field, in display order
    pub const ALL: [Self; 11] = [
        Self::Theme,
        Self::HighContrast,
        Self::FontSize,
        Self::TtsEnabled,
        Self::TtsRate,
        Self::TtsPitch,
        Self::TtsVoice,
        Self::HapticEnabled,
        Self::AutoSpeak,
        Self::Language,
        Self::SoundEffects,
    ];

    /// Field name as persisted
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Theme => "theme",
            Self::HighContrast => "highContrast",
            Self::FontSize => "fontSize",
            Self::TtsEnabled => "ttsEnabled",
            Self::TtsRate => "ttsRate",
            Self::TtsPitch => "ttsPitch",
            Self::TtsVoice => "ttsVoice",
            Self::HapticEnabled => "hapticEnabled",
            Self::AutoSpeak => "autoSpeak",
            Self::Language => "language",
            Self::SoundEffects => "soundEffects",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingKey {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == value)
            .ok_or_else(|| Error::InvalidInput(format!("unknown setting '{value}'")))
    }
}

/// A single typed settings mutation, one variant per field
#[derive(Debug, Clone, PartialEq)]
pub enum SettingChange {
    Theme(ThemeMode),
    HighContrast(bool),
    FontSize(FontSize),
    TtsEnabled(bool),
    TtsRate(f64),
    TtsPitch(f64),
    TtsVoice(String),
    HapticEnabled(bool),
    AutoSpeak(bool),
    Language(Language),
    SoundEffects(bool),
}

impl SettingChange {
    /// Field this change targets
    pub const fn key(&self) -> SettingKey {
        match self {
            Self::Theme(_) => SettingKey::Theme,
            Self::HighContrast(_) => SettingKey::HighContrast,
            Self::FontSize(_) => SettingKey::FontSize,
            Self::TtsEnabled(_) => SettingKey::TtsEnabled,
            Self::TtsRate(_) => SettingKey::TtsRate,
            Self::TtsPitch(_) => SettingKey::TtsPitch,
            Self::TtsVoice(_) => SettingKey::TtsVoice,
            Self::HapticEnabled(_) => SettingKey::HapticEnabled,
            Self::AutoSpeak(_) => SettingKey::AutoSpeak,
            Self::Language(_) => SettingKey::Language,
            Self::SoundEffects(_) => SettingKey::SoundEffects,
        }
    }

    /// Decode a stored JSON value for `key`
    pub fn from_json(key: SettingKey, value: Value) -> Result<Self> {
        let change = match key {
            SettingKey::Theme => Self::Theme(serde_json::from_value(value)?),
            SettingKey::FontSize => Self::FontSize(serde_json::from_value(value)?),
            SettingKey::Language => Self::Language(serde_json::from_value(value)?),
            SettingKey::TtsRate => Self::TtsRate(json_number(key, &value)?),
            SettingKey::TtsPitch => Self::TtsPitch(json_number(key, &value)?),
            SettingKey::TtsVoice => match value {
                Value::String(voice) => Self::TtsVoice(voice),
                other => return Err(mismatch(key, "a string", &other)),
            },
            SettingKey::HighContrast => Self::HighContrast(json_bool(key, &value)?),
            SettingKey::TtsEnabled => Self::TtsEnabled(json_bool(key, &value)?),
            SettingKey::HapticEnabled => Self::HapticEnabled(json_bool(key, &value)?),
            SettingKey::AutoSpeak => Self::AutoSpeak(json_bool(key, &value)?),
            SettingKey::SoundEffects => Self::SoundEffects(json_bool(key, &value)?),
        };
        change.validate()?;
        Ok(change)
    }

    /// Parse a change from user-entered text (e.g. `large`, `on`, `1.1`)
    pub fn parse(key: SettingKey, raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let change = match key {
            SettingKey::Theme | SettingKey::FontSize | SettingKey::Language => {
                Self::from_json(key, Value::String(raw.to_ascii_lowercase()))?
            }
            SettingKey::TtsRate => Self::TtsRate(parse_number(key, raw)?),
            SettingKey::TtsPitch => Self::TtsPitch(parse_number(key, raw)?),
            SettingKey::TtsVoice => Self::TtsVoice(raw.to_string()),
            SettingKey::HighContrast => Self::HighContrast(parse_flag(key, raw)?),
            SettingKey::TtsEnabled => Self::TtsEnabled(parse_flag(key, raw)?),
            SettingKey::HapticEnabled => Self::HapticEnabled(parse_flag(key, raw)?),
            SettingKey::AutoSpeak => Self::AutoSpeak(parse_flag(key, raw)?),
            SettingKey::SoundEffects => Self::SoundEffects(parse_flag(key, raw)?),
        };
        change.validate()?;
        Ok(change)
    }

    /// Check the value can be stored and read back unchanged.
    ///
    /// Rate and pitch must be finite and positive; JSON has no encoding for
    /// NaN or infinity. The voice identifier must not be empty.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::TtsRate(value) | Self::TtsPitch(value) => {
                if value.is_finite() && *value > 0.0 {
                    Ok(())
                } else {
                    Err(Error::InvalidInput(format!(
                        "'{}' must be a positive number, found {value}",
                        self.key()
                    )))
                }
            }
            Self::TtsVoice(voice) if voice.trim().is_empty() => {
                Err(Error::InvalidInput("voice cannot be empty".to_string()))
            }
            _ => Ok(()),
        }
    }
}

fn mismatch(key: SettingKey, expected: &str, value: &Value) -> Error {
    Error::InvalidInput(format!("expected {expected} for '{key}', found {value}"))
}

fn json_number(key: SettingKey, value: &Value) -> Result<f64> {
    value.as_f64().ok_or_else(|| mismatch(key, "a number", value))
}

fn json_bool(key: SettingKey, value: &Value) -> Result<bool> {
    value.as_bool().ok_or_else(|| mismatch(key, "a boolean", value))
}

fn parse_flag(key: SettingKey, raw: &str) -> Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::InvalidInput(format!(
            "expected on/off for '{key}', found '{raw}'"
        ))),
    }
}

fn parse_number(key: SettingKey, raw: &str) -> Result<f64> {
    raw.parse()
        .map_err(|_| Error::InvalidInput(format!("expected a number for '{key}', found '{raw}'")))
}
