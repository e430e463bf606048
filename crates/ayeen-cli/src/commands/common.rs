use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ayeen_core::feedback::{AlertPresenter, Haptic, HapticEngine, SpeechSynthesizer, Utterance};
use ayeen_core::storage::LibSqlKeyValueStore;
use ayeen_core::theme::{ColorSchemeSource, FixedColorScheme, ResolvedTheme, SystemColorScheme};
use ayeen_core::{SettingKey, Settings, SettingsStore};
use serde::Serialize;

use crate::cli::HostScheme;
use crate::error::CliError;

pub type CliStore = SettingsStore<LibSqlKeyValueStore>;

/// Settings plus the values derived from them
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsReport {
    pub settings: Settings,
    pub effective_theme: &'static str,
    pub font_scale: f64,
}

impl SettingsReport {
    pub fn from_store(store: &CliStore) -> Self {
        Self {
            settings: store.settings().clone(),
            effective_theme: store.effective_theme().as_str(),
            font_scale: store.font_scale(),
        }
    }
}

pub fn resolve_db_path(cli_db_path: Option<PathBuf>) -> Result<PathBuf, CliError> {
    if let Some(path) = cli_db_path.or_else(|| env::var_os("AYEEN_DB_PATH").map(PathBuf::from)) {
        return Ok(path);
    }
    default_db_path()
}

pub fn default_db_path() -> Result<PathBuf, CliError> {
    dirs::data_local_dir()
        .map(|dir| dir.join("ayeen").join("ayeen.db"))
        .ok_or_else(|| CliError::Config("Failed to resolve CLI data directory".to_string()))
}

pub fn host_source(scheme: HostScheme) -> Arc<dyn ColorSchemeSource> {
    match scheme {
        HostScheme::System => Arc::new(SystemColorScheme),
        HostScheme::Light => Arc::new(FixedColorScheme(Some(ResolvedTheme::Light))),
        HostScheme::Dark => Arc::new(FixedColorScheme(Some(ResolvedTheme::Dark))),
    }
}

pub async fn open_store(db_path: &Path, scheme: HostScheme) -> Result<CliStore, CliError> {
    let storage = LibSqlKeyValueStore::open(db_path).await?;
    Ok(SettingsStore::open(Arc::new(storage), host_source(scheme)).await)
}

fn render_value(settings: &Settings, key: SettingKey) -> String {
    match key {
        SettingKey::Theme => settings.theme.as_str().to_string(),
        SettingKey::HighContrast => settings.high_contrast.to_string(),
        SettingKey::FontSize => settings.font_size.as_str().to_string(),
        SettingKey::TtsEnabled => settings.tts_enabled.to_string(),
        SettingKey::TtsRate => settings.tts_rate.to_string(),
        SettingKey::TtsPitch => settings.tts_pitch.to_string(),
        SettingKey::TtsVoice => settings.tts_voice.clone(),
        SettingKey::HapticEnabled => settings.haptic_enabled.to_string(),
        SettingKey::AutoSpeak => settings.auto_speak.to_string(),
        SettingKey::Language => settings.language.as_str().to_string(),
        SettingKey::SoundEffects => settings.sound_effects.to_string(),
    }
}

pub fn format_setting_line(settings: &Settings, key: SettingKey) -> String {
    format!("{:<15}{}", key.as_str(), render_value(settings, key))
}

pub fn format_report_lines(report: &SettingsReport) -> Vec<String> {
    let mut lines: Vec<String> = SettingKey::ALL
        .iter()
        .map(|key| format_setting_line(&report.settings, *key))
        .collect();
    lines.push(format!("{:<15}{}", "effectiveTheme", report.effective_theme));
    lines.push(format!("{:<15}{}", "fontScale", report.font_scale));
    lines
}

/// Prints feedback to the terminal instead of speaking or vibrating
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalFeedback;

impl SpeechSynthesizer for TerminalFeedback {
    fn speak(&self, utterance: &Utterance) {
        println!(
            "speak [{} rate {} pitch {}] {}",
            utterance.language.speech_locale(),
            utterance.rate,
            utterance.pitch,
            utterance.text
        );
    }
}

impl HapticEngine for TerminalFeedback {
    fn trigger(&self, haptic: Haptic) {
        println!("haptic {haptic:?}");
    }
}

impl AlertPresenter for TerminalFeedback {
    fn alert(&self, title: &str, message: &str) {
        println!("alert {title}: {message}");
    }
}
