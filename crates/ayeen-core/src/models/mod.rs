//! Data models for Ayeen

mod settings;

pub use settings::{FontSize, Language, SettingChange, SettingKey, Settings, ThemeMode};
