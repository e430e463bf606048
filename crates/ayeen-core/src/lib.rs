//! ayeen-core - Core library for Ayeen
//!
//! This crate holds the settings model and store, the key-value persistence
//! behind it, and the screen logic that turns user actions into settings
//! changes and speech/haptic feedback.

pub mod capture;
pub mod db;
pub mod error;
pub mod feedback;
pub mod models;
pub mod screens;
pub mod storage;
pub mod store;
pub mod theme;

pub use error::{Error, Result};
pub use models::{SettingChange, SettingKey, Settings};
pub use store::{Mutation, PendingWrite, SettingsStore, SETTINGS_STORAGE_KEY};
