//! Settings store
//!
//! Single source of truth for user preferences. The record is loaded once from
//! a [`KeyValueStore`], mutated in memory, and written back in full after every
//! mutation. Writes run in the background: the in-memory record is updated
//! before a write is dispatched, and a failed write is logged rather than
//! reported, so a change may not survive a restart when storage is broken.
//!
//! Overlapping writes are not ordered. Each carries a snapshot taken when its
//! mutation was applied, and whichever lands last is what the next load sees.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::models::{SettingChange, Settings};
use crate::storage::KeyValueStore;
use crate::theme::{self, ColorPalette, ColorSchemeSource, ResolvedTheme};
use crate::Result;

/// Key the settings record is persisted under
pub const SETTINGS_STORAGE_KEY: &str = "ayeen_settings";

/// A change requested by a consumer of the store
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// Replace one field
    Change(SettingChange),
    /// Restore every field to its default
    Reset,
}

/// Handle to one background write of the settings record.
///
/// Dropping the handle does not cancel the write.
#[derive(Debug)]
#[must_use = "dropping a PendingWrite detaches it; call `wait` to observe completion"]
pub struct PendingWrite {
    task: Option<JoinHandle<()>>,
}

impl PendingWrite {
    const fn skipped() -> Self {
        Self { task: None }
    }

    /// Whether a write was actually dispatched
    pub const fn is_dispatched(&self) -> bool {
        self.task.is_some()
    }

    /// Wait for the write to land. Storage failures were already logged, so
    /// this never reports an error.
    pub async fn wait(self) {
        if let Some(task) = self.task {
            if let Err(error) = task.await {
                tracing::warn!("Settings write task did not complete: {error}");
            }
        }
    }
}

/// In-memory settings bound to durable storage
pub struct SettingsStore<S> {
    storage: Arc<S>,
    host: Arc<dyn ColorSchemeSource>,
    settings: Settings,
    ready: bool,
}

impl<S> SettingsStore<S>
where
    S: KeyValueStore + 'static,
{
    /// Create a store holding the defaults. Not ready until [`Self::load`] runs.
    pub fn new(storage: Arc<S>, host: Arc<dyn ColorSchemeSource>) -> Self {
        Self {
            storage,
            host,
            settings: Settings::default(),
            ready: false,
        }
    }

    /// Create a store and load it
    pub async fn open(storage: Arc<S>, host: Arc<dyn ColorSchemeSource>) -> Self {
        let mut store = Self::new(storage, host);
        store.load().await;
        store
    }

    /// Read the stored record, merging it over the defaults.
    ///
    /// Never fails: a missing, malformed, or unreadable record leaves the
    /// defaults in place.
    pub async fn load(&mut self) {
        self.settings = match self.storage.get(SETTINGS_STORAGE_KEY).await {
            Ok(Some(raw)) => Settings::from_stored(&raw).unwrap_or_else(|error| {
                tracing::warn!("Ignoring unreadable stored settings: {error}");
                Settings::default()
            }),
            Ok(None) => {
                tracing::debug!("No stored settings, using defaults");
                Settings::default()
            }
            Err(error) => {
                tracing::warn!("Error loading settings: {error}");
                Settings::default()
            }
        };
        self.ready = true;
        tracing::debug!("Settings loaded");
    }

    /// Whether the initial load has completed
    pub const fn is_ready(&self) -> bool {
        self.ready
    }

    /// Current record
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Theme to render with, sampling the host scheme when the mode is `auto`
    pub fn effective_theme(&self) -> ResolvedTheme {
        theme::resolve_theme(self.settings.theme, self.host.color_scheme())
    }

    /// Font scale for the current text size
    pub const fn font_scale(&self) -> f64 {
        self.settings.font_scale()
    }

    /// Palette for the effective theme and contrast preference
    pub fn palette(&self) -> &'static ColorPalette {
        theme::palette(self.effective_theme(), self.settings.high_contrast)
    }

    /// Replace one field and persist the full record in the background.
    ///
    /// A change that fails [`SettingChange::validate`] is rejected before the
    /// in-memory record is touched.
    pub fn update_setting(&mut self, change: SettingChange) -> Result<PendingWrite> {
        change.validate()?;
        tracing::debug!("Updating setting '{}'", change.key());
        self.settings.apply(change);
        Ok(self.persist())
    }

    /// Restore the defaults and persist them in the background
    pub fn reset_settings(&mut self) -> PendingWrite {
        tracing::debug!("Resetting settings to defaults");
        self.settings = Settings::default();
        self.persist()
    }

    /// Apply a consumer mutation
    pub fn apply(&mut self, mutation: Mutation) -> Result<PendingWrite> {
        match mutation {
            Mutation::Change(change) => self.update_setting(change),
            Mutation::Reset => Ok(self.reset_settings()),
        }
    }

    fn persist(&self) -> PendingWrite {
        let payload = match self.settings.to_stored() {
            Ok(payload) => payload,
            Err(error) => {
                tracing::warn!("Error serializing settings: {error}");
                return PendingWrite::skipped();
            }
        };

        let Ok(runtime) = Handle::try_current() else {
            tracing::warn!("No async runtime available, settings change not saved");
            return PendingWrite::skipped();
        };

        let storage = Arc::clone(&self.storage);
        let task = runtime.spawn(async move {
            match storage.set(SETTINGS_STORAGE_KEY, &payload).await {
                Ok(()) => tracing::debug!("Settings saved"),
                Err(error) => tracing::warn!("Error saving settings: {error}"),
            }
        });
        PendingWrite { task: Some(task) }
    }
}
