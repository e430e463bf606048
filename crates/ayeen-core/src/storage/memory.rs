//! In-process key-value store
//!
//! Holds values in a map for the lifetime of the value. Writes can be delayed
//! or made to fail, which lets callers exercise slow and broken storage.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::Mutex;

use super::KeyValueStore;
use crate::{Error, Result};

/// In-memory implementation of [`KeyValueStore`]
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
    write_delays: Mutex<VecDeque<Duration>>,
    completed_writes: Mutex<Vec<(String, String)>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `value` under `key`
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self {
            entries: Mutex::new(entries),
            ..Self::default()
        }
    }

    /// Delay upcoming writes, one duration per write in the order writes start
    pub async fn queue_write_delays(&self, delays: impl IntoIterator<Item = Duration>) {
        self.write_delays.lock().await.extend(delays);
    }

    /// Make every subsequent read fail
    pub fn set_read_failure(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent write fail
    pub fn set_write_failure(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Values written so far, in the order the writes landed
    pub async fn completed_writes(&self) -> Vec<(String, String)> {
        self.completed_writes.lock().await.clone()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Error::Storage(format!("read of '{key}' failed")));
        }
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let delay = self.write_delays.lock().await.pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Error::Storage(format!("write of '{key}' failed")));
        }

        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        self.completed_writes
            .lock()
            .await
            .push((key.to_string(), value.to_string()));
        Ok(())
    }
}
