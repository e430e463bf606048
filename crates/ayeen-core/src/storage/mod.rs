//! Persistent key-value storage backends.
//!
//! The settings store keeps its whole record under one key, so a backend only
//! needs string `get`/`set`.

use std::future::Future;

use crate::Result;

mod libsql_store;
mod memory;

pub use libsql_store::LibSqlKeyValueStore;
pub use memory::MemoryKeyValueStore;

/// Asynchronous string storage keyed by name
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` when the key is absent
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>>> + Send;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<()>> + Send;
}
