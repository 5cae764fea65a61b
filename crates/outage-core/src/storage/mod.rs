//! Storage collaborator interface and backends.
//!
//! The store persists exactly one named JSON blob through this trait; the
//! backend behind it is interchangeable. Two implementations are provided:
//! [`SqliteStorage`] for durable on-disk use and [`MemoryStorage`] for
//! tests.

use serde_json::Value;

use crate::error::Result;

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// Storage key under which the protocol blob is saved.
pub const PROTOCOL_KEY: &str = "shutdownProtocol";

/// External persistence collaborator.
///
/// Implementations are blocking; the store runs them on a blocking task.
/// A failed `save` is reported as an error to the store, which logs it and
/// keeps the in-memory state as the session's source of truth.
pub trait Storage: Send + Sync {
    /// Persists a named JSON blob, replacing any previous value.
    fn save(&self, key: &str, value: &Value) -> Result<()>;

    /// Retrieves a named JSON blob, or `None` if absent.
    fn load(&self, key: &str) -> Result<Option<Value>>;
}
