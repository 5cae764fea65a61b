//! SQLite-backed key/value blob storage.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;

use crate::error::{Result, StorageResultExt};

use super::Storage;

const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS blobs (
    key        TEXT PRIMARY KEY,
    value      TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
";

const UPSERT_BLOB_SQL: &str =
    "INSERT INTO blobs (key, value, updated_at) VALUES (?1, ?2, ?3)
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const SELECT_BLOB_SQL: &str = "SELECT value FROM blobs WHERE key = ?1";

/// Durable storage backend holding each named blob as a JSON text row.
///
/// Holds only the database path; a connection is opened per operation,
/// which keeps the type `Send + Sync` and every call self-contained.
pub struct SqliteStorage {
    path: PathBuf,
}

impl SqliteStorage {
    /// Opens (creating if needed) the database at `path` and initializes
    /// the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let storage = Self {
            path: path.as_ref().to_path_buf(),
        };
        storage.connect()?;
        Ok(storage)
    }

    fn connect(&self) -> Result<Connection> {
        let connection =
            Connection::open(&self.path).storage_context("Failed to open storage database")?;
        connection
            .execute_batch(SCHEMA_SQL)
            .storage_context("Failed to initialize storage schema")?;
        Ok(connection)
    }
}

impl Storage for SqliteStorage {
    fn save(&self, key: &str, value: &Value) -> Result<()> {
        let text = serde_json::to_string(value)?;
        let now = jiff::Timestamp::now().to_string();
        self.connect()?
            .execute(UPSERT_BLOB_SQL, params![key, text, now])
            .storage_context("Failed to save blob")?;
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<Value>> {
        let text: Option<String> = self
            .connect()?
            .query_row(SELECT_BLOB_SQL, params![key], |row| row.get(0))
            .optional()
            .storage_context("Failed to load blob")?;

        match text {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_save_load() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SqliteStorage::open(dir.path().join("test.db")).unwrap();

        assert_eq!(storage.load("k").unwrap(), None);

        let value = serde_json::json!({"steps": [], "windowStart": null});
        storage.save("k", &value).unwrap();
        assert_eq!(storage.load("k").unwrap(), Some(value.clone()));

        // Overwrite replaces the previous blob
        let value2 = serde_json::json!({"steps": [1, 2]});
        storage.save("k", &value2).unwrap();
        assert_eq!(storage.load("k").unwrap(), Some(value2));
    }

    #[test]
    fn test_blob_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.db");

        {
            let storage = SqliteStorage::open(&path).unwrap();
            storage.save("k", &serde_json::json!(42)).unwrap();
        }

        let storage = SqliteStorage::open(&path).unwrap();
        assert_eq!(storage.load("k").unwrap(), Some(serde_json::json!(42)));
    }
}
