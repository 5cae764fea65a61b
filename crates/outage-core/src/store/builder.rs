//! Builder for creating and loading StepStore instances.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::task;

use super::StepStore;
use crate::{
    error::{ProtocolError, Result},
    storage::{SqliteStorage, Storage},
};

/// Builder for creating configured, loaded [`StepStore`] instances.
#[derive(Default)]
pub struct StepStoreBuilder {
    storage: Option<Arc<dyn Storage>>,
    database_path: Option<PathBuf>,
}

impl StepStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Injects a custom storage collaborator, overriding the default
    /// SQLite backend.
    pub fn with_storage(mut self, storage: Arc<dyn Storage>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Sets a custom SQLite database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/outage/outage.db` or `~/.local/share/outage/outage.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured store and loads the persisted protocol.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::FileSystem` if the database directory
    /// cannot be created, `ProtocolError::Storage` if the backend fails to
    /// open, and any load error from the initial read.
    pub async fn build(self) -> Result<StepStore> {
        let storage = match self.storage {
            Some(storage) => storage,
            None => {
                let db_path = match self.database_path {
                    Some(path) => path,
                    None => Self::default_database_path()?,
                };

                if let Some(parent) = db_path.parent() {
                    std::fs::create_dir_all(parent).map_err(|e| ProtocolError::FileSystem {
                        path: parent.to_path_buf(),
                        source: e,
                    })?;
                }

                let storage =
                    task::spawn_blocking(move || SqliteStorage::open(&db_path))
                        .await
                        .map_err(ProtocolError::join)??;
                Arc::new(storage) as Arc<dyn Storage>
            }
        };

        let mut store = StepStore::new(storage);
        store.load().await?;
        Ok(store)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("outage")
            .place_data_file("outage.db")
            .map_err(|e| ProtocolError::XdgDirectory(e.to_string()))
    }
}
