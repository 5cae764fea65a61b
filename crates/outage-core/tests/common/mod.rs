use std::path::PathBuf;

use tempfile::TempDir;

/// Helper function to create a temporary directory and database path
pub fn create_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test_outage.db");
    (temp_dir, db_path)
}
