use anyhow::{Context, Result};
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::worksheet::TableSpec;
use crate::backend::storage::error::StoreResult;

/// Directory name used when no data directory is configured
pub const DEFAULT_DIRECTORY_NAME: &str = "Attendance Tracker";

/// CsvConnection owns the data directory that holds one CSV file per table.
///
/// Clones share the same file lock, so every repository built from one
/// connection sees a consistent view of the files.
#[derive(Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
    file_lock: Arc<RwLock<()>>,
}

impl CsvConnection {
    /// Create a new CSV connection with a base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path).with_context(|| {
                format!("Failed to create data directory {}", base_path.display())
            })?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
            file_lock: Arc::new(RwLock::new(())),
        })
    }

    /// Default data directory: ~/Documents/Attendance Tracker, or ./attendance-data
    /// when the platform has no documents directory.
    pub fn default_directory() -> PathBuf {
        match dirs::document_dir() {
            Some(documents) => documents.join(DEFAULT_DIRECTORY_NAME),
            None => {
                warn!("Could not determine documents directory, using ./attendance-data");
                PathBuf::from("attendance-data")
            }
        }
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    pub(crate) fn file_lock(&self) -> &RwLock<()> {
        &self.file_lock
    }

    /// Path of the CSV file backing a table
    pub fn table_path(&self, table: &TableSpec) -> PathBuf {
        self.base_directory.join(format!("{}.csv", table.name))
    }

    /// Ensure the table file exists and starts with its header row
    pub fn ensure_table_exists(&self, table: &TableSpec) -> StoreResult<PathBuf> {
        let path = self.table_path(table);

        if !path.exists() {
            let mut writer = csv::Writer::from_path(&path)?;
            writer.write_record(table.headers)?;
            writer.flush()?;
            info!("Created table '{}' at {}", table.name, path.display());
        }

        Ok(path)
    }
}
