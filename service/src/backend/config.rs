//! # Application Configuration
//!
//! Settings are layered, later layers winning:
//!
//! 1. Built-in defaults
//! 2. `attendance_config.yaml`, from `ATTENDANCE_CONFIG` or the default data directory
//! 3. Environment overrides `ATTENDANCE_DATA_DIR` and `ATTENDANCE_BIND_ADDR`
//!
//! ```yaml
//! data_directory: "/srv/attendance"
//! bind_address: "0.0.0.0:3000"
//! open_record_policy: most_recent_open   # or today_only
//! log_level: info
//! ```
//!
//! A missing file is not an error. A file that exists but does not parse is.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::backend::domain::OpenRecordPolicy;
use crate::backend::storage::CsvConnection;

pub const CONFIG_FILE_NAME: &str = "attendance_config.yaml";
pub const CONFIG_PATH_ENV: &str = "ATTENDANCE_CONFIG";
pub const DATA_DIR_ENV: &str = "ATTENDANCE_DATA_DIR";
pub const BIND_ADDR_ENV: &str = "ATTENDANCE_BIND_ADDR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the CSV worksheets
    pub data_directory: PathBuf,
    pub bind_address: String,
    pub open_record_policy: OpenRecordPolicy,
    /// Default tracing filter when RUST_LOG is unset
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_directory: CsvConnection::default_directory(),
            bind_address: "0.0.0.0:3000".to_string(),
            open_record_policy: OpenRecordPolicy::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from the process environment and the config file it points at
    pub fn load() -> Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::load`] with an injectable environment
    pub fn load_with<F>(env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = env(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| CsvConnection::default_directory().join(CONFIG_FILE_NAME));

        let mut config = Self::from_file(&path)?.unwrap_or_default();
        config.apply_overrides(env);
        config.validate()?;

        info!(
            "Configuration loaded: data_directory={}, bind_address={}, policy={:?}",
            config.data_directory.display(),
            config.bind_address,
            config.open_record_policy
        );
        Ok(config)
    }

    /// `None` when the file does not exist
    pub fn from_file(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(None);
        }

        let yaml = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = serde_yaml::from_str(&yaml)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!("Loaded config file {}", path.display());
        Ok(Some(config))
    }

    fn apply_overrides<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = env(DATA_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            self.data_directory = PathBuf::from(dir);
        }
        if let Some(addr) = env(BIND_ADDR_ENV).filter(|v| !v.trim().is_empty()) {
            self.bind_address = addr;
        }
    }

    fn validate(&self) -> Result<()> {
        self.socket_addr()?;
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_address
            .parse()
            .with_context(|| format!("Invalid bind address '{}'", self.bind_address))
    }
}
