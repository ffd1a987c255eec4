//! # Configuration
//!
//! ## Data directory
//!
//! Resolved in priority order:
//! 1. **Command line**: `--data-dir <PATH>`
//! 2. **Environment variable**: `BOOKDESK_DATA_DIR`
//! 3. **Default**: `data/` under the working directory
//!
//! ## Settings file
//!
//! An optional `config.json` inside the data directory:
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `clients_file` | `clientes.json` | Document holding the clients |
//! | `bookings_file` | `reservas.json` | Document holding the bookings |

use crate::error::{BookdeskError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const DATA_DIR_ENV: &str = "BOOKDESK_DATA_DIR";
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_CLIENTS_FILE: &str = "clientes.json";
pub const DEFAULT_BOOKINGS_FILE: &str = "reservas.json";

/// Settings stored in `<data dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookdeskConfig {
    #[serde(default = "default_clients_file")]
    pub clients_file: String,

    #[serde(default = "default_bookings_file")]
    pub bookings_file: String,
}

fn default_clients_file() -> String {
    DEFAULT_CLIENTS_FILE.to_string()
}

fn default_bookings_file() -> String {
    DEFAULT_BOOKINGS_FILE.to_string()
}

impl Default for BookdeskConfig {
    fn default() -> Self {
        Self {
            clients_file: default_clients_file(),
            bookings_file: default_bookings_file(),
        }
    }
}

impl BookdeskConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let config_path = data_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BookdeskError::Io)?;
        let config: BookdeskConfig = serde_json::from_str(&content)
            .map_err(|e| BookdeskError::Config(format!("{}: {}", config_path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        for name in [&self.clients_file, &self.bookings_file] {
            if name.is_empty() || name.contains(|c: char| c == '/' || c == '\\') {
                return Err(BookdeskError::Config(format!(
                    "invalid document name {:?}, expected a plain file name",
                    name
                )));
            }
        }
        if self.clients_file == self.bookings_file {
            return Err(BookdeskError::Config(
                "clients_file and bookings_file must differ".to_string(),
            ));
        }
        Ok(())
    }
}

/// Picks the data directory from the flag, then the environment, then the default.
pub fn resolve_data_dir(flag: Option<PathBuf>, env_value: Option<String>) -> PathBuf {
    flag.or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}
