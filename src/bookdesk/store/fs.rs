use super::{DataStore, LoadOutcome, LoadReport};
use crate::config::{DEFAULT_BOOKINGS_FILE, DEFAULT_CLIENTS_FILE};
use crate::error::{BookdeskError, Result};
use crate::records::Records;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub struct FileStore {
    data_dir: PathBuf,
    clients_file: String,
    bookings_file: String,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            clients_file: DEFAULT_CLIENTS_FILE.to_string(),
            bookings_file: DEFAULT_BOOKINGS_FILE.to_string(),
        }
    }

    pub fn with_file_names(mut self, clients_file: &str, bookings_file: &str) -> Self {
        self.clients_file = clients_file.to_string();
        self.bookings_file = bookings_file.to_string();
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn clients_path(&self) -> PathBuf {
        self.data_dir.join(&self.clients_file)
    }

    pub fn bookings_path(&self) -> PathBuf {
        self.data_dir.join(&self.bookings_file)
    }

    fn ensure_dir(&self) -> Result<()> {
        if self.data_dir.is_dir() {
            return Ok(());
        }
        if self.data_dir.exists() {
            return Err(BookdeskError::Io(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} exists and is not a directory", self.data_dir.display()),
            )));
        }
        fs::create_dir_all(&self.data_dir).map_err(BookdeskError::Io)
    }

    fn load_document<T: DeserializeOwned>(path: &Path) -> LoadOutcome<T> {
        if !path.is_file() {
            return LoadOutcome::Absent;
        }

        let parsed: std::result::Result<Vec<T>, String> = fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|content| serde_json::from_str(&content).map_err(|e| e.to_string()));

        match parsed {
            Ok(items) => LoadOutcome::Loaded(items),
            Err(reason) => {
                warn!("{} is empty or damaged: {}", path.display(), reason);
                LoadOutcome::Corrupt { reason }
            }
        }
    }

    fn save_document<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
        let content = serde_json::to_string_pretty(items).map_err(BookdeskError::Serialization)?;
        fs::write(path, content).map_err(|source| BookdeskError::Save {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Wrote {} records to {}", items.len(), path.display());
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<LoadReport> {
        self.ensure_dir()?;

        let report = LoadReport {
            clients: Self::load_document(&self.clients_path()),
            bookings: Self::load_document(&self.bookings_path()),
        };

        if let (LoadOutcome::Loaded(clients), LoadOutcome::Loaded(bookings)) =
            (&report.clients, &report.bookings)
        {
            info!(
                "Loaded {} clients and {} bookings from {}",
                clients.len(),
                bookings.len(),
                self.data_dir.display()
            );
        }

        Ok(report)
    }

    fn save(&mut self, records: &Records) -> Result<()> {
        self.ensure_dir().map_err(|e| match e {
            BookdeskError::Io(source) => BookdeskError::Save {
                path: self.data_dir.clone(),
                source,
            },
            other => other,
        })?;

        Self::save_document(&self.clients_path(), records.clients())?;
        Self::save_document(&self.bookings_path(), records.bookings())?;
        Ok(())
    }
}
