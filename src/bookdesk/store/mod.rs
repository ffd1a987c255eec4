//! # Storage Layer
//!
//! Persistence for [`Records`] sits behind the [`DataStore`] trait so the API
//! and its tests can run against a filesystem or against memory.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, two JSON documents in a data directory
//! - [`memory::InMemoryStore`]: No persistence, counts saves for tests
//!
//! ## Storage Format
//!
//! ```text
//! data/
//! ├── clientes.json    # [{"id", "nombre", "email", "telefono"}, ...]
//! ├── reservas.json    # [{"id", "id_cliente", "fecha", "hora", "servicio"}, ...]
//! └── config.json      # optional, see config.rs
//! ```
//!
//! Every save rewrites both documents with the full snapshot. There is no
//! temp-file-then-rename step, so a crash mid-write can leave a truncated
//! document behind. Loading tolerates that: a document that cannot be read or
//! parsed comes back as [`LoadOutcome::Corrupt`] and its collection starts
//! empty.

use crate::error::Result;
use crate::model::{Booking, Client};
use crate::records::Records;

pub mod fs;
pub mod memory;

/// What loading one document produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome<T> {
    Loaded(Vec<T>),
    /// The document does not exist yet (first run).
    Absent,
    /// The document exists but could not be read or parsed.
    Corrupt { reason: String },
}

impl<T> LoadOutcome<T> {
    pub fn is_corrupt(&self) -> bool {
        matches!(self, LoadOutcome::Corrupt { .. })
    }

    pub fn into_items(self) -> Vec<T> {
        match self {
            LoadOutcome::Loaded(items) => items,
            LoadOutcome::Absent | LoadOutcome::Corrupt { .. } => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub clients: LoadOutcome<Client>,
    pub bookings: LoadOutcome<Booking>,
}

/// Abstract interface for record persistence.
pub trait DataStore {
    /// Read both collections. Only infrastructure failures (e.g. the data
    /// directory cannot be created) are errors; bad documents are reported
    /// through the outcomes.
    fn load(&self) -> Result<LoadReport>;

    /// Overwrite the persisted state with the full snapshot.
    fn save(&mut self, records: &Records) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_corrupt_both_yield_nothing() {
        let absent: LoadOutcome<Client> = LoadOutcome::Absent;
        let corrupt: LoadOutcome<Client> = LoadOutcome::Corrupt {
            reason: "EOF while parsing".into(),
        };
        assert!(!absent.is_corrupt());
        assert!(corrupt.is_corrupt());
        assert!(absent.into_items().is_empty());
        assert!(corrupt.into_items().is_empty());
    }
}
