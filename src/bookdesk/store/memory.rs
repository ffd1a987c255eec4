use super::{DataStore, LoadOutcome, LoadReport};
use crate::error::Result;
use crate::records::Records;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    snapshot: Option<Records>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn snapshot(&self) -> Option<&Records> {
        self.snapshot.as_ref()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<LoadReport> {
        Ok(match &self.snapshot {
            Some(records) => LoadReport {
                clients: LoadOutcome::Loaded(records.clients().to_vec()),
                bookings: LoadOutcome::Loaded(records.bookings().to_vec()),
            },
            None => LoadReport {
                clients: LoadOutcome::Absent,
                bookings: LoadOutcome::Absent,
            },
        })
    }

    fn save(&mut self, records: &Records) -> Result<()> {
        self.snapshot = Some(records.clone());
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Booking, Client};

    /// Builds a store that already holds a snapshot, as if a previous run saved it.
    pub struct StoreFixture {
        records: Records,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                records: Records::new(),
            }
        }

        pub fn with_client(mut self, id: &str, name: &str) -> Self {
            let email = format!("{}@example.com", name.to_lowercase());
            self.records
                .insert_client(Client::new(id, name, email, "555-0100"));
            self
        }

        pub fn with_booking(
            mut self,
            id: &str,
            client_id: &str,
            date: &str,
            time: &str,
            service: &str,
        ) -> Self {
            self.records
                .push_booking(Booking::new(id, client_id, date, time, service));
            self
        }

        pub fn records(&self) -> &Records {
            &self.records
        }

        /// A store whose snapshot holds the fixture records. Its save counter starts at zero.
        pub fn store(self) -> InMemoryStore {
            InMemoryStore {
                snapshot: Some(self.records),
                saves: 0,
            }
        }
    }
}
