//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every bookdesk operation.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the in-memory [`Records`] and the [`DataStore`] backend
//! - **Dispatches** to the appropriate command function
//! - **Persists** the full snapshot after every successful mutation
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! Saving is eager and unconditional: register, edit and delete each end with
//! one `save`. A rejected operation changes nothing and saves nothing.
//!
//! ## Generic Over DataStore
//!
//! `BookdeskApi<S: DataStore>` is generic over the storage backend:
//! - Production: `BookdeskApi<FileStore>`
//! - Testing: `BookdeskApi<InMemoryStore>`

use crate::commands::{self, booking, client};
use crate::error::Result;
use crate::records::Records;
use crate::store::{DataStore, LoadOutcome, LoadReport};
use crate::validators;
use tracing::warn;

/// The main API facade for bookdesk operations.
pub struct BookdeskApi<S: DataStore> {
    store: S,
    records: Records,
}

impl<S: DataStore> BookdeskApi<S> {
    /// Creates an API with empty records. Call [`load`](Self::load) to read
    /// the persisted state.
    pub fn new(store: S) -> Self {
        Self {
            store,
            records: Records::new(),
        }
    }

    /// Replaces the in-memory records with what the store holds. Damaged
    /// documents become warnings and start empty.
    pub fn load(&mut self) -> Result<CmdResult> {
        let report = self.store.load()?;
        let mut result = CmdResult::default();
        add_load_warning(&mut result, "clients", &report.clients);
        add_load_warning(&mut result, "bookings", &report.bookings);

        let LoadReport { clients, bookings } = report;
        self.records = Records::from_parts(clients.into_items(), bookings.into_items());
        Ok(result)
    }

    pub fn records(&self) -> &Records {
        &self.records
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // --- Clients ---

    pub fn register_client(&mut self, input: commands::NewClient) -> Result<CmdResult> {
        let result = client::register::run(&mut self.records, input)?;
        self.persist()?;
        Ok(result)
    }

    pub fn edit_client(&mut self, update: commands::ClientUpdate) -> Result<CmdResult> {
        let result = client::edit::run(&mut self.records, update)?;
        self.persist()?;
        Ok(result)
    }

    pub fn list_clients(&self) -> Result<CmdResult> {
        client::list::run(&self.records)
    }

    pub fn find_client(&self, id: &str) -> Result<CmdResult> {
        client::find::run(&self.records, id)
    }

    // --- Bookings ---

    pub fn register_booking(&mut self, input: commands::NewBooking) -> Result<CmdResult> {
        let result = booking::register::run(&mut self.records, input)?;
        self.persist()?;
        Ok(result)
    }

    pub fn edit_booking(&mut self, update: commands::BookingUpdate) -> Result<CmdResult> {
        let result = booking::edit::run(&mut self.records, update)?;
        self.persist()?;
        Ok(result)
    }

    pub fn list_bookings(&self) -> Result<CmdResult> {
        booking::list::run(&self.records)
    }

    pub fn find_bookings(&self, id: &str) -> Result<CmdResult> {
        booking::find::run(&self.records, id)
    }

    pub fn delete_booking(&mut self, id: &str) -> Result<CmdResult> {
        let result = booking::delete::run(&mut self.records, id)?;
        self.persist()?;
        Ok(result)
    }

    // --- Prompt-time checks ---
    //
    // The shell uses these to reject a bad answer before asking for the next
    // field. The commands repeat the same checks before mutating.

    pub fn check_new_client_id(&self, id: &str) -> Result<()> {
        commands::helpers::new_client_id(&self.records, id).map(|_| ())
    }

    pub fn check_new_booking_id(&self, id: &str) -> Result<()> {
        commands::helpers::new_booking_id(&self.records, id).map(|_| ())
    }

    pub fn client_exists(&self, id: &str) -> bool {
        self.records.contains_client(id.trim())
    }

    pub fn is_valid_date(&self, date: &str) -> bool {
        validators::is_valid_date(date.trim())
    }

    pub fn is_valid_time(&self, time: &str) -> bool {
        validators::is_valid_time(time.trim())
    }

    fn persist(&mut self) -> Result<()> {
        self.store.save(&self.records)
    }
}

fn add_load_warning<T>(result: &mut CmdResult, what: &str, outcome: &LoadOutcome<T>) {
    if let LoadOutcome::Corrupt { reason } = outcome {
        warn!("Starting with no {}: {}", what, reason);
        result.add_message(CmdMessage::warning(format!(
            "Warning: the {} file is empty or damaged, starting with no {}.",
            what, what
        )));
    }
}

pub use crate::commands::{
    BookingUpdate, ClientUpdate, CmdMessage, CmdResult, MessageLevel, NewBooking, NewClient,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BookdeskError;
    use crate::model::{Booking, Client};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn ana() -> NewClient {
        NewClient {
            id: "C1".into(),
            name: "Ana".into(),
            email: "ana@example.com".into(),
            phone: "555-0101".into(),
        }
    }

    fn booking(id: &str, date: &str, time: &str, service: &str) -> NewBooking {
        NewBooking {
            id: id.into(),
            client_id: "C1".into(),
            date: date.into(),
            time: time.into(),
            service: service.into(),
        }
    }

    /// Loads fine, refuses every save.
    struct ReadOnlyStore;

    impl DataStore for ReadOnlyStore {
        fn load(&self) -> Result<LoadReport> {
            Ok(LoadReport {
                clients: LoadOutcome::Absent,
                bookings: LoadOutcome::Corrupt {
                    reason: "trailing characters".into(),
                },
            })
        }

        fn save(&mut self, _records: &Records) -> Result<()> {
            Err(BookdeskError::Save {
                path: PathBuf::from("data/clientes.json"),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            })
        }
    }

    #[test]
    fn load_picks_up_saved_snapshot() {
        let store = StoreFixture::new()
            .with_client("C1", "Ana")
            .with_booking("B1", "C1", "2024-05-01", "09:00", "Corte")
            .store();
        let mut api = BookdeskApi::new(store);

        let result = api.load().unwrap();
        assert!(result.messages.is_empty());
        assert_eq!(api.records().clients().len(), 1);
        assert_eq!(api.records().bookings().len(), 1);
    }

    #[test]
    fn corrupt_document_becomes_warning() {
        let mut api = BookdeskApi::new(ReadOnlyStore);
        let result = api.load().unwrap();

        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.contains("bookings"));
        assert!(api.records().bookings().is_empty());
    }

    #[test]
    fn saves_after_each_successful_mutation() {
        let mut api = BookdeskApi::new(InMemoryStore::new());
        api.register_client(ana()).unwrap();
        api.edit_client(ClientUpdate::from_answers("C1", "Ana Maria", "", ""))
            .unwrap();
        api.register_booking(booking("B1", "2024-05-01", "09:00", "Corte"))
            .unwrap();
        api.edit_booking(BookingUpdate::from_answers("B1", "", "10:00", ""))
            .unwrap();
        api.delete_booking("B1").unwrap();

        assert_eq!(api.store().save_count(), 5);
        let saved = api.store().snapshot().unwrap();
        assert_eq!(saved, api.records());
        assert_eq!(saved.client("C1").unwrap().name, "Ana Maria");
    }

    #[test]
    fn edit_with_rejected_fields_still_saves() {
        let mut api = BookdeskApi::new(InMemoryStore::new());
        api.register_client(ana()).unwrap();
        api.register_booking(booking("B1", "2024-05-01", "09:00", "Corte"))
            .unwrap();

        api.edit_booking(BookingUpdate::from_answers("B1", "2024-02-30", "", ""))
            .unwrap();
        assert_eq!(api.store().save_count(), 3);
    }

    #[test]
    fn rejected_operations_do_not_save() {
        let mut api = BookdeskApi::new(InMemoryStore::new());
        api.register_client(ana()).unwrap();

        assert!(api.register_client(ana()).is_err());
        assert!(api
            .register_booking(NewBooking {
                client_id: "C9".into(),
                ..booking("B1", "2024-05-01", "09:00", "Corte")
            })
            .is_err());
        assert!(api.delete_booking("B1").is_err());
        assert!(api
            .edit_client(ClientUpdate::from_answers("C9", "X", "", ""))
            .is_err());

        assert_eq!(api.store().save_count(), 1);
        assert_eq!(api.records().clients().len(), 1);
        assert!(api.records().bookings().is_empty());
    }

    #[test]
    fn save_failure_is_distinct_from_validation() {
        let mut api = BookdeskApi::new(ReadOnlyStore);
        let err = api.register_client(ana()).unwrap_err();

        assert!(matches!(err, BookdeskError::Save { .. }));
        assert!(!err.is_validation());
        // The in-memory change stays; only persistence failed.
        assert!(api.records().contains_client("C1"));
    }

    #[test]
    fn booking_scenario() {
        let mut api = BookdeskApi::new(InMemoryStore::new());
        api.register_client(ana()).unwrap();
        api.register_booking(booking("B1", "2024-05-01", "09:00", "Corte"))
            .unwrap();
        api.register_booking(booking("B2", "2024-04-20", "18:30", "Tinte"))
            .unwrap();

        let listed = api.list_bookings().unwrap().listed_bookings;
        let ids: Vec<_> = listed.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["B2", "B1"]);

        let err = api
            .register_booking(booking("B2", "2024-06-01", "10:00", "Corte"))
            .unwrap_err();
        assert!(matches!(err, BookdeskError::DuplicateBookingId(_)));
        assert_eq!(api.find_bookings("B2").unwrap().listed_bookings.len(), 1);

        api.delete_booking("B1").unwrap();
        assert!(api.find_bookings("B1").unwrap().listed_bookings.is_empty());
        assert_eq!(
            api.find_bookings("B2").unwrap().listed_bookings,
            vec![Booking::new("B2", "C1", "2024-04-20", "18:30", "Tinte")]
        );
    }

    #[test]
    fn round_trips_through_the_store() {
        let mut api = BookdeskApi::new(InMemoryStore::new());
        api.register_client(ana()).unwrap();
        api.register_booking(booking("B1", "2024-05-01", "09:00", "Corte"))
            .unwrap();
        api.register_booking(booking("B2", "2024-04-20", "18:30", "Tinte"))
            .unwrap();
        let before = api.records().clone();

        let BookdeskApi { store, .. } = api;
        let mut reopened = BookdeskApi::new(store);
        reopened.load().unwrap();

        assert_eq!(reopened.records(), &before);
        assert_eq!(
            reopened.find_client("C1").unwrap().listed_clients,
            vec![Client::new("C1", "Ana", "ana@example.com", "555-0101")]
        );
    }

    #[test]
    fn prompt_checks_mirror_command_rules() {
        let mut api = BookdeskApi::new(InMemoryStore::new());
        api.register_client(ana()).unwrap();

        assert!(matches!(
            api.check_new_client_id("C1"),
            Err(BookdeskError::DuplicateClientId(_))
        ));
        assert!(matches!(
            api.check_new_booking_id(""),
            Err(BookdeskError::EmptyId)
        ));
        assert!(api.check_new_booking_id("B1").is_ok());
        assert!(api.client_exists(" C1 "));
        assert!(!api.client_exists("C2"));
        assert!(api.is_valid_date("2024-02-29"));
        assert!(!api.is_valid_time("7:00"));
    }
}
