//! # In-memory Records
//!
//! [`Records`] owns every client and booking of the running process. The
//! command layer mutates it, the storage layer snapshots it.
//!
//! Clients behave as an id-keyed map that remembers insertion order (listing
//! and the on-disk document follow it). Bookings are a plain list in
//! registration order; sorting is a presentation concern of the list command.
//!
//! Lookups are linear scans. The collections are small and interactive, so an
//! index would only add state to keep consistent.

use crate::model::{Booking, Client};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Records {
    clients: Vec<Client>,
    bookings: Vec<Booking>,
}

impl Records {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds records from loaded collections. A repeated client id replaces
    /// the earlier entry in place.
    pub fn from_parts(clients: Vec<Client>, bookings: Vec<Booking>) -> Self {
        let mut records = Self {
            clients: Vec::with_capacity(clients.len()),
            bookings,
        };
        for client in clients {
            records.insert_client(client);
        }
        records
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn contains_client(&self, id: &str) -> bool {
        self.client(id).is_some()
    }

    pub fn client(&self, id: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    pub fn client_mut(&mut self, id: &str) -> Option<&mut Client> {
        self.clients.iter_mut().find(|c| c.id == id)
    }

    /// Inserts a client, or replaces the one with the same id.
    pub fn insert_client(&mut self, client: Client) {
        match self.client_mut(&client.id) {
            Some(existing) => *existing = client,
            None => self.clients.push(client),
        }
    }

    /// First booking with the given id.
    pub fn booking(&self, id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    pub fn booking_mut(&mut self, id: &str) -> Option<&mut Booking> {
        self.bookings.iter_mut().find(|b| b.id == id)
    }

    pub fn bookings_with_id<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Booking> + 'a {
        self.bookings.iter().filter(move |b| b.id == id)
    }

    pub fn push_booking(&mut self, booking: Booking) {
        self.bookings.push(booking);
    }

    /// Removes the first booking with the given id.
    pub fn remove_booking(&mut self, id: &str) -> Option<Booking> {
        let pos = self.bookings.iter().position(|b| b.id == id)?;
        Some(self.bookings.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_client_insertion_order() {
        let mut records = Records::new();
        records.insert_client(Client::new("C2", "Bea", "", ""));
        records.insert_client(Client::new("C1", "Ana", "", ""));

        let ids: Vec<_> = records.clients().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["C2", "C1"]);
    }

    #[test]
    fn repeated_client_id_replaces_in_place() {
        let records = Records::from_parts(
            vec![
                Client::new("C1", "Ana", "", ""),
                Client::new("C2", "Bea", "", ""),
                Client::new("C1", "Ana Maria", "", ""),
            ],
            Vec::new(),
        );

        assert_eq!(records.clients().len(), 2);
        assert_eq!(records.clients()[0].name, "Ana Maria");
        assert_eq!(records.clients()[1].id, "C2");
    }

    #[test]
    fn removes_only_the_first_matching_booking() {
        let mut records = Records::from_parts(
            Vec::new(),
            vec![
                Booking::new("B1", "C1", "2024-05-01", "09:00", "Corte"),
                Booking::new("B1", "C1", "2024-05-02", "10:00", "Tinte"),
            ],
        );

        let removed = records.remove_booking("B1").unwrap();
        assert_eq!(removed.date, "2024-05-01");
        assert_eq!(records.bookings_with_id("B1").count(), 1);
        assert!(records.remove_booking("B9").is_none());
    }
}
