//! # Command Layer
//!
//! One module per operation. Each `run` takes the [`Records`] and plain Rust
//! inputs, validates everything it needs before touching the records, and
//! returns a [`CmdResult`]. Rejected input comes back as a validation
//! [`BookdeskError`](crate::error::BookdeskError) with the records untouched.
//!
//! Commands never persist and never print; the API decides when to save and
//! the CLI decides how to show the result.
//!
//! [`Records`]: crate::records::Records

use crate::model::{Booking, Client};

pub mod booking;
pub mod client;
pub mod helpers;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_clients: Vec<Client>,
    pub affected_bookings: Vec<Booking>,
    pub listed_clients: Vec<Client>,
    pub listed_bookings: Vec<Booking>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_clients(mut self, clients: Vec<Client>) -> Self {
        self.affected_clients = clients;
        self
    }

    pub fn with_affected_bookings(mut self, bookings: Vec<Booking>) -> Self {
        self.affected_bookings = bookings;
        self
    }

    pub fn with_listed_clients(mut self, clients: Vec<Client>) -> Self {
        self.listed_clients = clients;
        self
    }

    pub fn with_listed_bookings(mut self, bookings: Vec<Booking>) -> Self {
        self.listed_bookings = bookings;
        self
    }

    pub fn has_level(&self, level: MessageLevel) -> bool {
        self.messages.iter().any(|m| m.level == level)
    }
}

/// Input for registering a client. Contact fields are free text.
#[derive(Debug, Clone, Default)]
pub struct NewClient {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Input for registering a booking.
#[derive(Debug, Clone, Default)]
pub struct NewBooking {
    pub id: String,
    pub client_id: String,
    pub date: String,
    pub time: String,
    pub service: String,
}

/// Partial edit of a client. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct ClientUpdate {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ClientUpdate {
    /// Builds an update from raw prompt answers, where a blank answer means "keep".
    pub fn from_answers(id: impl Into<String>, name: &str, email: &str, phone: &str) -> Self {
        Self {
            id: id.into(),
            name: helpers::non_blank(name),
            email: helpers::non_blank(email),
            phone: helpers::non_blank(phone),
        }
    }
}

/// Partial edit of a booking. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct BookingUpdate {
    pub id: String,
    pub date: Option<String>,
    pub time: Option<String>,
    pub service: Option<String>,
}

impl BookingUpdate {
    /// Builds an update from raw prompt answers, where a blank answer means "keep".
    pub fn from_answers(id: impl Into<String>, date: &str, time: &str, service: &str) -> Self {
        Self {
            id: id.into(),
            date: helpers::non_blank(date),
            time: helpers::non_blank(time),
            service: helpers::non_blank(service),
        }
    }
}
