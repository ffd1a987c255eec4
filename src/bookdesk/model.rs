use serde::{Deserialize, Serialize};
use std::fmt;

// Field names on disk are kept from the first data files this tool produced.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefono")]
    pub phone: String,
}

impl Client {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({}, {})", self.id, self.name, self.email, self.phone)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    #[serde(rename = "id_cliente")]
    pub client_id: String,
    /// `YYYY-MM-DD`
    #[serde(rename = "fecha")]
    pub date: String,
    /// `HH:MM`, 24-hour clock
    #[serde(rename = "hora")]
    pub time: String,
    #[serde(rename = "servicio")]
    pub service: String,
}

impl Booking {
    pub fn new(
        id: impl Into<String>,
        client_id: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        service: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            client_id: client_id.into(),
            date: date.into(),
            time: time.into(),
            service: service.into(),
        }
    }

    /// Sort key for listings. Both parts are fixed-width and zero-padded, so
    /// plain string order is chronological.
    pub fn schedule_key(&self) -> (&str, &str) {
        (&self.date, &self.time)
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Booking {}: Client {}, {} {}, Service: {}",
            self.id, self.client_id, self.date, self.time, self.service
        )
    }
}
