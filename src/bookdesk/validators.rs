//! Input checks run before any mutation.
//!
//! Date and time checks require the exact zero-padded shape (`YYYY-MM-DD`,
//! `HH:MM`) before handing off to chrono for calendar validity, since chrono
//! alone would also accept forms like `2024-5-1`.

use crate::records::Records;
use chrono::{NaiveDate, NaiveTime};

fn matches_shape(s: &str, shape: &str) -> bool {
    s.len() == shape.len()
        && s.bytes().zip(shape.bytes()).all(|(c, p)| match p {
            b'9' => c.is_ascii_digit(),
            sep => c == sep,
        })
}

pub fn is_valid_date(s: &str) -> bool {
    matches_shape(s, "9999-99-99") && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

pub fn is_valid_time(s: &str) -> bool {
    matches_shape(s, "99:99") && NaiveTime::parse_from_str(s, "%H:%M").is_ok()
}

pub fn is_client_id_available(records: &Records, id: &str) -> bool {
    !records.contains_client(id)
}

pub fn is_booking_id_available(records: &Records, id: &str) -> bool {
    records.booking(id).is_none()
}
