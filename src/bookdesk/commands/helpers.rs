use crate::error::{BookdeskError, Result};
use crate::records::Records;
use crate::validators::{is_booking_id_available, is_client_id_available};

/// Trimmed answer, or `None` when the user left it blank.
pub fn non_blank(answer: &str) -> Option<String> {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn require_id(id: &str) -> Result<&str> {
    let id = id.trim();
    if id.is_empty() {
        return Err(BookdeskError::EmptyId);
    }
    Ok(id)
}

/// Checks that `id` can name a new client.
pub fn new_client_id<'a>(records: &Records, id: &'a str) -> Result<&'a str> {
    let id = require_id(id)?;
    if !is_client_id_available(records, id) {
        return Err(BookdeskError::DuplicateClientId(id.to_string()));
    }
    Ok(id)
}

/// Checks that `id` can name a new booking.
pub fn new_booking_id<'a>(records: &Records, id: &'a str) -> Result<&'a str> {
    let id = require_id(id)?;
    if !is_booking_id_available(records, id) {
        return Err(BookdeskError::DuplicateBookingId(id.to_string()));
    }
    Ok(id)
}
