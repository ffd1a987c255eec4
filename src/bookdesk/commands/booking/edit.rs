use crate::commands::helpers::non_blank;
use crate::commands::{BookingUpdate, CmdMessage, CmdResult};
use crate::error::{BookdeskError, Result};
use crate::records::Records;
use crate::validators::{is_valid_date, is_valid_time};

/// Applies each field independently: an invalid date or time is skipped with a
/// warning while the remaining fields of the same update still apply. The
/// client reference is not re-checked. Values are trimmed and blank ones
/// ignored. With duplicate ids only the first booking is touched.
pub fn run(records: &mut Records, update: BookingUpdate) -> Result<CmdResult> {
    let id = update.id.trim();
    let booking = records
        .booking_mut(id)
        .ok_or_else(|| BookdeskError::BookingNotFound(id.to_string()))?;

    let mut result = CmdResult::default();

    if let Some(date) = update.date.as_deref().and_then(non_blank) {
        if is_valid_date(&date) {
            booking.date = date;
        } else {
            result.add_message(CmdMessage::warning(format!(
                "Invalid date {:?}, date left unchanged.",
                date
            )));
        }
    }
    if let Some(time) = update.time.as_deref().and_then(non_blank) {
        if is_valid_time(&time) {
            booking.time = time;
        } else {
            result.add_message(CmdMessage::warning(format!(
                "Invalid time {:?}, time left unchanged.",
                time
            )));
        }
    }
    if let Some(service) = update.service.as_deref().and_then(non_blank) {
        booking.service = service;
    }

    let booking = booking.clone();
    result.add_message(CmdMessage::success(format!("Booking updated: {}", booking)));
    Ok(result.with_affected_bookings(vec![booking]))
}
