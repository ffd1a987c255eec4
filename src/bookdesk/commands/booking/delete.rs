use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BookdeskError, Result};
use crate::records::Records;

pub fn run(records: &mut Records, id: &str) -> Result<CmdResult> {
    let id = id.trim();
    let booking = records
        .remove_booking(id)
        .ok_or_else(|| BookdeskError::BookingNotFound(id.to_string()))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Booking deleted: {}", booking)));
    Ok(result.with_affected_bookings(vec![booking]))
}
