use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::records::Records;

/// Every booking with exactly this id, in stored order.
pub fn run(records: &Records, id: &str) -> Result<CmdResult> {
    let matches: Vec<_> = records.bookings_with_id(id.trim()).cloned().collect();
    let mut result = CmdResult::default().with_listed_bookings(matches);
    if result.listed_bookings.is_empty() {
        result.add_message(CmdMessage::error("No booking found with that id."));
    }
    Ok(result)
}
