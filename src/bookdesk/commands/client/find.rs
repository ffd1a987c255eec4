use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::records::Records;

/// Exact-match lookup. A miss is reported, not an error.
pub fn run(records: &Records, id: &str) -> Result<CmdResult> {
    let id = id.trim();
    let mut result = CmdResult::default();
    match records.client(id) {
        Some(client) => {
            result.add_message(CmdMessage::success("Found:"));
            result.listed_clients.push(client.clone());
        }
        None => result.add_message(CmdMessage::error("Not found.")),
    }
    Ok(result)
}
