use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::records::Records;

pub fn run(records: &Records) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed_clients(records.clients().to_vec());
    if result.listed_clients.is_empty() {
        result.add_message(CmdMessage::info("No clients."));
    }
    Ok(result)
}
