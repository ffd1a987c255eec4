use crate::commands::helpers::new_client_id;
use crate::commands::{CmdMessage, CmdResult, NewClient};
use crate::error::Result;
use crate::model::Client;
use crate::records::Records;

pub fn run(records: &mut Records, input: NewClient) -> Result<CmdResult> {
    let id = new_client_id(records, &input.id)?.to_string();

    let client = Client::new(
        id,
        input.name.trim(),
        input.email.trim(),
        input.phone.trim(),
    );
    records.insert_client(client.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Client registered: {}",
        client
    )));
    Ok(result.with_affected_clients(vec![client]))
}
