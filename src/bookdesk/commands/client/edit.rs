use crate::commands::helpers::non_blank;
use crate::commands::{ClientUpdate, CmdMessage, CmdResult};
use crate::error::{BookdeskError, Result};
use crate::records::Records;

pub fn run(records: &mut Records, update: ClientUpdate) -> Result<CmdResult> {
    let id = update.id.trim();
    let client = records
        .client_mut(id)
        .ok_or_else(|| BookdeskError::ClientNotFound(id.to_string()))?;

    if let Some(name) = update.name.as_deref().and_then(non_blank) {
        client.name = name;
    }
    if let Some(email) = update.email.as_deref().and_then(non_blank) {
        client.email = email;
    }
    if let Some(phone) = update.phone.as_deref().and_then(non_blank) {
        client.phone = phone;
    }

    let client = client.clone();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Client updated: {}", client)));
    Ok(result.with_affected_clients(vec![client]))
}
