use bookdesk::api::{CmdMessage, MessageLevel};
use bookdesk::model::{Booking, Client};
use colored::Colorize;
use std::io::{self, Write};

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn print_error<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message.red())
}

pub(super) fn print_heading<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- {} ---", title.bold())
}

pub(super) fn print_clients<W: Write>(out: &mut W, clients: &[Client]) -> io::Result<()> {
    for client in clients {
        writeln!(out, "{}", client)?;
    }
    Ok(())
}

pub(super) fn print_bookings<W: Write>(out: &mut W, bookings: &[Booking]) -> io::Result<()> {
    for booking in bookings {
        writeln!(out, "{}", booking)?;
    }
    Ok(())
}
