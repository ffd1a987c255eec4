//! The interactive menu loop.
//!
//! The shell loads the records once, then repeats: show the menu, read one
//! line, run the chosen operation. Each operation prompts for what it needs
//! and rejects a bad answer immediately, before asking for the next field.
//! Rejections and failed saves are reported and the loop goes on; only a
//! broken console ends the session with an error. Closing stdin ends it like
//! the exit option.

use super::print::{
    print_bookings, print_clients, print_error, print_heading, print_messages,
};
use bookdesk::api::{BookdeskApi, BookingUpdate, ClientUpdate, NewBooking, NewClient};
use bookdesk::error::{BookdeskError, Result};
use bookdesk::store::DataStore;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    RegisterClient,
    RegisterBooking,
    ListClients,
    ListBookings,
    FindClient,
    FindBooking,
    EditClient,
    EditBooking,
    DeleteBooking,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 10] = [
        MenuChoice::RegisterClient,
        MenuChoice::RegisterBooking,
        MenuChoice::ListClients,
        MenuChoice::ListBookings,
        MenuChoice::FindClient,
        MenuChoice::FindBooking,
        MenuChoice::EditClient,
        MenuChoice::EditBooking,
        MenuChoice::DeleteBooking,
        MenuChoice::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::RegisterClient => "Register client",
            MenuChoice::RegisterBooking => "Register booking",
            MenuChoice::ListClients => "List clients",
            MenuChoice::ListBookings => "List bookings",
            MenuChoice::FindClient => "Find client",
            MenuChoice::FindBooking => "Find booking",
            MenuChoice::EditClient => "Edit client",
            MenuChoice::EditBooking => "Edit booking",
            MenuChoice::DeleteBooking => "Delete booking",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Menu number, starting at 1.
    pub fn number(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0) + 1
    }

    pub fn parse(selection: &str) -> Option<Self> {
        let n: usize = selection.trim().parse().ok()?;
        Self::ALL.get(n.checked_sub(1)?).copied()
    }
}

const FAREWELL: &str = "Thank you for using the booking system!";

pub struct Shell<S: DataStore, R: BufRead, W: Write> {
    api: BookdeskApi<S>,
    input: R,
    out: W,
}

impl<S: DataStore, R: BufRead, W: Write> Shell<S, R, W> {
    pub fn new(api: BookdeskApi<S>, input: R, out: W) -> Self {
        Self { api, input, out }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (BookdeskApi<S>, W) {
        (self.api, self.out)
    }

    pub fn run(&mut self) -> Result<()> {
        let loaded = self.api.load()?;
        print_messages(&mut self.out, &loaded.messages)?;

        loop {
            self.print_menu()?;
            let selection = match self.read_line()? {
                Some(line) => line,
                None => break,
            };

            match MenuChoice::parse(&selection) {
                Some(MenuChoice::Exit) => break,
                Some(choice) => match self.execute(choice) {
                    Err(e) if is_end_of_input(&e) => break,
                    other => other?,
                },
                None => print_error(&mut self.out, "Invalid option.")?,
            }
        }

        writeln!(self.out)?;
        writeln!(self.out, "{}", FAREWELL)?;
        self.out.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "==============================")?;
        writeln!(self.out, "       BOOKING SYSTEM")?;
        writeln!(self.out, "==============================")?;
        for choice in MenuChoice::ALL {
            writeln!(self.out, "{}. {}", choice.number(), choice.label())?;
        }
        write!(self.out, "Choose an option: ")?;
        self.out.flush()?;
        Ok(())
    }

    /// Runs one operation, reporting rejected input and failed saves in place.
    fn execute(&mut self, choice: MenuChoice) -> Result<()> {
        debug!("Menu choice: {:?}", choice);
        let outcome = match choice {
            MenuChoice::RegisterClient => self.register_client(),
            MenuChoice::RegisterBooking => self.register_booking(),
            MenuChoice::ListClients => self.list_clients(),
            MenuChoice::ListBookings => self.list_bookings(),
            MenuChoice::FindClient => self.find_client(),
            MenuChoice::FindBooking => self.find_booking(),
            MenuChoice::EditClient => self.edit_client(),
            MenuChoice::EditBooking => self.edit_booking(),
            MenuChoice::DeleteBooking => self.delete_booking(),
            MenuChoice::Exit => Ok(()),
        };

        match outcome {
            Err(e) if e.is_validation() => {
                print_error(&mut self.out, &e.to_string())?;
                Ok(())
            }
            Err(e @ BookdeskError::Save { .. }) => {
                writeln!(
                    self.out,
                    "{} {}",
                    "Changes were NOT saved to disk:".red().bold(),
                    e
                )?;
                print_error(
                    &mut self.out,
                    "They are kept in memory for this session only.",
                )?;
                Ok(())
            }
            other => other,
        }
    }

    fn register_client(&mut self) -> Result<()> {
        print_heading(&mut self.out, "Register Client")?;
        let id = self.prompt("Client ID: ")?;
        self.api.check_new_client_id(&id)?;

        let name = self.prompt("Name: ")?;
        let email = self.prompt("Email: ")?;
        let phone = self.prompt("Phone: ")?;

        let result = self.api.register_client(NewClient {
            id,
            name,
            email,
            phone,
        })?;
        print_messages(&mut self.out, &result.messages)?;
        Ok(())
    }

    fn register_booking(&mut self) -> Result<()> {
        print_heading(&mut self.out, "Register Booking")?;
        let id = self.prompt("Booking ID: ")?;
        self.api.check_new_booking_id(&id)?;

        let client_id = self.prompt("Client ID: ")?;
        if !self.api.client_exists(&client_id) {
            return Err(BookdeskError::UnknownClient(client_id));
        }

        let date = self.prompt("Date (YYYY-MM-DD): ")?;
        if !self.api.is_valid_date(&date) {
            return Err(BookdeskError::InvalidDate(date));
        }

        let time = self.prompt("Time (HH:MM): ")?;
        if !self.api.is_valid_time(&time) {
            return Err(BookdeskError::InvalidTime(time));
        }

        let service = self.prompt("Service: ")?;

        let result = self.api.register_booking(NewBooking {
            id,
            client_id,
            date,
            time,
            service,
        })?;
        print_messages(&mut self.out, &result.messages)?;
        Ok(())
    }

    fn list_clients(&mut self) -> Result<()> {
        print_heading(&mut self.out, "Clients")?;
        let result = self.api.list_clients()?;
        print_clients(&mut self.out, &result.listed_clients)?;
        print_messages(&mut self.out, &result.messages)?;
        Ok(())
    }

    fn list_bookings(&mut self) -> Result<()> {
        print_heading(&mut self.out, "Bookings")?;
        let result = self.api.list_bookings()?;
        print_bookings(&mut self.out, &result.listed_bookings)?;
        print_messages(&mut self.out, &result.messages)?;
        Ok(())
    }

    fn find_client(&mut self) -> Result<()> {
        print_heading(&mut self.out, "Find Client")?;
        let id = self.prompt("ID: ")?;
        let result = self.api.find_client(&id)?;
        print_messages(&mut self.out, &result.messages)?;
        print_clients(&mut self.out, &result.listed_clients)?;
        Ok(())
    }

    fn find_booking(&mut self) -> Result<()> {
        print_heading(&mut self.out, "Find Booking")?;
        let id = self.prompt("ID: ")?;
        let result = self.api.find_bookings(&id)?;
        print_bookings(&mut self.out, &result.listed_bookings)?;
        print_messages(&mut self.out, &result.messages)?;
        Ok(())
    }

    fn edit_client(&mut self) -> Result<()> {
        print_heading(&mut self.out, "Edit Client")?;
        let id = self.prompt("ID of the client to edit: ")?;
        let current = self
            .api
            .records()
            .client(&id)
            .cloned()
            .ok_or_else(|| BookdeskError::ClientNotFound(id.clone()))?;

        writeln!(self.out, "Current client:")?;
        writeln!(self.out, "{}", current)?;
        writeln!(self.out, "{}", "Leave a field blank to keep its current value.".dimmed())?;

        let name = self.prompt(&format!("Name ({}): ", current.name))?;
        let email = self.prompt(&format!("Email ({}): ", current.email))?;
        let phone = self.prompt(&format!("Phone ({}): ", current.phone))?;

        let result = self
            .api
            .edit_client(ClientUpdate::from_answers(id, &name, &email, &phone))?;
        print_messages(&mut self.out, &result.messages)?;
        Ok(())
    }

    fn edit_booking(&mut self) -> Result<()> {
        print_heading(&mut self.out, "Edit Booking")?;
        let id = self.prompt("ID of the booking to edit: ")?;
        let current = self
            .api
            .records()
            .booking(&id)
            .cloned()
            .ok_or_else(|| BookdeskError::BookingNotFound(id.clone()))?;

        writeln!(self.out, "Current booking:")?;
        writeln!(self.out, "{}", current)?;
        writeln!(self.out, "{}", "Leave a field blank to keep its current value.".dimmed())?;

        let date = self.prompt(&format!("Date ({}): ", current.date))?;
        let time = self.prompt(&format!("Time ({}): ", current.time))?;
        let service = self.prompt(&format!("Service ({}): ", current.service))?;

        let result = self
            .api
            .edit_booking(BookingUpdate::from_answers(id, &date, &time, &service))?;
        print_messages(&mut self.out, &result.messages)?;
        Ok(())
    }

    fn delete_booking(&mut self) -> Result<()> {
        print_heading(&mut self.out, "Delete Booking")?;
        let id = self.prompt("ID: ")?;
        let result = self.api.delete_booking(&id)?;
        print_messages(&mut self.out, &result.messages)?;
        Ok(())
    }

    /// Shows `label` and reads the trimmed answer. Closed input is an
    /// `UnexpectedEof` error so a half-answered operation never mutates.
    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;
        self.read_line()?.ok_or_else(|| {
            BookdeskError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ))
        })
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn is_end_of_input(err: &BookdeskError) -> bool {
    matches!(err, BookdeskError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
}
