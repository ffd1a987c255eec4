use crate::commands::helpers::new_booking_id;
use crate::commands::{CmdMessage, CmdResult, NewBooking};
use crate::error::{BookdeskError, Result};
use crate::model::Booking;
use crate::records::Records;
use crate::validators::{is_valid_date, is_valid_time};

pub fn run(records: &mut Records, input: NewBooking) -> Result<CmdResult> {
    let id = new_booking_id(records, &input.id)?.to_string();

    let client_id = input.client_id.trim();
    if !records.contains_client(client_id) {
        return Err(BookdeskError::UnknownClient(client_id.to_string()));
    }

    let date = input.date.trim();
    if !is_valid_date(date) {
        return Err(BookdeskError::InvalidDate(date.to_string()));
    }

    let time = input.time.trim();
    if !is_valid_time(time) {
        return Err(BookdeskError::InvalidTime(time.to_string()));
    }

    let booking = Booking::new(id, client_id, date, time, input.service.trim());
    records.push_booking(booking.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Booking registered: {}",
        booking
    )));
    Ok(result.with_affected_bookings(vec![booking]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Client;

    fn records_with_ana() -> Records {
        let mut records = Records::new();
        records.insert_client(Client::new("C1", "Ana", "", ""));
        records
    }

    fn corte() -> NewBooking {
        NewBooking {
            id: "B1".into(),
            client_id: "C1".into(),
            date: "2024-05-01".into(),
            time: "09:00".into(),
            service: "Corte".into(),
        }
    }

    #[test]
    fn appends_booking() {
        let mut records = records_with_ana();
        let result = run(&mut records, corte()).unwrap();

        assert_eq!(records.bookings().len(), 1);
        assert_eq!(
            records.bookings()[0],
            Booking::new("B1", "C1", "2024-05-01", "09:00", "Corte")
        );
        assert_eq!(result.affected_bookings.len(), 1);
    }

    #[test]
    fn rejects_unknown_client() {
        let mut records = records_with_ana();
        let input = NewBooking {
            client_id: "C9".into(),
            ..corte()
        };
        let err = run(&mut records, input).unwrap_err();

        assert!(matches!(err, BookdeskError::UnknownClient(id) if id == "C9"));
        assert!(records.bookings().is_empty());
    }

    #[test]
    fn rejects_duplicate_id() {
        let mut records = records_with_ana();
        run(&mut records, corte()).unwrap();

        let again = NewBooking {
            date: "2024-06-01".into(),
            ..corte()
        };
        let err = run(&mut records, again).unwrap_err();

        assert!(matches!(err, BookdeskError::DuplicateBookingId(_)));
        assert_eq!(records.bookings_with_id("B1").count(), 1);
    }

    #[test]
    fn rejects_empty_id() {
        let mut records = records_with_ana();
        let input = NewBooking {
            id: "".into(),
            ..corte()
        };
        assert!(matches!(
            run(&mut records, input),
            Err(BookdeskError::EmptyId)
        ));
    }

    #[test]
    fn rejects_invalid_date_and_time_separately() {
        let mut records = records_with_ana();

        let bad_date = NewBooking {
            date: "2024-02-30".into(),
            ..corte()
        };
        assert!(matches!(
            run(&mut records, bad_date),
            Err(BookdeskError::InvalidDate(d)) if d == "2024-02-30"
        ));

        let bad_time = NewBooking {
            time: "24:00".into(),
            ..corte()
        };
        assert!(matches!(
            run(&mut records, bad_time),
            Err(BookdeskError::InvalidTime(t)) if t == "24:00"
        ));

        assert!(records.bookings().is_empty());
    }
}
