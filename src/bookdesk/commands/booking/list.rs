use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::records::Records;

/// All bookings by (date, time). The sort is stable, so bookings sharing a
/// slot keep their registration order. The records themselves stay unsorted.
pub fn run(records: &Records) -> Result<CmdResult> {
    let mut bookings = records.bookings().to_vec();
    bookings.sort_by(|a, b| a.schedule_key().cmp(&b.schedule_key()));

    let mut result = CmdResult::default().with_listed_bookings(bookings);
    if result.listed_bookings.is_empty() {
        result.add_message(CmdMessage::info("No bookings."));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Booking;
    use proptest::prelude::*;

    #[test]
    fn orders_by_date_then_time() {
        let records = Records::from_parts(
            Vec::new(),
            vec![
                Booking::new("B1", "C1", "2024-05-01", "09:00", "Corte"),
                Booking::new("B2", "C1", "2024-04-20", "18:30", "Tinte"),
                Booking::new("B3", "C1", "2024-05-01", "08:45", "Peinado"),
            ],
        );

        let result = run(&records).unwrap();
        let ids: Vec<_> = result.listed_bookings.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["B2", "B3", "B1"]);

        let stored: Vec<_> = records.bookings().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(stored, vec!["B1", "B2", "B3"]);
    }

    #[test]
    fn ties_keep_registration_order() {
        let records = Records::from_parts(
            Vec::new(),
            vec![
                Booking::new("B2", "C1", "2024-05-01", "09:00", "Corte"),
                Booking::new("B1", "C2", "2024-05-01", "09:00", "Tinte"),
            ],
        );

        let result = run(&records).unwrap();
        assert_eq!(result.listed_bookings[0].id, "B2");
        assert_eq!(result.listed_bookings[1].id, "B1");
    }

    #[test]
    fn says_so_when_empty() {
        let result = run(&Records::new()).unwrap();
        assert_eq!(result.messages[0].content, "No bookings.");
    }

    prop_compose! {
        fn arbitrary_booking()
            (n in 0u32..1000, day in 1u32..=28, month in 1u32..=12, hour in 0u32..24, minute in 0u32..60)
            -> Booking
        {
            Booking::new(
                format!("B{}", n),
                "C1",
                format!("2024-{:02}-{:02}", month, day),
                format!("{:02}:{:02}", hour, minute),
                "Corte",
            )
        }
    }

    proptest! {
        #[test]
        fn listing_is_never_decreasing(bookings in prop::collection::vec(arbitrary_booking(), 0..40)) {
            let records = Records::from_parts(Vec::new(), bookings.clone());
            let listed = run(&records).unwrap().listed_bookings;

            prop_assert_eq!(listed.len(), bookings.len());
            for pair in listed.windows(2) {
                prop_assert!(pair[0].schedule_key() <= pair[1].schedule_key());
            }
        }
    }
}
