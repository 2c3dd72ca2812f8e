// src/domain/report.rs

use crate::domain::enquiry::Enquiry;
use crate::domain::room::{Room, RoomStatus};
use chrono::NaiveDate;

/// Activity between two dates, both inclusive.
#[derive(Debug, Clone)]
pub struct Report {
    pub from: NaiveDate,
    pub to: NaiveDate,
    /// Rooms whose booking checks in within the range.
    pub bookings: Vec<Room>,
    /// Rooms whose payment was taken within the range.
    pub payments: Vec<Room>,
    pub enquiries: Vec<Enquiry>,
}

impl Report {
    pub fn build(rooms: &[Room], enquiries: Vec<Enquiry>, from: NaiveDate, to: NaiveDate) -> Self {
        let in_range = |d: NaiveDate| from <= d && d <= to;

        let bookings = rooms
            .iter()
            .filter(|r| r.booking.as_ref().is_some_and(|b| in_range(b.check_in)))
            .cloned()
            .collect();

        let payments = rooms
            .iter()
            .filter(|r| r.payment.as_ref().is_some_and(|p| in_range(p.date)))
            .cloned()
            .collect();

        let enquiries = enquiries
            .into_iter()
            .filter(|e| in_range(e.created_at.date()))
            .collect();

        Self {
            from,
            to,
            bookings,
            payments,
            enquiries,
        }
    }
}

/// How a booking is labelled in reports: by arrival, not by date.
pub fn booking_label(room: &Room) -> RoomStatus {
    match &room.booking {
        Some(b) if b.checked_in => RoomStatus::Occupied,
        Some(_) => RoomStatus::Booked,
        None => RoomStatus::Available,
    }
}
