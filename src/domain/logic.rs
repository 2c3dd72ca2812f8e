// src/domain/logic.rs

use crate::domain::room::{Booking, RoomStatus};
use chrono::NaiveDate;

/// Determines the occupancy of a room on `reference` from its booking.
/// The order of checks determines the precedence of the status lifecycle.
///
/// The stay window is `[check_in, check_out)`. Inside it the checked-in flag
/// decides between Occupied and Booked; before it the reservation is still
/// Booked; from `check_out` on the room is Available again, even though the
/// booking record itself stays on the room until someone clears it.
///
/// # Panics
///
/// If the booking's `check_out` is not after its `check_in`. Bookings are
/// validated when they are placed, so this is a caller bug.
pub fn resolve_status(booking: Option<&Booking>, reference: NaiveDate) -> RoomStatus {
    let Some(booking) = booking else {
        return RoomStatus::Available;
    };

    assert!(
        booking.check_out > booking.check_in,
        "booking for {} has check-out {} not after check-in {}",
        booking.guest_name,
        booking.check_out,
        booking.check_in
    );

    if reference >= booking.check_out {
        return RoomStatus::Available;
    }
    if reference < booking.check_in {
        return RoomStatus::Booked;
    }
    if booking.checked_in {
        RoomStatus::Occupied
    } else {
        RoomStatus::Booked
    }
}
