// src/domain/ledger.rs

use crate::domain::logic::resolve_status;
use crate::domain::money::format_money;
use crate::domain::room::{Booking, CancellationRecord, Payment, PaymentStatus, Room, RoomStatus};
use chrono::{NaiveDate, NaiveDateTime};

/// Front-desk rule violations. Nothing is mutated when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("check-out {check_out} must be after check-in {check_in}")]
    InvalidStay {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    #[error("amounts cannot be negative")]
    NegativeAmount,

    #[error("repayment must be positive")]
    NonPositiveRepayment,

    #[error("payment of {} exceeds the pending balance of {}", format_money(*.attempted), format_money(*.pending))]
    Overpayment { attempted: i64, pending: i64 },

    #[error("room {0} has no booking")]
    NoBooking(String),

    #[error("room {0} has no payment on record")]
    NoPayment(String),

    #[error("guest has already checked into room {0}")]
    AlreadyCheckedIn(String),

    #[error("room {room_id} cannot be checked in on {today} (stay is {check_in} to {check_out})")]
    CheckInNotAllowed {
        room_id: String,
        today: NaiveDate,
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    #[error("room {room_id} is {status} on {date}")]
    RoomNotFree {
        room_id: String,
        status: RoomStatus,
        date: NaiveDate,
    },
}

/// What to do with one optional field of a room document.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldUpdate<T> {
    #[default]
    Keep,
    Set(T),
    Clear,
}

impl<T> FieldUpdate<T> {
    fn apply_to(self, slot: &mut Option<T>) {
        match self {
            FieldUpdate::Keep => {}
            FieldUpdate::Set(v) => *slot = Some(v),
            FieldUpdate::Clear => *slot = None,
        }
    }
}

/// A partial update of a room document. Fields left at `Keep` are not written.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomPatch {
    pub room_id: String,
    pub booking: FieldUpdate<Booking>,
    pub payment: FieldUpdate<Payment>,
}

impl RoomPatch {
    pub fn new(room_id: impl Into<String>) -> Self {
        Self {
            room_id: room_id.into(),
            booking: FieldUpdate::Keep,
            payment: FieldUpdate::Keep,
        }
    }

    pub fn apply(self, room: &mut Room) {
        self.booking.apply_to(&mut room.booking);
        self.payment.apply_to(&mut room.payment);
    }
}

/// Attaches a new booking and its payment to `room`.
///
/// A booking that has already run its course (resolves Available for `today`)
/// is overwritten; anything still upcoming or in progress blocks the room.
pub fn place_booking(
    room: &Room,
    booking: Booking,
    payment: Payment,
    today: NaiveDate,
) -> Result<RoomPatch, LedgerError> {
    let status = resolve_status(room.booking.as_ref(), today);
    if status != RoomStatus::Available {
        return Err(LedgerError::RoomNotFree {
            room_id: room.id.clone(),
            status,
            date: today,
        });
    }

    Ok(RoomPatch {
        room_id: room.id.clone(),
        booking: FieldUpdate::Set(booking),
        payment: FieldUpdate::Set(payment),
    })
}

/// Returns the payment after collecting `amount` more.
pub fn apply_repayment(payment: &Payment, amount: i64) -> Result<Payment, LedgerError> {
    if amount <= 0 {
        return Err(LedgerError::NonPositiveRepayment);
    }
    let overpayment = LedgerError::Overpayment {
        attempted: amount,
        pending: payment.pending,
    };
    let advance_paid = payment
        .advance_paid
        .checked_add(amount)
        .ok_or_else(|| overpayment.clone())?;
    if advance_paid > payment.amount {
        return Err(overpayment);
    }

    let pending = payment.amount - advance_paid;

    Ok(Payment {
        advance_paid,
        pending,
        status: PaymentStatus::for_pending(pending),
        ..payment.clone()
    })
}

pub fn repay(room: &Room, amount: i64) -> Result<RoomPatch, LedgerError> {
    let payment = room
        .payment
        .as_ref()
        .ok_or_else(|| LedgerError::NoPayment(room.id.clone()))?;

    let updated = apply_repayment(payment, amount)?;

    let mut patch = RoomPatch::new(&room.id);
    patch.payment = FieldUpdate::Set(updated);
    Ok(patch)
}

/// Marks the guest as arrived. Only valid inside the stay window.
pub fn check_in(room: &Room, today: NaiveDate) -> Result<RoomPatch, LedgerError> {
    let booking = room
        .booking
        .as_ref()
        .ok_or_else(|| LedgerError::NoBooking(room.id.clone()))?;

    if booking.checked_in {
        return Err(LedgerError::AlreadyCheckedIn(room.id.clone()));
    }
    if resolve_status(Some(booking), today) != RoomStatus::Booked || today < booking.check_in {
        return Err(LedgerError::CheckInNotAllowed {
            room_id: room.id.clone(),
            today,
            check_in: booking.check_in,
            check_out: booking.check_out,
        });
    }

    let mut patch = RoomPatch::new(&room.id);
    patch.booking = FieldUpdate::Set(Booking {
        checked_in: true,
        ..booking.clone()
    });
    Ok(patch)
}

/// Clears booking and payment, returning the snapshot to append to the log.
pub fn cancel_booking(
    room: &Room,
    now: NaiveDateTime,
) -> Result<(RoomPatch, CancellationRecord), LedgerError> {
    let booking = room
        .booking
        .clone()
        .ok_or_else(|| LedgerError::NoBooking(room.id.clone()))?;

    let record = CancellationRecord {
        room_id: room.id.clone(),
        room_name: room.name.clone(),
        booking,
        payment: room.payment.clone(),
        cancelled_at: now,
    };

    let patch = RoomPatch {
        room_id: room.id.clone(),
        booking: FieldUpdate::Clear,
        payment: FieldUpdate::Clear,
    };

    Ok((patch, record))
}
