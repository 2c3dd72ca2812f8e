// src/domain/stats.rs

use crate::domain::logic::resolve_status;
use crate::domain::room::{Room, RoomStatus};
use chrono::NaiveDate;

/// A room together with its status on the date being viewed.
#[derive(Debug, Clone)]
pub struct RoomView {
    pub room: Room,
    pub status: RoomStatus,
}

/// Resolves every room once for `date`.
pub fn resolve_rooms(rooms: Vec<Room>, date: NaiveDate) -> Vec<RoomView> {
    rooms
        .into_iter()
        .map(|room| {
            let status = resolve_status(room.booking.as_ref(), date);
            RoomView { room, status }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverviewStats {
    pub total: usize,
    pub available: usize,
    pub booked: usize,
    pub occupied: usize,
}

impl OverviewStats {
    pub fn from_views(views: &[RoomView]) -> Self {
        let count = |s: RoomStatus| views.iter().filter(|v| v.status == s).count();
        Self {
            total: views.len(),
            available: count(RoomStatus::Available),
            booked: count(RoomStatus::Booked),
            occupied: count(RoomStatus::Occupied),
        }
    }
}

/// Money held by rooms that are occupied on the viewed date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DailyRevenue {
    /// Sum of what has already been collected.
    pub collected: i64,
    /// Sum of the full booking values.
    pub booked_value: i64,
}

impl DailyRevenue {
    pub fn from_views(views: &[RoomView]) -> Self {
        views
            .iter()
            .filter(|v| v.status == RoomStatus::Occupied)
            .filter_map(|v| v.room.payment.as_ref())
            .fold(Self::default(), |acc, p| Self {
                collected: acc.collected.saturating_add(p.advance_paid),
                booked_value: acc.booked_value.saturating_add(p.amount),
            })
    }
}

/// Rooms with a payment that are booked or occupied on the viewed date,
/// occupied first.
pub fn payment_history(views: &[RoomView]) -> Vec<&RoomView> {
    let occupied = views.iter().filter(|v| v.status == RoomStatus::Occupied);
    let booked = views.iter().filter(|v| v.status == RoomStatus::Booked);
    occupied
        .chain(booked)
        .filter(|v| v.room.payment.is_some())
        .collect()
}
