// src/domain/room.rs

use crate::domain::ledger::LedgerError;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Occupancy of a room on a given date. Always derived, never stored as truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomStatus {
    Available,
    Booked,
    Occupied,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Available => "Available",
            RoomStatus::Booked => "Booked",
            RoomStatus::Occupied => "Occupied",
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A physical room from the roster plus whatever the front desk attached to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking: Option<Booking>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment: Option<Payment>,
}

impl Room {
    pub fn empty(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            booking: None,
            payment: None,
        }
    }
}

/// A reservation. `check_in` is inclusive, `check_out` exclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub guest_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default)]
    pub checked_in: bool,
}

impl Booking {
    pub fn new(
        guest_name: impl Into<String>,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Self, LedgerError> {
        if check_out <= check_in {
            return Err(LedgerError::InvalidStay {
                check_in,
                check_out,
            });
        }

        Ok(Self {
            guest_name: guest_name.into(),
            check_in,
            check_out,
            checked_in: false,
        })
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    Pending,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Failed => "Failed",
        }
    }

    /// Paid exactly when nothing is left to collect.
    pub fn for_pending(pending: i64) -> Self {
        if pending <= 0 {
            PaymentStatus::Paid
        } else {
            PaymentStatus::Pending
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Credit Card")]
    CreditCard,
    Cash,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::CreditCard,
        PaymentMethod::Cash,
        PaymentMethod::BankTransfer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::Cash => "Cash",
            PaymentMethod::BankTransfer => "Bank Transfer",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == s)
    }
}

/// Money on a booking, in minor currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub invoice_id: String,
    pub guest_name: String,
    pub date: NaiveDate,
    pub amount: i64,
    pub advance_paid: i64,
    pub pending: i64,
    pub status: PaymentStatus,
    pub method: PaymentMethod,
}

impl Payment {
    pub fn new(
        invoice_id: impl Into<String>,
        guest_name: impl Into<String>,
        date: NaiveDate,
        amount: i64,
        advance_paid: i64,
        method: PaymentMethod,
    ) -> Result<Self, LedgerError> {
        if amount < 0 || advance_paid < 0 {
            return Err(LedgerError::NegativeAmount);
        }
        if advance_paid > amount {
            return Err(LedgerError::Overpayment {
                attempted: advance_paid,
                pending: amount,
            });
        }

        let pending = amount - advance_paid;
        Ok(Self {
            invoice_id: invoice_id.into(),
            guest_name: guest_name.into(),
            date,
            amount,
            advance_paid,
            pending,
            status: PaymentStatus::for_pending(pending),
            method,
        })
    }
}

/// Snapshot written when a booking is cancelled. Never edited afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancellationRecord {
    pub room_id: String,
    pub room_name: String,
    pub booking: Booking,
    pub payment: Option<Payment>,
    pub cancelled_at: NaiveDateTime,
}
