// src/domain/money.rs

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Currency symbol shown next to every amount.
pub const CURRENCY: &str = "₹";

/// Largest amount the desk accepts in one field: ₹1,00,00,000.00.
pub const MAX_AMOUNT: i64 = 1_000_000_000;

/// Parses a decimal amount like `150`, `150.5` or `150.50` into minor units.
/// Negative amounts, more than two decimals and exponents are rejected.
pub fn parse_money(input: &str) -> Option<i64> {
    let value = Decimal::from_str(input.trim()).ok()?;
    if value.is_sign_negative() || value.scale() > 2 {
        return None;
    }

    value.checked_mul(Decimal::ONE_HUNDRED)?.trunc().to_i64()
}

/// `12345` -> `₹123.45`
pub fn format_money(minor: i64) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    let abs = minor.unsigned_abs();
    format!("{sign}{CURRENCY}{}.{:02}", abs / 100, abs % 100)
}

/// Minor units as a plain decimal, for spreadsheets.
pub fn to_major(minor: i64) -> f64 {
    minor as f64 / 100.0
}
