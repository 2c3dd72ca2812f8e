// src/forms.rs
//
// Decoding and validating what the dashboard forms post. Everything here runs
// before any document is touched; failures come back as per-field messages.

use crate::domain::enquiry::{EnquiryDraft, EnquiryType};
use crate::domain::money::parse_money;
use crate::domain::PaymentMethod;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use validator::{Validate, ValidationErrors};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Field name -> first message for that field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn summary(&self) -> String {
        self.0
            .iter()
            .map(|(field, msg)| format!("{field}: {msg}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn merge_validation(&mut self, errors: &ValidationErrors) {
        for (field, errs) in errors.field_errors() {
            if let Some(err) = errs.first() {
                let msg = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("invalid {field}"));
                self.insert(&field.to_string(), msg);
            }
        }
    }

    fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Decoded `application/x-www-form-urlencoded` pairs.
#[derive(Debug, Clone, Default)]
pub struct FormData(HashMap<String, String>);

impl FormData {
    pub fn from_body(body: &[u8]) -> Self {
        Self(url::form_urlencoded::parse(body).into_owned().collect())
    }

    pub fn from_query(query: Option<&str>) -> Self {
        Self::from_body(query.unwrap_or_default().as_bytes())
    }

    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// Trimmed value, `None` when missing or blank.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
    }

    /// The value as typed, for putting back into a re-rendered form.
    pub fn raw(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or_default()
    }

    pub fn date(&self, key: &str) -> Option<NaiveDate> {
        self.get(key)
            .and_then(|v| NaiveDate::parse_from_str(v, DATE_FORMAT).ok())
    }
}

fn required_date(data: &FormData, key: &str, label: &str, errors: &mut FieldErrors) -> Option<NaiveDate> {
    match data.get(key) {
        None => {
            errors.insert(key, format!("{label} is required."));
            None
        }
        Some(raw) => match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
            Ok(d) => Some(d),
            Err(_) => {
                errors.insert(key, format!("{label} must be a date (YYYY-MM-DD)."));
                None
            }
        },
    }
}

fn amount(data: &FormData, key: &str, label: &str, errors: &mut FieldErrors) -> Option<i64> {
    match data.get(key) {
        None => {
            errors.insert(key, format!("{label} is required."));
            None
        }
        Some(raw) => {
            let parsed = parse_money(raw);
            if parsed.is_none() {
                errors.insert(key, format!("{label} must be a positive amount."));
            }
            parsed
        }
    }
}

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct BookingForm {
    #[validate(length(min = 1, max = 120, message = "Guest name is required"))]
    pub guest_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub payment_method: PaymentMethod,
    #[validate(range(min = 0, max = 1_000_000_000, message = "Total amount must be between ₹0 and ₹1,00,00,000"))]
    pub total_amount: i64,
    #[validate(range(min = 0, max = 1_000_000_000, message = "Advance payment must be between ₹0 and ₹1,00,00,000"))]
    pub advance_payment: i64,
}

impl BookingForm {
    pub fn parse(data: &FormData) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();

        let guest_name = data.get("guest_name").unwrap_or_default().to_string();
        let check_in = required_date(data, "check_in", "Check-in date", &mut errors);
        let check_out = required_date(data, "check_out", "Check-out date", &mut errors);
        let payment_method = match data.get("payment_method").and_then(PaymentMethod::parse) {
            Some(m) => Some(m),
            None => {
                errors.insert("payment_method", "Choose a payment method.");
                None
            }
        };
        let total_amount = amount(data, "total_amount", "Total amount", &mut errors);
        let advance_payment = amount(data, "advance_payment", "Advance payment", &mut errors);

        let (Some(check_in), Some(check_out), Some(payment_method), Some(total_amount), Some(advance_payment)) =
            (check_in, check_out, payment_method, total_amount, advance_payment)
        else {
            if guest_name.is_empty() {
                errors.insert("guest_name", "Guest name is required");
            }
            return Err(errors);
        };

        let form = Self {
            guest_name,
            check_in,
            check_out,
            payment_method,
            total_amount,
            advance_payment,
        };

        if let Err(e) = form.validate() {
            errors.merge_validation(&e);
        }
        if form.check_out <= form.check_in {
            errors.insert("check_out", "Check-out date must be after check-in date.");
        }
        if form.advance_payment > form.total_amount {
            errors.insert("advance_payment", "Advance payment cannot exceed total amount.");
        }

        errors.into_result().map(|_| form)
    }
}

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct RepaymentForm {
    #[validate(range(min = 1, max = 1_000_000_000, message = "Repayment must be positive and at most ₹1,00,00,000"))]
    pub repayment_amount: i64,
}

impl RepaymentForm {
    pub fn parse(data: &FormData) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();
        let Some(repayment_amount) = amount(data, "repayment_amount", "Repayment", &mut errors) else {
            return Err(errors);
        };

        let form = Self { repayment_amount };
        if let Err(e) = form.validate() {
            errors.merge_validation(&e);
        }
        errors.into_result().map(|_| form)
    }
}

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct EnquiryForm {
    pub enquiry_type: EnquiryType,
    pub booking_date: NaiveDate,
    #[validate(length(max = 2000, message = "Notes are too long"))]
    pub notes: String,
}

impl EnquiryForm {
    pub fn parse(data: &FormData) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();

        let enquiry_type = data.get("enquiry_type").and_then(EnquiryType::parse);
        if enquiry_type.is_none() {
            errors.insert("enquiry_type", "Choose walk-in or by phone.");
        }
        let booking_date = required_date(data, "booking_date", "Booking date", &mut errors);
        let notes = data.get("notes").unwrap_or_default().to_string();

        let (Some(enquiry_type), Some(booking_date)) = (enquiry_type, booking_date) else {
            return Err(errors);
        };

        let form = Self {
            enquiry_type,
            booking_date,
            notes,
        };
        if let Err(e) = form.validate() {
            errors.merge_validation(&e);
        }
        errors.into_result().map(|_| form)
    }

    pub fn into_draft(self) -> EnquiryDraft {
        EnquiryDraft {
            enquiry_type: self.enquiry_type,
            booking_date: self.booking_date,
            notes: self.notes,
        }
    }
}

/// Inclusive report range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// Missing bounds fall back to `today` and a week later.
    pub fn parse(data: &FormData, today: NaiveDate) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();

        let bound = |key: &str, default: NaiveDate, errors: &mut FieldErrors| match data.get(key) {
            None => Some(default),
            Some(_) => required_date(data, key, if key == "from" { "From" } else { "To" }, errors),
        };

        let from = bound("from", today, &mut errors);
        let to = bound("to", today + chrono::Days::new(7), &mut errors);

        let (Some(from), Some(to)) = (from, to) else {
            return Err(errors);
        };
        if from > to {
            errors.insert("to", "End date must not be before start date.");
        }
        errors.into_result().map(|_| Self { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::MAX_AMOUNT;

    fn form(body: &str) -> FormData {
        FormData::from_body(body.as_bytes())
    }

    #[test]
    fn booking_form_decodes_a_valid_submission() {
        let data = form(
            "guest_name=Jane+Smith&check_in=2025-12-10&check_out=2025-12-12\
             &payment_method=Credit+Card&total_amount=720.50&advance_payment=100",
        );
        let parsed = BookingForm::parse(&data).unwrap();

        assert_eq!(parsed.guest_name, "Jane Smith");
        assert_eq!(parsed.payment_method, PaymentMethod::CreditCard);
        assert_eq!(parsed.total_amount, 72_050);
        assert_eq!(parsed.advance_payment, 10_000);
    }

    #[test]
    fn booking_form_reports_each_bad_field() {
        let data = form(
            "guest_name=&check_in=2025-12-10&check_out=2025-12-10\
             &payment_method=Cash&total_amount=100&advance_payment=150",
        );
        let errors = BookingForm::parse(&data).unwrap_err();

        assert_eq!(errors.get("guest_name"), Some("Guest name is required"));
        assert_eq!(errors.get("check_out"), Some("Check-out date must be after check-in date."));
        assert_eq!(errors.get("advance_payment"), Some("Advance payment cannot exceed total amount."));
    }

    #[test]
    fn booking_form_rejects_unparseable_input() {
        let errors = BookingForm::parse(&form("check_in=tomorrow&payment_method=Cheque&total_amount=-1")).unwrap_err();

        assert!(errors.get("check_in").is_some());
        assert!(errors.get("check_out").is_some());
        assert!(errors.get("payment_method").is_some());
        assert!(errors.get("total_amount").is_some());
        assert!(errors.get("guest_name").is_some());
    }

    #[test]
    fn repayment_must_be_positive() {
        assert_eq!(RepaymentForm::parse(&form("repayment_amount=150")).unwrap().repayment_amount, 15_000);
        let zero = RepaymentForm::parse(&form("repayment_amount=0")).unwrap_err();
        assert_eq!(
            zero.get("repayment_amount"),
            Some("Repayment must be positive and at most ₹1,00,00,000")
        );

        let huge = RepaymentForm::parse(&form("repayment_amount=92233720368547758.07")).unwrap_err();
        assert!(huge.get("repayment_amount").is_some());
    }

    #[test]
    fn booking_amounts_are_capped() {
        let at_cap = form(
            "guest_name=Jane&check_in=2025-12-10&check_out=2025-12-12\
             &payment_method=Cash&total_amount=10000000&advance_payment=10000000",
        );
        let parsed = BookingForm::parse(&at_cap).unwrap();
        assert_eq!(parsed.total_amount, MAX_AMOUNT);

        let over = form(
            "guest_name=Jane&check_in=2025-12-10&check_out=2025-12-12\
             &payment_method=Cash&total_amount=10000000.01&advance_payment=0",
        );
        let errors = BookingForm::parse(&over).unwrap_err();
        assert!(errors.get("total_amount").is_some());
    }

    #[test]
    fn enquiry_form_requires_type_and_date() {
        let ok = EnquiryForm::parse(&form("enquiry_type=walk-in&booking_date=2025-12-24&notes=Two+adults")).unwrap();
        assert_eq!(ok.enquiry_type, EnquiryType::WalkIn);
        assert_eq!(ok.notes, "Two adults");

        let bad = EnquiryForm::parse(&form("enquiry_type=email")).unwrap_err();
        assert!(bad.get("enquiry_type").is_some());
        assert!(bad.get("booking_date").is_some());
    }

    #[test]
    fn date_range_defaults_to_the_coming_week() {
        let today = NaiveDate::from_ymd_opt(2025, 12, 10).unwrap();
        let range = DateRange::parse(&FormData::from_query(None), today).unwrap();
        assert_eq!(range.from, today);
        assert_eq!(range.to, NaiveDate::from_ymd_opt(2025, 12, 17).unwrap());

        let inverted = DateRange::parse(&FormData::from_query(Some("from=2025-12-10&to=2025-12-01")), today);
        assert!(inverted.is_err());
    }
}
