use crate::domain::{PaymentStatus, RoomStatus};
use crate::forms::FieldErrors;
use maud::{html, Markup};

pub mod error;
pub mod room_card;

pub use error::error_page;
pub use room_card::room_card;

pub fn status_badge(status: RoomStatus) -> Markup {
    let class = match status {
        RoomStatus::Available => "badge badge-available",
        RoomStatus::Booked => "badge badge-booked",
        RoomStatus::Occupied => "badge badge-occupied",
    };
    html! { span class=(class) { (status.as_str()) } }
}

pub fn payment_badge(status: PaymentStatus) -> Markup {
    let class = match status {
        PaymentStatus::Paid => "badge badge-paid",
        PaymentStatus::Pending => "badge badge-pending",
        PaymentStatus::Failed => "badge badge-failed",
    };
    html! { span class=(class) { (status.as_str()) } }
}

/// Inline message under a form field, if it has one.
pub fn field_error(errors: &FieldErrors, field: &str) -> Markup {
    html! {
        @if let Some(msg) = errors.get(field) {
            p class="field-error" { (msg) }
        }
    }
}
