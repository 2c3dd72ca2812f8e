use crate::domain::PaymentMethod;
use crate::forms::{FieldErrors, FormData};
use crate::templates::components::field_error;
use crate::templates::desktop_layout;
use crate::templates::layouts::desktop::Nav;
use chrono::NaiveDate;
use maud::{html, Markup};

pub struct BookingVm {
    pub room_id: String,
    pub room_name: String,
    pub date: NaiveDate,
    /// What was submitted; empty on first display.
    pub values: FormData,
    pub errors: FieldErrors,
    /// Rejection that is not about one field, e.g. the room being taken.
    pub alert: Option<String>,
}

impl BookingVm {
    fn value(&self, key: &str, default: impl Into<String>) -> String {
        match self.values.raw(key) {
            "" => default.into(),
            v => v.to_string(),
        }
    }
}

pub fn booking_page(vm: &BookingVm) -> Markup {
    let check_out_default = vm.date.succ_opt().unwrap_or(vm.date);
    let method = vm.value("payment_method", PaymentMethod::CreditCard.as_str());

    desktop_layout(
        &format!("Book {}", vm.room_name),
        Nav::Dashboard,
        None,
        html! {
            main class="container narrow" {
                h1 { "Book " (vm.room_name) }
                p class="lead" { "Fill in the details below to complete the booking." }

                @if let Some(alert) = &vm.alert {
                    div class="alert" role="alert" { (alert) }
                }

                form method="post" action=(format!("/rooms/{}/book?date={}", vm.room_id, vm.date)) class="stack" {
                    label for="guest_name" { "Guest Name" }
                    input type="text" id="guest_name" name="guest_name" value=(vm.value("guest_name", "")) required;
                    (field_error(&vm.errors, "guest_name"))

                    div class="row" {
                        div {
                            label for="check_in" { "Check-in" }
                            input type="date" id="check_in" name="check_in" value=(vm.value("check_in", vm.date.to_string())) required;
                            (field_error(&vm.errors, "check_in"))
                        }
                        div {
                            label for="check_out" { "Check-out" }
                            input type="date" id="check_out" name="check_out" value=(vm.value("check_out", check_out_default.to_string())) required;
                            (field_error(&vm.errors, "check_out"))
                        }
                    }

                    label for="payment_method" { "Payment Method" }
                    select id="payment_method" name="payment_method" {
                        @for m in PaymentMethod::ALL {
                            option value=(m.as_str()) selected[method == m.as_str()] { (m.as_str()) }
                        }
                    }
                    (field_error(&vm.errors, "payment_method"))

                    div class="row" {
                        div {
                            label for="total_amount" { "Total Amount" }
                            input type="number" step="0.01" min="0" id="total_amount" name="total_amount" value=(vm.value("total_amount", "100"));
                            (field_error(&vm.errors, "total_amount"))
                        }
                        div {
                            label for="advance_payment" { "Advance Payment" }
                            input type="number" step="0.01" min="0" id="advance_payment" name="advance_payment" value=(vm.value("advance_payment", "0"));
                            (field_error(&vm.errors, "advance_payment"))
                        }
                    }

                    div class="actions" {
                        a href=(format!("/dashboard?date={}", vm.date)) { "Back" }
                        button type="submit" class="primary" { "Confirm Booking" }
                    }
                }
            }
        },
    )
}
