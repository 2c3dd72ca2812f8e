use crate::domain::money::format_money;
use crate::domain::{Room, RoomStatus};
use crate::forms::FieldErrors;
use crate::templates::components::{field_error, payment_badge, status_badge};
use crate::templates::desktop_layout;
use crate::templates::layouts::desktop::Nav;
use chrono::NaiveDate;
use maud::{html, Markup};

pub struct ManageVm {
    pub room: Room,
    pub status: RoomStatus,
    pub date: NaiveDate,
    pub can_check_in: bool,
    pub errors: FieldErrors,
    pub alert: Option<String>,
    pub notice: Option<String>,
}

pub fn manage_page(vm: &ManageVm) -> Markup {
    let room = &vm.room;

    desktop_layout(
        &format!("Manage {}", room.name),
        Nav::Dashboard,
        vm.notice.as_deref(),
        html! {
            main class="container narrow" {
                h1 { "Manage Booking for " (room.name) " " (status_badge(vm.status)) }
                p class="lead" { "Process repayments and manage booking details." }

                @if let Some(alert) = &vm.alert {
                    div class="alert" role="alert" { (alert) }
                }

                @match (&room.booking, &room.payment) {
                    (Some(booking), payment) => {
                        dl class="details" {
                            dt { "Guest" } dd { (booking.guest_name) }
                            dt { "Check-in" } dd { (booking.check_in.format("%B %-d, %Y").to_string()) }
                            dt { "Check-out" } dd { (booking.check_out.format("%B %-d, %Y").to_string()) }
                            dt { "Checked in" } dd { @if booking.checked_in { "Yes" } @else { "No" } }
                        }

                        @if let Some(p) = payment {
                            dl class="details" {
                                dt { "Invoice" } dd { (p.invoice_id) " " (payment_badge(p.status)) }
                                dt { "Method" } dd { (p.method.as_str()) }
                                dt { "Total Amount" } dd { (format_money(p.amount)) }
                                dt { "Advance Paid" } dd { (format_money(p.advance_paid)) }
                                dt { "Pending" } dd class="danger" { (format_money(p.pending)) }
                            }

                            @if p.pending > 0 {
                                form method="post" action=(format!("/rooms/{}/repay?date={}", room.id, vm.date)) class="stack" {
                                    label for="repayment_amount" { "Repayment Amount" }
                                    input type="number" step="0.01" min="0.01" id="repayment_amount" name="repayment_amount" placeholder="Enter amount" required;
                                    (field_error(&vm.errors, "repayment_amount"))
                                    button type="submit" class="primary" { "Make Payment" }
                                }
                            } @else {
                                p class="success" { "This booking is fully paid." }
                            }
                        }

                        div class="actions" {
                            @if vm.can_check_in {
                                form method="post" action=(format!("/rooms/{}/check-in?date={}", room.id, vm.date)) {
                                    button type="submit" { "Check In" }
                                }
                            }
                            form method="post" action=(format!("/rooms/{}/cancel?date={}", room.id, vm.date))
                                onsubmit="return confirm('Cancel this booking?');" {
                                button type="submit" class="danger" { "Cancel Booking" }
                            }
                        }
                    }
                    (None, _) => {
                        p { "There is no booking on this room." }
                        a class="button" href=(format!("/rooms/{}/book?date={}", room.id, vm.date)) { "Book Now" }
                    }
                }

                p { a href=(format!("/dashboard?date={}", vm.date)) { "← Back to dashboard" } }
            }
        },
    )
}
