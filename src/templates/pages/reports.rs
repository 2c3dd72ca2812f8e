use crate::domain::money::format_money;
use crate::domain::report::{booking_label, Report};
use crate::forms::FieldErrors;
use crate::templates::components::{field_error, payment_badge, status_badge};
use crate::templates::desktop_layout;
use crate::templates::layouts::desktop::Nav;
use chrono::NaiveDate;
use maud::{html, Markup};

pub struct ReportsVm {
    pub from: NaiveDate,
    pub to: NaiveDate,
    /// `None` until a valid range has been asked for.
    pub report: Option<Report>,
    pub errors: FieldErrors,
}

pub fn reports_page(vm: &ReportsVm) -> Markup {
    desktop_layout(
        "Reports",
        Nav::Reports,
        None,
        html! {
            main class="container" {
                h1 { "Reports" }

                form method="get" action="/reports" class="date-range" {
                    label for="from-date" { "From" }
                    input type="date" id="from-date" name="from" value=(vm.from.to_string());
                    label for="to-date" { "To" }
                    input type="date" id="to-date" name="to" value=(vm.to.to_string());
                    button type="submit" { "Generate" }
                }
                (field_error(&vm.errors, "from"))
                (field_error(&vm.errors, "to"))

                @if let Some(report) = &vm.report {
                    p {
                        a class="button" href=(format!("/reports/export?from={}&to={}", report.from, report.to)) { "Download XLSX" }
                    }
                    (report_sections(report))
                } @else {
                    p class="muted" { "Pick a range to see bookings, payments and enquiries." }
                }
            }
        },
    )
}

fn report_sections(report: &Report) -> Markup {
    html! {
        section class="card" {
            h3 { "Bookings (" (report.bookings.len()) ")" }
            @if report.bookings.is_empty() {
                p class="muted" { "No bookings in this range." }
            }
            @for room in &report.bookings {
                @if let Some(b) = &room.booking {
                    div class="report-row" {
                        strong { (room.name) }
                        span { (b.guest_name) }
                        span class="muted" {
                            (b.check_in.format("%B %-d, %Y").to_string()) " - " (b.check_out.format("%B %-d, %Y").to_string())
                        }
                        (status_badge(booking_label(room)))
                    }
                }
            }
        }

        section class="card" {
            h3 { "Payments (" (report.payments.len()) ")" }
            @if report.payments.is_empty() {
                p class="muted" { "No payments in this range." }
            }
            @for room in &report.payments {
                @if let Some(p) = &room.payment {
                    div class="report-row" {
                        strong { (room.name) }
                        span { (p.guest_name) }
                        span { (format_money(p.amount)) }
                        span class="muted" { "Pending: " (format_money(p.pending)) }
                        (payment_badge(p.status))
                    }
                }
            }
        }

        section class="card" {
            h3 { "Enquiries (" (report.enquiries.len()) ")" }
            @if report.enquiries.is_empty() {
                p class="muted" { "No enquiries in this range." }
            }
            @for e in &report.enquiries {
                div class="report-row" {
                    strong { (e.enquiry_type.label()) }
                    span { "For " (e.booking_date.to_string()) }
                    span class="muted" { (e.notes) }
                }
            }
        }
    }
}
