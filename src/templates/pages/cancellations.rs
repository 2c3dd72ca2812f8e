use crate::domain::money::format_money;
use crate::domain::CancellationRecord;
use crate::templates::desktop_layout;
use crate::templates::layouts::desktop::Nav;
use maud::{html, Markup};

pub fn cancellations_page(records: &[CancellationRecord]) -> Markup {
    desktop_layout(
        "Cancellations",
        Nav::Cancellations,
        None,
        html! {
            main class="container" {
                h1 { "Cancellations" }
                @if records.is_empty() {
                    p class="muted" { "Nothing has been cancelled." }
                } @else {
                    table {
                        thead {
                            tr { th { "Cancelled" } th { "Room" } th { "Guest" } th { "Stay" } th { "Paid" } th { "Invoice" } }
                        }
                        tbody {
                            @for r in records {
                                tr {
                                    td { (r.cancelled_at.format("%Y-%m-%d %H:%M").to_string()) }
                                    td { (r.room_name) }
                                    td { (r.booking.guest_name) }
                                    td { (r.booking.check_in.to_string()) " – " (r.booking.check_out.to_string()) }
                                    @match &r.payment {
                                        Some(p) => {
                                            td { (format_money(p.advance_paid)) " of " (format_money(p.amount)) }
                                            td { (p.invoice_id) }
                                        }
                                        None => {
                                            td { "—" }
                                            td { "—" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
