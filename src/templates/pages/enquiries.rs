use crate::domain::enquiry::{Enquiry, EnquiryType};
use crate::forms::{FieldErrors, FormData};
use crate::templates::components::field_error;
use crate::templates::desktop_layout;
use crate::templates::layouts::desktop::Nav;
use chrono::NaiveDate;
use maud::{html, Markup};

pub struct EnquiriesVm {
    pub enquiries: Vec<Enquiry>,
    pub today: NaiveDate,
    pub values: FormData,
    pub errors: FieldErrors,
    pub notice: Option<String>,
}

pub fn enquiries_page(vm: &EnquiriesVm) -> Markup {
    desktop_layout(
        "Enquiries",
        Nav::Enquiries,
        vm.notice.as_deref(),
        html! {
            main class="container" {
                h1 { "Enquiries" }

                section class="card" {
                    h3 { "Log an enquiry" }
                    (enquiry_form("/enquiries", &vm.values, &vm.errors, vm.today, "Save Enquiry"))
                }

                section class="card" {
                    h3 { "Logged enquiries (" (vm.enquiries.len()) ")" }
                    @if vm.enquiries.is_empty() {
                        p class="muted" { "No enquiries yet." }
                    } @else {
                        table {
                            thead {
                                tr { th { "Type" } th { "For date" } th { "Notes" } th { "Logged" } th {} }
                            }
                            tbody {
                                @for e in &vm.enquiries {
                                    tr {
                                        td { (e.enquiry_type.label()) }
                                        td { (e.booking_date.to_string()) }
                                        td { (e.notes) }
                                        td class="muted" { (e.created_at.format("%Y-%m-%d %H:%M").to_string()) }
                                        td class="row-actions" {
                                            a href=(format!("/enquiries/{}/edit", e.id)) { "Edit" }
                                            form class="inline" method="post" action=(format!("/enquiries/{}/delete", e.id))
                                                onsubmit="return confirm('Delete this enquiry?');" {
                                                button type="submit" class="link danger" { "Delete" }
                                            }
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

pub fn enquiry_edit_page(enquiry: &Enquiry, values: &FormData, errors: &FieldErrors) -> Markup {
    desktop_layout(
        "Edit enquiry",
        Nav::Enquiries,
        None,
        html! {
            main class="container narrow" {
                h1 { "Edit enquiry" }
                (enquiry_form(&format!("/enquiries/{}", enquiry.id), values, errors, enquiry.booking_date, "Update Enquiry"))
                p { a href="/enquiries" { "← Back to enquiries" } }
            }
        },
    )
}

fn enquiry_form(action: &str, values: &FormData, errors: &FieldErrors, default_date: NaiveDate, submit: &str) -> Markup {
    let selected_type = values.get("enquiry_type").unwrap_or(EnquiryType::WalkIn.as_str());
    let date = values.get("booking_date").map(str::to_string).unwrap_or_else(|| default_date.to_string());

    html! {
        form method="post" action=(action) class="stack" {
            fieldset {
                legend { "Enquiry type" }
                @for t in EnquiryType::ALL {
                    label {
                        input type="radio" name="enquiry_type" value=(t.as_str()) checked[selected_type == t.as_str()];
                        " " (t.label())
                    }
                }
            }
            (field_error(errors, "enquiry_type"))

            label for="booking_date" { "Booking date" }
            input type="date" id="booking_date" name="booking_date" value=(date) required;
            (field_error(errors, "booking_date"))

            label for="notes" { "Notes" }
            textarea id="notes" name="notes" rows="3" placeholder="Guests, preferences, callback number..." { (values.raw("notes")) }
            (field_error(errors, "notes"))

            button type="submit" class="primary" { (submit) }
        }
    }
}
