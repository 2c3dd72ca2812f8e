use crate::domain::money::to_major;
use crate::domain::report::{booking_label, Report};
use crate::errors::ServerError;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

fn xlsx_err(what: &str) -> impl Fn(XlsxError) -> ServerError + '_ {
    move |e| ServerError::XlsxError(format!("Failed to write {what}: {e}"))
}

fn write_headers(sheet: &mut Worksheet, headers: &[&str], bold: &Format) -> Result<(), ServerError> {
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, bold)
            .map_err(xlsx_err(header))?;
    }
    Ok(())
}

/// Builds the three-sheet workbook (bookings, payments, enquiries) for a report.
pub fn export_report_xlsx(report: &Report) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let bookings = workbook.add_worksheet();
    bookings.set_name("Bookings").map_err(xlsx_err("sheet name"))?;
    write_headers(
        bookings,
        &["Room", "Guest", "Check-in", "Check-out", "Nights", "Status"],
        &bold,
    )?;
    let mut r = 1u32;
    for room in &report.bookings {
        let Some(b) = &room.booking else { continue };
        bookings.write_string(r, 0, &room.name).map_err(xlsx_err("room"))?;
        bookings.write_string(r, 1, &b.guest_name).map_err(xlsx_err("guest"))?;
        bookings
            .write_string(r, 2, b.check_in.to_string())
            .map_err(xlsx_err("check-in"))?;
        bookings
            .write_string(r, 3, b.check_out.to_string())
            .map_err(xlsx_err("check-out"))?;
        bookings
            .write_number(r, 4, b.nights() as f64)
            .map_err(xlsx_err("nights"))?;
        bookings
            .write_string(r, 5, booking_label(room).as_str())
            .map_err(xlsx_err("status"))?;
        r += 1;
    }

    let payments = workbook.add_worksheet();
    payments.set_name("Payments").map_err(xlsx_err("sheet name"))?;
    write_headers(
        payments,
        &["Invoice", "Room", "Guest", "Date", "Method", "Amount", "Advance Paid", "Pending", "Status"],
        &bold,
    )?;
    let mut r = 1u32;
    for room in &report.payments {
        let Some(p) = &room.payment else { continue };
        payments.write_string(r, 0, &p.invoice_id).map_err(xlsx_err("invoice"))?;
        payments.write_string(r, 1, &room.name).map_err(xlsx_err("room"))?;
        payments.write_string(r, 2, &p.guest_name).map_err(xlsx_err("guest"))?;
        payments.write_string(r, 3, p.date.to_string()).map_err(xlsx_err("date"))?;
        payments.write_string(r, 4, p.method.as_str()).map_err(xlsx_err("method"))?;
        payments.write_number(r, 5, to_major(p.amount)).map_err(xlsx_err("amount"))?;
        payments
            .write_number(r, 6, to_major(p.advance_paid))
            .map_err(xlsx_err("advance"))?;
        payments.write_number(r, 7, to_major(p.pending)).map_err(xlsx_err("pending"))?;
        payments.write_string(r, 8, p.status.as_str()).map_err(xlsx_err("status"))?;
        r += 1;
    }

    let enquiries = workbook.add_worksheet();
    enquiries.set_name("Enquiries").map_err(xlsx_err("sheet name"))?;
    write_headers(enquiries, &["Logged", "Type", "For date", "Notes"], &bold)?;
    for (i, e) in report.enquiries.iter().enumerate() {
        let r = (i + 1) as u32;
        enquiries
            .write_string(r, 0, e.created_at.format("%Y-%m-%d %H:%M").to_string())
            .map_err(xlsx_err("logged"))?;
        enquiries.write_string(r, 1, e.enquiry_type.label()).map_err(xlsx_err("type"))?;
        enquiries
            .write_string(r, 2, e.booking_date.to_string())
            .map_err(xlsx_err("date"))?;
        enquiries.write_string(r, 3, &e.notes).map_err(xlsx_err("notes"))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))
}
