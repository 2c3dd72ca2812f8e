use crate::db::cancellations::list_cancellations;
use crate::db::enquiries::list_enquiries_for_user;
use crate::db::rooms::rooms_for_roster;
use crate::domain::report::Report;
use crate::errors::ServerError;
use crate::forms::{DateRange, FieldErrors};
use crate::responses::{html_response, html_response_with_status, xlsx_response, ResultResp};
use crate::router::Ctx;
use crate::spreadsheets::export_report_xlsx;
use crate::templates::pages::{cancellations_page, reports_page, ReportsVm};

fn build_report(ctx: &Ctx, range: DateRange) -> Result<Report, ServerError> {
    let app = ctx.app;
    let (rooms, enquiries) = app.db.with_conn(|conn| {
        let rooms = rooms_for_roster(conn, app.hotel_id(), &app.config.roster)?;
        let enquiries = list_enquiries_for_user(conn, app.hotel_id(), &app.config.desk_user)?;
        Ok((rooms, enquiries))
    })?;

    Ok(Report::build(&rooms, enquiries, range.from, range.to))
}

pub fn show(ctx: &Ctx) -> ResultResp {
    let today = ctx.app.clock.today();
    let asked = ctx.query.get("from").is_some() || ctx.query.get("to").is_some();

    let range = match DateRange::parse(&ctx.query, today) {
        Ok(range) => range,
        Err(errors) => {
            let vm = ReportsVm {
                from: ctx.query.date("from").unwrap_or(today),
                to: ctx.query.date("to").unwrap_or(today),
                report: None,
                errors,
            };
            return html_response_with_status(400, reports_page(&vm));
        }
    };

    let report = if asked { Some(build_report(ctx, range)?) } else { None };
    let vm = ReportsVm {
        from: range.from,
        to: range.to,
        report,
        errors: FieldErrors::default(),
    };
    html_response(reports_page(&vm))
}

pub fn export(ctx: &Ctx) -> ResultResp {
    let range = DateRange::parse(&ctx.query, ctx.app.clock.today())
        .map_err(ServerError::Validation)?;

    let report = build_report(ctx, range)?;
    let buffer = export_report_xlsx(&report)?;
    tracing::info!(
        from = %range.from,
        to = %range.to,
        bookings = report.bookings.len(),
        payments = report.payments.len(),
        enquiries = report.enquiries.len(),
        "report exported"
    );

    xlsx_response(buffer, &format!("report_{}_{}.xlsx", range.from, range.to))
}

pub fn cancellations(ctx: &Ctx) -> ResultResp {
    let app = ctx.app;
    let records = app.db.with_conn(|conn| list_cancellations(conn, app.hotel_id()))?;
    html_response(cancellations_page(&records))
}
