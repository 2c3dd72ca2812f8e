use crate::db::enquiries::{
    create_enquiry, delete_enquiry, get_enquiry, list_enquiries_for_user, update_enquiry,
};
use crate::errors::ServerError;
use crate::forms::{EnquiryForm, FieldErrors, FormData, DATE_FORMAT};
use crate::responses::{html_response, html_response_with_status, redirect, ResultResp};
use crate::router::{location, Ctx};
use crate::templates::pages::{enquiries_page, enquiry_edit_page, EnquiriesVm};

fn list_vm(ctx: &Ctx, values: FormData, errors: FieldErrors) -> Result<EnquiriesVm, ServerError> {
    let app = ctx.app;
    let enquiries = app
        .db
        .with_conn(|conn| list_enquiries_for_user(conn, app.hotel_id(), &app.config.desk_user))?;

    Ok(EnquiriesVm {
        enquiries,
        today: app.clock.today(),
        values,
        errors,
        notice: ctx.query.get("notice").map(str::to_string),
    })
}

pub fn list(ctx: &Ctx) -> ResultResp {
    let vm = list_vm(ctx, FormData::default(), FieldErrors::default())?;
    html_response(enquiries_page(&vm))
}

pub fn create(ctx: &Ctx) -> ResultResp {
    let app = ctx.app;
    let draft = match EnquiryForm::parse(&ctx.form) {
        Ok(form) => form.into_draft(),
        Err(errors) => {
            let vm = list_vm(ctx, ctx.form.clone(), errors)?;
            return html_response_with_status(400, enquiries_page(&vm));
        }
    };

    let id = app.db.with_conn(|conn| {
        create_enquiry(conn, app.hotel_id(), &app.config.desk_user, &draft, app.clock.now())
    })?;
    tracing::info!(enquiry_id = id, kind = draft.enquiry_type.as_str(), "enquiry logged");

    redirect(&location("/enquiries", &[("notice", "Enquiry saved.")]))
}

pub fn edit_form(ctx: &Ctx, id: i64) -> ResultResp {
    let app = ctx.app;
    let enquiry = app
        .db
        .with_conn(|conn| get_enquiry(conn, app.hotel_id(), id))?
        .ok_or(ServerError::NotFound)?;

    let values = FormData::default()
        .with("enquiry_type", enquiry.enquiry_type.as_str())
        .with("booking_date", enquiry.booking_date.format(DATE_FORMAT).to_string())
        .with("notes", enquiry.notes.as_str());

    html_response(enquiry_edit_page(&enquiry, &values, &FieldErrors::default()))
}

pub fn update(ctx: &Ctx, id: i64) -> ResultResp {
    let app = ctx.app;
    let draft = match EnquiryForm::parse(&ctx.form) {
        Ok(form) => form.into_draft(),
        Err(errors) => {
            let enquiry = app
                .db
                .with_conn(|conn| get_enquiry(conn, app.hotel_id(), id))?
                .ok_or(ServerError::NotFound)?;
            return html_response_with_status(400, enquiry_edit_page(&enquiry, &ctx.form, &errors));
        }
    };

    app.db
        .with_conn(|conn| update_enquiry(conn, app.hotel_id(), id, &draft))?;
    tracing::info!(enquiry_id = id, "enquiry updated");

    redirect(&location("/enquiries", &[("notice", "Enquiry updated.")]))
}

pub fn delete(ctx: &Ctx, id: i64) -> ResultResp {
    let app = ctx.app;
    app.db.with_conn(|conn| delete_enquiry(conn, app.hotel_id(), id))?;
    tracing::info!(enquiry_id = id, "enquiry deleted");

    redirect(&location("/enquiries", &[("notice", "Enquiry deleted.")]))
}
