// src/handlers/rooms.rs
//
// Booking, repayment, check-in and cancellation. Every action reads the room,
// lets the ledger decide, and only then writes; a store failure is returned to
// the caller rather than hidden behind an optimistic success message.

use crate::config::RosterEntry;
use crate::db::cancellations::append_cancellation;
use crate::db::rooms::{room_for_entry, update_room};
use crate::domain::ledger::{self, LedgerError};
use crate::domain::money::format_money;
use crate::domain::{resolve_status, Booking, Payment, Room, RoomStatus};
use crate::errors::ServerError;
use crate::forms::{BookingForm, FieldErrors, FormData, RepaymentForm};
use crate::responses::{html_response, html_response_with_status, redirect, ResultResp};
use crate::router::{location, Ctx};
use crate::templates::pages::{booking_page, manage_page, BookingVm, ManageVm};
use chrono::{NaiveDate, NaiveDateTime};
use rand::Rng;

fn roster_entry<'a>(ctx: &Ctx<'a>, room_id: &str) -> Result<&'a RosterEntry, ServerError> {
    ctx.app.config.roster_entry(room_id).ok_or(ServerError::NotFound)
}

fn load_room(ctx: &Ctx, entry: &RosterEntry) -> Result<Room, ServerError> {
    let hotel_id = ctx.app.hotel_id();
    ctx.app.db.with_conn(|conn| room_for_entry(conn, hotel_id, entry))
}

fn selected_date(ctx: &Ctx) -> NaiveDate {
    ctx.query.date("date").unwrap_or_else(|| ctx.app.clock.today())
}

fn new_invoice_id(now: NaiveDateTime) -> String {
    let suffix: u16 = rand::thread_rng().gen_range(0..10_000);
    format!("INV-{}-{suffix:04}", now.and_utc().timestamp_millis())
}

fn manage_vm(ctx: &Ctx, room: Room, date: NaiveDate) -> ManageVm {
    let status = resolve_status(room.booking.as_ref(), date);
    let can_check_in = ledger::check_in(&room, ctx.app.clock.today()).is_ok();

    ManageVm {
        room,
        status,
        date,
        can_check_in,
        errors: FieldErrors::default(),
        alert: None,
        notice: ctx.query.get("notice").map(str::to_string),
    }
}

fn booking_vm(entry: &RosterEntry, date: NaiveDate, values: FormData) -> BookingVm {
    BookingVm {
        room_id: entry.id.clone(),
        room_name: entry.name.clone(),
        date,
        values,
        errors: FieldErrors::default(),
        alert: None,
    }
}

pub fn booking_form(ctx: &Ctx, room_id: &str) -> ResultResp {
    let entry = roster_entry(ctx, room_id)?;
    let date = selected_date(ctx);
    let room = load_room(ctx, entry)?;

    // Rooms that are not free on that date go to the manage screen instead.
    if resolve_status(room.booking.as_ref(), date) != RoomStatus::Available {
        return redirect(&location(&format!("/rooms/{}", entry.id), &[("date", &date.to_string())]));
    }

    html_response(booking_page(&booking_vm(entry, date, FormData::default())))
}

pub fn book(ctx: &Ctx, room_id: &str) -> ResultResp {
    let entry = roster_entry(ctx, room_id)?;
    let date = selected_date(ctx);
    let now = ctx.app.clock.now();

    let form = match BookingForm::parse(&ctx.form) {
        Ok(form) => form,
        Err(errors) => {
            tracing::warn!(room_id = %entry.id, errors = %errors.summary(), "booking form rejected");
            let vm = BookingVm {
                errors,
                ..booking_vm(entry, date, ctx.form.clone())
            };
            return html_response_with_status(400, booking_page(&vm));
        }
    };

    let room = load_room(ctx, entry)?;
    let placed = Booking::new(&form.guest_name, form.check_in, form.check_out)
        .and_then(|booking| {
            let payment = Payment::new(
                new_invoice_id(now),
                &form.guest_name,
                now.date(),
                form.total_amount,
                form.advance_payment,
                form.payment_method,
            )?;
            Ok((booking, payment))
        })
        .and_then(|(booking, payment)| ledger::place_booking(&room, booking, payment, now.date()));

    let patch = match placed {
        Ok(patch) => patch,
        Err(err) => {
            tracing::warn!(room_id = %entry.id, error = %err, "booking refused");
            let status = ServerError::from(err.clone()).status();
            let vm = BookingVm {
                alert: Some(err.to_string()),
                ..booking_vm(entry, date, ctx.form.clone())
            };
            return html_response_with_status(status, booking_page(&vm));
        }
    };

    let hotel_id = ctx.app.hotel_id();
    let room = ctx.app.db.with_conn(|conn| update_room(conn, hotel_id, entry, patch))?;
    tracing::info!(
        room_id = %room.id,
        invoice_id = room.payment.as_ref().map(|p| p.invoice_id.as_str()).unwrap_or_default(),
        "booking placed"
    );

    let notice = format!("{} has been booked for {}.", room.name, form.guest_name);
    redirect(&location(
        "/dashboard",
        &[("date", &date.to_string()), ("notice", &notice)],
    ))
}

pub fn manage(ctx: &Ctx, room_id: &str) -> ResultResp {
    let entry = roster_entry(ctx, room_id)?;
    let date = selected_date(ctx);
    let room = load_room(ctx, entry)?;

    html_response(manage_page(&manage_vm(ctx, room, date)))
}

/// Re-renders the manage screen with the reason an action was refused.
fn refused(ctx: &Ctx, room: Room, date: NaiveDate, err: LedgerError) -> ResultResp {
    tracing::warn!(room_id = %room.id, error = %err, "front desk action refused");
    let status = ServerError::from(err.clone()).status();
    let vm = ManageVm {
        alert: Some(err.to_string()),
        ..manage_vm(ctx, room, date)
    };
    html_response_with_status(status, manage_page(&vm))
}

pub fn repay(ctx: &Ctx, room_id: &str) -> ResultResp {
    let entry = roster_entry(ctx, room_id)?;
    let date = selected_date(ctx);
    let room = load_room(ctx, entry)?;

    let form = match RepaymentForm::parse(&ctx.form) {
        Ok(form) => form,
        Err(errors) => {
            let vm = ManageVm {
                errors,
                ..manage_vm(ctx, room, date)
            };
            return html_response_with_status(400, manage_page(&vm));
        }
    };

    let patch = match ledger::repay(&room, form.repayment_amount) {
        Ok(patch) => patch,
        Err(err) => return refused(ctx, room, date, err),
    };

    let hotel_id = ctx.app.hotel_id();
    let room = ctx.app.db.with_conn(|conn| update_room(conn, hotel_id, entry, patch))?;
    tracing::info!(room_id = %room.id, amount = form.repayment_amount, "repayment recorded");

    let notice = format!("{} has been paid for {}.", format_money(form.repayment_amount), room.name);
    redirect(&location(
        &format!("/rooms/{}", room.id),
        &[("date", &date.to_string()), ("notice", &notice)],
    ))
}

pub fn check_in(ctx: &Ctx, room_id: &str) -> ResultResp {
    let entry = roster_entry(ctx, room_id)?;
    let date = selected_date(ctx);
    let room = load_room(ctx, entry)?;

    let patch = match ledger::check_in(&room, ctx.app.clock.today()) {
        Ok(patch) => patch,
        Err(err) => return refused(ctx, room, date, err),
    };

    let hotel_id = ctx.app.hotel_id();
    let room = ctx.app.db.with_conn(|conn| update_room(conn, hotel_id, entry, patch))?;
    tracing::info!(room_id = %room.id, "guest checked in");

    let guest = room.booking.as_ref().map(|b| b.guest_name.as_str()).unwrap_or("Guest");
    let notice = format!("{guest} has checked into {}.", room.name);
    redirect(&location(
        "/dashboard",
        &[("date", &date.to_string()), ("notice", &notice)],
    ))
}

pub fn cancel(ctx: &Ctx, room_id: &str) -> ResultResp {
    let entry = roster_entry(ctx, room_id)?;
    let date = selected_date(ctx);
    let room = load_room(ctx, entry)?;

    let (patch, record) = match ledger::cancel_booking(&room, ctx.app.clock.now()) {
        Ok(done) => done,
        Err(err) => return refused(ctx, room, date, err),
    };

    let hotel_id = ctx.app.hotel_id();
    ctx.app.db.with_conn(|conn| {
        let tx = conn.transaction()?;
        append_cancellation(&tx, hotel_id, &record)?;
        update_room(&tx, hotel_id, entry, patch)?;
        tx.commit()?;
        Ok(())
    })?;
    tracing::info!(room_id = %record.room_id, guest = %record.booking.guest_name, "booking cancelled");

    let notice = format!("Booking for {} in {} was cancelled.", record.booking.guest_name, record.room_name);
    redirect(&location(
        "/dashboard",
        &[("date", &date.to_string()), ("notice", &notice)],
    ))
}
