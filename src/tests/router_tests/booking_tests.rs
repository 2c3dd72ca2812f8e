// src/tests/router_tests/booking_tests.rs

use crate::app::App;
use crate::db::cancellations::list_cancellations;
use crate::db::rooms::find_room;
use crate::domain::{PaymentMethod, PaymentStatus, Room};
use crate::tests::utils::{at, body_string, get, location, post, test_app};

const JANE: &str = "guest_name=Jane+Smith&check_in=2025-12-10&check_out=2025-12-12\
                    &payment_method=Credit+Card&total_amount=500&advance_payment=100";

fn stored(app: &App, room_id: &str) -> Room {
    app.db
        .with_conn(|conn| find_room(conn, app.hotel_id(), room_id))
        .unwrap()
        .expect("room document exists")
}

#[test]
fn booking_a_free_room_stores_booking_and_payment() {
    let app = test_app("book_flow", at(2025, 12, 10, 9));

    let resp = post(&app, "/rooms/101/book?date=2025-12-10", JANE);
    assert_eq!(resp.status(), 303);
    let to = location(&resp);
    assert!(to.starts_with("/dashboard?date=2025-12-10&notice="), "{to}");

    let room = stored(&app, "101");
    assert_eq!(room.name, "Room 101");
    let booking = room.booking.unwrap();
    assert_eq!(booking.guest_name, "Jane Smith");
    assert!(!booking.checked_in);

    let payment = room.payment.unwrap();
    assert!(payment.invoice_id.starts_with("INV-"));
    assert_eq!(payment.amount, 50_000);
    assert_eq!(payment.advance_paid, 10_000);
    assert_eq!(payment.pending, 40_000);
    assert_eq!(payment.status, PaymentStatus::Pending);
    assert_eq!(payment.method, PaymentMethod::CreditCard);

    let dashboard = body_string(get(&app, &to));
    assert!(dashboard.contains("Jane Smith"));
    assert!(dashboard.contains("badge badge-booked"));
    assert!(dashboard.contains("Room 101 has been booked for Jane Smith."));
}

#[test]
fn booking_form_for_a_taken_room_goes_to_manage() {
    let app = test_app("book_taken_form", at(2025, 12, 10, 9));
    post(&app, "/rooms/101/book", JANE);

    let resp = get(&app, "/rooms/101/book?date=2025-12-11");

    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/rooms/101?date=2025-12-11");
}

#[test]
fn booking_a_taken_room_is_a_conflict() {
    let app = test_app("book_conflict", at(2025, 12, 10, 9));
    post(&app, "/rooms/101/book", JANE);

    let resp = post(
        &app,
        "/rooms/101/book",
        "guest_name=Bob&check_in=2025-12-10&check_out=2025-12-11\
         &payment_method=Cash&total_amount=100&advance_payment=0",
    );
    assert_eq!(resp.status(), 409);
    assert!(body_string(resp).contains("role=\"alert\""));

    assert_eq!(stored(&app, "101").booking.unwrap().guest_name, "Jane Smith");
}

#[test]
fn invalid_booking_form_is_rejected_without_writing() {
    let app = test_app("book_invalid", at(2025, 12, 10, 9));

    let resp = post(
        &app,
        "/rooms/102/book",
        "guest_name=Jane&check_in=2025-12-12&check_out=2025-12-10\
         &payment_method=Cash&total_amount=100&advance_payment=0",
    );
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("Check-out date must be after check-in date."));

    let advance_too_big = post(
        &app,
        "/rooms/102/book",
        "guest_name=Jane&check_in=2025-12-10&check_out=2025-12-12\
         &payment_method=Cash&total_amount=100&advance_payment=150",
    );
    assert_eq!(advance_too_big.status(), 400);

    let room = app
        .db
        .with_conn(|conn| find_room(conn, app.hotel_id(), "102"))
        .unwrap();
    assert!(room.is_none());
}

#[test]
fn repayment_reduces_pending_and_rejects_overpayment() {
    let app = test_app("repay_flow", at(2025, 12, 10, 9));
    post(&app, "/rooms/101/book", JANE);

    let over = post(&app, "/rooms/101/repay?date=2025-12-10", "repayment_amount=500");
    assert_eq!(over.status(), 400);
    assert_eq!(stored(&app, "101").payment.unwrap().pending, 40_000);

    let zero = post(&app, "/rooms/101/repay", "repayment_amount=0");
    assert_eq!(zero.status(), 400);

    let partial = post(&app, "/rooms/101/repay?date=2025-12-10", "repayment_amount=150");
    assert_eq!(partial.status(), 303);
    let payment = stored(&app, "101").payment.unwrap();
    assert_eq!(payment.advance_paid, 25_000);
    assert_eq!(payment.pending, 25_000);
    assert_eq!(payment.status, PaymentStatus::Pending);

    let rest = post(&app, "/rooms/101/repay?date=2025-12-10", "repayment_amount=250");
    assert_eq!(rest.status(), 303);
    let payment = stored(&app, "101").payment.unwrap();
    assert_eq!(payment.pending, 0);
    assert_eq!(payment.status, PaymentStatus::Paid);

    let manage = body_string(get(&app, "/rooms/101?date=2025-12-10"));
    assert!(manage.contains("This booking is fully paid."));
}

#[test]
fn enormous_repayment_is_rejected_without_touching_the_room() {
    let app = test_app("repay_enormous", at(2025, 12, 10, 9));
    post(&app, "/rooms/101/book", JANE);
    let before = stored(&app, "101");

    let resp = post(
        &app,
        "/rooms/101/repay?date=2025-12-10",
        "repayment_amount=92233720368547758.07",
    );
    assert_eq!(resp.status(), 400);

    let after = stored(&app, "101");
    assert_eq!(after, before);
    let payment = after.payment.unwrap();
    assert_eq!(payment.advance_paid, 10_000);
    assert_eq!(payment.pending, 40_000);
    assert_eq!(payment.status, PaymentStatus::Pending);
}

#[test]
fn check_in_makes_the_room_occupied() {
    let app = test_app("check_in_flow", at(2025, 12, 10, 9));
    post(&app, "/rooms/101/book", JANE);

    let manage = body_string(get(&app, "/rooms/101"));
    assert!(manage.contains("/rooms/101/check-in"));

    let resp = post(&app, "/rooms/101/check-in?date=2025-12-10", "");
    assert_eq!(resp.status(), 303);
    assert!(stored(&app, "101").booking.unwrap().checked_in);

    let dashboard = body_string(get(&app, "/dashboard?date=2025-12-10"));
    assert!(dashboard.contains("badge badge-occupied"));

    // a second check-in is refused
    assert_eq!(post(&app, "/rooms/101/check-in", "").status(), 400);
}

#[test]
fn check_in_before_arrival_is_refused() {
    let app = test_app("check_in_early", at(2025, 12, 10, 9));
    post(
        &app,
        "/rooms/104/book",
        "guest_name=Early+Bird&check_in=2025-12-20&check_out=2025-12-22\
         &payment_method=Bank+Transfer&total_amount=200&advance_payment=200",
    );

    let resp = post(&app, "/rooms/104/check-in", "");

    assert_eq!(resp.status(), 400);
    assert!(!stored(&app, "104").booking.unwrap().checked_in);
}

#[test]
fn cancel_logs_a_snapshot_and_frees_the_room() {
    let app = test_app("cancel_flow", at(2025, 12, 10, 9));
    post(&app, "/rooms/101/book", JANE);

    let resp = post(&app, "/rooms/101/cancel?date=2025-12-10", "");
    assert_eq!(resp.status(), 303);

    let room = stored(&app, "101");
    assert!(room.booking.is_none());
    assert!(room.payment.is_none());

    let log = app
        .db
        .with_conn(|conn| list_cancellations(conn, app.hotel_id()))
        .unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].room_id, "101");
    assert_eq!(log[0].booking.guest_name, "Jane Smith");
    assert_eq!(log[0].payment.as_ref().unwrap().advance_paid, 10_000);
    assert_eq!(log[0].cancelled_at, at(2025, 12, 10, 9));

    let page = body_string(get(&app, "/cancellations"));
    assert!(page.contains("Jane Smith"));

    // nothing left to cancel
    assert_eq!(post(&app, "/rooms/101/cancel", "").status(), 400);

    // and the room can be booked again
    assert_eq!(post(&app, "/rooms/101/book", JANE).status(), 303);
}
