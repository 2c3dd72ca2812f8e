// src/tests/router_tests/dashboard_tests.rs

use crate::tests::utils::{at, body_string, get, location, post, test_app};
use chrono::NaiveDate;

#[test]
fn root_redirects_to_dashboard() {
    let app = test_app("root_redirect", at(2025, 12, 10, 9));

    let resp = get(&app, "/");

    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/dashboard");
}

#[test]
fn empty_hotel_shows_every_roster_room_available() {
    let app = test_app("dashboard_empty", at(2025, 12, 10, 9));

    let resp = get(&app, "/dashboard");
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    for n in 101..=107 {
        assert!(body.contains(&format!("Room {n}")), "missing Room {n}");
    }
    assert!(body.contains("/rooms/101/book?date=2025-12-10"));
    assert!(!body.contains("badge badge-booked"));
    assert!(!body.contains("badge badge-occupied"));
}

#[test]
fn dashboard_status_follows_the_selected_date() {
    let app = test_app("dashboard_dates", at(2025, 12, 10, 9));
    let resp = post(
        &app,
        "/rooms/103/book",
        "guest_name=Jane+Smith&check_in=2025-12-12&check_out=2025-12-14\
         &payment_method=Cash&total_amount=300&advance_payment=0",
    );
    assert_eq!(resp.status(), 303);

    // before arrival the room is held
    let before = body_string(get(&app, "/dashboard?date=2025-12-11"));
    assert!(before.contains("Jane Smith"));
    assert!(before.contains("badge badge-booked"));

    // on the check-out date it is free again
    let after = body_string(get(&app, "/dashboard?date=2025-12-14"));
    assert!(after.contains("/rooms/103/book?date=2025-12-14"));
    assert!(!after.contains("badge badge-booked"));
}

#[test]
fn room_is_free_all_of_check_out_day() {
    let last_second = NaiveDate::from_ymd_opt(2025, 12, 10)
        .unwrap()
        .and_hms_opt(23, 59, 59)
        .unwrap();
    let app = test_app("dashboard_late_checkout", last_second);
    let resp = post(
        &app,
        "/rooms/103/book?date=2025-12-08",
        "guest_name=Jane+Smith&check_in=2025-12-08&check_out=2025-12-10\
         &payment_method=Cash&total_amount=300&advance_payment=0",
    );
    assert_eq!(resp.status(), 303);

    let body = body_string(get(&app, "/dashboard"));
    assert!(body.contains("/rooms/103/book?date=2025-12-10"));
    assert!(!body.contains("badge badge-booked"));
    assert!(!body.contains("badge badge-occupied"));
}

#[test]
fn notice_is_shown_as_a_toast() {
    let app = test_app("dashboard_notice", at(2025, 12, 10, 9));

    let body = body_string(get(&app, "/dashboard?notice=Room+101+has+been+booked"));

    assert!(body.contains("Room 101 has been booked"));
}

#[test]
fn unknown_paths_and_rooms_are_not_found() {
    let app = test_app("not_found", at(2025, 12, 10, 9));

    assert_eq!(get(&app, "/nope").status(), 404);
    assert_eq!(get(&app, "/rooms/999").status(), 404);
    assert_eq!(post(&app, "/rooms/999/cancel", "").status(), 404);
    assert_eq!(get(&app, "/enquiries/abc/edit").status(), 404);
}

#[test]
fn stylesheet_is_served() {
    let app = test_app("stylesheet", at(2025, 12, 10, 9));

    let resp = get(&app, "/static/main.css");

    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains(".badge-occupied"));
}
