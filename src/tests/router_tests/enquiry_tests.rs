// src/tests/router_tests/enquiry_tests.rs

use crate::app::App;
use crate::db::enquiries::list_enquiries_for_user;
use crate::domain::enquiry::{Enquiry, EnquiryType};
use crate::tests::utils::{at, body_string, get, location, post, test_app};

fn logged(app: &App) -> Vec<Enquiry> {
    app.db
        .with_conn(|conn| list_enquiries_for_user(conn, app.hotel_id(), &app.config.desk_user))
        .unwrap()
}

#[test]
fn enquiry_lifecycle() {
    let app = test_app("enquiry_crud", at(2025, 12, 10, 9));

    let resp = post(
        &app,
        "/enquiries",
        "enquiry_type=by-phone&booking_date=2025-12-24&notes=Two+adults%2C+sea+view",
    );
    assert_eq!(resp.status(), 303);
    assert!(location(&resp).starts_with("/enquiries?notice="));

    let list = logged(&app);
    assert_eq!(list.len(), 1);
    let id = list[0].id;
    assert_eq!(list[0].enquiry_type, EnquiryType::ByPhone);
    assert_eq!(list[0].user_id.as_deref(), Some("front-desk"));
    assert_eq!(list[0].created_at, at(2025, 12, 10, 9));

    let page = body_string(get(&app, "/enquiries"));
    assert!(page.contains("Two adults, sea view"));
    assert!(page.contains("By phone"));

    let edit = get(&app, &format!("/enquiries/{id}/edit"));
    assert_eq!(edit.status(), 200);
    assert!(body_string(edit).contains("Two adults, sea view"));

    let resp = post(
        &app,
        &format!("/enquiries/{id}"),
        "enquiry_type=walk-in&booking_date=2025-12-26&notes=Came+in+person",
    );
    assert_eq!(resp.status(), 303);
    let list = logged(&app);
    assert_eq!(list[0].enquiry_type, EnquiryType::WalkIn);
    assert_eq!(list[0].notes, "Came in person");

    assert_eq!(post(&app, &format!("/enquiries/{id}/delete"), "").status(), 303);
    assert!(logged(&app).is_empty());
    assert_eq!(post(&app, &format!("/enquiries/{id}/delete"), "").status(), 404);
}

#[test]
fn enquiry_without_a_type_is_rejected() {
    let app = test_app("enquiry_invalid", at(2025, 12, 10, 9));

    let resp = post(&app, "/enquiries", "booking_date=2025-12-24&notes=hello");

    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("Choose walk-in or by phone."));
    assert!(logged(&app).is_empty());
}

#[test]
fn editing_a_missing_enquiry_is_not_found() {
    let app = test_app("enquiry_missing", at(2025, 12, 10, 9));

    assert_eq!(get(&app, "/enquiries/42/edit").status(), 404);
    assert_eq!(
        post(&app, "/enquiries/42", "enquiry_type=walk-in&booking_date=2025-12-24").status(),
        404
    );
}
