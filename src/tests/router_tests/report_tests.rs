// src/tests/router_tests/report_tests.rs

use crate::tests::utils::{at, body_bytes, body_string, get, post, test_app};

fn seed(app: &crate::app::App) {
    post(
        app,
        "/rooms/101/book",
        "guest_name=Jane+Smith&check_in=2025-12-12&check_out=2025-12-14\
         &payment_method=Cash&total_amount=300&advance_payment=50",
    );
    post(
        app,
        "/enquiries",
        "enquiry_type=walk-in&booking_date=2025-12-20&notes=Family+of+four",
    );
}

#[test]
fn reports_page_waits_for_a_range() {
    let app = test_app("report_blank", at(2025, 12, 10, 9));
    seed(&app);

    let body = body_string(get(&app, "/reports"));

    assert!(body.contains("Pick a range"));
    assert!(!body.contains("Jane Smith"));
}

#[test]
fn report_lists_activity_in_range() {
    let app = test_app("report_range", at(2025, 12, 10, 9));
    seed(&app);

    let resp = get(&app, "/reports?from=2025-12-01&to=2025-12-31");
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Jane Smith"));
    assert!(body.contains("Family of four"));
    assert!(body.contains("/reports/export?from=2025-12-01&amp;to=2025-12-31"));

    let outside = body_string(get(&app, "/reports?from=2026-01-01&to=2026-01-31"));
    assert!(!outside.contains("Jane Smith"));
}

#[test]
fn reversed_range_is_rejected() {
    let app = test_app("report_reversed", at(2025, 12, 10, 9));

    assert_eq!(get(&app, "/reports?from=2025-12-31&to=2025-12-01").status(), 400);
    assert_eq!(get(&app, "/reports/export?from=2025-12-31&to=2025-12-01").status(), 400);
}

#[test]
fn export_downloads_a_workbook() {
    let app = test_app("report_export", at(2025, 12, 10, 9));
    seed(&app);

    let resp = get(&app, "/reports/export?from=2025-12-01&to=2025-12-31");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert_eq!(
        resp.headers().get("Content-Disposition").unwrap(),
        "attachment; filename=\"report_2025-12-01_2025-12-31.xlsx\""
    );

    let bytes = body_bytes(resp);
    assert_eq!(&bytes[..2], b"PK");
}
