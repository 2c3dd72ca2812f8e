mod booking_tests;
mod dashboard_tests;
mod enquiry_tests;
mod report_tests;
