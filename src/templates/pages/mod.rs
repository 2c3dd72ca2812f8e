pub mod booking;
pub mod cancellations;
pub mod dashboard;
pub mod enquiries;
pub mod manage;
pub mod reports;

pub use booking::{booking_page, BookingVm};
pub use cancellations::cancellations_page;
pub use dashboard::{dashboard_page, DashboardVm};
pub use enquiries::{enquiries_page, enquiry_edit_page, EnquiriesVm};
pub use manage::{manage_page, ManageVm};
pub use reports::{reports_page, ReportsVm};
