pub mod dashboard;
pub mod enquiries;
pub mod reports;
pub mod rooms;
