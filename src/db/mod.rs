pub mod cancellations;
pub mod connection;
pub mod enquiries;
pub mod rooms;

pub use connection::{init_db, Database};
