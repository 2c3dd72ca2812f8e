pub mod enquiry;
pub mod ledger;
pub mod logic;
pub mod money;
pub mod report;
pub mod room;
pub mod stats;

pub use logic::resolve_status;
pub use room::{Booking, CancellationRecord, Payment, PaymentMethod, PaymentStatus, Room, RoomStatus};
