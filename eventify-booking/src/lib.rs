pub mod flow;
pub mod ledger;
pub mod models;

pub use flow::{submit_booking, submit_event_draft, BookingError};
pub use ledger::{BookingLedger, LedgerError, MAX_QUANTITY, MIN_QUANTITY};
pub use models::{Booking, BookingRequest, BookingStatus, TicketType};
