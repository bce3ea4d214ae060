pub mod booking;

pub use booking::{BookingOutcome, BookingService};
