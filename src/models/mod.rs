pub mod event;
pub mod ticket;

pub use event::Event;
pub use ticket::{Ticket, TicketStatus};
