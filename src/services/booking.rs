//! Ticket booking: flips a ticket from `available` to `booked` and writes
//! the event's tickets to disk.
//!
//! The scan, the status flip and the write-through all happen under the
//! store's single exclusive lock, so bookings for every event are serialized
//! behind the file write. A failed write is logged and the in-memory state
//! stays authoritative.

use tracing::{debug, error, info};

use crate::models::{Ticket, TicketStatus};
use crate::storage::TicketStorage;
use crate::store::{StoreError, TicketStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingOutcome {
    Booked,
    /// No available ticket with that id: already booked or never existed.
    Unchanged,
}

#[derive(Debug, Clone)]
pub struct BookingService {
    store: TicketStore,
    storage: TicketStorage,
}

impl BookingService {
    pub fn new(store: TicketStore, storage: TicketStorage) -> Self {
        Self { store, storage }
    }

    pub async fn book(&self, event_id: i64, ticket_id: i64) -> Result<BookingOutcome, StoreError> {
        let mut events = self.store.lock().await;
        let event = events
            .get_mut(&event_id)
            .ok_or(StoreError::EventNotFound(event_id))?;

        let outcome = mark_booked(&mut event.tickets, ticket_id);
        match outcome {
            BookingOutcome::Booked => info!("Ticket {} of event {} booked", ticket_id, event_id),
            BookingOutcome::Unchanged => {
                debug!("No available ticket {} in event {}", ticket_id, event_id)
            }
        }

        // Persist even when nothing changed
        if let Err(e) = self.storage.save(event_id, &event.tickets).await {
            error!("Error saving ticket data for event {}: {}", event_id, e);
        }

        Ok(outcome)
    }
}

/// Flips the first available ticket with `ticket_id` to booked.
pub fn mark_booked(tickets: &mut [Ticket], ticket_id: i64) -> BookingOutcome {
    match tickets
        .iter_mut()
        .find(|t| t.id == ticket_id && t.is_available())
    {
        Some(ticket) => {
            ticket.status = TicketStatus::Booked;
            BookingOutcome::Booked
        }
        None => BookingOutcome::Unchanged,
    }
}
