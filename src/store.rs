use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{RwLock, RwLockWriteGuard};
use tracing::{info, warn};

use crate::models::{Event, Ticket};
use crate::storage::TicketStorage;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("event {0} not found")]
    EventNotFound(i64),
}

/// In-memory events keyed by id. Clones share the same map and lock.
#[derive(Debug, Clone, Default)]
pub struct TicketStore {
    events: Arc<RwLock<BTreeMap<i64, Event>>>,
}

impl TicketStore {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        let events = events.into_iter().map(|e| (e.id, e)).collect();
        Self { events: Arc::new(RwLock::new(events)) }
    }

    /// The two events every fresh process starts with.
    pub fn seeded() -> Self {
        Self::new([
            Event::new(1, "Event 1", vec![Ticket::available(1), Ticket::available(3)]),
            Event::new(2, "Event 2", vec![Ticket::available(4), Ticket::available(5)]),
        ])
    }

    pub async fn get(&self, event_id: i64) -> Result<Event, StoreError> {
        self.events
            .read()
            .await
            .get(&event_id)
            .cloned()
            .ok_or(StoreError::EventNotFound(event_id))
    }

    /// Snapshot of all events ordered by id.
    pub async fn list(&self) -> Vec<Event> {
        self.events.read().await.values().cloned().collect()
    }

    pub async fn replace_tickets(&self, event_id: i64, tickets: Vec<Ticket>) -> Result<(), StoreError> {
        let mut events = self.events.write().await;
        let event = events
            .get_mut(&event_id)
            .ok_or(StoreError::EventNotFound(event_id))?;
        event.tickets = tickets;
        Ok(())
    }

    // Exclusive access for the booking path; held across the write-through.
    pub(crate) async fn lock(&self) -> RwLockWriteGuard<'_, BTreeMap<i64, Event>> {
        self.events.write().await
    }

    /// Replaces each known event's tickets with its persisted copy, when one loads.
    /// Events whose file is missing or unreadable keep their current tickets.
    pub async fn hydrate_from(&self, storage: &TicketStorage) -> usize {
        let ids: Vec<i64> = self.events.read().await.keys().copied().collect();
        let mut hydrated = 0;

        for event_id in ids {
            match storage.load(event_id).await {
                Ok(tickets) => {
                    if self.replace_tickets(event_id, tickets).await.is_ok() {
                        hydrated += 1;
                    }
                }
                Err(e) => warn!("Keeping seed tickets for event {}: {}", event_id, e),
            }
        }

        info!("Hydrated {} events from {}", hydrated, storage.data_dir().display());
        hydrated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TicketStatus;
    use tempfile::TempDir;

    #[tokio::test]
    async fn seeded_store_has_two_events_with_gapped_ticket_ids() {
        let store = TicketStore::seeded();

        let event = store.get(1).await.unwrap();
        assert_eq!(event.name, "Event 1");
        assert_eq!(event.tickets, vec![Ticket::available(1), Ticket::available(3)]);

        let event = store.get(2).await.unwrap();
        assert_eq!(event.tickets, vec![Ticket::available(4), Ticket::available(5)]);
    }

    #[tokio::test]
    async fn get_unknown_event_is_not_found() {
        let store = TicketStore::seeded();
        assert_eq!(store.get(3).await, Err(StoreError::EventNotFound(3)));
    }

    #[tokio::test]
    async fn list_is_ordered_by_event_id() {
        let store = TicketStore::new([
            Event::new(7, "Late", vec![]),
            Event::new(2, "Early", vec![]),
        ]);

        let ids: Vec<i64> = store.list().await.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 7]);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = TicketStore::seeded();
        let other = store.clone();

        other
            .replace_tickets(1, vec![Ticket { id: 1, status: TicketStatus::Booked }])
            .await
            .unwrap();

        assert_eq!(store.get(1).await.unwrap().tickets.len(), 1);
    }

    #[tokio::test]
    async fn replace_tickets_on_unknown_event_fails() {
        let store = TicketStore::seeded();
        let result = store.replace_tickets(9, vec![]).await;
        assert_eq!(result, Err(StoreError::EventNotFound(9)));
    }

    #[tokio::test]
    async fn hydrate_replaces_only_events_with_a_readable_file() {
        let dir = TempDir::new().unwrap();
        let storage = TicketStorage::new(dir.path());
        let persisted = vec![Ticket { id: 1, status: TicketStatus::Booked }, Ticket::available(3)];
        storage.save(1, &persisted).await.unwrap();

        let store = TicketStore::seeded();
        let hydrated = store.hydrate_from(&storage).await;

        assert_eq!(hydrated, 1);
        assert_eq!(store.get(1).await.unwrap().tickets, persisted);
        assert_eq!(
            store.get(2).await.unwrap().tickets,
            vec![Ticket::available(4), Ticket::available(5)]
        );
    }

    #[tokio::test]
    async fn hydrate_keeps_seed_tickets_when_file_is_malformed() {
        let dir = TempDir::new().unwrap();
        let storage = TicketStorage::new(dir.path());
        let path = storage.tickets_path(1);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "[{\"id\":1}]").unwrap();

        let store = TicketStore::seeded();

        assert_eq!(store.hydrate_from(&storage).await, 0);
        assert_eq!(
            store.get(1).await.unwrap().tickets,
            vec![Ticket::available(1), Ticket::available(3)]
        );
    }
}
