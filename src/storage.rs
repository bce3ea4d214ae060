use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::models::Ticket;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("ticket file {path} is not accessible: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("ticket file {path} is malformed: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Per-event ticket files under `data_dir`, laid out as `event<id>/tickets.json`.
#[derive(Debug, Clone)]
pub struct TicketStorage {
    data_dir: PathBuf,
}

impl TicketStorage {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into() }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn tickets_path(&self, event_id: i64) -> PathBuf {
        self.data_dir
            .join(format!("event{}", event_id))
            .join("tickets.json")
    }

    /// Overwrites the event's file with the full ticket sequence.
    pub async fn save(&self, event_id: i64, tickets: &[Ticket]) -> Result<(), StorageError> {
        let path = self.tickets_path(event_id);

        if let Some(dir) = path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|source| StorageError::Io { path: dir.to_path_buf(), source })?;
        }

        let mut body = serde_json::to_vec(tickets)
            .map_err(|source| StorageError::Json { path: path.clone(), source })?;
        body.push(b'\n');

        tokio::fs::write(&path, body)
            .await
            .map_err(|source| StorageError::Io { path: path.clone(), source })?;

        debug!("Saved {} tickets for event {} to {}", tickets.len(), event_id, path.display());
        Ok(())
    }

    pub async fn load(&self, event_id: i64) -> Result<Vec<Ticket>, StorageError> {
        let path = self.tickets_path(event_id);

        let body = tokio::fs::read(&path)
            .await
            .map_err(|source| StorageError::Io { path: path.clone(), source })?;

        serde_json::from_slice(&body).map_err(|source| StorageError::Json { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TicketStatus;
    use tempfile::TempDir;

    #[tokio::test]
    async fn save_writes_json_array_of_id_and_status() {
        let dir = TempDir::new().unwrap();
        let storage = TicketStorage::new(dir.path());
        let tickets = vec![
            Ticket { id: 1, status: TicketStatus::Booked },
            Ticket::available(3),
        ];

        storage.save(1, &tickets).await.unwrap();

        let written = std::fs::read_to_string(dir.path().join("event1").join("tickets.json")).unwrap();
        assert_eq!(
            written,
            "[{\"id\":1,\"status\":\"booked\"},{\"id\":3,\"status\":\"available\"}]\n"
        );
    }

    #[tokio::test]
    async fn save_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let storage = TicketStorage::new(dir.path());

        storage.save(2, &[Ticket::available(4), Ticket::available(5)]).await.unwrap();
        storage.save(2, &[Ticket { id: 4, status: TicketStatus::Booked }]).await.unwrap();

        let loaded = storage.load(2).await.unwrap();
        assert_eq!(loaded, vec![Ticket { id: 4, status: TicketStatus::Booked }]);
    }

    #[tokio::test]
    async fn load_returns_what_was_saved() {
        let dir = TempDir::new().unwrap();
        let storage = TicketStorage::new(dir.path());
        let tickets = vec![Ticket::available(1), Ticket { id: 7, status: TicketStatus::Booked }];

        storage.save(9, &tickets).await.unwrap();

        assert_eq!(storage.load(9).await.unwrap(), tickets);
    }

    #[tokio::test]
    async fn load_of_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let storage = TicketStorage::new(dir.path());

        let err = storage.load(42).await.unwrap_err();
        assert!(matches!(err, StorageError::Io { .. }));
    }

    #[tokio::test]
    async fn load_of_malformed_file_is_json_error() {
        let dir = TempDir::new().unwrap();
        let storage = TicketStorage::new(dir.path());
        let path = storage.tickets_path(1);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{not json").unwrap();

        let err = storage.load(1).await.unwrap_err();
        assert!(matches!(err, StorageError::Json { .. }));
    }

    #[tokio::test]
    async fn save_fails_when_data_dir_is_a_file() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocked");
        std::fs::write(&blocker, "").unwrap();
        let storage = TicketStorage::new(&blocker);

        let err = storage.save(1, &[Ticket::available(1)]).await.unwrap_err();
        assert!(matches!(err, StorageError::Io { .. }));
    }
}
