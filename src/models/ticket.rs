use serde::{Deserialize, Serialize};
use std::fmt;

/// On disk a ticket is `{"id": 1, "status": "available"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub status: TicketStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Available,
    Booked,
}

impl Ticket {
    pub fn available(id: i64) -> Self {
        Self { id, status: TicketStatus::Available }
    }

    pub fn is_available(&self) -> bool {
        self.status == TicketStatus::Available
    }
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Available => "available",
            TicketStatus::Booked => "booked",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
