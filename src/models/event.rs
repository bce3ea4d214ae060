use serde::{Deserialize, Serialize};

use super::Ticket;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub tickets: Vec<Ticket>,
}

impl Event {
    pub fn new(id: i64, name: impl Into<String>, tickets: Vec<Ticket>) -> Self {
        Self { id, name: name.into(), tickets }
    }
}
