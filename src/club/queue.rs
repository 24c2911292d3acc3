//! FIFO queue of clients waiting for a table

use std::collections::VecDeque;

use crate::types::ClientName;

/// Clients waiting for a free table, front first
#[derive(Debug, Clone, Default)]
pub struct WaitingQueue {
    waiting: VecDeque<ClientName>,
}

impl WaitingQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of waiting clients
    pub fn len(&self) -> usize {
        self.waiting.len()
    }

    /// Whether nobody waits
    pub fn is_empty(&self) -> bool {
        self.waiting.is_empty()
    }

    /// Whether `client` is waiting
    pub fn contains(&self, client: &ClientName) -> bool {
        self.waiting.contains(client)
    }

    /// Append a client; false if already waiting
    pub fn push_back(&mut self, client: ClientName) -> bool {
        if self.contains(&client) {
            return false;
        }
        self.waiting.push_back(client);
        true
    }

    /// Take the longest-waiting client
    pub fn pop_front(&mut self) -> Option<ClientName> {
        self.waiting.pop_front()
    }

    /// Drop a client from wherever they stand; false if absent
    pub fn remove(&mut self, client: &ClientName) -> bool {
        match self.waiting.iter().position(|c| c == client) {
            Some(index) => self.waiting.remove(index).is_some(),
            None => false,
        }
    }

    /// Waiting clients, front first
    pub fn iter(&self) -> impl Iterator<Item = &ClientName> {
        self.waiting.iter()
    }
}
