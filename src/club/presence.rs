//! Clients currently inside the club

use std::collections::HashSet;

use crate::types::ClientName;

/// Set of clients who arrived and have not left yet
#[derive(Debug, Clone, Default)]
pub struct PresenceSet {
    inside: HashSet<ClientName>,
}

impl PresenceSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `client` is inside
    pub fn contains(&self, client: &ClientName) -> bool {
        self.inside.contains(client)
    }

    /// Record an arrival; false if the client was already inside
    pub fn insert(&mut self, client: ClientName) -> bool {
        self.inside.insert(client)
    }

    /// Record a departure; false if the client was not inside
    pub fn remove(&mut self, client: &ClientName) -> bool {
        self.inside.remove(client)
    }

    /// Number of clients inside
    pub fn len(&self) -> usize {
        self.inside.len()
    }

    /// Whether the club is empty
    pub fn is_empty(&self) -> bool {
        self.inside.is_empty()
    }

    /// Names of clients inside, sorted
    pub fn names(&self) -> Vec<&ClientName> {
        let mut names: Vec<&ClientName> = self.inside.iter().collect();
        names.sort();
        names
    }
}
