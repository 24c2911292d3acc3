//! Table registry
//!
//! Keeps table→occupant and client→table in lockstep: a client has a table
//! exactly when that table's occupant is that client.

use chrono::NaiveTime;
use std::collections::HashMap;
use tracing::debug;

use super::table::{Settlement, Table};
use crate::simulation::{SimulationError, SimulationResult};
use crate::types::{ClientName, TableNumber};

/// All tables of the club plus the reverse client index
#[derive(Debug, Clone)]
pub struct TableRegistry {
    tables: Vec<Table>,
    seats: HashMap<ClientName, TableNumber>,
}

impl TableRegistry {
    /// Create `count` free tables numbered 1..=count
    pub fn new(count: u32) -> Self {
        let tables = (0..count as usize).map(|i| Table::new(TableNumber::from_index(i))).collect();
        Self { tables, seats: HashMap::new() }
    }

    /// Number of tables
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether the club has no tables
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Look up a table
    pub fn get(&self, table: TableNumber) -> Option<&Table> {
        self.tables.get(table.index())
    }

    /// Tables in number order
    pub fn iter(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter()
    }

    /// Whether at least one table is free
    pub fn has_free_table(&self) -> bool {
        self.tables.iter().any(Table::is_free)
    }

    /// Number of occupied tables
    pub fn occupied_count(&self) -> usize {
        self.seats.len()
    }

    /// Client sitting at `table`
    pub fn occupant_of(&self, table: TableNumber) -> Option<&ClientName> {
        self.get(table).and_then(Table::occupant)
    }

    /// Table held by `client`
    pub fn table_of(&self, client: &ClientName) -> Option<TableNumber> {
        self.seats.get(client).copied()
    }

    /// Occupied tables as (client, table) pairs, in table order
    pub fn occupied(&self) -> impl Iterator<Item = (&ClientName, TableNumber)> {
        self.tables.iter().filter_map(|t| t.occupant().map(|client| (client, t.number())))
    }

    /// Seat a client who holds no table at a free table
    pub fn seat(&mut self, client: ClientName, table: TableNumber, at: NaiveTime) -> SimulationResult<()> {
        if let Some(held) = self.table_of(&client) {
            return Err(SimulationError::SeatingConflict(format!(
                "{} already holds table {}",
                client, held
            )));
        }

        let slot = self.slot_mut(table)?;
        if let Some(occupant) = slot.occupant() {
            return Err(SimulationError::SeatingConflict(format!(
                "table {} is occupied by {}",
                table, occupant
            )));
        }

        debug!(client = %client, table = %table, "Seating client");
        slot.seat(client.clone(), at);
        self.seats.insert(client, table);
        Ok(())
    }

    /// Settle the current span of a table without freeing it
    pub fn settle(&mut self, table: TableNumber, at: NaiveTime, hourly_rate: u64) -> SimulationResult<Settlement> {
        self.slot_mut(table)?
            .settle(at, hourly_rate)
            .ok_or(SimulationError::BillingOverflow { table, hourly_rate })
    }

    /// Free a table, returning whoever sat there
    pub fn release(&mut self, table: TableNumber) -> SimulationResult<Option<ClientName>> {
        let client = self.slot_mut(table)?.release();
        if let Some(client) = &client {
            self.seats.remove(client);
        }
        Ok(client)
    }

    /// Check that both mappings describe the same seating
    pub fn is_consistent(&self) -> bool {
        let forward = self.occupied().count();
        forward == self.seats.len()
            && self.seats.iter().all(|(client, &table)| self.occupant_of(table) == Some(client))
    }

    fn slot_mut(&mut self, table: TableNumber) -> SimulationResult<&mut Table> {
        let table_count = self.tables.len();
        self.tables
            .get_mut(table.index())
            .ok_or(SimulationError::UnknownTable { table, table_count })
    }
}
