//! Client actions read from the club event log
//!
//! This module contains the typed input events consumed by the club engine.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::clock::{format_clock, hhmm};
use crate::types::{ClientName, TableNumber};

/// What a client did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClientAction {
    /// Client came into the club (id 1)
    Arrived,
    /// Client sat down at a table, possibly moving from another one (id 2)
    SatAtTable(TableNumber),
    /// Client started waiting for a free table (id 3)
    WaitsInQueue,
    /// Client left the club (id 4)
    Left,
}

impl ClientAction {
    /// Numeric event id used by the log format
    pub fn code(self) -> u8 {
        match self {
            ClientAction::Arrived => 1,
            ClientAction::SatAtTable(_) => 2,
            ClientAction::WaitsInQueue => 3,
            ClientAction::Left => 4,
        }
    }

    /// Table attached to the action, if any
    pub fn table(self) -> Option<TableNumber> {
        match self {
            ClientAction::SatAtTable(table) => Some(table),
            _ => None,
        }
    }
}

impl fmt::Display for ClientAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientAction::Arrived => write!(f, "Arrived"),
            ClientAction::SatAtTable(table) => write!(f, "SatAtTable({})", table),
            ClientAction::WaitsInQueue => write!(f, "WaitsInQueue"),
            ClientAction::Left => write!(f, "Left"),
        }
    }
}

/// A timestamped client action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientEvent {
    /// When the action happened
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    /// Who acted
    pub client: ClientName,
    /// What they did
    pub action: ClientAction,
}

impl ClientEvent {
    /// Create a new client event
    pub fn new(time: NaiveTime, client: ClientName, action: ClientAction) -> Self {
        Self { time, client, action }
    }

    /// Client arrival
    pub fn arrived(time: NaiveTime, client: ClientName) -> Self {
        Self::new(time, client, ClientAction::Arrived)
    }

    /// Client sitting down at `table`
    pub fn sat_at_table(time: NaiveTime, client: ClientName, table: TableNumber) -> Self {
        Self::new(time, client, ClientAction::SatAtTable(table))
    }

    /// Client asking to wait for a table
    pub fn waits_in_queue(time: NaiveTime, client: ClientName) -> Self {
        Self::new(time, client, ClientAction::WaitsInQueue)
    }

    /// Client leaving
    pub fn left(time: NaiveTime, client: ClientName) -> Self {
        Self::new(time, client, ClientAction::Left)
    }
}

impl fmt::Display for ClientEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", format_clock(self.time), self.action.code(), self.client)?;
        if let Some(table) = self.action.table() {
            write!(f, " {}", table)?;
        }
        Ok(())
    }
}
