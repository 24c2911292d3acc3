//! Events emitted by the club engine
//!
//! Every accepted client action is echoed as an output event; the club adds
//! its own events for queue promotions, closing-time checkouts and refusals.

use chrono::NaiveTime;
use std::fmt;

use super::{ClientAction, ClientEvent};
use crate::types::clock::format_clock;
use crate::types::{ClientName, RejectionReason, TableNumber};

/// Kind of an output event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputKind {
    /// Echo of an accepted arrival (id 1)
    Arrived,
    /// Echo of an accepted seating (id 2)
    SatAtTable,
    /// Echo of an accepted queue request (id 3)
    WaitsInQueue,
    /// Echo of an accepted departure (id 4)
    Left,
    /// Club checked the client out at closing time (id 11)
    AutoCheckout,
    /// Club seated the head of the queue at a freed table (id 12)
    SeatedFromQueue,
    /// Club refused the client action (id 13)
    Error(RejectionReason),
}

impl OutputKind {
    /// Numeric event id used by the log format
    pub fn code(self) -> u8 {
        match self {
            OutputKind::Arrived => 1,
            OutputKind::SatAtTable => 2,
            OutputKind::WaitsInQueue => 3,
            OutputKind::Left => 4,
            OutputKind::AutoCheckout => 11,
            OutputKind::SeatedFromQueue => 12,
            OutputKind::Error(_) => 13,
        }
    }

    /// Short name of the kind
    pub fn name(self) -> &'static str {
        match self {
            OutputKind::Arrived => "Arrived",
            OutputKind::SatAtTable => "SatAtTable",
            OutputKind::WaitsInQueue => "WaitsInQueue",
            OutputKind::Left => "Left",
            OutputKind::AutoCheckout => "AutoCheckout",
            OutputKind::SeatedFromQueue => "SeatedFromQueue",
            OutputKind::Error(_) => "Error",
        }
    }

    /// Rejection reason for error events
    pub fn reason(self) -> Option<RejectionReason> {
        match self {
            OutputKind::Error(reason) => Some(reason),
            _ => None,
        }
    }

    /// Whether this is an echo of a client action
    pub fn is_echo(self) -> bool {
        matches!(
            self,
            OutputKind::Arrived | OutputKind::SatAtTable | OutputKind::WaitsInQueue | OutputKind::Left
        )
    }

    /// Whether this is a refusal
    pub fn is_error(self) -> bool {
        matches!(self, OutputKind::Error(_))
    }
}

impl From<ClientAction> for OutputKind {
    fn from(action: ClientAction) -> Self {
        match action {
            ClientAction::Arrived => OutputKind::Arrived,
            ClientAction::SatAtTable(_) => OutputKind::SatAtTable,
            ClientAction::WaitsInQueue => OutputKind::WaitsInQueue,
            ClientAction::Left => OutputKind::Left,
        }
    }
}

/// One line of the engine's output stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputEvent {
    /// When the event happened
    pub time: NaiveTime,
    /// What happened
    pub kind: OutputKind,
    /// Client the event concerns
    pub client: ClientName,
    /// Table the event concerns, if any
    pub table: Option<TableNumber>,
}

impl OutputEvent {
    /// Echo an accepted client action
    pub fn echo(event: &ClientEvent) -> Self {
        Self {
            time: event.time,
            kind: event.action.into(),
            client: event.client.clone(),
            table: event.action.table(),
        }
    }

    /// Refusal of a client action
    pub fn rejection(event: &ClientEvent, reason: RejectionReason) -> Self {
        Self { time: event.time, kind: OutputKind::Error(reason), client: event.client.clone(), table: None }
    }

    /// Closing-time checkout of a seated client
    pub fn auto_checkout(time: NaiveTime, client: ClientName) -> Self {
        Self { time, kind: OutputKind::AutoCheckout, client, table: None }
    }

    /// Promotion of a queued client to a freed table
    pub fn seated_from_queue(time: NaiveTime, client: ClientName, table: TableNumber) -> Self {
        Self { time, kind: OutputKind::SeatedFromQueue, client, table: Some(table) }
    }
}

impl fmt::Display for OutputEvent {
    /// Log-format line; errors print their reason where the client name goes
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", format_clock(self.time), self.kind.code())?;
        match self.kind {
            OutputKind::Error(reason) => write!(f, "{}", reason)?,
            _ => write!(f, "{}", self.client)?,
        }
        if let Some(table) = self.table {
            write!(f, " {}", table)?;
        }
        Ok(())
    }
}
