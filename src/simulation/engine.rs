//! Club simulation engine
//!
//! Replays one day of client events against the admission policy. Each input
//! event produces exactly one output event: its echo when accepted, or an
//! error event naming the refusal reason. The engine adds its own events for
//! queue promotions and closing-time checkouts.
//!
//! An event later than closing time stops processing; it and everything after
//! it are dropped. At closing every table still occupied is settled without
//! being freed, and its occupant is checked out.

use chrono::NaiveTime;
use serde::Serialize;
use tracing::{debug, info, instrument};

use super::error::{SimulationError, SimulationResult};
use super::statistics::DayStatistics;
use crate::club::{BillingRecord, PresenceSet, TableRegistry, WaitingQueue};
use crate::events::{ClientAction, ClientEvent, OutputEvent};
use crate::types::clock::hhmm;
use crate::types::{ClientName, ClubSession, RejectionReason, TableNumber};

/// Whether the engine still accepts events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// The event was processed; keep going
    Continue,
    /// Closing time has passed; further events are ignored
    Closed,
}

/// Everything the reporter needs about a finished day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayOutcome {
    /// Opening time
    #[serde(with = "hhmm")]
    pub opening: NaiveTime,
    /// Closing time
    #[serde(with = "hhmm")]
    pub closing: NaiveTime,
    /// Output events in emission order
    #[serde(skip)]
    pub events: Vec<OutputEvent>,
    /// One billing record per table, in table order
    pub billing: Vec<BillingRecord>,
    /// Counters for the day
    pub statistics: DayStatistics,
}

enum Verdict {
    Accepted,
    AcceptedWith(OutputEvent),
    Rejected(RejectionReason),
}

/// Single-day admission and billing engine
#[derive(Debug)]
pub struct ClubEngine {
    session: ClubSession,
    presence: PresenceSet,
    queue: WaitingQueue,
    tables: TableRegistry,
    output: Vec<OutputEvent>,
    statistics: DayStatistics,
    last_time: Option<NaiveTime>,
    closed: bool,
}

impl ClubEngine {
    /// Create an engine with an empty club
    pub fn new(session: ClubSession) -> SimulationResult<Self> {
        session.validate()?;
        Ok(Self {
            tables: TableRegistry::new(session.table_count),
            session,
            presence: PresenceSet::new(),
            queue: WaitingQueue::new(),
            output: Vec::new(),
            statistics: DayStatistics::new(),
            last_time: None,
            closed: false,
        })
    }

    /// Replay a whole day: process every event, then close
    #[instrument(skip_all, fields(tables = session.table_count, events = events.len()))]
    pub fn run(session: ClubSession, events: &[ClientEvent]) -> SimulationResult<DayOutcome> {
        let mut engine = Self::new(session)?;

        for (index, event) in events.iter().enumerate() {
            if engine.process(event)? == Flow::Closed {
                let skipped = events.len() - index - 1;
                for _ in 0..skipped {
                    engine.statistics.record_ignored();
                }
                debug!(at = %event.time, skipped, "Closing time passed, dropping remaining events");
                break;
            }
        }

        engine.close()
    }

    /// Apply one event.
    ///
    /// Returns [`Flow::Closed`] without touching any state once an event is
    /// past closing time.
    pub fn process(&mut self, event: &ClientEvent) -> SimulationResult<Flow> {
        if self.closed {
            self.statistics.record_ignored();
            return Ok(Flow::Closed);
        }

        if let Some(previous) = self.last_time {
            if event.time < previous {
                return Err(SimulationError::OutOfOrder { previous, current: event.time });
            }
        }

        if event.time > self.session.closing {
            self.closed = true;
            self.statistics.record_ignored();
            return Ok(Flow::Closed);
        }

        if let Some(table) = event.action.table() {
            if !self.session.has_table(table) {
                return Err(SimulationError::UnknownTable { table, table_count: self.tables.len() });
            }
        }

        self.last_time = Some(event.time);
        debug!(event = %event, "Processing event");

        let verdict = if event.time < self.session.opening {
            Verdict::Rejected(RejectionReason::NotOpenYet)
        } else {
            match event.action {
                ClientAction::Arrived => self.arrive(event),
                ClientAction::WaitsInQueue => self.wait(event),
                ClientAction::SatAtTable(table) => self.sit(event, table)?,
                ClientAction::Left => self.leave(event)?,
            }
        };

        match verdict {
            Verdict::Accepted => {
                self.statistics.record_accepted();
                self.output.push(OutputEvent::echo(event));
            }
            Verdict::AcceptedWith(follow_up) => {
                self.statistics.record_accepted();
                self.output.push(OutputEvent::echo(event));
                self.output.push(follow_up);
            }
            Verdict::Rejected(reason) => {
                crate::club_event!(
                    info,
                    "Client action refused",
                    client = event.client.as_str(),
                    action = event.action.code(),
                    reason = reason.as_str(),
                );
                self.statistics.record_rejection(reason);
                self.output.push(OutputEvent::rejection(event, reason));
            }
        }

        Ok(Flow::Continue)
    }

    /// Settle the day and hand over the results
    #[instrument(skip(self), fields(closing = %self.session.closing))]
    pub fn close(mut self) -> SimulationResult<DayOutcome> {
        let closing = self.session.closing;
        let rate = self.session.hourly_rate;

        let mut remaining: Vec<(ClientName, TableNumber)> =
            self.tables.occupied().map(|(client, table)| (client.clone(), table)).collect();
        remaining.sort();

        for (client, table) in remaining {
            let settlement = self.tables.settle(table, closing, rate)?;
            debug!(client = %client, table = %table, charge = settlement.charge, "Checking out at closing");
            self.statistics.record_auto_checkout();
            self.output.push(OutputEvent::auto_checkout(closing, client));
        }

        let billing: Vec<BillingRecord> = self
            .tables
            .iter()
            .map(|table| BillingRecord::new(table.number(), table.revenue(), table.occupied()))
            .collect();
        self.statistics.finalize(&billing);

        info!(summary = %self.statistics, "Club day closed");

        Ok(DayOutcome {
            opening: self.session.opening,
            closing,
            events: self.output,
            billing,
            statistics: self.statistics,
        })
    }

    fn arrive(&mut self, event: &ClientEvent) -> Verdict {
        if self.presence.insert(event.client.clone()) {
            Verdict::Accepted
        } else {
            Verdict::Rejected(RejectionReason::YouShallNotPass)
        }
    }

    fn wait(&mut self, event: &ClientEvent) -> Verdict {
        if self.tables.has_free_table() {
            return Verdict::Rejected(RejectionReason::ICanWaitNoLonger);
        }
        // Capacity check is strictly greater: the queue may reach table_count + 1
        if self.queue.len() > self.tables.len() {
            return Verdict::Rejected(RejectionReason::PleaseIsBusy);
        }

        // A client is queued at most once and never while holding a table
        if self.tables.table_of(&event.client).is_none() {
            self.queue.push_back(event.client.clone());
            self.statistics.observe_queue_length(self.queue.len());
        }
        Verdict::Accepted
    }

    fn sit(&mut self, event: &ClientEvent, table: TableNumber) -> SimulationResult<Verdict> {
        if !self.presence.contains(&event.client) {
            return Ok(Verdict::Rejected(RejectionReason::ClientUnknown));
        }

        // Any occupant blocks the table, including the requesting client
        if self.tables.occupant_of(table).is_some() {
            return Ok(Verdict::Rejected(RejectionReason::PleaseIsBusy));
        }

        if let Some(held) = self.tables.table_of(&event.client) {
            self.vacate(held, event.time)?;
        }
        // A seated client must not be promoted to a second table
        self.queue.remove(&event.client);
        self.tables.seat(event.client.clone(), table, event.time)?;
        Ok(Verdict::Accepted)
    }

    fn leave(&mut self, event: &ClientEvent) -> SimulationResult<Verdict> {
        if !self.presence.remove(&event.client) {
            return Ok(Verdict::Rejected(RejectionReason::ClientUnknown));
        }
        // A client who left must not be promoted into a table
        self.queue.remove(&event.client);

        let Some(table) = self.tables.table_of(&event.client) else {
            return Ok(Verdict::Accepted);
        };
        self.vacate(table, event.time)?;

        match self.queue.pop_front() {
            Some(next) => {
                self.tables.seat(next.clone(), table, event.time)?;
                self.statistics.record_promotion();
                debug!(client = %next, table = %table, "Seating client from queue");
                Ok(Verdict::AcceptedWith(OutputEvent::seated_from_queue(event.time, next, table)))
            }
            None => Ok(Verdict::Accepted),
        }
    }

    fn vacate(&mut self, table: TableNumber, at: NaiveTime) -> SimulationResult<()> {
        let settlement = self.tables.settle(table, at, self.session.hourly_rate)?;
        self.tables.release(table)?;
        debug!(
            table = %table,
            minutes = settlement.elapsed.num_minutes(),
            charge = settlement.charge,
            "Table vacated"
        );
        Ok(())
    }

    /// Session parameters
    pub fn session(&self) -> &ClubSession {
        &self.session
    }

    /// Clients inside the club
    pub fn presence(&self) -> &PresenceSet {
        &self.presence
    }

    /// Clients waiting for a table
    pub fn queue(&self) -> &WaitingQueue {
        &self.queue
    }

    /// Table state
    pub fn tables(&self) -> &TableRegistry {
        &self.tables
    }

    /// Counters so far
    pub fn statistics(&self) -> &DayStatistics {
        &self.statistics
    }

    /// Output emitted so far
    pub fn output(&self) -> &[OutputEvent] {
        &self.output
    }

    /// Whether closing time has passed
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}
