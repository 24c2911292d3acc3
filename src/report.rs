//! Rendering of a finished club day
//!
//! The text format is the club's log format: opening time, every output
//! event, closing time, then one `<table> <revenue> <HH:MM>` line per table.
//! The JSON format carries the same content plus the day statistics.

use serde::Serialize;

use crate::club::BillingRecord;
use crate::events::OutputEvent;
use crate::simulation::{DayOutcome, DayStatistics, SimulationResult};
use crate::types::clock::format_clock;
use crate::types::{OutputFormat, RejectionReason, TableNumber};

/// Serializable view of one output event
#[derive(Debug, Clone, Serialize)]
pub struct EventRecord {
    /// Time as `HH:MM`
    pub time: String,
    /// Numeric event id
    pub code: u8,
    /// Kind name
    pub kind: &'static str,
    /// Client the event concerns
    pub client: String,
    /// Table, when the event has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<TableNumber>,
    /// Refusal reason for error events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<RejectionReason>,
}

impl From<&OutputEvent> for EventRecord {
    fn from(event: &OutputEvent) -> Self {
        Self {
            time: format_clock(event.time),
            code: event.kind.code(),
            kind: event.kind.name(),
            client: event.client.to_string(),
            table: event.table,
            reason: event.kind.reason(),
        }
    }
}

#[derive(Serialize)]
struct DayReport<'a> {
    opening: String,
    closing: String,
    events: Vec<EventRecord>,
    billing: &'a [BillingRecord],
    #[serde(skip_serializing_if = "Option::is_none")]
    statistics: Option<&'a DayStatistics>,
}

/// Renders a [`DayOutcome`] in the configured format
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    format: OutputFormat,
    include_statistics: bool,
}

impl Reporter {
    /// Create a reporter
    pub fn new(format: OutputFormat, include_statistics: bool) -> Self {
        Self { format, include_statistics }
    }

    /// Output format in use
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Render the day; the result ends with a newline
    pub fn render(&self, outcome: &DayOutcome) -> SimulationResult<String> {
        match self.format {
            OutputFormat::Text => Ok(Self::render_text(outcome)),
            OutputFormat::Json => self.render_json(outcome),
        }
    }

    fn render_text(outcome: &DayOutcome) -> String {
        let mut out = String::new();
        out.push_str(&format_clock(outcome.opening));
        out.push('\n');
        for event in &outcome.events {
            out.push_str(&event.to_string());
            out.push('\n');
        }
        out.push_str(&format_clock(outcome.closing));
        out.push('\n');
        for record in &outcome.billing {
            out.push_str(&record.to_string());
            out.push('\n');
        }
        out
    }

    fn render_json(&self, outcome: &DayOutcome) -> SimulationResult<String> {
        let report = DayReport {
            opening: format_clock(outcome.opening),
            closing: format_clock(outcome.closing),
            events: outcome.events.iter().map(EventRecord::from).collect(),
            billing: &outcome.billing,
            statistics: self.include_statistics.then_some(&outcome.statistics),
        };
        let mut json = serde_json::to_string_pretty(&report)?;
        json.push('\n');
        Ok(json)
    }
}
