//! Event log parsing and validation
//!
//! Turns the raw text of a club day into [`ClubSession`] parameters and an
//! ordered list of [`ClientEvent`]s. The first malformed line stops parsing
//! and is reported verbatim together with its line number.

use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, instrument};

use super::{ClientAction, ClientEvent};
use crate::simulation::SimulationResult;
use crate::types::clock::parse_clock;
use crate::types::{ClientName, ClubSession, TableNumber};

/// What is wrong with a rejected line
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LineFault {
    /// Table count is not a positive integer
    #[error("table count must be a positive integer")]
    TableCount,
    /// Hours line is not two `HH:MM` times
    #[error("expected opening and closing times as 'HH:MM HH:MM'")]
    Hours,
    /// Opening time is after closing time
    #[error("opening time is after closing time")]
    HoursOrder,
    /// Hourly rate is not a non-negative integer
    #[error("hourly rate must be a non-negative integer")]
    HourlyRate,
    /// Event line does not have 3 or 4 fields
    #[error("expected 'HH:MM <id> <name> [<table>]'")]
    FieldCount,
    /// Event time is not `HH:MM`
    #[error("event time must be HH:MM")]
    Time,
    /// Event id is not 1..=4
    #[error("event id must be 1, 2, 3 or 4")]
    EventId,
    /// Client name has characters outside `[a-z0-9_-]`
    #[error("client name may only contain a-z, 0-9, '_' and '-'")]
    ClientName,
    /// Table number is not in 1..=table count
    #[error("table number is out of range")]
    TableNumber,
    /// Seating event without a table
    #[error("event id 2 requires a table number")]
    MissingTable,
    /// Table given for an event that takes none
    #[error("only event id 2 takes a table number")]
    UnexpectedTable,
    /// Event is older than the one before it
    #[error("event is earlier than the previous event")]
    OutOfOrder,
}

/// Event log parsing errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A header line is absent
    #[error("event log ends before the {0} line")]
    MissingHeader(&'static str),

    /// A line failed validation
    #[error("line {line}: {fault}: '{content}'")]
    InvalidLine {
        /// One-based line number
        line: usize,
        /// The offending line, verbatim
        content: String,
        /// What is wrong with it
        fault: LineFault,
    },
}

impl ParseError {
    fn invalid(line: usize, content: &str, fault: LineFault) -> Self {
        ParseError::InvalidLine { line, content: content.to_string(), fault }
    }

    /// One-based number of the offending line, if there is one
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::InvalidLine { line, .. } => Some(*line),
            ParseError::MissingHeader(_) => None,
        }
    }

    /// Verbatim text of the offending line, if there is one
    pub fn offending_line(&self) -> Option<&str> {
        match self {
            ParseError::InvalidLine { content, .. } => Some(content),
            ParseError::MissingHeader(_) => None,
        }
    }
}

/// A fully validated club day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLog {
    /// Session parameters from the header
    pub session: ClubSession,
    /// Client events in file order
    pub events: Vec<ClientEvent>,
}

/// Parser for the club event log format
#[derive(Debug, Clone, Copy, Default)]
pub struct EventLogParser;

impl EventLogParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Read and parse an event log file
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> SimulationResult<ParsedLog> {
        let text = fs::read_to_string(path.as_ref())?;
        Ok(self.parse_str(&text)?)
    }

    /// Parse the text of an event log
    pub fn parse_str(&self, text: &str) -> Result<ParsedLog, ParseError> {
        let mut lines: Vec<(usize, &str)> =
            text.lines().enumerate().map(|(i, line)| (i + 1, line)).collect();
        while lines.last().map_or(false, |(_, line)| line.trim().is_empty()) {
            lines.pop();
        }
        let mut lines = lines.into_iter();

        let (n, line) = lines.next().ok_or(ParseError::MissingHeader("table count"))?;
        let table_count = parse_unsigned::<u32>(line)
            .filter(|&count| count > 0)
            .ok_or_else(|| ParseError::invalid(n, line, LineFault::TableCount))?;

        let (n, line) = lines.next().ok_or(ParseError::MissingHeader("opening hours"))?;
        let (opening, closing) = parse_hours(line).map_err(|fault| ParseError::invalid(n, line, fault))?;

        let (n, line) = lines.next().ok_or(ParseError::MissingHeader("hourly rate"))?;
        let hourly_rate = parse_unsigned::<u64>(line)
            .ok_or_else(|| ParseError::invalid(n, line, LineFault::HourlyRate))?;

        let session = ClubSession::new(table_count, opening, closing, hourly_rate);

        let mut events: Vec<ClientEvent> = Vec::new();
        for (n, line) in lines {
            let event = parse_event(line, &session).map_err(|fault| ParseError::invalid(n, line, fault))?;
            if events.last().map_or(false, |previous| previous.time > event.time) {
                return Err(ParseError::invalid(n, line, LineFault::OutOfOrder));
            }
            events.push(event);
        }

        debug!(
            table_count = session.table_count,
            events = events.len(),
            "Parsed club event log"
        );

        Ok(ParsedLog { session, events })
    }
}

/// Digits only, so signs and whitespace are refused
fn parse_unsigned<T: FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn parse_hours(line: &str) -> Result<(chrono::NaiveTime, chrono::NaiveTime), LineFault> {
    let parts: Vec<&str> = line.split(' ').collect();
    if parts.len() != 2 {
        return Err(LineFault::Hours);
    }
    let opening = parse_clock(parts[0]).ok_or(LineFault::Hours)?;
    let closing = parse_clock(parts[1]).ok_or(LineFault::Hours)?;
    if opening > closing {
        return Err(LineFault::HoursOrder);
    }
    Ok((opening, closing))
}

fn parse_event(line: &str, session: &ClubSession) -> Result<ClientEvent, LineFault> {
    let parts: Vec<&str> = line.split(' ').collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(LineFault::FieldCount);
    }

    let time = parse_clock(parts[0]).ok_or(LineFault::Time)?;
    let id = parse_unsigned::<u8>(parts[1]).ok_or(LineFault::EventId)?;
    let client = ClientName::new(parts[2]).map_err(|_| LineFault::ClientName)?;

    let table = match parts.get(3) {
        Some(raw) => {
            let table = parse_unsigned::<u32>(raw)
                .and_then(|n| TableNumber::new(n).ok())
                .filter(|&table| session.has_table(table))
                .ok_or(LineFault::TableNumber)?;
            Some(table)
        }
        None => None,
    };

    let action = match (id, table) {
        (2, Some(table)) => ClientAction::SatAtTable(table),
        (2, None) => return Err(LineFault::MissingTable),
        (1 | 3 | 4, Some(_)) => return Err(LineFault::UnexpectedTable),
        (1, None) => ClientAction::Arrived,
        (3, None) => ClientAction::WaitsInQueue,
        (4, None) => ClientAction::Left,
        _ => return Err(LineFault::EventId),
    };

    Ok(ClientEvent::new(time, client, action))
}
