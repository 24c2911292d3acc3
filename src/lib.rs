//! Computer Club Simulator
//!
//! Replays one day of a computer club from its event log: clients arrive, sit
//! at tables, wait in a queue and leave, while the club enforces its admission
//! rules and bills every started hour at a table.
//!
//! # Overview
//!
//! The input is a text log with the club parameters on the first three lines
//! (table count, opening and closing time, hourly rate) followed by one client
//! event per line. The simulator validates the log, replays the events and
//! produces the club's output log plus per-table revenue and occupancy.
//!
//! ## Key Features
//!
//! - **Strict Log Validation**: the first malformed line is reported with its line number
//! - **Admission Policy**: refusals are output events, never failures
//! - **FIFO Waiting Queue**: freed tables go to the longest-waiting client
//! - **Per-Hour Billing**: every started hour is charged, zero-length spans are free
//! - **Text and JSON Reports**: the club log format or a structured report with statistics
//!
//! ## Quick Start
//!
//! ```rust
//! use computer_club_simulator::*;
//!
//! let log = "1\n08:00 20:00\n10\n08:10 1 alice\n08:10 2 alice 1\n09:00 4 alice\n";
//! let parsed = EventLogParser::new().parse_str(log)?;
//!
//! let outcome = ClubEngine::run(parsed.session, &parsed.events)?;
//! let report = Reporter::new(OutputFormat::Text, false).render(&outcome)?;
//!
//! assert!(report.ends_with("20:00\n1 10 00:50\n"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: identifiers, enums, session parameters and configuration
//! - [`events`]: input and output events plus the event log parser
//! - [`club`]: presence set, waiting queue, tables and billing
//! - [`simulation`]: the club engine, statistics, errors and logging
//! - [`report`]: text and JSON rendering of a finished day
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Events    │    │ Simulation  │    │    Club     │    │   Report    │
//! │             │    │             │    │             │    │             │
//! │ Parser      ├───►│ ClubEngine  ├───►│ Presence    │    │ Text        │
//! │ ClientEvent │    │ Statistics  │    │ Queue       │    │ JSON        │
//! │ OutputEvent │    │             │    │ Tables      │    │             │
//! └─────────────┘    └──────┬──────┘    └─────────────┘    └──────▲──────┘
//!                           │              DayOutcome             │
//!                           └─────────────────────────────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod club;
pub mod events;
pub mod report;
pub mod simulation;

pub mod types;

// Core types and identifiers
pub use types::{
    // Identifiers
    ClientName,
    ClubSession,
    // Configuration
    AppConfig,
    ConfigValidationError,
    // Enums
    OutputFormat,
    RejectionReason,
    TableNumber,
};

// Club state
pub use club::{BillingRecord, PresenceSet, TableRegistry, WaitingQueue};

// Event types and parsing
pub use events::{ClientAction, ClientEvent, EventLogParser, OutputEvent, OutputKind, ParseError};

// Simulation types and functionality
pub use simulation::{ClubEngine, DayOutcome, DayStatistics, Flow, SimulationError, SimulationResult};

// Reporting
pub use report::Reporter;
