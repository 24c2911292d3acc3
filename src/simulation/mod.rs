//! Simulation engine and control
//!
//! This module contains the club engine, day statistics, error handling and
//! logging setup.
//!
//! # Overview
//!
//! - **ClubEngine**: replays a day of client events against the admission policy
//! - **DayOutcome**: output events, per-table billing and statistics of a finished day
//! - **DayStatistics**: counters collected while the engine runs
//! - **SimulationError**: error handling for contract breaches, I/O and serialization
//! - **LoggingConfig**: tracing subscriber setup
//!
//! # Usage Example
//!
//! ```rust
//! use computer_club_simulator::simulation::*;
//! use computer_club_simulator::events::ClientEvent;
//! use computer_club_simulator::types::{ClientName, ClubSession, TableNumber};
//! use chrono::NaiveTime;
//!
//! let at = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
//! let session = ClubSession::new(1, at(8, 0), at(20, 0), 10);
//! let alice = ClientName::new("alice").unwrap();
//!
//! let events = vec![
//!     ClientEvent::arrived(at(8, 10), alice.clone()),
//!     ClientEvent::sat_at_table(at(8, 10), alice.clone(), TableNumber::new(1).unwrap()),
//!     ClientEvent::left(at(9, 0), alice),
//! ];
//!
//! let outcome = ClubEngine::run(session, &events).unwrap();
//! assert_eq!(outcome.events.len(), 3);
//! assert_eq!(outcome.billing[0].to_string(), "1 10 00:50");
//! ```

pub mod engine;
pub mod error;
pub mod logging;
pub mod statistics;

// Re-export all public types for convenience
pub use engine::*;
pub use error::*;
pub use logging::*;
pub use statistics::*;
