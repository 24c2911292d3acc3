//! Client events and the event log
//!
//! This module contains the input and output event types and the parser that
//! validates a raw club event log.
//!
//! # Overview
//!
//! - **ClientEvent**: a timestamped client action read from the log
//! - **OutputEvent**: an echoed action or a club-generated event
//! - **EventLogParser**: turns log text into session parameters and events
//!
//! # Usage Example
//!
//! ```rust
//! use computer_club_simulator::events::*;
//!
//! let text = "2\n09:00 19:00\n10\n09:15 1 alice\n09:20 2 alice 1\n";
//! let log = EventLogParser::new().parse_str(text).unwrap();
//!
//! assert_eq!(log.session.table_count, 2);
//! assert_eq!(log.events.len(), 2);
//! assert_eq!(log.events[1].action.code(), 2);
//! ```

pub mod client_event;
pub mod output_event;
pub mod parser;

// Re-export all public types for convenience
pub use client_event::*;
pub use output_event::*;
pub use parser::*;
