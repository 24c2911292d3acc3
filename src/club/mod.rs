//! Club state containers
//!
//! This module contains the state the club engine owns during a run: who is
//! inside, who is waiting, who sits where, and what each table has earned.
//!
//! # Overview
//!
//! - **PresenceSet**: clients inside the club
//! - **WaitingQueue**: FIFO of clients waiting for a table
//! - **TableRegistry**: tables plus the client→table index, kept in sync
//! - **Billing**: per-started-hour charging and `HH:MM` formatting
//!
//! # Usage Example
//!
//! ```rust
//! use computer_club_simulator::club::*;
//! use computer_club_simulator::types::{ClientName, TableNumber};
//! use chrono::{Duration, NaiveTime};
//!
//! let mut registry = TableRegistry::new(2);
//! let alice = ClientName::new("alice").unwrap();
//! let table = TableNumber::new(1).unwrap();
//! let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
//!
//! registry.seat(alice.clone(), table, nine).unwrap();
//! assert_eq!(registry.table_of(&alice), Some(table));
//! assert_eq!(billed_hours(Duration::minutes(61)), 2);
//! ```

pub mod billing;
pub mod presence;
pub mod queue;
pub mod registry;
pub mod table;

// Re-export all public types for convenience
pub use billing::*;
pub use presence::*;
pub use queue::*;
pub use registry::*;
pub use table::*;
