//! Core types and identifiers for the computer club simulator
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the simulation system.
//!
//! # Overview
//!
//! - **Identifiers**: validated client names and one-based table numbers
//! - **Enums**: rejection reasons and report output formats
//! - **Session**: the immutable parameters of one club day
//! - **Configuration**: run configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use computer_club_simulator::types::*;
//! use chrono::NaiveTime;
//!
//! let client = ClientName::new("client1").unwrap();
//! let table = TableNumber::new(2).unwrap();
//!
//! let session = ClubSession::new(
//!     3,
//!     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
//!     NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
//!     10,
//! );
//! assert!(session.validate().is_ok());
//! assert!(session.has_table(table));
//! assert_eq!(client.as_str(), "client1");
//! ```

pub mod clock;
pub mod config;
pub mod enums;
pub mod identifiers;
pub mod session;

// Re-export all public types for convenience
pub use clock::*;
pub use config::*;
pub use enums::*;
pub use identifiers::*;
pub use session::*;
