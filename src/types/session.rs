//! Session parameters for one club day
//!
//! Table count, opening hours and hourly rate are read from the head of the
//! event log and stay fixed for the whole run.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::clock::hhmm;
use super::config::ConfigValidationError;
use super::TableNumber;

/// Immutable parameters of a simulated club day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubSession {
    /// Number of tables, numbered 1..=table_count
    pub table_count: u32,
    /// Opening time
    #[serde(with = "hhmm")]
    pub opening: NaiveTime,
    /// Closing time
    #[serde(with = "hhmm")]
    pub closing: NaiveTime,
    /// Price of one started hour at a table
    pub hourly_rate: u64,
}

impl ClubSession {
    /// Create session parameters
    pub fn new(table_count: u32, opening: NaiveTime, closing: NaiveTime, hourly_rate: u64) -> Self {
        Self { table_count, opening, closing, hourly_rate }
    }

    /// Validate the session parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.table_count == 0 {
            return Err(ConfigValidationError::InvalidTableCount(self.table_count));
        }

        if self.opening > self.closing {
            return Err(ConfigValidationError::InvalidOpeningHours {
                opening: self.opening,
                closing: self.closing,
            });
        }

        Ok(())
    }

    /// Check whether a table number exists in this club
    pub fn has_table(&self, table: TableNumber) -> bool {
        table.get() <= self.table_count
    }

    /// Check whether the club is open at the given time (closing time inclusive)
    pub fn is_open_at(&self, time: NaiveTime) -> bool {
        time >= self.opening && time <= self.closing
    }
}
