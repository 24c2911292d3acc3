//! Billing arithmetic
//!
//! Tables are billed per started hour: any non-zero remainder of an occupancy
//! span costs a full hour, while a span of exactly zero costs nothing.

use chrono::Duration;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::types::TableNumber;

const SECONDS_PER_HOUR: i64 = 3600;

/// Whole hours billed for an occupancy span (ceiling, zero for empty spans)
pub fn billed_hours(elapsed: Duration) -> u64 {
    let seconds = elapsed.num_seconds();
    if seconds <= 0 {
        return 0;
    }
    ((seconds + SECONDS_PER_HOUR - 1) / SECONDS_PER_HOUR) as u64
}

/// Amount owed for an occupancy span at the given hourly rate.
///
/// Returns `None` when the charge does not fit in a `u64`.
pub fn charge_for(elapsed: Duration, hourly_rate: u64) -> Option<u64> {
    billed_hours(elapsed).checked_mul(hourly_rate)
}

/// Format a duration as zero-padded `HH:MM`; seconds are truncated
pub fn format_hhmm(duration: Duration) -> String {
    let minutes = duration.num_minutes().max(0);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn serialize_hhmm<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_hhmm(*duration))
}

/// Final day totals for one table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BillingRecord {
    /// Table the totals belong to
    pub table: TableNumber,
    /// Money earned over the day
    pub revenue: u64,
    /// Time the table was occupied over the day
    #[serde(serialize_with = "serialize_hhmm")]
    pub occupied: Duration,
}

impl BillingRecord {
    /// Create a billing record
    pub fn new(table: TableNumber, revenue: u64, occupied: Duration) -> Self {
        Self { table, revenue, occupied }
    }

    /// Occupied time as `HH:MM`
    pub fn occupied_hhmm(&self) -> String {
        format_hhmm(self.occupied)
    }
}

impl fmt::Display for BillingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.table, self.revenue, self.occupied_hhmm())
    }
}
