//! A single club table and its running totals

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

use super::billing::charge_for;
use crate::types::clock::hhmm;
use crate::types::{ClientName, TableNumber};

/// Who sits at a table and since when
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupancy {
    /// Client at the table
    pub client: ClientName,
    /// Start of the current billing span
    #[serde(with = "hhmm")]
    pub since: NaiveTime,
}

/// Outcome of settling a table's current span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// Length of the settled span
    pub elapsed: Duration,
    /// Amount charged for it
    pub charge: u64,
}

/// State of one table over the day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    number: TableNumber,
    occupancy: Option<Occupancy>,
    occupied: Duration,
    revenue: u64,
}

impl Table {
    /// Create a free table with empty totals
    pub fn new(number: TableNumber) -> Self {
        Self { number, occupancy: None, occupied: Duration::zero(), revenue: 0 }
    }

    /// Table number
    pub fn number(&self) -> TableNumber {
        self.number
    }

    /// Whether nobody sits here
    pub fn is_free(&self) -> bool {
        self.occupancy.is_none()
    }

    /// Current occupancy, if any
    pub fn occupancy(&self) -> Option<&Occupancy> {
        self.occupancy.as_ref()
    }

    /// Client currently at the table
    pub fn occupant(&self) -> Option<&ClientName> {
        self.occupancy.as_ref().map(|o| &o.client)
    }

    /// Total occupied time settled so far
    pub fn occupied(&self) -> Duration {
        self.occupied
    }

    /// Total revenue settled so far
    pub fn revenue(&self) -> u64 {
        self.revenue
    }

    pub(crate) fn seat(&mut self, client: ClientName, at: NaiveTime) {
        self.occupancy = Some(Occupancy { client, since: at });
    }

    pub(crate) fn release(&mut self) -> Option<ClientName> {
        self.occupancy.take().map(|o| o.client)
    }

    /// Fold the span since the last settlement into the totals.
    ///
    /// The occupant stays seated and a new span starts at `at`. A free table
    /// settles to nothing. Returns `None`, leaving the table untouched, when
    /// the charge or the revenue total would overflow.
    pub(crate) fn settle(&mut self, at: NaiveTime, hourly_rate: u64) -> Option<Settlement> {
        let Some(occupancy) = self.occupancy.as_mut() else {
            return Some(Settlement { elapsed: Duration::zero(), charge: 0 });
        };

        let elapsed = at.signed_duration_since(occupancy.since).max(Duration::zero());
        let charge = charge_for(elapsed, hourly_rate)?;
        let revenue = self.revenue.checked_add(charge)?;
        self.occupied = self.occupied + elapsed;
        self.revenue = revenue;
        occupancy.since = at;

        Some(Settlement { elapsed, charge })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_new_table_is_free() {
        let table = Table::new(TableNumber::new(1).unwrap());
        assert!(table.is_free());
        assert_eq!(table.occupied(), Duration::zero());
        assert_eq!(table.revenue(), 0);
    }

    #[test]
    fn test_settle_accumulates_spans() {
        let mut table = Table::new(TableNumber::new(1).unwrap());
        table.seat(ClientName::new("alice").unwrap(), hm(9, 0));

        let first = table.settle(hm(9, 50), 10).unwrap();
        assert_eq!(first, Settlement { elapsed: Duration::minutes(50), charge: 10 });

        let second = table.settle(hm(11, 0), 10).unwrap();
        assert_eq!(second.elapsed, Duration::minutes(70));
        assert_eq!(second.charge, 20);

        assert_eq!(table.occupied(), Duration::minutes(120));
        assert_eq!(table.revenue(), 30);
        assert_eq!(table.occupancy().unwrap().since, hm(11, 0));
    }

    #[test]
    fn test_zero_span_is_free_of_charge() {
        let mut table = Table::new(TableNumber::new(1).unwrap());
        table.seat(ClientName::new("alice").unwrap(), hm(9, 0));
        assert_eq!(table.settle(hm(9, 0), 10).unwrap().charge, 0);
        assert_eq!(table.revenue(), 0);
    }

    #[test]
    fn test_settle_free_table() {
        let mut table = Table::new(TableNumber::new(1).unwrap());
        assert_eq!(table.settle(hm(12, 0), 10).unwrap().charge, 0);
        assert_eq!(table.release(), None);
    }
}
