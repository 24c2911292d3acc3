//! Statistics collection and reporting
//!
//! This module contains the per-day counters the engine keeps while replaying
//! the event log.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::club::BillingRecord;
use crate::types::RejectionReason;

/// Counters describing one simulated club day
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DayStatistics {
    /// Client events echoed after passing the admission policy
    pub accepted_events: usize,
    /// Client events refused by the admission policy
    pub rejected_events: usize,
    /// Refusals broken down by reason
    pub rejections: BTreeMap<RejectionReason, usize>,
    /// Client events dropped because they happened after closing
    pub ignored_after_closing: usize,
    /// Queued clients seated at a freed table
    pub promotions: usize,
    /// Clients checked out by the club at closing
    pub auto_checkouts: usize,
    /// Longest the waiting queue got
    pub peak_queue_length: usize,
    /// Revenue over all tables
    pub total_revenue: u64,
    /// Occupied minutes over all tables
    pub total_occupied_minutes: i64,
}

impl DayStatistics {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Count an accepted client event
    pub fn record_accepted(&mut self) {
        self.accepted_events += 1;
    }

    /// Count a refused client event
    pub fn record_rejection(&mut self, reason: RejectionReason) {
        self.rejected_events += 1;
        *self.rejections.entry(reason).or_insert(0) += 1;
    }

    /// Count an event dropped after closing
    pub fn record_ignored(&mut self) {
        self.ignored_after_closing += 1;
    }

    /// Count a queue promotion
    pub fn record_promotion(&mut self) {
        self.promotions += 1;
    }

    /// Count a closing-time checkout
    pub fn record_auto_checkout(&mut self) {
        self.auto_checkouts += 1;
    }

    /// Track the queue length high-water mark
    pub fn observe_queue_length(&mut self, length: usize) {
        self.peak_queue_length = self.peak_queue_length.max(length);
    }

    /// Fold final table totals into the statistics
    pub fn finalize(&mut self, billing: &[BillingRecord]) {
        self.total_revenue = billing.iter().map(|record| record.revenue).fold(0, u64::saturating_add);
        self.total_occupied_minutes = billing.iter().map(|record| record.occupied.num_minutes()).sum();
    }

    /// Refusals for one reason
    pub fn rejections_for(&self, reason: RejectionReason) -> usize {
        self.rejections.get(&reason).copied().unwrap_or(0)
    }

    /// Client events that reached the admission policy
    pub fn processed_events(&self) -> usize {
        self.accepted_events + self.rejected_events
    }

    /// Share of processed events that were refused, in percent
    pub fn rejection_percentage(&self) -> f64 {
        if self.processed_events() == 0 {
            0.0
        } else {
            (self.rejected_events as f64 / self.processed_events() as f64) * 100.0
        }
    }

    /// Multi-line breakdown for logs and the terminal
    pub fn detailed_breakdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Processed events: {}\n", self.processed_events()));
        out.push_str(&format!("  Accepted: {}\n", self.accepted_events));
        out.push_str(&format!(
            "  Rejected: {} ({:.1}%)\n",
            self.rejected_events,
            self.rejection_percentage()
        ));
        for reason in RejectionReason::ALL {
            let count = self.rejections_for(reason);
            if count > 0 {
                out.push_str(&format!("    {}: {}\n", reason, count));
            }
        }
        out.push_str(&format!("Ignored after closing: {}\n", self.ignored_after_closing));
        out.push_str(&format!("Queue promotions: {}\n", self.promotions));
        out.push_str(&format!("Auto checkouts: {}\n", self.auto_checkouts));
        out.push_str(&format!("Peak queue length: {}\n", self.peak_queue_length));
        out.push_str(&format!("Total revenue: {}\n", self.total_revenue));
        out.push_str(&format!(
            "Total occupied time: {:02}:{:02}\n",
            self.total_occupied_minutes / 60,
            self.total_occupied_minutes % 60
        ));
        out
    }

    /// One-line summary
    pub fn compact_summary(&self) -> String {
        format!(
            "{} accepted, {} rejected, {} promoted, {} checked out, revenue {}",
            self.accepted_events,
            self.rejected_events,
            self.promotions,
            self.auto_checkouts,
            self.total_revenue
        )
    }
}

impl fmt::Display for DayStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.compact_summary())
    }
}
