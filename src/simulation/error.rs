//! Error types and handling
//!
//! This module contains error types for the simulation. Admission-policy
//! refusals are not errors; they are reported as output events. The variants
//! here cover broken input contracts, I/O and serialization.

use chrono::NaiveTime;
use thiserror::Error;

use crate::events::ParseError;
use crate::types::{ConfigError, ConfigValidationError, TableNumber};

/// Errors that can occur during simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Session parameters or run configuration failed validation
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ConfigValidationError),

    /// Run configuration could not be loaded
    #[error("Configuration error: {0}")]
    ConfigurationError(#[from] ConfigError),

    /// Event log is malformed
    #[error("Malformed event log: {0}")]
    ParseError(#[from] ParseError),

    /// Event refers to a table the club does not have
    #[error("Table {table} does not exist (club has {table_count} tables)")]
    UnknownTable {
        /// Requested table
        table: TableNumber,
        /// Number of tables in the club
        table_count: usize,
    },

    /// Event is older than the previously processed one
    #[error("Event at {current} arrived after an event at {previous}")]
    OutOfOrder {
        /// Time of the previously processed event
        previous: NaiveTime,
        /// Time of the offending event
        current: NaiveTime,
    },

    /// Seating would break the one-client-per-table rule
    #[error("Seating conflict: {0}")]
    SeatingConflict(String),

    /// Charge or revenue total for a table does not fit in a `u64`
    #[error("Billing for table {table} overflows at hourly rate {hourly_rate}")]
    BillingOverflow {
        /// Table being billed
        table: TableNumber,
        /// Rate in effect
        hourly_rate: u64,
    },

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl SimulationError {
    /// Whether the input broke the ordering or table-range contract
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            SimulationError::UnknownTable { .. } | SimulationError::OutOfOrder { .. }
        )
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            SimulationError::ValidationError(_) => "Validation",
            SimulationError::ConfigurationError(_) => "Configuration",
            SimulationError::ParseError(_) => "Parse",
            SimulationError::UnknownTable { .. } => "Input Contract",
            SimulationError::OutOfOrder { .. } => "Input Contract",
            SimulationError::SeatingConflict(_) => "Seating",
            SimulationError::BillingOverflow { .. } => "Billing",
            SimulationError::IoError(_) => "IO",
            SimulationError::SerializationError(_) => "Serialization",
        }
    }
}

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;
