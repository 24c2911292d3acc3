//! Enumeration types for the computer club simulator
//!
//! This module contains the admission-policy rejection reasons and the report
//! output formats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Why the club refused a client action
///
/// The serialized and displayed forms are the fixed reason strings of the club
/// log format, including their original spelling and punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RejectionReason {
    /// Action happened before the club opened
    #[serde(rename = "NotOpenYet")]
    NotOpenYet,
    /// Client arrived while already inside
    #[serde(rename = "YouShallNotPass")]
    YouShallNotPass,
    /// Client is not inside the club
    #[serde(rename = "ClientUnknown")]
    ClientUnknown,
    /// Client tried to queue while a table was free
    #[serde(rename = "ICanWaitNoLonger!")]
    ICanWaitNoLonger,
    /// Requested table is taken, or the waiting queue is over capacity
    #[serde(rename = "PleaseIsBusy")]
    PleaseIsBusy,
}

impl RejectionReason {
    /// Every reason, in declaration order
    pub const ALL: [RejectionReason; 5] = [
        RejectionReason::NotOpenYet,
        RejectionReason::YouShallNotPass,
        RejectionReason::ClientUnknown,
        RejectionReason::ICanWaitNoLonger,
        RejectionReason::PleaseIsBusy,
    ];

    /// Log-format string for this reason
    pub fn as_str(self) -> &'static str {
        match self {
            RejectionReason::NotOpenYet => "NotOpenYet",
            RejectionReason::YouShallNotPass => "YouShallNotPass",
            RejectionReason::ClientUnknown => "ClientUnknown",
            RejectionReason::ICanWaitNoLonger => "ICanWaitNoLonger!",
            RejectionReason::PleaseIsBusy => "PleaseIsBusy",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RejectionReason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RejectionReason::ALL
            .iter()
            .copied()
            .find(|reason| reason.as_str() == s)
            .ok_or_else(|| format!("Unknown rejection reason: {}", s))
    }
}

/// Output formats supported by the reporter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Plain text, one record per line
    Text,
    /// Pretty-printed JSON document
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
