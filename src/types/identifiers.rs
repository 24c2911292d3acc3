//! Identifier types for the computer club simulator
//!
//! This module contains the validated client name and table number types used
//! throughout the simulation system.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Errors produced when building an identifier from raw input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    /// Client name is empty or contains characters outside `[a-z0-9_-]`
    #[error("invalid client name '{0}' (allowed: a-z, 0-9, '_' and '-')")]
    InvalidClientName(String),

    /// Table number is zero
    #[error("table numbers start at 1, got {0}")]
    ZeroTableNumber(u32),
}

/// Name of a club client, restricted to `^[a-z0-9_-]+$`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ClientName(String);

impl ClientName {
    /// Create a client name, validating its alphabet
    pub fn new(name: impl Into<String>) -> Result<Self, IdentifierError> {
        let name = name.into();
        if Self::is_valid(&name) {
            Ok(Self(name))
        } else {
            Err(IdentifierError::InvalidClientName(name))
        }
    }

    /// Check whether a string is an acceptable client name
    pub fn is_valid(name: &str) -> bool {
        !name.is_empty()
            && name
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-')
    }

    /// Borrow the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ClientName {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ClientName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ClientName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ClientName::new(s).map_err(serde::de::Error::custom)
    }
}

/// One-based number of a table in the club
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TableNumber(u32);

impl TableNumber {
    /// Create a table number; zero is rejected
    pub fn new(number: u32) -> Result<Self, IdentifierError> {
        if number == 0 {
            Err(IdentifierError::ZeroTableNumber(number))
        } else {
            Ok(Self(number))
        }
    }

    /// Table number for a zero-based slot index
    pub fn from_index(index: usize) -> Self {
        Self(index as u32 + 1)
    }

    /// Raw one-based table number
    pub fn get(self) -> u32 {
        self.0
    }

    /// Zero-based slot index
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl fmt::Display for TableNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for TableNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let n = u32::deserialize(deserializer)?;
        TableNumber::new(n).map_err(serde::de::Error::custom)
    }
}
