//! Strongly-typed vehicle registration number.
//!
//! The relation builder only creates a vehicle when its number cell is
//! present, so a `VehicleNumber` is never empty.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A non-empty vehicle number, kept exactly as it appeared in the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct VehicleNumber(String);

impl<'de> Deserialize<'de> for VehicleNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        VehicleNumber::try_new(s)
            .ok_or_else(|| serde::de::Error::custom("VehicleNumber must not be empty"))
    }
}

impl VehicleNumber {
    /// Create a new instance, panicking if the number is empty.
    ///
    /// Prefer [`try_new`](Self::try_new) when handling sheet input.
    pub fn new(number: impl Into<String>) -> Self {
        let s = number.into();
        assert!(!s.is_empty(), "VehicleNumber must not be empty");
        Self(s)
    }

    /// Try to create a new instance, returning `None` if the number is empty.
    pub fn try_new(number: impl Into<String>) -> Option<Self> {
        let s = number.into();
        if s.is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    /// Return the number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive equality against an already lowercased query.
    pub(crate) fn matches_exact(&self, folded_query: &str) -> bool {
        self.0.to_lowercase() == folded_query
    }

    /// Case-insensitive suffix test against an already lowercased query.
    pub(crate) fn ends_with_folded(&self, folded_suffix: &str) -> bool {
        self.0.to_lowercase().ends_with(folded_suffix)
    }
}

impl fmt::Display for VehicleNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for VehicleNumber {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
