//! Emergency classification enums shared by the graph, scheduler, and
//! dispatch crates.
//!
//! All three enums are closed tables parsed from text with [`FromStr`].
//! Unrecognized input is rejected with a [`CoreError`]; nothing falls back to
//! a default variant.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

// ── EmergencyType ─────────────────────────────────────────────────────────────

/// The kind of emergency service an incident needs and a facility provides.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[non_exhaustive]
pub enum EmergencyType {
    /// Ambulance / hospital response.
    Medical,
    /// Fire brigade response.
    Fire,
}

impl EmergencyType {
    /// Every registered emergency type, in declaration order.
    pub const ALL: [EmergencyType; 2] = [EmergencyType::Medical, EmergencyType::Fire];

    /// Lower-case label, used for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            EmergencyType::Medical => "medical",
            EmergencyType::Fire    => "fire",
        }
    }
}

impl fmt::Display for EmergencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmergencyType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "medical" => Ok(EmergencyType::Medical),
            "fire"    => Ok(EmergencyType::Fire),
            _ => Err(CoreError::InvalidEmergencyType(s.to_owned())),
        }
    }
}

// ── Severity ──────────────────────────────────────────────────────────────────

/// Incident urgency.  Derived `Ord` follows [`rank`](Self::rank), so
/// `High < Medium < Low` and sorting ascending puts the most urgent first.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// Numeric urgency rank: High = 1, Medium = 2, Low = 3.
    #[inline]
    pub fn rank(self) -> u8 {
        match self {
            Severity::High   => 1,
            Severity::Medium => 2,
            Severity::Low    => 3,
        }
    }

    /// Inverse of [`rank`](Self::rank).
    pub fn from_rank(rank: u8) -> Option<Severity> {
        match rank {
            1 => Some(Severity::High),
            2 => Some(Severity::Medium),
            3 => Some(Severity::Low),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::High   => "high",
            Severity::Medium => "medium",
            Severity::Low    => "low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = CoreError;

    /// Accepts the label (`"high"`, case-insensitive) or the rank (`"1"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().to_ascii_lowercase();
        match t.as_str() {
            "high"   => Ok(Severity::High),
            "medium" => Ok(Severity::Medium),
            "low"    => Ok(Severity::Low),
            n => n
                .parse::<u8>()
                .ok()
                .and_then(Severity::from_rank)
                .ok_or_else(|| CoreError::InvalidSeverity(s.to_owned())),
        }
    }
}

// ── Capacity ──────────────────────────────────────────────────────────────────

/// Facility capacity level.  Informational; facility selection ignores it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Capacity {
    High,
    Medium,
    Low,
}

impl Capacity {
    pub fn as_str(self) -> &'static str {
        match self {
            Capacity::High   => "high",
            Capacity::Medium => "medium",
            Capacity::Low    => "low",
        }
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capacity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high"   => Ok(Capacity::High),
            "medium" => Ok(Capacity::Medium),
            "low"    => Ok(Capacity::Low),
            _ => Err(CoreError::InvalidCapacity(s.to_owned())),
        }
    }
}
