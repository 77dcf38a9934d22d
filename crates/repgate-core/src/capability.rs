//! # Capability Level — Ordered Skill Evidence
//!
//! Defines the `Capability` enum: four ordered levels of demonstrated
//! skill in a domain (building, content creation). Like [`crate::Tier`],
//! the ordering is defined once via [`Capability::rank()`] and never
//! inferred from string sort order.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::RepgateError;

/// A coarse capability level derived from third-party skill signals.
///
/// Levels are totally ordered from `None` (0) to `Expert` (3). The wire
/// representation is SCREAMING_SNAKE_CASE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Capability {
    /// No demonstrated skill; the default for missing sources.
    None,
    /// Entry-level evidence.
    Basic,
    /// Sustained, verified work in the domain.
    Skilled,
    /// Top-of-domain evidence.
    Expert,
}

/// Total number of capability levels.
pub const CAPABILITY_COUNT: usize = 4;

impl Capability {
    /// Returns all four levels in ascending rank order.
    pub fn all() -> &'static [Capability] {
        &[Self::None, Self::Basic, Self::Skilled, Self::Expert]
    }

    /// The ordering rank, 0 (`None`) through 3 (`Expert`).
    pub fn rank(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Basic => 1,
            Self::Skilled => 2,
            Self::Expert => 3,
        }
    }

    /// Returns true if `self` is at least `other` in skill order.
    pub fn gte(self, other: Capability) -> bool {
        self.rank() >= other.rank()
    }

    /// Returns the SCREAMING_SNAKE_CASE identifier for this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Basic => "BASIC",
            Self::Skilled => "SKILLED",
            Self::Expert => "EXPERT",
        }
    }
}

impl PartialOrd for Capability {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Capability {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = RepgateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NONE" => Ok(Self::None),
            "BASIC" => Ok(Self::Basic),
            "SKILLED" => Ok(Self::Skilled),
            "EXPERT" => Ok(Self::Expert),
            other => Err(RepgateError::Validation(format!(
                "unknown capability level: {other:?}"
            ))),
        }
    }
}
