//! # Decision & Confidence — Evaluation Outcomes
//!
//! Defines the `Decision` enum (the three possible grants) and
//! `ConfidenceTier`, the categorical confidence attached to every
//! decision output.
//!
//! A failure to evaluate is NOT a decision: errors are reported through
//! the structured error types, never downgraded to a default `Deny`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::RepgateError;

/// The outcome of a policy decision.
///
/// The circuit codec assigns `Deny` = 0, `AllowWithLimits` = 1,
/// `Allow` = 2 — ascending by how much access is granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    /// Access denied.
    Deny,
    /// Access granted under constraints (probationary).
    AllowWithLimits,
    /// Full access granted.
    Allow,
}

impl Decision {
    /// Returns all three decisions in ascending grant order.
    pub fn all() -> &'static [Decision] {
        &[Self::Deny, Self::AllowWithLimits, Self::Allow]
    }

    /// Returns the SCREAMING_SNAKE_CASE identifier for this decision.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deny => "DENY",
            Self::AllowWithLimits => "ALLOW_WITH_LIMITS",
            Self::Allow => "ALLOW",
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Decision {
    type Err = RepgateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DENY" => Ok(Self::Deny),
            "ALLOW_WITH_LIMITS" => Ok(Self::AllowWithLimits),
            "ALLOW" => Ok(Self::Allow),
            other => Err(RepgateError::Validation(format!(
                "unknown decision: {other:?}"
            ))),
        }
    }
}

/// Categorical confidence in a decision.
///
/// Derived from a numeric confidence score (base 50 plus the matched
/// rule's delta) via fixed cutoffs. The numeric score never leaves the
/// evaluator; only the tier is exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfidenceTier {
    /// Score below 40.
    Low,
    /// Score in [40, 60).
    Medium,
    /// Score in [60, 80).
    High,
    /// Score 80 or above.
    VeryHigh,
}

impl ConfidenceTier {
    /// Map a numeric confidence score to its categorical tier.
    ///
    /// Cutoffs are fixed: ≥80 VeryHigh, ≥60 High, ≥40 Medium, else Low.
    /// The input is clamped to [0, 100] by the evaluator before this is
    /// called; out-of-range values still map deterministically.
    pub fn from_score(score: i32) -> Self {
        if score >= 80 {
            Self::VeryHigh
        } else if score >= 60 {
            Self::High
        } else if score >= 40 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Returns the SCREAMING_SNAKE_CASE identifier for this tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::VeryHigh => "VERY_HIGH",
        }
    }
}

impl std::fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
