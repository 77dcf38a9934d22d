//! # Decision Context — The Fixed Action Taxonomy
//!
//! Defines the `Context` enum: the five actions the engine can gate.
//! This is the ONE definition used across the workspace — the rule
//! registry, the progression layer, and the circuit codec all match on
//! it exhaustively, so adding a context forces every consumer to handle
//! it at compile time.
//!
//! Each context carries a stable string id (used in requests, rules, and
//! audit logs) and a fixed circuit index (used as a public input to the
//! proof system). Both assignments are append-only.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::RepgateError;

/// An action being gated by the decision engine.
///
/// The string ids and circuit indices below are a fixed assignment table;
/// they appear in audit logs and as proof public inputs and must never be
/// renumbered.
///
/// | index | id                  |
/// |-------|---------------------|
/// | 0     | allowlist.general   |
/// | 1     | community.comment   |
/// | 2     | content.publish     |
/// | 3     | contributor.apply   |
/// | 4     | governance.vote     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Context {
    /// Join the general allowlist.
    #[serde(rename = "allowlist.general")]
    AllowlistGeneral,
    /// Post a comment in community spaces.
    #[serde(rename = "community.comment")]
    CommunityComment,
    /// Publish long-form content.
    #[serde(rename = "content.publish")]
    ContentPublish,
    /// Apply for a contributor role.
    #[serde(rename = "contributor.apply")]
    ContributorApply,
    /// Cast a governance vote.
    #[serde(rename = "governance.vote")]
    GovernanceVote,
}

/// Total number of decision contexts.
pub const CONTEXT_COUNT: usize = 5;

impl Context {
    /// Returns all five contexts in circuit-index order.
    pub fn all() -> &'static [Context] {
        &[
            Self::AllowlistGeneral,
            Self::CommunityComment,
            Self::ContentPublish,
            Self::ContributorApply,
            Self::GovernanceVote,
        ]
    }

    /// Returns the stable string id for this context.
    ///
    /// Must match the serde representation and the ids used in rule
    /// definitions and audit logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllowlistGeneral => "allowlist.general",
            Self::CommunityComment => "community.comment",
            Self::ContentPublish => "content.publish",
            Self::ContributorApply => "contributor.apply",
            Self::GovernanceVote => "governance.vote",
        }
    }
}

impl std::fmt::Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Context {
    type Err = RepgateError;

    /// Parse a context from its stable string id.
    ///
    /// Unknown ids are a validation error — never a default context.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "allowlist.general" => Ok(Self::AllowlistGeneral),
            "community.comment" => Ok(Self::CommunityComment),
            "content.publish" => Ok(Self::ContentPublish),
            "contributor.apply" => Ok(Self::ContributorApply),
            "governance.vote" => Ok(Self::GovernanceVote),
            other => Err(RepgateError::Validation(format!(
                "unknown decision context: {other:?}"
            ))),
        }
    }
}
