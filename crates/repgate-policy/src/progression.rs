//! # Progression & Explainability Layer
//!
//! A purely derivative view over a decision: a coarse access status and
//! the human-facing "blocking factors" for a context. It never feeds
//! back into the evaluator, and it intentionally never exposes raw
//! scores or the authoritative rule cutoffs — the readiness thresholds
//! here are coarser and looser than the rule thresholds.

use serde::{Deserialize, Serialize};

use repgate_core::{Capability, Context, Decision, Tier};
use repgate_signals::NormalizedSignals;

/// Coarse, non-authoritative access status derived from a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessStatus {
    /// Full access granted.
    Eligible,
    /// Access granted under constraints.
    Limited,
    /// Denied by a hard-deny rule; progression alone will not lift it.
    Blocked,
    /// Denied, but not by a hard-deny rule — more signal may change it.
    NotReady,
}

impl AccessStatus {
    /// Derive the status from a decision and the externally-supplied
    /// "was the matched rule a hard deny" flag.
    pub fn derive(decision: Decision, matched_hard_deny: bool) -> Self {
        match decision {
            Decision::Allow => Self::Eligible,
            Decision::AllowWithLimits => Self::Limited,
            Decision::Deny if matched_hard_deny => Self::Blocked,
            Decision::Deny => Self::NotReady,
        }
    }

    /// Returns the snake_case identifier for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eligible => "eligible",
            Self::Limited => "limited",
            Self::Blocked => "blocked",
            Self::NotReady => "not_ready",
        }
    }
}

impl std::fmt::Display for AccessStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signal dimensions surfaced to end users.
///
/// Declaration order is the stable output order of
/// [`derive_blocking_factors()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalDimension {
    /// Primary trust tier.
    Trust,
    /// Social-graph trust tier.
    SocialTrust,
    /// Builder capability.
    Builder,
    /// Creator capability.
    Creator,
    /// Spam/abuse risk.
    SpamRisk,
    /// Activity recency.
    Recency,
}

impl SignalDimension {
    /// All dimensions in stable output order.
    pub fn all() -> &'static [SignalDimension] {
        &[
            Self::Trust,
            Self::SocialTrust,
            Self::Builder,
            Self::Creator,
            Self::SpamRisk,
            Self::Recency,
        ]
    }

    /// Returns the snake_case identifier for this dimension.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trust => "trust",
            Self::SocialTrust => "social_trust",
            Self::Builder => "builder",
            Self::Creator => "creator",
            Self::SpamRisk => "spam_risk",
            Self::Recency => "recency",
        }
    }
}

impl std::fmt::Display for SignalDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Activity within this many days counts as "recent" for readiness.
/// Coarser than any rule cutoff.
const READY_RECENCY_MAX_DAYS: u32 = 180;

/// A boolean readiness snapshot per dimension.
///
/// Thresholds here are deliberately looser than the authoritative rule
/// thresholds: a "ready" dimension does not imply the corresponding
/// rule predicate passes, only that the dimension is not what blocks
/// the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessSnapshot {
    /// Trust at or above neutral.
    pub trust: bool,
    /// Social trust at or above neutral.
    pub social_trust: bool,
    /// Any demonstrated builder capability.
    pub builder: bool,
    /// Any demonstrated creator capability.
    pub creator: bool,
    /// Spam risk at or below neutral.
    pub spam_risk: bool,
    /// Recent enough activity.
    pub recency: bool,
}

impl ReadinessSnapshot {
    /// Compute the snapshot from normalized signals.
    pub fn from_signals(signals: &NormalizedSignals) -> Self {
        Self {
            trust: signals.trust.gte(Tier::Neutral),
            social_trust: signals.social_trust.gte(Tier::Neutral),
            builder: signals.builder.gte(Capability::Basic),
            creator: signals.creator.gte(Capability::Basic),
            spam_risk: !signals.spam_risk.gte(Tier::High),
            recency: signals.recency_days <= READY_RECENCY_MAX_DAYS,
        }
    }

    /// Readiness of a single dimension.
    pub fn is_ready(&self, dimension: SignalDimension) -> bool {
        match dimension {
            SignalDimension::Trust => self.trust,
            SignalDimension::SocialTrust => self.social_trust,
            SignalDimension::Builder => self.builder,
            SignalDimension::Creator => self.creator,
            SignalDimension::SpamRisk => self.spam_risk,
            SignalDimension::Recency => self.recency,
        }
    }
}

/// The dimensions a context requires for progression purposes.
///
/// Maintained by hand next to the rule registry; the registry
/// consistency test below keeps the two from drifting apart.
pub fn required_dimensions(context: Context) -> &'static [SignalDimension] {
    match context {
        Context::AllowlistGeneral => &[SignalDimension::Trust, SignalDimension::SpamRisk],
        Context::CommunityComment => &[
            SignalDimension::Trust,
            SignalDimension::SocialTrust,
            SignalDimension::SpamRisk,
        ],
        Context::ContentPublish => &[SignalDimension::Trust, SignalDimension::Creator],
        Context::ContributorApply => &[SignalDimension::Trust, SignalDimension::Builder],
        Context::GovernanceVote => &[
            SignalDimension::Trust,
            SignalDimension::SocialTrust,
            SignalDimension::Recency,
        ],
    }
}

/// The required dimensions of `context` that are currently not ready,
/// in stable declaration order.
pub fn derive_blocking_factors(
    context: Context,
    snapshot: &ReadinessSnapshot,
) -> Vec<SignalDimension> {
    required_dimensions(context)
        .iter()
        .copied()
        .filter(|&dim| !snapshot.is_ready(dim))
        .collect()
}
