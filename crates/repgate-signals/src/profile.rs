//! # Provider Profile — Raw Reputation Payload
//!
//! The input to normalization: per-source fetch results from the
//! third-party reputation providers. Each source is independently
//! optional, and a provider error is distinct from an absent profile —
//! both reduce signal coverage, but errors are logged for operators.

use serde::{Deserialize, Serialize};

use repgate_core::Timestamp;

/// The outcome of fetching one reputation source.
///
/// `Missing` means the provider answered and the subject has no profile
/// there; `Failed` means the provider itself errored. Both count as
/// unavailable for coverage purposes, but only `Failed` is an
/// operational signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SourceFetch {
    /// The source returned a raw numeric score.
    Fetched {
        /// Raw provider score, on the provider's own scale.
        score: f64,
    },
    /// The provider answered; the subject has no profile at this source.
    Missing,
    /// The provider call failed.
    Failed {
        /// Provider-reported error message, for operator logs only.
        message: String,
    },
}

impl SourceFetch {
    /// Returns the raw score if the source was fetched.
    pub fn score(&self) -> Option<f64> {
        match self {
            Self::Fetched { score } => Some(*score),
            Self::Missing | Self::Failed { .. } => None,
        }
    }

    /// Returns true if this source contributes to signal coverage.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Fetched { .. })
    }
}

/// Capability sub-scores from the capability source.
///
/// The capability provider reports per-domain scores; either may be
/// absent even when the source as a whole answered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CapabilityScores {
    /// Raw builder-domain score.
    pub builder: Option<f64>,
    /// Raw creator-domain score.
    pub creator: Option<f64>,
}

/// A raw reputation profile assembled by the profile fetcher collaborator.
///
/// Never persisted; consumed once by [`crate::normalize_signals()`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderProfile {
    /// Primary trust source (e.g. a passport-style aggregate score).
    pub trust: SourceFetch,
    /// Social-graph trust source.
    pub social: SourceFetch,
    /// Spam/abuse risk source. Higher raw score = higher risk.
    pub spam: SourceFetch,
    /// Capability source availability; scores ride alongside.
    pub capability: SourceFetch,
    /// Per-domain capability scores, meaningful only when `capability`
    /// is `Fetched` (the fetched score is the provider's own aggregate
    /// and is not used directly).
    #[serde(default)]
    pub capability_scores: CapabilityScores,
    /// Most recent on-record activity, if the providers report one.
    pub last_activity: Option<Timestamp>,
}
