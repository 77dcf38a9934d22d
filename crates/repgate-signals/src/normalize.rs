//! # Signal Normalizer
//!
//! Converts a [`ProviderProfile`] into the fixed [`NormalizedSignals`]
//! record. Missing or failed sources fall back to fixed defaults
//! (`Neutral` for trust dimensions, the lowest capability level for
//! skills) and reduce the signal-coverage fraction, letting the fallback
//! rules distinguish "confidently low" from "we don't know".

use repgate_core::{Capability, Tier, Timestamp};

use crate::profile::{ProviderProfile, SourceFetch};
use crate::thresholds::{
    bucket, CAPABILITY_THRESHOLDS, SOCIAL_THRESHOLDS, SPAM_RISK_THRESHOLDS, TRUST_THRESHOLDS,
};

/// Coverage weight of the trust source.
const TRUST_WEIGHT: f64 = 0.4;
/// Coverage weight of the social source.
const SOCIAL_WEIGHT: f64 = 0.3;
/// Coverage weight of the capability source.
const CAPABILITY_WEIGHT: f64 = 0.3;

/// Recency assigned when no activity is on record: maximally stale but
/// finite, so downstream arithmetic and circuit encoding stay in range.
const STALE_RECENCY_DAYS: u32 = 3650;

const SECONDS_PER_DAY: i64 = 86_400;

/// The fixed signal record consumed by the decision evaluator.
///
/// Ephemeral: constructed fresh per decision request, never persisted,
/// no identity beyond the request.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSignals {
    /// Primary trust tier.
    pub trust: Tier,
    /// Social-graph trust tier.
    pub social_trust: Tier,
    /// Builder capability level.
    pub builder: Capability,
    /// Creator capability level.
    pub creator: Capability,
    /// Spam/abuse risk tier (higher = riskier).
    pub spam_risk: Tier,
    /// Whole days since last on-record activity; 0 for today or any
    /// future-dated report.
    pub recency_days: u32,
    /// Fraction of reputation sources successfully fetched, in [0, 1].
    pub signal_coverage: f64,
}

/// Normalize a provider profile into decision-ready signals.
///
/// `now` is passed explicitly: the evaluator's determinism contract says
/// wall-clock time enters the system only through `recency_days`, and an
/// explicit instant keeps that path reproducible in tests.
pub fn normalize_signals(profile: &ProviderProfile, now: Timestamp) -> NormalizedSignals {
    let trust = match resolve("trust", &profile.trust) {
        Some(score) => bucket(TRUST_THRESHOLDS, score),
        None => Tier::Neutral,
    };

    let social_trust = match resolve("social", &profile.social) {
        Some(score) => bucket(SOCIAL_THRESHOLDS, score),
        None => Tier::Neutral,
    };

    let spam_risk = match resolve("spam", &profile.spam) {
        Some(score) => bucket(SPAM_RISK_THRESHOLDS, score),
        None => Tier::Neutral,
    };

    let (builder, creator) = if profile.capability.is_available() {
        (
            capability_level(profile.capability_scores.builder),
            capability_level(profile.capability_scores.creator),
        )
    } else {
        resolve("capability", &profile.capability);
        (Capability::None, Capability::None)
    };

    let signal_coverage = coverage(profile);
    let recency_days = recency_days(now, profile.last_activity);

    tracing::debug!(
        %trust,
        %social_trust,
        %spam_risk,
        coverage = signal_coverage,
        recency_days,
        "normalized provider profile"
    );

    NormalizedSignals {
        trust,
        social_trust,
        builder,
        creator,
        spam_risk,
        recency_days,
        signal_coverage,
    }
}

/// Resolve one source fetch to an optional raw score, logging failures.
fn resolve(source: &'static str, fetch: &SourceFetch) -> Option<f64> {
    match fetch {
        SourceFetch::Fetched { score } => Some(*score),
        SourceFetch::Missing => None,
        SourceFetch::Failed { message } => {
            tracing::warn!(source, error = %message, "reputation source failed — treating as unavailable");
            None
        }
    }
}

/// Bucket an optional capability sub-score; absent scores are the
/// lowest level.
fn capability_level(score: Option<f64>) -> Capability {
    match score {
        Some(s) => bucket(CAPABILITY_THRESHOLDS, s),
        None => Capability::None,
    }
}

/// Weighted sum of per-source availability. 1.0 when all three sources
/// answered; the spam signal rides on the trust provider and carries no
/// separate weight.
fn coverage(profile: &ProviderProfile) -> f64 {
    let mut total = 0.0;
    if profile.trust.is_available() {
        total += TRUST_WEIGHT;
    }
    if profile.social.is_available() {
        total += SOCIAL_WEIGHT;
    }
    if profile.capability.is_available() {
        total += CAPABILITY_WEIGHT;
    }
    total
}

/// Whole days since `last_activity`, floored, never negative.
///
/// A future-dated report (provider clock skew) yields 0. No activity on
/// record yields the fixed stale sentinel.
fn recency_days(now: Timestamp, last_activity: Option<Timestamp>) -> u32 {
    match last_activity {
        None => STALE_RECENCY_DAYS,
        Some(last) => {
            let delta = now.epoch_secs() - last.epoch_secs();
            if delta <= 0 {
                0
            } else {
                (delta / SECONDS_PER_DAY) as u32
            }
        }
    }
}
