//! # Integer Codecs — Loss-Free Domain Projection
//!
//! Round-trip codecs between the semantic enums and the small integers
//! used as circuit witness values. The integer assignments are fixed
//! contracts shared with the circuit definition and must never be
//! renumbered.
//!
//! Decode functions reject unknown integers as [`CodecError`] — a
//! clamped decode would silently attest to signals the subject never
//! had.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use repgate_core::{Capability, Context, Decision, Tier};
use repgate_signals::NormalizedSignals;

/// Maximum basis points — a coverage fraction of exactly 1.0.
pub const MAX_BASIS_POINTS: u16 = 10_000;

/// Error for values outside a codec's domain.
#[derive(Error, Debug, PartialEq)]
pub enum CodecError {
    /// Integer is not a valid tier code (domain 0..=4).
    #[error("invalid tier code: {0} (expected 0..=4)")]
    UnknownTier(u8),

    /// Integer is not a valid capability code (domain 0..=3).
    #[error("invalid capability code: {0} (expected 0..=3)")]
    UnknownCapability(u8),

    /// Integer is not a valid decision code (domain 0..=2).
    #[error("invalid decision code: {0} (expected 0..=2)")]
    UnknownDecision(u8),

    /// Integer is not a valid context code (domain 0..=4).
    #[error("invalid context code: {0} (expected 0..=4)")]
    UnknownContext(u8),

    /// Coverage fraction outside [0, 1].
    #[error("coverage fraction out of range: {0} (expected [0, 1])")]
    CoverageOutOfRange(f64),

    /// Basis points outside [0, 10000].
    #[error("basis points out of range: {0} (expected 0..=10000)")]
    BasisPointsOutOfRange(u16),

    /// A proof payload violated the prover's fixed shape.
    #[error("malformed proof payload: {0}")]
    MalformedProof(String),
}

// ─── tier ───────────────────────────────────────────────────────────

/// Tier → 0..=4. The code IS the ordering rank.
pub fn encode_tier(tier: Tier) -> u8 {
    tier.rank()
}

/// 0..=4 → Tier. Unknown codes are an error.
pub fn decode_tier(code: u8) -> Result<Tier, CodecError> {
    match code {
        0 => Ok(Tier::VeryLow),
        1 => Ok(Tier::Low),
        2 => Ok(Tier::Neutral),
        3 => Ok(Tier::High),
        4 => Ok(Tier::VeryHigh),
        other => Err(CodecError::UnknownTier(other)),
    }
}

// ─── capability ─────────────────────────────────────────────────────

/// Capability → 0..=3. The code IS the ordering rank.
pub fn encode_capability(level: Capability) -> u8 {
    level.rank()
}

/// 0..=3 → Capability. Unknown codes are an error.
pub fn decode_capability(code: u8) -> Result<Capability, CodecError> {
    match code {
        0 => Ok(Capability::None),
        1 => Ok(Capability::Basic),
        2 => Ok(Capability::Skilled),
        3 => Ok(Capability::Expert),
        other => Err(CodecError::UnknownCapability(other)),
    }
}

// ─── decision ───────────────────────────────────────────────────────

/// Decision → {DENY: 0, ALLOW_WITH_LIMITS: 1, ALLOW: 2}.
pub fn encode_decision(decision: Decision) -> u8 {
    match decision {
        Decision::Deny => 0,
        Decision::AllowWithLimits => 1,
        Decision::Allow => 2,
    }
}

/// {0, 1, 2} → Decision. Unknown codes are an error.
pub fn decode_decision(code: u8) -> Result<Decision, CodecError> {
    match code {
        0 => Ok(Decision::Deny),
        1 => Ok(Decision::AllowWithLimits),
        2 => Ok(Decision::Allow),
        other => Err(CodecError::UnknownDecision(other)),
    }
}

// ─── context ────────────────────────────────────────────────────────

/// Context → 0..=4, the fixed assignment table in [`Context`]'s docs.
pub fn encode_context(context: Context) -> u8 {
    match context {
        Context::AllowlistGeneral => 0,
        Context::CommunityComment => 1,
        Context::ContentPublish => 2,
        Context::ContributorApply => 3,
        Context::GovernanceVote => 4,
    }
}

/// 0..=4 → Context. Unknown codes are an error.
pub fn decode_context(code: u8) -> Result<Context, CodecError> {
    match code {
        0 => Ok(Context::AllowlistGeneral),
        1 => Ok(Context::CommunityComment),
        2 => Ok(Context::ContentPublish),
        3 => Ok(Context::ContributorApply),
        4 => Ok(Context::GovernanceVote),
        other => Err(CodecError::UnknownContext(other)),
    }
}

// ─── coverage ↔ basis points ────────────────────────────────────────

/// Coverage fraction [0, 1] → basis points 0..=10000, rounded.
///
/// NaN and out-of-range input are rejected, never clamped.
pub fn coverage_to_basis_points(fraction: f64) -> Result<u16, CodecError> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(CodecError::CoverageOutOfRange(fraction));
    }
    Ok((fraction * f64::from(MAX_BASIS_POINTS)).round() as u16)
}

/// Basis points 0..=10000 → coverage fraction.
pub fn basis_points_to_coverage(bps: u16) -> Result<f64, CodecError> {
    if bps > MAX_BASIS_POINTS {
        return Err(CodecError::BasisPointsOutOfRange(bps));
    }
    Ok(f64::from(bps) / f64::from(MAX_BASIS_POINTS))
}

// ─── signals ────────────────────────────────────────────────────────

/// The integer-only projection of [`NormalizedSignals`], used as the
/// private witness input to the external proof system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitSignals {
    /// Trust tier code, 0..=4.
    pub trust: u8,
    /// Social trust tier code, 0..=4.
    pub social_trust: u8,
    /// Builder capability code, 0..=3.
    pub builder: u8,
    /// Creator capability code, 0..=3.
    pub creator: u8,
    /// Spam risk tier code, 0..=4.
    pub spam_risk: u8,
    /// Whole days since last activity.
    pub recency_days: u32,
    /// Signal coverage in basis points, 0..=10000.
    pub coverage_bps: u16,
}

/// Project normalized signals onto their circuit representation.
///
/// Fails only if the coverage fraction is outside [0, 1] — which the
/// normalizer cannot produce, but attested inputs from elsewhere might.
pub fn encode_signals(signals: &NormalizedSignals) -> Result<CircuitSignals, CodecError> {
    Ok(CircuitSignals {
        trust: encode_tier(signals.trust),
        social_trust: encode_tier(signals.social_trust),
        builder: encode_capability(signals.builder),
        creator: encode_capability(signals.creator),
        spam_risk: encode_tier(signals.spam_risk),
        recency_days: signals.recency_days,
        coverage_bps: coverage_to_basis_points(signals.signal_coverage)?,
    })
}

/// Reconstruct normalized signals from their circuit representation.
///
/// Every integer is validated against its codec domain; a single
/// out-of-range value fails the whole decode.
pub fn decode_signals(circuit: &CircuitSignals) -> Result<NormalizedSignals, CodecError> {
    Ok(NormalizedSignals {
        trust: decode_tier(circuit.trust)?,
        social_trust: decode_tier(circuit.social_trust)?,
        builder: decode_capability(circuit.builder)?,
        creator: decode_capability(circuit.creator)?,
        spam_risk: decode_tier(circuit.spam_risk)?,
        recency_days: circuit.recency_days,
        signal_coverage: basis_points_to_coverage(circuit.coverage_bps)?,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Basis-point round-trips are exact over the whole domain.
        #[test]
        fn bps_roundtrip_exact(bps in 0u16..=10_000) {
            let f = basis_points_to_coverage(bps).unwrap();
            prop_assert_eq!(coverage_to_basis_points(f).unwrap(), bps);
        }

        /// Everything above the domain is rejected.
        #[test]
        fn bps_above_domain_rejected(bps in 10_001u16..) {
            prop_assert!(basis_points_to_coverage(bps).is_err());
        }

        /// Tier decode accepts exactly the domain 0..=4.
        #[test]
        fn tier_decode_domain(code in any::<u8>()) {
            let result = decode_tier(code);
            if code <= 4 {
                prop_assert!(result.is_ok());
                prop_assert_eq!(encode_tier(result.unwrap()), code);
            } else {
                prop_assert!(result.is_err());
            }
        }
    }
}
