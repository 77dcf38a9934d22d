//! # Decision Evaluator — Deterministic First-Match Walk
//!
//! Walks the rule table in its fixed global order and applies the first
//! rule that is in scope and whose predicate holds. **First match wins
//! globally**, not per phase: a fallback rule that matches preempts an
//! allow rule that would also have matched.
//!
//! The evaluator itself never fails: for any well-formed signals and
//! valid context it returns a `DecisionOutput` — worst case the default
//! deny with the fixed [`NO_RULE_MATCHED`] message and an empty rule-id
//! list.

use serde::{Deserialize, Serialize};

use repgate_core::{ConfidenceTier, Context, Decision};
use repgate_signals::NormalizedSignals;

use crate::registry::rules;
use crate::rule::Rule;

/// Engine version string stamped into every output and audit record.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The confidence score every evaluation starts from.
pub const BASE_CONFIDENCE: i32 = 50;

/// The fixed explanation for the default-deny branch.
pub const NO_RULE_MATCHED: &str = "no rule satisfied the requested context";

/// Generic constraint tag applied if an allow-with-limits rule carries
/// no tags of its own. The registry tests make this unreachable; keeping
/// it means a registry regression degrades gracefully instead of
/// granting unconstrained access.
const DEFAULT_CONSTRAINT: &str = "restricted";

/// The complete outcome of one evaluation.
///
/// Produced fresh per call, immutable once returned. All fields are
/// plain structured data suitable for any wire serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionOutput {
    /// The decision.
    pub decision: Decision,
    /// Categorical confidence in the decision.
    pub confidence: ConfidenceTier,
    /// Constraint tags; non-empty only for allow-with-limits outcomes.
    pub constraints: Vec<String>,
    /// Optional retry hint in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after_secs: Option<u32>,
    /// Ids of matched rules — zero (default deny) or one element.
    pub rule_ids: Vec<String>,
    /// Engine version that produced this output.
    pub version: String,
    /// Human-readable reasons.
    pub explain: Vec<String>,
}

/// Evaluate the rule table for `(signals, context)`.
///
/// Deterministic: identical inputs produce bit-identical output on
/// every call — no randomness, no wall-clock reads (recency is already
/// baked into `signals`). Safe to call concurrently from any number of
/// callers; there is no shared mutable state.
pub fn decide(signals: &NormalizedSignals, context: Context) -> DecisionOutput {
    for rule in rules() {
        if rule.matches(signals, context) {
            tracing::debug!(rule = rule.id, %context, decision = %rule.decision, "rule matched");
            return output_for(rule);
        }
    }

    tracing::debug!(%context, "no rule matched — default deny");
    DecisionOutput {
        decision: Decision::Deny,
        confidence: ConfidenceTier::from_score(BASE_CONFIDENCE),
        constraints: Vec::new(),
        retry_after_secs: None,
        rule_ids: Vec::new(),
        version: ENGINE_VERSION.to_string(),
        explain: vec![NO_RULE_MATCHED.to_string()],
    }
}

/// Build the output for a matched rule.
fn output_for(rule: &Rule) -> DecisionOutput {
    let score = (BASE_CONFIDENCE + rule.confidence_delta).clamp(0, 100);

    let constraints = if rule.decision == Decision::AllowWithLimits {
        if rule.constraints.is_empty() {
            vec![DEFAULT_CONSTRAINT.to_string()]
        } else {
            rule.constraints.iter().map(|s| s.to_string()).collect()
        }
    } else {
        Vec::new()
    };

    DecisionOutput {
        decision: rule.decision,
        confidence: ConfidenceTier::from_score(score),
        constraints,
        retry_after_secs: rule.retry_after_secs,
        rule_ids: vec![rule.id.to_string()],
        version: ENGINE_VERSION.to_string(),
        explain: vec![rule.reason.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use repgate_core::{Capability, Tier};

    /// A fully-covered, unremarkable signal set: neutral everywhere,
    /// no capabilities, active today.
    fn baseline() -> NormalizedSignals {
        NormalizedSignals {
            trust: Tier::Neutral,
            social_trust: Tier::Neutral,
            builder: Capability::None,
            creator: Capability::None,
            spam_risk: Tier::Neutral,
            recency_days: 0,
            signal_coverage: 1.0,
        }
    }

    #[test]
    fn determinism_bit_identical_outputs() {
        let signals = baseline();
        for &ctx in Context::all() {
            assert_eq!(decide(&signals, ctx), decide(&signals, ctx));
        }
    }

    // ── canonical scenarios ─────────────────────────────────────────

    /// Bottom-tier trust is denied even with favorable social trust.
    #[test]
    fn critical_trust_denies_despite_high_social() {
        let signals = NormalizedSignals {
            trust: Tier::VeryLow,
            social_trust: Tier::High,
            builder: Capability::None,
            creator: Capability::None,
            spam_risk: Tier::Neutral,
            recency_days: 0,
            signal_coverage: 1.0,
        };
        let out = decide(&signals, Context::AllowlistGeneral);
        assert_eq!(out.decision, Decision::Deny);
        assert_eq!(out.rule_ids, vec!["deny.trust-floor".to_string()]);
    }

    /// Zero coverage denies on every context, at low confidence.
    #[test]
    fn zero_coverage_denies_everywhere() {
        let mut signals = baseline();
        signals.signal_coverage = 0.0;
        for &ctx in Context::all() {
            let out = decide(&signals, ctx);
            assert_eq!(out.decision, Decision::Deny, "context {ctx}");
            assert_eq!(out.rule_ids, vec!["fallback.no-signals".to_string()]);
            assert_eq!(out.confidence, ConfidenceTier::Low);
            assert_eq!(out.retry_after_secs, Some(86_400));
        }
    }

    /// Partial coverage fires the probationary fallback even for
    /// otherwise excellent signals.
    #[test]
    fn partial_coverage_limits_even_excellent_signals() {
        let signals = NormalizedSignals {
            trust: Tier::VeryHigh,
            social_trust: Tier::VeryHigh,
            builder: Capability::Expert,
            creator: Capability::Expert,
            spam_risk: Tier::VeryLow,
            recency_days: 0,
            signal_coverage: 0.3,
        };
        let out = decide(&signals, Context::ContentPublish);
        assert_eq!(out.decision, Decision::AllowWithLimits);
        assert_eq!(out.rule_ids, vec!["fallback.partial-signals".to_string()]);
        assert_eq!(
            out.constraints,
            vec!["probation".to_string(), "rate-limit".to_string()]
        );
    }

    /// No allow or limited predicate holds and no wildcard fires:
    /// default deny, empty rule ids, fixed message.
    #[test]
    fn default_deny_when_nothing_matches() {
        // Neutral trust, no creator capability: content.publish has no
        // matching grant rule, and no fallback/hard-deny applies.
        let out = decide(&baseline(), Context::ContentPublish);
        assert_eq!(out.decision, Decision::Deny);
        assert!(out.rule_ids.is_empty());
        assert_eq!(out.explain, vec![NO_RULE_MATCHED.to_string()]);
        assert!(out.constraints.is_empty());
        assert_eq!(out.retry_after_secs, None);
    }

    // ── first-match-wins across phases ──────────────────────────────

    /// Zero coverage matches BOTH fallback rules (0 < 0.5); the first
    /// registered wins.
    #[test]
    fn first_match_wins_within_phase() {
        let mut signals = baseline();
        signals.signal_coverage = 0.0;
        let out = decide(&signals, Context::CommunityComment);
        assert_eq!(out.rule_ids, vec!["fallback.no-signals".to_string()]);
    }

    /// A fallback rule and an allow rule both match — the fallback
    /// result is returned (first match wins globally, not per phase).
    #[test]
    fn fallback_preempts_allow_across_phases() {
        let signals = NormalizedSignals {
            trust: Tier::VeryHigh,
            social_trust: Tier::VeryHigh,
            builder: Capability::None,
            creator: Capability::None,
            spam_risk: Tier::VeryLow,
            recency_days: 0,
            signal_coverage: 0.4,
        };
        // allowlist_sufficient holds, but partial coverage fires first.
        let out = decide(&signals, Context::AllowlistGeneral);
        assert_eq!(out.rule_ids, vec!["fallback.partial-signals".to_string()]);
        assert_eq!(out.decision, Decision::AllowWithLimits);
    }

    /// Hard denies preempt grants: critical spam with otherwise
    /// allow-worthy signals.
    #[test]
    fn hard_deny_preempts_allow() {
        let signals = NormalizedSignals {
            trust: Tier::VeryHigh,
            social_trust: Tier::High,
            builder: Capability::Expert,
            creator: Capability::Expert,
            spam_risk: Tier::VeryHigh,
            recency_days: 0,
            signal_coverage: 1.0,
        };
        let out = decide(&signals, Context::AllowlistGeneral);
        assert_eq!(out.decision, Decision::Deny);
        assert_eq!(out.rule_ids, vec!["deny.spam-critical".to_string()]);
    }

    // ── grants and confidence ───────────────────────────────────────

    #[test]
    fn high_trust_allows_allowlist_with_very_high_confidence() {
        let mut signals = baseline();
        signals.trust = Tier::High;
        let out = decide(&signals, Context::AllowlistGeneral);
        assert_eq!(out.decision, Decision::Allow);
        assert_eq!(out.rule_ids, vec!["allow.allowlist.general".to_string()]);
        // 50 + 30 = 80 → VERY_HIGH.
        assert_eq!(out.confidence, ConfidenceTier::VeryHigh);
        assert!(out.constraints.is_empty());
    }

    #[test]
    fn neutral_trust_gets_probationary_allowlist() {
        let out = decide(&baseline(), Context::AllowlistGeneral);
        assert_eq!(out.decision, Decision::AllowWithLimits);
        assert_eq!(out.rule_ids, vec!["limited.allowlist.general".to_string()]);
        assert_eq!(out.constraints, vec!["manual-review".to_string()]);
        // 50 + 5 = 55 → MEDIUM.
        assert_eq!(out.confidence, ConfidenceTier::Medium);
    }

    #[test]
    fn skilled_builder_allows_contributor_apply() {
        let mut signals = baseline();
        signals.builder = Capability::Skilled;
        let out = decide(&signals, Context::ContributorApply);
        assert_eq!(out.decision, Decision::Allow);
        assert_eq!(out.rule_ids, vec!["allow.contributor.apply".to_string()]);
    }

    #[test]
    fn stale_voter_gets_reduced_weight_then_nothing() {
        let mut signals = baseline();
        signals.trust = Tier::High;
        signals.recency_days = 120;
        // Too stale for the full grant (90d), within the limited band (180d).
        let out = decide(&signals, Context::GovernanceVote);
        assert_eq!(out.decision, Decision::AllowWithLimits);
        assert_eq!(out.rule_ids, vec!["limited.governance.vote".to_string()]);

        signals.recency_days = 365;
        let out = decide(&signals, Context::GovernanceVote);
        assert_eq!(out.decision, Decision::Deny);
        assert!(out.rule_ids.is_empty());
    }

    #[test]
    fn outputs_carry_engine_version() {
        let out = decide(&baseline(), Context::CommunityComment);
        assert_eq!(out.version, ENGINE_VERSION);
    }

    #[test]
    fn matched_outputs_have_exactly_one_rule_id_and_reason() {
        let mut signals = baseline();
        signals.trust = Tier::High;
        for &ctx in Context::all() {
            let out = decide(&signals, ctx);
            if !out.rule_ids.is_empty() {
                assert_eq!(out.rule_ids.len(), 1, "context {ctx}");
                assert_eq!(out.explain.len(), 1, "context {ctx}");
            }
        }
    }

    #[test]
    fn serde_roundtrip() {
        let out = decide(&baseline(), Context::AllowlistGeneral);
        let json = serde_json::to_string(&out).unwrap();
        let parsed: DecisionOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(out, parsed);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use repgate_core::{Capability, Tier};

    fn tier_strategy() -> impl Strategy<Value = Tier> {
        prop::sample::select(Tier::all().to_vec())
    }

    fn capability_strategy() -> impl Strategy<Value = Capability> {
        prop::sample::select(Capability::all().to_vec())
    }

    fn signals_strategy() -> impl Strategy<Value = NormalizedSignals> {
        (
            tier_strategy(),
            tier_strategy(),
            capability_strategy(),
            capability_strategy(),
            tier_strategy(),
            0u32..4000,
            0.0f64..=1.0,
        )
            .prop_map(
                |(trust, social_trust, builder, creator, spam_risk, recency_days, coverage)| {
                    NormalizedSignals {
                        trust,
                        social_trust,
                        builder,
                        creator,
                        spam_risk,
                        recency_days,
                        signal_coverage: coverage,
                    }
                },
            )
    }

    proptest! {
        /// The evaluator is total: every well-formed signal set and
        /// context produces an output, and repeated calls agree.
        #[test]
        fn total_and_deterministic(signals in signals_strategy(), ctx_idx in 0usize..5) {
            let ctx = Context::all()[ctx_idx];
            let a = decide(&signals, ctx);
            let b = decide(&signals, ctx);
            prop_assert_eq!(&a, &b);
            prop_assert!(a.rule_ids.len() <= 1);
        }

        /// Constraints appear exactly on allow-with-limits outcomes.
        #[test]
        fn constraints_iff_limited(signals in signals_strategy(), ctx_idx in 0usize..5) {
            let out = decide(&signals, Context::all()[ctx_idx]);
            if out.decision == Decision::AllowWithLimits {
                prop_assert!(!out.constraints.is_empty());
            } else {
                prop_assert!(out.constraints.is_empty());
            }
        }
    }
}
