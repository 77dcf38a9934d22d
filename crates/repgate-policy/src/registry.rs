//! # Rule Registry — The Fixed Evaluation Table
//!
//! The complete, ordered rule table. Phases appear in evaluation order
//! (fallback → hard-deny → allow → allow-with-limits) and rules within a
//! phase appear in registration order; [`rules()`] returns the table
//! exactly as evaluated. The table is built once at compile time and is
//! read-only — there is no mutation API.
//!
//! Ids are append-only and stable across versions: they appear in audit
//! logs and must never be renamed or reused.

use repgate_core::{Capability, Context, Decision, Tier};
use repgate_signals::NormalizedSignals;

use crate::rule::{Phase, Rule, RuleScope};

/// Coverage below this fraction is "partial" and short-circuits to a
/// probationary grant. Expressed as 5000 basis points in policy
/// thresholds.
pub const PARTIAL_COVERAGE_MIN: f64 = 0.5;

/// Governance voting requires activity within this many days for a full
/// grant.
const VOTE_RECENCY_MAX_DAYS: u32 = 90;

/// Probationary governance voting tolerates activity within this many
/// days.
const VOTE_RECENCY_LIMITED_MAX_DAYS: u32 = 180;

// ─── fallback predicates ────────────────────────────────────────────

fn no_signal_coverage(s: &NormalizedSignals) -> bool {
    s.signal_coverage <= 0.0
}

fn partial_signal_coverage(s: &NormalizedSignals) -> bool {
    s.signal_coverage < PARTIAL_COVERAGE_MIN
}

// ─── hard-deny predicates ───────────────────────────────────────────

fn critical_spam_risk(s: &NormalizedSignals) -> bool {
    s.spam_risk.gte(Tier::High)
}

fn social_distrust(s: &NormalizedSignals) -> bool {
    !s.social_trust.gte(Tier::Neutral)
}

fn critical_trust(s: &NormalizedSignals) -> bool {
    s.trust == Tier::VeryLow
}

// ─── allow predicates ───────────────────────────────────────────────

fn allowlist_sufficient(s: &NormalizedSignals) -> bool {
    s.trust.gte(Tier::High) && !s.spam_risk.gte(Tier::High)
}

fn comment_sufficient(s: &NormalizedSignals) -> bool {
    s.trust.gte(Tier::Neutral) && s.social_trust.gte(Tier::Neutral) && !s.spam_risk.gte(Tier::High)
}

fn publish_sufficient(s: &NormalizedSignals) -> bool {
    s.trust.gte(Tier::High) && s.creator.gte(Capability::Skilled)
}

fn apply_sufficient(s: &NormalizedSignals) -> bool {
    s.trust.gte(Tier::Neutral) && s.builder.gte(Capability::Skilled)
}

fn vote_sufficient(s: &NormalizedSignals) -> bool {
    s.trust.gte(Tier::High)
        && s.social_trust.gte(Tier::Neutral)
        && s.recency_days <= VOTE_RECENCY_MAX_DAYS
}

// ─── allow-with-limits predicates ───────────────────────────────────

fn allowlist_probational(s: &NormalizedSignals) -> bool {
    s.trust.gte(Tier::Neutral) && !s.spam_risk.gte(Tier::High)
}

fn comment_probational(s: &NormalizedSignals) -> bool {
    s.trust.gte(Tier::Low) && !s.spam_risk.gte(Tier::High)
}

fn publish_probational(s: &NormalizedSignals) -> bool {
    s.trust.gte(Tier::Neutral) && s.creator.gte(Capability::Basic)
}

fn apply_probational(s: &NormalizedSignals) -> bool {
    s.trust.gte(Tier::Neutral) && s.builder.gte(Capability::Basic)
}

fn vote_probational(s: &NormalizedSignals) -> bool {
    s.trust.gte(Tier::Neutral)
        && s.social_trust.gte(Tier::Neutral)
        && s.recency_days <= VOTE_RECENCY_LIMITED_MAX_DAYS
}

/// The complete rule table, in global evaluation order.
static RULES: &[Rule] = &[
    // ─── phase 1: fallback (coverage gates) ─────────────────────────
    Rule {
        id: "fallback.no-signals",
        phase: Phase::Fallback,
        scope: RuleScope::Any,
        predicate: no_signal_coverage,
        decision: Decision::Deny,
        reason: "no reputation sources could be fetched",
        confidence_delta: -30,
        constraints: &[],
        retry_after_secs: Some(86_400),
    },
    Rule {
        id: "fallback.partial-signals",
        phase: Phase::Fallback,
        scope: RuleScope::Any,
        predicate: partial_signal_coverage,
        decision: Decision::AllowWithLimits,
        reason: "reputation coverage is partial; granting limited access",
        confidence_delta: -10,
        constraints: &["probation", "rate-limit"],
        retry_after_secs: Some(3_600),
    },
    // ─── phase 2: hard-deny (critical risk) ─────────────────────────
    Rule {
        id: "deny.spam-critical",
        phase: Phase::HardDeny,
        scope: RuleScope::Any,
        predicate: critical_spam_risk,
        decision: Decision::Deny,
        reason: "spam risk is critically high",
        confidence_delta: 25,
        constraints: &[],
        retry_after_secs: None,
    },
    Rule {
        id: "deny.social-distrust",
        phase: Phase::HardDeny,
        scope: RuleScope::Any,
        predicate: social_distrust,
        decision: Decision::Deny,
        reason: "social trust is below neutral",
        confidence_delta: 15,
        constraints: &[],
        retry_after_secs: None,
    },
    Rule {
        id: "deny.trust-floor",
        phase: Phase::HardDeny,
        scope: RuleScope::Any,
        predicate: critical_trust,
        decision: Decision::Deny,
        reason: "trust is at the bottom tier",
        confidence_delta: 20,
        constraints: &[],
        retry_after_secs: None,
    },
    // ─── phase 3: allow (full access) ───────────────────────────────
    Rule {
        id: "allow.allowlist.general",
        phase: Phase::Allow,
        scope: RuleScope::Only(Context::AllowlistGeneral),
        predicate: allowlist_sufficient,
        decision: Decision::Allow,
        reason: "trust is high and spam risk acceptable",
        confidence_delta: 30,
        constraints: &[],
        retry_after_secs: None,
    },
    Rule {
        id: "allow.community.comment",
        phase: Phase::Allow,
        scope: RuleScope::Only(Context::CommunityComment),
        predicate: comment_sufficient,
        decision: Decision::Allow,
        reason: "trust and social standing meet the comment bar",
        confidence_delta: 20,
        constraints: &[],
        retry_after_secs: None,
    },
    Rule {
        id: "allow.content.publish",
        phase: Phase::Allow,
        scope: RuleScope::Only(Context::ContentPublish),
        predicate: publish_sufficient,
        decision: Decision::Allow,
        reason: "trust is high and creator capability demonstrated",
        confidence_delta: 25,
        constraints: &[],
        retry_after_secs: None,
    },
    Rule {
        id: "allow.contributor.apply",
        phase: Phase::Allow,
        scope: RuleScope::Only(Context::ContributorApply),
        predicate: apply_sufficient,
        decision: Decision::Allow,
        reason: "builder capability demonstrated at sufficient trust",
        confidence_delta: 20,
        constraints: &[],
        retry_after_secs: None,
    },
    Rule {
        id: "allow.governance.vote",
        phase: Phase::Allow,
        scope: RuleScope::Only(Context::GovernanceVote),
        predicate: vote_sufficient,
        decision: Decision::Allow,
        reason: "trust, social standing, and recent activity meet the voting bar",
        confidence_delta: 30,
        constraints: &[],
        retry_after_secs: None,
    },
    // ─── phase 4: allow-with-limits (probationary access) ───────────
    Rule {
        id: "limited.allowlist.general",
        phase: Phase::AllowWithLimits,
        scope: RuleScope::Only(Context::AllowlistGeneral),
        predicate: allowlist_probational,
        decision: Decision::AllowWithLimits,
        reason: "trust is neutral or better; joining under review",
        confidence_delta: 5,
        constraints: &["manual-review"],
        retry_after_secs: None,
    },
    Rule {
        id: "limited.community.comment",
        phase: Phase::AllowWithLimits,
        scope: RuleScope::Only(Context::CommunityComment),
        predicate: comment_probational,
        decision: Decision::AllowWithLimits,
        reason: "minimum trust met; commenting rate-limited",
        confidence_delta: 0,
        constraints: &["rate-limit"],
        retry_after_secs: None,
    },
    Rule {
        id: "limited.content.publish",
        phase: Phase::AllowWithLimits,
        scope: RuleScope::Only(Context::ContentPublish),
        predicate: publish_probational,
        decision: Decision::AllowWithLimits,
        reason: "entry-level creator capability; publishing via review queue",
        confidence_delta: 0,
        constraints: &["review-queue"],
        retry_after_secs: None,
    },
    Rule {
        id: "limited.contributor.apply",
        phase: Phase::AllowWithLimits,
        scope: RuleScope::Only(Context::ContributorApply),
        predicate: apply_probational,
        decision: Decision::AllowWithLimits,
        reason: "entry-level builder capability; mentored onboarding",
        confidence_delta: 0,
        constraints: &["mentored-onboarding"],
        retry_after_secs: None,
    },
    Rule {
        id: "limited.governance.vote",
        phase: Phase::AllowWithLimits,
        scope: RuleScope::Only(Context::GovernanceVote),
        predicate: vote_probational,
        decision: Decision::AllowWithLimits,
        reason: "voting permitted at reduced weight",
        confidence_delta: 5,
        constraints: &["reduced-vote-weight"],
        retry_after_secs: None,
    },
];

/// The full rule table in evaluation order.
pub fn rules() -> &'static [Rule] {
    RULES
}

/// Look up a rule by its stable id.
pub fn rule_by_id(id: &str) -> Option<&'static Rule> {
    RULES.iter().find(|r| r.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_globally_unique() {
        let mut seen = std::collections::HashSet::new();
        for rule in rules() {
            assert!(seen.insert(rule.id), "duplicate rule id: {}", rule.id);
        }
    }

    /// The table must be sorted by phase — the evaluator relies on table
    /// order alone for the global first-match-wins contract.
    #[test]
    fn table_is_in_phase_order() {
        for w in rules().windows(2) {
            assert!(
                w[0].phase <= w[1].phase,
                "rules {} and {} out of phase order",
                w[0].id,
                w[1].id
            );
        }
    }

    #[test]
    fn fallback_and_hard_deny_are_wildcard() {
        for rule in rules() {
            if matches!(rule.phase, Phase::Fallback | Phase::HardDeny) {
                assert!(
                    matches!(rule.scope, RuleScope::Any),
                    "rule {} must be wildcard",
                    rule.id
                );
            }
        }
    }

    #[test]
    fn grant_phases_are_context_scoped() {
        for rule in rules() {
            if matches!(rule.phase, Phase::Allow | Phase::AllowWithLimits) {
                assert!(
                    matches!(rule.scope, RuleScope::Only(_)),
                    "rule {} must be context-scoped",
                    rule.id
                );
            }
        }
    }

    /// Every allow-with-limits rule must carry at least one constraint
    /// tag. Constraint tags live on the rule itself, so an unmapped id
    /// cannot exist — this test keeps it that way.
    #[test]
    fn allow_with_limits_rules_carry_constraints() {
        for rule in rules() {
            if rule.decision == Decision::AllowWithLimits {
                assert!(
                    !rule.constraints.is_empty(),
                    "allow-with-limits rule {} has no constraint tags",
                    rule.id
                );
            } else {
                assert!(
                    rule.constraints.is_empty(),
                    "rule {} is not allow-with-limits but has constraint tags",
                    rule.id
                );
            }
        }
    }

    #[test]
    fn rule_decisions_match_phase() {
        for rule in rules() {
            match rule.phase {
                Phase::HardDeny => assert_eq!(rule.decision, Decision::Deny, "{}", rule.id),
                Phase::Allow => assert_eq!(rule.decision, Decision::Allow, "{}", rule.id),
                Phase::AllowWithLimits => {
                    assert_eq!(rule.decision, Decision::AllowWithLimits, "{}", rule.id)
                }
                // Fallback carries both deny and limited outcomes.
                Phase::Fallback => {}
            }
        }
    }

    #[test]
    fn every_context_has_allow_and_limited_rules() {
        for &ctx in Context::all() {
            let has_allow = rules()
                .iter()
                .any(|r| r.phase == Phase::Allow && r.scope == RuleScope::Only(ctx));
            let has_limited = rules()
                .iter()
                .any(|r| r.phase == Phase::AllowWithLimits && r.scope == RuleScope::Only(ctx));
            assert!(has_allow, "context {ctx} has no allow rule");
            assert!(has_limited, "context {ctx} has no allow-with-limits rule");
        }
    }

    #[test]
    fn rule_by_id_finds_known_and_rejects_unknown() {
        assert!(rule_by_id("fallback.no-signals").is_some());
        assert!(rule_by_id("deny.trust-floor").is_some());
        assert!(rule_by_id("nonexistent.rule").is_none());
    }
}
