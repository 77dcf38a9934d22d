//! # Rule — Tagged Static Decision Records
//!
//! A rule is a plain record holding a pure predicate function value,
//! not a trait object: virtual-dispatch rule classes obscure evaluation
//! order, and order is the contract here.

use repgate_core::{Context, Decision};
use repgate_signals::NormalizedSignals;

/// The four evaluation phases, in fixed evaluation order.
///
/// Fallback gates fire before anything else (coverage checks), hard
/// denies short-circuit before any positive signal is considered, then
/// full grants, then probationary grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    /// Signal-coverage gates.
    Fallback,
    /// Context-independent critical-risk denials.
    HardDeny,
    /// Context-specific sufficiency for full access.
    Allow,
    /// Context-specific conditional/probationary access.
    AllowWithLimits,
}

impl Phase {
    /// All phases in evaluation order.
    pub fn all() -> &'static [Phase] {
        &[
            Self::Fallback,
            Self::HardDeny,
            Self::Allow,
            Self::AllowWithLimits,
        ]
    }
}

/// Which contexts a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleScope {
    /// Applies to every context (wildcard).
    Any,
    /// Applies to exactly one context.
    Only(Context),
}

/// One entry in the rule table.
///
/// Predicates are pure, side-effect-free, and total over any
/// well-formed [`NormalizedSignals`] — a predicate that performs I/O
/// violates the evaluator's determinism contract and is a design error,
/// not something to patch around.
///
/// Rule ids are globally unique and stable across engine versions; they
/// appear in audit logs. The table is append-only within a phase.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Globally unique, stable identifier.
    pub id: &'static str,
    /// The evaluation phase this rule belongs to.
    pub phase: Phase,
    /// Context scope: wildcard or one specific context.
    pub scope: RuleScope,
    /// Pure match predicate over the normalized signals.
    pub predicate: fn(&NormalizedSignals) -> bool,
    /// The decision this rule produces when it matches.
    pub decision: Decision,
    /// Human-readable reason, surfaced in `explain`.
    pub reason: &'static str,
    /// Added to the base confidence score when this rule matches.
    pub confidence_delta: i32,
    /// Constraint tags, meaningful only for allow-with-limits rules.
    pub constraints: &'static [&'static str],
    /// Optional retry hint in seconds, for coverage-driven outcomes.
    pub retry_after_secs: Option<u32>,
}

impl Rule {
    /// Returns true if this rule is in scope for the requested context.
    pub fn applies_to(&self, context: Context) -> bool {
        match self.scope {
            RuleScope::Any => true,
            RuleScope::Only(c) => c == context,
        }
    }

    /// Full match check: in scope AND predicate holds.
    pub fn matches(&self, signals: &NormalizedSignals, context: Context) -> bool {
        self.applies_to(context) && (self.predicate)(signals)
    }

    /// Returns true if this is a hard-deny rule — the progression layer
    /// distinguishes "blocked" from "not ready" on this flag.
    pub fn is_hard_deny(&self) -> bool {
        self.phase == Phase::HardDeny
    }
}
