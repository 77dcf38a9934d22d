//! # repgate-policy — Rule Registry & Decision Evaluator
//!
//! The heart of the engine: an ordered, immutable rule table grouped
//! into four phases, walked by a deterministic first-match evaluator.
//!
//! ## Architecture
//!
//! - **Rule** (`rule.rs`): rules are plain static records with an
//!   embedded pure predicate — data, not a class hierarchy. Evaluation
//!   order is the order of the table, visible in one place.
//! - **Registry** (`registry.rs`): the fixed table, phases in evaluation
//!   order: fallback → hard-deny → allow → allow-with-limits.
//! - **Evaluator** (`evaluator.rs`): first match wins globally;
//!   confidence is base 50 plus the matched rule's delta, mapped to a
//!   categorical tier. No match means the default deny — with its own
//!   fixed message, never an error.
//! - **Progression** (`progression.rs`): a derivative, non-authoritative
//!   view (access status, blocking factors) that never feeds back into
//!   evaluation.
//! - **Audit** (`audit.rs`): the persisted record of a decision —
//!   carries the outcome and rule ids, never the raw signals.
//!
//! ## Determinism Contract
//!
//! `decide()` is synchronous, pure, and free of shared mutable state:
//! identical `(signals, context)` produce bit-identical output on every
//! call. Rule predicates perform no I/O. The table is built once and is
//! read-only; there is no mutation API.

pub mod audit;
pub mod evaluator;
pub mod progression;
pub mod registry;
pub mod rule;

pub use audit::DecisionRecord;
pub use evaluator::{decide, DecisionOutput, BASE_CONFIDENCE, ENGINE_VERSION, NO_RULE_MATCHED};
pub use progression::{
    derive_blocking_factors, required_dimensions, AccessStatus, ReadinessSnapshot, SignalDimension,
};
pub use registry::{rule_by_id, rules};
pub use rule::{Phase, Rule, RuleScope};
