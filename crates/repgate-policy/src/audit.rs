//! # Decision Audit Record
//!
//! The persistable view of a decision. The engine never persists raw
//! signals — a `DecisionRecord` carries the outcome, the matched rule
//! ids, and one-way hashes only. That property is structural: the type
//! has no field that could hold a signal value.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use repgate_core::{ConfidenceTier, Context, Decision, Timestamp};

use crate::evaluator::DecisionOutput;

/// One audit-trail entry for a completed decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// Unique record id.
    pub record_id: Uuid,
    /// The context that was decided.
    pub context: Context,
    /// The decision.
    pub decision: Decision,
    /// Categorical confidence.
    pub confidence: ConfidenceTier,
    /// Matched rule ids (zero or one element).
    pub rule_ids: Vec<String>,
    /// Engine version that produced the decision.
    pub engine_version: String,
    /// Policy hash the decision was made under, when one applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_hash: Option<String>,
    /// One-way hash of the subject identifier, when one was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_hash: Option<String>,
    /// When the decision was made.
    pub decided_at: Timestamp,
}

impl DecisionRecord {
    /// Build a record from an evaluation output.
    pub fn from_output(
        output: &DecisionOutput,
        context: Context,
        policy_hash: Option<String>,
        subject_hash: Option<String>,
        decided_at: Timestamp,
    ) -> Self {
        Self {
            record_id: Uuid::new_v4(),
            context,
            decision: output.decision,
            confidence: output.confidence,
            rule_ids: output.rule_ids.clone(),
            engine_version: output.version.clone(),
            policy_hash,
            subject_hash,
            decided_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::decide;
    use repgate_core::{Capability, Tier};
    use repgate_signals::NormalizedSignals;

    fn sample_output() -> DecisionOutput {
        decide(
            &NormalizedSignals {
                trust: Tier::High,
                social_trust: Tier::Neutral,
                builder: Capability::None,
                creator: Capability::None,
                spam_risk: Tier::Low,
                recency_days: 3,
                signal_coverage: 1.0,
            },
            Context::AllowlistGeneral,
        )
    }

    #[test]
    fn record_copies_outcome_fields() {
        let out = sample_output();
        let record = DecisionRecord::from_output(
            &out,
            Context::AllowlistGeneral,
            Some("sha256:ab".into()),
            None,
            Timestamp::parse("2026-08-01T00:00:00Z").unwrap(),
        );
        assert_eq!(record.decision, out.decision);
        assert_eq!(record.rule_ids, out.rule_ids);
        assert_eq!(record.engine_version, out.version);
        assert_eq!(record.policy_hash.as_deref(), Some("sha256:ab"));
        assert_eq!(record.subject_hash, None);
    }

    #[test]
    fn records_get_distinct_ids() {
        let out = sample_output();
        let ts = Timestamp::parse("2026-08-01T00:00:00Z").unwrap();
        let a = DecisionRecord::from_output(&out, Context::AllowlistGeneral, None, None, ts);
        let b = DecisionRecord::from_output(&out, Context::AllowlistGeneral, None, None, ts);
        assert_ne!(a.record_id, b.record_id);
    }

    #[test]
    fn optional_hashes_omitted_from_wire_format() {
        let out = sample_output();
        let record = DecisionRecord::from_output(
            &out,
            Context::AllowlistGeneral,
            None,
            None,
            Timestamp::parse("2026-08-01T00:00:00Z").unwrap(),
        );
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("policy_hash"));
        assert!(!json.contains("subject_hash"));
    }

    #[test]
    fn serde_roundtrip() {
        let out = sample_output();
        let record = DecisionRecord::from_output(
            &out,
            Context::AllowlistGeneral,
            Some("sha256:cd".into()),
            Some("deadbeef".into()),
            Timestamp::parse("2026-08-01T00:00:00Z").unwrap(),
        );
        let json = serde_json::to_string(&record).unwrap();
        let parsed: DecisionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, parsed);
    }
}
