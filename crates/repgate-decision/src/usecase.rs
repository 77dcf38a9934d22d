//! # Decision Use Cases
//!
//! Orchestration over the pure evaluator. The proof-based path is a
//! single-pass state machine with a fixed failure order: context
//! validation → policy lookup → hash integrity → proof verification →
//! evaluation → progression. The integrity check deliberately precedes
//! verification: a mismatched policy fails fast without paying
//! verification cost.

use serde::{Deserialize, Serialize};

use repgate_circuit::{decode_signals, ProverProof};
use repgate_core::{subject_hash, Context, Timestamp};
use repgate_policy::{
    decide, derive_blocking_factors, rule_by_id, AccessStatus, DecisionOutput, DecisionRecord,
    ReadinessSnapshot, SignalDimension,
};
use repgate_signals::normalize_signals;

use crate::deps::{PolicyRepository, ProfileFetcher, ProofVerifier};
use crate::error::DecisionError;

/// Input to the proof-based decision use case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofDecisionInput {
    /// Requested decision context (stable string id).
    pub context: String,
    /// The policy hash the caller believes is current.
    pub policy_hash: String,
    /// The externally-generated proof over the subject's signals.
    pub proof: ProverProof,
    /// The proof's declared public inputs.
    pub public_inputs: Vec<String>,
    /// Optional subject identifier, hashed one-way for the audit trail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<String>,
}

/// Result of the proof-based decision use case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofDecision {
    /// The evaluator's output.
    pub output: DecisionOutput,
    /// Derived coarse access status.
    pub access_status: AccessStatus,
    /// Required dimensions currently not ready, in stable order.
    pub blocking_factors: Vec<SignalDimension>,
    /// The canonical policy hash the decision was made under.
    pub policy_hash: String,
    /// One-way hash of the subject id, when one was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_hash: Option<String>,
}

/// Execute a decision over proof-attested signals.
///
/// Sequential, no retries. Every failure is a distinct
/// [`DecisionError`]; there is no partial success.
pub async fn execute_decision_with_proof(
    input: &ProofDecisionInput,
    policies: &dyn PolicyRepository,
    verifier: &dyn ProofVerifier,
) -> Result<ProofDecision, DecisionError> {
    // 1. Context must be one of the fixed known contexts.
    let context: Context = input
        .context
        .parse()
        .map_err(|_| DecisionError::UnknownContext(input.context.clone()))?;

    // 2. Policy lookup.
    let policy = policies
        .policy_by_context(context)
        .await?
        .ok_or(DecisionError::PolicyNotFound(context))?;

    // 3. Hash integrity — before verification, so a stale policy never
    //    costs a pairing check.
    if policy.policy_hash != input.policy_hash {
        tracing::warn!(
            %context,
            expected = %policy.policy_hash,
            supplied = %input.policy_hash,
            "policy hash mismatch"
        );
        return Err(DecisionError::PolicyHashMismatch {
            expected: policy.policy_hash,
            supplied: input.policy_hash.clone(),
        });
    }

    // 4. External proof verification.
    let outcome = verifier.verify(&input.proof, &input.public_inputs).await?;
    if let Some(message) = outcome.error {
        return Err(DecisionError::ProofRejected(message));
    }
    if !outcome.valid {
        return Err(DecisionError::ProofRejected("proof invalid".into()));
    }
    let attested = outcome.signals.ok_or(DecisionError::MissingSignals)?;

    // 5. Evaluate the attested signals with the ordinary evaluator.
    let signals = decode_signals(&attested)?;
    let output = decide(&signals, context);

    // 6. Progression derivations.
    let matched_hard_deny = output
        .rule_ids
        .first()
        .and_then(|id| rule_by_id(id))
        .map(|rule| rule.is_hard_deny())
        .unwrap_or(false);
    let access_status = AccessStatus::derive(output.decision, matched_hard_deny);
    let snapshot = ReadinessSnapshot::from_signals(&signals);
    let blocking_factors = derive_blocking_factors(context, &snapshot);

    tracing::debug!(
        %context,
        decision = %output.decision,
        status = %access_status,
        "proof-based decision complete"
    );

    // 7. Assemble, hashing the subject id if one was supplied.
    Ok(ProofDecision {
        output,
        access_status,
        blocking_factors,
        policy_hash: policy.policy_hash,
        subject_hash: input.subject_id.as_deref().map(subject_hash),
    })
}

/// Input to the profile-based decision use case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileDecisionInput {
    /// Requested decision context (stable string id).
    pub context: String,
    /// The subject whose profile to fetch.
    pub subject_id: String,
}

/// Result of the profile-based decision use case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileDecision {
    /// The evaluator's output.
    pub output: DecisionOutput,
    /// Derived coarse access status.
    pub access_status: AccessStatus,
    /// Required dimensions currently not ready, in stable order.
    pub blocking_factors: Vec<SignalDimension>,
    /// The audit record for this decision (no raw signals).
    pub record: DecisionRecord,
}

/// Execute a decision from freshly-fetched provider signals.
///
/// The non-proof path: fetch → normalize → evaluate → derive → record.
/// A fetch failure surfaces as [`DecisionError::Profile`], never as a
/// default deny.
pub async fn execute_decision_from_profile(
    input: &ProfileDecisionInput,
    fetcher: &dyn ProfileFetcher,
) -> Result<ProfileDecision, DecisionError> {
    let context: Context = input
        .context
        .parse()
        .map_err(|_| DecisionError::UnknownContext(input.context.clone()))?;

    let profile = fetcher.fetch_profile(&input.subject_id).await?;
    let signals = normalize_signals(&profile, Timestamp::now());
    let output = decide(&signals, context);

    let matched_hard_deny = output
        .rule_ids
        .first()
        .and_then(|id| rule_by_id(id))
        .map(|rule| rule.is_hard_deny())
        .unwrap_or(false);
    let access_status = AccessStatus::derive(output.decision, matched_hard_deny);
    let snapshot = ReadinessSnapshot::from_signals(&signals);
    let blocking_factors = derive_blocking_factors(context, &snapshot);

    let record = DecisionRecord::from_output(
        &output,
        context,
        None,
        Some(subject_hash(&input.subject_id)),
        Timestamp::now(),
    );

    Ok(ProfileDecision {
        output,
        access_status,
        blocking_factors,
        record,
    })
}
