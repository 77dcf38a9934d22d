//! # Collaborator Traits
//!
//! The external services the use cases depend on, as dyn-compatible
//! async traits. Implementations live outside the core: the policy
//! repository is typically a database, the proof verifier a pairing
//! library or an RPC to one, the profile fetcher an HTTP aggregator.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use repgate_circuit::{CircuitSignals, ProverProof};
use repgate_core::{Context, PolicyDefinition};
use repgate_signals::ProviderProfile;

/// Transport-level failure of the policy repository.
#[derive(Error, Debug)]
#[error("policy repository error: {0}")]
pub struct RepositoryError(pub String);

/// Transport-level failure of the proof verifier (distinct from a
/// well-formed "proof invalid" outcome).
#[derive(Error, Debug)]
#[error("proof verifier unavailable: {0}")]
pub struct VerifierFailure(pub String);

/// Failure fetching a provider profile.
#[derive(Error, Debug)]
#[error("profile fetch error: {0}")]
pub struct ProfileError(pub String);

/// Looks up the policy definition governing a context.
#[async_trait]
pub trait PolicyRepository: Send + Sync {
    /// Returns the policy for `context`, or `None` if no policy has
    /// been published for it.
    async fn policy_by_context(
        &self,
        context: Context,
    ) -> Result<Option<PolicyDefinition>, RepositoryError>;
}

/// The verifier's answer for one proof.
///
/// `valid: false` and a present `error` are both rejection outcomes;
/// `signals` carries the attested witness values only when the proof
/// verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationOutcome {
    /// Whether the proof verified against the public inputs.
    pub valid: bool,
    /// The attested circuit signals, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signals: Option<CircuitSignals>,
    /// Verifier-reported error message, present on rejection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Verifies an external zero-knowledge proof.
#[async_trait]
pub trait ProofVerifier: Send + Sync {
    /// Verify `proof` against its declared public inputs.
    ///
    /// An `Err` is a transport failure; a well-formed rejection comes
    /// back as `Ok` with `valid: false` or an `error` message.
    async fn verify(
        &self,
        proof: &ProverProof,
        public_inputs: &[String],
    ) -> Result<VerificationOutcome, VerifierFailure>;
}

/// Fetches the raw, possibly partial, per-source reputation profile
/// for a subject.
#[async_trait]
pub trait ProfileFetcher: Send + Sync {
    /// Fetch the provider profile for `subject_id`.
    async fn fetch_profile(&self, subject_id: &str) -> Result<ProviderProfile, ProfileError>;
}
