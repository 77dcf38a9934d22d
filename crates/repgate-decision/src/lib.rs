//! # repgate-decision — Decision Use Cases
//!
//! The orchestration layer over the pure evaluator: the only
//! asynchronous code in the workspace. Two use cases:
//!
//! - **Proof-based** (`execute_decision_with_proof`): the caller
//!   presents signals already attested by a zero-knowledge proof. The
//!   use case validates the context, looks up the policy, checks the
//!   caller's policy hash against the canonical one BEFORE paying for
//!   verification, delegates verification to the external verifier,
//!   evaluates the attested signals, and layers on the progression
//!   derivations.
//! - **Profile-based** (`execute_decision_from_profile`): fetch the raw
//!   provider profile, normalize, evaluate, and emit an audit record.
//!
//! ## Concurrency Contract
//!
//! Single pass, sequential awaits, no retries: transient collaborator
//! failures surface to the caller, who owns retry policy. No caching,
//! no background work, no timeouts — callers needing bounded latency
//! impose them externally and treat a timeout as a verification
//! failure.
//!
//! Every failure path is a distinct, named [`DecisionError`] variant;
//! there is no partial success, and no failure is ever downgraded to a
//! default deny.

pub mod deps;
pub mod error;
pub mod usecase;

pub use deps::{
    PolicyRepository, ProfileError, ProfileFetcher, ProofVerifier, RepositoryError,
    VerificationOutcome, VerifierFailure,
};
pub use error::DecisionError;
pub use usecase::{
    execute_decision_from_profile, execute_decision_with_proof, ProfileDecision,
    ProfileDecisionInput, ProofDecision, ProofDecisionInput,
};
