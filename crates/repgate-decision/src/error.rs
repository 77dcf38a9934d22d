//! # Use-Case Error Taxonomy
//!
//! One named variant per failure class. A failed decision attempt is
//! never reported as a DENY — callers can always distinguish "the
//! engine decided against the subject" from "the operation could not be
//! performed".

use thiserror::Error;

use repgate_circuit::CodecError;
use repgate_core::Context;

use crate::deps::{ProfileError, RepositoryError, VerifierFailure};

/// Failure of a decision use case.
#[derive(Error, Debug)]
pub enum DecisionError {
    /// The requested context is not one of the fixed known contexts.
    /// Rejected before any lookup.
    #[error("unknown decision context: {0:?}")]
    UnknownContext(String),

    /// No policy has been published for the (valid) context.
    #[error("no policy found for context {0}")]
    PolicyNotFound(Context),

    /// The caller-supplied policy hash does not match the canonical
    /// one. Checked before proof verification — there is no reason to
    /// pay verification cost against a stale policy.
    #[error("policy hash mismatch: expected {expected}, supplied {supplied}")]
    PolicyHashMismatch {
        /// The canonical hash from the policy repository.
        expected: String,
        /// The hash the caller supplied.
        supplied: String,
    },

    /// The verifier rejected the proof or reported an error.
    #[error("proof rejected: {0}")]
    ProofRejected(String),

    /// The verifier itself could not be reached or failed.
    #[error(transparent)]
    VerifierUnavailable(#[from] VerifierFailure),

    /// The verifier reported success but supplied no attested signals.
    #[error("verifier returned no attested signals")]
    MissingSignals,

    /// An attested integer was outside its codec domain.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The policy repository failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// The profile fetcher failed.
    #[error(transparent)]
    Profile(#[from] ProfileError),
}
