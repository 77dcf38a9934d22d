//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout the Repgate workspace. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! Failure classes are distinct, named conditions: validation,
//! not-found, integrity, verification, canonicalization. None of them is
//! ever downgraded to a default decision — a failure to validate must
//! never be confused with an authoritative DENY.

use thiserror::Error;

/// Top-level error type for the Repgate workspace.
#[derive(Error, Debug)]
pub enum RepgateError {
    /// Malformed request shape or an unknown enumeration identifier.
    /// Rejected before any lookup is attempted.
    #[error("validation error: {0}")]
    Validation(String),

    /// A lookup for a known, well-formed key returned nothing.
    #[error("not found: {0}")]
    NotFound(String),

    /// A supplied commitment does not match the canonical one.
    #[error("integrity error: {0}")]
    Integrity(String),

    /// An external proof was rejected or the verifier reported an error.
    #[error("verification error: {0}")]
    Verification(String),

    /// Canonicalization failed.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),
}

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values are not permitted in canonical representations.
    /// Thresholds must be integers (coverage in basis points).
    #[error("float values are not permitted in canonical representations; use integer basis points: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
