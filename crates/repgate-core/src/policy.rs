//! # Policy Definition & Policy Hasher
//!
//! A policy fixes the thresholds the evaluation was performed against.
//! Its hash — computed over the recursively key-sorted canonical
//! serialization of the hashable content — is the sole binding between
//! the human-authored thresholds, the off-chain decision, and the
//! on-ledger / in-proof commitment.
//!
//! ## Security Invariant
//!
//! The hash is computed via [`CanonicalBytes`], so two parties holding
//! the same thresholds in different key orders always agree on the hash.
//! `policy_hash` is derived, never hand-authored: [`PolicyDefinition`]
//! can only be built through [`PolicyDefinition::from_content()`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::canonical::CanonicalBytes;
use crate::context::Context;
use crate::digest::sha256_digest;
use crate::error::RepgateError;

/// The hashable subset of a policy: everything except the hash itself.
///
/// Threshold values are integers; fractional thresholds (coverage) are
/// expressed in basis points so canonical content stays float-free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyContent {
    /// The decision context this policy governs.
    pub context: Context,
    /// Version tag of the signal normalization tables the thresholds
    /// were authored against.
    pub normalization_version: String,
    /// Named thresholds, sorted by name (BTreeMap keeps iteration
    /// deterministic even before canonicalization).
    pub thresholds: BTreeMap<String, i64>,
}

/// A policy with its derived content hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyDefinition {
    /// The decision context this policy governs.
    pub context: Context,
    /// Derived canonical content hash, `sha256:`-tagged.
    pub policy_hash: String,
    /// Version tag of the signal normalization tables.
    pub normalization_version: String,
    /// Named integer thresholds.
    pub thresholds: BTreeMap<String, i64>,
}

impl PolicyDefinition {
    /// Build a policy definition from its content, deriving the hash.
    pub fn from_content(content: PolicyContent) -> Result<Self, RepgateError> {
        let policy_hash = compute_policy_hash(&content)?;
        Ok(Self {
            context: content.context,
            policy_hash,
            normalization_version: content.normalization_version,
            thresholds: content.thresholds,
        })
    }

    /// The hashable content of this policy (everything but the hash).
    pub fn content(&self) -> PolicyContent {
        PolicyContent {
            context: self.context,
            normalization_version: self.normalization_version.clone(),
            thresholds: self.thresholds.clone(),
        }
    }
}

/// Compute the canonical content hash of a policy.
///
/// Canonicalizes `{context, normalization_version, thresholds}` with
/// recursively sorted keys (RFC 8785), hashes with SHA-256, and prefixes
/// the algorithm tag: `sha256:<64 hex chars>`.
pub fn compute_policy_hash(content: &PolicyContent) -> Result<String, RepgateError> {
    let cb = CanonicalBytes::new(content)?;
    Ok(sha256_digest(&cb).to_string())
}
