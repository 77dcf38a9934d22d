//! # Content Digest — Tagged Commitment Hashes
//!
//! Defines `ContentDigest` and `DigestAlgorithm` for every hash the
//! engine emits: policy hashes and one-way subject hashes.
//!
//! ## Security Invariant
//!
//! `ContentDigest` for canonical content can only be computed from
//! `CanonicalBytes`, ensuring that all content digests are produced
//! through the canonicalization pipeline. This is enforced by the
//! signature of [`sha256_digest()`].

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::canonical::CanonicalBytes;

/// The hash algorithm used to produce a content digest.
///
/// The algorithm tag is part of the rendered digest (`sha256:<hex>`) so
/// commitments are self-describing and a future algorithm migration
/// cannot be confused with a content change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DigestAlgorithm {
    /// SHA-256 — the sole algorithm in use.
    Sha256,
}

impl DigestAlgorithm {
    /// Returns the algorithm identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
        }
    }
}

impl std::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A content digest with its algorithm tag.
///
/// Rendered as `<algorithm>:<lowercase hex>`, e.g. `sha256:44136f…`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentDigest {
    /// The hash algorithm that produced this digest.
    pub algorithm: DigestAlgorithm,
    /// The raw 32-byte digest value.
    pub bytes: [u8; 32],
}

impl ContentDigest {
    /// Create a new content digest from raw bytes and algorithm.
    ///
    /// Prefer [`sha256_digest()`] for hashing canonical content.
    pub fn new(algorithm: DigestAlgorithm, bytes: [u8; 32]) -> Self {
        Self { algorithm, bytes }
    }

    /// Render the digest as a lowercase hex string (no algorithm tag).
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.to_hex())
    }
}

/// Compute a SHA-256 content digest from canonical bytes.
///
/// The signature accepts only `&CanonicalBytes`, not raw `&[u8]` — a
/// compile-time constraint that prevents any code path from committing
/// to non-canonical bytes.
pub fn sha256_digest(data: &CanonicalBytes) -> ContentDigest {
    let hash = Sha256::digest(data.as_bytes());
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    ContentDigest::new(DigestAlgorithm::Sha256, bytes)
}

/// Compute a SHA-256 hex string from canonical bytes.
pub fn sha256_hex(data: &CanonicalBytes) -> String {
    sha256_digest(data).to_hex()
}

/// Compute the one-way subject hash for audit logging.
///
/// Subject identifiers never appear in audit trails in the clear; only
/// this hash does. The input is raw UTF-8 bytes, not canonical JSON —
/// there is no structure to canonicalize.
pub fn subject_hash(subject_id: &str) -> String {
    let hash = Sha256::digest(subject_id.as_bytes());
    hash.iter().map(|b| format!("{b:02x}")).collect()
}
