//! # repgate-core — Foundational Types for the Repgate Decision Engine
//!
//! This crate is the bedrock of the Repgate workspace. It defines the
//! type-system primitives that every other crate builds on: the ordered
//! enumerations (trust tiers, capability levels, decisions, contexts),
//! canonical serialization, content digests, and the policy hasher.
//! Every other crate in the workspace depends on `repgate-core`; it
//! depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Ordering lives in one place.** `Tier` and `Capability` expose a
//!    `rank()` that is the sole ordering source. Comparing tiers through
//!    their string names silently reorders them ("HIGH" sorts before
//!    "LOW") and corrupts every downstream decision — the `Ord` impls and
//!    `gte()` helpers all route through `rank()`, never through strings.
//!
//! 2. **`CanonicalBytes` newtype.** ALL digest computation flows through
//!    `CanonicalBytes::new()`. No raw `serde_json::to_vec()` for digests.
//!    This prevents the canonicalization-split defect class by
//!    construction — a reordering-insensitive serialization would break
//!    every verifier holding a policy commitment.
//!
//! 3. **Fixed enumerations, exhaustive `match` everywhere.** Adding a
//!    tier, capability level, or context forces every consumer to handle
//!    it at compile time.
//!
//! 4. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `repgate-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement `Serialize`/`Deserialize`.

pub mod canonical;
pub mod capability;
pub mod context;
pub mod decision;
pub mod digest;
pub mod error;
pub mod policy;
pub mod temporal;
pub mod tier;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use capability::{Capability, CAPABILITY_COUNT};
pub use context::{Context, CONTEXT_COUNT};
pub use decision::{ConfidenceTier, Decision};
pub use digest::{sha256_digest, sha256_hex, subject_hash, ContentDigest, DigestAlgorithm};
pub use error::{CanonicalizationError, RepgateError};
pub use policy::{compute_policy_hash, PolicyContent, PolicyDefinition};
pub use temporal::Timestamp;
pub use tier::{Tier, TIER_COUNT};
