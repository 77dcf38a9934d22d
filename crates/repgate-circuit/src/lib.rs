//! # repgate-circuit — Circuit-Facing Encodings
//!
//! Bidirectional mapping between the semantic domain (tiers,
//! capabilities, decisions, contexts, coverage fractions) and the
//! integers a zero-knowledge circuit consumes, plus the field-element
//! reduction and proof payload conversion that bind an off-chain
//! decision to its in-proof counterpart.
//!
//! ## Architecture
//!
//! - **Encode** (`encode.rs`): loss-free integer codecs. Decoding an
//!   integer outside a codec's domain is an error, never a clamp.
//! - **Field** (`field.rs`): reduction of hex-encoded hashes into the
//!   BN254 scalar field, with a canonicality predicate for audits.
//! - **Proof** (`proof.rs`): mechanical but pixel-exact translation
//!   between the external prover's payload shape and the verifier's,
//!   including the G2 coordinate swap the prover's pairing convention
//!   requires.
//!
//! ## Crate Policy
//!
//! - Everything here is synchronous and pure — fuzz-testable without an
//!   async harness.
//! - No silent wrapping: out-of-range numeric input is rejected.

pub mod encode;
pub mod field;
pub mod proof;

pub use encode::{
    basis_points_to_coverage, coverage_to_basis_points, decode_capability, decode_context,
    decode_decision, decode_signals, decode_tier, encode_capability, encode_context,
    encode_decision, encode_signals, encode_tier, CircuitSignals, CodecError,
};
pub use field::{hash_was_canonical, policy_hash_to_field_element, FieldError, FIELD_ORDER_HEX};
pub use proof::{from_verifier_proof, to_verifier_proof, ProverProof, VerifierProof};
