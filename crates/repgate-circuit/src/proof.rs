//! # Proof Payload Conversion — Prover ↔ Verifier Shapes
//!
//! The external prover emits Groth16 proofs with projective coordinates
//! and its own G2 limb order; the target verifier consumes affine
//! coordinate pairs with the limbs of each G2 coordinate swapped (its
//! pairing convention). The transform is purely mechanical but must be
//! pixel-exact — a single swapped pair produces a proof that fails
//! verification with no actionable error.

use serde::{Deserialize, Serialize};

use crate::encode::CodecError;

/// The proof protocol the payloads carry.
const PROTOCOL: &str = "groth16";

/// The curve identifier used by the prover toolchain.
const CURVE: &str = "bn128";

/// A Groth16 proof in the prover's native shape: projective points
/// (trailing `"1"` / `["1", "0"]` rows), G2 coordinates as
/// `[c0, c1]` limb pairs, all values decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProverProof {
    /// G1 point A, projective: `[x, y, "1"]`.
    pub pi_a: [String; 3],
    /// G2 point B, projective: three `[c0, c1]` limb pairs, the last
    /// being `["1", "0"]`.
    pub pi_b: [[String; 2]; 3],
    /// G1 point C, projective: `[x, y, "1"]`.
    pub pi_c: [String; 3],
    /// Always `"groth16"`.
    pub protocol: String,
    /// Always `"bn128"`.
    pub curve: String,
}

/// A Groth16 proof in the verifier's shape: affine points, G2 limb
/// pairs swapped to `[c1, c0]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifierProof {
    /// G1 point A, affine: `[x, y]`.
    pub a: [String; 2],
    /// G2 point B, affine, limbs swapped: `[[x_c1, x_c0], [y_c1, y_c0]]`.
    pub b: [[String; 2]; 2],
    /// G1 point C, affine: `[x, y]`.
    pub c: [String; 2],
}

/// Convert a prover payload to the verifier's shape.
///
/// Validates the fixed protocol/curve tags and the projective tails
/// before dropping them; a malformed tail means the payload is not the
/// affine encoding this transform assumes, and converting it anyway
/// would produce a proof that silently fails verification.
pub fn to_verifier_proof(proof: &ProverProof) -> Result<VerifierProof, CodecError> {
    if proof.protocol != PROTOCOL {
        return Err(CodecError::MalformedProof(format!(
            "unsupported protocol {:?} (expected {PROTOCOL:?})",
            proof.protocol
        )));
    }
    if proof.curve != CURVE {
        return Err(CodecError::MalformedProof(format!(
            "unsupported curve {:?} (expected {CURVE:?})",
            proof.curve
        )));
    }
    if proof.pi_a[2] != "1" {
        return Err(CodecError::MalformedProof(format!(
            "pi_a is not affine-normalized: z = {:?}",
            proof.pi_a[2]
        )));
    }
    if proof.pi_c[2] != "1" {
        return Err(CodecError::MalformedProof(format!(
            "pi_c is not affine-normalized: z = {:?}",
            proof.pi_c[2]
        )));
    }
    if proof.pi_b[2] != ["1".to_string(), "0".to_string()] {
        return Err(CodecError::MalformedProof(format!(
            "pi_b is not affine-normalized: z = {:?}",
            proof.pi_b[2]
        )));
    }

    Ok(VerifierProof {
        a: [proof.pi_a[0].clone(), proof.pi_a[1].clone()],
        // The verifier's pairing convention wants each G2 coordinate's
        // limbs in [c1, c0] order — the swap happens exactly here.
        b: [
            [proof.pi_b[0][1].clone(), proof.pi_b[0][0].clone()],
            [proof.pi_b[1][1].clone(), proof.pi_b[1][0].clone()],
        ],
        c: [proof.pi_c[0].clone(), proof.pi_c[1].clone()],
    })
}

/// Convert a verifier payload back to the prover's shape, restoring the
/// projective tails and un-swapping the G2 limbs.
pub fn from_verifier_proof(proof: &VerifierProof) -> ProverProof {
    ProverProof {
        pi_a: [proof.a[0].clone(), proof.a[1].clone(), "1".to_string()],
        pi_b: [
            [proof.b[0][1].clone(), proof.b[0][0].clone()],
            [proof.b[1][1].clone(), proof.b[1][0].clone()],
            ["1".to_string(), "0".to_string()],
        ],
        pi_c: [proof.c[0].clone(), proof.c[1].clone(), "1".to_string()],
        protocol: PROTOCOL.to_string(),
        curve: CURVE.to_string(),
    }
}
