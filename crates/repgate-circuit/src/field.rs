//! # Field Reduction — Hashes as BN254 Scalar Field Elements
//!
//! The proof system's circuit arithmetic works over the BN254 scalar
//! field; a 256-bit SHA-256 policy hash does not fit, so it is reduced
//! modulo the field order before entering the circuit as a public
//! input. The reduction is `value mod r`.
//!
//! [`hash_was_canonical()`] reports whether a hash was already a valid
//! field element (no reduction occurred) — audits use it to detect
//! silent truncation between the off-chain commitment and the proof.

use ark_bn254::Fr;
use ark_ff::PrimeField;
use thiserror::Error;

/// The BN254 scalar field order `r`, lowercase hex, no leading zeros.
///
/// `r = 21888242871839275222246405745257275088548364400416034343698204186575808495617`
pub const FIELD_ORDER_HEX: &str =
    "30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001";

/// Error reducing a hash into the scalar field.
#[derive(Error, Debug, PartialEq)]
pub enum FieldError {
    /// The hash string was empty (after stripping the algorithm tag).
    #[error("empty hash")]
    EmptyHash,

    /// The hash string contained a non-hex character.
    #[error("invalid hex character {character:?} at offset {offset}")]
    InvalidHex {
        /// The offending character.
        character: char,
        /// Byte offset within the hex portion.
        offset: usize,
    },
}

/// Reduce a hex-encoded hash into a canonical BN254 scalar field
/// element, returned as its decimal string (the representation the
/// prover toolchain consumes).
///
/// Accepts the hash with or without the `sha256:` algorithm tag.
/// Odd-length hex is left-padded with a zero nibble. The result is
/// always strictly less than the field order, including for inputs that
/// were already smaller.
pub fn policy_hash_to_field_element(hash: &str) -> Result<String, FieldError> {
    let bytes = hex_bytes(hex_portion(hash))?;
    let element = Fr::from_be_bytes_mod_order(&bytes);
    Ok(element.into_bigint().to_string())
}

/// Returns true if the hash was already a canonical field element —
/// i.e. its value is strictly less than the field order and the
/// reduction in [`policy_hash_to_field_element()`] was the identity.
pub fn hash_was_canonical(hash: &str) -> Result<bool, FieldError> {
    let hex = hex_portion(hash);
    // Validate before comparing; comparison itself is lexical.
    hex_bytes(hex)?;
    let trimmed = hex.trim_start_matches('0');
    Ok(match trimmed.len().cmp(&FIELD_ORDER_HEX.len()) {
        std::cmp::Ordering::Greater => false,
        std::cmp::Ordering::Less => true,
        // Same digit count and no leading zeros on either side: the
        // lexical order of lowercase hex IS the numeric order.
        std::cmp::Ordering::Equal => trimmed.to_ascii_lowercase().as_str() < FIELD_ORDER_HEX,
    })
}

/// Strip the optional `sha256:` algorithm tag.
fn hex_portion(hash: &str) -> &str {
    hash.strip_prefix("sha256:").unwrap_or(hash)
}

/// Decode a hex string to big-endian bytes, left-padding odd lengths.
fn hex_bytes(hex: &str) -> Result<Vec<u8>, FieldError> {
    if hex.is_empty() {
        return Err(FieldError::EmptyHash);
    }
    let mut nibbles = Vec::with_capacity(hex.len() + 1);
    if hex.len() % 2 == 1 {
        nibbles.push(0u8);
    }
    for (offset, character) in hex.chars().enumerate() {
        let nibble = character
            .to_digit(16)
            .ok_or(FieldError::InvalidHex { character, offset })?;
        nibbles.push(nibble as u8);
    }
    Ok(nibbles
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use ark_ff::PrimeField;
    use proptest::prelude::*;

    proptest! {
        /// Reduction output is always a decimal numeral strictly below r.
        #[test]
        fn always_reduced(hex in "[0-9a-f]{1,96}") {
            let bytes = super::hex_bytes(&hex).unwrap();
            let element = Fr::from_be_bytes_mod_order(&bytes);
            prop_assert!(element.into_bigint() < Fr::MODULUS);
            let decimal = policy_hash_to_field_element(&hex).unwrap();
            prop_assert!(decimal.chars().all(|c| c.is_ascii_digit()));
        }

        /// Inputs that fit u128 are far below r: always canonical, and
        /// reduction is exactly the hex→decimal identity.
        #[test]
        fn small_inputs_are_fixed_points(hex in "[0-9a-f]{1,32}") {
            prop_assert!(hash_was_canonical(&hex).unwrap());
            let value = u128::from_str_radix(&hex, 16).unwrap();
            prop_assert_eq!(
                policy_hash_to_field_element(&hex).unwrap(),
                value.to_string()
            );
        }
    }
}
