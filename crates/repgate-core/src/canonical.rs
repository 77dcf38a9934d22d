//! # Canonical Serialization — Deterministic Byte Production
//!
//! Defines `CanonicalBytes`, the sole construction path for bytes used in
//! digest computation — most importantly the policy hash that binds a
//! policy's human-authored thresholds to its on-ledger and in-proof
//! commitment.
//!
//! ## Security Invariant
//!
//! The `CanonicalBytes` newtype has a private inner field. The only way
//! to construct it is through `CanonicalBytes::new()`, which validates
//! the value (float rejection) and serializes it with RFC 8785 (JSON
//! Canonicalization Scheme): recursively sorted object keys, compact
//! separators, deterministic byte sequence. Any function that hashes
//! content must accept `&CanonicalBytes`, so a reordering-sensitive
//! serialization path cannot exist by construction — two verifiers that
//! serialized the same thresholds in different key orders would disagree
//! on every policy hash.
//!
//! ## Float Rejection
//!
//! Canonical content carries no floats: JSON float formatting has
//! non-deterministic edge cases across serializers. Policy thresholds
//! are integers (coverage thresholds are expressed in basis points), so
//! a float in canonical content is always an authoring error and is
//! rejected loudly.

use serde::Serialize;
use serde_json::Value;

use crate::error::CanonicalizationError;

/// Bytes produced exclusively by RFC 8785 canonicalization with float
/// rejection.
///
/// # Invariants
///
/// - The only constructor is `CanonicalBytes::new()`.
/// - All numeric values are integers, never floats.
/// - Object keys are sorted recursively; arrays keep element order.
/// - Serialization uses compact separators (RFC 8785).
///
/// The inner `Vec<u8>` is private, so downstream code cannot violate
/// these invariants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Construct canonical bytes from any serializable value.
    ///
    /// This is the ONLY way to construct `CanonicalBytes`. All digest
    /// computation in the workspace must flow through this constructor.
    ///
    /// # Errors
    ///
    /// Returns [`CanonicalizationError::FloatRejected`] if the value
    /// contains a non-integer number, or
    /// [`CanonicalizationError::SerializationFailed`] if serialization
    /// fails.
    pub fn new(obj: &impl Serialize) -> Result<Self, CanonicalizationError> {
        let value = serde_json::to_value(obj)?;
        reject_floats(&value)?;
        let s = serde_jcs::to_string(&value)?;
        Ok(Self(s.into_bytes()))
    }

    /// Access the canonical bytes for digest computation.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length of the canonical byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the canonical byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Recursively reject float values anywhere in a JSON value tree.
///
/// `null`, `bool`, `string`, and integer numbers pass; objects and
/// arrays recurse. A number not representable as i64/u64 is a float and
/// fails canonicalization.
fn reject_floats(value: &Value) -> Result<(), CanonicalizationError> {
    match value {
        Value::Null | Value::Bool(_) | Value::String(_) => Ok(()),
        Value::Number(n) => {
            if n.is_f64() && !n.is_i64() && !n.is_u64() {
                if let Some(f) = n.as_f64() {
                    return Err(CanonicalizationError::FloatRejected(f));
                }
            }
            Ok(())
        }
        Value::Object(map) => {
            for v in map.values() {
                reject_floats(v)?;
            }
            Ok(())
        }
        Value::Array(arr) => {
            for v in arr {
                reject_floats(v)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_keys_compact_separators() {
        let data = serde_json::json!({"z": 1, "m": 2, "a": 3});
        let cb = CanonicalBytes::new(&data).expect("should canonicalize");
        assert_eq!(std::str::from_utf8(cb.as_bytes()).unwrap(), r#"{"a":3,"m":2,"z":1}"#);
    }

    #[test]
    fn nested_objects_sorted_recursively() {
        let data = serde_json::json!({
            "outer": {"b": 2, "a": 1},
            "list": [3, 2, 1]
        });
        let cb = CanonicalBytes::new(&data).unwrap();
        assert_eq!(
            std::str::from_utf8(cb.as_bytes()).unwrap(),
            r#"{"list":[3,2,1],"outer":{"a":1,"b":2}}"#
        );
    }

    #[test]
    fn float_rejected() {
        let data = serde_json::json!({"min_coverage": 0.5});
        match CanonicalBytes::new(&data).unwrap_err() {
            CanonicalizationError::FloatRejected(f) => assert_eq!(f, 0.5),
            other => panic!("expected FloatRejected, got: {other}"),
        }
    }

    #[test]
    fn deeply_nested_float_rejected() {
        let data = serde_json::json!({"a": {"b": [{"c": 3.14}]}});
        assert!(CanonicalBytes::new(&data).is_err());
    }

    #[test]
    fn integers_accepted() {
        let data = serde_json::json!({"min_coverage_bps": 5000, "delta": -42});
        let cb = CanonicalBytes::new(&data).unwrap();
        assert_eq!(
            std::str::from_utf8(cb.as_bytes()).unwrap(),
            r#"{"delta":-42,"min_coverage_bps":5000}"#
        );
    }

    #[test]
    fn null_and_bool_passthrough() {
        let data = serde_json::json!({"flag": true, "note": null});
        let cb = CanonicalBytes::new(&data).unwrap();
        assert_eq!(
            std::str::from_utf8(cb.as_bytes()).unwrap(),
            r#"{"flag":true,"note":null}"#
        );
    }

    #[test]
    fn empty_object_and_array() {
        assert_eq!(CanonicalBytes::new(&serde_json::json!({})).unwrap().as_bytes(), b"{}");
        assert_eq!(CanonicalBytes::new(&serde_json::json!([])).unwrap().as_bytes(), b"[]");
    }

    #[test]
    fn unicode_passthrough() {
        let data = serde_json::json!({"name": "\u{00e9}minence"});
        let cb = CanonicalBytes::new(&data).unwrap();
        assert!(std::str::from_utf8(cb.as_bytes()).unwrap().contains('\u{00e9}'));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for float-free JSON values — the domain of canonical content.
    fn json_value_no_floats() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| serde_json::json!(n)),
            "[a-zA-Z0-9_ ]{0,40}".prop_map(Value::String),
        ];
        leaf.prop_recursive(4, 64, 8, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
                prop::collection::btree_map("[a-z]{1,10}", inner, 0..8).prop_map(|m| {
                    Value::Object(m.into_iter().collect())
                }),
            ]
        })
    }

    proptest! {
        /// Canonicalization never fails for float-free values.
        #[test]
        fn never_fails_on_float_free_values(value in json_value_no_floats()) {
            prop_assert!(CanonicalBytes::new(&value).is_ok());
        }

        /// Same input always produces the same bytes.
        #[test]
        fn deterministic(value in json_value_no_floats()) {
            let a = CanonicalBytes::new(&value).unwrap();
            let b = CanonicalBytes::new(&value).unwrap();
            prop_assert_eq!(a.as_bytes(), b.as_bytes());
        }

        /// Output keys are sorted regardless of input insertion order.
        #[test]
        fn keys_sorted(keys in prop::collection::btree_set("[a-z]{1,8}", 2..6)) {
            let map: serde_json::Map<String, Value> = keys
                .iter()
                .enumerate()
                .map(|(i, k)| (k.clone(), serde_json::json!(i)))
                .collect();
            let cb = CanonicalBytes::new(&Value::Object(map)).unwrap();
            let parsed: serde_json::Map<String, Value> =
                serde_json::from_slice(cb.as_bytes()).unwrap();
            let output_keys: Vec<&String> = parsed.keys().collect();
            let mut sorted = output_keys.clone();
            sorted.sort();
            prop_assert_eq!(output_keys, sorted);
        }

        /// Any value containing a non-integer float is rejected.
        #[test]
        fn floats_always_rejected(f in any::<f64>().prop_filter("not integer", |f| {
            f.fract() != 0.0 && f.is_finite()
        })) {
            let value = serde_json::json!({"v": f});
            prop_assert!(CanonicalBytes::new(&value).is_err());
        }
    }
}
