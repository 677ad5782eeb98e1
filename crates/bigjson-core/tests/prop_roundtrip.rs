//! Property-based roundtrip tests.
//!
//! Uses `proptest` to generate random value trees and verify the codec's
//! contracts over them:
//!
//! - trees whose integers stay inside the safe range roundtrip to the exact
//!   same tree (`parse . stringify` is the identity),
//! - finite floats survive bit-for-bit (shortest-round-trip emission),
//! - integers past the safe range always emit as quoted exact digits, and
//!   parse back as strings of those digits,
//! - the emitted text is stable: a second trip through the codec is a no-op.
//!
//! Big integers are excluded from the tree-identity property on purpose:
//! their emission as strings is the documented boundary mapping, covered by
//! the dedicated digit-string properties instead.

use bigjson_core::{parse, stringify, BigInt, Object, Value, MAX_SAFE_INT};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Object keys: short identifier-ish strings.
fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9_]{0,12}").expect("valid regex")
}

/// String payloads, weighted toward the cases the escaper has to work for.
fn arb_string() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,24}",
        Just(String::new()),
        Just("line1\nline2".to_string()),
        Just("tab\there \"quoted\"".to_string()),
        Just("back\\slash and /slash".to_string()),
        Just("caf\u{e9} \u{4f60}\u{597d}".to_string()),
        Just("\u{1}\u{1f} control".to_string()),
        Just("emoji \u{1f600}".to_string()),
    ]
}

/// Integers inside the safe range, emitted as bare number literals.
fn arb_safe_int() -> impl Strategy<Value = Value> {
    (-MAX_SAFE_INT..=MAX_SAFE_INT).prop_map(|n| Value::Int(BigInt::from(n)))
}

/// Any finite float.
fn arb_float() -> impl Strategy<Value = Value> {
    any::<f64>()
        .prop_filter("must be finite", |f| f.is_finite())
        .prop_map(Value::Float)
}

fn arb_primitive() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        arb_safe_int(),
        arb_float(),
        arb_string().prop_map(Value::String),
    ]
}

/// Decimal digits guaranteed past the safe range (17+ digits).
fn arb_big_digits() -> impl Strategy<Value = String> {
    ("[1-9]", "[0-9]{16,38}").prop_map(|(head, tail)| format!("{head}{tail}"))
}

/// A value tree of bounded depth built from safe primitives.
fn arb_value_inner(depth: u32) -> BoxedStrategy<Value> {
    if depth == 0 {
        arb_primitive().boxed()
    } else {
        prop_oneof![
            4 => arb_primitive(),
            2 => prop::collection::vec((arb_key(), arb_value_inner(depth - 1)), 0..5)
                .prop_map(|pairs| {
                    Value::Object(pairs.into_iter().collect::<Object>())
                }),
            2 => prop::collection::vec(arb_value_inner(depth - 1), 0..5)
                .prop_map(Value::Array),
        ]
        .boxed()
    }
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_value_inner(3)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Safe trees roundtrip to the identical tree.
    #[test]
    fn parse_stringify_is_identity_on_safe_trees(v in arb_value()) {
        let text = stringify(&v).expect("stringify failed");
        let back = parse(&text).expect("reparse failed");
        prop_assert_eq!(back, v);
    }

    /// Finite floats survive bit-for-bit.
    #[test]
    fn floats_survive_bit_for_bit(f in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        let text = stringify(&Value::Float(f)).expect("stringify failed");
        match parse(&text).expect("reparse failed") {
            Value::Float(g) => prop_assert_eq!(g.to_bits(), f.to_bits()),
            other => prop_assert!(false, "expected float, got {:?}", other),
        }
    }

    /// Safe integers roundtrip as numbers equal to the input.
    #[test]
    fn safe_integers_roundtrip_as_numbers(n in -MAX_SAFE_INT..=MAX_SAFE_INT) {
        let text = stringify(&Value::Int(BigInt::from(n))).expect("stringify failed");
        prop_assert_eq!(&text, &n.to_string());
        let back = parse(&text).expect("reparse failed");
        prop_assert_eq!(back, Value::Int(BigInt::from(n)));
    }

    /// Integers past the safe range emit as quoted exact digits and parse
    /// back as strings of those digits.
    #[test]
    fn big_integers_emit_exact_digit_strings(
        neg in any::<bool>(),
        digits in arb_big_digits(),
    ) {
        let signed = if neg { format!("-{digits}") } else { digits };
        let v = parse(&signed).expect("parse failed");
        prop_assert_eq!(v.as_int().expect("must classify as int").to_string(), signed.clone());

        let out = stringify(&v).expect("stringify failed");
        prop_assert_eq!(&out, &format!("\"{signed}\""));

        let back = parse(&out).expect("reparse failed");
        prop_assert_eq!(back, Value::String(signed));
    }

    /// One trip through the codec canonicalizes: a second trip is a no-op,
    /// including for trees holding big integers.
    #[test]
    fn emitted_text_is_stable(
        v in arb_value(),
        digits in arb_big_digits(),
    ) {
        let tree = Value::Array(vec![v, Value::Int(digits.parse::<BigInt>().expect("valid digits"))]);
        let once = stringify(&tree).expect("stringify failed");
        let twice = stringify(&parse(&once).expect("reparse failed")).expect("re-stringify failed");
        prop_assert_eq!(once, twice);
    }
}
