//! Compact JSON writer with the big-integer string fallback.
//!
//! Output policy: no inserted whitespace, UTF-8 pass-through for non-ASCII,
//! escapes only where JSON requires them (`"`, `\`, control bytes below
//! 0x20). Floats use shortest-round-trip formatting; integers past the safe
//! range are emitted as quoted digit strings.

use num_bigint::BigInt;

use crate::error::EncodeError;
use crate::number;
use crate::value::Value;
use crate::MAX_DEPTH;

/// Serialize a value tree to compact JSON.
///
/// Integers within the double safe range come out as number literals;
/// anything larger becomes a string literal holding the exact signed decimal
/// digits. Element and key order follow the tree exactly. Fails with an
/// [`EncodeError`] on NaN or infinite floats and on trees nested past
/// [`MAX_DEPTH`].
///
/// ```rust
/// use bigjson_core::{parse, stringify};
///
/// let doc = parse(r#"{"b":1,"a":12345678901234567890}"#).unwrap();
/// assert_eq!(
///     stringify(&doc).unwrap(),
///     r#"{"b":1,"a":"12345678901234567890"}"#
/// );
/// ```
pub fn stringify(value: &Value) -> Result<String, EncodeError> {
    let mut out = String::new();
    write_value(value, 0, &mut out)?;
    Ok(out)
}

fn write_value(value: &Value, depth: usize, out: &mut String) -> Result<(), EncodeError> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Int(i) => write_int(i, out),
        Value::Float(f) => write_float(*f, out)?,
        Value::String(s) => write_string(s, out),
        Value::Array(items) => {
            check_depth(depth)?;
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, depth + 1, out)?;
            }
            out.push(']');
        }
        Value::Object(object) => {
            check_depth(depth)?;
            out.push('{');
            for (i, (key, val)) in object.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(key, out);
                out.push(':');
                write_value(val, depth + 1, out)?;
            }
            out.push('}');
        }
    }
    Ok(())
}

fn check_depth(depth: usize) -> Result<(), EncodeError> {
    if depth >= MAX_DEPTH {
        return Err(EncodeError::TooDeep(MAX_DEPTH));
    }
    Ok(())
}

/// Number literal inside the safe range, quoted digit string outside it.
fn write_int(int: &BigInt, out: &mut String) {
    match number::as_safe_i64(int) {
        Some(n) => out.push_str(itoa::Buffer::new().format(n)),
        None => {
            out.push('"');
            out.push_str(&int.to_string());
            out.push('"');
        }
    }
}

/// Shortest decimal form that parses back to the identical bits.
fn write_float(f: f64, out: &mut String) -> Result<(), EncodeError> {
    if !f.is_finite() {
        return Err(EncodeError::NonFinite(f));
    }
    out.push_str(ryu::Buffer::new().format_finite(f));
    Ok(())
}

/// Quote and escape a string. Spans without escapes are copied whole.
fn write_string(s: &str, out: &mut String) {
    out.push('"');
    let mut run = 0;
    for (i, b) in s.bytes().enumerate() {
        if !matches!(b, 0x00..=0x1f | b'"' | b'\\') {
            continue;
        }
        out.push_str(&s[run..i]);
        match b {
            b'"' => out.push_str("\\\""),
            b'\\' => out.push_str("\\\\"),
            0x08 => out.push_str("\\b"),
            0x0c => out.push_str("\\f"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            other => {
                const HEX: &[u8; 16] = b"0123456789abcdef";
                out.push_str("\\u00");
                out.push(char::from(HEX[usize::from(other >> 4)]));
                out.push(char::from(HEX[usize::from(other & 0x0f)]));
            }
        }
        run = i + 1;
    }
    out.push_str(&s[run..]);
    out.push('"');
}
