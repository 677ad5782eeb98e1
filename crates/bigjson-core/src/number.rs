//! Number classification: integer-versus-float on the parse path and
//! number-versus-string emission on the serialize path.

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::error::SyntaxError;
use crate::lexer::NumberLiteral;
use crate::value::Value;

/// Largest integer magnitude an IEEE-754 double represents exactly: 2^53 - 1.
///
/// Integers at or below this magnitude are emitted as JSON number literals;
/// anything larger falls back to a decimal-digit string so that consumers
/// reading numbers into doubles never see a rounded value.
pub const MAX_SAFE_INT: i64 = (1 << 53) - 1;

/// Decide the value variant for a numeric token.
///
/// A fraction or exponent part means standard decimal-to-double conversion,
/// with IEEE-754 rounding (and overflow to infinity) accepted. A pure
/// integer token becomes an exact [`BigInt`] at any magnitude.
pub(crate) fn classify(lit: NumberLiteral<'_>, offset: usize) -> Result<Value, SyntaxError> {
    if lit.has_fraction || lit.has_exponent {
        let f = lit
            .raw
            .parse::<f64>()
            .map_err(|_| malformed(lit.raw, offset))?;
        return Ok(Value::Float(f));
    }
    let int = lit
        .raw
        .parse::<BigInt>()
        .map_err(|_| malformed(lit.raw, offset))?;
    Ok(Value::Int(int))
}

fn malformed(raw: &str, offset: usize) -> SyntaxError {
    SyntaxError::new(offset, format!("malformed number '{raw}'"))
}

/// An integer's `i64` value when its magnitude is within the safe range.
/// `None` means emission must fall back to a digit string.
pub(crate) fn as_safe_i64(int: &BigInt) -> Option<i64> {
    let n = int.to_i64()?;
    (-MAX_SAFE_INT..=MAX_SAFE_INT).contains(&n).then_some(n)
}
