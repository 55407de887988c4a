//! Utility functions and helpers

use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::{BigInt, Sign};
use num_rational::BigRational;
use num_traits::Zero;

/// Largest decimal exponent accepted from text input, either sign
pub const MAX_DECIMAL_EXPONENT: i64 = 256;

/// 10^exp as a big integer
pub fn pow10(exp: u32) -> BigInt {
    num_traits::pow(BigInt::from(10u8), exp as usize)
}

/// Parse decimal text ("0.5", "-12", "1.5e-7") into an exact rational.
///
/// JSON numbers are rendered through this as well so that fractional values
/// never pass through an `f64`. Values whose scale falls outside
/// `MAX_DECIMAL_EXPONENT` are rejected.
pub fn parse_decimal(input: &str) -> Option<BigRational> {
    let decimal = BigDecimal::from_str(input.trim()).ok()?;
    let (digits, scale) = decimal.as_bigint_and_exponent();
    if scale.unsigned_abs() > MAX_DECIMAL_EXPONENT as u64 {
        return None;
    }

    let value = if scale >= 0 {
        BigRational::new(digits, pow10(scale as u32))
    } else {
        BigRational::from_integer(digits * pow10(scale.unsigned_abs() as u32))
    };
    Some(value)
}

/// Format a rational with exactly `places` decimals, rounding half away from zero.
pub fn to_fixed(value: &BigRational, places: u32) -> String {
    // One extra digit, truncated, carries everything HalfUp needs
    let guard = places as i64 + 1;
    let scaled = value * BigRational::from_integer(pow10(guard as u32));
    let truncated = BigDecimal::new(scaled.trunc().to_integer(), guard);
    let rounded = truncated.with_scale_round(places as i64, RoundingMode::HalfUp);
    if rounded.is_zero() {
        return BigDecimal::new(BigInt::zero(), places as i64).to_plain_string();
    }
    rounded.to_plain_string()
}

/// Floor of a rational, towards negative infinity
pub fn floor_to_integer(value: &BigRational) -> BigInt {
    value.floor().to_integer()
}

/// Lowercase, `0x`-prefixed, 20-byte hex address or `None`
pub fn normalize_address(address: &str) -> Option<String> {
    let trimmed = address.trim();
    let hex_part = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))?;
    let bytes = hex::decode(hex_part).ok()?;
    if bytes.len() != 20 {
        return None;
    }
    Some(format!("0x{}", hex::encode(bytes)))
}

/// `true` when the rational is a whole number >= 0
pub fn is_non_negative_integer(value: &BigRational) -> bool {
    value.is_integer() && value.numer().sign() != Sign::Minus
}

/// Ratio `numer / denom` or `None` for a zero denominator
pub fn ratio(numer: &BigInt, denom: &BigInt) -> Option<BigRational> {
    if denom.is_zero() {
        return None;
    }
    Some(BigRational::new(numer.clone(), denom.clone()))
}
