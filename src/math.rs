// src/math.rs
use num_bigint::BigInt;
use num_rational::BigRational;

use crate::shared::utils::{floor_to_integer, pow10};

/// Denominator for basis-point percentages
pub const BASIS_POINTS: u32 = 10_000;

/// Raw gas figures from the quoting service are scaled by this to native units
pub const GAS_UNIT_SCALE_EXP: u32 = 9;

/// Convert a percentage ("0.5" meaning 0.5%) to basis points.
///
/// Truncates towards negative infinity: 0.555% is 55 bps, not 56.
pub fn slippage_tolerance_bps(percentage: &BigRational) -> BigInt {
    floor_to_integer(&(percentage * BigRational::from_integer(BigInt::from(100u8))))
}

/// Calculate minimum output amount with slippage protection.
///
/// `slippage_bps` must be within `0..=BASIS_POINTS`; the product is floored.
pub fn calculate_min_out(amount_out: &BigInt, slippage_bps: u32) -> BigInt {
    let keep = BigInt::from(BASIS_POINTS.saturating_sub(slippage_bps));
    let scaled = BigRational::new(amount_out * keep, BigInt::from(BASIS_POINTS));
    floor_to_integer(&scaled)
}

/// Raw native-currency units for a gas figure reported by the quoting service
pub fn gas_spent_to_native_raw(gas_spent: &BigRational) -> BigInt {
    floor_to_integer(&(gas_spent * BigRational::from_integer(pow10(GAS_UNIT_SCALE_EXP))))
}

/// Value of `native_raw` smallest units of a `decimals`-precision currency at `unit_price`
pub fn native_value(native_raw: &BigInt, decimals: u8, unit_price: &BigRational) -> BigRational {
    BigRational::new(native_raw.clone(), pow10(decimals as u32)) * unit_price
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::utils::parse_decimal;

    #[test]
    fn test_slippage_tolerance_bps() {
        assert_eq!(slippage_tolerance_bps(&parse_decimal("0.5").unwrap()), BigInt::from(50));
        assert_eq!(slippage_tolerance_bps(&parse_decimal("0.555").unwrap()), BigInt::from(55));
        assert_eq!(slippage_tolerance_bps(&parse_decimal("0.29").unwrap()), BigInt::from(29));
        assert_eq!(slippage_tolerance_bps(&parse_decimal("100").unwrap()), BigInt::from(10_000));
    }

    #[test]
    fn test_calculate_min_out() {
        let min_out = calculate_min_out(&BigInt::from(1_000_000), 50); // 0.5% slippage
        assert_eq!(min_out, BigInt::from(995_000));

        let min_out = calculate_min_out(&BigInt::from(999), 100); // 1% slippage, floored
        assert_eq!(min_out, BigInt::from(989));

        assert_eq!(calculate_min_out(&BigInt::from(1234), 0), BigInt::from(1234));
        assert_eq!(calculate_min_out(&BigInt::from(1234), BASIS_POINTS), BigInt::from(0));
    }

    #[test]
    fn test_min_out_non_increasing_in_slippage() {
        let amount_out = BigInt::from(987_654_321u64);
        let mut previous = calculate_min_out(&amount_out, 0);
        for bps in 1..=BASIS_POINTS {
            let current = calculate_min_out(&amount_out, bps);
            assert!(current <= previous, "bps {} raised min out", bps);
            previous = current;
        }
    }

    #[test]
    fn test_gas_value() {
        // 0.002 "gwei-scaled" units -> 2_000_000 wei
        let raw = gas_spent_to_native_raw(&parse_decimal("0.002").unwrap());
        assert_eq!(raw, BigInt::from(2_000_000));

        // 21000 * 1e9 wei = 0.000021 ETH at 2000 = 0.042
        let raw = gas_spent_to_native_raw(&parse_decimal("21000").unwrap());
        let value = native_value(&raw, 18, &parse_decimal("2000").unwrap());
        assert_eq!(value, parse_decimal("0.042").unwrap());
    }
}
