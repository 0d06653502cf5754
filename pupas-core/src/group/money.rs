//! Money calculation utilities using rust_decimal for precision
//!
//! Prices are stored as `f64` in the models. All sums, tip amounts and tip
//! shares are computed as `Decimal`, then converted back for output.

use rust_decimal::prelude::*;

/// Rounding strategy for displayed monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_money(value).to_f64().unwrap_or_default()
}

/// Convert Decimal back to f64 without rounding
///
/// Used for tip shares, whose sum must match the order total.
#[inline]
pub fn to_f64_exact(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Round to cents, midpoint away from zero
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// `quantity × unit_price`
pub fn line_total(quantity: i32, unit_price: f64) -> Decimal {
    Decimal::from(quantity) * to_decimal(unit_price)
}

/// Compare two monetary values for equality (within 0.01 tolerance)
pub fn money_eq(a: f64, b: f64) -> bool {
    let diff = (to_decimal(a) - to_decimal(b)).abs();
    diff < MONEY_TOLERANCE
}

/// Format as USD for display, e.g. `$5.50`
pub fn format_usd(value: Decimal) -> String {
    format!("${:.2}", round_money(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_decimal_precision() {
        // Classic floating point problem: 0.1 + 0.2 != 0.3
        let sum_f64 = 0.1_f64 + 0.2_f64;
        assert_ne!(sum_f64, 0.3);

        let sum_dec = to_decimal(0.1) + to_decimal(0.2);
        assert_eq!(to_f64(sum_dec), 0.3);
    }

    #[test]
    fn test_line_total() {
        assert_eq!(to_f64(line_total(3, 0.35)), 1.05);
        assert_eq!(line_total(0, 1.5), Decimal::ZERO);
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(round_money(Decimal::new(1005, 3)), Decimal::new(101, 2));
        assert_eq!(format_usd(Decimal::new(55, 1)), "$5.50");
    }

    #[test]
    fn test_money_eq() {
        assert!(money_eq(5.5, 5.505));
        assert!(!money_eq(5.5, 5.52));
    }
}
