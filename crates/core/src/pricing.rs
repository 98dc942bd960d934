//! Pricing

use rust_decimal::Decimal;

/// Number of decimal places between minor and display units.
pub const MINOR_UNIT_SCALE: u32 = 2;

/// Convert a total in minor units into its display value.
///
/// This is the single conversion point: all arithmetic before it stays in integer minor units.
pub fn to_display(total_minor: i64) -> Decimal {
    Decimal::new(total_minor, MINOR_UNIT_SCALE)
}
