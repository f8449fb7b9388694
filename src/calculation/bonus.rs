//! Bonus calculation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Computes the total bonus amount.
///
/// The percentage bonus is always computed off the *base* salary, never
/// gross-1 — otherwise the bonus would compound with the uplifts.
pub fn calculate_bonus(
    fixed_bonus: Decimal,
    bonus_percent: Decimal,
    base_gross_salary: Decimal,
) -> Decimal {
    fixed_bonus + base_gross_salary * bonus_percent / dec!(100)
}
