//! Seniority pay ("minuli rad").

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// The result of the seniority uplift calculation.
#[derive(Debug, Clone)]
pub struct SeniorityResult {
    /// The uplift rate, already scaled (0.04 = 4%).
    pub rate: Decimal,
    /// The uplift amount in RSD.
    pub amount: Decimal,
}

/// Computes the statutory seniority uplift.
///
/// The uplift is applied to *worked* pay, not the base salary — seniority
/// follows actual days worked, so absences proportionally reduce it.
pub fn calculate_seniority(
    worked_pay: Decimal,
    years_of_service: u32,
    seniority_pct_per_year: Decimal,
) -> SeniorityResult {
    let rate = Decimal::from(years_of_service) * seniority_pct_per_year / dec!(100);
    SeniorityResult {
        rate,
        amount: worked_pay * rate,
    }
}
