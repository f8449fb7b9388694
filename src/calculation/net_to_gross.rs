//! Net-to-gross inversion by bisection.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::config::RateTable;
use crate::error::{EngineError, EngineResult};
use crate::models::SalaryInputs;

use super::calculate;

/// Maximum bisection iterations before giving up.
pub const BISECTION_ITERATIONS: u32 = 60;

/// Acceptable distance between the achieved and the target net, RSD.
pub const NET_TOLERANCE: Decimal = dec!(0.01);

/// Finds the base gross salary that produces the given net.
///
/// All other inputs (overtime, absences, deductions, allowances) are held
/// fixed from `inputs`; only `base_gross_salary` is searched. Net is
/// monotonically non-decreasing in the base salary, so bisection over
/// `[0, 2.5 × target]` converges for every realistic salary. When the true
/// gross lies outside the bracket — possible only for targets small enough
/// that minimum-base contributions dominate — the search exhausts its
/// iterations and reports [`EngineError::SolverDidNotConverge`] instead of
/// returning a wrong answer.
///
/// Negative targets are clamped to zero.
pub fn net_to_gross(
    target_net: Decimal,
    inputs: &SalaryInputs,
    rates: &RateTable,
) -> EngineResult<Decimal> {
    let target = target_net.max(Decimal::ZERO);
    let mut lo = Decimal::ZERO;
    let mut hi = target * dec!(2.5);

    for _ in 0..BISECTION_ITERATIONS {
        let mid = (lo + hi) / dec!(2);
        let candidate = SalaryInputs {
            base_gross_salary: mid,
            ..inputs.clone()
        };
        let net = calculate(&candidate, rates).net;

        if (net - target).abs() < NET_TOLERANCE {
            return Ok(mid);
        }
        if net < target {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Err(EngineError::SolverDidNotConverge {
        target_net: target,
        iterations: BISECTION_ITERATIONS,
    })
}
