//! Social-security contributions.
//!
//! Contributions on both sides are computed from the contribution base:
//! gross-1 clamped between the statutory monthly floor and ceiling. The
//! floor applies even when gross-1 is below it, and the ceiling even when
//! gross-1 is far above it.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::config::RateTable;

/// Employee-side contributions (19,90% total under the 2025 statute).
#[derive(Debug, Clone)]
pub struct EmployeeContributions {
    /// Pension and disability insurance (PIO).
    pub pension: Decimal,
    /// Health insurance.
    pub health: Decimal,
    /// Unemployment insurance.
    pub unemployment: Decimal,
    /// Sum of the three.
    pub total: Decimal,
}

/// Employer-side contributions (15,15% total under the 2025 statute).
#[derive(Debug, Clone)]
pub struct EmployerContributions {
    /// Pension and disability insurance (PIO).
    pub pension: Decimal,
    /// Health insurance.
    pub health: Decimal,
    /// Sum of the two.
    pub total: Decimal,
}

/// Clamps gross-1 to the statutory contribution-base bounds.
pub fn contribution_base(gross1: Decimal, rates: &RateTable) -> Decimal {
    gross1
        .min(rates.max_contribution_base)
        .max(rates.min_contribution_base)
}

/// Computes the employee-side contributions from the contribution base.
pub fn employee_contributions(base: Decimal, rates: &RateTable) -> EmployeeContributions {
    let hundred = dec!(100);
    let pension = base * rates.employee_pension_pct / hundred;
    let health = base * rates.employee_health_pct / hundred;
    let unemployment = base * rates.employee_unemployment_pct / hundred;
    EmployeeContributions {
        pension,
        health,
        unemployment,
        total: pension + health + unemployment,
    }
}

/// Computes the employer-side contributions from the contribution base.
pub fn employer_contributions(base: Decimal, rates: &RateTable) -> EmployerContributions {
    let hundred = dec!(100);
    let pension = base * rates.employer_pension_pct / hundred;
    let health = base * rates.employer_health_pct / hundred;
    EmployerContributions {
        pension,
        health,
        total: pension + health,
    }
}
