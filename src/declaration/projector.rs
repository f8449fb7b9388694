//! Projection of a calculation into declaration fields.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::{CalculationResult, EmployeeMeta, EmployerMeta, Period};

/// Placeholder PIB used when the employer's tax number is not supplied.
const PIB_PLACEHOLDER: &str = "000000000";

/// Placeholder JMBG used when the employee's citizen number is missing.
const JMBG_PLACEHOLDER: &str = "0000000000000";

/// The field set of one employee row in the monthly PPP-PD filing.
///
/// Monetary fields are rounded to 2 decimal places, half away from zero,
/// at projection time; the rest of the engine keeps full precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeclarationFields {
    /// Filing employer's tax identification number.
    pub filer_pib: String,
    /// Filing employer's registered name.
    pub filer_name: String,
    /// Accounting period, `YYYY-MM`.
    pub period: String,
    /// Income recipient's unique citizen number.
    pub recipient_jmbg: String,
    /// Income recipient's full name.
    pub recipient_name: String,
    /// Calendar days compensated: worked, sick and public-holiday days.
    /// Unpaid leave days are not compensated and are excluded.
    pub calendar_days: Decimal,
    /// Effective hours: worked days × 8 plus overtime hours.
    pub effective_hours: Decimal,
    /// Gross salary for the period (gross-1).
    pub gross: Decimal,
    /// Taxable base after the non-taxable threshold.
    pub tax_base: Decimal,
    /// Withheld income tax.
    pub tax: Decimal,
    /// Contribution base the contributions below were computed from.
    pub contribution_base: Decimal,
    /// Employee pension and disability contribution.
    pub pension_contribution: Decimal,
    /// Employee health insurance contribution.
    pub health_contribution: Decimal,
    /// Employee unemployment insurance contribution.
    pub unemployment_contribution: Decimal,
}

fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Projects a calculation result into the declaration field set.
///
/// `overtime_hours` must be the (sanitized) overtime hour count the result
/// was computed with; it enters the effective-hours figure but no monetary
/// field.
pub fn project(
    result: &CalculationResult,
    overtime_hours: Decimal,
    employee: &EmployeeMeta,
    employer: &EmployerMeta,
    period: Period,
) -> DeclarationFields {
    DeclarationFields {
        filer_pib: employer
            .pib
            .clone()
            .unwrap_or_else(|| PIB_PLACEHOLDER.to_string()),
        filer_name: employer.name.clone(),
        period: period.as_declaration_period(),
        recipient_jmbg: employee
            .jmbg
            .clone()
            .unwrap_or_else(|| JMBG_PLACEHOLDER.to_string()),
        recipient_name: employee.name.clone(),
        calendar_days: result.time.worked_days
            + result.time.sick_days
            + result.time.public_holiday_days,
        effective_hours: result.time.worked_days * Decimal::from(8) + overtime_hours,
        gross: round2(result.gross1),
        tax_base: round2(result.tax_base),
        tax: round2(result.tax),
        contribution_base: round2(result.contribution_base),
        pension_contribution: round2(result.employee_pension),
        health_contribution: round2(result.employee_health),
        unemployment_contribution: round2(result.employee_unemployment),
    }
}
