//! Non-salary allowances (meal, transport).

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::models::SalaryInputs;

/// The tax-exempt allowances entering total employer cost.
#[derive(Debug, Clone)]
pub struct AllowancesResult {
    /// Meal allowance: paid meal days × the daily rate.
    pub meal_allowance: Decimal,
    /// Transport reimbursement, capped at the tax-exempt monthly maximum.
    /// Cost above the cap is not reimbursed (the excess is not modeled as
    /// taxable income).
    pub transport_allowance: Decimal,
}

/// Computes the meal and transport allowances.
pub fn calculate_allowances(inputs: &SalaryInputs, rates: &RateTable) -> AllowancesResult {
    AllowancesResult {
        meal_allowance: inputs.paid_meal_days * rates.daily_meal_allowance,
        transport_allowance: inputs
            .monthly_transport_cost
            .min(rates.max_monthly_transport_allowance),
    }
}
