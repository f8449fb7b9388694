//! Deductions from net pay.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::SalaryInputs;

/// The result of the deductions calculation.
#[derive(Debug, Clone)]
pub struct DeductionsResult {
    /// Union dues: the fixed part plus the percentage of net-from-work.
    pub union_dues: Decimal,
    /// Sum of all deductions.
    pub total: Decimal,
}

/// Computes all deductions withheld from net pay.
///
/// The percentage part of union dues is computed off net-from-work (net
/// before sick pay is added back), matching how dues are contracted. The
/// caller applies the zero floor on final net — deductions themselves are
/// never reduced here.
pub fn calculate_deductions(inputs: &SalaryInputs, net_from_work: Decimal) -> DeductionsResult {
    let union_dues =
        inputs.union_dues_fixed + net_from_work * inputs.union_dues_percent_of_net / dec!(100);
    DeductionsResult {
        union_dues,
        total: union_dues
            + inputs.loan_repayment
            + inputs.court_ordered_withholding
            + inputs.other_deductions,
    }
}
