//! Income tax on salary.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::config::RateTable;

/// The result of the income tax calculation.
#[derive(Debug, Clone)]
pub struct TaxResult {
    /// Taxable base: gross-1 minus the non-taxable threshold, floored at 0.
    pub tax_base: Decimal,
    /// Income tax on the taxable base.
    pub tax: Decimal,
}

/// Computes income tax from gross-1.
///
/// The non-taxable threshold is subtracted before applying the tax rate;
/// salaries at or below the threshold pay no tax.
pub fn calculate_tax(gross1: Decimal, rates: &RateTable) -> TaxResult {
    let tax_base = (gross1 - rates.non_taxable_threshold).max(Decimal::ZERO);
    TaxResult {
        tax_base,
        tax: tax_base * rates.tax_rate / dec!(100),
    }
}
