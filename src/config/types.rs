//! Rate table types.
//!
//! All percentage fields use the already-scaled convention: `14` means 14%,
//! never `0.14`. Uplift coefficients are percent uplifts over the base
//! hourly rate (`26` means time-and-26%, the statutory minimum).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Statutory minimum uplift coefficient for overtime, night, weekend and
/// public-holiday work (Labour Law art. 108).
pub(crate) const MIN_UPLIFT_COEF: Decimal = dec!(26);

/// A complete table of statute-driven payroll constants.
///
/// Immutable per calculation; callers pass it explicitly into every engine
/// call rather than reading any global state, which keeps calculations
/// deterministic and thread-safe.
///
/// # Example
///
/// ```
/// use zarada_engine::config::RateTable;
///
/// let rates = RateTable::statutory_2025();
/// assert!(rates.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    /// Income tax rate in percent (10 = 10%).
    pub tax_rate: Decimal,
    /// Fixed amount subtracted from gross-1 before computing income tax, RSD.
    pub non_taxable_threshold: Decimal,
    /// Employee pension and disability (PIO) contribution, percent.
    pub employee_pension_pct: Decimal,
    /// Employee health insurance contribution, percent.
    pub employee_health_pct: Decimal,
    /// Employee unemployment insurance contribution, percent.
    pub employee_unemployment_pct: Decimal,
    /// Employer pension and disability (PIO) contribution, percent.
    pub employer_pension_pct: Decimal,
    /// Employer health insurance contribution, percent.
    pub employer_health_pct: Decimal,
    /// Overtime uplift, percent over the base hourly rate (minimum 26).
    pub overtime_coef: Decimal,
    /// Night work (22:00-06:00) uplift, percent (minimum 26).
    pub night_coef: Decimal,
    /// Weekend work uplift, percent (minimum 26).
    pub weekend_coef: Decimal,
    /// Public holiday work uplift, percent (minimum 26).
    pub holiday_coef: Decimal,
    /// Statutory floor of the monthly contribution base, RSD.
    pub min_contribution_base: Decimal,
    /// Statutory ceiling of the monthly contribution base, RSD.
    pub max_contribution_base: Decimal,
    /// Tax-exempt meal allowance per paid working day, RSD.
    pub daily_meal_allowance: Decimal,
    /// Tax-exempt monthly transport reimbursement cap, RSD.
    pub max_monthly_transport_allowance: Decimal,
    /// Statutory minimum monthly gross wage for full-time work, RSD.
    pub minimum_wage: Decimal,
}

impl RateTable {
    /// The statutory rate table effective 1 February 2025.
    pub fn statutory_2025() -> Self {
        Self {
            tax_rate: dec!(10),
            non_taxable_threshold: dec!(28423),
            employee_pension_pct: dec!(14),
            employee_health_pct: dec!(5.15),
            employee_unemployment_pct: dec!(0.75),
            employer_pension_pct: dec!(10),
            employer_health_pct: dec!(5.15),
            overtime_coef: dec!(26),
            night_coef: dec!(26),
            weekend_coef: dec!(26),
            holiday_coef: dec!(26),
            min_contribution_base: dec!(45950),
            max_contribution_base: dec!(656425),
            daily_meal_allowance: dec!(1490),
            max_monthly_transport_allowance: dec!(5630),
            minimum_wage: dec!(73274),
        }
    }

    /// The statutory rate table effective 1 February 2026.
    ///
    /// Identical to [`RateTable::statutory_2025`] except for the raised
    /// non-taxable threshold (34.221 RSD).
    pub fn statutory_2026() -> Self {
        Self {
            non_taxable_threshold: dec!(34221),
            ..Self::statutory_2025()
        }
    }

    /// Checks the statutory invariants of the table.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRateTable`] if any percentage field is
    /// negative, any uplift coefficient is below the statutory 26% minimum,
    /// or the contribution-base floor exceeds the ceiling.
    pub fn validate(&self) -> EngineResult<()> {
        let percentages = [
            ("tax_rate", self.tax_rate),
            ("employee_pension_pct", self.employee_pension_pct),
            ("employee_health_pct", self.employee_health_pct),
            ("employee_unemployment_pct", self.employee_unemployment_pct),
            ("employer_pension_pct", self.employer_pension_pct),
            ("employer_health_pct", self.employer_health_pct),
        ];
        for (field, value) in percentages {
            if value < Decimal::ZERO {
                return Err(EngineError::InvalidRateTable {
                    field: field.to_string(),
                    message: format!("must not be negative, got {value}"),
                });
            }
        }

        let coefficients = [
            ("overtime_coef", self.overtime_coef),
            ("night_coef", self.night_coef),
            ("weekend_coef", self.weekend_coef),
            ("holiday_coef", self.holiday_coef),
        ];
        for (field, value) in coefficients {
            if value < MIN_UPLIFT_COEF {
                return Err(EngineError::InvalidRateTable {
                    field: field.to_string(),
                    message: format!("below statutory minimum of 26, got {value}"),
                });
            }
        }

        if self.min_contribution_base > self.max_contribution_base {
            return Err(EngineError::InvalidRateTable {
                field: "min_contribution_base".to_string(),
                message: format!(
                    "{} exceeds max_contribution_base {}",
                    self.min_contribution_base, self.max_contribution_base
                ),
            });
        }

        Ok(())
    }
}

/// A rate table together with the date from which it is effective.
///
/// Loaded from one YAML file under `rates/` (e.g. `rates/2025-02-01.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct RateConfig {
    /// The date from which this table applies.
    pub effective_date: NaiveDate,
    /// The rate table itself.
    pub rates: RateTable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statutory_2025_is_valid() {
        assert!(RateTable::statutory_2025().validate().is_ok());
    }

    #[test]
    fn test_statutory_2026_raises_threshold_only() {
        let r25 = RateTable::statutory_2025();
        let r26 = RateTable::statutory_2026();
        assert_eq!(r26.non_taxable_threshold, dec!(34221));
        assert_eq!(r26.tax_rate, r25.tax_rate);
        assert_eq!(r26.min_contribution_base, r25.min_contribution_base);
        assert!(r26.validate().is_ok());
    }

    #[test]
    fn test_negative_percentage_rejected() {
        let mut rates = RateTable::statutory_2025();
        rates.employee_pension_pct = dec!(-1);
        match rates.validate().unwrap_err() {
            EngineError::InvalidRateTable { field, .. } => {
                assert_eq!(field, "employee_pension_pct");
            }
            other => panic!("Expected InvalidRateTable, got {:?}", other),
        }
    }

    #[test]
    fn test_coefficient_below_statutory_minimum_rejected() {
        let mut rates = RateTable::statutory_2025();
        rates.night_coef = dec!(20);
        match rates.validate().unwrap_err() {
            EngineError::InvalidRateTable { field, message } => {
                assert_eq!(field, "night_coef");
                assert!(message.contains("26"));
            }
            other => panic!("Expected InvalidRateTable, got {:?}", other),
        }
    }

    #[test]
    fn test_inverted_contribution_bounds_rejected() {
        let mut rates = RateTable::statutory_2025();
        rates.min_contribution_base = dec!(700000);
        match rates.validate().unwrap_err() {
            EngineError::InvalidRateTable { field, .. } => {
                assert_eq!(field, "min_contribution_base");
            }
            other => panic!("Expected InvalidRateTable, got {:?}", other),
        }
    }

    #[test]
    fn test_rate_config_deserializes_from_yaml() {
        let yaml = r#"
effective_date: 2025-02-01
rates:
  tax_rate: "10"
  non_taxable_threshold: "28423"
  employee_pension_pct: "14"
  employee_health_pct: "5.15"
  employee_unemployment_pct: "0.75"
  employer_pension_pct: "10"
  employer_health_pct: "5.15"
  overtime_coef: "26"
  night_coef: "26"
  weekend_coef: "26"
  holiday_coef: "26"
  min_contribution_base: "45950"
  max_contribution_base: "656425"
  daily_meal_allowance: "1490"
  max_monthly_transport_allowance: "5630"
  minimum_wage: "73274"
"#;
        let config: RateConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            config.effective_date,
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
        );
        assert_eq!(config.rates, RateTable::statutory_2025());
    }
}
