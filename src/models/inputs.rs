//! Salary input record.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::result::CalcWarning;

/// Statutory minimum seniority uplift per full year of service, percent.
pub const MIN_SENIORITY_PCT_PER_YEAR: Decimal = dec!(0.4);

/// Statutory minimum sick pay as a percentage of the regular daily rate
/// (employer-paid sick leave, first 30 days).
pub const MIN_SICK_PAY_PERCENT: Decimal = dec!(65);

/// Standard full-time monthly hours used when the input is zero or absent.
pub(crate) const DEFAULT_STANDARD_HOURS: Decimal = dec!(168);

/// Per-calculation, user-supplied salary inputs.
///
/// All fields are optional on the wire; missing fields take the defaults
/// from [`SalaryInputs::default`]. The engine never rejects out-of-range
/// values — [`SalaryInputs::sanitized`] clamps them and reports what it
/// changed as non-blocking warnings.
///
/// # Example
///
/// ```
/// use zarada_engine::models::SalaryInputs;
/// use rust_decimal_macros::dec;
///
/// let inputs = SalaryInputs {
///     base_gross_salary: dec!(100000),
///     overtime_hours: dec!(10),
///     ..SalaryInputs::default()
/// };
/// assert_eq!(inputs.standard_monthly_hours, dec!(168));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryInputs {
    /// Contracted base gross salary for the month, RSD.
    pub base_gross_salary: Decimal,
    /// Standard working hours in the month (21 days x 8h = 168).
    pub standard_monthly_hours: Decimal,
    /// Overtime hours worked.
    pub overtime_hours: Decimal,
    /// Night work hours (22:00-06:00).
    pub night_hours: Decimal,
    /// Weekend work hours.
    pub weekend_hours: Decimal,
    /// Public-holiday work hours.
    pub holiday_hours: Decimal,
    /// Fixed bonus amount, RSD.
    pub fixed_bonus: Decimal,
    /// Percentage bonus, computed off the base salary (not gross-1).
    pub bonus_percent: Decimal,
    /// Completed years of service ("minuli rad").
    pub years_of_service: u32,
    /// Seniority uplift per year of service, percent (statutory floor 0.4).
    pub seniority_pct_per_year: Decimal,
    /// Actual monthly commuting cost, RSD.
    pub monthly_transport_cost: Decimal,
    /// Working days for which the meal allowance is paid.
    pub paid_meal_days: Decimal,
    /// Days on employer-paid sick leave.
    pub sick_days: Decimal,
    /// Sick pay as a percentage of the daily rate (statutory floor 65).
    pub sick_pay_percent: Decimal,
    /// Non-worked public holiday days, paid at the full daily rate.
    pub public_holiday_days: Decimal,
    /// Unpaid leave days, deducted without replacement pay.
    pub unpaid_leave_days: Decimal,
    /// Fixed union dues, RSD.
    pub union_dues_fixed: Decimal,
    /// Union dues as a percentage of net-from-work.
    pub union_dues_percent_of_net: Decimal,
    /// Monthly loan repayment withheld from net, RSD.
    pub loan_repayment: Decimal,
    /// Court-ordered withholding, RSD.
    pub court_ordered_withholding: Decimal,
    /// Other deductions from net, RSD.
    pub other_deductions: Decimal,
}

impl Default for SalaryInputs {
    fn default() -> Self {
        Self {
            base_gross_salary: Decimal::ZERO,
            standard_monthly_hours: DEFAULT_STANDARD_HOURS,
            overtime_hours: Decimal::ZERO,
            night_hours: Decimal::ZERO,
            weekend_hours: Decimal::ZERO,
            holiday_hours: Decimal::ZERO,
            fixed_bonus: Decimal::ZERO,
            bonus_percent: Decimal::ZERO,
            years_of_service: 0,
            seniority_pct_per_year: MIN_SENIORITY_PCT_PER_YEAR,
            monthly_transport_cost: Decimal::ZERO,
            paid_meal_days: Decimal::ZERO,
            sick_days: Decimal::ZERO,
            sick_pay_percent: MIN_SICK_PAY_PERCENT,
            public_holiday_days: Decimal::ZERO,
            unpaid_leave_days: Decimal::ZERO,
            union_dues_fixed: Decimal::ZERO,
            union_dues_percent_of_net: Decimal::ZERO,
            loan_repayment: Decimal::ZERO,
            court_ordered_withholding: Decimal::ZERO,
            other_deductions: Decimal::ZERO,
        }
    }
}

impl SalaryInputs {
    /// Returns a copy with out-of-range values clamped to their nearest
    /// valid bound, plus a warning for every value that was changed.
    ///
    /// Negative amounts and hour/day counts clamp to zero. Zero standard
    /// hours fall back to 168. The seniority and sick-pay percentages are
    /// raised to their statutory floors; a warning is emitted only when the
    /// floor actually affects the calculation (non-zero years of service or
    /// sick days).
    pub fn sanitized(&self) -> (Self, Vec<CalcWarning>) {
        let mut out = self.clone();
        let mut warnings = Vec::new();

        let mut clamp_non_negative = |field: &str, value: &mut Decimal| {
            if *value < Decimal::ZERO {
                warnings.push(CalcWarning::new(
                    "NEGATIVE_INPUT_CLAMPED",
                    format!("{field} was negative ({value}); clamped to 0"),
                ));
                *value = Decimal::ZERO;
            }
        };

        clamp_non_negative("base_gross_salary", &mut out.base_gross_salary);
        clamp_non_negative("overtime_hours", &mut out.overtime_hours);
        clamp_non_negative("night_hours", &mut out.night_hours);
        clamp_non_negative("weekend_hours", &mut out.weekend_hours);
        clamp_non_negative("holiday_hours", &mut out.holiday_hours);
        clamp_non_negative("fixed_bonus", &mut out.fixed_bonus);
        clamp_non_negative("bonus_percent", &mut out.bonus_percent);
        clamp_non_negative("monthly_transport_cost", &mut out.monthly_transport_cost);
        clamp_non_negative("paid_meal_days", &mut out.paid_meal_days);
        clamp_non_negative("sick_days", &mut out.sick_days);
        clamp_non_negative("public_holiday_days", &mut out.public_holiday_days);
        clamp_non_negative("unpaid_leave_days", &mut out.unpaid_leave_days);
        clamp_non_negative("union_dues_fixed", &mut out.union_dues_fixed);
        clamp_non_negative(
            "union_dues_percent_of_net",
            &mut out.union_dues_percent_of_net,
        );
        clamp_non_negative("loan_repayment", &mut out.loan_repayment);
        clamp_non_negative(
            "court_ordered_withholding",
            &mut out.court_ordered_withholding,
        );
        clamp_non_negative("other_deductions", &mut out.other_deductions);

        if out.standard_monthly_hours <= Decimal::ZERO {
            warnings.push(CalcWarning::new(
                "STANDARD_HOURS_DEFAULTED",
                format!(
                    "standard_monthly_hours was {}; defaulted to {}",
                    out.standard_monthly_hours, DEFAULT_STANDARD_HOURS
                ),
            ));
            out.standard_monthly_hours = DEFAULT_STANDARD_HOURS;
        }

        if out.seniority_pct_per_year < MIN_SENIORITY_PCT_PER_YEAR {
            if out.years_of_service > 0 {
                warnings.push(CalcWarning::new(
                    "SENIORITY_PCT_RAISED",
                    format!(
                        "seniority_pct_per_year {} is below the statutory minimum {}; raised",
                        out.seniority_pct_per_year, MIN_SENIORITY_PCT_PER_YEAR
                    ),
                ));
            }
            out.seniority_pct_per_year = MIN_SENIORITY_PCT_PER_YEAR;
        }

        if out.sick_pay_percent < MIN_SICK_PAY_PERCENT {
            if out.sick_days > Decimal::ZERO {
                warnings.push(CalcWarning::new(
                    "SICK_PAY_PCT_RAISED",
                    format!(
                        "sick_pay_percent {} is below the statutory minimum {}; raised",
                        out.sick_pay_percent, MIN_SICK_PAY_PERCENT
                    ),
                ));
            }
            out.sick_pay_percent = MIN_SICK_PAY_PERCENT;
        }

        (out, warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_standard_hours_and_statutory_floors() {
        let inputs = SalaryInputs::default();
        assert_eq!(inputs.standard_monthly_hours, dec!(168));
        assert_eq!(inputs.seniority_pct_per_year, dec!(0.4));
        assert_eq!(inputs.sick_pay_percent, dec!(65));
        assert_eq!(inputs.base_gross_salary, Decimal::ZERO);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let json = r#"{"base_gross_salary": "100000"}"#;
        let inputs: SalaryInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.base_gross_salary, dec!(100000));
        assert_eq!(inputs.standard_monthly_hours, dec!(168));
        assert_eq!(inputs.sick_pay_percent, dec!(65));
    }

    #[test]
    fn test_sanitized_clamps_negative_hours() {
        let inputs = SalaryInputs {
            overtime_hours: dec!(-5),
            ..SalaryInputs::default()
        };
        let (clean, warnings) = inputs.sanitized();
        assert_eq!(clean.overtime_hours, Decimal::ZERO);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, "NEGATIVE_INPUT_CLAMPED");
        assert!(warnings[0].message.contains("overtime_hours"));
    }

    #[test]
    fn test_sanitized_defaults_zero_standard_hours() {
        let inputs = SalaryInputs {
            standard_monthly_hours: Decimal::ZERO,
            ..SalaryInputs::default()
        };
        let (clean, warnings) = inputs.sanitized();
        assert_eq!(clean.standard_monthly_hours, dec!(168));
        assert!(warnings.iter().any(|w| w.code == "STANDARD_HOURS_DEFAULTED"));
    }

    #[test]
    fn test_sanitized_raises_sick_pay_percent_with_warning() {
        let inputs = SalaryInputs {
            sick_days: dec!(3),
            sick_pay_percent: dec!(50),
            ..SalaryInputs::default()
        };
        let (clean, warnings) = inputs.sanitized();
        assert_eq!(clean.sick_pay_percent, dec!(65));
        assert!(warnings.iter().any(|w| w.code == "SICK_PAY_PCT_RAISED"));
    }

    #[test]
    fn test_sanitized_raises_sick_pay_percent_silently_without_sick_days() {
        let inputs = SalaryInputs {
            sick_pay_percent: dec!(50),
            ..SalaryInputs::default()
        };
        let (clean, warnings) = inputs.sanitized();
        assert_eq!(clean.sick_pay_percent, dec!(65));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_sanitized_raises_seniority_pct_with_warning() {
        let inputs = SalaryInputs {
            years_of_service: 10,
            seniority_pct_per_year: dec!(0.1),
            ..SalaryInputs::default()
        };
        let (clean, warnings) = inputs.sanitized();
        assert_eq!(clean.seniority_pct_per_year, dec!(0.4));
        assert!(warnings.iter().any(|w| w.code == "SENIORITY_PCT_RAISED"));
    }

    #[test]
    fn test_sanitized_clean_inputs_produce_no_warnings() {
        let inputs = SalaryInputs {
            base_gross_salary: dec!(100000),
            ..SalaryInputs::default()
        };
        let (clean, warnings) = inputs.sanitized();
        assert_eq!(clean, inputs);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let inputs = SalaryInputs {
            base_gross_salary: dec!(85000),
            overtime_hours: dec!(4),
            years_of_service: 7,
            union_dues_fixed: dec!(500),
            ..SalaryInputs::default()
        };
        let json = serde_json::to_string(&inputs).unwrap();
        let back: SalaryInputs = serde_json::from_str(&json).unwrap();
        assert_eq!(back, inputs);
    }
}
