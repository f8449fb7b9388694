//! Hourly-rate uplifts for overtime, night, weekend and holiday work.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::config::RateTable;
use crate::models::{SalaryInputs, TimeBreakdown};

/// The uplifted pay components (Labour Law art. 108, minimum +26%).
#[derive(Debug, Clone)]
pub struct UpliftsResult {
    /// Hourly rate derived from worked pay over worked hours.
    pub hour_rate: Decimal,
    /// Overtime pay.
    pub overtime_pay: Decimal,
    /// Night work pay.
    pub night_pay: Decimal,
    /// Weekend work pay.
    pub weekend_pay: Decimal,
    /// Public-holiday work pay.
    pub holiday_pay: Decimal,
}

/// Computes the four uplifted pay components.
///
/// Each is `hours × hour_rate × (1 + coefficient/100)`, where the hourly
/// rate comes from worked pay over worked hours (`worked_days × 8`). A
/// zero-worked-days month yields a zero hourly rate and zero uplifts.
pub fn calculate_uplifts(
    inputs: &SalaryInputs,
    worked_pay: Decimal,
    time: &TimeBreakdown,
    rates: &RateTable,
) -> UpliftsResult {
    let worked_hours = time.worked_days * dec!(8);
    let hour_rate = if worked_hours.is_zero() {
        Decimal::ZERO
    } else {
        worked_pay / worked_hours
    };

    let uplifted = |hours: Decimal, coef: Decimal| {
        hours * hour_rate * (Decimal::ONE + coef / dec!(100))
    };

    UpliftsResult {
        hour_rate,
        overtime_pay: uplifted(inputs.overtime_hours, rates.overtime_coef),
        night_pay: uplifted(inputs.night_hours, rates.night_coef),
        weekend_pay: uplifted(inputs.weekend_hours, rates.weekend_coef),
        holiday_pay: uplifted(inputs.holiday_hours, rates.holiday_coef),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_month() -> TimeBreakdown {
        TimeBreakdown {
            total_work_days: dec!(21),
            worked_days: dec!(21),
            public_holiday_days: Decimal::ZERO,
            sick_days: Decimal::ZERO,
            unpaid_leave_days: Decimal::ZERO,
        }
    }

    fn assert_close(actual: Decimal, expected: Decimal) {
        assert!(
            (actual - expected).abs() < dec!(0.01),
            "expected {expected}, got {actual}"
        );
    }

    /// UP-001: spec scenario — 10 overtime hours on a 100.000 base
    #[test]
    fn test_overtime_scenario() {
        let inputs = SalaryInputs {
            base_gross_salary: dec!(100000),
            overtime_hours: dec!(10),
            ..SalaryInputs::default()
        };
        let result = calculate_uplifts(
            &inputs,
            dec!(100000),
            &full_month(),
            &RateTable::statutory_2025(),
        );

        assert_close(result.hour_rate, dec!(595.24));
        assert_close(result.overtime_pay, dec!(7500.00));
        assert_eq!(result.night_pay, Decimal::ZERO);
    }

    /// UP-002: each uplift uses its own coefficient
    #[test]
    fn test_each_uplift_uses_own_coefficient() {
        let inputs = SalaryInputs {
            base_gross_salary: dec!(100000),
            night_hours: dec!(8),
            weekend_hours: dec!(8),
            ..SalaryInputs::default()
        };
        let mut rates = RateTable::statutory_2025();
        rates.weekend_coef = dec!(50);

        let result = calculate_uplifts(&inputs, dec!(100000), &full_month(), &rates);

        assert_close(result.night_pay, dec!(8) * result.hour_rate * dec!(1.26));
        assert_close(result.weekend_pay, dec!(8) * result.hour_rate * dec!(1.50));
    }

    /// UP-003: zero worked days guard
    #[test]
    fn test_zero_worked_days_guard() {
        let inputs = SalaryInputs {
            overtime_hours: dec!(10),
            ..SalaryInputs::default()
        };
        let time = TimeBreakdown {
            total_work_days: dec!(21),
            worked_days: Decimal::ZERO,
            public_holiday_days: Decimal::ZERO,
            sick_days: dec!(21),
            unpaid_leave_days: Decimal::ZERO,
        };
        let result = calculate_uplifts(
            &inputs,
            Decimal::ZERO,
            &time,
            &RateTable::statutory_2025(),
        );

        assert_eq!(result.hour_rate, Decimal::ZERO);
        assert_eq!(result.overtime_pay, Decimal::ZERO);
    }
}
