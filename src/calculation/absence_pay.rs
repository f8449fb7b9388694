//! Daily-rate pay for worked days and absences.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::TimeBreakdown;

/// Pay components derived from the daily rate and the day breakdown.
#[derive(Debug, Clone)]
pub struct AbsencePayResult {
    /// Base salary per working day of the period.
    pub daily_rate: Decimal,
    /// Pay for days actually worked.
    pub worked_pay: Decimal,
    /// Pay for non-worked public holidays, at the full daily rate —
    /// holidays never reduce pay.
    pub public_holiday_pay: Decimal,
    /// Employer-paid sick pay at the given percentage of the daily rate.
    pub sick_pay: Decimal,
    /// Amount lost to unpaid leave days (pure subtraction, no replacement).
    pub unpaid_deduction: Decimal,
}

/// Computes daily-rate pay for worked days and each absence category.
///
/// `sick_pay_percent` uses the already-scaled convention (65 = 65%) and is
/// expected to be at or above the statutory floor after input sanitizing.
/// A zero work-day period yields a zero daily rate rather than a division
/// failure.
pub fn calculate_absence_pay(
    base_gross_salary: Decimal,
    sick_pay_percent: Decimal,
    time: &TimeBreakdown,
) -> AbsencePayResult {
    let daily_rate = if time.total_work_days.is_zero() {
        Decimal::ZERO
    } else {
        base_gross_salary / time.total_work_days
    };

    AbsencePayResult {
        daily_rate,
        worked_pay: daily_rate * time.worked_days,
        public_holiday_pay: daily_rate * time.public_holiday_days,
        sick_pay: daily_rate * time.sick_days * sick_pay_percent / dec!(100),
        unpaid_deduction: daily_rate * time.unpaid_leave_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(worked: Decimal, holiday: Decimal, sick: Decimal, unpaid: Decimal) -> TimeBreakdown {
        TimeBreakdown {
            total_work_days: worked + holiday + sick + unpaid,
            worked_days: worked,
            public_holiday_days: holiday,
            sick_days: sick,
            unpaid_leave_days: unpaid,
        }
    }

    fn assert_close(actual: Decimal, expected: Decimal) {
        assert!(
            (actual - expected).abs() < dec!(0.01),
            "expected {expected}, got {actual}"
        );
    }

    /// AP-001: spec scenario — 5 sick days at 65% on a 100.000 base
    #[test]
    fn test_sick_pay_scenario() {
        let time = breakdown(dec!(16), Decimal::ZERO, dec!(5), Decimal::ZERO);
        let result = calculate_absence_pay(dec!(100000), dec!(65), &time);

        assert_close(result.daily_rate, dec!(4761.90));
        assert_close(result.sick_pay, dec!(15476.19));
        assert_close(result.worked_pay, dec!(76190.48));
    }

    /// AP-002: public holidays are paid at the full daily rate
    #[test]
    fn test_public_holiday_full_rate() {
        let time = breakdown(dec!(19), dec!(2), Decimal::ZERO, Decimal::ZERO);
        let result = calculate_absence_pay(dec!(100000), dec!(65), &time);

        assert_close(result.public_holiday_pay, result.daily_rate * dec!(2));
        assert_close(result.worked_pay + result.public_holiday_pay, dec!(100000));
    }

    /// AP-003: unpaid days carry no replacement pay
    #[test]
    fn test_unpaid_deduction() {
        let time = breakdown(dec!(18), Decimal::ZERO, Decimal::ZERO, dec!(3));
        let result = calculate_absence_pay(dec!(100000), dec!(65), &time);

        assert_close(result.unpaid_deduction, result.daily_rate * dec!(3));
        assert_close(result.worked_pay, dec!(100000) - result.unpaid_deduction);
    }

    /// AP-004: zero work days fall back to zero, not a division error
    #[test]
    fn test_zero_work_days_guard() {
        let time = breakdown(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO, Decimal::ZERO);
        let result = calculate_absence_pay(dec!(100000), dec!(65), &time);

        assert_eq!(result.daily_rate, Decimal::ZERO);
        assert_eq!(result.worked_pay, Decimal::ZERO);
        assert_eq!(result.sick_pay, Decimal::ZERO);
    }
}
