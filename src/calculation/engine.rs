//! The gross-to-net calculation waterfall.

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::models::{CalcWarning, CalculationResult, DEFAULT_STANDARD_HOURS, SalaryInputs};

use super::{
    account_time, calculate_absence_pay, calculate_allowances, calculate_bonus,
    calculate_deductions, calculate_seniority, calculate_tax, calculate_uplifts,
    contribution_base, employee_contributions, employer_contributions,
};

/// Runs the full gross-to-net waterfall for one month.
///
/// Pure and total: inputs are sanitized up front and every out-of-range
/// value is clamped with a warning, so this function always produces a
/// result. The order of operations matters — seniority and the hourly
/// uplifts are computed off *worked* pay, sick pay is tracked outside
/// gross-1 and re-enters net only after contributions and tax, and the
/// zero floor on final net is applied after deductions.
pub fn calculate(inputs: &SalaryInputs, rates: &RateTable) -> CalculationResult {
    let (inputs, mut warnings) = inputs.sanitized();

    // The statutory minimum applies to full-time work; part-time months
    // with fewer standard hours may lawfully pay less.
    if inputs.base_gross_salary > Decimal::ZERO
        && inputs.base_gross_salary < rates.minimum_wage
        && inputs.standard_monthly_hours >= DEFAULT_STANDARD_HOURS
    {
        warnings.push(CalcWarning::new(
            "BELOW_MINIMUM_WAGE",
            format!(
                "base_gross_salary {} is below the statutory minimum wage {}",
                inputs.base_gross_salary, rates.minimum_wage
            ),
        ));
    }

    let accounted = account_time(&inputs);
    warnings.extend(accounted.warnings);
    let time = accounted.time;

    let absence = calculate_absence_pay(inputs.base_gross_salary, inputs.sick_pay_percent, &time);
    let seniority = calculate_seniority(
        absence.worked_pay,
        inputs.years_of_service,
        inputs.seniority_pct_per_year,
    );
    let uplifts = calculate_uplifts(&inputs, absence.worked_pay, &time, rates);
    let bonus_amount = calculate_bonus(
        inputs.fixed_bonus,
        inputs.bonus_percent,
        inputs.base_gross_salary,
    );

    let gross1 = absence.worked_pay
        + absence.public_holiday_pay
        + seniority.amount
        + uplifts.overtime_pay
        + uplifts.night_pay
        + uplifts.weekend_pay
        + uplifts.holiday_pay
        + bonus_amount;

    let base = contribution_base(gross1, rates);
    let employee = employee_contributions(base, rates);
    let tax = calculate_tax(gross1, rates);
    let net_from_work = gross1 - employee.total - tax.tax;

    let deductions = calculate_deductions(&inputs, net_from_work);
    let net_before_deductions = net_from_work + absence.sick_pay;
    let net = (net_before_deductions - deductions.total).max(Decimal::ZERO);

    // Employer contributions follow the same base as the employee side;
    // sick pay carries no employer contributions in this model.
    let employer = employer_contributions(base, rates);
    let gross2 = gross1 + employer.total;

    let allowances = calculate_allowances(&inputs, rates);
    let total_cost =
        gross2 + allowances.meal_allowance + allowances.transport_allowance + absence.sick_pay;

    let net_ratio = if gross1.is_zero() {
        Decimal::ZERO
    } else {
        net / gross1
    };
    let cost_ratio = if net.is_zero() {
        Decimal::ZERO
    } else {
        total_cost / net
    };

    CalculationResult {
        time,
        daily_rate: absence.daily_rate,
        worked_pay: absence.worked_pay,
        public_holiday_pay: absence.public_holiday_pay,
        sick_pay: absence.sick_pay,
        unpaid_deduction: absence.unpaid_deduction,
        seniority_rate: seniority.rate,
        seniority_amount: seniority.amount,
        hour_rate: uplifts.hour_rate,
        overtime_pay: uplifts.overtime_pay,
        night_pay: uplifts.night_pay,
        weekend_pay: uplifts.weekend_pay,
        holiday_pay: uplifts.holiday_pay,
        bonus_amount,
        gross1,
        contribution_base: base,
        employee_pension: employee.pension,
        employee_health: employee.health,
        employee_unemployment: employee.unemployment,
        total_employee_contributions: employee.total,
        tax_base: tax.tax_base,
        tax: tax.tax,
        net_from_work,
        union_dues: deductions.union_dues,
        total_deductions: deductions.total,
        net_before_deductions,
        net,
        employer_pension: employer.pension,
        employer_health: employer.health,
        total_employer_contributions: employer.total,
        gross2,
        meal_allowance: allowances.meal_allowance,
        transport_allowance: allowances.transport_allowance,
        total_cost,
        net_ratio,
        cost_ratio,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn assert_close(actual: Decimal, expected: Decimal) {
        assert!(
            (actual - expected).abs() < dec!(0.01),
            "expected {expected}, got {actual}"
        );
    }

    /// EN-001: the statutory 100.000 scenario under the 2025 table
    #[test]
    fn test_plain_hundred_thousand() {
        let inputs = SalaryInputs {
            base_gross_salary: dec!(100000),
            ..SalaryInputs::default()
        };
        let result = calculate(&inputs, &RateTable::statutory_2025());

        assert_close(result.gross1, dec!(100000));
        assert_close(result.total_employee_contributions, dec!(19900));
        assert_close(result.tax, dec!(7157.70));
        assert_close(result.net, dec!(72942.30));
        assert_close(result.gross2, dec!(115150));
        assert_close(result.total_cost, dec!(115150));
        assert!(result.warnings.is_empty());
    }

    /// EN-002: overtime raises gross-1 by the uplifted amount
    #[test]
    fn test_overtime_in_gross1() {
        let inputs = SalaryInputs {
            base_gross_salary: dec!(100000),
            overtime_hours: dec!(10),
            ..SalaryInputs::default()
        };
        let result = calculate(&inputs, &RateTable::statutory_2025());

        assert_close(result.overtime_pay, dec!(7500));
        assert_close(result.gross1, dec!(107500));
    }

    /// EN-003: sick pay stays out of gross-1 and re-enters net afterwards
    #[test]
    fn test_sick_pay_outside_gross1() {
        let inputs = SalaryInputs {
            base_gross_salary: dec!(100000),
            sick_days: dec!(5),
            ..SalaryInputs::default()
        };
        let result = calculate(&inputs, &RateTable::statutory_2025());

        assert_close(result.sick_pay, dec!(15476.19));
        assert_close(result.gross1, dec!(76190.48));
        assert_close(result.net, result.net_from_work + result.sick_pay);
        // Total cost carries the sick pay even though gross-2 does not.
        assert_close(result.total_cost, result.gross2 + result.sick_pay);
    }

    /// EN-004: public holidays do not reduce gross-1
    #[test]
    fn test_public_holidays_keep_gross1() {
        let inputs = SalaryInputs {
            base_gross_salary: dec!(100000),
            public_holiday_days: dec!(2),
            ..SalaryInputs::default()
        };
        let result = calculate(&inputs, &RateTable::statutory_2025());
        assert_close(result.gross1, dec!(100000));
    }

    /// EN-005: unpaid leave reduces gross-1 proportionally
    #[test]
    fn test_unpaid_leave_reduces_gross1() {
        let inputs = SalaryInputs {
            base_gross_salary: dec!(100000),
            unpaid_leave_days: dec!(3),
            ..SalaryInputs::default()
        };
        let result = calculate(&inputs, &RateTable::statutory_2025());
        assert_close(result.gross1, dec!(100000) - result.unpaid_deduction);
        assert_close(result.unpaid_deduction, dec!(14285.71));
    }

    /// EN-006: the low-salary contribution floor bites
    #[test]
    fn test_low_salary_contribution_floor() {
        let inputs = SalaryInputs {
            base_gross_salary: dec!(30000),
            ..SalaryInputs::default()
        };
        let result = calculate(&inputs, &RateTable::statutory_2025());

        assert_eq!(result.contribution_base, dec!(45950));
        // 19.9% of 45.950, not of 30.000.
        assert_close(result.total_employee_contributions, dec!(9144.05));
        // 30.000 is below the non-taxable threshold, so no tax.
        assert_eq!(result.tax, Decimal::ZERO);
        assert_close(result.net, dec!(20855.95));
    }

    /// EN-007: a zero-salary month never goes negative
    #[test]
    fn test_zero_salary_net_floored() {
        let result = calculate(&SalaryInputs::default(), &RateTable::statutory_2025());
        // Contributions on the statutory minimum base exceed a zero gross;
        // the final net floors at zero rather than going negative.
        assert_eq!(result.net, Decimal::ZERO);
        assert!(result.net_from_work < Decimal::ZERO);
        assert_eq!(result.net_ratio, Decimal::ZERO);
        assert_eq!(result.cost_ratio, Decimal::ZERO);
    }

    /// EN-008: deductions reduce net but never below zero
    #[test]
    fn test_deductions_floor_at_zero() {
        let inputs = SalaryInputs {
            base_gross_salary: dec!(100000),
            loan_repayment: dec!(500000),
            ..SalaryInputs::default()
        };
        let result = calculate(&inputs, &RateTable::statutory_2025());
        assert_eq!(result.net, Decimal::ZERO);
        assert_close(result.total_deductions, dec!(500000));
    }

    /// EN-009: allowances enter total cost but not gross-1
    #[test]
    fn test_allowances_in_total_cost_only() {
        let inputs = SalaryInputs {
            base_gross_salary: dec!(100000),
            paid_meal_days: dec!(21),
            monthly_transport_cost: dec!(8000),
            ..SalaryInputs::default()
        };
        let result = calculate(&inputs, &RateTable::statutory_2025());

        assert_close(result.gross1, dec!(100000));
        assert_close(result.meal_allowance, dec!(31290));
        assert_eq!(result.transport_allowance, dec!(5630));
        assert_close(result.total_cost, result.gross2 + dec!(36920));
    }

    /// EN-010: warnings from sanitizing and clamping are surfaced
    #[test]
    fn test_warnings_propagate() {
        let inputs = SalaryInputs {
            base_gross_salary: dec!(100000),
            overtime_hours: dec!(-4),
            sick_days: dec!(30),
            ..SalaryInputs::default()
        };
        let result = calculate(&inputs, &RateTable::statutory_2025());

        assert!(result
            .warnings
            .iter()
            .any(|w| w.code == "NEGATIVE_INPUT_CLAMPED"));
        assert!(result
            .warnings
            .iter()
            .any(|w| w.code == "ABSENCE_DAYS_CLAMPED"));
        assert_eq!(result.time.sick_days, dec!(21));
    }

    /// EN-011: seniority and uplifts stack on worked pay
    #[test]
    fn test_full_stack_scenario() {
        let inputs = SalaryInputs {
            base_gross_salary: dec!(100000),
            years_of_service: 10,
            overtime_hours: dec!(10),
            ..SalaryInputs::default()
        };
        let result = calculate(&inputs, &RateTable::statutory_2025());

        assert_close(result.seniority_amount, dec!(4000));
        assert_close(result.overtime_pay, dec!(7500));
        assert_close(result.gross1, dec!(111500));
    }

    /// EN-013: salaries below the statutory minimum wage are flagged
    #[test]
    fn test_below_minimum_wage_warning() {
        let inputs = SalaryInputs {
            base_gross_salary: dec!(50000),
            ..SalaryInputs::default()
        };
        let result = calculate(&inputs, &RateTable::statutory_2025());
        assert!(
            result
                .warnings
                .iter()
                .any(|w| w.code == "BELOW_MINIMUM_WAGE")
        );
    }

    /// EN-012: net ratio reflects the effective wedge
    #[test]
    fn test_net_ratio() {
        let inputs = SalaryInputs {
            base_gross_salary: dec!(100000),
            ..SalaryInputs::default()
        };
        let result = calculate(&inputs, &RateTable::statutory_2025());
        assert_close(result.net_ratio, dec!(0.7294));
        assert_close(result.cost_ratio, dec!(1.5787));
    }
}
