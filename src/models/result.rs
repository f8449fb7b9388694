//! Calculation result models.
//!
//! This module contains the [`CalculationResult`] type capturing every
//! intermediate and final monetary figure of one gross-to-net calculation,
//! the non-blocking [`CalcWarning`]s produced by input clamping, and the
//! [`LineItem`] projection consumed by payslip renderers.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::config::RateTable;

use super::SalaryInputs;

/// A non-blocking warning generated during calculation.
///
/// Warnings surface input clamps (negative values, day counts exceeding the
/// period, statutory floors) without failing the calculation — the engine
/// always produces a best-effort answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalcWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of what was clamped and why.
    pub message: String,
}

impl CalcWarning {
    /// Creates a new warning.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Post-clamp day accounting for the calculation period.
///
/// Day counts are expressed in days (standard hours / 8) and may be
/// fractional for part-time months. The invariant
/// `worked_days + sick_days + public_holiday_days + unpaid_leave_days ==
/// total_work_days` holds by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeBreakdown {
    /// Working days in the period (standard monthly hours / 8).
    pub total_work_days: Decimal,
    /// Days actually worked.
    pub worked_days: Decimal,
    /// Non-worked public holiday days, after clamping.
    pub public_holiday_days: Decimal,
    /// Sick leave days, after clamping.
    pub sick_days: Decimal,
    /// Unpaid leave days, after clamping.
    pub unpaid_leave_days: Decimal,
}

/// One line of a rendered payslip: a label, an optional human-readable
/// derivation (e.g. `10h × 595.24 × 1.26`), and the amount in RSD.
///
/// Deduction lines carry negative amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Display label for the line.
    pub label: String,
    /// Optional sub-label showing how the amount was derived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// The amount for this line, RSD.
    pub amount: Decimal,
}

impl LineItem {
    fn new(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            detail: None,
            amount,
        }
    }

    fn with_detail(label: impl Into<String>, detail: String, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            detail: Some(detail),
            amount,
        }
    }
}

/// The complete result of one gross-to-net calculation.
///
/// Constructed fresh by [`crate::calculation::calculate`] on every call,
/// held only in memory, never persisted. A pure, deterministic function of
/// the inputs and the rate table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Post-clamp day accounting.
    pub time: TimeBreakdown,
    /// Base salary per working day of the period.
    pub daily_rate: Decimal,
    /// Pay for days actually worked.
    pub worked_pay: Decimal,
    /// Pay for non-worked public holidays, at the full daily rate.
    pub public_holiday_pay: Decimal,
    /// Employer-paid sick pay; tracked outside gross-1 and added back into
    /// net after tax and contributions.
    pub sick_pay: Decimal,
    /// Amount deducted for unpaid leave days (no replacement pay).
    pub unpaid_deduction: Decimal,
    /// Seniority uplift rate applied to worked pay (already scaled, 0.04 = 4%).
    pub seniority_rate: Decimal,
    /// Seniority uplift amount ("minuli rad").
    pub seniority_amount: Decimal,
    /// Hourly rate derived from worked pay over worked hours.
    pub hour_rate: Decimal,
    /// Overtime pay including the statutory uplift.
    pub overtime_pay: Decimal,
    /// Night work pay including the statutory uplift.
    pub night_pay: Decimal,
    /// Weekend work pay including the statutory uplift.
    pub weekend_pay: Decimal,
    /// Public-holiday work pay including the statutory uplift.
    pub holiday_pay: Decimal,
    /// Fixed plus percentage bonus (percentage off the base salary).
    pub bonus_amount: Decimal,
    /// Total contracted gross salary (Bruto 1).
    pub gross1: Decimal,
    /// Contribution base: gross-1 clamped to the statutory bounds.
    pub contribution_base: Decimal,
    /// Employee pension and disability contribution.
    pub employee_pension: Decimal,
    /// Employee health insurance contribution.
    pub employee_health: Decimal,
    /// Employee unemployment insurance contribution.
    pub employee_unemployment: Decimal,
    /// Sum of the three employee contributions.
    pub total_employee_contributions: Decimal,
    /// Taxable base: max(gross-1 − non-taxable threshold, 0).
    pub tax_base: Decimal,
    /// Income tax on the taxable base.
    pub tax: Decimal,
    /// Gross-1 minus employee contributions and tax.
    pub net_from_work: Decimal,
    /// Union dues: fixed part plus percentage of net-from-work.
    pub union_dues: Decimal,
    /// Sum of all deductions from net.
    pub total_deductions: Decimal,
    /// Net-from-work plus sick pay, before deductions.
    pub net_before_deductions: Decimal,
    /// Final amount paid to the employee, floored at zero.
    pub net: Decimal,
    /// Employer pension and disability contribution.
    pub employer_pension: Decimal,
    /// Employer health insurance contribution.
    pub employer_health: Decimal,
    /// Sum of the employer contributions.
    pub total_employer_contributions: Decimal,
    /// Gross-1 plus employer contributions (Bruto 2).
    pub gross2: Decimal,
    /// Meal allowance (paid meal days × daily rate).
    pub meal_allowance: Decimal,
    /// Transport reimbursement, capped at the tax-exempt maximum.
    pub transport_allowance: Decimal,
    /// Gross-2 plus allowances plus sick pay: the full monthly cost of
    /// employing the person.
    pub total_cost: Decimal,
    /// Net / gross-1, or 0 when gross-1 is zero.
    pub net_ratio: Decimal,
    /// Total cost / net, or 0 when net is zero.
    pub cost_ratio: Decimal,
    /// Clamp warnings collected while sanitizing the inputs.
    pub warnings: Vec<CalcWarning>,
}

/// Formats a currency amount with two decimal places for sub-labels.
fn fmt2(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

impl CalculationResult {
    /// Projects the result into payslip line items with human-readable
    /// derivation sub-labels.
    ///
    /// Zero-amount uplift, bonus, absence and deduction lines are omitted,
    /// mirroring how a printed payslip only shows applicable rows.
    /// Deduction lines carry negative amounts.
    pub fn line_items(&self, inputs: &SalaryInputs, rates: &RateTable) -> Vec<LineItem> {
        let hundred = dec!(100);
        let mut items = Vec::new();

        items.push(LineItem::with_detail(
            "Redovan rad",
            format!(
                "{} dana × {}",
                self.time.worked_days.normalize(),
                fmt2(self.daily_rate)
            ),
            self.worked_pay,
        ));
        if self.public_holiday_pay > Decimal::ZERO {
            items.push(LineItem::with_detail(
                "Naknada za državni praznik",
                format!(
                    "{} dana × {}",
                    self.time.public_holiday_days.normalize(),
                    fmt2(self.daily_rate)
                ),
                self.public_holiday_pay,
            ));
        }
        if self.seniority_amount > Decimal::ZERO {
            items.push(LineItem::with_detail(
                "Minuli rad",
                format!(
                    "{} god. × {}%",
                    inputs.years_of_service,
                    inputs.seniority_pct_per_year.normalize()
                ),
                self.seniority_amount,
            ));
        }

        let uplifts = [
            (
                "Prekovremeni rad",
                inputs.overtime_hours,
                rates.overtime_coef,
                self.overtime_pay,
            ),
            (
                "Noćni rad",
                inputs.night_hours,
                rates.night_coef,
                self.night_pay,
            ),
            (
                "Rad vikendom",
                inputs.weekend_hours,
                rates.weekend_coef,
                self.weekend_pay,
            ),
            (
                "Rad na državni praznik",
                inputs.holiday_hours,
                rates.holiday_coef,
                self.holiday_pay,
            ),
        ];
        for (label, hours, coef, amount) in uplifts {
            if amount > Decimal::ZERO {
                let multiplier = (Decimal::ONE + coef / hundred).normalize();
                items.push(LineItem::with_detail(
                    format!("{label} (+{}%)", coef.normalize()),
                    format!("{}h × {} × {}", hours.normalize(), fmt2(self.hour_rate), multiplier),
                    amount,
                ));
            }
        }

        if self.bonus_amount > Decimal::ZERO {
            items.push(LineItem::new("Bonusi / nagrade", self.bonus_amount));
        }
        items.push(LineItem::new("BRUTO 1", self.gross1));

        items.push(LineItem::new("Osnovica za doprinose", self.contribution_base));
        items.push(LineItem::new(
            format!("PIO ({}%)", rates.employee_pension_pct.normalize()),
            -self.employee_pension,
        ));
        items.push(LineItem::new(
            format!("Zdravstvo ({}%)", rates.employee_health_pct.normalize()),
            -self.employee_health,
        ));
        items.push(LineItem::new(
            format!("Nezaposlenost ({}%)", rates.employee_unemployment_pct.normalize()),
            -self.employee_unemployment,
        ));
        items.push(LineItem::with_detail(
            format!("Porez na zaradu ({}%)", rates.tax_rate.normalize()),
            format!(
                "osnovica {} − {}",
                fmt2(self.gross1),
                fmt2(rates.non_taxable_threshold)
            ),
            -self.tax,
        ));

        if self.sick_pay > Decimal::ZERO {
            items.push(LineItem::with_detail(
                "Naknada za bolovanje",
                format!(
                    "{} dana × {} × {}%",
                    self.time.sick_days.normalize(),
                    fmt2(self.daily_rate),
                    inputs.sick_pay_percent.normalize()
                ),
                self.sick_pay,
            ));
        }
        if self.unpaid_deduction > Decimal::ZERO {
            items.push(LineItem::with_detail(
                "Neplaćeno odsustvo",
                format!(
                    "{} dana × {}",
                    self.time.unpaid_leave_days.normalize(),
                    fmt2(self.daily_rate)
                ),
                -self.unpaid_deduction,
            ));
        }
        if self.union_dues > Decimal::ZERO {
            items.push(LineItem::new("Sindikalna članarina", -self.union_dues));
        }
        if inputs.loan_repayment > Decimal::ZERO {
            items.push(LineItem::new("Otplata kredita", -inputs.loan_repayment));
        }
        if inputs.court_ordered_withholding > Decimal::ZERO {
            items.push(LineItem::new(
                "Obustava po sudskoj odluci",
                -inputs.court_ordered_withholding,
            ));
        }
        if inputs.other_deductions > Decimal::ZERO {
            items.push(LineItem::new("Ostale obustave", -inputs.other_deductions));
        }
        items.push(LineItem::new("NETO ZARADA", self.net));

        items.push(LineItem::new(
            format!("PIO poslodavac ({}%)", rates.employer_pension_pct.normalize()),
            self.employer_pension,
        ));
        items.push(LineItem::new(
            format!("Zdravstvo poslodavac ({}%)", rates.employer_health_pct.normalize()),
            self.employer_health,
        ));
        items.push(LineItem::new("BRUTO 2", self.gross2));
        if self.meal_allowance > Decimal::ZERO {
            items.push(LineItem::with_detail(
                "Topli obrok",
                format!(
                    "{} dana × {}",
                    inputs.paid_meal_days.normalize(),
                    fmt2(rates.daily_meal_allowance)
                ),
                self.meal_allowance,
            ));
        }
        if self.transport_allowance > Decimal::ZERO {
            items.push(LineItem::new("Naknada za prevoz", self.transport_allowance));
        }
        items.push(LineItem::new("UKUPAN TROŠAK POSLODAVCA", self.total_cost));

        items
    }
}
