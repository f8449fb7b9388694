//! Absence-day accounting.
//!
//! Splits the working days of the period between worked days and the three
//! absence categories. The clamp ordering is a policy choice: public
//! holidays are deducted from the day pool first, then sick leave, then
//! unpaid leave — later categories compete for whatever days remain.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{CalcWarning, SalaryInputs, TimeBreakdown};

/// The result of absence-day accounting: post-clamp day counts and the
/// warnings for any counts that had to be reduced.
#[derive(Debug, Clone)]
pub struct TimeAccountingResult {
    /// Post-clamp day breakdown.
    pub time: TimeBreakdown,
    /// One warning per clamped absence category.
    pub warnings: Vec<CalcWarning>,
}

/// Splits the period's working days between worked and absence days.
///
/// `total_work_days` is `standard_monthly_hours / 8`. Each absence category
/// is clamped to the days still available after the categories before it,
/// so the post-clamp counts always sum to exactly `total_work_days`.
///
/// Expects sanitized inputs (non-negative day counts, non-zero standard
/// hours); see [`SalaryInputs::sanitized`].
pub fn account_time(inputs: &SalaryInputs) -> TimeAccountingResult {
    let total_work_days = inputs.standard_monthly_hours / dec!(8);
    let mut warnings = Vec::new();

    let mut take = |field: &str, requested: Decimal, available: Decimal| {
        if requested > available {
            warnings.push(CalcWarning::new(
                "ABSENCE_DAYS_CLAMPED",
                format!(
                    "{field} {requested} exceeds the {available} working days still available; clamped"
                ),
            ));
            available
        } else {
            requested
        }
    };

    let public_holiday_days = take(
        "public_holiday_days",
        inputs.public_holiday_days,
        total_work_days,
    );
    let sick_days = take(
        "sick_days",
        inputs.sick_days,
        total_work_days - public_holiday_days,
    );
    let unpaid_leave_days = take(
        "unpaid_leave_days",
        inputs.unpaid_leave_days,
        total_work_days - public_holiday_days - sick_days,
    );
    let worked_days = total_work_days - public_holiday_days - sick_days - unpaid_leave_days;

    TimeAccountingResult {
        time: TimeBreakdown {
            total_work_days,
            worked_days,
            public_holiday_days,
            sick_days,
            unpaid_leave_days,
        },
        warnings,
    }
}
