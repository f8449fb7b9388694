//! Data models for the payroll engine.
//!
//! This module contains the input record ([`SalaryInputs`]), the derived
//! output record ([`CalculationResult`]) with its warning and line-item
//! types, and the employee/employer/period metadata consumed by the
//! declaration projector and payslip renderers.

mod inputs;
mod party;
mod result;

pub use inputs::{MIN_SENIORITY_PCT_PER_YEAR, MIN_SICK_PAY_PERCENT, SalaryInputs};
pub(crate) use inputs::DEFAULT_STANDARD_HOURS;
pub use party::{EmployeeMeta, EmployerMeta, Period};
pub use result::{CalcWarning, CalculationResult, LineItem, TimeBreakdown};
