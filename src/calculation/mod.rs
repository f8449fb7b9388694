//! Calculation logic for the payroll engine.
//!
//! This module contains the calculation functions for the gross-to-net
//! waterfall: time accounting with the absence-day clamp ordering, daily
//! and absence pay, the seniority uplift, the hourly-rate uplifts for
//! overtime/night/weekend/holiday work, bonuses, the contribution-base
//! clamp with both contribution sides, income tax, deductions from net,
//! non-salary allowances, the orchestrating [`calculate`] entry point, and
//! the bisection solver inverting it.

mod absence_pay;
mod allowances;
mod bonus;
mod contributions;
mod deductions;
mod engine;
mod net_to_gross;
mod seniority;
mod tax;
mod time_accounting;
mod uplifts;

pub use absence_pay::{AbsencePayResult, calculate_absence_pay};
pub use allowances::{AllowancesResult, calculate_allowances};
pub use bonus::calculate_bonus;
pub use contributions::{
    EmployeeContributions, EmployerContributions, contribution_base, employee_contributions,
    employer_contributions,
};
pub use deductions::{DeductionsResult, calculate_deductions};
pub use engine::calculate;
pub use net_to_gross::{BISECTION_ITERATIONS, NET_TOLERANCE, net_to_gross};
pub use seniority::{SeniorityResult, calculate_seniority};
pub use tax::{TaxResult, calculate_tax};
pub use time_accounting::{TimeAccountingResult, account_time};
pub use uplifts::{UpliftsResult, calculate_uplifts};
