//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the three
//! endpoints. Every request may carry an inline `rates` override (the
//! table is validated before use) or a `payment_date` for resolving the
//! effective-dated tables; with neither, the tables in force today apply.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::RateTable;
use crate::models::{EmployeeMeta, EmployerMeta, Period, SalaryInputs};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateRequest {
    /// The salary inputs for the month.
    pub inputs: SalaryInputs,
    /// Optional inline rate table, overriding the loaded configuration.
    #[serde(default)]
    pub rates: Option<RateTable>,
    /// Payment date used to resolve the effective rate table.
    #[serde(default)]
    pub payment_date: Option<NaiveDate>,
}

/// Request body for the `/net-to-gross` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetToGrossRequest {
    /// The net amount to solve for.
    pub target_net: Decimal,
    /// Non-salary inputs held fixed during the search (overtime, absences,
    /// deductions). The base salary field is ignored.
    #[serde(default)]
    pub inputs: SalaryInputs,
    /// Optional inline rate table, overriding the loaded configuration.
    #[serde(default)]
    pub rates: Option<RateTable>,
    /// Payment date used to resolve the effective rate table.
    #[serde(default)]
    pub payment_date: Option<NaiveDate>,
}

/// Request body for the `/declaration` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeclarationRequest {
    /// The salary inputs for the month.
    pub inputs: SalaryInputs,
    /// The income recipient.
    pub employee: EmployeeMeta,
    /// The filing employer.
    pub employer: EmployerMeta,
    /// The accounting period being declared.
    pub period: Period,
    /// Optional inline rate table, overriding the loaded configuration.
    #[serde(default)]
    pub rates: Option<RateTable>,
    /// Payment date used to resolve the effective rate table.
    #[serde(default)]
    pub payment_date: Option<NaiveDate>,
}
