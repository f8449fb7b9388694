//! Payroll engine for Serbian gross-to-net salary calculations.
//!
//! This crate computes the full legally-mandated salary breakdown — gross
//! salary, employee social-security contributions, income tax, net pay,
//! employer contributions, total employer cost — from a set of salary
//! inputs and a configurable table of statutory rates, and projects the
//! result into the fields of the monthly PPP-PD tax declaration.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod declaration;
pub mod error;
pub mod models;
