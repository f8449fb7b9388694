//! Employee, employer and period metadata.
//!
//! These records carry no money — they identify who the calculation is for
//! and for which month, and feed the declaration projector and payslip
//! headers. All identifying fields are optional; the declaration layer
//! substitutes documented placeholders when they are missing.

use serde::{Deserialize, Serialize};

/// Serbian month names, indexed by month number − 1.
const MONTH_NAMES: [&str; 12] = [
    "Januar", "Februar", "Mart", "April", "Maj", "Jun", "Jul", "Avgust", "Septembar", "Oktobar",
    "Novembar", "Decembar",
];

/// Employee identification for payslips and declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeMeta {
    /// Full name.
    pub name: String,
    /// Unique citizen number (13 digits), if supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jmbg: Option<String>,
    /// Job title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// Bank account the net salary is paid to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<String>,
}

/// Employer identification for payslips and declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerMeta {
    /// Registered company name.
    pub name: String,
    /// Tax identification number (9 digits), if supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pib: Option<String>,
    /// Registered address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// An accounting period: one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// Calendar year.
    pub year: i32,
    /// Month number, 1-12.
    pub month: u32,
}

impl Period {
    /// Creates a period, clamping the month into 1-12.
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
        }
    }

    /// The Serbian month name, e.g. `Mart`.
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month.clamp(1, 12) - 1) as usize]
    }

    /// Display label, e.g. `Mart 2025`.
    pub fn label(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }

    /// The `YYYY-MM` form used in the declaration.
    pub fn as_declaration_period(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month.clamp(1, 12))
    }
}
