//! Rate table configuration for the payroll engine.
//!
//! The statutory constants (tax rate, contribution percentages, uplift
//! coefficients, thresholds) change on fixed calendar boundaries, so they
//! are kept outside the engine: a [`RateLoader`] reads effective-dated YAML
//! files and [`RateLoader::resolve_for_date`] picks the table in force on a
//! given payment date. The engine itself only ever receives an
//! already-resolved [`RateTable`] and never reads the system clock.

mod loader;
mod types;

pub use loader::RateLoader;
pub use types::{RateConfig, RateTable};
