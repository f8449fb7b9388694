//! Rate table loading.
//!
//! This module provides the [`RateLoader`] type for loading effective-dated
//! rate tables from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{RateConfig, RateTable};

/// Loads and provides access to effective-dated rate tables.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/rs/
/// └── rates/
///     ├── 2025-02-01.yaml  # Table effective from this date
///     └── 2026-02-01.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use zarada_engine::config::RateLoader;
/// use chrono::NaiveDate;
///
/// let loader = RateLoader::load("./config/rs").unwrap();
/// let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let rates = loader.resolve_for_date(date).unwrap();
/// println!("Non-taxable threshold: {}", rates.non_taxable_threshold);
/// ```
#[derive(Debug, Clone)]
pub struct RateLoader {
    configs: Vec<RateConfig>,
}

impl RateLoader {
    /// Loads all rate tables from the `rates/` subdirectory of `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or any file is missing, any file
    /// contains invalid YAML, or any loaded table violates a statutory
    /// invariant.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let rates_dir = path.as_ref().join("rates");
        let rates_dir_str = rates_dir.display().to_string();

        if !rates_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: rates_dir_str,
            });
        }

        let entries = fs::read_dir(&rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut configs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;

            let file = entry.path();
            if file.extension().is_some_and(|ext| ext == "yaml") {
                let config = Self::load_yaml(&file)?;
                configs.push(config);
            }
        }

        if configs.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate files found)", rates_dir_str),
            });
        }

        // Keep tables sorted ascending so date resolution can scan from
        // the end for the most recent applicable table.
        configs.sort_by_key(|c| c.effective_date);

        for config in &configs {
            config.rates.validate()?;
        }

        Ok(Self { configs })
    }

    /// Loads and parses one rate file.
    fn load_yaml(path: &Path) -> EngineResult<RateConfig> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the rate table in force on the given payment date.
    ///
    /// Picks the most recent table whose effective date is on or before
    /// `date`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RatesNotFound`] if every loaded table becomes
    /// effective after `date`.
    pub fn resolve_for_date(&self, date: NaiveDate) -> EngineResult<&RateTable> {
        self.configs
            .iter()
            .rfind(|c| c.effective_date <= date)
            .map(|c| &c.rates)
            .ok_or(EngineError::RatesNotFound { date })
    }

    /// Returns all loaded tables in ascending effective-date order.
    pub fn configs(&self) -> &[RateConfig] {
        &self.configs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn config_path() -> &'static str {
        "./config/rs"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = RateLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.configs().len(), 2);
    }

    #[test]
    fn test_resolve_2025_table() {
        let loader = RateLoader::load(config_path()).unwrap();

        let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let rates = loader.resolve_for_date(date).unwrap();
        assert_eq!(rates.non_taxable_threshold, dec!(28423));
        assert_eq!(rates, &RateTable::statutory_2025());
    }

    #[test]
    fn test_resolve_picks_raised_threshold_after_boundary() {
        let loader = RateLoader::load(config_path()).unwrap();

        let date = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let rates = loader.resolve_for_date(date).unwrap();
        assert_eq!(rates.non_taxable_threshold, dec!(34221));
    }

    #[test]
    fn test_resolve_day_before_boundary_keeps_old_threshold() {
        let loader = RateLoader::load(config_path()).unwrap();

        let date = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        let rates = loader.resolve_for_date(date).unwrap();
        assert_eq!(rates.non_taxable_threshold, dec!(28423));
    }

    #[test]
    fn test_resolve_date_before_all_tables_returns_error() {
        let loader = RateLoader::load(config_path()).unwrap();

        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        match loader.resolve_for_date(date) {
            Err(EngineError::RatesNotFound { date: d }) => assert_eq!(d, date),
            other => panic!("Expected RatesNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = RateLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("rates"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }
}
