//! Rate table loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the rate table
//! of the configured year from a YAML file.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::RateTable;

/// Loads and validates a [`RateTable`] from YAML.
///
/// # File Format
///
/// ```text
/// year: 2026
/// minimum_wage: "1750905"
/// transport_allowance: "249095"
/// monthly_hours:
///   first_semester: "220"
///   second_semester: "210"
/// transport_hourly:
///   first_semester: "1132"
///   second_semester: "1186"
/// night_surcharge: "0.35"
/// percentages:
///   prima: "0.0833"
///   ...
/// ```
///
/// # Example
///
/// ```no_run
/// use domestic_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/co_2026.yaml")?;
/// println!("Minimum wage for {}: {}", loader.rates().year, loader.rates().minimum_wage);
/// # Ok::<(), domestic_payroll::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rates: RateTable,
}

impl ConfigLoader {
    /// Loads the rate table from the specified YAML file.
    ///
    /// Returns an error if the file is missing, is not valid YAML, or
    /// contains figures that would make the calculations meaningless
    /// (non-positive divisors or minimum wage, negative percentages).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content, &path_str)
    }

    /// Parses and validates a rate table from YAML text.
    ///
    /// `origin` is only used to label errors.
    pub fn from_yaml_str(content: &str, origin: &str) -> EngineResult<Self> {
        let rates: RateTable =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        validate(&rates)?;

        Ok(Self { rates })
    }

    /// Wraps an already-built table, validating it the same way as a file.
    pub fn from_table(rates: RateTable) -> EngineResult<Self> {
        validate(&rates)?;
        Ok(Self { rates })
    }

    /// Returns the loaded rate table.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Consumes the loader and returns the rate table.
    pub fn into_rates(self) -> RateTable {
        self.rates
    }
}

fn validate(rates: &RateTable) -> EngineResult<()> {
    require_positive("minimum_wage", rates.minimum_wage)?;
    require_positive(
        "monthly_hours.first_semester",
        rates.monthly_hours.first_semester,
    )?;
    require_positive(
        "monthly_hours.second_semester",
        rates.monthly_hours.second_semester,
    )?;

    let p = &rates.percentages;
    let non_negative = [
        ("transport_allowance", rates.transport_allowance),
        ("transport_hourly.first_semester", rates.transport_hourly.first_semester),
        ("transport_hourly.second_semester", rates.transport_hourly.second_semester),
        ("night_surcharge", rates.night_surcharge),
        ("percentages.prima", p.prima),
        ("percentages.cesantias", p.cesantias),
        ("percentages.intereses_cesantias", p.intereses_cesantias),
        ("percentages.vacations", p.vacations),
        ("percentages.pension_employer", p.pension_employer),
        ("percentages.pension_worker", p.pension_worker),
        ("percentages.health_employer", p.health_employer),
        ("percentages.health_worker", p.health_worker),
        ("percentages.caja", p.caja),
        ("percentages.arl_level_1", p.arl_level_1),
    ];

    for (field, value) in non_negative {
        if value < Decimal::ZERO {
            return Err(EngineError::InvalidRateTable {
                field: field.to_string(),
                message: format!("must not be negative, got {}", value),
            });
        }
    }

    Ok(())
}

fn require_positive(field: &str, value: Decimal) -> EngineResult<()> {
    if value <= Decimal::ZERO {
        return Err(EngineError::InvalidRateTable {
            field: field.to_string(),
            message: format!("must be greater than zero, got {}", value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/co_2026.yaml"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_shipped_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.rates().year, 2026);
        assert_eq!(loader.rates().minimum_wage, dec("1750905"));
    }

    #[test]
    fn test_shipped_configuration_matches_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.rates(), &RateTable::default());
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/rates.yaml");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("rates.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_yaml_returns_parse_error() {
        let result = ConfigLoader::from_yaml_str("year: [unclosed", "inline");

        match result {
            Err(EngineError::ConfigParseError { path, .. }) => assert_eq!(path, "inline"),
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_divisor_is_rejected() {
        let mut table = RateTable::default();
        table.monthly_hours.second_semester = Decimal::ZERO;

        match ConfigLoader::from_table(table) {
            Err(EngineError::InvalidRateTable { field, .. }) => {
                assert_eq!(field, "monthly_hours.second_semester");
            }
            other => panic!("Expected InvalidRateTable, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_percentage_is_rejected() {
        let mut table = RateTable::default();
        table.percentages.caja = dec("-0.04");

        match ConfigLoader::from_table(table) {
            Err(EngineError::InvalidRateTable { field, message }) => {
                assert_eq!(field, "percentages.caja");
                assert!(message.contains("-0.04"));
            }
            other => panic!("Expected InvalidRateTable, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_minimum_wage_from_yaml() {
        let yaml = serde_yaml::to_string(&RateTable::default())
            .unwrap()
            .replace("1750905", "1800000");

        let loader = ConfigLoader::from_yaml_str(&yaml, "inline").unwrap();
        assert_eq!(loader.rates().minimum_wage, dec("1800000"));
    }
}
