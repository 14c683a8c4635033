//! Rate table configuration for the payroll engine.
//!
//! This module holds the statutory figures for the configured year and the
//! loader that reads them from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use domestic_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/co_2026.yaml").unwrap();
//! println!("SMMLV: {}", config.rates().minimum_wage);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    PercentageRates, RateTable, SECOND_SEMESTER_START, SemesterValues, is_first_semester,
};
