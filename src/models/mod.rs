//! Core data models for the payroll engine.
//!
//! This module contains the inputs (worked days, settings) and the
//! structured results produced by the calculation functions.

mod day;
mod results;
mod settings;

pub use day::{DayEntry, SelectedDays};
pub use results::{
    AccrualResult, ContributionResult, DirectPayResult, MonthResult, PaySummary, RateSet,
    WorkerContribution,
};
pub use settings::{SETTINGS_STORAGE_KEY, Settings, SettingsUpdate};
