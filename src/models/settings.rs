//! Calculation settings supplied by the caller.
//!
//! The engine never stores settings. This module provides the record itself,
//! the defaults a settings store falls back to, and the partial-update merge
//! used when a settings screen saves a subset of fields.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::RateTable;
use crate::error::{EngineError, EngineResult};
use crate::validation::{DEFAULT_HOURS_PER_DAY, check_salary_bounds, clamp_hours};

/// Key under which a settings store keeps the serialized record.
pub const SETTINGS_STORAGE_KEY: &str = "@domestic_labor_settings";

/// Settings applied to a single month calculation.
///
/// `minimum_salary` replaces the rate table's SMMLV for every figure in the
/// calculation; it is never mixed per day.
///
/// # Example
///
/// ```
/// use domestic_payroll::models::Settings;
/// use rust_decimal::Decimal;
///
/// let settings = Settings::default();
/// assert!(settings.include_health);
/// assert_eq!(settings.minimum_salary, Decimal::new(1_750_905, 0));
/// assert_eq!(settings.default_hours, Decimal::new(8, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Whether health contributions are paid (false when the worker is
    /// covered elsewhere, e.g. SISBEN).
    pub include_health: bool,
    /// Monthly minimum wage used in place of the table default.
    pub minimum_salary: Decimal,
    /// Hours pre-filled for a newly selected day.
    pub default_hours: Decimal,
}

impl Default for Settings {
    fn default() -> Self {
        Self::for_rates(&RateTable::default())
    }
}

impl Settings {
    /// Default settings for the given rate table.
    pub fn for_rates(rates: &RateTable) -> Self {
        Self {
            include_health: true,
            minimum_salary: rates.minimum_wage,
            default_hours: DEFAULT_HOURS_PER_DAY,
        }
    }

    /// Returns a copy with the fields present in `update` replaced.
    ///
    /// `default_hours` is clamped to the valid day range, and a zero
    /// `minimum_salary` is replaced with the table's minimum wage.
    pub fn apply(&self, update: &SettingsUpdate, rates: &RateTable) -> Self {
        Self {
            include_health: update.include_health.unwrap_or(self.include_health),
            minimum_salary: update
                .minimum_salary
                .map(|salary| rates.resolve_minimum_wage(Some(salary)))
                .unwrap_or(self.minimum_salary),
            default_hours: update
                .default_hours
                .map(clamp_hours)
                .unwrap_or(self.default_hours),
        }
    }

    /// Reads a stored settings record, filling missing fields from defaults.
    ///
    /// A record whose minimum salary is out of range is rejected like an
    /// unreadable one.
    pub fn from_json(stored: &str, rates: &RateTable) -> EngineResult<Self> {
        let update: SettingsUpdate =
            serde_json::from_str(stored).map_err(|e| EngineError::SettingsParseError {
                message: e.to_string(),
            })?;
        if let Some(salary) = update.minimum_salary {
            check_salary_bounds(salary, rates)?;
        }

        Ok(Self::for_rates(rates).apply(&update, rates))
    }

    /// Reads a stored settings record, falling back to defaults on failure.
    ///
    /// A broken record must never stop a session, so the error is logged
    /// and discarded.
    pub fn load_or_default(stored: Option<&str>, rates: &RateTable) -> Self {
        let Some(stored) = stored else {
            return Self::for_rates(rates);
        };

        match Self::from_json(stored, rates) {
            Ok(settings) => settings,
            Err(err) => {
                warn!(
                    key = SETTINGS_STORAGE_KEY,
                    error = %err,
                    "Failed to load settings, using defaults"
                );
                Self::for_rates(rates)
            }
        }
    }

    /// Serializes the record for a settings store.
    pub fn to_json(&self) -> String {
        serde_json::json!({
            "include_health": self.include_health,
            "minimum_salary": self.minimum_salary,
            "default_hours": self.default_hours,
        })
        .to_string()
    }
}

/// A partial settings change; absent fields keep their current value.
///
/// Accepts both snake_case and camelCase field names so records written by
/// the mobile client can be read back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsUpdate {
    /// New value for [`Settings::include_health`].
    #[serde(default, alias = "includeHealth", skip_serializing_if = "Option::is_none")]
    pub include_health: Option<bool>,
    /// New value for [`Settings::minimum_salary`].
    #[serde(default, alias = "minimumSalary", skip_serializing_if = "Option::is_none")]
    pub minimum_salary: Option<Decimal>,
    /// New value for [`Settings::default_hours`].
    #[serde(default, alias = "defaultHours", skip_serializing_if = "Option::is_none")]
    pub default_hours: Option<Decimal>,
}
