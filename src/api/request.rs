//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint and the validation step that turns raw input into engine input.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::RateTable;
use crate::error::EngineResult;
use crate::models::{DayEntry, SelectedDays, Settings, SettingsUpdate};
use crate::validation::{
    ValidationWarning, check_salary_bounds, clamp_day_hours, salary_warning,
};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Worked days keyed by ISO date.
    #[serde(alias = "selectedDays")]
    pub selected_days: BTreeMap<NaiveDate, DayRequest>,
    /// Settings to apply over the defaults.
    #[serde(default)]
    pub settings: SettingsUpdate,
}

/// A worked day as entered by the user.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DayRequest {
    /// Raw hours; missing means the settings' default hours.
    #[serde(default)]
    pub hours: Option<Decimal>,
    /// Whether the shift was at night.
    #[serde(default, alias = "isNight")]
    pub is_night: bool,
}

/// Engine-ready input produced from a request.
#[derive(Debug, Clone)]
pub struct PreparedCalculation {
    /// Days with hours clamped to the valid range.
    pub selected_days: SelectedDays,
    /// Settings resolved over the defaults.
    pub settings: Settings,
    /// Advisories raised while preparing the input.
    pub warnings: Vec<ValidationWarning>,
}

impl CalculationRequest {
    /// Resolves settings and clamps hours before the request reaches the engine.
    ///
    /// Fails when the minimum-salary override is negative or above
    /// [`crate::validation::salary_ceiling`].
    pub fn prepare(self, rates: &RateTable) -> EngineResult<PreparedCalculation> {
        if let Some(salary) = self.settings.minimum_salary {
            check_salary_bounds(salary, rates)?;
        }

        let settings = Settings::for_rates(rates).apply(&self.settings, rates);

        let mut warnings: Vec<ValidationWarning> = self
            .settings
            .minimum_salary
            .and_then(|salary| salary_warning(salary, rates))
            .into_iter()
            .collect();

        let selected_days = self
            .selected_days
            .into_iter()
            .map(|(date, day)| {
                let raw = day.hours.unwrap_or(settings.default_hours);
                let (hours, warning) = clamp_day_hours(date, raw);
                warnings.extend(warning);
                (
                    date,
                    DayEntry {
                        hours,
                        is_night: day.is_night,
                    },
                )
            })
            .collect();

        Ok(PreparedCalculation {
            selected_days,
            settings,
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::validation::{HOURS_CLAMPED, SALARY_BELOW_MINIMUM};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_deserialize_calculation_request() {
        let json = r#"{
            "selected_days": {
                "2026-01-01": { "hours": 8, "is_night": false },
                "2026-01-02": { "hours": "8", "is_night": true }
            },
            "settings": { "include_health": false }
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.selected_days.len(), 2);
        assert!(request.selected_days[&date("2026-01-02")].is_night);
        assert_eq!(request.settings.include_health, Some(false));
    }

    #[test]
    fn test_deserialize_camel_case_request() {
        let json = r#"{
            "selectedDays": { "2026-01-01": { "hours": 6, "isNight": true } },
            "settings": { "minimumSalary": 2000000 }
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert!(request.selected_days[&date("2026-01-01")].is_night);
        assert_eq!(request.settings.minimum_salary, Some(dec("2000000")));
    }

    #[test]
    fn test_invalid_date_key_fails_to_parse() {
        let json = r#"{ "selected_days": { "01/02/2026": { "hours": 8 } } }"#;
        let result: Result<CalculationRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_prepare_uses_default_hours_when_missing() {
        let rates = RateTable::default();
        let mut request = CalculationRequest::default();
        request.settings.default_hours = Some(dec("6"));
        request
            .selected_days
            .insert(date("2026-01-01"), DayRequest::default());

        let prepared = request.prepare(&rates).unwrap();

        assert_eq!(prepared.selected_days[&date("2026-01-01")].hours, dec("6"));
        assert!(prepared.warnings.is_empty());
    }

    #[test]
    fn test_prepare_clamps_hours_and_warns() {
        let rates = RateTable::default();
        let mut request = CalculationRequest::default();
        request.selected_days.insert(
            date("2026-01-01"),
            DayRequest {
                hours: Some(dec("30")),
                is_night: false,
            },
        );

        let prepared = request.prepare(&rates).unwrap();

        assert_eq!(prepared.selected_days[&date("2026-01-01")].hours, dec("24"));
        assert_eq!(prepared.warnings.len(), 1);
        assert_eq!(prepared.warnings[0].code, HOURS_CLAMPED);
    }

    #[test]
    fn test_prepare_warns_on_sub_minimum_salary() {
        let rates = RateTable::default();
        let mut request = CalculationRequest::default();
        request.settings.minimum_salary = Some(dec("1423500"));

        let prepared = request.prepare(&rates).unwrap();

        assert_eq!(prepared.settings.minimum_salary, dec("1423500"));
        assert_eq!(prepared.warnings.len(), 1);
        assert_eq!(prepared.warnings[0].code, SALARY_BELOW_MINIMUM);
    }

    #[test]
    fn test_prepare_zero_salary_uses_table_default() {
        let rates = RateTable::default();
        let mut request = CalculationRequest::default();
        request.settings.minimum_salary = Some(Decimal::ZERO);

        let prepared = request.prepare(&rates).unwrap();

        assert_eq!(prepared.settings.minimum_salary, dec("1750905"));
        assert!(prepared.warnings.is_empty());
    }

    #[test]
    fn test_prepare_rejects_salary_above_ceiling() {
        let rates = RateTable::default();
        let mut request = CalculationRequest::default();
        request.settings.minimum_salary = Some(Decimal::MAX);
        request.selected_days.insert(
            date("2026-01-01"),
            DayRequest {
                hours: Some(dec("24")),
                is_night: true,
            },
        );

        let result = request.prepare(&rates);

        assert!(matches!(result, Err(EngineError::SalaryOutOfRange { .. })));
    }

    #[test]
    fn test_prepare_rejects_negative_salary() {
        let rates = RateTable::default();
        let mut request = CalculationRequest::default();
        request.settings.minimum_salary = Some(dec("-1"));

        assert!(request.prepare(&rates).is_err());
    }
}
