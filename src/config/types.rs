//! Configuration types for the regulatory rate table.
//!
//! This module contains the strongly-typed structures that describe the
//! statutory figures for one configured year. They are deserialized from a
//! YAML rate file or built from the compiled-in defaults.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Month and day on which the second-semester regime begins (July 15).
pub const SECOND_SEMESTER_START: (u32, u32) = (7, 15);

/// A pair of values that differ between the first and second semester.
///
/// The first semester runs from January 1 through July 14 inclusive; the
/// second from July 15 through December 31.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemesterValues {
    /// Value for January 1 - July 14 (H1).
    pub first_semester: Decimal,
    /// Value for July 15 - December 31 (H2).
    pub second_semester: Decimal,
}

impl SemesterValues {
    /// Returns the value that applies on the given date.
    pub fn for_date(&self, date: NaiveDate) -> Decimal {
        if is_first_semester(date) {
            self.first_semester
        } else {
            self.second_semester
        }
    }
}

/// Returns true when the date falls in the first semester (Jan 1 - Jul 14).
///
/// Only month and day are compared, so the result is the same for every year.
///
/// # Example
///
/// ```
/// use domestic_payroll::config::is_first_semester;
/// use chrono::NaiveDate;
///
/// assert!(is_first_semester(NaiveDate::from_ymd_opt(2026, 7, 14).unwrap()));
/// assert!(!is_first_semester(NaiveDate::from_ymd_opt(2026, 7, 15).unwrap()));
/// ```
pub fn is_first_semester(date: NaiveDate) -> bool {
    (date.month(), date.day()) < SECOND_SEMESTER_START
}

/// Percentage rates applied to benefit and contribution bases.
///
/// All values are fractions (0.0833 means 8.33%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PercentageRates {
    /// Prima de servicios.
    pub prima: Decimal,
    /// Cesantías.
    pub cesantias: Decimal,
    /// Interest on cesantías, applied to the cesantías amount.
    pub intereses_cesantias: Decimal,
    /// Vacations (wage-only base).
    pub vacations: Decimal,
    /// Employer share of pension.
    pub pension_employer: Decimal,
    /// Worker share of pension.
    pub pension_worker: Decimal,
    /// Employer share of health.
    pub health_employer: Decimal,
    /// Worker share of health.
    pub health_worker: Decimal,
    /// Compensation fund levy (employer only).
    pub caja: Decimal,
    /// Workplace-risk insurance, risk level I (employer only).
    pub arl_level_1: Decimal,
}

/// The statutory figures for one configured year.
///
/// A `RateTable` is immutable once built. Calculation functions take it by
/// reference, and the only per-call override is the minimum wage.
///
/// # Example
///
/// ```
/// use domestic_payroll::config::RateTable;
/// use rust_decimal::Decimal;
///
/// let table = RateTable::default();
/// assert_eq!(table.year, 2026);
/// assert_eq!(table.minimum_wage, Decimal::new(1_750_905, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    /// The year these figures apply to.
    pub year: i32,
    /// Statutory monthly minimum wage (SMMLV).
    pub minimum_wage: Decimal,
    /// Monthly transport allowance. Informational; pay uses `transport_hourly`.
    pub transport_allowance: Decimal,
    /// Monthly-hours divisors used to derive the hourly wage.
    pub monthly_hours: SemesterValues,
    /// Fixed transport amount paid per worked hour.
    pub transport_hourly: SemesterValues,
    /// Night surcharge applied to the wage portion only.
    pub night_surcharge: Decimal,
    /// Benefit and contribution percentages.
    pub percentages: PercentageRates,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            year: 2026,
            minimum_wage: Decimal::new(1_750_905, 0),
            transport_allowance: Decimal::new(249_095, 0),
            monthly_hours: SemesterValues {
                first_semester: Decimal::new(220, 0),
                second_semester: Decimal::new(210, 0),
            },
            transport_hourly: SemesterValues {
                first_semester: Decimal::new(1132, 0),
                second_semester: Decimal::new(1186, 0),
            },
            night_surcharge: Decimal::new(35, 2),
            percentages: PercentageRates {
                prima: Decimal::new(833, 4),
                cesantias: Decimal::new(833, 4),
                intereses_cesantias: Decimal::new(12, 2),
                vacations: Decimal::new(417, 4),
                pension_employer: Decimal::new(12, 2),
                pension_worker: Decimal::new(4, 2),
                health_employer: Decimal::new(85, 3),
                health_worker: Decimal::new(4, 2),
                caja: Decimal::new(4, 2),
                arl_level_1: Decimal::new(522, 5),
            },
        }
    }
}

impl RateTable {
    /// Resolves an optional minimum-wage override against this table.
    ///
    /// `None` and `Some(0)` both fall back to [`RateTable::minimum_wage`];
    /// any other value, including a negative one, is used as given.
    pub fn resolve_minimum_wage(&self, custom: Option<Decimal>) -> Decimal {
        custom
            .filter(|salary| !salary.is_zero())
            .unwrap_or(self.minimum_wage)
    }

    /// Multiplier applied to the hourly wage on night shifts (1 + surcharge).
    pub fn night_multiplier(&self) -> Decimal {
        Decimal::ONE + self.night_surcharge
    }
}
