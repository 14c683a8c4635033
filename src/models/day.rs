//! Worked-day models.
//!
//! This module defines [`DayEntry`] and the [`SelectedDays`] map that callers
//! hand to the month aggregator.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One worked day.
///
/// Hours are expected to be already clamped to `[1, 24]` by the caller
/// (see [`crate::validation::clamp_hours`]); the engine does not re-check.
///
/// # Example
///
/// ```
/// use domestic_payroll::models::DayEntry;
/// use rust_decimal::Decimal;
///
/// let day = DayEntry::night(Decimal::new(8, 0));
/// assert!(day.is_night);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
    /// Hours worked on the day.
    pub hours: Decimal,
    /// Whether the shift was worked at night (wage surcharge applies).
    #[serde(default, alias = "isNight")]
    pub is_night: bool,
}

impl DayEntry {
    /// A day shift of the given length.
    pub fn day(hours: Decimal) -> Self {
        Self {
            hours,
            is_night: false,
        }
    }

    /// A night shift of the given length.
    pub fn night(hours: Decimal) -> Self {
        Self {
            hours,
            is_night: true,
        }
    }
}

/// Worked days keyed by calendar date, one entry per date.
///
/// Serialized as an object whose keys are ISO `YYYY-MM-DD` strings. A key
/// that is not a valid date is rejected when the map is deserialized, so the
/// calculation code only ever sees real dates.
pub type SelectedDays = BTreeMap<NaiveDate, DayEntry>;
