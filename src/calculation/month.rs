//! Month aggregation.
//!
//! This module folds a selection of worked days into a single
//! [`MonthResult`]: per-day direct pay and accruals are summed, and PILA is
//! computed once from the number of selected dates.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::ops::Add;
use tracing::debug;

use crate::config::RateTable;
use crate::models::{
    AccrualResult, DayEntry, DirectPayResult, MonthResult, PaySummary, SelectedDays, Settings,
};

use super::accruals::calculate_accruals;
use super::contributions::calculate_pila;
use super::wage::calculate_direct_pay;

/// Pay and accruals for one selected day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBreakdown {
    /// The worked date.
    pub date: NaiveDate,
    /// Direct pay for the day.
    pub pay: DirectPayResult,
    /// Accruals earned by the day.
    pub accruals: AccrualResult,
    /// Night surcharge paid (`base_rate * surcharge * hours`), zero by day.
    pub surcharge: Decimal,
}

/// Calculates pay and accruals for a single selected day.
///
/// Uses `settings.minimum_salary` as the minimum-wage override, exactly as
/// [`calculate_detailed_month_totals`] does for every day it aggregates.
pub fn calculate_day_breakdown(
    date: NaiveDate,
    day: &DayEntry,
    settings: &Settings,
    rates: &RateTable,
) -> DayBreakdown {
    let pay = calculate_direct_pay(
        day.hours,
        day.is_night,
        date,
        Some(settings.minimum_salary),
        rates,
    );
    let accruals = calculate_accruals(pay.base_rate, pay.transport_hour, day.hours, rates);
    let surcharge = if day.is_night {
        pay.base_rate * rates.night_surcharge * day.hours
    } else {
        Decimal::ZERO
    };

    DayBreakdown {
        date,
        pay,
        accruals,
        surcharge,
    }
}

/// Running pay totals for the fold.
#[derive(Debug, Clone, Copy, Default)]
struct PayTotals {
    hours: Decimal,
    gross_pay: Decimal,
    base_salary: Decimal,
    transport: Decimal,
    surcharge: Decimal,
}

impl PayTotals {
    fn from_day(day: &DayBreakdown) -> Self {
        Self {
            hours: day.pay.hours,
            gross_pay: day.pay.total_pay,
            base_salary: day.pay.base_rate * day.pay.hours,
            transport: day.pay.transport_part,
            surcharge: day.surcharge,
        }
    }
}

impl Add for PayTotals {
    type Output = PayTotals;

    fn add(self, other: PayTotals) -> PayTotals {
        PayTotals {
            hours: self.hours + other.hours,
            gross_pay: self.gross_pay + other.gross_pay,
            base_salary: self.base_salary + other.base_salary,
            transport: self.transport + other.transport,
            surcharge: self.surcharge + other.surcharge,
        }
    }
}

/// Calculates the consolidated pay, accruals and PILA for a selection of days.
///
/// # Arguments
///
/// * `selected_days` - Worked days keyed by date; hours already clamped
/// * `settings` - Health inclusion and the minimum-wage override
/// * `rates` - The rate table for the configured year
///
/// # Returns
///
/// A fresh [`MonthResult`]. Net pay is gross pay minus the worker's PILA
/// share, and PILA is banded on the number of selected dates, not on hours.
/// An empty selection yields all-zero totals with zero weeks and zero ARL.
///
/// # Example
///
/// ```
/// use domestic_payroll::calculation::calculate_detailed_month_totals;
/// use domestic_payroll::config::RateTable;
/// use domestic_payroll::models::{DayEntry, SelectedDays, Settings};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut days = SelectedDays::new();
/// days.insert(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(), DayEntry::day(Decimal::new(8, 0)));
/// days.insert(NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(), DayEntry::night(Decimal::new(8, 0)));
///
/// let result = calculate_detailed_month_totals(&days, &Settings::default(), &RateTable::default());
///
/// assert_eq!(result.pay.days_worked, 2);
/// assert_eq!(result.pila.weeks, 1);
/// assert_eq!(result.pay.net_pay, result.pay.gross_pay - result.pila.worker_portion);
/// ```
pub fn calculate_detailed_month_totals(
    selected_days: &SelectedDays,
    settings: &Settings,
    rates: &RateTable,
) -> MonthResult {
    let (pay, accruals) = selected_days
        .iter()
        .map(|(date, day)| calculate_day_breakdown(*date, day, settings, rates))
        .fold(
            (PayTotals::default(), AccrualResult::default()),
            |(pay, accruals), day| (pay + PayTotals::from_day(&day), accruals + day.accruals),
        );

    // A month never holds more than 31 dates; saturate rather than wrap.
    let days_worked = u32::try_from(selected_days.len()).unwrap_or(u32::MAX);
    let pila = calculate_pila(
        days_worked,
        settings.include_health,
        Some(settings.minimum_salary),
        rates,
    );

    let worker_pila_deduction = pila.worker_portion;
    let effective_hourly_rate = if pay.hours.is_zero() {
        Decimal::ZERO
    } else {
        pay.base_salary / pay.hours
    };

    debug!(
        days_worked,
        weeks = pila.weeks,
        gross_pay = %pay.gross_pay,
        worker_pila = %worker_pila_deduction,
        "Month totals calculated"
    );

    MonthResult {
        pay: PaySummary {
            days_worked,
            hours: pay.hours,
            gross_pay: pay.gross_pay,
            base_salary: pay.base_salary,
            transport: pay.transport,
            surcharge: pay.surcharge,
            worker_pila_deduction,
            net_pay: pay.gross_pay - worker_pila_deduction,
            effective_hourly_rate,
        },
        accruals,
        pila,
    }
}
