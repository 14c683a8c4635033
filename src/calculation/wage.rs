//! Hourly wage and direct pay calculation.
//!
//! This module derives the hourly rate for a date (first or second semester
//! divisor) and computes the direct pay for one worked day, including the
//! night surcharge and the hourly transport amount.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::models::{DirectPayResult, RateSet};

/// Derives the hourly wage and hourly transport for a date.
///
/// The hourly wage is the minimum wage (the override when given and
/// non-zero, otherwise the table's) divided by the semester's monthly-hours
/// divisor: 220 from January 1 through July 14, 210 from July 15 onwards.
/// Transport per hour is the semester's fixed amount and does not scale with
/// the minimum wage.
///
/// `rates` must have positive monthly-hours divisors, as every table
/// produced by [`crate::config::ConfigLoader`] does; a zero divisor panics.
///
/// # Example
///
/// ```
/// use domestic_payroll::calculation::get_rates;
/// use domestic_payroll::config::RateTable;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::default();
/// let august = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
/// let set = get_rates(august, Some(Decimal::new(2_100_000, 0)), &rates);
/// assert_eq!(set.hourly_rate, Decimal::new(10_000, 0));
/// assert_eq!(set.transport_hourly, Decimal::new(1186, 0));
/// ```
pub fn get_rates(
    date: NaiveDate,
    custom_minimum_salary: Option<Decimal>,
    rates: &RateTable,
) -> RateSet {
    let minimum_wage = rates.resolve_minimum_wage(custom_minimum_salary);
    let divisor = rates.monthly_hours.for_date(date);

    RateSet {
        hourly_rate: minimum_wage / divisor,
        transport_hourly: rates.transport_hourly.for_date(date),
    }
}

/// Calculates the direct pay for one worked day.
///
/// The night surcharge multiplies the wage portion only; transport is paid
/// at the same hourly amount day or night.
///
/// `hours` is not range-checked. Callers clamp it beforehand with
/// [`crate::validation::clamp_hours`]; anything else scales the result
/// proportionally, negative values included.
///
/// # Arguments
///
/// * `hours` - Hours worked on the day
/// * `is_night` - Whether the night surcharge applies
/// * `date` - The calendar date, which selects the semester regime
/// * `custom_minimum_salary` - Optional minimum-wage override
/// * `rates` - The rate table for the configured year
pub fn calculate_direct_pay(
    hours: Decimal,
    is_night: bool,
    date: NaiveDate,
    custom_minimum_salary: Option<Decimal>,
    rates: &RateTable,
) -> DirectPayResult {
    let RateSet {
        hourly_rate,
        transport_hourly,
    } = get_rates(date, custom_minimum_salary, rates);

    let active_hourly_rate = if is_night {
        hourly_rate * rates.night_multiplier()
    } else {
        hourly_rate
    };
    let total_hourly_pay = active_hourly_rate + transport_hourly;

    DirectPayResult {
        hours,
        is_night,
        base_rate: hourly_rate,
        active_hourly_rate,
        transport_hour: transport_hourly,
        total_hourly_pay,
        salary_part: hours * active_hourly_rate,
        transport_part: hours * transport_hourly,
        total_pay: hours * total_hourly_pay,
    }
}
