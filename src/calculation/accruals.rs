//! Employer benefit accrual calculation.
//!
//! Prima, cesantías and interest on cesantías accrue on wage plus transport.
//! Vacations accrue on wage only.

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::models::AccrualResult;

/// Calculates the benefit accruals earned by a slice of worked hours.
///
/// * `salary_base = (base_hourly_rate + transport_hourly_rate) * hours`
/// * `prima = salary_base * 8.33%`
/// * `cesantias = salary_base * 8.33%`
/// * `intereses = cesantias * 12%`
/// * `vacations = base_hourly_rate * hours * 4.17%`
///
/// Interest is taken on this slice's cesantías, so summing per-day results
/// gives the period interest directly. Do not apply the 12% again to a
/// summed cesantías total.
///
/// # Example
///
/// ```
/// use domestic_payroll::calculation::calculate_accruals;
/// use domestic_payroll::config::RateTable;
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::default();
/// let with_transport = calculate_accruals(Decimal::new(10_000, 0), Decimal::new(2_000, 0), Decimal::new(8, 0), &rates);
/// let without = calculate_accruals(Decimal::new(10_000, 0), Decimal::ZERO, Decimal::new(8, 0), &rates);
/// assert_eq!(with_transport.vacations, without.vacations);
/// ```
pub fn calculate_accruals(
    base_hourly_rate: Decimal,
    transport_hourly_rate: Decimal,
    hours: Decimal,
    rates: &RateTable,
) -> AccrualResult {
    let pct = &rates.percentages;
    let salary_base = (base_hourly_rate + transport_hourly_rate) * hours;

    let prima = salary_base * pct.prima;
    let cesantias = salary_base * pct.cesantias;
    let intereses = cesantias * pct.intereses_cesantias;
    let vacations = base_hourly_rate * hours * pct.vacations;

    AccrualResult {
        prima,
        cesantias,
        intereses,
        vacations,
        total_accruals: prima + cesantias + intereses + vacations,
    }
}
