//! PILA social-security contribution calculation.
//!
//! Domestic workers paid by the day contribute on a banded number of weeks
//! rather than on actual earnings. The contribution base (IBC) is a quarter
//! of the minimum wage per banded week, and each PILA component is a fixed
//! percentage of that base, except ARL which is charged on the full minimum
//! wage.

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::models::{ContributionResult, WorkerContribution};

/// The highest number of contribution weeks a month can reach.
pub const MAX_CONTRIBUTION_WEEKS: u32 = 4;

/// Maps the number of days worked to banded contribution weeks.
///
/// | Days  | Weeks |
/// |-------|-------|
/// | 0     | 0     |
/// | 1-7   | 1     |
/// | 8-14  | 2     |
/// | 15-21 | 3     |
/// | 22+   | 4     |
///
/// There is no fifth band: any count above 21 stays at four weeks.
///
/// # Example
///
/// ```
/// use domestic_payroll::calculation::contribution_weeks;
///
/// assert_eq!(contribution_weeks(0), 0);
/// assert_eq!(contribution_weeks(7), 1);
/// assert_eq!(contribution_weeks(8), 2);
/// assert_eq!(contribution_weeks(31), 4);
/// ```
pub fn contribution_weeks(days_worked: u32) -> u32 {
    match days_worked {
        0 => 0,
        1..=7 => 1,
        8..=14 => 2,
        15..=21 => 3,
        _ => MAX_CONTRIBUTION_WEEKS,
    }
}

/// Calculates the PILA contributions for a period.
///
/// # Arguments
///
/// * `days_worked` - Number of distinct days worked in the period
/// * `include_health` - Whether health contributions are paid
/// * `minimum_salary` - Optional minimum-wage override (zero means default)
/// * `rates` - The rate table for the configured year
///
/// # Returns
///
/// A [`ContributionResult`] where:
/// - `total_ibc = (minimum_salary / 4) * weeks`
/// - pension, health and caja are percentages of `total_ibc`
/// - `arl` is a percentage of the full minimum salary, and zero when no
///   week is contributed
pub fn calculate_pila(
    days_worked: u32,
    include_health: bool,
    minimum_salary: Option<Decimal>,
    rates: &RateTable,
) -> ContributionResult {
    let pct = &rates.percentages;
    let minimum_salary = rates.resolve_minimum_wage(minimum_salary);
    let weeks = contribution_weeks(days_worked);

    let weekly_ibc = minimum_salary / Decimal::from(MAX_CONTRIBUTION_WEEKS);
    let total_ibc = weekly_ibc * Decimal::from(weeks);

    // ARL is based on the full minimum wage, not the IBC, so the zero-week
    // case has to be guarded explicitly.
    let arl = if weeks > 0 {
        minimum_salary * pct.arl_level_1
    } else {
        Decimal::ZERO
    };
    let caja = total_ibc * pct.caja;

    let pension_employer = total_ibc * pct.pension_employer;
    let worker = calculate_worker_pila_contribution(total_ibc, include_health, rates);
    let health_employer = if include_health {
        total_ibc * pct.health_employer
    } else {
        Decimal::ZERO
    };

    let employer_portion = arl + caja + pension_employer + health_employer;
    let worker_portion = worker.total;

    ContributionResult {
        weeks,
        total_ibc,
        pension: pension_employer + worker.pension,
        pension_employer,
        pension_worker: worker.pension,
        health: health_employer + worker.health,
        health_employer,
        health_worker: worker.health,
        caja,
        arl,
        employer_portion,
        worker_portion,
        total: employer_portion + worker_portion,
    }
}

/// Calculates the worker's share of PILA for a contribution base.
///
/// Pass the `total_ibc` already produced by [`calculate_pila`]; deriving the
/// base some other way (e.g. from base salary) double-applies rates.
pub fn calculate_worker_pila_contribution(
    total_ibc: Decimal,
    include_health: bool,
    rates: &RateTable,
) -> WorkerContribution {
    let pct = &rates.percentages;
    let pension = total_ibc * pct.pension_worker;
    let health = if include_health {
        total_ibc * pct.health_worker
    } else {
        Decimal::ZERO
    };

    WorkerContribution {
        pension,
        health,
        total: pension + health,
    }
}
