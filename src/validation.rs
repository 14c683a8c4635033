//! Input validation applied before figures reach the engine.
//!
//! The calculation functions accept any number. Clamping hours and flagging
//! a sub-minimum salary are the caller's job, and this module is what callers
//! use to do it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::RateTable;
use crate::error::{EngineError, EngineResult};
use crate::models::MonthResult;

/// Fewest hours that can be recorded for a worked day.
pub const MIN_HOURS_PER_DAY: Decimal = Decimal::from_parts(1, 0, 0, false, 0);
/// Most hours that can be recorded for a worked day.
pub const MAX_HOURS_PER_DAY: Decimal = Decimal::from_parts(24, 0, 0, false, 0);
/// Hours used when none were entered.
pub const DEFAULT_HOURS_PER_DAY: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Largest minimum-salary override accepted, as a multiple of the table's SMMLV.
pub const MAX_SALARY_MULTIPLE: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// Warning code for a minimum salary below the statutory floor.
pub const SALARY_BELOW_MINIMUM: &str = "SALARY_BELOW_MINIMUM";
/// Warning code for hours that were adjusted into the valid range.
pub const HOURS_CLAMPED: &str = "HOURS_CLAMPED";
/// Warning code for a month whose worker contributions consume the net pay.
pub const NET_PAY_EXHAUSTED: &str = "NET_PAY_EXHAUSTED";

/// An advisory raised by validation. Never blocks a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("low", "medium", "high").
    pub severity: String,
}

/// Clamps raw hour input to `[1, 24]`.
///
/// Zero is treated as "nothing entered" and becomes
/// [`DEFAULT_HOURS_PER_DAY`] before clamping.
///
/// # Example
///
/// ```
/// use domestic_payroll::validation::clamp_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(clamp_hours(Decimal::new(12, 0)), Decimal::new(12, 0));
/// assert_eq!(clamp_hours(Decimal::ZERO), Decimal::new(8, 0));
/// assert_eq!(clamp_hours(Decimal::new(-5, 0)), Decimal::new(1, 0));
/// assert_eq!(clamp_hours(Decimal::new(25, 0)), Decimal::new(24, 0));
/// ```
pub fn clamp_hours(hours: Decimal) -> Decimal {
    let hours = if hours.is_zero() {
        DEFAULT_HOURS_PER_DAY
    } else {
        hours
    };
    hours.clamp(MIN_HOURS_PER_DAY, MAX_HOURS_PER_DAY)
}

/// Returns true when `salary` is at least the table's minimum wage.
pub fn is_valid_salary(salary: Decimal, rates: &RateTable) -> bool {
    salary >= rates.minimum_wage
}

/// Largest minimum-salary override accepted for `rates`.
pub fn salary_ceiling(rates: &RateTable) -> Decimal {
    rates
        .minimum_wage
        .checked_mul(MAX_SALARY_MULTIPLE)
        .unwrap_or(Decimal::MAX)
}

/// Rejects a minimum-salary override the engine cannot total without
/// overflowing.
///
/// Negative amounts and amounts above [`salary_ceiling`] are errors; zero
/// means "not provided" and is accepted.
///
/// # Example
///
/// ```
/// use domestic_payroll::config::RateTable;
/// use domestic_payroll::validation::check_salary_bounds;
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::default();
/// assert!(check_salary_bounds(Decimal::new(2_000_000, 0), &rates).is_ok());
/// assert!(check_salary_bounds(Decimal::MAX, &rates).is_err());
/// ```
pub fn check_salary_bounds(salary: Decimal, rates: &RateTable) -> EngineResult<()> {
    let ceiling = salary_ceiling(rates);
    if salary < Decimal::ZERO || salary > ceiling {
        return Err(EngineError::SalaryOutOfRange { salary, ceiling });
    }
    Ok(())
}

/// Advisory warning for a proposed minimum-salary override.
///
/// Zero means "not provided" and never warns; any positive amount below the
/// statutory minimum does.
pub fn salary_warning(salary: Decimal, rates: &RateTable) -> Option<ValidationWarning> {
    if salary <= Decimal::ZERO || is_valid_salary(salary, rates) {
        return None;
    }

    Some(ValidationWarning {
        code: SALARY_BELOW_MINIMUM.to_string(),
        message: format!(
            "Minimum salary {} is below the {} SMMLV of {}",
            salary, rates.year, rates.minimum_wage
        ),
        severity: "medium".to_string(),
    })
}

/// Clamps hours for a specific day, reporting when the value changed.
///
/// A zero input is substituted silently; only out-of-range values warn.
pub fn clamp_day_hours(date: NaiveDate, hours: Decimal) -> (Decimal, Option<ValidationWarning>) {
    let clamped = clamp_hours(hours);
    if hours.is_zero() || clamped == hours {
        return (clamped, None);
    }

    let warning = ValidationWarning {
        code: HOURS_CLAMPED.to_string(),
        message: format!("Hours for {} adjusted from {} to {}", date, hours, clamped),
        severity: "low".to_string(),
    };
    (clamped, Some(warning))
}

/// Warns when days were paid but the worker's PILA share leaves no net pay.
///
/// Happens with few short days, since contributions are charged per banded
/// week rather than per hour worked.
pub fn net_pay_warning(result: &MonthResult) -> Option<ValidationWarning> {
    if !result.net_pay_exhausted() {
        return None;
    }

    Some(ValidationWarning {
        code: NET_PAY_EXHAUSTED.to_string(),
        message: format!(
            "Worker contributions of {} exceed gross pay of {}",
            result.pila.worker_portion, result.pay.gross_pay
        ),
        severity: "high".to_string(),
    })
}
