//! Calculation result models.
//!
//! This module contains the structured outputs of the engine: per-day pay,
//! accruals, PILA contributions and the consolidated [`MonthResult`]. All
//! amounts are unrounded; formatting belongs to the presentation layer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

/// Hourly rates derived for a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSet {
    /// Minimum wage divided by the semester's monthly-hours divisor.
    pub hourly_rate: Decimal,
    /// The semester's fixed transport amount per hour.
    pub transport_hourly: Decimal,
}

/// Direct pay for a single worked day.
///
/// # Example
///
/// ```
/// use domestic_payroll::calculation::calculate_direct_pay;
/// use domestic_payroll::config::RateTable;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// let pay = calculate_direct_pay(Decimal::new(8, 0), false, date, None, &RateTable::default());
/// assert_eq!(pay.total_pay.round_dp(1), Decimal::new(727253, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectPayResult {
    /// Hours worked.
    pub hours: Decimal,
    /// Whether the night surcharge applied.
    pub is_night: bool,
    /// Hourly wage before any surcharge.
    pub base_rate: Decimal,
    /// Hourly wage actually paid (base rate, or base rate x 1.35 at night).
    pub active_hourly_rate: Decimal,
    /// Transport paid per hour; never surcharged.
    pub transport_hour: Decimal,
    /// `active_hourly_rate + transport_hour`.
    pub total_hourly_pay: Decimal,
    /// Wage portion of the day: `hours * active_hourly_rate`.
    pub salary_part: Decimal,
    /// Transport portion of the day: `hours * transport_hour`.
    pub transport_part: Decimal,
    /// `hours * total_hourly_pay`.
    pub total_pay: Decimal,
}

/// Employer benefit accruals for a day or an aggregated period.
///
/// Accruals add component-wise, so a period total is the sum of its days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualResult {
    /// Prima de servicios.
    pub prima: Decimal,
    /// Cesantías.
    pub cesantias: Decimal,
    /// Interest on cesantías.
    pub intereses: Decimal,
    /// Vacations (computed on wage only, transport excluded).
    pub vacations: Decimal,
    /// Sum of the four components.
    pub total_accruals: Decimal,
}

impl Add for AccrualResult {
    type Output = AccrualResult;

    fn add(self, other: AccrualResult) -> AccrualResult {
        AccrualResult {
            prima: self.prima + other.prima,
            cesantias: self.cesantias + other.cesantias,
            intereses: self.intereses + other.intereses,
            vacations: self.vacations + other.vacations,
            total_accruals: self.total_accruals + other.total_accruals,
        }
    }
}

impl Sum for AccrualResult {
    fn sum<I: Iterator<Item = AccrualResult>>(iter: I) -> AccrualResult {
        iter.fold(AccrualResult::default(), Add::add)
    }
}

/// PILA social-security contributions for a period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionResult {
    /// Banded contribution weeks (0-4).
    pub weeks: u32,
    /// Contribution base: `(minimum wage / 4) * weeks`.
    pub total_ibc: Decimal,
    /// Combined pension (employer + worker).
    pub pension: Decimal,
    /// Employer share of pension.
    pub pension_employer: Decimal,
    /// Worker share of pension.
    pub pension_worker: Decimal,
    /// Combined health (employer + worker); zero when health is excluded.
    pub health: Decimal,
    /// Employer share of health.
    pub health_employer: Decimal,
    /// Worker share of health.
    pub health_worker: Decimal,
    /// Compensation fund levy (employer only).
    pub caja: Decimal,
    /// Workplace-risk insurance on the full minimum wage (employer only).
    pub arl: Decimal,
    /// Everything the employer pays on top of wages.
    pub employer_portion: Decimal,
    /// Everything withheld from the worker's pay.
    pub worker_portion: Decimal,
    /// `employer_portion + worker_portion`.
    pub total: Decimal,
}

/// The worker's share of PILA for a given contribution base.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerContribution {
    /// Worker pension.
    pub pension: Decimal,
    /// Worker health; zero when health is excluded.
    pub health: Decimal,
    /// `pension + health`.
    pub total: Decimal,
}

/// Aggregated pay figures for a month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaySummary {
    /// Number of selected dates.
    pub days_worked: u32,
    /// Total hours across all days.
    pub hours: Decimal,
    /// Total direct pay, surcharge and transport included.
    pub gross_pay: Decimal,
    /// Wage at the base rate, surcharge excluded.
    pub base_salary: Decimal,
    /// Transport paid.
    pub transport: Decimal,
    /// Night surcharge paid. Already part of `gross_pay`.
    pub surcharge: Decimal,
    /// Worker PILA withheld (equals `pila.worker_portion`).
    pub worker_pila_deduction: Decimal,
    /// `gross_pay - worker_pila_deduction`.
    pub net_pay: Decimal,
    /// `base_salary / hours`, or zero when no hours were worked.
    pub effective_hourly_rate: Decimal,
}

/// The consolidated result of a month calculation.
///
/// Created fresh on every call and never retained by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthResult {
    /// Pay totals.
    pub pay: PaySummary,
    /// Accrual totals.
    pub accruals: AccrualResult,
    /// Contributions for the whole selection.
    pub pila: ContributionResult,
}

impl MonthResult {
    /// Total monthly cost to the employer.
    ///
    /// Gross pay (of which the worker's PILA share is withheld and remitted),
    /// the employer's PILA share, and the accrued benefits.
    pub fn employer_cost(&self) -> Decimal {
        self.pay.gross_pay + self.pila.employer_portion + self.accruals.total_accruals
    }

    /// True when days were paid but contributions consume the whole net pay.
    pub fn net_pay_exhausted(&self) -> bool {
        self.pay.gross_pay > Decimal::ZERO && self.pay.net_pay <= Decimal::ZERO
    }
}
