//! Calculation logic for the payroll engine.
//!
//! This module contains the pure calculation functions: hourly rate and
//! direct pay per day, employer accruals, banded PILA contributions, and the
//! month aggregation that combines them. None of them perform I/O or fail.

mod accruals;
mod contributions;
mod month;
mod wage;

pub use crate::config::is_first_semester;
pub use accruals::calculate_accruals;
pub use contributions::{
    MAX_CONTRIBUTION_WEEKS, calculate_pila, calculate_worker_pila_contribution,
    contribution_weeks,
};
pub use month::{DayBreakdown, calculate_day_breakdown, calculate_detailed_month_totals};
pub use wage::{calculate_direct_pay, get_rates};
