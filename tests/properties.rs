//! Property-based tests for the calculation engine.
//!
//! These tests check the laws the figures must obey for any input:
//! week banding, transport exclusion from vacations, additivity of daily
//! figures and the semester boundary.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::BTreeSet;

use domestic_payroll::calculation::{
    MAX_CONTRIBUTION_WEEKS, calculate_accruals, calculate_day_breakdown, calculate_direct_pay,
    calculate_detailed_month_totals, calculate_pila, contribution_weeks, is_first_semester,
};
use domestic_payroll::config::RateTable;
use domestic_payroll::models::{DayEntry, SelectedDays, Settings};

// Generators

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (1u32..=365).prop_map(|ordinal| NaiveDate::from_yo_opt(2026, ordinal).unwrap())
}

/// Whole and half hours in `[1, 24]`.
fn arb_hours() -> impl Strategy<Value = Decimal> {
    (2i64..=48).prop_map(|halves| Decimal::new(halves * 5, 1))
}

fn arb_salary() -> impl Strategy<Value = Decimal> {
    (1_000_000i64..=5_000_000).prop_map(|s| Decimal::new(s, 0))
}

fn arb_day() -> impl Strategy<Value = DayEntry> {
    (arb_hours(), any::<bool>()).prop_map(|(hours, is_night)| DayEntry { hours, is_night })
}

fn arb_selection(max_days: usize) -> impl Strategy<Value = SelectedDays> {
    prop::collection::btree_map(arb_date(), arb_day(), 0..max_days)
}

fn arb_settings() -> impl Strategy<Value = Settings> {
    (any::<bool>(), arb_salary()).prop_map(|(include_health, minimum_salary)| Settings {
        include_health,
        minimum_salary,
        ..Settings::default()
    })
}

fn close(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() <= Decimal::new(1, 9)
}

proptest! {
    #[test]
    fn prop_weeks_follow_seven_day_bands(days in 0u32..=400) {
        let expected = days.div_ceil(7).min(MAX_CONTRIBUTION_WEEKS);
        prop_assert_eq!(contribution_weeks(days), expected);
    }

    #[test]
    fn prop_weeks_never_decrease(days in 0u32..400) {
        prop_assert!(contribution_weeks(days) <= contribution_weeks(days + 1));
    }

    #[test]
    fn prop_zero_days_contribute_nothing(
        include_health in any::<bool>(),
        salary in prop::option::of(arb_salary()),
    ) {
        let result = calculate_pila(0, include_health, salary, &RateTable::default());
        prop_assert_eq!(result.weeks, 0);
        prop_assert_eq!(result.total, Decimal::ZERO);
        prop_assert_eq!(result.arl, Decimal::ZERO);
    }

    #[test]
    fn prop_pila_parts_add_up(
        days in 1u32..=31,
        include_health in any::<bool>(),
        salary in arb_salary(),
    ) {
        let result = calculate_pila(days, include_health, Some(salary), &RateTable::default());
        prop_assert_eq!(result.pension, result.pension_employer + result.pension_worker);
        prop_assert_eq!(result.health, result.health_employer + result.health_worker);
        prop_assert_eq!(result.total, result.employer_portion + result.worker_portion);
        prop_assert!(result.total_ibc <= salary);
    }

    #[test]
    fn prop_vacations_ignore_transport(
        base in (1i64..=20_000).prop_map(|b| Decimal::new(b, 0)),
        transport_a in (0i64..=2_000).prop_map(|t| Decimal::new(t, 0)),
        transport_b in (0i64..=2_000).prop_map(|t| Decimal::new(t, 0)),
        hours in arb_hours(),
    ) {
        let rates = RateTable::default();
        let a = calculate_accruals(base, transport_a, hours, &rates);
        let b = calculate_accruals(base, transport_b, hours, &rates);
        prop_assert_eq!(a.vacations, b.vacations);
    }

    #[test]
    fn prop_semester_boundary_is_july_15(date in arb_date()) {
        let expected = (date.month(), date.day()) < (7, 15);
        prop_assert_eq!(is_first_semester(date), expected);
    }

    #[test]
    fn prop_night_never_pays_less(date in arb_date(), hours in arb_hours()) {
        let rates = RateTable::default();
        let by_day = calculate_direct_pay(hours, false, date, None, &rates);
        let by_night = calculate_direct_pay(hours, true, date, None, &rates);
        prop_assert!(by_night.total_pay > by_day.total_pay);
        prop_assert_eq!(by_night.transport_part, by_day.transport_part);
    }

    #[test]
    fn prop_net_pay_is_gross_minus_worker_share(
        days in arb_selection(31),
        settings in arb_settings(),
    ) {
        let result = calculate_detailed_month_totals(&days, &settings, &RateTable::default());
        prop_assert_eq!(result.pay.net_pay, result.pay.gross_pay - result.pila.worker_portion);
        prop_assert_eq!(result.pay.days_worked as usize, days.len());
        prop_assert_eq!(result.pila.weeks, contribution_weeks(result.pay.days_worked));
    }

    #[test]
    fn prop_month_totals_equal_sum_of_days(
        days in arb_selection(31),
        settings in arb_settings(),
    ) {
        let rates = RateTable::default();
        let result = calculate_detailed_month_totals(&days, &settings, &rates);

        let mut gross = Decimal::ZERO;
        let mut accruals = Decimal::ZERO;
        for (date, day) in &days {
            let breakdown = calculate_day_breakdown(*date, day, &settings, &rates);
            gross += breakdown.pay.total_pay;
            accruals += breakdown.accruals.total_accruals;
        }

        prop_assert!(close(result.pay.gross_pay, gross));
        prop_assert!(close(result.accruals.total_accruals, accruals));
    }

    #[test]
    fn prop_pay_is_additive_over_disjoint_selections(
        dates in prop::collection::btree_set(arb_date(), 0..31),
        day in arb_day(),
        settings in arb_settings(),
    ) {
        let rates = RateTable::default();
        let (left, right): (BTreeSet<_>, BTreeSet<_>) =
            dates.iter().enumerate().partition(|(i, _)| i % 2 == 0);
        let select = |set: BTreeSet<(usize, &NaiveDate)>| -> SelectedDays {
            set.into_iter().map(|(_, date)| (*date, day)).collect()
        };
        let all: SelectedDays = dates.iter().map(|date| (*date, day)).collect();

        let whole = calculate_detailed_month_totals(&all, &settings, &rates);
        let left = calculate_detailed_month_totals(&select(left), &settings, &rates);
        let right = calculate_detailed_month_totals(&select(right), &settings, &rates);

        prop_assert!(close(whole.pay.gross_pay, left.pay.gross_pay + right.pay.gross_pay));
        prop_assert!(close(whole.pay.surcharge, left.pay.surcharge + right.pay.surcharge));
        prop_assert!(close(
            whole.accruals.total_accruals,
            left.accruals.total_accruals + right.accruals.total_accruals
        ));
        prop_assert_eq!(whole.pay.days_worked, left.pay.days_worked + right.pay.days_worked);
    }
}
