// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fleetpulse::generate::{self, CASH_BALANCE_FLOOR};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn monthly_window_shape() {
    let data = generate::monthly_financials(date(2026, 8, 25));
    assert_eq!(data.len(), 13);
    assert!(data[6].is_current);
    assert!(!data[6].is_forecast);
    for (i, p) in data.iter().enumerate() {
        assert_eq!(p.is_forecast, i > 6);
        assert_eq!(p.is_current, i == 6);
    }
    // Centered on August 2026.
    assert_eq!(data[6].month, Some(7));
    assert_eq!(data[6].year, 2026);
    assert_eq!(data[0].month, Some(1));
    assert_eq!(data[12].month, Some(1));
    assert_eq!(data[12].year, 2027);
}

#[test]
fn monthly_expense_breakdown_sums() {
    for p in generate::monthly_financials(date(2026, 1, 15)) {
        let sum = p.fuel_expense
            + p.salary_expense
            + p.maintenance_expense
            + p.admin_expense
            + p.other_expense;
        assert_eq!(p.actual_expense, sum, "{}", p.label);
    }
}

#[test]
fn monthly_health_in_bounds_and_budget_fixed() {
    for p in generate::monthly_financials(date(2026, 4, 1)) {
        assert!((0..=100).contains(&p.health_score), "{}", p.label);
        assert_eq!(p.budget_health_score, 80);
    }
}

#[test]
fn monthly_trips_run_over_budget() {
    // Performance band is 105-115% of budget.
    for p in generate::monthly_financials(date(2026, 8, 25)) {
        assert!(p.actual_trips >= p.budget_trips, "{}", p.label);
        assert!(p.actual_trips as f64 <= p.budget_trips as f64 * 1.16, "{}", p.label);
    }
}

#[test]
fn monthly_free_cash_flow_mostly_negative() {
    // Collecting 55-65% while paying out 92-98% bleeds cash; assert the
    // sign distribution, not any single draw.
    let mut negative = 0usize;
    let mut total = 0usize;
    for as_of in [date(2025, 3, 10), date(2026, 8, 25), date(2027, 11, 2)] {
        for p in generate::monthly_financials(as_of) {
            total += 1;
            if p.free_cash_flow < 0 {
                negative += 1;
            }
        }
    }
    assert!(
        negative * 4 >= total * 3,
        "expected >=75% negative FCF, got {}/{}",
        negative,
        total
    );
}

#[test]
fn monthly_cash_balance_never_below_floor() {
    for as_of in [date(2025, 1, 1), date(2026, 6, 30), date(2030, 12, 31)] {
        for p in generate::monthly_financials(as_of) {
            assert!(
                p.cash_balance >= CASH_BALANCE_FLOOR,
                "{} balance {}",
                p.label,
                p.cash_balance
            );
        }
    }
}

#[test]
fn monthly_budget_scales_with_season() {
    let data = generate::monthly_financials(date(2026, 8, 25));
    let by_month = |m: u32| data.iter().find(|p| p.month == Some(m)).unwrap();
    // Dec (1.35) budgets more trips than Apr (0.70).
    assert!(by_month(11).budget_trips > by_month(3).budget_trips);
    assert_eq!(by_month(11).budget_trips, (650.0f64 * 1.35).round() as i64);
    assert_eq!(by_month(3).budget_trips, (650.0f64 * 0.70).round() as i64);
}

#[test]
fn monthly_is_deterministic() {
    let a = generate::monthly_financials(date(2026, 8, 25));
    let b = generate::monthly_financials(date(2026, 8, 25));
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn overlapping_windows_agree_on_shared_past_months() {
    // March 2026 is a past month in both windows; same seed, same record,
    // independent of the reference date that exposed it.
    let from_aug = generate::monthly_financials(date(2026, 8, 25));
    let from_jun = generate::monthly_financials(date(2026, 6, 10));
    let a = from_aug.iter().find(|p| p.month == Some(2) && p.year == 2026).unwrap();
    let b = from_jun.iter().find(|p| p.month == Some(2) && p.year == 2026).unwrap();
    assert_eq!(a.actual_trips, b.actual_trips);
    assert_eq!(a.actual_revenue, b.actual_revenue);
    assert_eq!(a.actual_expense, b.actual_expense);
    assert_eq!(a.health_score, b.health_score);
}

#[test]
fn yearly_window_shape() {
    let data = generate::yearly_financials(date(2026, 8, 25));
    assert_eq!(data.len(), 7);
    assert_eq!(data[0].year, 2023);
    assert_eq!(data[6].year, 2029);
    assert!(data[3].is_current);
    for p in &data {
        assert_eq!(p.month, None);
        assert_eq!(p.label, p.year.to_string());
    }
}

#[test]
fn yearly_expense_breakdown_sums_and_health_bounds() {
    for p in generate::yearly_financials(date(2026, 2, 1)) {
        let sum = p.fuel_expense
            + p.salary_expense
            + p.maintenance_expense
            + p.admin_expense
            + p.other_expense;
        assert_eq!(p.actual_expense, sum, "{}", p.label);
        assert!((0..=100).contains(&p.health_score), "{}", p.label);
    }
}

#[test]
fn yearly_health_caps_total_not_halves() {
    // Each half is an uncapped ratio of 50; only the summed score clamps,
    // so an over-budget revenue year credits more than 50 on that side.
    for as_of in [date(2024, 5, 1), date(2026, 8, 25), date(2028, 10, 3)] {
        for p in generate::yearly_financials(as_of) {
            let revenue_half = p.actual_revenue as f64 / p.budget_revenue as f64 * 50.0;
            let cost_half = p.budget_expense as f64 / p.actual_expense as f64 * 50.0;
            let expected = (revenue_half + cost_half).clamp(0.0, 100.0).round() as i64;
            assert_eq!(p.health_score, expected, "{}", p.label);
        }
    }
}

#[test]
fn yearly_is_deterministic() {
    let a = generate::yearly_financials(date(2026, 8, 25));
    let b = generate::yearly_financials(date(2026, 8, 25));
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}
