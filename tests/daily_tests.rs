// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate, Weekday};
use fleetpulse::generate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn daily_window_shape() {
    let as_of = date(2026, 8, 25);
    let data = generate::daily_trips(as_of);
    assert_eq!(data.len(), 15);
    assert_eq!(data[7].date, as_of);
    assert!(data[7].is_today);
    for (i, d) in data.iter().enumerate() {
        assert_eq!(d.is_forecast, i > 7);
        assert_eq!(d.is_today, i == 7);
    }
    assert_eq!(data[0].date, date(2026, 8, 18));
    assert_eq!(data[14].date, date(2026, 9, 1));
}

#[test]
fn pending_is_actual_minus_completed() {
    for d in generate::daily_trips(date(2026, 8, 25)) {
        assert_eq!(d.pending_trips, d.actual_trips - d.completed_trips);
        assert!(d.pending_trips >= 0, "{}", d.label);
        assert!(d.completed_trips <= d.actual_trips, "{}", d.label);
    }
}

#[test]
fn daily_health_clamped() {
    for as_of in [date(2026, 1, 1), date(2026, 4, 15), date(2026, 12, 31)] {
        for d in generate::daily_trips(as_of) {
            assert!((0..=100).contains(&d.health_score), "{}", d.label);
        }
    }
}

#[test]
fn weekends_budget_fewer_trips() {
    let data = generate::daily_trips(date(2026, 8, 25));
    let weekday_budget = data
        .iter()
        .find(|d| !matches!(d.date.weekday(), Weekday::Sat | Weekday::Sun))
        .unwrap()
        .budget_trips;
    for d in &data {
        if matches!(d.date.weekday(), Weekday::Sat | Weekday::Sun) {
            assert!(d.budget_trips < weekday_budget, "{}", d.label);
        } else {
            assert_eq!(d.budget_trips, weekday_budget, "{}", d.label);
        }
    }
}

#[test]
fn revenue_and_expense_follow_trip_rates() {
    for d in generate::daily_trips(date(2026, 8, 25)) {
        assert_eq!(d.revenue, d.actual_trips * 10_500);
        assert_eq!(d.expense, d.actual_trips * 7_800);
    }
}

#[test]
fn daily_is_deterministic_per_date_seed() {
    // The same calendar day is seeded from its date, so two windows that
    // both contain it produce the same figures.
    let a = generate::daily_trips(date(2026, 8, 25));
    let b = generate::daily_trips(date(2026, 8, 20));
    let day = date(2026, 8, 22);
    let from_a = a.iter().find(|d| d.date == day).unwrap();
    let from_b = b.iter().find(|d| d.date == day).unwrap();
    assert_eq!(from_a.actual_trips, from_b.actual_trips);
    assert_eq!(from_a.completed_trips, from_b.completed_trips);
    assert_eq!(from_a.health_score, from_b.health_score);
}
