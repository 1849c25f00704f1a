// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fleetpulse::models::{CrisisLevel, PaymentHistory};
use fleetpulse::snapshot;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

const AS_OF: (i32, u32, u32) = (2026, 8, 25);

fn as_of() -> NaiveDate {
    date(AS_OF.0, AS_OF.1, AS_OF.2)
}

#[test]
fn receivable_book_overdue_percent() {
    // Fixture totals: 12.5M receivable, 5.2M overdue -> exactly 42%.
    let status = snapshot::cash_flow_status(as_of());
    assert_eq!(status.total_receivable, 12_500_000);
    assert_eq!(status.overdue_receivable, 5_200_000);
    assert_eq!(status.overdue_percent, 42);
    assert_eq!(
        status.current_receivable,
        status.total_receivable - status.overdue_receivable
    );
}

#[test]
fn cash_shortage_is_never_negative() {
    let status = snapshot::cash_flow_status(as_of());
    assert!(status.cash_shortage >= 0);
    assert_eq!(
        status.cash_shortage,
        (status.min_cash_required - status.cash_on_hand).max(0)
    );
}

#[test]
fn crisis_tiers_match_thresholds() {
    let status = snapshot::cash_flow_status(as_of());
    let expected = if status.cash_on_hand < status.urgent_payable {
        CrisisLevel::Critical
    } else if status.cash_on_hand < status.min_cash_required / 2 {
        CrisisLevel::Warning
    } else if status.cash_on_hand < status.min_cash_required {
        CrisisLevel::Caution
    } else {
        CrisisLevel::Normal
    };
    assert_eq!(status.crisis_level, expected);
    let expected_days = match status.crisis_level {
        CrisisLevel::Critical => {
            (status.cash_on_hand as f64 / (status.urgent_payable as f64 / 7.0)).floor() as i64
        }
        CrisisLevel::Warning => 7,
        CrisisLevel::Caution => 14,
        CrisisLevel::Normal => 30,
    };
    assert_eq!(status.days_until_crisis, expected_days);
}

#[test]
fn receivables_follow_positional_behaviour() {
    let receivables = snapshot::customer_receivables(as_of());
    assert_eq!(receivables.len(), 5);
    let expected = [
        PaymentHistory::Slow,
        PaymentHistory::Problematic,
        PaymentHistory::Slow,
        PaymentHistory::Good,
        PaymentHistory::Problematic,
    ];
    for (r, want) in receivables.iter().zip(expected.iter()) {
        assert_eq!(r.payment_history, *want, "{}", r.customer_code);
    }
}

#[test]
fn receivable_amounts_split_cleanly() {
    for r in snapshot::customer_receivables(as_of()) {
        // current and overdue are rounded independently of the total.
        let diff = (r.total_owed - r.current_amount - r.overdue_amount).abs();
        assert!(diff <= 1, "{}: off by {}", r.customer_code, diff);
        assert!(r.overdue_amount <= r.total_owed, "{}", r.customer_code);
        assert!(r.overdue_amount > 0, "{}", r.customer_code);
    }
}

#[test]
fn receivable_aging_scales_with_behaviour() {
    for r in snapshot::customer_receivables(as_of()) {
        match r.payment_history {
            PaymentHistory::Problematic => {
                assert!((75..105).contains(&r.oldest_overdue_days), "{}", r.customer_code)
            }
            PaymentHistory::Slow => {
                assert!((45..65).contains(&r.oldest_overdue_days), "{}", r.customer_code)
            }
            PaymentHistory::Good => {
                assert!((15..30).contains(&r.oldest_overdue_days), "{}", r.customer_code)
            }
        }
    }
}

#[test]
fn problematic_customers_owe_more_of_their_revenue() {
    let receivables = snapshot::customer_receivables(as_of());
    // Ratios of owed to average monthly revenue must respect the bands.
    for r in &receivables {
        let customer = fleetpulse::fixtures::CUSTOMERS
            .iter()
            .find(|c| c.id == r.customer_id)
            .unwrap();
        let monthly = (customer.avg_trips_per_month * customer.avg_rate_per_trip) as f64;
        let multiple = r.total_owed as f64 / monthly;
        match r.payment_history {
            PaymentHistory::Problematic => assert!((2.5..3.01).contains(&multiple)),
            PaymentHistory::Slow => assert!((1.8..2.21).contains(&multiple)),
            PaymentHistory::Good => assert!((1.0..1.31).contains(&multiple)),
        }
    }
}

#[test]
fn payables_sorted_most_urgent_first() {
    let payables = snapshot::payables(as_of());
    assert_eq!(payables.len(), 7);
    for pair in payables.windows(2) {
        assert!(pair[0].days_until_due <= pair[1].days_until_due);
    }
    // Overdue items lead with negative day counts.
    assert!(payables[0].is_overdue);
    assert_eq!(payables[0].days_until_due, -15);
    assert_eq!(payables[1].days_until_due, -8);
    let first_current = payables.iter().position(|p| !p.is_overdue).unwrap();
    assert!(payables[first_current..].iter().all(|p| !p.is_overdue));
}

#[test]
fn payroll_due_at_month_end() {
    let payables = snapshot::payables(as_of());
    let payroll = payables.iter().find(|p| p.id == "AP002").unwrap();
    assert_eq!(payroll.due_date, date(2026, 8, 31));
    assert_eq!(payroll.days_until_due, 6);
    assert!(payroll.is_priority);
}

#[test]
fn summary_ratios_are_internally_consistent() {
    let summary = snapshot::financial_summary(as_of());
    assert_eq!(
        summary.working_capital,
        summary.cash_on_hand + summary.total_receivable - summary.total_payable
    );
    let current = (summary.cash_on_hand + summary.total_receivable) as f64
        / summary.total_payable as f64;
    assert!((summary.current_ratio - current).abs() < 1e-9);
    let quick = summary.cash_on_hand as f64
        / (summary.overdue_payable + summary.urgent_payable) as f64;
    assert!((summary.quick_ratio - quick).abs() < 1e-9);
    assert_eq!(summary.problem_customers, 2);
}

#[test]
fn summary_payable_buckets() {
    // Fixture book on 2026-08-25: 6,115,000 total, garage and tyre invoices
    // overdue, fuel + payroll + rent due within a week.
    let summary = snapshot::financial_summary(as_of());
    assert_eq!(summary.total_payable, 6_115_000);
    assert_eq!(summary.overdue_payable, 1_200_000);
    assert_eq!(summary.urgent_payable, 4_430_000);
}

#[test]
fn summary_overdue_percent_matches_book() {
    let summary = snapshot::financial_summary(as_of());
    let expected = ((summary.overdue_receivable as f64 / summary.total_receivable as f64)
        * 100.0)
        .round() as i64;
    assert_eq!(summary.overdue_percent, expected);
}

#[test]
fn snapshots_are_deterministic() {
    let a = snapshot::financial_summary(as_of());
    let b = snapshot::financial_summary(as_of());
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}
