// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Snapshot queries: point-in-time figures that do not vary by time range.
//! Everything is recomputed per call from fixtures plus the current-period
//! aggregate; nothing is cached or persisted.

use chrono::{Datelike, Days, NaiveDate};

use crate::errors::FleetError;
use crate::fixtures::{DueRule, CUSTOMERS, PAYABLE_SPECS};
use crate::generate;
use crate::models::{
    CashFlowStatus, CrisisLevel, CustomerReceivable, FinancialSummary, InvoiceStatus,
    InvoiceSummary, PayableItem, PaymentHistory, PeriodRecord,
};
use crate::rng::SeededRng;
use crate::utils::{month_end, percent_of};

/// One month of payroll plus one month of fuel: the least cash the company
/// can operate on.
pub const MIN_CASH_REQUIRED: i64 = 4_200_000;

// Receivable/payable book totals. Static fixtures in the model; the
// per-customer breakdown below is generated to be consistent in spirit,
// not to sum to these exactly.
const TOTAL_RECEIVABLE: i64 = 12_500_000;
const OVERDUE_RECEIVABLE: i64 = 5_200_000;
const AVG_COLLECTION_DAYS: i64 = 52;
const TOTAL_PAYABLE: i64 = 6_800_000;
const URGENT_PAYABLE: i64 = 3_500_000;
const OVERDUE_PAYABLE: i64 = 1_200_000;

fn current_month(as_of: NaiveDate) -> PeriodRecord {
    let mut monthly = generate::monthly_financials(as_of);
    // The window is centered on as_of, so the offset-0 record always exists.
    let idx = monthly
        .iter()
        .position(|p| p.is_current)
        .unwrap_or(monthly.len() / 2);
    monthly.swap_remove(idx)
}

/// Cash position against the minimum, with a thresholded crisis tier.
/// Tiers are checked in priority order; the first match wins.
pub fn cash_flow_status(as_of: NaiveDate) -> CashFlowStatus {
    let cash_on_hand = current_month(as_of).cash_balance;
    let cash_shortage = (MIN_CASH_REQUIRED - cash_on_hand).max(0);

    let (crisis_level, days_until_crisis) = if cash_on_hand < URGENT_PAYABLE {
        // Days left at the urgent-payables burn rate, roughly a week's worth.
        let weekly_burn = URGENT_PAYABLE as f64 / 7.0;
        (
            CrisisLevel::Critical,
            (cash_on_hand as f64 / weekly_burn).floor() as i64,
        )
    } else if cash_on_hand < MIN_CASH_REQUIRED / 2 {
        (CrisisLevel::Warning, 7)
    } else if cash_on_hand < MIN_CASH_REQUIRED {
        (CrisisLevel::Caution, 14)
    } else {
        (CrisisLevel::Normal, 30)
    };

    CashFlowStatus {
        cash_on_hand,
        min_cash_required: MIN_CASH_REQUIRED,
        cash_shortage,
        total_receivable: TOTAL_RECEIVABLE,
        current_receivable: TOTAL_RECEIVABLE - OVERDUE_RECEIVABLE,
        overdue_receivable: OVERDUE_RECEIVABLE,
        overdue_percent: percent_of(OVERDUE_RECEIVABLE, TOTAL_RECEIVABLE),
        avg_collection_days: AVG_COLLECTION_DAYS,
        total_payable: TOTAL_PAYABLE,
        urgent_payable: URGENT_PAYABLE,
        overdue_payable: OVERDUE_PAYABLE,
        crisis_level,
        days_until_crisis,
    }
}

/// Per-customer aging. Payment behaviour is assigned by position in the
/// customer list, not computed; the amounts are behaviour-specific multiples
/// of each customer's average monthly revenue.
pub fn customer_receivables(as_of: NaiveDate) -> Vec<CustomerReceivable> {
    let mut rng = SeededRng::new(as_of.month0() as u64);
    const BEHAVIOURS: [PaymentHistory; 5] = [
        PaymentHistory::Slow,
        PaymentHistory::Problematic,
        PaymentHistory::Slow,
        PaymentHistory::Good,
        PaymentHistory::Problematic,
    ];

    CUSTOMERS
        .iter()
        .enumerate()
        .map(|(idx, customer)| {
            let behaviour = BEHAVIOURS[idx % BEHAVIOURS.len()];
            let monthly_revenue =
                (customer.avg_trips_per_month * customer.avg_rate_per_trip) as f64;

            let (total_owed, overdue_amount, oldest_overdue_days) = match behaviour {
                PaymentHistory::Problematic => {
                    let owed = monthly_revenue * rng.range(2.5, 3.0);
                    let overdue = owed * rng.range(0.6, 0.8);
                    (owed, overdue, 75 + (rng.next_f64() * 30.0) as i64)
                }
                PaymentHistory::Slow => {
                    let owed = monthly_revenue * rng.range(1.8, 2.2);
                    let overdue = owed * rng.range(0.35, 0.5);
                    (owed, overdue, 45 + (rng.next_f64() * 20.0) as i64)
                }
                PaymentHistory::Good => {
                    let owed = monthly_revenue * rng.range(1.0, 1.3);
                    let overdue = owed * rng.range(0.1, 0.2);
                    (owed, overdue, 15 + (rng.next_f64() * 15.0) as i64)
                }
            };

            let last_payment_days = match behaviour {
                PaymentHistory::Problematic => 45,
                _ => 10 + (rng.next_f64() * 20.0) as i64,
            };

            CustomerReceivable {
                customer_id: customer.id,
                customer_name: customer.name,
                customer_code: customer.code,
                total_owed: total_owed.round() as i64,
                current_amount: (total_owed - overdue_amount).round() as i64,
                overdue_amount: overdue_amount.round() as i64,
                oldest_overdue_days,
                credit_days: customer.credit_days,
                last_payment_date: as_of
                    .checked_sub_days(Days::new(last_payment_days as u64))
                    .unwrap_or(as_of),
                payment_history: behaviour,
            }
        })
        .collect()
}

/// Vendor obligations with due-date fields resolved against `as_of`,
/// sorted most urgent first (overdue items lead with negative days).
pub fn payables(as_of: NaiveDate) -> Vec<PayableItem> {
    let mut items: Vec<PayableItem> = PAYABLE_SPECS
        .iter()
        .map(|spec| {
            let due_date = match spec.due {
                DueRule::OffsetDays(offset) => {
                    if offset >= 0 {
                        as_of.checked_add_days(Days::new(offset as u64))
                    } else {
                        as_of.checked_sub_days(Days::new(offset.unsigned_abs()))
                    }
                    .unwrap_or(as_of)
                }
                DueRule::MonthEnd => NaiveDate::from_ymd_opt(
                    as_of.year(),
                    as_of.month(),
                    month_end(as_of.year(), as_of.month()),
                )
                .unwrap_or(as_of),
            };
            let days_until_due = (due_date - as_of).num_days();
            PayableItem {
                id: spec.id,
                vendor: spec.vendor,
                category: spec.category,
                amount: spec.amount,
                due_date,
                days_until_due,
                is_overdue: days_until_due < 0,
                is_priority: spec.is_priority,
            }
        })
        .collect();

    items.sort_by_key(|p| p.days_until_due);
    items
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        // Sentinel rather than NaN; a zero payables book means liquidity
        // is unbounded for the ratio's purposes.
        f64::INFINITY
    } else {
        numerator / denominator
    }
}

/// The combined picture: cash status, the receivable book, the payable book
/// and the current month folded into liquidity ratios.
pub fn financial_summary(as_of: NaiveDate) -> FinancialSummary {
    let cash = cash_flow_status(as_of);
    let receivables = customer_receivables(as_of);
    let payable_items = payables(as_of);
    let current = current_month(as_of);

    let total_receivable: i64 = receivables.iter().map(|r| r.total_owed).sum();
    let overdue_receivable: i64 = receivables.iter().map(|r| r.overdue_amount).sum();
    let problem_customers = receivables
        .iter()
        .filter(|r| r.payment_history == PaymentHistory::Problematic)
        .count();

    let total_payable: i64 = payable_items.iter().map(|p| p.amount).sum();
    let overdue_payable: i64 = payable_items
        .iter()
        .filter(|p| p.is_overdue)
        .map(|p| p.amount)
        .sum();
    let urgent_payable: i64 = payable_items
        .iter()
        .filter(|p| !p.is_overdue && p.days_until_due <= 7)
        .map(|p| p.amount)
        .sum();

    FinancialSummary {
        cash_on_hand: cash.cash_on_hand,
        cash_shortage: cash.cash_shortage,
        crisis_level: cash.crisis_level,
        days_until_crisis: cash.days_until_crisis,
        total_receivable,
        overdue_receivable,
        overdue_percent: percent_of(overdue_receivable, total_receivable),
        avg_collection_days: cash.avg_collection_days,
        problem_customers,
        total_payable,
        overdue_payable,
        urgent_payable,
        working_capital: cash.cash_on_hand + total_receivable - total_payable,
        current_ratio: ratio(
            (cash.cash_on_hand + total_receivable) as f64,
            total_payable as f64,
        ),
        quick_ratio: ratio(
            cash.cash_on_hand as f64,
            (overdue_payable + urgent_payable) as f64,
        ),
        monthly_revenue: current.actual_revenue,
        monthly_expense: current.actual_expense,
        monthly_profit: current.actual_revenue - current.actual_expense,
        trips: current.actual_trips,
        trip_variance_percent: percent_of(
            current.actual_trips - current.budget_trips,
            current.budget_trips,
        ),
    }
}

/// Billing-run aggregate for one month (1-based), with the invoice list.
pub fn invoice_summary(
    year: i32,
    month: u32,
    as_of: NaiveDate,
) -> Result<InvoiceSummary, FleetError> {
    let invoices = generate::monthly_invoices(year, month, as_of)?;

    let sum_where = |status: InvoiceStatus| -> i64 {
        invoices
            .iter()
            .filter(|inv| inv.status == status)
            .map(|inv| inv.total_amount)
            .sum()
    };
    let total_amount: i64 = invoices.iter().map(|inv| inv.total_amount).sum();
    let paid_amount = sum_where(InvoiceStatus::Paid);

    Ok(InvoiceSummary {
        total_invoices: invoices.len(),
        total_amount,
        paid_amount,
        pending_amount: sum_where(InvoiceStatus::Pending),
        overdue_amount: sum_where(InvoiceStatus::Overdue),
        collection_rate_percent: percent_of(paid_amount, total_amount),
        invoices,
    })
}
