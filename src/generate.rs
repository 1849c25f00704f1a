// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Period aggregators: seeded synthetic business records for daily, monthly
//! and yearly windows centered on a reference date.
//!
//! The scenario encoded here is "over target but cash constrained": trips run
//! 105-115% of budget and revenue is healthy, but customers pay slowly
//! (55-65% collected in-month) while fuel and payroll must be paid almost in
//! full (92-98%), so free cash flow is negative month after month.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::errors::FleetError;
use crate::fixtures::{
    AVG_COST_PER_TRIP, AVG_REVENUE_PER_TRIP, BASE_TRIPS_PER_MONTH, BUDGET_HEALTH_SCORE, CUSTOMERS,
    WORKING_DAYS_PER_MONTH,
};
use crate::models::{DailyRecord, Invoice, InvoiceStatus, PeriodRecord};
use crate::rng::SeededRng;
use crate::season;
use crate::utils::{add_months, month_end};

/// Opening cash for the monthly window; barely one month of payroll.
pub const MONTHLY_STARTING_CASH: i64 = 1_800_000;
/// Floor under the running balance; dropping below it re-seeds the balance
/// to 500k-800k. Assumed emergency credit line, kept from the original
/// model where the top-up was implicit.
pub const CASH_BALANCE_FLOOR: i64 = 500_000;
/// Opening cash for the yearly window.
pub const YEARLY_STARTING_CASH: i64 = 50_000_000;

fn round(v: f64) -> i64 {
    v.round() as i64
}

/// `actual/budget` as a percentage capped at 100; 0 on a zero budget.
fn capped_ratio(actual: f64, budget: f64) -> f64 {
    if budget <= 0.0 {
        return 0.0;
    }
    (actual / budget * 100.0).min(100.0)
}

fn clamp_score(v: f64) -> i64 {
    round(v.clamp(0.0, 100.0))
}

/// Thirteen monthly records: 6 trailing + current + 6 leading. Each month is
/// seeded from its absolute date, so any slice of the window reproduces
/// identically regardless of the reference date that exposed it.
pub fn monthly_financials(as_of: NaiveDate) -> Vec<PeriodRecord> {
    let mut data = Vec::with_capacity(13);
    let mut balance = MONTHLY_STARTING_CASH;

    for i in -6..=6 {
        let (year, month0) = add_months(as_of.year(), as_of.month0(), i);
        let mut rng = SeededRng::new((year as i64 * 100 + month0 as i64) as u64);
        let season_factor = season::factor(month0 as usize);
        let is_forecast = i > 0;
        let is_current = i == 0;

        let budget_trips = round(BASE_TRIPS_PER_MONTH as f64 * season_factor);
        let budget_revenue = budget_trips * AVG_REVENUE_PER_TRIP;
        let budget_expense = round(budget_trips as f64 * AVG_COST_PER_TRIP as f64 * 0.95);

        // Over target regardless of direction: 105-115% of budgeted trips.
        let performance = rng.range(1.05, 1.15);
        let actual_trips = round(budget_trips as f64 * performance);
        let actual_revenue = round(
            actual_trips as f64 * AVG_REVENUE_PER_TRIP as f64 * rng.range(0.98, 1.03),
        );

        // Expenses scale with the extra work; fuel prices drift upward.
        let fuel_expense = round(actual_trips as f64 * 2_900.0 * rng.range(0.95, 1.10));
        let salary_expense = round(2_400_000.0 + rng.next_f64() * 200_000.0);
        let maintenance_expense = round(950_000.0 + rng.next_f64() * 350_000.0);
        let admin_expense = round(550_000.0 + rng.next_f64() * 100_000.0);
        let other_expense = round(250_000.0 + rng.next_f64() * 150_000.0);
        let actual_expense =
            fuel_expense + salary_expense + maintenance_expense + admin_expense + other_expense;

        // Health tracks trips, revenue and cost discipline; it does not see
        // cash, which is exactly why the dashboard needs the crisis card.
        let revenue_score = capped_ratio(actual_revenue as f64, budget_revenue as f64);
        let trip_score = capped_ratio(actual_trips as f64, budget_trips as f64);
        let cost_score = capped_ratio(budget_expense as f64, actual_expense as f64);
        let health_score =
            clamp_score(revenue_score * 0.4 + trip_score * 0.35 + cost_score * 0.25);

        // The squeeze: collect 55-65% of revenue, pay out 92-98% of expense.
        let cash_inflow = round(actual_revenue as f64 * rng.range(0.55, 0.65));
        let cash_outflow = round(actual_expense as f64 * rng.range(0.92, 0.98));
        let free_cash_flow = cash_inflow - cash_outflow;
        balance += free_cash_flow;
        if balance < CASH_BALANCE_FLOOR {
            balance = round(CASH_BALANCE_FLOOR as f64 + rng.next_f64() * 300_000.0);
        }

        data.push(PeriodRecord {
            month: Some(month0),
            year,
            label: season::month_label(month0 as usize, year),
            budget_trips,
            actual_trips,
            budget_revenue,
            actual_revenue,
            budget_expense,
            actual_expense,
            fuel_expense,
            salary_expense,
            maintenance_expense,
            admin_expense,
            other_expense,
            health_score,
            budget_health_score: BUDGET_HEALTH_SCORE,
            cash_inflow,
            cash_outflow,
            free_cash_flow,
            cash_balance: balance,
            is_forecast,
            is_current,
        });
    }

    data
}

/// Fifteen daily records: 7 trailing + today + 7 leading.
pub fn daily_trips(as_of: NaiveDate) -> Vec<DailyRecord> {
    let season_factor = season::factor(as_of.month0() as usize);
    let base_daily_trips = round(
        BASE_TRIPS_PER_MONTH as f64 * season_factor / WORKING_DAYS_PER_MONTH as f64,
    );

    let mut data = Vec::with_capacity(15);
    for i in -7i64..=7 {
        let date = if i >= 0 {
            as_of.checked_add_days(Days::new(i as u64))
        } else {
            as_of.checked_sub_days(Days::new(i.unsigned_abs()))
        }
        .unwrap_or(as_of);

        let seed = date.year() as i64 * 10_000 + date.month() as i64 * 100 + date.day() as i64;
        let mut rng = SeededRng::new(seed as u64);

        let weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
        let day_factor = if weekend { 0.6 } else { 1.0 };
        let is_forecast = i > 0;
        let is_today = i == 0;

        let budget_trips = round(base_daily_trips as f64 * day_factor);

        // Daily runs over target even harder: 105-118%.
        let actual_trips = round(budget_trips as f64 * rng.range(1.05, 1.18));
        let completed_trips = round(actual_trips as f64 * rng.range(0.92, 0.98)).min(actual_trips);
        let pending_trips = actual_trips - completed_trips;

        let revenue = actual_trips * AVG_REVENUE_PER_TRIP;
        let expense = actual_trips * AVG_COST_PER_TRIP;

        let trip_half = if budget_trips > 0 {
            actual_trips as f64 / budget_trips as f64 * 50.0
        } else {
            0.0
        };
        let completion_half = if actual_trips > 0 {
            completed_trips as f64 / actual_trips as f64 * 50.0
        } else {
            0.0
        };
        let health_score = clamp_score(trip_half + completion_half);

        data.push(DailyRecord {
            date,
            label: date.format("%-d %b").to_string(),
            budget_trips,
            actual_trips,
            completed_trips,
            pending_trips,
            revenue,
            expense,
            health_score,
            budget_health_score: BUDGET_HEALTH_SCORE,
            is_forecast,
            is_today,
        });
    }

    data
}

/// Seven yearly records: 3 trailing + current + 3 leading. Unlike months,
/// years run under their aggressive budgets and there is no cash floor.
pub fn yearly_financials(as_of: NaiveDate) -> Vec<PeriodRecord> {
    let base_annual_trips = BASE_TRIPS_PER_MONTH * 12;
    let mut data = Vec::with_capacity(7);
    let mut balance = YEARLY_STARTING_CASH;

    for i in -3i32..=3 {
        let year = as_of.year() + i;
        let mut rng = SeededRng::new(year as u64);
        let is_forecast = i > 0;
        let is_current = i == 0;

        let growth_factor = 1.0 + i as f64 * 0.05 + (rng.next_f64() * 0.08 - 0.04);

        // Targets are set 5% above trend.
        let budget_trips = round(base_annual_trips as f64 * growth_factor * 1.05);
        let budget_revenue = budget_trips * AVG_REVENUE_PER_TRIP;
        let budget_expense = round(budget_trips as f64 * AVG_COST_PER_TRIP as f64 * 0.92);

        let performance = if is_forecast {
            rng.range(0.94, 1.02)
        } else {
            rng.range(0.88, 0.98)
        };
        let actual_trips = round(budget_trips as f64 * performance);
        let actual_revenue = round(
            actual_trips as f64 * AVG_REVENUE_PER_TRIP as f64 * rng.range(0.95, 1.03),
        );

        let fuel_expense = actual_trips * 2_800;
        let salary_expense = round(26_000_000.0 + rng.next_f64() * 4_000_000.0);
        let maintenance_expense = round(10_000_000.0 + rng.next_f64() * 3_000_000.0);
        let admin_expense = round(6_000_000.0 + rng.next_f64() * 1_000_000.0);
        let other_expense = round(3_000_000.0 + rng.next_f64() * 1_500_000.0);
        let actual_expense =
            fuel_expense + salary_expense + maintenance_expense + admin_expense + other_expense;

        // Only the total is capped here; a strong revenue year can credit
        // more than half the score.
        let revenue_half = if budget_revenue > 0 {
            actual_revenue as f64 / budget_revenue as f64 * 50.0
        } else {
            0.0
        };
        let cost_half = if actual_expense > 0 {
            budget_expense as f64 / actual_expense as f64 * 50.0
        } else {
            0.0
        };
        let health_score = clamp_score(revenue_half + cost_half);

        let cash_inflow = round(actual_revenue as f64 * 0.92);
        let cash_outflow = round(actual_expense as f64 * 0.94);
        let free_cash_flow = cash_inflow - cash_outflow;
        balance += free_cash_flow;

        data.push(PeriodRecord {
            month: None,
            year,
            label: year.to_string(),
            budget_trips,
            actual_trips,
            budget_revenue,
            actual_revenue,
            budget_expense,
            actual_expense,
            fuel_expense,
            salary_expense,
            maintenance_expense,
            admin_expense,
            other_expense,
            health_score,
            budget_health_score: BUDGET_HEALTH_SCORE,
            cash_inflow,
            cash_outflow,
            free_cash_flow,
            cash_balance: balance,
            is_forecast,
            is_current,
        });
    }

    data
}

/// One invoice per customer for the given month (1-based), seeded from the
/// period so the billing run is reproducible. Status is simulated against
/// `as_of`: anything issued in the future stays pending.
pub fn monthly_invoices(
    year: i32,
    month: u32,
    as_of: NaiveDate,
) -> Result<Vec<Invoice>, FleetError> {
    if !(1..=12).contains(&month) {
        return Err(FleetError::InvalidMonth(month));
    }
    let month0 = month - 1;
    let mut rng = SeededRng::new((year as i64 * 100 + month0 as i64) as u64);

    let season_factor = season::factor(month0 as usize);
    let total_monthly_trips = round(BASE_TRIPS_PER_MONTH as f64 * season_factor);

    // Split the month's trips across customers by their average share with
    // a +/-10% wobble, then normalise back to the total.
    let avg_total: i64 = CUSTOMERS.iter().map(|c| c.avg_trips_per_month).sum();
    let raw: Vec<i64> = CUSTOMERS
        .iter()
        .map(|c| {
            let proportion = c.avg_trips_per_month as f64 / avg_total as f64;
            round(total_monthly_trips as f64 * proportion * rng.range(0.9, 1.1))
        })
        .collect();
    let raw_sum: i64 = raw.iter().sum();
    let trips_per_customer: Vec<i64> = if raw_sum > 0 {
        raw.iter()
            .map(|t| round(*t as f64 * total_monthly_trips as f64 / raw_sum as f64))
            .collect()
    } else {
        raw
    };

    let mut invoices = Vec::with_capacity(CUSTOMERS.len());
    for (idx, customer) in CUSTOMERS.iter().enumerate() {
        let trips = trips_per_customer[idx];
        let amount = round(trips as f64 * customer.avg_rate_per_trip as f64 * rng.range(0.95, 1.05));

        // Billing run lands in the 25th-29th, clamped for short months.
        let issue_day = (25 + (rng.next_f64() * 5.0) as u32).min(month_end(year, month));
        let issue_date = NaiveDate::from_ymd_opt(year, month, issue_day)
            .unwrap_or(as_of);
        let due_date = issue_date
            .checked_add_days(Days::new(customer.credit_days as u64))
            .unwrap_or(issue_date);

        let mut status = InvoiceStatus::Pending;
        let mut paid_date = None;
        if issue_date < as_of {
            if due_date < as_of {
                // Past due: most customers have paid by now, late.
                if rng.next_f64() > 0.15 {
                    status = InvoiceStatus::Paid;
                    paid_date = due_date.checked_add_days(Days::new((rng.next_f64() * 10.0) as u64));
                } else {
                    status = InvoiceStatus::Overdue;
                }
            } else if rng.next_f64() > 0.6 {
                status = InvoiceStatus::Paid;
                paid_date = issue_date
                    .checked_add_days(Days::new((rng.next_f64() * customer.credit_days as f64) as u64));
            }
        }

        invoices.push(Invoice {
            id: format!("{}-{:02}-{}", year, month, customer.id),
            invoice_no: format!("INV{}{:02}{:03}", year, month, idx + 1),
            customer_id: customer.id,
            issue_date,
            due_date,
            total_amount: amount,
            status,
            paid_date,
        });
    }

    Ok(invoices)
}
