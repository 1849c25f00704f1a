// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived views: reshape aggregator output into the numeric series each
//! chart or card actually plots. Pure adapters; currency becomes millions
//! here (one decimal, whole millions for the yearly scale).

use chrono::{Datelike, NaiveDate};

use crate::fixtures::{BASE_TRIPS_PER_MONTH, TOTAL_EMPLOYEES, WORKING_DAYS_PER_MONTH};
use crate::generate;
use crate::models::{
    CashFlowPoint, HealthPoint, Indicator, IndicatorSeries, PerformanceSummary, PnlPoint,
    QuickStats, TimeRange,
};
use crate::season;
use crate::utils::{millions, percent_of};

/// Opening balance for the intraday cash view; the monthly aggregator owns
/// the real balance, this view only sketches the within-month slope.
const DAILY_VIEW_STARTING_CASH: f64 = 8_500_000.0;

pub fn health_series(range: TimeRange, as_of: NaiveDate) -> Vec<HealthPoint> {
    match range {
        TimeRange::Daily => generate::daily_trips(as_of)
            .into_iter()
            .map(|d| HealthPoint {
                date: d.label,
                actual: d.health_score,
                budget: d.budget_health_score,
                is_forecast: d.is_forecast,
                is_today: d.is_today,
            })
            .collect(),
        TimeRange::Monthly => generate::monthly_financials(as_of)
            .into_iter()
            .map(|p| HealthPoint {
                date: p.label,
                actual: p.health_score,
                budget: p.budget_health_score,
                is_forecast: p.is_forecast,
                is_today: p.is_current,
            })
            .collect(),
        TimeRange::Yearly => generate::yearly_financials(as_of)
            .into_iter()
            .map(|p| HealthPoint {
                date: p.label,
                actual: p.health_score,
                budget: p.budget_health_score,
                is_forecast: p.is_forecast,
                is_today: p.is_current,
            })
            .collect(),
    }
}

pub fn pnl_series(range: TimeRange, as_of: NaiveDate) -> Vec<PnlPoint> {
    match range {
        TimeRange::Daily => generate::daily_trips(as_of)
            .into_iter()
            .map(|d| PnlPoint {
                date: d.label,
                revenue: millions(d.revenue, 1),
                expense: millions(d.expense, 1),
                profit: millions(d.revenue - d.expense, 1),
                is_forecast: d.is_forecast,
                is_today: d.is_today,
            })
            .collect(),
        TimeRange::Monthly => generate::monthly_financials(as_of)
            .into_iter()
            .map(|p| PnlPoint {
                date: p.label,
                revenue: millions(p.actual_revenue, 1),
                expense: millions(p.actual_expense, 1),
                profit: millions(p.actual_revenue - p.actual_expense, 1),
                is_forecast: p.is_forecast,
                is_today: p.is_current,
            })
            .collect(),
        TimeRange::Yearly => generate::yearly_financials(as_of)
            .into_iter()
            .map(|p| PnlPoint {
                date: p.label,
                revenue: millions(p.actual_revenue, 0),
                expense: millions(p.actual_expense, 0),
                profit: millions(p.actual_revenue - p.actual_expense, 0),
                is_forecast: p.is_forecast,
                is_today: p.is_current,
            })
            .collect(),
    }
}

pub fn cashflow_series(range: TimeRange, as_of: NaiveDate) -> Vec<CashFlowPoint> {
    match range {
        TimeRange::Daily => {
            // Fold a running balance over the window: collect 90% of the
            // day's revenue, pay out 95% of its cost.
            let mut balance = DAILY_VIEW_STARTING_CASH;
            generate::daily_trips(as_of)
                .into_iter()
                .map(|d| {
                    let fcf = d.revenue as f64 * 0.9 - d.expense as f64 * 0.95;
                    balance += fcf;
                    CashFlowPoint {
                        date: d.label,
                        cash_balance: millions(balance.round() as i64, 1),
                        free_cash_flow: millions(fcf.round() as i64, 1),
                        is_forecast: d.is_forecast,
                        is_today: d.is_today,
                    }
                })
                .collect()
        }
        TimeRange::Monthly => generate::monthly_financials(as_of)
            .into_iter()
            .map(|p| CashFlowPoint {
                date: p.label,
                cash_balance: millions(p.cash_balance, 1),
                free_cash_flow: millions(p.free_cash_flow, 1),
                is_forecast: p.is_forecast,
                is_today: p.is_current,
            })
            .collect(),
        TimeRange::Yearly => generate::yearly_financials(as_of)
            .into_iter()
            .map(|p| CashFlowPoint {
                date: p.label,
                cash_balance: millions(p.cash_balance, 0),
                free_cash_flow: millions(p.free_cash_flow, 0),
                is_forecast: p.is_forecast,
                is_today: p.is_current,
            })
            .collect(),
    }
}

/// Dispatch on the closed indicator enum; adding an indicator is a
/// compile-time-checked change.
pub fn indicator_series(indicator: Indicator, range: TimeRange, as_of: NaiveDate) -> IndicatorSeries {
    match indicator {
        Indicator::Health => IndicatorSeries::Health(health_series(range, as_of)),
        Indicator::Pnl => IndicatorSeries::Pnl(pnl_series(range, as_of)),
        Indicator::CashFlow => IndicatorSeries::CashFlow(cashflow_series(range, as_of)),
    }
}

pub fn quick_stats(range: TimeRange, as_of: NaiveDate) -> QuickStats {
    let season_factor = season::factor(as_of.month0() as usize);
    match range {
        TimeRange::Daily => {
            let trips = (BASE_TRIPS_PER_MONTH as f64 * season_factor
                / WORKING_DAYS_PER_MONTH as f64
                * 0.92)
                .round() as i64;
            let success = (trips as f64 * 0.9).round() as i64;
            QuickStats {
                trips,
                success,
                pending: trips - success,
                employees: TOTAL_EMPLOYEES,
                trip_label: "trips today",
            }
        }
        TimeRange::Monthly => {
            let trips = (BASE_TRIPS_PER_MONTH as f64 * season_factor * 0.92).round() as i64;
            let success = (trips as f64 * 0.94).round() as i64;
            QuickStats {
                trips,
                success,
                pending: trips - success,
                employees: TOTAL_EMPLOYEES,
                trip_label: "trips this month",
            }
        }
        TimeRange::Yearly => {
            let trips = (BASE_TRIPS_PER_MONTH as f64 * 12.0 * 0.93).round() as i64;
            let success = (trips as f64 * 0.95).round() as i64;
            QuickStats {
                trips,
                success,
                pending: trips - success,
                employees: TOTAL_EMPLOYEES,
                trip_label: "trips this year",
            }
        }
    }
}

/// Current month against budget, for the dashboard header card.
pub fn performance_summary(as_of: NaiveDate) -> PerformanceSummary {
    let monthly = generate::monthly_financials(as_of);
    // The window is centered on as_of, so the current record always exists.
    let current = monthly
        .iter()
        .find(|p| p.is_current)
        .unwrap_or(&monthly[monthly.len() / 2]);

    PerformanceSummary {
        revenue: current.actual_revenue,
        budget_revenue: current.budget_revenue,
        revenue_variance_percent: percent_of(
            current.actual_revenue - current.budget_revenue,
            current.budget_revenue,
        ),
        expense: current.actual_expense,
        budget_expense: current.budget_expense,
        expense_variance_percent: percent_of(
            current.actual_expense - current.budget_expense,
            current.budget_expense,
        ),
        profit: current.actual_revenue - current.actual_expense,
        trips: current.actual_trips,
        budget_trips: current.budget_trips,
        trip_variance_percent: percent_of(
            current.actual_trips - current.budget_trips,
            current.budget_trips,
        ),
        health_score: current.health_score,
        cash_balance: current.cash_balance,
    }
}
