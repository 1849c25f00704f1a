// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::generate;
use crate::models::{DailyRecord, PeriodRecord, TimeRange};
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let as_of = super::as_of(m)?;

    match super::time_range(m)? {
        TimeRange::Daily => {
            let data = generate::daily_trips(as_of);
            if !maybe_print_json(json_flag, jsonl_flag, &data)? {
                print_daily(&data);
            }
        }
        TimeRange::Monthly => {
            let data = generate::monthly_financials(as_of);
            if !maybe_print_json(json_flag, jsonl_flag, &data)? {
                print_periods(&data);
            }
        }
        TimeRange::Yearly => {
            let data = generate::yearly_financials(as_of);
            if !maybe_print_json(json_flag, jsonl_flag, &data)? {
                print_periods(&data);
            }
        }
    }
    Ok(())
}

fn marker(is_forecast: bool, is_current: bool) -> &'static str {
    if is_current {
        "now"
    } else if is_forecast {
        "forecast"
    } else {
        ""
    }
}

fn print_periods(data: &[PeriodRecord]) {
    let rows = data
        .iter()
        .map(|p| {
            vec![
                p.label.clone(),
                format!("{} / {}", p.actual_trips, p.budget_trips),
                fmt_money(p.actual_revenue),
                fmt_money(p.actual_expense),
                p.health_score.to_string(),
                fmt_money(p.free_cash_flow),
                fmt_money(p.cash_balance),
                marker(p.is_forecast, p.is_current).to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &[
                "Period",
                "Trips (act/bud)",
                "Revenue",
                "Expense",
                "Health",
                "FCF",
                "Cash balance",
                ""
            ],
            rows
        )
    );
}

fn print_daily(data: &[DailyRecord]) {
    let rows = data
        .iter()
        .map(|d| {
            vec![
                d.label.clone(),
                format!("{} / {}", d.actual_trips, d.budget_trips),
                d.completed_trips.to_string(),
                d.pending_trips.to_string(),
                fmt_money(d.revenue),
                fmt_money(d.expense),
                d.health_score.to_string(),
                marker(d.is_forecast, d.is_today).to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &[
                "Date",
                "Trips (act/bud)",
                "Done",
                "Pending",
                "Revenue",
                "Expense",
                "Health",
                ""
            ],
            rows
        )
    );
}
