// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::models::IndicatorSeries;
use crate::utils::{maybe_print_json, pretty_table};
use crate::views;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let as_of = super::as_of(m)?;
    let indicator = super::indicator(m)?;
    let range = super::time_range(m)?;

    let series = views::indicator_series(indicator, range, as_of);
    if maybe_print_json(json_flag, jsonl_flag, &series)? {
        return Ok(());
    }

    match series {
        IndicatorSeries::Health(points) => {
            let rows = points
                .iter()
                .map(|p| {
                    vec![
                        p.date.clone(),
                        p.actual.to_string(),
                        p.budget.to_string(),
                        flag(p.is_forecast, p.is_today),
                    ]
                })
                .collect();
            println!(
                "{}",
                pretty_table(&["Date", "Actual", "Budget", ""], rows)
            );
        }
        IndicatorSeries::Pnl(points) => {
            let rows = points
                .iter()
                .map(|p| {
                    vec![
                        p.date.clone(),
                        format!("{:.1}", p.revenue),
                        format!("{:.1}", p.expense),
                        format!("{:.1}", p.profit),
                        flag(p.is_forecast, p.is_today),
                    ]
                })
                .collect();
            println!(
                "{}",
                pretty_table(
                    &["Date", "Revenue (M)", "Expense (M)", "Profit (M)", ""],
                    rows
                )
            );
        }
        IndicatorSeries::CashFlow(points) => {
            let rows = points
                .iter()
                .map(|p| {
                    vec![
                        p.date.clone(),
                        format!("{:.1}", p.cash_balance),
                        format!("{:.1}", p.free_cash_flow),
                        flag(p.is_forecast, p.is_today),
                    ]
                })
                .collect();
            println!(
                "{}",
                pretty_table(&["Date", "Cash (M)", "FCF (M)", ""], rows)
            );
        }
    }
    Ok(())
}

fn flag(is_forecast: bool, is_today: bool) -> String {
    if is_today {
        "now".into()
    } else if is_forecast {
        "forecast".into()
    } else {
        String::new()
    }
}
