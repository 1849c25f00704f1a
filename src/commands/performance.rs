// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use crate::views;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let as_of = super::as_of(m)?;

    let perf = views::performance_summary(as_of);
    if maybe_print_json(json_flag, jsonl_flag, &perf)? {
        return Ok(());
    }

    let rows = vec![
        vec![
            "Revenue".into(),
            fmt_money(perf.revenue),
            fmt_money(perf.budget_revenue),
            format!("{:+}%", perf.revenue_variance_percent),
        ],
        vec![
            "Expense".into(),
            fmt_money(perf.expense),
            fmt_money(perf.budget_expense),
            format!("{:+}%", perf.expense_variance_percent),
        ],
        vec![
            "Trips".into(),
            perf.trips.to_string(),
            perf.budget_trips.to_string(),
            format!("{:+}%", perf.trip_variance_percent),
        ],
        vec![
            "Profit".into(),
            fmt_money(perf.profit),
            String::new(),
            String::new(),
        ],
        vec![
            "Health score".into(),
            perf.health_score.to_string(),
            String::new(),
            String::new(),
        ],
        vec![
            "Cash balance".into(),
            fmt_money(perf.cash_balance),
            String::new(),
            String::new(),
        ],
    ];
    println!(
        "{}",
        pretty_table(&["Metric", "Actual", "Budget", "Variance"], rows)
    );
    Ok(())
}
