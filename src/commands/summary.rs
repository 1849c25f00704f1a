// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::snapshot;
use crate::utils::{fmt_money, fmt_percent, maybe_print_json, pretty_table};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let as_of = super::as_of(m)?;

    let summary = snapshot::financial_summary(as_of);
    if maybe_print_json(json_flag, jsonl_flag, &summary)? {
        return Ok(());
    }

    let ratio = |v: f64| {
        if v.is_infinite() {
            "inf".to_string()
        } else {
            format!("{:.2}", v)
        }
    };
    let rows = vec![
        vec!["Cash on hand".into(), fmt_money(summary.cash_on_hand)],
        vec!["Cash shortage".into(), fmt_money(summary.cash_shortage)],
        vec!["Crisis level".into(), summary.crisis_level.label().into()],
        vec![
            "Days until crisis".into(),
            summary.days_until_crisis.to_string(),
        ],
        vec!["Receivable".into(), fmt_money(summary.total_receivable)],
        vec![
            "Overdue receivable".into(),
            format!(
                "{} ({}%)",
                fmt_money(summary.overdue_receivable),
                summary.overdue_percent
            ),
        ],
        vec![
            "Problem customers".into(),
            summary.problem_customers.to_string(),
        ],
        vec!["Payable".into(), fmt_money(summary.total_payable)],
        vec!["Overdue payable".into(), fmt_money(summary.overdue_payable)],
        vec!["Urgent payable".into(), fmt_money(summary.urgent_payable)],
        vec!["Working capital".into(), fmt_money(summary.working_capital)],
        vec!["Current ratio".into(), ratio(summary.current_ratio)],
        vec!["Quick ratio".into(), ratio(summary.quick_ratio)],
        vec!["Monthly revenue".into(), fmt_money(summary.monthly_revenue)],
        vec!["Monthly expense".into(), fmt_money(summary.monthly_expense)],
        vec!["Monthly profit".into(), fmt_money(summary.monthly_profit)],
        vec![
            "Trips vs budget".into(),
            format!(
                "{} ({})",
                summary.trips,
                fmt_percent(summary.trip_variance_percent as f64)
            ),
        ],
    ];
    println!("{}", pretty_table(&["Financial summary", ""], rows));
    Ok(())
}
