// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::snapshot;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let as_of = super::as_of(m)?;

    let status = snapshot::cash_flow_status(as_of);
    if maybe_print_json(json_flag, jsonl_flag, &status)? {
        return Ok(());
    }

    let rows = vec![
        vec!["Cash on hand".into(), fmt_money(status.cash_on_hand)],
        vec!["Minimum required".into(), fmt_money(status.min_cash_required)],
        vec!["Shortage".into(), fmt_money(status.cash_shortage)],
        vec!["Total receivable".into(), fmt_money(status.total_receivable)],
        vec![
            "Overdue receivable".into(),
            format!(
                "{} ({}%)",
                fmt_money(status.overdue_receivable),
                status.overdue_percent
            ),
        ],
        vec![
            "Avg collection days".into(),
            status.avg_collection_days.to_string(),
        ],
        vec!["Total payable".into(), fmt_money(status.total_payable)],
        vec!["Urgent payable (7d)".into(), fmt_money(status.urgent_payable)],
        vec!["Overdue payable".into(), fmt_money(status.overdue_payable)],
        vec!["Crisis level".into(), status.crisis_level.label().to_string()],
        vec![
            "Days until crisis".into(),
            status.days_until_crisis.to_string(),
        ],
    ];
    println!("{}", pretty_table(&["Cash status", ""], rows));
    Ok(())
}
