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

    let payables = snapshot::payables(as_of);
    if maybe_print_json(json_flag, jsonl_flag, &payables)? {
        return Ok(());
    }

    let rows = payables
        .iter()
        .map(|p| {
            vec![
                p.id.to_string(),
                p.vendor.to_string(),
                format!("{:?}", p.category).to_lowercase(),
                fmt_money(p.amount),
                p.due_date.to_string(),
                p.days_until_due.to_string(),
                if p.is_overdue {
                    "OVERDUE".into()
                } else if p.is_priority {
                    "priority".into()
                } else {
                    String::new()
                },
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["ID", "Vendor", "Category", "Amount", "Due", "Days", ""],
            rows
        )
    );
    Ok(())
}
