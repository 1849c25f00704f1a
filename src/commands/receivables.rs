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

    let receivables = snapshot::customer_receivables(as_of);
    if maybe_print_json(json_flag, jsonl_flag, &receivables)? {
        return Ok(());
    }

    let rows = receivables
        .iter()
        .map(|r| {
            vec![
                r.customer_code.to_string(),
                r.customer_name.to_string(),
                fmt_money(r.total_owed),
                fmt_money(r.current_amount),
                fmt_money(r.overdue_amount),
                r.oldest_overdue_days.to_string(),
                r.payment_history.label().to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &[
                "Code",
                "Customer",
                "Owed",
                "Current",
                "Overdue",
                "Oldest (d)",
                "History"
            ],
            rows
        )
    );
    Ok(())
}
