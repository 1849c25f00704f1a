// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Datelike;

use crate::snapshot;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let as_of = super::as_of(m)?;
    let year = m.get_one::<i32>("year").copied().unwrap_or(as_of.year());
    let month = m.get_one::<u32>("month").copied().unwrap_or(as_of.month());

    let summary = snapshot::invoice_summary(year, month, as_of)?;
    if maybe_print_json(json_flag, jsonl_flag, &summary)? {
        return Ok(());
    }

    let rows = summary
        .invoices
        .iter()
        .map(|inv| {
            vec![
                inv.invoice_no.clone(),
                inv.customer_id.to_string(),
                inv.issue_date.to_string(),
                inv.due_date.to_string(),
                fmt_money(inv.total_amount),
                format!("{:?}", inv.status).to_lowercase(),
                inv.paid_date.map(|d| d.to_string()).unwrap_or_default(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Invoice", "Customer", "Issued", "Due", "Amount", "Status", "Paid"],
            rows
        )
    );
    println!(
        "Total {} | paid {} | pending {} | overdue {} | collection {}%",
        fmt_money(summary.total_amount),
        fmt_money(summary.paid_amount),
        fmt_money(summary.pending_amount),
        fmt_money(summary.overdue_amount),
        summary.collection_rate_percent
    );
    Ok(())
}
