// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::utils::{maybe_print_json, pretty_table};
use crate::views;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let as_of = super::as_of(m)?;
    let range = super::time_range(m)?;

    let stats = views::quick_stats(range, as_of);
    if !maybe_print_json(json_flag, jsonl_flag, &stats)? {
        let rows = vec![vec![
            stats.trip_label.to_string(),
            stats.trips.to_string(),
            stats.success.to_string(),
            stats.pending.to_string(),
            stats.employees.to_string(),
        ]];
        println!(
            "{}",
            pretty_table(&["", "Trips", "Done", "Pending", "Employees"], rows)
        );
    }
    Ok(())
}
