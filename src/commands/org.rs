// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::fixtures::MANAGERS;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let show_kpis = m.get_flag("kpis");

    let managers = &*MANAGERS;
    if maybe_print_json(json_flag, jsonl_flag, managers)? {
        return Ok(());
    }

    let rows = managers
        .iter()
        .map(|mgr| {
            vec![
                mgr.name.to_string(),
                mgr.position.to_string(),
                mgr.department.to_string(),
                mgr.score.to_string(),
                mgr.health_status.label().to_string(),
                format!("{:?}", mgr.trend).to_lowercase(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Manager", "Position", "Department", "Score", "Status", "Trend"],
            rows
        )
    );

    if show_kpis {
        for mgr in managers {
            let rows = mgr
                .kpis
                .iter()
                .map(|k| {
                    vec![
                        k.name.to_string(),
                        format!("{} {}", k.value, k.unit),
                        format!("{} {}", k.target, k.unit),
                        format!("{:?}", k.trend).to_lowercase(),
                    ]
                })
                .collect();
            println!("{}", mgr.name);
            println!("{}", pretty_table(&["KPI", "Value", "Target", "Trend"], rows));
        }
    }
    Ok(())
}
