// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use fleetpulse::{cli, commands};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("series", sub)) => commands::series::handle(sub)?,
        Some(("indicator", sub)) => commands::indicator::handle(sub)?,
        Some(("stats", sub)) => commands::stats::handle(sub)?,
        Some(("cash", sub)) => commands::cash::handle(sub)?,
        Some(("receivables", sub)) => commands::receivables::handle(sub)?,
        Some(("payables", sub)) => commands::payables::handle(sub)?,
        Some(("summary", sub)) => commands::summary::handle(sub)?,
        Some(("performance", sub)) => commands::performance::handle(sub)?,
        Some(("invoices", sub)) => commands::invoices::handle(sub)?,
        Some(("org", sub)) => commands::org::handle(sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
