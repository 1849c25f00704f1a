// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON instead of a table"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

fn range_arg() -> Arg {
    Arg::new("range")
        .long("range")
        .short('r')
        .value_name("RANGE")
        .default_value("monthly")
        .help("Time range: daily|monthly|yearly")
}

pub fn build_cli() -> Command {
    Command::new("fleetpulse")
        .version(crate_version!())
        .about("Deterministic trucking-fleet management dashboard for the terminal")
        .arg(
            Arg::new("as-of")
                .long("as-of")
                .value_name("YYYY-MM-DD")
                .global(true)
                .help("Reference date (defaults to today); pins every generated figure"),
        )
        .subcommand(json_flags(
            Command::new("series")
                .about("Full budget-vs-actual period records")
                .arg(range_arg()),
        ))
        .subcommand(json_flags(
            Command::new("indicator")
                .about("Chart series for a named indicator")
                .arg(
                    Arg::new("indicator")
                        .long("indicator")
                        .short('i')
                        .value_name("INDICATOR")
                        .default_value("health")
                        .help("Indicator: health|pnl|cashflow"),
                )
                .arg(range_arg()),
        ))
        .subcommand(json_flags(
            Command::new("stats")
                .about("Quick trip/headcount stats")
                .arg(range_arg()),
        ))
        .subcommand(json_flags(
            Command::new("cash").about("Cash position and crisis classification"),
        ))
        .subcommand(json_flags(
            Command::new("receivables").about("Per-customer receivable aging"),
        ))
        .subcommand(json_flags(
            Command::new("payables").about("Vendor obligations, most urgent first"),
        ))
        .subcommand(json_flags(
            Command::new("summary").about("Combined financial summary and liquidity ratios"),
        ))
        .subcommand(json_flags(
            Command::new("performance").about("Current month vs. budget"),
        ))
        .subcommand(json_flags(
            Command::new("invoices")
                .about("Billing run for a month")
                .arg(
                    Arg::new("year")
                        .long("year")
                        .value_name("YYYY")
                        .value_parser(clap::value_parser!(i32))
                        .help("Billing year (defaults to the reference year)"),
                )
                .arg(
                    Arg::new("month")
                        .long("month")
                        .value_name("1-12")
                        .value_parser(clap::value_parser!(u32))
                        .help("Billing month (defaults to the reference month)"),
                ),
        ))
        .subcommand(json_flags(
            Command::new("org")
                .about("Department manager scorecards")
                .arg(
                    Arg::new("kpis")
                        .long("kpis")
                        .action(ArgAction::SetTrue)
                        .help("Include each manager's KPI breakdown"),
                ),
        ))
}
