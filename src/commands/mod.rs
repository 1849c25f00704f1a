// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod series;
pub mod indicator;
pub mod stats;
pub mod cash;
pub mod receivables;
pub mod payables;
pub mod summary;
pub mod performance;
pub mod invoices;
pub mod org;

use anyhow::Result;
use chrono::NaiveDate;

use crate::models::{Indicator, TimeRange};
use crate::utils::parse_date;

/// Reference date from `--as-of`, defaulting to the local date.
pub fn as_of(m: &clap::ArgMatches) -> Result<NaiveDate> {
    match m.get_one::<String>("as-of") {
        Some(s) => parse_date(s),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

pub fn time_range(m: &clap::ArgMatches) -> Result<TimeRange> {
    let s = m
        .get_one::<String>("range")
        .map(String::as_str)
        .unwrap_or("monthly");
    Ok(s.parse()?)
}

pub fn indicator(m: &clap::ArgMatches) -> Result<Indicator> {
    let s = m
        .get_one::<String>("indicator")
        .map(String::as_str)
        .unwrap_or("health");
    Ok(s.parse()?)
}
