// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

/// Currency amount in whole millions with `dp` decimals, rounded half-up.
pub fn millions(amount: i64, dp: u32) -> f64 {
    let m = Decimal::from(amount) / Decimal::from(1_000_000);
    m.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// Thousands-grouped baht amount, e.g. `THB 2,400,000`.
pub fn fmt_money(amount: i64) -> String {
    let digits = amount.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("THB {}{}", sign, grouped)
}

/// Compact K/M notation used on the stat cards.
pub fn fmt_compact(amount: i64) -> String {
    let n = amount as f64;
    if n.abs() >= 1_000_000.0 {
        format!("{:.1}M", n / 1_000_000.0)
    } else if n.abs() >= 1_000.0 {
        format!("{:.1}K", n / 1_000.0)
    } else {
        amount.to_string()
    }
}

pub fn fmt_percent(v: f64) -> String {
    format!("{:.1}%", v)
}

/// `round(numerator / denominator * 100)`, 0 when the denominator is zero.
pub fn percent_of(numerator: i64, denominator: i64) -> i64 {
    if denominator == 0 {
        return 0;
    }
    (numerator as f64 / denominator as f64 * 100.0).round() as i64
}

/// Shift `(year, month0)` by a signed number of months.
pub fn add_months(year: i32, month0: u32, delta: i32) -> (i32, u32) {
    let total = year * 12 + month0 as i32 + delta;
    (total.div_euclid(12), total.rem_euclid(12) as u32)
}

/// Last calendar day of a month (month is 1-based).
pub fn month_end(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}
