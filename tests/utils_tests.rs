// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fleetpulse::utils;

#[test]
fn parse_date_accepts_iso_only() {
    assert!(utils::parse_date("2026-08-25").is_ok());
    assert!(utils::parse_date("25/08/2026").is_err());
    assert!(utils::parse_date("2026-13-01").is_err());
    assert!(utils::parse_date("").is_err());
}

#[test]
fn money_is_thousands_grouped() {
    assert_eq!(utils::fmt_money(2_400_000), "THB 2,400,000");
    assert_eq!(utils::fmt_money(950), "THB 950");
    assert_eq!(utils::fmt_money(1_000), "THB 1,000");
    assert_eq!(utils::fmt_money(0), "THB 0");
    assert_eq!(utils::fmt_money(-42_000), "THB -42,000");
    assert_eq!(utils::fmt_money(6_115_000), "THB 6,115,000");
}

#[test]
fn compact_switches_units() {
    assert_eq!(utils::fmt_compact(1_500_000), "1.5M");
    assert_eq!(utils::fmt_compact(25_000), "25.0K");
    assert_eq!(utils::fmt_compact(999), "999");
    assert_eq!(utils::fmt_compact(-3_500_000), "-3.5M");
}

#[test]
fn millions_rounds_half_away_from_zero() {
    assert_eq!(utils::millions(8_550_000, 1), 8.6);
    assert_eq!(utils::millions(8_540_000, 1), 8.5);
    assert_eq!(utils::millions(-1_250_000, 1), -1.3);
    assert_eq!(utils::millions(50_499_999, 0), 50.0);
    assert_eq!(utils::millions(50_500_000, 0), 51.0);
}

#[test]
fn percent_of_rounds_and_survives_zero() {
    assert_eq!(utils::percent_of(5_200_000, 12_500_000), 42);
    assert_eq!(utils::percent_of(1, 3), 33);
    assert_eq!(utils::percent_of(2, 3), 67);
    assert_eq!(utils::percent_of(-5, 100), -5);
    assert_eq!(utils::percent_of(10, 0), 0);
}

#[test]
fn add_months_wraps_across_years() {
    assert_eq!(utils::add_months(2026, 0, -1), (2025, 11));
    assert_eq!(utils::add_months(2026, 11, 1), (2027, 0));
    assert_eq!(utils::add_months(2026, 7, -6), (2026, 1));
    assert_eq!(utils::add_months(2026, 7, 6), (2027, 1));
    assert_eq!(utils::add_months(2026, 5, -30), (2023, 11));
}

#[test]
fn month_end_knows_february() {
    assert_eq!(utils::month_end(2026, 2), 28);
    assert_eq!(utils::month_end(2024, 2), 29);
    assert_eq!(utils::month_end(2026, 4), 30);
    assert_eq!(utils::month_end(2026, 8), 31);
    assert_eq!(utils::month_end(2026, 12), 31);
}

#[test]
fn fmt_percent_one_decimal() {
    assert_eq!(utils::fmt_percent(42.0), "42.0%");
    assert_eq!(utils::fmt_percent(7.26), "7.3%");
}
