// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fleetpulse::season;

#[test]
fn twelve_positive_factors() {
    assert_eq!(season::SEASONAL_FACTORS.len(), 12);
    for (m, f) in season::SEASONAL_FACTORS.iter().enumerate() {
        assert!(*f > 0.0, "month {} has non-positive factor {}", m, f);
    }
}

#[test]
fn high_season_peaks_in_december() {
    let max = season::SEASONAL_FACTORS
        .iter()
        .cloned()
        .fold(f64::MIN, f64::max);
    assert_eq!(season::factor(11), max);
    // Low season bottoms out in April.
    let min = season::SEASONAL_FACTORS
        .iter()
        .cloned()
        .fold(f64::MAX, f64::min);
    assert_eq!(season::factor(3), min);
}

#[test]
fn factor_wraps_out_of_range_index() {
    assert_eq!(season::factor(12), season::factor(0));
    assert_eq!(season::factor(25), season::factor(1));
}

#[test]
fn month_labels() {
    assert_eq!(season::month_label(0, 2026), "Jan'26");
    assert_eq!(season::month_label(11, 2025), "Dec'25");
    assert_eq!(season::month_label(8, 2007), "Sep'07");
}
