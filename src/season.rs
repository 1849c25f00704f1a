// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

/// Demand multiplier per calendar month (index 0 = January).
///
/// High season Nov-Feb (year-end festivals), low season Mar-May, normal
/// Jun-Oct. Applied to baseline trip volume before random perturbation.
pub const SEASONAL_FACTORS: [f64; 12] = [
    1.25, // Jan - high (new year)
    1.20, // Feb - high
    0.75, // Mar - low (post-festival)
    0.70, // Apr - low (Songkran shutdown)
    0.80, // May - low
    0.95, // Jun - normal
    1.00, // Jul - normal
    1.00, // Aug - normal
    1.05, // Sep - normal
    1.10, // Oct - normal
    1.30, // Nov - high season ramp
    1.35, // Dec - high (Christmas)
];

/// Seasonal factor for a zero-based month index.
pub fn factor(month0: usize) -> f64 {
    SEASONAL_FACTORS[month0 % 12]
}

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Short month+year label, e.g. `Jan'26`.
pub fn month_label(month0: usize, year: i32) -> String {
    format!("{}'{:02}", MONTH_LABELS[month0 % 12], year.rem_euclid(100))
}
