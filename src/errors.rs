// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Errors raised at the query boundary. Everything past enum parsing is
/// total: generators and snapshots cannot fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FleetError {
    #[error("Invalid time range '{0}', expected daily|monthly|yearly")]
    InvalidTimeRange(String),
    #[error("Invalid indicator '{0}', expected health|pnl|cashflow")]
    InvalidIndicator(String),
    #[error("Invalid month {0}, expected 1-12")]
    InvalidMonth(u32),
}
