// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

/// Deterministic linear congruential generator.
///
/// Every metric in the crate is a pure function of a date-derived seed, so
/// repeated queries for the same period reproduce identical figures across
/// runs and platforms. The constants are the classic small-modulus LCG
/// (a=9301, c=49297, m=233280); the period is short but more than enough for
/// the handful of draws each record consumes.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u64,
}

const LCG_A: u64 = 9301;
const LCG_C: u64 = 49297;
const LCG_M: u64 = 233280;

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next value in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state.wrapping_mul(LCG_A).wrapping_add(LCG_C)) % LCG_M;
        self.state as f64 / LCG_M as f64
    }

    /// Uniform draw in [lo, hi).
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }
}
