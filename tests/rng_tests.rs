// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fleetpulse::rng::SeededRng;

#[test]
fn same_seed_same_sequence() {
    let mut a = SeededRng::new(202_601);
    let mut b = SeededRng::new(202_601);
    for _ in 0..1000 {
        assert_eq!(a.next_f64(), b.next_f64());
    }
}

#[test]
fn different_seeds_diverge() {
    let mut a = SeededRng::new(1);
    let mut b = SeededRng::new(2);
    let first: Vec<f64> = (0..10).map(|_| a.next_f64()).collect();
    let second: Vec<f64> = (0..10).map(|_| b.next_f64()).collect();
    assert_ne!(first, second);
}

#[test]
fn outputs_in_unit_interval() {
    let mut rng = SeededRng::new(20_260_825);
    for _ in 0..10_000 {
        let v = rng.next_f64();
        assert!((0.0..1.0).contains(&v), "out of range: {}", v);
    }
}

#[test]
fn range_respects_bounds() {
    let mut rng = SeededRng::new(7);
    for _ in 0..1000 {
        let v = rng.range(1.05, 1.15);
        assert!((1.05..1.15).contains(&v), "out of band: {}", v);
    }
}

#[test]
fn clone_continues_identically() {
    let mut a = SeededRng::new(42);
    a.next_f64();
    let mut b = a.clone();
    for _ in 0..100 {
        assert_eq!(a.next_f64(), b.next_f64());
    }
}
