// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod commands;
pub mod errors;
pub mod fixtures;
pub mod generate;
pub mod models;
pub mod rng;
pub mod season;
pub mod snapshot;
pub mod utils;
pub mod views;
