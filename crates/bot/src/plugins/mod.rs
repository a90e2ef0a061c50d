// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stock plugins

mod firing;
mod statistics;
mod tracker;

pub use firing::{AccuracyBasedFiringSystem, MEDIUM_BULLET_POWER};
pub use statistics::{BotStatistics, EnemyStatistics, Statistics};
pub use tracker::EnemyTracker;
