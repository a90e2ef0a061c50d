// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rb-bot: the bot facade and its stock plugins
//!
//! - `Bot` turns host engine callbacks into named registry events
//! - `Session` hands out one bot per round sharing statistics
//! - `plugins` holds the statistics, enemy tracker and firing system
//! - `condition` builds deferred checks such as `next_to_wall`

pub mod bot;
pub mod combat;
pub mod condition;
pub mod config;
pub mod draw;
pub mod events;
pub mod geometry;
pub mod host;
pub mod payload;
pub mod plugins;
pub mod session;
pub mod trace;

pub use bot::{Bot, Registry, GUN_COOLING_RATE, MAX_BULLET_POWER, MIN_BULLET_POWER};
pub use combat::{Bullet, BulletFiredEvent, Enemy, EnemyScannedEvent};
pub use condition::Condition;
pub use config::{BotConfig, ConfigError, FiringConfig, TrackerConfig};
pub use draw::{Canvas, Color, Drawer, Mark, Mode};
pub use geometry::{Battlefield, Point};
pub use host::HostEvent;
pub use payload::{Payload, PayloadKind};
pub use plugins::{
    AccuracyBasedFiringSystem, BotStatistics, EnemyStatistics, EnemyTracker, Statistics,
};
pub use session::Session;
pub use trace::{load_trace, parse_trace, TraceError};
