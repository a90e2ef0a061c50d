// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fire power chosen from the hit rate against the locked target

use crate::bot::{Bot, MAX_BULLET_POWER, MIN_BULLET_POWER};
use crate::combat::Bullet;
use crate::config::FiringConfig;

pub const MEDIUM_BULLET_POWER: f64 = (MAX_BULLET_POWER + MIN_BULLET_POWER) / 2.0;

#[derive(Debug, Clone, Default)]
pub struct AccuracyBasedFiringSystem {
    config: FiringConfig,
}

impl AccuracyBasedFiringSystem {
    pub fn new(config: FiringConfig) -> Self {
        Self { config }
    }

    pub fn fire_max_at(mut self, accuracy: f64) -> Self {
        self.config.fire_max_at = accuracy;
        self
    }

    pub fn fire_medium_at(mut self, accuracy: f64) -> Self {
        self.config.fire_medium_at = accuracy;
        self
    }

    pub fn fire_min_at(mut self, accuracy: f64) -> Self {
        self.config.fire_min_at = accuracy;
        self
    }

    /// Power for the next shot, 0 to hold fire
    pub fn fire_power(&self, bot: &Bot) -> f64 {
        let Some(target) = bot.target() else {
            return 0.0;
        };
        let stats = bot.statistics().for_enemy(target);
        if stats.fired == 0 {
            return MEDIUM_BULLET_POWER;
        }

        let accuracy = stats.accuracy();
        if accuracy >= self.config.fire_max_at {
            MAX_BULLET_POWER
        } else if accuracy >= self.config.fire_medium_at {
            MEDIUM_BULLET_POWER
        } else if accuracy >= self.config.fire_min_at {
            MIN_BULLET_POWER
        } else {
            0.0
        }
    }

    pub fn execute(&self, bot: &mut Bot) -> Option<Bullet> {
        let power = self.fire_power(bot);
        bot.fire(power)
    }
}

#[cfg(test)]
#[path = "firing_tests.rs"]
mod tests;
