// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deferred checks against a bot
//!
//! A `Condition` is built once, typically when a plugin is set up, and
//! evaluated against the bot whenever the plugin needs an answer. Nothing
//! is read at construction time.

use crate::bot::Bot;
use crate::plugins::EnemyTracker;
use std::fmt;
use std::rc::Rc;

type Check = Box<dyn Fn(&Bot) -> bool>;

pub struct Condition {
    label: String,
    check: Check,
}

impl Condition {
    pub fn new(label: impl Into<String>, check: impl Fn(&Bot) -> bool + 'static) -> Self {
        Self {
            label: label.into(),
            check: Box::new(check),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn evaluate(&self, bot: &Bot) -> bool {
        (self.check)(bot)
    }

    pub fn and(self, other: Condition) -> Condition {
        let label = format!("{} and {}", self.label, other.label);
        Condition::new(label, move |bot| self.evaluate(bot) && other.evaluate(bot))
    }

    pub fn or(self, other: Condition) -> Condition {
        let label = format!("{} or {}", self.label, other.label);
        Condition::new(label, move |bot| self.evaluate(bot) || other.evaluate(bot))
    }
}

impl std::ops::Not for Condition {
    type Output = Condition;

    fn not(self) -> Condition {
        let label = format!("not {}", self.label);
        Condition::new(label, move |bot| !self.evaluate(bot))
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Condition").field(&self.label).finish()
    }
}

/// True while the bot is within `distance` of the closest wall
pub fn next_to_wall(distance: f64) -> Condition {
    Condition::new(format!("next_to_wall({distance})"), move |bot| {
        bot.status().battlefield.distance_to_wall(bot.location()) <= distance
    })
}

/// True while any enemy's last known position is within `distance`
pub fn next_to_enemy(tracker: &Rc<EnemyTracker>, distance: f64) -> Condition {
    let tracker = Rc::clone(tracker);
    Condition::new(format!("next_to_enemy({distance})"), move |bot| {
        let here = bot.location();
        tracker
            .known_enemies()
            .iter()
            .filter_map(|name| tracker.latest(name))
            .any(|enemy| here.distance_to(enemy.location) <= distance)
    })
}

/// True while the bot's current target changed heading between its last
/// two scans
pub fn target_is_turning(tracker: &Rc<EnemyTracker>) -> Condition {
    let tracker = Rc::clone(tracker);
    Condition::new("target_is_turning", move |bot| {
        bot.target().is_some_and(|name| tracker.is_turning(name))
    })
}

/// True while the bot has a target and no scan shows it moving
pub fn target_stopped(tracker: &Rc<EnemyTracker>) -> Condition {
    let tracker = Rc::clone(tracker);
    Condition::new("target_stopped", move |bot| {
        tracker.is_target_stopped(bot.target())
    })
}

#[cfg(test)]
#[path = "condition_tests.rs"]
mod tests;
