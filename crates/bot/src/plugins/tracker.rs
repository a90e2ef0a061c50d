// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded scan history per enemy

use crate::combat::Enemy;
use crate::config::TrackerConfig;
use crate::draw::{Color, Drawer, Mode};
use crate::events;
use crate::payload::{Payload, PayloadKind};
use rb_core::{Listener, Subscriptions};
use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};

pub struct EnemyTracker {
    config: TrackerConfig,
    history: RefCell<BTreeMap<String, VecDeque<Enemy>>>,
}

impl EnemyTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            history: RefCell::new(BTreeMap::new()),
        }
    }

    pub fn record(&self, enemy: Enemy) {
        let limit = self.config.history_size.max(1);
        let mut history = self.history.borrow_mut();
        let samples = history.entry(enemy.name.clone()).or_default();
        samples.push_back(enemy);
        while samples.len() > limit {
            samples.pop_front();
        }
    }

    /// Samples for `name`, oldest first; empty for unknown enemies
    pub fn history(&self, name: &str) -> Vec<Enemy> {
        self.history
            .borrow()
            .get(name)
            .map(|samples| samples.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn latest(&self, name: &str) -> Option<Enemy> {
        self.history
            .borrow()
            .get(name)
            .and_then(|samples| samples.back().cloned())
    }

    pub fn known_enemies(&self) -> Vec<String> {
        self.history.borrow().keys().cloned().collect()
    }

    /// True when no recorded sample shows the enemy moving. Unknown enemies
    /// count as stopped.
    pub fn is_enemy_stopped(&self, name: &str) -> bool {
        self.history
            .borrow()
            .get(name)
            .map(|samples| samples.iter().all(|enemy| !enemy.is_moving()))
            .unwrap_or(true)
    }

    /// Whether the locked target is standing still; false without a target
    pub fn is_target_stopped(&self, target: Option<&str>) -> bool {
        target.is_some_and(|name| self.is_enemy_stopped(name))
    }

    /// True when the two latest samples report different headings
    pub fn is_turning(&self, name: &str) -> bool {
        let history = self.history.borrow();
        let Some(samples) = history.get(name) else {
            return false;
        };
        let mut latest = samples.iter().rev();
        match (latest.next(), latest.next()) {
            (Some(current), Some(previous)) => {
                (current.heading - previous.heading).abs() > f64::EPSILON
            }
            _ => false,
        }
    }

    fn draw(&self, drawer: &Drawer) {
        let pen = drawer.draw(Mode::Transparent, Color::LightGray);
        for samples in self.history.borrow().values() {
            for enemy in samples.iter().rev().take(self.config.drawn_samples) {
                pen.circle_at(enemy.location);
            }
        }
    }
}

impl Default for EnemyTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

impl Listener<Payload> for EnemyTracker {
    fn subscriptions(table: &mut Subscriptions<Self, Payload>) {
        table
            .when(
                &[events::ENEMY_SCANNED],
                "register_enemy",
                [PayloadKind::EnemyScanned],
                |this, _, args| {
                    if let [Payload::EnemyScanned(event)] = args {
                        this.record(event.enemy.clone());
                    }
                    Ok(())
                },
            )
            .when(
                &[events::DRAW],
                "draw_history",
                [PayloadKind::Drawer],
                |this, _, args| {
                    if let [Payload::Drawer(drawer)] = args {
                        this.draw(drawer);
                    }
                    Ok(())
                },
            );
    }
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tests;
