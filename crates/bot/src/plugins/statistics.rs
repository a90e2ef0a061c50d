// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-enemy firing statistics shared across the rounds of a session

use crate::combat::BulletFiredEvent;
use crate::events;
use crate::payload::{Payload, PayloadKind};
use rb_core::{Listener, Subscriptions};
use serde::Serialize;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

/// Shared statistics handle; one per session, plugged into every round's bot
pub type Statistics = Rc<BotStatistics>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EnemyStatistics {
    pub fired: u32,
    pub hits: u32,
    pub misses: u32,
    /// Still flying when their round ended; the host never reports these
    pub lost: u32,
}

impl EnemyStatistics {
    /// Hits over bullets fired, 0 when nothing was fired
    pub fn accuracy(&self) -> f64 {
        if self.fired == 0 {
            0.0
        } else {
            f64::from(self.hits) / f64::from(self.fired)
        }
    }

    /// Bullets fired that have not hit or missed yet
    pub fn in_flight(&self) -> u32 {
        self.fired.saturating_sub(self.hits + self.misses + self.lost)
    }
}

enum Outcome<'a> {
    Hit { victim: &'a str },
    Miss,
}

#[derive(Debug, Default)]
pub struct BotStatistics {
    enemies: RefCell<BTreeMap<String, EnemyStatistics>>,
    totals: Cell<EnemyStatistics>,
    /// Bullet id → enemy locked when it was fired
    in_flight: RefCell<HashMap<String, Option<String>>>,
}

impl BotStatistics {
    pub fn shared() -> Statistics {
        Rc::new(Self::default())
    }

    pub fn for_enemy(&self, name: &str) -> EnemyStatistics {
        self.enemies.borrow().get(name).copied().unwrap_or_default()
    }

    pub fn accuracy(&self, name: &str) -> f64 {
        self.for_enemy(name).accuracy()
    }

    /// Counts across every bullet, targeted or not
    pub fn totals(&self) -> EnemyStatistics {
        self.totals.get()
    }

    /// Every enemy shot at, sorted by name
    pub fn enemies(&self) -> Vec<(String, EnemyStatistics)> {
        self.enemies
            .borrow()
            .iter()
            .map(|(name, stats)| (name.clone(), *stats))
            .collect()
    }

    pub fn bullets_in_flight(&self) -> usize {
        self.in_flight.borrow().len()
    }

    fn record_fired(&self, event: &BulletFiredEvent) {
        self.bump_totals(|t| t.fired += 1);
        if let Some(target) = &event.target {
            self.enemies
                .borrow_mut()
                .entry(target.clone())
                .or_default()
                .fired += 1;
        }
        self.in_flight
            .borrow_mut()
            .insert(event.bullet.id.clone(), event.target.clone());
    }

    fn resolve(&self, bullet: &str, outcome: Outcome<'_>) {
        let Some(target) = self.in_flight.borrow_mut().remove(bullet) else {
            tracing::debug!(bullet, "ignoring outcome of untracked bullet");
            return;
        };

        let hit_target = match outcome {
            Outcome::Hit { victim } => {
                self.bump_totals(|t| t.hits += 1);
                target.as_deref() == Some(victim)
            }
            Outcome::Miss => {
                self.bump_totals(|t| t.misses += 1);
                false
            }
        };

        if let Some(target) = target {
            let mut enemies = self.enemies.borrow_mut();
            let stats = enemies.entry(target).or_default();
            if hit_target {
                stats.hits += 1;
            } else {
                stats.misses += 1;
            }
        }
    }

    /// Write off every bullet of the round that just ended
    fn abandon_in_flight(&self) {
        let abandoned: Vec<_> = self.in_flight.borrow_mut().drain().collect();
        if abandoned.is_empty() {
            return;
        }
        tracing::debug!(count = abandoned.len(), "bullets lost at round end");
        let mut enemies = self.enemies.borrow_mut();
        for (_, target) in abandoned {
            self.bump_totals(|t| t.lost += 1);
            if let Some(target) = target {
                enemies.entry(target).or_default().lost += 1;
            }
        }
    }

    fn bump_totals(&self, f: impl FnOnce(&mut EnemyStatistics)) {
        let mut totals = self.totals.get();
        f(&mut totals);
        self.totals.set(totals);
    }
}

impl Listener<Payload> for BotStatistics {
    fn subscriptions(table: &mut Subscriptions<Self, Payload>) {
        table
            .when(
                &[events::BULLET_FIRED],
                "on_bullet_fired",
                [PayloadKind::BulletFired],
                |this, _, args| {
                    if let [Payload::BulletFired(event)] = args {
                        this.record_fired(event);
                    }
                    Ok(())
                },
            )
            .when(
                &[events::BULLET_HIT],
                "on_bullet_hit",
                [PayloadKind::BulletHit],
                |this, _, args| {
                    if let [Payload::BulletHit(event)] = args {
                        this.resolve(
                            &event.bullet,
                            Outcome::Hit {
                                victim: &event.victim,
                            },
                        );
                    }
                    Ok(())
                },
            )
            .when(
                &[events::BULLET_MISSED],
                "on_bullet_missed",
                [PayloadKind::BulletMissed],
                |this, _, args| {
                    if let [Payload::BulletMissed(event)] = args {
                        this.resolve(&event.bullet, Outcome::Miss);
                    }
                    Ok(())
                },
            )
            .when(
                &[events::BULLET_HIT_BULLET],
                "on_bullet_hit_bullet",
                [PayloadKind::BulletHitBullet],
                |this, _, args| {
                    if let [Payload::BulletHitBullet(event)] = args {
                        this.resolve(&event.bullet, Outcome::Miss);
                    }
                    Ok(())
                },
            )
            .when_bare(&[events::ROUND_ENDED], "on_round_ended", |this, _| {
                this.abandon_in_flight();
                Ok(())
            });
    }
}

#[cfg(test)]
#[path = "statistics_tests.rs"]
mod tests;
