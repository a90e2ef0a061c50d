// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The bot facade
//!
//! `Bot` owns one registry for one round. Every host callback is turned
//! into a named event; plugins plugged into the bot react to those events
//! without the bot knowing about them.

use crate::combat::{Bullet, BulletFiredEvent, Enemy, EnemyScannedEvent};
use crate::draw::{Canvas, Drawer};
use crate::events;
use crate::geometry::Point;
use crate::host::{
    BotStatus, BulletHitBulletEvent, BulletHitEvent, BulletMissedEvent, DeathEvent,
    HitByBulletEvent, HitRobotEvent, HitWallEvent, HostEvent, RobotDeathEvent, RoundEndedEvent,
    ScannedRobotEvent, WinEvent,
};
use crate::payload::Payload;
use crate::plugins::Statistics;
use rb_core::{EventRegistry, IdGen, Listener, Logger, RegistryConfig, SequentialIdGen};
use std::fmt;
use std::rc::Rc;

pub type Registry = EventRegistry<Payload>;

pub const MIN_BULLET_POWER: f64 = 0.1;
pub const MAX_BULLET_POWER: f64 = 3.0;
/// Gun heat shed per turn
pub const GUN_COOLING_RATE: f64 = 0.1;
/// Heat below this counts as a cold gun; repeated cooling leaves float dust
const GUN_HEAT_TOLERANCE: f64 = 1e-9;

pub struct Bot {
    name: String,
    registry: Registry,
    statistics: Statistics,
    bullet_ids: SequentialIdGen,
    status: BotStatus,
    target: Option<String>,
    round_ended: bool,
}

impl Bot {
    pub fn new(
        name: impl Into<String>,
        logger: Rc<dyn Logger>,
        statistics: Statistics,
        config: RegistryConfig,
    ) -> Self {
        Self {
            name: name.into(),
            registry: EventRegistry::with_config(logger, config),
            statistics,
            bullet_ids: SequentialIdGen::new("bullet"),
            status: BotStatus::default(),
            target: None,
            round_ended: false,
        }
    }

    /// Continue a bullet id sequence shared with earlier rounds
    pub fn with_bullet_ids(mut self, bullet_ids: SequentialIdGen) -> Self {
        self.bullet_ids = bullet_ids;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn status(&self) -> &BotStatus {
        &self.status
    }

    pub fn location(&self) -> Point {
        Point::new(self.status.x, self.status.y)
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn lock_target(&mut self, name: impl Into<String>) {
        self.target = Some(name.into());
    }

    pub fn clear_target(&mut self) {
        self.target = None;
    }

    pub fn is_round_ended(&self) -> bool {
        self.round_ended
    }

    /// Write a line to the bot's log
    pub fn log(&self, message: fmt::Arguments<'_>) {
        self.registry.logger().log(message);
    }

    /// Register `plugin` and hand the same reference back
    pub fn plug<L: Listener<Payload>>(&self, plugin: Rc<L>) -> Rc<L> {
        self.registry.register(&plugin);
        plugin
    }

    pub fn broadcast(&self, event: &str, args: &[Payload]) {
        self.registry.send(event, args);
    }

    pub fn start_round(&mut self) {
        self.registry.register(&self.statistics);
        tracing::debug!(bot = %self.name, "round started");
        self.registry.send(events::ROUND_STARTED, &[]);
    }

    /// Raise `NEXT_TURN` and cool the gun. Returns false once the round ended.
    pub fn next_turn(&mut self) -> bool {
        if self.round_ended {
            return false;
        }
        let heat = self.status.gun_heat - GUN_COOLING_RATE;
        self.status.gun_heat = if heat < GUN_HEAT_TOLERANCE { 0.0 } else { heat };
        self.registry.send(events::NEXT_TURN, &[]);
        true
    }

    pub fn on_status(&mut self, status: BotStatus) {
        self.status = status;
    }

    pub fn on_scanned_robot(&mut self, event: ScannedRobotEvent) -> Enemy {
        let enemy = Enemy::from_scan(&self.status, &event);
        self.registry
            .send(events::ENEMY_SCANNED, &[Payload::Enemy(enemy.clone())]);
        self.registry
            .send(events::ENEMY_SCANNED, &[Payload::ScannedRobot(event)]);
        self.registry.send(
            events::ENEMY_SCANNED,
            &[Payload::EnemyScanned(EnemyScannedEvent {
                enemy: enemy.clone(),
            })],
        );
        enemy
    }

    pub fn on_bullet_hit(&mut self, event: BulletHitEvent) {
        self.registry.send(events::BULLET_HIT, &[event.into()]);
    }

    pub fn on_bullet_hit_bullet(&mut self, event: BulletHitBulletEvent) {
        self.registry.send(events::BULLET_HIT_BULLET, &[event.into()]);
    }

    pub fn on_bullet_missed(&mut self, event: BulletMissedEvent) {
        self.registry.send(events::BULLET_MISSED, &[event.into()]);
    }

    pub fn on_hit_by_bullet(&mut self, event: HitByBulletEvent) {
        self.registry.send(events::HIT_BY_BULLET, &[event.into()]);
    }

    /// A dead enemy can no longer be the target
    pub fn on_robot_death(&mut self, event: RobotDeathEvent) {
        if self.target.as_deref() == Some(event.name.as_str()) {
            self.target = None;
        }
        self.registry.send(events::ROBOT_DEATH, &[event.into()]);
    }

    pub fn on_hit_robot(&mut self, event: HitRobotEvent) {
        self.registry.send(events::HIT_ROBOT, &[event.into()]);
    }

    pub fn on_hit_wall(&mut self, event: HitWallEvent) {
        self.registry.send(events::HIT_WALL, &[event.into()]);
    }

    pub fn on_paint(&mut self, canvas: Canvas) {
        self.registry
            .send(events::PAINT, &[Payload::Canvas(canvas.clone())]);
        self.registry
            .send(events::DRAW, &[Payload::Drawer(Drawer::new(canvas))]);
    }

    pub fn on_death(&mut self, event: DeathEvent) {
        self.registry.send(events::DEATH, &[event.into()]);
    }

    pub fn on_win(&mut self, event: WinEvent) {
        self.registry.send(events::WIN, &[event.into()]);
    }

    pub fn on_round_ended(&mut self, event: RoundEndedEvent) {
        self.round_ended = true;
        tracing::debug!(bot = %self.name, round = event.round, "round ended");
        self.registry.send(events::ROUND_ENDED, &[event.into()]);
    }

    pub fn on_battle_ended(&mut self) {
        self.registry.send(events::BATTLE_ENDED, &[]);
    }

    /// Fire at the gun's heading. Nothing happens while the gun is hot or
    /// when `power` is below the minimum bullet power.
    pub fn fire(&mut self, power: f64) -> Option<Bullet> {
        if self.status.gun_heat > 0.0 || power.is_nan() || power < MIN_BULLET_POWER {
            return None;
        }
        let power = power.min(MAX_BULLET_POWER);
        let bullet = Bullet {
            id: self.bullet_ids.next(),
            power,
            heading: self.status.gun_heading,
            origin: self.location(),
            time: self.status.time,
        };
        self.status.gun_heat = 1.0 + power / 5.0;
        tracing::debug!(bot = %self.name, bullet = %bullet.id, power, "fired");

        let event = BulletFiredEvent {
            bullet: bullet.clone(),
            target: self.target.clone(),
        };
        self.registry.send(events::BULLET_FIRED, &[event.into()]);
        Some(bullet)
    }

    /// Route one recorded host callback
    pub fn handle(&mut self, event: HostEvent) {
        match event {
            HostEvent::RoundStarted => self.start_round(),
            HostEvent::NextTurn => {
                self.next_turn();
            }
            HostEvent::Status(status) => self.on_status(status),
            HostEvent::ScannedRobot(event) => {
                self.on_scanned_robot(event);
            }
            HostEvent::BulletHit(event) => self.on_bullet_hit(event),
            HostEvent::BulletHitBullet(event) => self.on_bullet_hit_bullet(event),
            HostEvent::BulletMissed(event) => self.on_bullet_missed(event),
            HostEvent::HitByBullet(event) => self.on_hit_by_bullet(event),
            HostEvent::RobotDeath(event) => self.on_robot_death(event),
            HostEvent::HitRobot(event) => self.on_hit_robot(event),
            HostEvent::HitWall(event) => self.on_hit_wall(event),
            HostEvent::Paint => self.on_paint(Canvas::new()),
            HostEvent::Death(event) => self.on_death(event),
            HostEvent::Win(event) => self.on_win(event),
            HostEvent::RoundEnded(event) => self.on_round_ended(event),
            HostEvent::BattleEnded => self.on_battle_ended(),
            HostEvent::Fire { power } => {
                self.fire(power);
            }
        }
    }
}

#[cfg(test)]
#[path = "bot_tests.rs"]
mod tests;
