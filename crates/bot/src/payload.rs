// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Values carried by bot events
//!
//! `Payload` is the closed set of argument types the facade and the stock
//! plugins raise. `PayloadKind` classifies them for shape matching: every
//! raw host event is also an `EngineEvent`, and everything is `Any`.

use crate::combat::{BulletFiredEvent, Enemy, EnemyScannedEvent};
use crate::draw::{Canvas, Drawer};
use crate::host::{
    BulletHitBulletEvent, BulletHitEvent, BulletMissedEvent, DeathEvent, HitByBulletEvent,
    HitRobotEvent, HitWallEvent, RobotDeathEvent, RoundEndedEvent, ScannedRobotEvent, WinEvent,
};
use rb_core::{Arg, Kind};

#[derive(Debug, Clone)]
pub enum Payload {
    Enemy(Enemy),
    EnemyScanned(EnemyScannedEvent),
    BulletFired(BulletFiredEvent),
    ScannedRobot(ScannedRobotEvent),
    BulletHit(BulletHitEvent),
    BulletHitBullet(BulletHitBulletEvent),
    BulletMissed(BulletMissedEvent),
    HitByBullet(HitByBulletEvent),
    RobotDeath(RobotDeathEvent),
    HitRobot(HitRobotEvent),
    HitWall(HitWallEvent),
    Death(DeathEvent),
    Win(WinEvent),
    RoundEnded(RoundEndedEvent),
    Canvas(Canvas),
    Drawer(Drawer),
    /// Free-form value for plugin-defined events
    Value(serde_json::Value),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    Any,
    EngineEvent,
    Enemy,
    EnemyScanned,
    BulletFired,
    ScannedRobot,
    BulletHit,
    BulletHitBullet,
    BulletMissed,
    HitByBullet,
    RobotDeath,
    HitRobot,
    HitWall,
    Death,
    Win,
    RoundEnded,
    Canvas,
    Drawer,
    Value,
}

impl PayloadKind {
    /// Kinds produced directly by the host engine
    pub fn is_engine_event(self) -> bool {
        matches!(
            self,
            PayloadKind::ScannedRobot
                | PayloadKind::BulletHit
                | PayloadKind::BulletHitBullet
                | PayloadKind::BulletMissed
                | PayloadKind::HitByBullet
                | PayloadKind::RobotDeath
                | PayloadKind::HitRobot
                | PayloadKind::HitWall
                | PayloadKind::Death
                | PayloadKind::Win
                | PayloadKind::RoundEnded
        )
    }
}

impl Kind for PayloadKind {
    fn accepts(self, actual: Self) -> bool {
        match self {
            PayloadKind::Any => true,
            PayloadKind::EngineEvent => {
                actual == PayloadKind::EngineEvent || actual.is_engine_event()
            }
            declared => declared == actual,
        }
    }
}

impl Arg for Payload {
    type Kind = PayloadKind;

    fn kind(&self) -> PayloadKind {
        match self {
            Payload::Enemy(_) => PayloadKind::Enemy,
            Payload::EnemyScanned(_) => PayloadKind::EnemyScanned,
            Payload::BulletFired(_) => PayloadKind::BulletFired,
            Payload::ScannedRobot(_) => PayloadKind::ScannedRobot,
            Payload::BulletHit(_) => PayloadKind::BulletHit,
            Payload::BulletHitBullet(_) => PayloadKind::BulletHitBullet,
            Payload::BulletMissed(_) => PayloadKind::BulletMissed,
            Payload::HitByBullet(_) => PayloadKind::HitByBullet,
            Payload::RobotDeath(_) => PayloadKind::RobotDeath,
            Payload::HitRobot(_) => PayloadKind::HitRobot,
            Payload::HitWall(_) => PayloadKind::HitWall,
            Payload::Death(_) => PayloadKind::Death,
            Payload::Win(_) => PayloadKind::Win,
            Payload::RoundEnded(_) => PayloadKind::RoundEnded,
            Payload::Canvas(_) => PayloadKind::Canvas,
            Payload::Drawer(_) => PayloadKind::Drawer,
            Payload::Value(_) => PayloadKind::Value,
        }
    }
}

macro_rules! payload_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Payload {
                fn from(value: $ty) -> Self {
                    Payload::$variant(value)
                }
            }
        )*
    };
}

payload_from!(
    Enemy(Enemy),
    EnemyScanned(EnemyScannedEvent),
    BulletFired(BulletFiredEvent),
    ScannedRobot(ScannedRobotEvent),
    BulletHit(BulletHitEvent),
    BulletHitBullet(BulletHitBulletEvent),
    BulletMissed(BulletMissedEvent),
    HitByBullet(HitByBulletEvent),
    RobotDeath(RobotDeathEvent),
    HitRobot(HitRobotEvent),
    HitWall(HitWallEvent),
    Death(DeathEvent),
    Win(WinEvent),
    RoundEnded(RoundEndedEvent),
    Canvas(Canvas),
    Drawer(Drawer),
    Value(serde_json::Value),
);

#[cfg(test)]
#[path = "payload_tests.rs"]
mod tests;
