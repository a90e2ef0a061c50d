// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host engine callbacks
//!
//! The battle engine calls the bot once per lifecycle occurrence. Each
//! callback carries one of the event records below; `HostEvent` mirrors the
//! callback table so a recorded battle can be replayed through
//! `Bot::handle`.

use crate::geometry::Battlefield;
use serde::{Deserialize, Serialize};

/// The bot's own sensor readings for the current turn
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotStatus {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
    pub gun_heading: f64,
    pub velocity: f64,
    pub energy: f64,
    pub gun_heat: f64,
    pub time: u64,
    pub battlefield: Battlefield,
}

/// Radar contact with another robot. `bearing` is relative to the
/// scanning bot's heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScannedRobotEvent {
    pub name: String,
    pub bearing: f64,
    pub distance: f64,
    pub heading: f64,
    pub velocity: f64,
    pub energy: f64,
    #[serde(default)]
    pub time: u64,
}

/// One of our bullets hit a robot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletHitEvent {
    pub bullet: String,
    pub victim: String,
    #[serde(default)]
    pub victim_energy: f64,
}

/// One of our bullets collided with another bullet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletHitBulletEvent {
    pub bullet: String,
    #[serde(default)]
    pub hit_bullet: Option<String>,
}

/// One of our bullets left the battlefield
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletMissedEvent {
    pub bullet: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitByBulletEvent {
    pub shooter: String,
    pub power: f64,
    #[serde(default)]
    pub bearing: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotDeathEvent {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitRobotEvent {
    pub name: String,
    #[serde(default)]
    pub bearing: f64,
    #[serde(default)]
    pub energy: f64,
    #[serde(default)]
    pub my_fault: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitWallEvent {
    #[serde(default)]
    pub bearing: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeathEvent {
    pub time: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WinEvent {
    pub time: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundEndedEvent {
    pub round: u32,
    pub turns: u64,
    pub total_turns: u64,
}

/// One recorded host callback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    RoundStarted,
    NextTurn,
    Status(BotStatus),
    ScannedRobot(ScannedRobotEvent),
    BulletHit(BulletHitEvent),
    BulletHitBullet(BulletHitBulletEvent),
    BulletMissed(BulletMissedEvent),
    HitByBullet(HitByBulletEvent),
    RobotDeath(RobotDeathEvent),
    HitRobot(HitRobotEvent),
    HitWall(HitWallEvent),
    Paint,
    Death(DeathEvent),
    Win(WinEvent),
    RoundEnded(RoundEndedEvent),
    BattleEnded,
    /// Ask the bot to fire with the given power
    Fire { power: f64 },
}

impl HostEvent {
    /// The snake_case tag this event carries on the wire
    pub fn tag(&self) -> &'static str {
        match self {
            HostEvent::RoundStarted => "round_started",
            HostEvent::NextTurn => "next_turn",
            HostEvent::Status(_) => "status",
            HostEvent::ScannedRobot(_) => "scanned_robot",
            HostEvent::BulletHit(_) => "bullet_hit",
            HostEvent::BulletHitBullet(_) => "bullet_hit_bullet",
            HostEvent::BulletMissed(_) => "bullet_missed",
            HostEvent::HitByBullet(_) => "hit_by_bullet",
            HostEvent::RobotDeath(_) => "robot_death",
            HostEvent::HitRobot(_) => "hit_robot",
            HostEvent::HitWall(_) => "hit_wall",
            HostEvent::Paint => "paint",
            HostEvent::Death(_) => "death",
            HostEvent::Win(_) => "win",
            HostEvent::RoundEnded(_) => "round_ended",
            HostEvent::BattleEnded => "battle_ended",
            HostEvent::Fire { .. } => "fire",
        }
    }
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
