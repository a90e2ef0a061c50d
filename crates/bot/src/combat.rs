// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Values the facade derives from host callbacks

use crate::geometry::{normalize_absolute, Point};
use crate::host::{BotStatus, ScannedRobotEvent};
use serde::Serialize;

/// Snapshot of an enemy robot at the moment it was scanned
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Enemy {
    pub name: String,
    pub location: Point,
    /// Absolute bearing from the scanning bot, radians
    pub bearing: f64,
    pub distance: f64,
    pub heading: f64,
    pub velocity: f64,
    pub energy: f64,
    pub time: u64,
}

impl Enemy {
    /// Locate the scanned robot relative to the observer's position and heading
    pub fn from_scan(observer: &BotStatus, event: &ScannedRobotEvent) -> Self {
        let bearing = normalize_absolute(observer.heading + event.bearing);
        let origin = Point::new(observer.x, observer.y);
        let time = if event.time > 0 {
            event.time
        } else {
            observer.time
        };
        Self {
            name: event.name.clone(),
            location: origin.project(bearing, event.distance),
            bearing,
            distance: event.distance,
            heading: event.heading,
            velocity: event.velocity,
            energy: event.energy,
            time,
        }
    }

    pub fn is_moving(&self) -> bool {
        self.velocity.abs() > f64::EPSILON
    }
}

/// Raised alongside the bare `Enemy` so plugins can subscribe to the scan
/// as an occurrence rather than a value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnemyScannedEvent {
    pub enemy: Enemy,
}

/// A bullet this bot fired
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bullet {
    pub id: String,
    pub power: f64,
    pub heading: f64,
    pub origin: Point,
    pub time: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulletFiredEvent {
    pub bullet: Bullet,
    /// Enemy the gun was locked on when firing
    pub target: Option<String>,
}
