// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Battlefield coordinates
//!
//! Angles are radians, measured clockwise from north, so a heading of 0
//! points along +y and π/2 along +x.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// The point `distance` away along `heading`
    pub fn project(&self, heading: f64, distance: f64) -> Point {
        Point::new(
            self.x + heading.sin() * distance,
            self.y + heading.cos() * distance,
        )
    }
}

/// Battlefield bounds; the origin is the bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Battlefield {
    pub width: f64,
    pub height: f64,
}

impl Battlefield {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The point on the nearest wall straight across from `point`
    pub fn closest_border_point(&self, point: Point) -> Point {
        let candidates = [
            (point.x, Point::new(0.0, point.y)),
            (self.width - point.x, Point::new(self.width, point.y)),
            (point.y, Point::new(point.x, 0.0)),
            (self.height - point.y, Point::new(point.x, self.height)),
        ];
        candidates
            .into_iter()
            .min_by(|(a, _), (b, _)| a.total_cmp(b))
            .map(|(_, border)| border)
            .unwrap_or(point)
    }

    pub fn distance_to_wall(&self, point: Point) -> f64 {
        point.distance_to(self.closest_border_point(point))
    }
}

impl Default for Battlefield {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Normalize an angle into `[0, 2π)`
pub fn normalize_absolute(angle: f64) -> f64 {
    let a = angle % TAU;
    if a < 0.0 {
        a + TAU
    } else {
        a
    }
}
