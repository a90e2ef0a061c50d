// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Debug painting
//!
//! The host hands the bot a `Canvas` once per paint pass. Plugins draw on it
//! through a `Drawer`, which only records marks; rendering is up to the host.

use crate::geometry::Point;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

/// Radius used by `Pen::circle_at`
pub const DEFAULT_RADIUS: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    LightGray,
    Red,
    Green,
    Yellow,
    White,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Transparent,
    Filled,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Mark {
    Circle {
        center: Point,
        radius: f64,
        mode: Mode,
        color: Color,
    },
    Line {
        from: Point,
        to: Point,
        color: Color,
    },
}

/// Shared drawing surface for one paint pass. Clones draw on the same marks.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    marks: Rc<RefCell<Vec<Mark>>>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, mark: Mark) {
        self.marks.borrow_mut().push(mark);
    }

    pub fn marks(&self) -> Vec<Mark> {
        self.marks.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.marks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.borrow().is_empty()
    }
}

/// Drawing helper handed to `DRAW` subscribers
#[derive(Debug, Clone)]
pub struct Drawer {
    canvas: Canvas,
}

impl Drawer {
    pub fn new(canvas: Canvas) -> Self {
        Self { canvas }
    }

    /// Select a fill mode and color for the next marks
    pub fn draw(&self, mode: Mode, color: Color) -> Pen<'_> {
        Pen {
            canvas: &self.canvas,
            mode,
            color,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }
}

pub struct Pen<'a> {
    canvas: &'a Canvas,
    mode: Mode,
    color: Color,
}

impl Pen<'_> {
    pub fn circle_at(&self, center: Point) {
        self.circle(center, DEFAULT_RADIUS);
    }

    pub fn circle(&self, center: Point, radius: f64) {
        self.canvas.push(Mark::Circle {
            center,
            radius,
            mode: self.mode,
            color: self.color,
        });
    }

    pub fn line(&self, from: Point, to: Point) {
        self.canvas.push(Mark::Line {
            from,
            to,
            color: self.color,
        });
    }
}
