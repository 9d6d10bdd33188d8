// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Anchor (placed device) data structure.

use super::point::Point;
use serde::{Deserialize, Serialize};

/// A placed device, either generated by a distribution pass or placed by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub id: String,
    pub x: f64,
    pub y: f64,
    /// Physical diameter in meters.
    pub diameter: f64,
    /// Manual anchors are never regenerated or removed by a distribution pass.
    pub is_manual: bool,
}

impl Anchor {
    /// An anchor produced by the distribution algorithm.
    pub fn generated(id: impl Into<String>, position: Point, diameter: f64) -> Self {
        Self {
            id: id.into(),
            x: position.x,
            y: position.y,
            diameter,
            is_manual: false,
        }
    }

    /// An anchor placed directly by the user.
    pub fn manual(id: impl Into<String>, position: Point, diameter: f64) -> Self {
        Self {
            is_manual: true,
            ..Self::generated(id, position, diameter)
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn set_position(&mut self, position: Point) {
        self.x = position.x;
        self.y = position.y;
    }
}
