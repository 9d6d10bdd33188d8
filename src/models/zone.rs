// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Distribution zones.
//!
//! A zone is an axis-aligned rectangle over the blueprint, in percentage
//! coordinates. Anchors belong to a zone only by containment; membership
//! is never stored and is recomputed whenever it is needed.

use super::{anchor::Anchor, point::Point};
use serde::{Deserialize, Serialize};

/// A named rectangular region over which devices are distributed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Zone {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            x,
            y,
            width,
            height,
        }
    }

    /// Area in squared percentage units.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Point-in-rectangle test, edges inclusive.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// Clamp a point into this zone's rectangle.
    pub fn clamp_point(&self, point: Point) -> Point {
        Point::new(
            point.x.clamp(self.x, self.right()),
            point.y.clamp(self.y, self.bottom()),
        )
    }

    /// Number of anchors currently inside this zone.
    pub fn anchor_count(&self, anchors: &[Anchor]) -> usize {
        anchors.iter().filter(|a| self.contains(a.position())).count()
    }
}

/// True if the point lies inside at least one zone.
pub fn inside_any(zones: &[Zone], point: Point) -> bool {
    zones.iter().any(|zone| zone.contains(point))
}
