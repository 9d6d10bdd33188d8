// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Manual anchor placement and anchor dragging.
//!
//! Anchors may only be placed or dropped inside a zone.

use crate::models::{
    anchor::Anchor,
    point::Point,
    zone::{inside_any, Zone},
};

/// A new manual anchor at `point`, or `None` if the point is outside every zone.
pub fn place_manual_anchor(
    point: Point,
    zones: &[Zone],
    id: String,
    diameter: f64,
) -> Option<Anchor> {
    if inside_any(zones, point) {
        Some(Anchor::manual(id, point, diameter))
    } else {
        None
    }
}

/// Move `anchor` to `point` if the point is inside a zone. Returns whether it moved.
pub fn drag_anchor(anchor: &mut Anchor, point: Point, zones: &[Zone]) -> bool {
    if !inside_any(zones, point) {
        return false;
    }
    anchor.set_position(point);
    true
}

/// Index of the anchor closest to `point` within `radius_pct`, if any.
pub fn hit_test(anchors: &[Anchor], point: Point, radius_pct: f64) -> Option<usize> {
    anchors
        .iter()
        .enumerate()
        .map(|(i, a)| (i, (a.x - point.x).hypot(a.y - point.y)))
        .filter(|&(_, d)| d <= radius_pct)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}
