// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Minimum-distance acceptance of candidate anchors.
//!
//! A candidate is accepted only if it keeps `min_distance_px` display
//! pixels from every point accepted so far in the pass, across all zones.
//!
//! Each check is linear in the accepted set, so a whole pass is O(n²) in
//! the final anchor count. That is fine for the few hundred anchors a
//! blueprint holds; a spatial hash would be the next step for larger
//! layouts and must keep exactly the same acceptance outcomes.

use crate::models::point::Point;
use crate::util::geometry::pixel_distance;

/// True if `candidate` is at least `min_distance_px` from every accepted point.
pub fn accept(
    candidate: Point,
    accepted: &[Point],
    min_distance_px: f64,
    display_width: f64,
    display_height: f64,
) -> bool {
    accepted
        .iter()
        .all(|&p| pixel_distance(p, candidate, display_width, display_height) >= min_distance_px)
}

/// The running accepted set of one distribution pass.
#[derive(Debug, Clone)]
pub struct SpacingFilter {
    min_distance_px: f64,
    display_width: f64,
    display_height: f64,
    accepted: Vec<Point>,
}

impl SpacingFilter {
    pub fn new(min_distance_px: f64, display_width: f64, display_height: f64) -> Self {
        Self {
            min_distance_px,
            display_width,
            display_height,
            accepted: Vec::new(),
        }
    }

    /// Accept `candidate` into the set if it keeps the minimum distance.
    pub fn offer(&mut self, candidate: Point) -> bool {
        let ok = accept(
            candidate,
            &self.accepted,
            self.min_distance_px,
            self.display_width,
            self.display_height,
        );
        if ok {
            self.accepted.push(candidate);
        }
        ok
    }

    pub fn accepted(&self) -> &[Point] {
        &self.accepted
    }

    pub fn len(&self) -> usize {
        self.accepted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }

    pub fn into_points(self) -> Vec<Point> {
        self.accepted
    }
}
