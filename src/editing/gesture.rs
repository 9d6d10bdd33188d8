// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drag gesture lifecycle.
//!
//! A gesture is acquired on pointer-down and must be released on
//! pointer-up or when the pointer leaves the drawing surface. At most one
//! gesture is active; beginning a new one first releases a stale one so
//! nothing leaks from one drag into the next.

use super::zone_editor::ResizeHandle;
use crate::models::{point::Point, zone::Zone};

/// What a drag gesture is doing.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureKind {
    /// Rubber-band rectangle for a new zone.
    DrawZone,
    /// Translating a zone; `origin` is the zone at pointer-down.
    MoveZone { origin: Zone },
    /// Dragging one corner of a zone.
    ResizeZone { origin: Zone, handle: ResizeHandle },
    /// Dragging an anchor.
    MoveAnchor { anchor_id: String },
}

/// An active drag.
#[derive(Debug, Clone, PartialEq)]
pub struct Gesture {
    pub kind: GestureKind,
    pub start: Point,
    pub current: Point,
}

impl Gesture {
    /// Pointer displacement since pointer-down, in percent.
    pub fn delta(&self) -> (f64, f64) {
        (self.current.x - self.start.x, self.current.y - self.start.y)
    }
}

/// How a gesture ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEnd {
    Released,
    /// Treated exactly like a release.
    LeftSurface,
}

/// Holds the single active gesture, if any.
#[derive(Debug, Default)]
pub struct GestureTracker {
    active: Option<Gesture>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a gesture at `at`. Returns the stale gesture it replaced.
    pub fn begin(&mut self, kind: GestureKind, at: Point) -> Option<Gesture> {
        let stale = self.active.take();
        if let Some(ref g) = stale {
            log::warn!("Gesture {:?} was never released, dropping it", g.kind);
        }
        self.active = Some(Gesture {
            kind,
            start: at,
            current: at,
        });
        stale
    }

    /// Route a pointer move to the active gesture.
    pub fn update(&mut self, at: Point) -> Option<&Gesture> {
        let gesture = self.active.as_mut()?;
        gesture.current = at;
        Some(gesture)
    }

    /// Release the active gesture.
    pub fn finish(&mut self, end: GestureEnd) -> Option<Gesture> {
        let gesture = self.active.take();
        if let Some(ref g) = gesture {
            log::debug!("Gesture {:?} ended ({:?})", g.kind, end);
        }
        gesture
    }

    pub fn active(&self) -> Option<&Gesture> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let mut tracker = GestureTracker::new();
        assert!(tracker.update(Point::new(1.0, 1.0)).is_none());

        assert!(tracker.begin(GestureKind::DrawZone, Point::new(10.0, 10.0)).is_none());
        let g = tracker.update(Point::new(15.0, 12.0)).unwrap();
        assert_eq!(g.delta(), (5.0, 2.0));

        let finished = tracker.finish(GestureEnd::Released).unwrap();
        assert_eq!(finished.current, Point::new(15.0, 12.0));
        assert!(!tracker.is_active());
        assert!(tracker.finish(GestureEnd::Released).is_none());
    }

    #[test]
    fn test_leaving_surface_releases() {
        let mut tracker = GestureTracker::new();
        let kind = GestureKind::MoveAnchor {
            anchor_id: "anchor-0".into(),
        };
        tracker.begin(kind, Point::new(5.0, 5.0));
        assert!(tracker.finish(GestureEnd::LeftSurface).is_some());
        assert!(tracker.active().is_none());
    }

    #[test]
    fn test_begin_replaces_stale_gesture() {
        let mut tracker = GestureTracker::new();
        tracker.begin(GestureKind::DrawZone, Point::new(5.0, 5.0));
        let kind = GestureKind::MoveAnchor {
            anchor_id: "anchor-3".into(),
        };
        let stale = tracker.begin(kind, Point::new(7.0, 7.0));
        assert_eq!(stale.unwrap().kind, GestureKind::DrawZone);
        assert_eq!(tracker.active().unwrap().start, Point::new(7.0, 7.0));
    }
}
