// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Zone move, resize and draw rules.
//!
//! Zones always stay inside the `[0, 100]` surface and never get smaller
//! than the configured minimum size on either axis.

use crate::models::{point::Point, zone::Zone};

/// Corner handle grabbed during a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeHandle {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl ResizeHandle {
    pub const ALL: [ResizeHandle; 4] = [
        ResizeHandle::NorthWest,
        ResizeHandle::NorthEast,
        ResizeHandle::SouthWest,
        ResizeHandle::SouthEast,
    ];

    /// Position of this handle on the zone's outline.
    pub fn position(self, zone: &Zone) -> Point {
        match self {
            ResizeHandle::NorthWest => Point::new(zone.x, zone.y),
            ResizeHandle::NorthEast => Point::new(zone.right(), zone.y),
            ResizeHandle::SouthWest => Point::new(zone.x, zone.bottom()),
            ResizeHandle::SouthEast => Point::new(zone.right(), zone.bottom()),
        }
    }

    fn moves_left(self) -> bool {
        matches!(self, ResizeHandle::NorthWest | ResizeHandle::SouthWest)
    }

    fn moves_top(self) -> bool {
        matches!(self, ResizeHandle::NorthWest | ResizeHandle::NorthEast)
    }
}

/// `origin` translated by `(dx, dy)`, kept fully on the surface.
pub fn move_zone(origin: &Zone, dx: f64, dy: f64) -> Zone {
    Zone {
        x: (origin.x + dx).clamp(0.0, (100.0 - origin.width).max(0.0)),
        y: (origin.y + dy).clamp(0.0, (100.0 - origin.height).max(0.0)),
        ..origin.clone()
    }
}

/// `origin` with the edges owned by `handle` moved by `(dx, dy)`.
///
/// The opposite edges stay put. Moved edges are clamped to the surface
/// and to `min_size` away from the opposite edge.
pub fn resize_zone(origin: &Zone, handle: ResizeHandle, dx: f64, dy: f64, min_size: f64) -> Zone {
    let (left, right) = resize_axis(origin.x, origin.right(), dx, handle.moves_left(), min_size);
    let (top, bottom) = resize_axis(origin.y, origin.bottom(), dy, handle.moves_top(), min_size);

    Zone {
        x: left,
        y: top,
        width: right - left,
        height: bottom - top,
        ..origin.clone()
    }
}

fn resize_axis(low: f64, high: f64, delta: f64, move_low: bool, min_size: f64) -> (f64, f64) {
    if move_low {
        let limit = (high - min_size).max(0.0);
        ((low + delta).clamp(0.0, limit), high)
    } else {
        let limit = (low + min_size).min(100.0);
        (low, (high + delta).clamp(limit, 100.0))
    }
}

/// Rectangle spanned by a drawing drag from `start` to `end`, clamped to
/// the surface. `None` if it is thinner than `min_size` on either axis.
pub fn normalize_drawn_zone(
    start: Point,
    end: Point,
    min_size: f64,
) -> Option<(f64, f64, f64, f64)> {
    let left = start.x.min(end.x).clamp(0.0, 100.0);
    let right = start.x.max(end.x).clamp(0.0, 100.0);
    let top = start.y.min(end.y).clamp(0.0, 100.0);
    let bottom = start.y.max(end.y).clamp(0.0, 100.0);

    let (width, height) = (right - left, bottom - top);
    if width < min_size || height < min_size {
        return None;
    }
    Some((left, top, width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone() -> Zone {
        Zone::new("zone-0", "Hall", 20.0, 30.0, 40.0, 20.0)
    }

    fn assert_on_surface(z: &Zone) {
        assert!(z.x >= 0.0 && z.y >= 0.0, "{z:?}");
        assert!(z.right() <= 100.0 + 1e-9 && z.bottom() <= 100.0 + 1e-9, "{z:?}");
    }

    #[test]
    fn test_move_stays_on_surface() {
        let moved = move_zone(&zone(), 10.0, -5.0);
        assert_eq!((moved.x, moved.y), (30.0, 25.0));
        assert_eq!((moved.width, moved.height), (40.0, 20.0));

        for (dx, dy) in [(-500.0, 0.0), (500.0, 0.0), (0.0, -500.0), (0.0, 500.0), (77.0, 77.0)] {
            let moved = move_zone(&zone(), dx, dy);
            assert_on_surface(&moved);
            assert_eq!((moved.width, moved.height), (40.0, 20.0));
        }
    }

    #[test]
    fn test_resize_to_width_three_clamps_to_minimum() {
        // South-east handle dragged left by 37 -> width 3 requested
        let resized = resize_zone(&zone(), ResizeHandle::SouthEast, -37.0, 0.0, 5.0);
        assert!((resized.width - 5.0).abs() < 1e-9);
        assert_eq!(resized.x, 20.0);

        // North-west handle dragged right: the right edge stays put
        let resized = resize_zone(&zone(), ResizeHandle::NorthWest, 37.0, 0.0, 5.0);
        assert!((resized.width - 5.0).abs() < 1e-9);
        assert!((resized.right() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_resize_each_handle() {
        let z = zone();
        let ne = resize_zone(&z, ResizeHandle::NorthEast, 5.0, -10.0, 5.0);
        assert_eq!((ne.x, ne.y, ne.width, ne.height), (20.0, 20.0, 45.0, 30.0));

        let sw = resize_zone(&z, ResizeHandle::SouthWest, -10.0, 10.0, 5.0);
        assert_eq!((sw.x, sw.y, sw.width, sw.height), (10.0, 30.0, 50.0, 30.0));
        assert_eq!(sw.id, z.id);
    }

    #[test]
    fn test_resize_never_leaves_surface() {
        for handle in ResizeHandle::ALL {
            for (dx, dy) in [(-200.0, -200.0), (200.0, 200.0), (-200.0, 200.0), (200.0, -200.0)] {
                let resized = resize_zone(&zone(), handle, dx, dy, 5.0);
                assert_on_surface(&resized);
                assert!(resized.width >= 5.0 - 1e-9 && resized.height >= 5.0 - 1e-9);
            }
        }
    }

    #[test]
    fn test_drawn_zone_any_direction() {
        let rect = normalize_drawn_zone(Point::new(60.0, 70.0), Point::new(10.0, 20.0), 5.0);
        assert_eq!(rect, Some((10.0, 20.0, 50.0, 50.0)));

        let clamped = normalize_drawn_zone(Point::new(-10.0, 90.0), Point::new(20.0, 120.0), 5.0);
        assert_eq!(clamped, Some((0.0, 90.0, 20.0, 10.0)));
    }

    #[test]
    fn test_drawn_zone_too_small() {
        assert_eq!(normalize_drawn_zone(Point::new(10.0, 10.0), Point::new(12.0, 40.0), 5.0), None);
        assert_eq!(normalize_drawn_zone(Point::new(10.0, 10.0), Point::new(10.0, 10.0), 5.0), None);
    }
}
