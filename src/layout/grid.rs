// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Jittered hexagonal candidate grid for one zone.
//!
//! The zone is split into `rows` rows. Odd rows (1-based) hold `cols`
//! points; even rows are shifted right by half a column and hold
//! `cols - 1` points, giving the brick/hex stagger. Every point is then
//! jittered on both axes and clamped back into the zone.
//!
//! Randomness comes from the caller so tests can inject a seeded or
//! constant generator.

use crate::models::{point::Point, zone::Zone};
use rand::Rng;

/// Row/column layout of a zone's grid, with spacings in display pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPlan {
    pub rows: usize,
    pub cols: usize,
    pub spacing_x_px: f64,
    pub spacing_y_px: f64,
}

impl GridPlan {
    /// Number of points the staggered layout emits before filtering, or
    /// `None` if that count does not fit in a `usize`.
    pub fn point_count(&self) -> Option<usize> {
        let even_rows = self.rows / 2;
        let odd_rows = self.rows - even_rows;
        odd_rows
            .checked_mul(self.cols)?
            .checked_add(even_rows.checked_mul(self.cols.saturating_sub(1))?)
    }
}

/// Rows and columns for `device_count` points in `zone`, shaped after the
/// zone's on-screen aspect ratio.
pub fn plan_grid(
    zone: &Zone,
    device_count: usize,
    display_width: f64,
    display_height: f64,
) -> GridPlan {
    let zone_width_px = zone.width / 100.0 * display_width;
    let zone_height_px = zone.height / 100.0 * display_height;
    let aspect_ratio = zone_width_px / zone_height_px;

    // Tiny zones or small counts floor to zero rows; keep at least one.
    let raw_rows = (device_count as f64 / aspect_ratio).sqrt().floor();
    let rows = if raw_rows.is_finite() && raw_rows >= 1.0 {
        raw_rows as usize
    } else {
        1
    };
    let cols = device_count.div_ceil(rows);

    GridPlan {
        rows,
        cols,
        spacing_x_px: zone_width_px / (cols + 1) as f64,
        spacing_y_px: zone_height_px / (rows + 1) as f64,
    }
}

/// Candidate anchor positions for one zone, in percentage coordinates.
///
/// Each point is displaced by `(u - 0.5) * spacing * jitter_fraction` per
/// axis, `u` uniform in `[0, 1)`, then clamped into the zone.
pub fn generate_candidates<R: Rng + ?Sized>(
    zone: &Zone,
    device_count: usize,
    display_width: f64,
    display_height: f64,
    jitter_fraction: f64,
    rng: &mut R,
) -> Vec<Point> {
    if device_count == 0 {
        return Vec::new();
    }

    let plan = plan_grid(zone, device_count, display_width, display_height);
    log::debug!(
        "Zone {}: {} devices -> {} rows x {} cols",
        zone.id,
        device_count,
        plan.rows,
        plan.cols
    );

    let spacing_x_pct = plan.spacing_x_px / display_width * 100.0;
    let spacing_y_pct = plan.spacing_y_px / display_height * 100.0;
    let mut points = Vec::with_capacity(plan.point_count().unwrap_or_default());

    for row in 1..=plan.rows {
        let is_even_row = row % 2 == 0;
        let col_offset = if is_even_row { plan.spacing_x_px / 2.0 } else { 0.0 };
        let cols_in_row = if is_even_row {
            plan.cols.saturating_sub(1)
        } else {
            plan.cols
        };

        for col in 1..=cols_in_row {
            let x = zone.x + (col_offset + col as f64 * plan.spacing_x_px) / display_width * 100.0;
            let y = zone.y + (row as f64 * plan.spacing_y_px) / display_height * 100.0;

            let jitter_x = (rng.gen::<f64>() - 0.5) * spacing_x_pct * jitter_fraction;
            let jitter_y = (rng.gen::<f64>() - 0.5) * spacing_y_pct * jitter_fraction;

            points.push(zone.clamp_point(Point::new(x + jitter_x, y + jitter_y)));
        }
    }

    points
}
