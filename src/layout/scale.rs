// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Physical scale of the blueprint.
//!
//! The image is assumed to show a rectangle of exactly `project_area`
//! square meters with square pixels. This is a modeling simplification,
//! not a measured scale.

use crate::error::PlanError;

/// Meters per image pixel: `sqrt(area / (width * height))`.
pub fn compute_scale(
    project_area: f64,
    image_width_px: u32,
    image_height_px: u32,
) -> Result<f64, PlanError> {
    if image_width_px == 0
        || image_height_px == 0
        || !project_area.is_finite()
        || project_area <= 0.0
    {
        return Err(PlanError::InvalidScaleInput {
            project_area,
            image_width_px,
            image_height_px,
        });
    }

    let pixels = image_width_px as f64 * image_height_px as f64;
    Ok((project_area / pixels).sqrt())
}

/// Minimum pixel distance two anchors of the given diameter must keep.
pub fn min_distance_pixels(anchor_diameter_m: f64, meters_per_pixel: f64) -> f64 {
    anchor_diameter_m / meters_per_pixel
}

/// Scale of one distribution pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub meters_per_pixel: f64,
    /// Acceptance threshold for the spacing filter.
    pub min_distance_px: f64,
}

impl Scale {
    pub fn new(
        project_area: f64,
        image_width_px: u32,
        image_height_px: u32,
        anchor_diameter_m: f64,
    ) -> Result<Self, PlanError> {
        let meters_per_pixel = compute_scale(project_area, image_width_px, image_height_px)?;
        Ok(Self {
            meters_per_pixel,
            min_distance_px: min_distance_pixels(anchor_diameter_m, meters_per_pixel),
        })
    }
}
