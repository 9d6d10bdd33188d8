// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides utilities for coordinate transformations between
//! display pixel coordinates and percentage coordinates, and for fitting
//! the blueprint into the canvas.

use crate::models::point::Point;

/// Convert display pixel coordinates to percentage coordinates (0.0 to 100.0).
pub fn to_percent(pixel_x: f64, pixel_y: f64, display_width: f64, display_height: f64) -> Point {
    Point {
        x: pixel_x / display_width * 100.0,
        y: pixel_y / display_height * 100.0,
    }
}

/// Convert percentage coordinates to display pixel coordinates.
pub fn to_pixels(point: &Point, display_width: f64, display_height: f64) -> (f64, f64) {
    (
        point.x / 100.0 * display_width,
        point.y / 100.0 * display_height,
    )
}

/// Euclidean distance in display pixels between two percentage points.
pub fn pixel_distance(a: Point, b: Point, display_width: f64, display_height: f64) -> f64 {
    let dx = (a.x - b.x) * display_width / 100.0;
    let dy = (a.y - b.y) * display_height / 100.0;
    (dx * dx + dy * dy).sqrt()
}

/// Largest size with the image's aspect ratio that fits in the container.
pub fn fit_display_size(
    image_width: u32,
    image_height: u32,
    container_width: f64,
    container_height: f64,
) -> (f64, f64) {
    let img_aspect = image_width as f64 / image_height as f64;
    let container_aspect = container_width / container_height;

    if img_aspect > container_aspect {
        // Image is wider - fit to width
        (container_width, container_width / img_aspect)
    } else {
        // Image is taller - fit to height
        (container_height * img_aspect, container_height)
    }
}
