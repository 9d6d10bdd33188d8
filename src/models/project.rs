// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project setup values and the display context used for scaling.

use serde::{Deserialize, Serialize};

/// Name and real-world size of the planned facility, from the setup form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub name: String,
    /// Project area in square meters.
    pub area: f64,
}

impl ProjectInfo {
    pub fn new(name: impl Into<String>, area: f64) -> Self {
        Self {
            name: name.into(),
            area,
        }
    }
}

/// Everything needed to turn percentage distances into physical ones.
///
/// `image_*` is the native pixel size of the blueprint, `display_*` the
/// size it is drawn at after aspect-fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectContext {
    /// Square meters.
    pub project_area: f64,
    pub image_width_px: u32,
    pub image_height_px: u32,
    pub display_width_px: f64,
    pub display_height_px: f64,
}

impl ProjectContext {
    pub fn new(
        project_area: f64,
        (image_width_px, image_height_px): (u32, u32),
        (display_width_px, display_height_px): (f64, f64),
    ) -> Self {
        Self {
            project_area,
            image_width_px,
            image_height_px,
            display_width_px,
            display_height_px,
        }
    }
}
