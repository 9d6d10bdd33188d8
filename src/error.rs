// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Planning errors.
//!
//! Every variant is recoverable: a failed distribution attempt leaves the
//! zones and anchors of the session exactly as they were.

use std::fmt;

/// Why a distribution pass cannot run yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotReadyReason {
    NoImage,
    NoProjectArea,
    NoZones,
}

impl fmt::Display for NotReadyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            NotReadyReason::NoImage => "no blueprint image loaded",
            NotReadyReason::NoProjectArea => "project area must be positive",
            NotReadyReason::NoZones => "draw at least one distribution zone",
        };
        f.write_str(text)
    }
}

/// Errors returned by the layout algorithm and the planning session.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    #[error(
        "invalid scale input (area={project_area} m², image={image_width_px}x{image_height_px} px)"
    )]
    InvalidScaleInput {
        project_area: f64,
        image_width_px: u32,
        image_height_px: u32,
    },
    #[error("zones have no usable area")]
    EmptyZoneSet,
    #[error("device budget {budget:.0} exceeds the limit of {max_devices} devices")]
    BudgetTooLarge { budget: f64, max_devices: usize },
    #[error("not ready to distribute: {0}")]
    NotReady(NotReadyReason),
}
