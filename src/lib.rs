// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Anchor Planner core library.
//!
//! Everything that does not need a window lives here: the zone and anchor
//! data model, the anchor distribution algorithm, the zone/anchor editing
//! rules, the planning session state machine, and file I/O helpers.
//!
//! All coordinates are percentages (0 to 100) of the displayed blueprint.

pub mod config;
pub mod editing;
pub mod error;
pub mod io;
pub mod layout;
pub mod models;
pub mod session;
pub mod util;

pub use config::PlannerConfig;
pub use error::{NotReadyReason, PlanError};
pub use layout::{
    allocation::allocate,
    engine::{distribute, Distribution, DistributionRequest},
    grid::generate_candidates,
    scale::compute_scale,
    spacing::accept,
};
pub use models::{anchor::Anchor, point::Point, project::ProjectContext, zone::Zone};
pub use session::PlannerSession;
