// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Distribution pass orchestration.
//!
//! One pass computes the scale, splits the device budget over the zones,
//! generates and spacing-filters candidates zone by zone (in input order,
//! against one global accepted set), and finally puts the untouched manual
//! anchors in front of the generated ones.
//!
//! The pass is not incremental: every call rebuilds all generated anchors
//! from scratch. The final count can land above or below the nominal
//! budget, since allocation rounds up and spacing rejects candidates.

use super::{
    allocation::allocate, grid::generate_candidates, scale::Scale, spacing::SpacingFilter,
};
use crate::config::PlannerConfig;
use crate::error::{NotReadyReason, PlanError};
use crate::models::{anchor::Anchor, project::ProjectContext, zone::Zone};
use rand::Rng;

/// Inputs of one distribution pass.
#[derive(Debug, Clone, Copy)]
pub struct DistributionRequest<'a> {
    pub context: ProjectContext,
    pub zones: &'a [Zone],
    /// Devices added on top of the area-derived budget.
    pub additional_devices: u32,
    pub config: &'a PlannerConfig,
}

/// Per-zone statistics of a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneOutcome {
    pub zone_id: String,
    pub allocated: usize,
    pub candidates: usize,
    pub accepted: usize,
}

/// Result of a distribution pass.
#[derive(Debug, Clone)]
pub struct Distribution {
    /// Manual anchors first, then the generated ones.
    pub anchors: Vec<Anchor>,
    pub scale: Scale,
    pub budget: f64,
    pub zones: Vec<ZoneOutcome>,
}

impl Distribution {
    pub fn generated_count(&self) -> usize {
        self.anchors.iter().filter(|a| !a.is_manual).count()
    }

    pub fn manual_count(&self) -> usize {
        self.anchors.iter().filter(|a| a.is_manual).count()
    }
}

/// Total devices for a project: one per `area_per_device` plus the extra ones.
pub fn device_budget(project_area: f64, area_per_device: f64, additional_devices: u32) -> f64 {
    project_area / area_per_device + additional_devices as f64
}

/// Check that a pass has everything it needs.
pub fn check_ready(context: &ProjectContext, zones: &[Zone]) -> Result<(), PlanError> {
    if context.image_width_px == 0
        || context.image_height_px == 0
        || context.display_width_px <= 0.0
        || context.display_height_px <= 0.0
    {
        return Err(PlanError::NotReady(NotReadyReason::NoImage));
    }
    if context.project_area <= 0.0 {
        return Err(PlanError::NotReady(NotReadyReason::NoProjectArea));
    }
    if zones.is_empty() {
        return Err(PlanError::NotReady(NotReadyReason::NoZones));
    }
    Ok(())
}

/// Run one distribution pass.
///
/// `existing` is the current anchor set; only its manual anchors survive.
/// Neither the zones nor `existing` are modified.
pub fn distribute<R: Rng + ?Sized>(
    request: &DistributionRequest<'_>,
    existing: &[Anchor],
    rng: &mut R,
) -> Result<Distribution, PlanError> {
    let context = &request.context;
    let config = request.config;
    check_ready(context, request.zones)?;

    let scale = Scale::new(
        context.project_area,
        context.image_width_px,
        context.image_height_px,
        config.anchor_diameter_m,
    )?;
    let budget = device_budget(
        context.project_area,
        config.area_per_device_m2,
        request.additional_devices,
    );
    if !budget.is_finite() || budget > config.max_devices as f64 {
        return Err(PlanError::BudgetTooLarge {
            budget,
            max_devices: config.max_devices,
        });
    }
    let allocation = allocate(request.zones, budget)?;

    let mut filter = SpacingFilter::new(
        scale.min_distance_px,
        context.display_width_px,
        context.display_height_px,
    );
    let mut outcomes = Vec::with_capacity(request.zones.len());

    for (zone, share) in request.zones.iter().zip(allocation.iter()) {
        let candidates = generate_candidates(
            zone,
            share.devices,
            context.display_width_px,
            context.display_height_px,
            config.jitter_fraction,
            rng,
        );
        let before = filter.len();
        for candidate in &candidates {
            filter.offer(*candidate);
        }
        if share.devices > 0 && filter.len() == before {
            log::warn!("Zone {}: no candidate passed the spacing check", zone.id);
        }
        outcomes.push(ZoneOutcome {
            zone_id: zone.id.clone(),
            allocated: share.devices,
            candidates: candidates.len(),
            accepted: filter.len() - before,
        });
    }

    if filter.is_empty() {
        log::warn!("Distribution pass generated no anchors");
    }

    let mut anchors: Vec<Anchor> = existing.iter().filter(|a| a.is_manual).cloned().collect();
    anchors.extend(
        filter
            .into_points()
            .into_iter()
            .enumerate()
            .map(|(i, p)| {
                Anchor::generated(format!("anchor-{}", i), p, config.anchor_diameter_m)
            }),
    );

    Ok(Distribution {
        anchors,
        scale,
        budget,
        zones: outcomes,
    })
}
