// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Planning session state.
//!
//! The session owns everything the user builds up while planning one
//! blueprint: project info, zones, anchors and the extra device count. It
//! moves through `Idle → ZonesDefined → Distributed`, and every user action
//! the UI offers is a method here.
//!
//! A failed action never changes zones or anchors.

use crate::config::PlannerConfig;
use crate::editing::{
    anchor_editor,
    gesture::{Gesture, GestureEnd, GestureKind, GestureTracker},
    zone_editor,
};
use crate::error::PlanError;
use crate::layout::{
    engine::{self, Distribution, DistributionRequest},
    scale::Scale,
};
use crate::models::{
    anchor::Anchor,
    point::Point,
    project::{ProjectContext, ProjectInfo},
    zone::Zone,
};
use rand::Rng;

/// Where the session is in the planning workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    ZonesDefined,
    Distributed,
}

/// A drawn rectangle waiting for a name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingZone {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Numbers from the latest distribution pass, for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionSummary {
    pub scale: Scale,
    pub budget: f64,
    pub allocated: usize,
    pub generated: usize,
}

/// One blueprint planning session.
pub struct PlannerSession {
    config: PlannerConfig,
    project: ProjectInfo,
    image_size: Option<(u32, u32)>,
    display_size: Option<(f64, f64)>,
    zones: Vec<Zone>,
    anchors: Vec<Anchor>,
    /// Signed accumulator of "+"/"-" actions, floored at zero.
    additional_devices: u32,
    distributed: bool,
    summary: Option<DistributionSummary>,
    pending_zone: Option<PendingZone>,
    next_zone_id: usize,
    next_manual_id: usize,
    gestures: GestureTracker,
}

impl Default for PlannerSession {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

impl PlannerSession {
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            config,
            project: ProjectInfo::default(),
            image_size: None,
            display_size: None,
            zones: Vec::new(),
            anchors: Vec::new(),
            additional_devices: 0,
            distributed: false,
            summary: None,
            pending_zone: None,
            next_zone_id: 0,
            next_manual_id: 0,
            gestures: GestureTracker::new(),
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn project(&self) -> &ProjectInfo {
        &self.project
    }

    pub fn set_project(&mut self, project: ProjectInfo) {
        log::info!("Project '{}' ({} m²)", project.name, project.area);
        self.project = project;
    }

    pub fn image_size(&self) -> Option<(u32, u32)> {
        self.image_size
    }

    /// Use a newly loaded blueprint. Zones and anchors of the previous
    /// blueprint no longer make sense and are dropped.
    pub fn set_image(&mut self, width: u32, height: u32) {
        self.image_size = Some((width, height));
        self.zones.clear();
        self.anchors.clear();
        self.pending_zone = None;
        self.distributed = false;
        self.summary = None;
        self.gestures.finish(GestureEnd::Released);
    }

    /// Size the blueprint is currently drawn at, in screen pixels.
    pub fn set_display_size(&mut self, width: f64, height: f64) {
        self.display_size = Some((width, height));
    }

    /// Scaling inputs, once both an image and a display size are known.
    pub fn context(&self) -> Option<ProjectContext> {
        Some(ProjectContext::new(self.project.area, self.image_size?, self.display_size?))
    }

    pub fn phase(&self) -> Phase {
        if self.zones.is_empty() {
            Phase::Idle
        } else if self.distributed {
            Phase::Distributed
        } else {
            Phase::ZonesDefined
        }
    }

    /// `Ok` if [`Self::distribute`] can run now.
    pub fn readiness(&self) -> Result<(), PlanError> {
        let context = self.context_or_empty();
        engine::check_ready(&context, &self.zones)
    }

    fn context_or_empty(&self) -> ProjectContext {
        self.context()
            .unwrap_or_else(|| ProjectContext::new(self.project.area, (0, 0), (0.0, 0.0)))
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    pub fn additional_devices(&self) -> u32 {
        self.additional_devices
    }

    pub fn summary(&self) -> Option<&DistributionSummary> {
        self.summary.as_ref()
    }

    /// Each zone with the number of anchors currently inside it.
    pub fn zone_anchor_counts(&self) -> Vec<(&Zone, usize)> {
        self.zones
            .iter()
            .map(|zone| (zone, zone.anchor_count(&self.anchors)))
            .collect()
    }

    /// Replace all generated anchors with a fresh distribution pass.
    pub fn distribute<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<&DistributionSummary, PlanError> {
        let result = self.run_pass(&self.zones, self.additional_devices, rng)?;
        Ok(self.apply_pass(result))
    }

    /// Run a pass over `zones` without touching the session.
    fn run_pass<R: Rng + ?Sized>(
        &self,
        zones: &[Zone],
        additional_devices: u32,
        rng: &mut R,
    ) -> Result<Distribution, PlanError> {
        let request = DistributionRequest {
            context: self.context_or_empty(),
            zones,
            additional_devices,
            config: &self.config,
        };
        engine::distribute(&request, &self.anchors, rng)
    }

    fn apply_pass(&mut self, result: Distribution) -> &DistributionSummary {
        let summary = DistributionSummary {
            scale: result.scale,
            budget: result.budget,
            allocated: result.zones.iter().map(|z| z.allocated).sum(),
            generated: result.generated_count(),
        };
        log::info!(
            "Distributed {} anchors over {} zones \
             (budget {:.1}, allocated {}, {} manual, min distance {:.1} px)",
            summary.generated,
            result.zones.len(),
            summary.budget,
            summary.allocated,
            result.manual_count(),
            summary.scale.min_distance_px
        );

        self.anchors = result.anchors;
        self.distributed = true;
        self.summary.insert(summary)
    }

    /// Add one step of extra devices and redistribute if a layout exists.
    pub fn add_devices<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), PlanError> {
        let additional = self.additional_devices.saturating_add(self.config.device_step);
        self.set_additional_devices(additional, rng)
    }

    /// Remove one step of extra devices (never below zero) and redistribute.
    pub fn remove_devices<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), PlanError> {
        let additional = self.additional_devices.saturating_sub(self.config.device_step);
        self.set_additional_devices(additional, rng)
    }

    /// The new count is kept only if the layout could be rebuilt with it.
    fn set_additional_devices<R: Rng + ?Sized>(
        &mut self,
        additional: u32,
        rng: &mut R,
    ) -> Result<(), PlanError> {
        if self.phase() == Phase::Distributed {
            let result = self.run_pass(&self.zones, additional, rng)?;
            self.apply_pass(result);
        }
        self.additional_devices = additional;
        log::info!("Additional devices: {}", self.additional_devices);
        Ok(())
    }

    /// Default name offered for the next zone.
    pub fn default_zone_name(&self) -> String {
        format!("Zone {}", self.zones.len() + 1)
    }

    /// Add a zone directly. The rectangle is clamped to the surface and
    /// grown to the minimum size if needed.
    pub fn add_zone(
        &mut self,
        name: impl Into<String>,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> &Zone {
        let min = self.config.min_zone_size_pct;
        let width = width.clamp(min, 100.0);
        let height = height.clamp(min, 100.0);
        let zone = Zone::new(
            format!("zone-{}", self.next_zone_id),
            name,
            x.clamp(0.0, 100.0 - width),
            y.clamp(0.0, 100.0 - height),
            width,
            height,
        );
        self.next_zone_id += 1;
        log::info!(
            "Added zone {} '{}', total: {}",
            zone.id,
            zone.name,
            self.zones.len() + 1
        );
        let index = self.zones.len();
        self.zones.push(zone);
        &self.zones[index]
    }

    pub fn pending_zone(&self) -> Option<&PendingZone> {
        self.pending_zone.as_ref()
    }

    /// Name the pending drawn rectangle and turn it into a zone.
    pub fn confirm_pending_zone(&mut self, name: &str) -> Option<&Zone> {
        let pending = self.pending_zone.take()?;
        let name = match name.trim() {
            "" => self.default_zone_name(),
            trimmed => trimmed.to_string(),
        };
        Some(self.add_zone(name, pending.x, pending.y, pending.width, pending.height))
    }

    pub fn cancel_pending_zone(&mut self) {
        if self.pending_zone.take().is_some() {
            log::info!("Discarded drawn zone");
        }
    }

    pub fn rename_zone(&mut self, zone_id: &str, name: &str) -> bool {
        match self.zones.iter_mut().find(|z| z.id == zone_id) {
            Some(zone) => {
                zone.name = name.to_string();
                true
            }
            None => false,
        }
    }

    /// Delete a zone and rebuild the layout over the remaining ones.
    ///
    /// Removing the last zone leaves nothing to distribute over: generated
    /// anchors are dropped and manual ones kept. If the rebuild fails the
    /// zone stays.
    pub fn delete_zone<R: Rng + ?Sized>(
        &mut self,
        zone_id: &str,
        rng: &mut R,
    ) -> Result<bool, PlanError> {
        let Some(index) = self.zones.iter().position(|z| z.id == zone_id) else {
            return Ok(false);
        };
        let mut remaining = self.zones.clone();
        let zone = remaining.remove(index);

        if remaining.is_empty() {
            self.anchors.retain(|a| a.is_manual);
            self.distributed = false;
            self.summary = None;
        } else if self.phase() == Phase::Distributed {
            let result = self.run_pass(&remaining, self.additional_devices, rng)?;
            self.apply_pass(result);
        }
        self.zones = remaining;
        log::info!("Deleted zone {} '{}', total: {}", zone.id, zone.name, self.zones.len());
        Ok(true)
    }

    /// Place a manual anchor. Clicks outside every zone are ignored.
    pub fn place_manual_anchor(&mut self, point: Point) -> Option<&Anchor> {
        let id = format!("manual-anchor-{}", self.next_manual_id);
        let diameter = self.config.anchor_diameter_m;
        let Some(anchor) = anchor_editor::place_manual_anchor(point, &self.zones, id, diameter)
        else {
            log::warn!(
                "Ignored manual anchor at ({:.1}, {:.1}): outside every zone",
                point.x,
                point.y
            );
            return None;
        };
        self.next_manual_id += 1;
        log::info!("Placed {}, total anchors: {}", anchor.id, self.anchors.len() + 1);
        self.anchors.push(anchor);
        self.anchors.last()
    }

    pub fn delete_anchor(&mut self, anchor_id: &str) -> bool {
        let before = self.anchors.len();
        self.anchors.retain(|a| a.id != anchor_id);
        let removed = self.anchors.len() != before;
        if removed {
            log::info!("Deleted {}, total anchors: {}", anchor_id, self.anchors.len());
        }
        removed
    }

    /// The anchor under `point`, if any.
    pub fn anchor_at(&self, point: Point, radius_pct: f64) -> Option<&Anchor> {
        anchor_editor::hit_test(&self.anchors, point, radius_pct).map(|i| &self.anchors[i])
    }

    pub fn active_gesture(&self) -> Option<&Gesture> {
        self.gestures.active()
    }

    pub fn begin_gesture(&mut self, kind: GestureKind, at: Point) {
        self.gestures.begin(kind, at);
    }

    /// Apply a pointer move to the active gesture.
    pub fn pointer_moved(&mut self, at: Point) {
        let Some(gesture) = self.gestures.update(at) else {
            return;
        };
        let (dx, dy) = gesture.delta();
        let min = self.config.min_zone_size_pct;

        match &gesture.kind {
            GestureKind::DrawZone => {}
            GestureKind::MoveZone { origin } => {
                let moved = zone_editor::move_zone(origin, dx, dy);
                replace_zone(&mut self.zones, moved);
            }
            GestureKind::ResizeZone { origin, handle } => {
                let resized = zone_editor::resize_zone(origin, *handle, dx, dy, min);
                replace_zone(&mut self.zones, resized);
            }
            GestureKind::MoveAnchor { anchor_id } => {
                if let Some(anchor) = self.anchors.iter_mut().find(|a| &a.id == anchor_id) {
                    anchor_editor::drag_anchor(anchor, at, &self.zones);
                }
            }
        }
    }

    /// Release the active gesture. A finished zone edit rebuilds an existing
    /// layout, and is undone if that fails; a finished drawing becomes the
    /// pending zone.
    pub fn end_gesture<R: Rng + ?Sized>(
        &mut self,
        end: GestureEnd,
        rng: &mut R,
    ) -> Result<(), PlanError> {
        let Some(gesture) = self.gestures.finish(end) else {
            return Ok(());
        };

        match gesture.kind {
            GestureKind::DrawZone => {
                let min = self.config.min_zone_size_pct;
                match zone_editor::normalize_drawn_zone(gesture.start, gesture.current, min) {
                    Some((x, y, width, height)) => {
                        self.pending_zone = Some(PendingZone { x, y, width, height });
                    }
                    None => log::warn!("Drawn zone is smaller than the minimum size, ignored"),
                }
                Ok(())
            }
            GestureKind::MoveZone { origin } | GestureKind::ResizeZone { origin, .. } => {
                if self.phase() != Phase::Distributed {
                    return Ok(());
                }
                match self.run_pass(&self.zones, self.additional_devices, rng) {
                    Ok(result) => {
                        self.apply_pass(result);
                        Ok(())
                    }
                    Err(e) => {
                        log::warn!("Reverting zone {}: {}", origin.id, e);
                        replace_zone(&mut self.zones, origin);
                        Err(e)
                    }
                }
            }
            GestureKind::MoveAnchor { .. } => Ok(()),
        }
    }
}

fn replace_zone(zones: &mut [Zone], updated: Zone) {
    if let Some(zone) = zones.iter_mut().find(|z| z.id == updated.id) {
        *zone = updated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotReadyReason;
    use crate::editing::zone_editor::ResizeHandle;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(11)
    }

    fn ready_session() -> PlannerSession {
        let mut session = PlannerSession::default();
        session.set_project(ProjectInfo::new("Warehouse", 1500.0));
        session.set_image(1200, 900);
        session.set_display_size(800.0, 600.0);
        session
    }

    fn draw(session: &mut PlannerSession, from: Point, to: Point) {
        session.begin_gesture(GestureKind::DrawZone, from);
        session.pointer_moved(to);
        session.end_gesture(GestureEnd::Released, &mut rng()).unwrap();
    }

    #[test]
    fn test_phase_transitions() {
        let mut session = ready_session();
        assert_eq!(session.phase(), Phase::Idle);

        session.add_zone("Hall", 10.0, 10.0, 50.0, 50.0);
        assert_eq!(session.phase(), Phase::ZonesDefined);

        session.distribute(&mut rng()).unwrap();
        assert_eq!(session.phase(), Phase::Distributed);

        session.distribute(&mut rng()).unwrap();
        assert_eq!(session.phase(), Phase::Distributed);
    }

    #[test]
    fn test_not_ready_leaves_state_untouched() {
        let mut session = PlannerSession::default();
        session.set_project(ProjectInfo::new("Warehouse", 1500.0));
        assert_eq!(
            session.distribute(&mut rng()).unwrap_err(),
            PlanError::NotReady(NotReadyReason::NoImage)
        );

        session.set_image(1200, 900);
        session.set_display_size(800.0, 600.0);
        assert_eq!(session.readiness(), Err(PlanError::NotReady(NotReadyReason::NoZones)));

        session.add_zone("Hall", 10.0, 10.0, 50.0, 50.0);
        session.distribute(&mut rng()).unwrap();
        let anchors = session.anchors().to_vec();

        session.set_project(ProjectInfo::new("Warehouse", 0.0));
        assert_eq!(
            session.distribute(&mut rng()).unwrap_err(),
            PlanError::NotReady(NotReadyReason::NoProjectArea)
        );
        assert_eq!(session.anchors(), anchors.as_slice());
        assert_eq!(session.zones().len(), 1);
    }

    /// A distributed two-zone session whose next pass fails.
    fn session_that_cannot_redistribute() -> PlannerSession {
        let mut session = ready_session();
        session.add_zone("West", 0.0, 0.0, 40.0, 100.0);
        session.add_zone("East", 60.0, 0.0, 40.0, 100.0);
        session.distribute(&mut rng()).unwrap();
        session.set_project(ProjectInfo::new("Warehouse", 0.0));
        session
    }

    #[test]
    fn test_failed_zone_delete_keeps_zone() {
        let mut session = session_that_cannot_redistribute();
        let zones = session.zones().to_vec();
        let anchors = session.anchors().to_vec();

        assert_eq!(
            session.delete_zone("zone-0", &mut rng()).unwrap_err(),
            PlanError::NotReady(NotReadyReason::NoProjectArea)
        );
        assert_eq!(session.zones(), zones.as_slice());
        assert_eq!(session.anchors(), anchors.as_slice());
        assert_eq!(session.phase(), Phase::Distributed);
    }

    #[test]
    fn test_failed_device_step_keeps_delta() {
        let mut session = session_that_cannot_redistribute();
        let anchors = session.anchors().to_vec();
        let summary = *session.summary().unwrap();

        assert!(session.add_devices(&mut rng()).is_err());
        assert_eq!(session.additional_devices(), 0);
        assert_eq!(session.anchors(), anchors.as_slice());
        assert_eq!(session.summary(), Some(&summary));

        session.set_project(ProjectInfo::new("Warehouse", 1500.0));
        session.add_devices(&mut rng()).unwrap();
        session.set_project(ProjectInfo::new("Warehouse", 0.0));
        assert!(session.remove_devices(&mut rng()).is_err());
        assert_eq!(session.additional_devices(), 5);
    }

    #[test]
    fn test_failed_zone_edit_is_reverted() {
        let mut session = session_that_cannot_redistribute();
        let zones = session.zones().to_vec();
        let anchors = session.anchors().to_vec();

        let origin = zones[0].clone();
        session.begin_gesture(GestureKind::MoveZone { origin }, Point::new(10.0, 50.0));
        session.pointer_moved(Point::new(20.0, 40.0));
        assert_ne!(session.zones()[0], zones[0]);
        assert!(session.end_gesture(GestureEnd::Released, &mut rng()).is_err());
        assert_eq!(session.zones(), zones.as_slice());
        assert_eq!(session.anchors(), anchors.as_slice());

        let origin = zones[1].clone();
        let handle = ResizeHandle::NorthWest;
        session.begin_gesture(GestureKind::ResizeZone { origin, handle }, Point::new(60.0, 0.0));
        session.pointer_moved(Point::new(70.0, 10.0));
        assert!(session.end_gesture(GestureEnd::LeftSurface, &mut rng()).is_err());
        assert_eq!(session.zones(), zones.as_slice());
        assert!(session.active_gesture().is_none());
    }

    #[test]
    fn test_oversized_project_is_rejected() {
        let mut session = ready_session();
        session.add_zone("Hall", 0.0, 0.0, 100.0, 100.0);
        session.set_project(ProjectInfo::new("Campus", f64::MAX));

        assert!(matches!(
            session.distribute(&mut rng()),
            Err(PlanError::BudgetTooLarge { .. })
        ));
        assert!(session.anchors().is_empty());
        assert_eq!(session.phase(), Phase::ZonesDefined);
    }

    #[test]
    fn test_manual_anchors_survive_redistribution() {
        let mut session = ready_session();
        session.add_zone("Hall", 10.0, 10.0, 50.0, 50.0);
        session.distribute(&mut rng()).unwrap();
        session.place_manual_anchor(Point::new(20.0, 20.0)).unwrap();
        session.place_manual_anchor(Point::new(40.0, 30.0)).unwrap();
        let manual = |session: &PlannerSession| -> Vec<Anchor> {
            session.anchors().iter().filter(|a| a.is_manual).cloned().collect()
        };
        let manual_before = manual(&session);

        session.add_devices(&mut rng()).unwrap();
        session.distribute(&mut ChaCha8Rng::seed_from_u64(99)).unwrap();

        assert_eq!(manual_before, manual(&session));
    }

    #[test]
    fn test_manual_click_outside_zones_ignored() {
        let mut session = ready_session();
        session.add_zone("Hall", 10.0, 10.0, 20.0, 20.0);
        session.distribute(&mut rng()).unwrap();
        let count = session.anchors().len();

        assert!(session.place_manual_anchor(Point::new(80.0, 80.0)).is_none());
        assert_eq!(session.anchors().len(), count);

        let placed = session.place_manual_anchor(Point::new(15.0, 15.0)).unwrap();
        assert_eq!(placed.id, "manual-anchor-0");
        assert_eq!(session.anchors().len(), count + 1);
    }

    #[test]
    fn test_device_delta_floored_at_zero() {
        let mut session = ready_session();
        session.remove_devices(&mut rng()).unwrap();
        assert_eq!(session.additional_devices(), 0);

        session.add_devices(&mut rng()).unwrap();
        session.add_devices(&mut rng()).unwrap();
        assert_eq!(session.additional_devices(), 10);
        session.remove_devices(&mut rng()).unwrap();
        assert_eq!(session.additional_devices(), 5);
    }

    #[test]
    fn test_add_devices_raises_budget() {
        let mut session = ready_session();
        session.add_zone("Hall", 0.0, 0.0, 100.0, 100.0);
        let base = session.distribute(&mut rng()).unwrap().budget;

        session.add_devices(&mut rng()).unwrap();
        let raised = session.summary().unwrap().budget;
        assert!((raised - base - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_draw_name_and_delete_zones() {
        let mut session = ready_session();
        draw(&mut session, Point::new(50.0, 50.0), Point::new(10.0, 20.0));
        let pending = *session.pending_zone().unwrap();
        assert_eq!((pending.x, pending.y, pending.width, pending.height), (10.0, 20.0, 40.0, 30.0));

        let zone = session.confirm_pending_zone("  Loading dock ").unwrap().clone();
        assert_eq!(zone.name, "Loading dock");
        assert_eq!(zone.id, "zone-0");
        assert!(session.pending_zone().is_none());

        draw(&mut session, Point::new(60.0, 60.0), Point::new(90.0, 90.0));
        let second = session.confirm_pending_zone("").unwrap().clone();
        assert_eq!(second.name, "Zone 2");

        session.distribute(&mut rng()).unwrap();
        session.place_manual_anchor(Point::new(70.0, 70.0)).unwrap();

        assert!(session.delete_zone("zone-0", &mut rng()).unwrap());
        assert_eq!(session.phase(), Phase::Distributed);
        assert!(session
            .anchors()
            .iter()
            .filter(|a| !a.is_manual)
            .all(|a| second.contains(a.position())));

        // Ids are never reused
        draw(&mut session, Point::new(5.0, 5.0), Point::new(30.0, 30.0));
        assert_eq!(session.confirm_pending_zone("Yard").unwrap().id, "zone-2");

        assert!(session.delete_zone("zone-1", &mut rng()).unwrap());
        assert!(session.delete_zone("zone-2", &mut rng()).unwrap());
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.anchors().iter().all(|a| a.is_manual));
        assert!(!session.delete_zone("zone-2", &mut rng()).unwrap());
    }

    #[test]
    fn test_tiny_drawn_zone_rejected() {
        let mut session = ready_session();
        draw(&mut session, Point::new(10.0, 10.0), Point::new(12.0, 40.0));
        assert!(session.pending_zone().is_none());

        draw(&mut session, Point::new(10.0, 10.0), Point::new(30.0, 40.0));
        session.cancel_pending_zone();
        assert!(session.pending_zone().is_none());
        assert!(session.zones().is_empty());
    }

    #[test]
    fn test_zone_gestures_clamp_and_redistribute() {
        let mut session = ready_session();
        let origin = session.add_zone("Hall", 20.0, 20.0, 30.0, 30.0).clone();
        session.distribute(&mut rng()).unwrap();

        let kind = GestureKind::MoveZone {
            origin: origin.clone(),
        };
        session.begin_gesture(kind, Point::new(30.0, 30.0));
        session.pointer_moved(Point::new(130.0, -70.0));
        session.end_gesture(GestureEnd::LeftSurface, &mut rng()).unwrap();

        let moved = session.zones()[0].clone();
        assert_eq!((moved.x, moved.y), (70.0, 0.0));
        assert!(session.active_gesture().is_none());
        assert!(session.anchors().iter().all(|a| moved.contains(a.position())));

        session.begin_gesture(
            GestureKind::ResizeZone { origin: moved.clone(), handle: ResizeHandle::SouthEast },
            Point::new(100.0, 30.0),
        );
        session.pointer_moved(Point::new(73.0, 30.0));
        session.end_gesture(GestureEnd::Released, &mut rng()).unwrap();
        assert!((session.zones()[0].width - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_anchor_drag_stays_in_zones() {
        let mut session = ready_session();
        session.add_zone("Hall", 10.0, 10.0, 20.0, 20.0);
        let id = session.place_manual_anchor(Point::new(15.0, 15.0)).unwrap().id.clone();

        let kind = GestureKind::MoveAnchor {
            anchor_id: id.clone(),
        };
        session.begin_gesture(kind, Point::new(15.0, 15.0));
        session.pointer_moved(Point::new(25.0, 25.0));
        session.pointer_moved(Point::new(80.0, 80.0));
        session.end_gesture(GestureEnd::Released, &mut rng()).unwrap();

        let anchor = session.anchor_at(Point::new(25.0, 25.0), 0.5).unwrap();
        assert_eq!(anchor.id, id);
        assert!(session.delete_anchor(&id));
        assert!(session.anchors().is_empty());
    }

    #[test]
    fn test_zone_counts_are_derived() {
        let mut session = ready_session();
        session.add_zone("A", 0.0, 0.0, 20.0, 20.0);
        session.add_zone("B", 50.0, 50.0, 20.0, 20.0);
        session.place_manual_anchor(Point::new(10.0, 10.0)).unwrap();
        session.place_manual_anchor(Point::new(60.0, 60.0)).unwrap();
        session.place_manual_anchor(Point::new(65.0, 65.0)).unwrap();

        let counts: Vec<(String, usize)> = session
            .zone_anchor_counts()
            .into_iter()
            .map(|(z, n)| (z.name.clone(), n))
            .collect();
        assert_eq!(counts, [("A".to_string(), 1), ("B".to_string(), 2)]);
    }

    #[test]
    fn test_new_image_resets_layout() {
        let mut session = ready_session();
        session.add_zone("Hall", 10.0, 10.0, 50.0, 50.0);
        session.distribute(&mut rng()).unwrap();
        session.set_image(640, 480);
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.anchors().is_empty());
        assert!(session.summary().is_none());
    }
}
