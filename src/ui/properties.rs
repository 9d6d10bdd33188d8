// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project and zone properties panel.
//!
//! This module provides the side panel listing the project figures, the
//! latest distribution results, and the zones with their anchor counts.

use anchor_planner::session::{Phase, PlannerSession};

/// Result of properties panel interaction.
pub enum PropertiesAction {
    None,
    RenameZone(String, String),
    DeleteZone(String),
}

/// Display the properties panel.
pub fn show(ui: &mut egui::Ui, session: &PlannerSession) -> PropertiesAction {
    let mut action = PropertiesAction::None;

    ui.heading("Project");
    let project = session.project();
    ui.label(format!("Name: {}", project.name));
    ui.label(format!("Area: {} m²", project.area));
    if let Some((w, h)) = session.image_size() {
        ui.label(format!("Blueprint: {} x {} px", w, h));
    }
    let phase = match session.phase() {
        Phase::Idle => "No zones",
        Phase::ZonesDefined => "Zones defined",
        Phase::Distributed => "Distributed",
    };
    ui.label(format!("State: {}", phase));

    if let Some(summary) = session.summary() {
        ui.separator();
        ui.heading("Distribution");
        ui.label(format!("Budget: {:.1} devices", summary.budget));
        ui.label(format!("Allocated: {}", summary.allocated));
        ui.label(format!("Generated: {}", summary.generated));
        ui.label(format!(
            "Manual: {}",
            session.anchors().iter().filter(|a| a.is_manual).count()
        ));
        ui.label(format!("Min distance: {:.1} px", summary.scale.min_distance_px));
    }

    ui.separator();
    ui.heading("Zones");

    if session.zones().is_empty() {
        ui.label(egui::RichText::new("Use Draw Zone to add a zone").weak());
        return action;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for (zone, count) in session.zone_anchor_counts() {
            ui.horizontal(|ui| {
                let mut name = zone.name.clone();
                if ui
                    .add(egui::TextEdit::singleline(&mut name).desired_width(120.0))
                    .changed()
                {
                    action = PropertiesAction::RenameZone(zone.id.clone(), name);
                }
                ui.label(format!("{} anchors", count));
                if ui.small_button("🗑").on_hover_text("Delete zone").clicked() {
                    action = PropertiesAction::DeleteZone(zone.id.clone());
                }
            });
        }
    });

    action
}
