// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar and tool selection UI.
//!
//! This module provides the toolbar interface for selecting the editing
//! tool and running distribution actions.

use crate::app::Tool;

/// What the toolbar needs to know to enable its buttons.
pub struct ToolbarState<'a> {
    /// Why distribution is unavailable, if it is.
    pub not_ready: Option<String>,
    pub additional_devices: u32,
    pub device_step: u32,
    pub has_zones: bool,
    pub show_zones: &'a mut bool,
}

/// Result of toolbar interaction.
pub enum ToolbarAction {
    None,
    Distribute,
    AddDevices,
    RemoveDevices,
    Print,
}

/// Display the toolbar with tool selection and action buttons.
pub fn show(ui: &mut egui::Ui, current_tool: &mut Tool, state: ToolbarState<'_>) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.label("Tools:");

        ui.separator();

        for tool in [Tool::Select, Tool::DrawZone, Tool::PlaceAnchor] {
            if ui.selectable_label(*current_tool == tool, tool.label()).clicked() {
                // Clicking the active mode again turns it off
                *current_tool = if *current_tool == tool { Tool::Select } else { tool };
            }
        }

        ui.separator();

        let distribute = ui.add_enabled(
            state.not_ready.is_none(),
            egui::Button::new("Distribute Anchors"),
        );
        let distribute = match &state.not_ready {
            Some(reason) => distribute.on_disabled_hover_text(reason),
            None => distribute,
        };
        if distribute.clicked() {
            action = ToolbarAction::Distribute;
        }

        if ui.button(format!("+{}", state.device_step)).on_hover_text("Add devices").clicked() {
            action = ToolbarAction::AddDevices;
        }
        if ui
            .add_enabled(
                state.additional_devices > 0,
                egui::Button::new(format!("-{}", state.device_step)),
            )
            .on_hover_text("Remove devices")
            .clicked()
        {
            action = ToolbarAction::RemoveDevices;
        }
        ui.label(format!("Extra: {}", state.additional_devices));

        ui.separator();

        ui.add_enabled(state.has_zones, egui::Checkbox::new(state.show_zones, "Show zones"));

        if ui.button("🖨 Print...").clicked() {
            action = ToolbarAction::Print;
        }

        ui.separator();

        let tool_text = match current_tool {
            Tool::Select => "Drag zones to move them, corners to resize, anchors to reposition",
            Tool::DrawZone => "Drag on the blueprint to draw a distribution zone",
            Tool::PlaceAnchor => "Click inside a zone to place an anchor, double-click to delete",
        };

        ui.label(egui::RichText::new(tool_text).italics().weak());
    });

    action
}
