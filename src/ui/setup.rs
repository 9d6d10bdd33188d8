// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project setup form.
//!
//! Collects the project name, the real-world area and the blueprint image
//! before planning starts.

/// Largest project area the form accepts, in square meters.
pub const MAX_PROJECT_AREA_M2: f64 = 1.0e7;

/// Values typed into the setup form.
#[derive(Default)]
pub struct SetupForm {
    pub name: String,
    /// Square meters.
    pub area: f64,
}

impl SetupForm {
    pub fn is_complete(&self, has_image: bool) -> bool {
        !self.name.trim().is_empty()
            && self.area > 0.0
            && self.area <= MAX_PROJECT_AREA_M2
            && has_image
    }
}

/// Result of setup form interaction.
pub enum SetupAction {
    None,
    ChooseImage,
    Continue,
}

/// Display the setup form.
pub fn show(ui: &mut egui::Ui, form: &mut SetupForm, image_name: Option<&str>) -> SetupAction {
    let mut action = SetupAction::None;

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.heading(egui::RichText::new("Project Setup").size(24.0));
        ui.add_space(20.0);
    });

    egui::Grid::new("project_setup").num_columns(2).spacing([12.0, 10.0]).show(ui, |ui| {
        ui.label("Project Name");
        ui.text_edit_singleline(&mut form.name);
        ui.end_row();

        ui.label("Project Area (m²)");
        ui.add(egui::DragValue::new(&mut form.area).range(0.0..=MAX_PROJECT_AREA_M2).speed(10.0));
        ui.end_row();

        ui.label("Blueprint");
        ui.horizontal(|ui| {
            if ui.button("Choose Image...").clicked() {
                action = SetupAction::ChooseImage;
            }
            ui.label(image_name.unwrap_or("No file selected"));
        });
        ui.end_row();
    });

    ui.add_space(20.0);
    if ui
        .add_enabled(form.is_complete(image_name.is_some()), egui::Button::new("Continue"))
        .clicked()
    {
        action = SetupAction::Continue;
    }

    action
}
