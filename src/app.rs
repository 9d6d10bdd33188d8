// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the egui::App trait. It owns the planning session and routes the
//! actions reported by the UI components into it.

use crate::ui::{
    canvas::{self, CanvasAction},
    properties::{self, PropertiesAction},
    setup::{self, SetupAction, SetupForm},
    toolbar::{self, ToolbarAction, ToolbarState},
};
use anchor_planner::io::{media, report};
use anchor_planner::models::project::ProjectInfo;
use anchor_planner::{PlanError, PlannerConfig, PlannerSession};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};

/// Current editing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Select,
    DrawZone,
    PlaceAnchor,
}

impl Tool {
    pub fn label(self) -> &'static str {
        match self {
            Tool::Select => "⬆ Select",
            Tool::DrawZone => "▭ Draw Zone",
            Tool::PlaceAnchor => "⊕ Place Anchor",
        }
    }
}

/// Result of background image loading operation.
struct LoadedImageData {
    path: PathBuf,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

/// Main application state.
pub struct PlannerApp {
    session: PlannerSession,

    /// Currently selected editing tool
    current_tool: Tool,

    /// Project setup form values
    setup_form: SetupForm,

    /// Setup finished, planning view is shown
    setup_done: bool,

    /// Loaded blueprint texture for display
    image_texture: Option<egui::TextureHandle>,

    /// Path of the loaded blueprint
    image_path: Option<PathBuf>,

    /// Name typed into the zone naming dialog
    zone_name_input: String,

    /// Zone outlines visible
    show_zones: bool,

    /// Receiver for background image loading
    image_loader: Option<Receiver<Result<LoadedImageData, String>>>,

    /// Loading state message
    loading_message: Option<String>,

    /// Last error shown in the status bar
    status_error: Option<String>,
}

impl Default for PlannerApp {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

impl PlannerApp {
    /// Create a new application instance.
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            session: PlannerSession::new(config),
            current_tool: Tool::Select,
            setup_form: SetupForm::default(),
            setup_done: false,
            image_texture: None,
            image_path: None,
            zone_name_input: String::new(),
            show_zones: true,
            image_loader: None,
            loading_message: None,
            status_error: None,
        }
    }

    /// Record the outcome of a session action.
    fn report_result(&mut self, result: Result<(), PlanError>) {
        match result {
            Ok(()) => self.status_error = None,
            Err(e) => {
                log::warn!("{}", e);
                self.status_error = Some(e.to_string());
            }
        }
    }

    fn distribute(&mut self) {
        let result = self.session.distribute(&mut rand::thread_rng()).map(|_| ());
        if result.is_ok() {
            self.show_zones = false;
        }
        self.report_result(result);
    }

    /// Load an image file and create a texture for display (asynchronously).
    fn load_image_file(&mut self, path: PathBuf) {
        let (sender, receiver) = channel();
        self.image_loader = Some(receiver);
        self.loading_message = Some("Loading blueprint...".to_string());

        // Spawn background thread for loading
        std::thread::spawn(move || {
            let result = media::load_image(&path)
                .map(|loaded| {
                    log::info!(
                        "Loaded image: {} ({}x{})",
                        path.display(),
                        loaded.width,
                        loaded.height
                    );
                    LoadedImageData {
                        path: path.clone(),
                        width: loaded.width,
                        height: loaded.height,
                        pixels: loaded.pixels,
                    }
                })
                .map_err(|e| format!("Failed to load image: {:#}", e));

            let _ = sender.send(result);
        });
    }

    /// Check for completed image loading.
    fn poll_image_loader(&mut self, ctx: &egui::Context) {
        let Some(ref receiver) = self.image_loader else {
            return;
        };
        let Ok(result) = receiver.try_recv() else {
            return;
        };
        self.image_loader = None;
        self.loading_message = None;

        match result {
            Ok(loaded) => {
                let size = [loaded.width as usize, loaded.height as usize];
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &loaded.pixels);
                let texture =
                    ctx.load_texture("blueprint", color_image, egui::TextureOptions::LINEAR);

                self.image_texture = Some(texture);
                self.image_path = Some(loaded.path);
                self.session.set_image(loaded.width, loaded.height);
                self.show_zones = true;
                log::info!("Image loaded successfully");
            }
            Err(e) => {
                log::error!("{}", e);
                self.status_error = Some(e);
            }
        }
    }

    fn choose_image(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", media::IMAGE_EXTENSIONS)
            .pick_file()
        {
            self.load_image_file(path);
        }
    }

    /// Write the printable report to a file picked by the user.
    fn export_report(&mut self) {
        let Some(ref image_path) = self.image_path else {
            return;
        };
        let Some(path) = rfd::FileDialog::new()
            .add_filter("HTML", &["html"])
            .set_file_name("anchor-layout.html")
            .save_file()
        else {
            return;
        };

        let image_src = std::fs::canonicalize(image_path)
            .map(|p| format!("file://{}", p.display()))
            .unwrap_or_else(|_| image_path.display().to_string());
        let project = self.session.project();
        let layout = report::Report {
            project_name: &project.name,
            project_area: project.area,
            image_src: &image_src,
            zones: self.session.zones(),
            anchors: self.session.anchors(),
        };

        match report::write_report(&layout, &path) {
            Ok(()) => log::info!("Exported report to {}", path.display()),
            Err(e) => {
                log::error!("Failed to export report: {:#}", e);
                self.status_error = Some(format!("Export failed: {}", e));
            }
        }
    }

    fn show_setup(&mut self, ctx: &egui::Context) {
        let image_name = self
            .image_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string());

        let action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                if let Some(ref message) = self.loading_message {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(message);
                    });
                }
                setup::show(ui, &mut self.setup_form, image_name.as_deref())
            })
            .inner;

        match action {
            SetupAction::ChooseImage => self.choose_image(),
            SetupAction::Continue => {
                self.session.set_project(ProjectInfo::new(
                    self.setup_form.name.trim(),
                    self.setup_form.area,
                ));
                self.setup_done = true;
            }
            SetupAction::None => {}
        }
    }

    /// Naming dialog for a freshly drawn zone.
    fn show_zone_name_dialog(&mut self, ctx: &egui::Context) {
        if self.session.pending_zone().is_none() {
            return;
        }

        let mut confirm = false;
        let mut cancel = false;
        egui::Window::new("Enter Zone Name")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                let response = ui.text_edit_singleline(&mut self.zone_name_input);
                response.request_focus();
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    confirm = true;
                }
                ui.horizontal(|ui| {
                    cancel = ui.button("Cancel").clicked();
                    confirm |= ui.button("Confirm").clicked();
                });
            });

        if confirm {
            self.session.confirm_pending_zone(&self.zone_name_input);
        } else if cancel {
            self.session.cancel_pending_zone();
        }
    }

    fn apply_canvas_action(&mut self, action: CanvasAction) {
        match action {
            CanvasAction::BeginGesture(kind, at) => self.session.begin_gesture(kind, at),
            CanvasAction::PointerMoved(at) => self.session.pointer_moved(at),
            CanvasAction::EndGesture(end) => {
                let result = self.session.end_gesture(end, &mut rand::thread_rng());
                self.report_result(result);
                if self.session.pending_zone().is_some() {
                    self.zone_name_input = self.session.default_zone_name();
                    self.current_tool = Tool::Select;
                }
            }
            CanvasAction::PlaceAnchor(at) => {
                if self.session.place_manual_anchor(at).is_none() {
                    self.status_error =
                        Some("Anchors can only be placed inside a zone".to_string());
                }
            }
            CanvasAction::DeleteAnchor(id) => {
                self.session.delete_anchor(&id);
            }
        }
    }
}

impl eframe::App for PlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_image_loader(ctx);

        // Request repaint if still loading (to update spinner)
        if self.loading_message.is_some() {
            ctx.request_repaint();
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Blueprint...").clicked() {
                        self.choose_image();
                        ui.close_menu();
                    }
                    if ui
                        .add_enabled(self.setup_done, egui::Button::new("Print Report..."))
                        .clicked()
                    {
                        self.export_report();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        if !self.setup_done || self.image_texture.is_none() {
            self.setup_done = false;
            self.show_setup(ctx);
            return;
        }

        // Toolbar
        let not_ready = self.session.readiness().err().map(|e| e.to_string());
        let toolbar_action = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| {
                toolbar::show(
                    ui,
                    &mut self.current_tool,
                    ToolbarState {
                        not_ready,
                        additional_devices: self.session.additional_devices(),
                        device_step: self.session.config().device_step,
                        has_zones: !self.session.zones().is_empty(),
                        show_zones: &mut self.show_zones,
                    },
                )
            })
            .inner;

        match toolbar_action {
            ToolbarAction::Distribute => self.distribute(),
            ToolbarAction::AddDevices => {
                let result = self.session.add_devices(&mut rand::thread_rng());
                self.report_result(result);
            }
            ToolbarAction::RemoveDevices => {
                let result = self.session.remove_devices(&mut rand::thread_rng());
                self.report_result(result);
            }
            ToolbarAction::Print => self.export_report(),
            ToolbarAction::None => {}
        }

        // Drawing or placing needs the zones on screen
        if self.current_tool != Tool::Select {
            self.show_zones = true;
        }

        // Properties panel (right side)
        let properties_action = egui::SidePanel::right("properties")
            .default_width(250.0)
            .show(ctx, |ui| properties::show(ui, &self.session))
            .inner;

        match properties_action {
            PropertiesAction::RenameZone(id, name) => {
                self.session.rename_zone(&id, &name);
            }
            PropertiesAction::DeleteZone(id) => {
                let result = self.session.delete_zone(&id, &mut rand::thread_rng()).map(|_| ());
                self.report_result(result);
            }
            PropertiesAction::None => {}
        }

        // Status bar
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            match self.status_error {
                Some(ref message) => {
                    ui.colored_label(egui::Color32::from_rgb(194, 65, 12), message)
                }
                None => ui.label("Ready"),
            };
        });

        // Main canvas (center)
        let output = egui::CentralPanel::default()
            .show(ctx, |ui| {
                canvas::show(
                    ui,
                    &self.session,
                    self.current_tool,
                    &self.image_texture,
                    self.show_zones,
                )
            })
            .inner;

        if let Some((width, height)) = output.display_size {
            self.session.set_display_size(width, height);
        }
        for action in output.actions {
            self.apply_canvas_action(action);
        }

        self.show_zone_name_dialog(ctx);

        // Escape cancels a pending zone or returns to the select tool
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            if self.session.pending_zone().is_some() {
                self.session.cancel_pending_zone();
            } else {
                self.current_tool = Tool::Select;
            }
        }
    }
}
