// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing canvas for the blueprint, zones and anchors.
//!
//! This module provides the main canvas area where users view the
//! blueprint, draw and edit distribution zones, and place or drag anchors.
//! It only reports what the pointer did; the app applies it to the session.

use crate::app::Tool;
use anchor_planner::editing::{
    gesture::{GestureEnd, GestureKind},
    zone_editor::ResizeHandle,
};
use anchor_planner::models::{anchor::Anchor, point::Point, zone::Zone};
use anchor_planner::session::PlannerSession;
use anchor_planner::util::geometry::{fit_display_size, to_percent};

/// Screen radius of an anchor marker.
const ANCHOR_RADIUS: f32 = 5.0;
/// Screen radius within which a handle or anchor can be grabbed.
const GRAB_RADIUS: f32 = 8.0;

const ZONE_COLOR: egui::Color32 = egui::Color32::from_rgb(34, 197, 94);
const MANUAL_COLOR: egui::Color32 = egui::Color32::from_rgb(168, 85, 247);
const AUTO_COLOR: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);
const DRAWING_FILL: egui::Color32 = egui::Color32::from_rgba_premultiplied(7, 39, 18, 50);

/// Result of canvas interaction.
pub enum CanvasAction {
    BeginGesture(GestureKind, Point),
    PointerMoved(Point),
    EndGesture(GestureEnd),
    PlaceAnchor(Point),
    DeleteAnchor(String),
}

/// Everything the canvas reports back for one frame.
#[derive(Default)]
pub struct CanvasOutput {
    pub actions: Vec<CanvasAction>,
    /// Size the blueprint was drawn at, if it was drawn.
    pub display_size: Option<(f64, f64)>,
}

/// Display the main canvas area and handle mouse interactions.
pub fn show(
    ui: &mut egui::Ui,
    session: &PlannerSession,
    current_tool: Tool,
    image_texture: &Option<egui::TextureHandle>,
    show_zones: bool,
) -> CanvasOutput {
    let mut output = CanvasOutput::default();
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);

    let available_size = ui.available_size();

    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        ui.set_min_size(available_size);

        let (Some(texture), Some((img_width, img_height))) =
            (image_texture, session.image_size())
        else {
            ui.centered_and_justified(|ui| {
                ui.label(
                    egui::RichText::new("Open a blueprint image to begin")
                        .color(egui::Color32::WHITE),
                );
            });
            return;
        };

        let available = ui.available_size();
        let (display_width, display_height) =
            fit_display_size(img_width, img_height, available.x as f64, available.y as f64);
        let x_offset = (available.x - display_width as f32) / 2.0;
        let y_offset = (available.y - display_height as f32) / 2.0;
        let image_rect = egui::Rect::from_min_size(
            ui.min_rect().min + egui::vec2(x_offset, y_offset),
            egui::vec2(display_width as f32, display_height as f32),
        );
        output.display_size = Some((display_width, display_height));

        ui.painter().image(
            texture.id(),
            image_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );

        let response = ui.allocate_rect(image_rect, egui::Sense::click_and_drag());
        handle_pointer(
            ui,
            &response,
            image_rect,
            session,
            current_tool,
            show_zones,
            &mut output.actions,
        );

        let painter = ui.painter_at(image_rect);
        if show_zones {
            for zone in session.zones() {
                draw_zone(&painter, zone, &image_rect, current_tool == Tool::Select);
            }
        }
        if let Some(pending) = session.pending_zone() {
            let rect = egui::Rect::from_min_max(
                to_screen(&image_rect, Point::new(pending.x, pending.y)),
                to_screen(
                    &image_rect,
                    Point::new(pending.x + pending.width, pending.y + pending.height),
                ),
            );
            painter.rect_filled(rect, 0.0, DRAWING_FILL);
        }
        if let Some(gesture) = session.active_gesture() {
            if gesture.kind == GestureKind::DrawZone {
                let rect = egui::Rect::from_two_pos(
                    to_screen(&image_rect, gesture.start),
                    to_screen(&image_rect, gesture.current),
                );
                painter.rect_filled(rect, 0.0, DRAWING_FILL);
                painter.rect_stroke(rect, 0.0, egui::Stroke::new(2.0, ZONE_COLOR));
            }
        }
        for anchor in session.anchors() {
            draw_anchor(&painter, anchor, &image_rect);
        }
    });

    // Display current tool info at the bottom
    ui.separator();
    ui.horizontal(|ui| {
        ui.label(format!("Current tool: {}", current_tool.label()));
        ui.separator();
        ui.label(format!("Anchors: {}", session.anchors().len()));
        if let Some(summary) = session.summary() {
            ui.separator();
            ui.label(format!(
                "{:.4} m/px, min distance {:.1} px, budget {:.1}",
                summary.scale.meters_per_pixel, summary.scale.min_distance_px, summary.budget
            ));
        }
    });

    output
}

/// Translate this frame's pointer activity into canvas actions.
fn handle_pointer(
    ui: &egui::Ui,
    response: &egui::Response,
    image_rect: egui::Rect,
    session: &PlannerSession,
    current_tool: Tool,
    show_zones: bool,
    actions: &mut Vec<CanvasAction>,
) {
    let to_point = |pos: egui::Pos2| {
        to_percent(
            (pos.x - image_rect.min.x) as f64,
            (pos.y - image_rect.min.y) as f64,
            image_rect.width() as f64,
            image_rect.height() as f64,
        )
    };
    let grab_pct = GRAB_RADIUS as f64 / image_rect.width() as f64 * 100.0;

    if response.drag_started() {
        let origin = ui.input(|i| i.pointer.press_origin()).or(response.interact_pointer_pos());
        if let Some(pos) = origin {
            let kind = gesture_at(session, current_tool, show_zones, &image_rect, pos, grab_pct);
            if let Some(kind) = kind {
                actions.push(CanvasAction::BeginGesture(kind, to_point(pos)));
            }
        }
    }

    if session.active_gesture().is_some() {
        let (latest, primary_down) =
            ui.input(|i| (i.pointer.latest_pos(), i.pointer.primary_down()));
        match latest {
            Some(pos) if !image_rect.contains(pos) => {
                actions.push(CanvasAction::EndGesture(GestureEnd::LeftSurface));
            }
            Some(pos) if response.dragged() => {
                actions.push(CanvasAction::PointerMoved(to_point(pos)));
            }
            None => actions.push(CanvasAction::EndGesture(GestureEnd::LeftSurface)),
            _ => {}
        }
        if response.drag_stopped() || !primary_down {
            actions.push(CanvasAction::EndGesture(GestureEnd::Released));
        }
    }

    if response.double_clicked() && current_tool != Tool::DrawZone {
        if let Some(pos) = response.interact_pointer_pos() {
            if let Some(anchor) = session.anchor_at(to_point(pos), grab_pct) {
                actions.push(CanvasAction::DeleteAnchor(anchor.id.clone()));
                return;
            }
        }
    }

    if response.clicked() && current_tool == Tool::PlaceAnchor {
        if let Some(pos) = response.interact_pointer_pos() {
            let point = to_point(pos);
            if session.anchor_at(point, grab_pct).is_none() {
                actions.push(CanvasAction::PlaceAnchor(point));
            }
        }
    }
}

/// What a drag starting at `pos` would grab.
fn gesture_at(
    session: &PlannerSession,
    current_tool: Tool,
    show_zones: bool,
    image_rect: &egui::Rect,
    pos: egui::Pos2,
    grab_pct: f64,
) -> Option<GestureKind> {
    let point = to_percent(
        (pos.x - image_rect.min.x) as f64,
        (pos.y - image_rect.min.y) as f64,
        image_rect.width() as f64,
        image_rect.height() as f64,
    );

    if current_tool == Tool::DrawZone {
        return Some(GestureKind::DrawZone);
    }

    if let Some(anchor) = session.anchor_at(point, grab_pct) {
        return Some(GestureKind::MoveAnchor {
            anchor_id: anchor.id.clone(),
        });
    }

    if current_tool != Tool::Select || !show_zones {
        return None;
    }

    // Topmost zone first
    for zone in session.zones().iter().rev() {
        for handle in ResizeHandle::ALL {
            if to_screen(image_rect, handle.position(zone)).distance(pos) <= GRAB_RADIUS {
                return Some(GestureKind::ResizeZone {
                    origin: zone.clone(),
                    handle,
                });
            }
        }
    }
    session
        .zones()
        .iter()
        .rev()
        .find(|zone| zone.contains(point))
        .map(|zone| GestureKind::MoveZone { origin: zone.clone() })
}

fn to_screen(image_rect: &egui::Rect, point: Point) -> egui::Pos2 {
    egui::pos2(
        image_rect.min.x + (point.x / 100.0) as f32 * image_rect.width(),
        image_rect.min.y + (point.y / 100.0) as f32 * image_rect.height(),
    )
}

/// Draw a zone outline with its name and, when editable, its resize handles.
fn draw_zone(painter: &egui::Painter, zone: &Zone, image_rect: &egui::Rect, editable: bool) {
    let min = to_screen(image_rect, Point::new(zone.x, zone.y));
    let max = to_screen(image_rect, Point::new(zone.right(), zone.bottom()));
    let rect = egui::Rect::from_min_max(min, max);

    painter.rect_filled(rect, 0.0, egui::Color32::from_rgba_unmultiplied(34, 197, 94, 25));
    let outline = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
        rect.left_top(),
    ];
    let stroke = egui::Stroke::new(1.5, ZONE_COLOR);
    painter.extend(egui::Shape::dashed_line(&outline, stroke, 6.0, 4.0));
    painter.text(
        rect.left_top() + egui::vec2(2.0, -2.0),
        egui::Align2::LEFT_BOTTOM,
        &zone.name,
        egui::FontId::proportional(12.0),
        ZONE_COLOR,
    );

    if editable {
        for handle in ResizeHandle::ALL {
            let center = to_screen(image_rect, handle.position(zone));
            painter.circle_filled(center, 4.0, egui::Color32::WHITE);
            painter.circle_stroke(center, 4.0, egui::Stroke::new(1.5, ZONE_COLOR));
        }
    }
}

/// Draw an anchor marker; manual anchors are purple, generated ones blue.
fn draw_anchor(painter: &egui::Painter, anchor: &Anchor, image_rect: &egui::Rect) {
    let center = to_screen(image_rect, anchor.position());
    let color = if anchor.is_manual { MANUAL_COLOR } else { AUTO_COLOR };

    painter.circle_filled(center, ANCHOR_RADIUS, color);
    painter.circle_stroke(center, ANCHOR_RADIUS, egui::Stroke::new(1.5, egui::Color32::WHITE));
}
