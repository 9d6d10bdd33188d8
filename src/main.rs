// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Anchor Planner
//!
//! A cross-platform desktop application for laying out tracking anchors
//! over a facility blueprint: draw distribution zones, then let the
//! planner spread anchors across them at a safe physical spacing.

mod app;
mod ui;

use anchor_planner::PlannerConfig;
use anyhow::Result;
use app::PlannerApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = PlannerConfig::from_env();
    log::debug!("Settings: {:?}", config);

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Anchor Planner"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Anchor Planner",
        options,
        Box::new(|_cc| Ok(Box::new(PlannerApp::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
