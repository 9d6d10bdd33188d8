// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Blueprint image loading.
//!
//! This module decodes blueprint images into RGBA pixels suitable for
//! display in egui, and reports their native pixel size.

use anyhow::{Context, Result};
use std::path::Path;

/// File extensions offered by the open dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];

/// A decoded blueprint image.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    /// RGBA8 pixels, row major.
    pub pixels: Vec<u8>,
}

/// Decode an image file into RGBA pixels.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let img = image::open(path).with_context(|| format!("opening {}", path.display()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        anyhow::bail!("{} has no pixels", path.display());
    }

    Ok(LoadedImage {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}
