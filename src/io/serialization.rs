// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Settings file deserialization.
//!
//! This module handles reading structured data from YAML and JSON files.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Import data from YAML format.
pub fn import_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let yaml = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let data = serde_yaml::from_str(&yaml)
        .with_context(|| format!("parsing YAML in {}", path.display()))?;
    Ok(data)
}

/// Import data from JSON format.
pub fn import_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let data = serde_json::from_str(&json)
        .with_context(|| format!("parsing JSON in {}", path.display()))?;
    Ok(data)
}
