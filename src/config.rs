// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Planner settings.
//!
//! Settings come from an optional YAML or JSON file named by the
//! `ANCHOR_PLANNER_CONFIG` environment variable. Every field has a default,
//! so a file only needs the values it overrides.

use crate::io::serialization;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable holding the path of the settings file.
pub const CONFIG_ENV_VAR: &str = "ANCHOR_PLANNER_CONFIG";

/// Tunable constants of the distribution algorithm and the editors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Physical diameter of one anchor, in meters.
    pub anchor_diameter_m: f64,
    /// Floor area covered by one device; sets the base device budget.
    pub area_per_device_m2: f64,
    /// Devices added or removed by one "+" / "-" action.
    pub device_step: u32,
    /// Minimum zone width and height, in percent of the display.
    pub min_zone_size_pct: f64,
    /// Total jitter range as a fraction of the local grid spacing.
    pub jitter_fraction: f64,
    /// Largest device budget a distribution pass accepts.
    pub max_devices: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            anchor_diameter_m: 0.05,
            area_per_device_m2: 75.0,
            device_step: 5,
            min_zone_size_pct: 5.0,
            jitter_fraction: 0.2,
            max_devices: 10_000,
        }
    }
}

impl PlannerConfig {
    /// Load settings from a YAML (`.yaml`/`.yml`) or JSON (`.json`) file.
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|s| s.to_str());
        let config: Self = match extension {
            Some("yaml") | Some("yml") => serialization::import_yaml(path)?,
            Some("json") => serialization::import_json(path)?,
            _ => anyhow::bail!("Unsupported settings file extension: {:?}", extension),
        };
        config
            .validate()
            .with_context(|| format!("Invalid settings in {}", path.display()))?;
        Ok(config)
    }

    /// Reject values the editors and the distribution pass cannot work with.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.anchor_diameter_m.is_finite() && self.anchor_diameter_m > 0.0,
            "anchor_diameter_m must be positive, got {}",
            self.anchor_diameter_m
        );
        anyhow::ensure!(
            self.area_per_device_m2.is_finite() && self.area_per_device_m2 > 0.0,
            "area_per_device_m2 must be positive, got {}",
            self.area_per_device_m2
        );
        anyhow::ensure!(
            self.min_zone_size_pct > 0.0 && self.min_zone_size_pct <= 100.0,
            "min_zone_size_pct must be in (0, 100], got {}",
            self.min_zone_size_pct
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.jitter_fraction),
            "jitter_fraction must be in [0, 1], got {}",
            self.jitter_fraction
        );
        anyhow::ensure!(self.max_devices > 0, "max_devices must be at least 1");
        Ok(())
    }

    /// Settings for this run: the file named by [`CONFIG_ENV_VAR`] if it is
    /// set and readable, the defaults otherwise.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        let path = Path::new(&path);
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded settings from {}", path.display());
                config
            }
            Err(e) => {
                log::error!("Failed to load settings from {}: {:#}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_planning_constants() {
        let config = PlannerConfig::default();
        assert_eq!(config.anchor_diameter_m, 0.05);
        assert_eq!(config.area_per_device_m2, 75.0);
        assert_eq!(config.device_step, 5);
        assert_eq!(config.min_zone_size_pct, 5.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_yaml_keeps_defaults() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "anchor_diameter_m: 0.1\ndevice_step: 10").unwrap();

        let config = PlannerConfig::load(file.path()).unwrap();
        assert_eq!(config.anchor_diameter_m, 0.1);
        assert_eq!(config.device_step, 10);
        assert_eq!(config.area_per_device_m2, 75.0);
    }

    #[test]
    fn test_load_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"area_per_device_m2": 50.0}}"#).unwrap();

        let config = PlannerConfig::load(file.path()).unwrap();
        assert_eq!(config.area_per_device_m2, 50.0);
        assert_eq!(config.min_zone_size_pct, 5.0);
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        assert!(PlannerConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_load_rejects_out_of_range_values() {
        for body in [
            "min_zone_size_pct: 150",
            "min_zone_size_pct: .nan",
            "area_per_device_m2: 0",
            "anchor_diameter_m: -0.05",
            "jitter_fraction: 2.0",
            "max_devices: 0",
        ] {
            let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
            writeln!(file, "{body}").unwrap();

            let err = PlannerConfig::load(file.path()).unwrap_err();
            assert!(format!("{err:#}").contains("Invalid settings"), "{body}: {err:#}");
        }
    }
}
