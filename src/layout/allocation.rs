// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Area-proportional device allocation.
//!
//! Each zone receives `ceil(zone_area / total_area * budget)` devices.
//! Rounding is always upward per zone, so the allocated total may exceed
//! the budget. That over-provisioning is intended.

use crate::error::PlanError;
use crate::models::zone::Zone;

/// Device count assigned to one zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneAllocation {
    pub zone_id: String,
    pub devices: usize,
}

/// Per-zone device counts, in zone input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Allocation(Vec<ZoneAllocation>);

impl Allocation {
    /// Devices allocated to the zone with this id.
    pub fn get(&self, zone_id: &str) -> Option<usize> {
        self.0.iter().find(|a| a.zone_id == zone_id).map(|a| a.devices)
    }

    /// Sum of all zone counts.
    pub fn total(&self) -> usize {
        self.0.iter().map(|a| a.devices).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ZoneAllocation> {
        self.0.iter()
    }
}

/// Split `total_budget` devices over `zones` proportionally to their area.
pub fn allocate(zones: &[Zone], total_budget: f64) -> Result<Allocation, PlanError> {
    let total_area: f64 = zones.iter().map(Zone::area).sum();
    if total_area <= 0.0 || !total_area.is_finite() {
        return Err(PlanError::EmptyZoneSet);
    }

    let allocations = zones
        .iter()
        .map(|zone| {
            let share = zone.area() / total_area * total_budget;
            let devices = share.ceil().max(0.0) as usize;
            log::debug!(
                "Zone {} ({}): {:.3} of budget -> {} devices",
                zone.id,
                zone.name,
                share,
                devices
            );
            ZoneAllocation {
                zone_id: zone.id.clone(),
                devices,
            }
        })
        .collect();

    Ok(Allocation(allocations))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(id: &str, width: f64, height: f64) -> Zone {
        Zone::new(id, id, 0.0, 0.0, width, height)
    }

    #[test]
    fn test_single_zone_takes_whole_budget() {
        let zones = vec![zone("zone-0", 100.0, 100.0)];
        let allocation = allocate(&zones, 10.0).unwrap();
        assert_eq!(allocation.get("zone-0"), Some(10));
        assert_eq!(allocation.total(), 10);
    }

    #[test]
    fn test_proportional_split_rounds_up() {
        // Areas 3:1 of a budget of 10 -> 7.5 and 2.5 -> 8 and 3
        let zones = vec![zone("zone-0", 30.0, 10.0), zone("zone-1", 10.0, 10.0)];
        let allocation = allocate(&zones, 10.0).unwrap();
        assert_eq!(allocation.get("zone-0"), Some(8));
        assert_eq!(allocation.get("zone-1"), Some(3));
        assert_eq!(allocation.total(), 11);
    }

    #[test]
    fn test_sum_never_below_budget() {
        let zones = vec![
            zone("zone-0", 12.5, 7.0),
            zone("zone-1", 33.0, 21.0),
            zone("zone-2", 5.0, 5.0),
            zone("zone-3", 60.0, 9.5),
        ];
        for budget in [1.0, 3.3, 10.0, 13.333, 47.0, 120.0] {
            let allocation = allocate(&zones, budget).unwrap();
            assert!(allocation.total() as f64 >= budget, "budget {budget}");
        }
    }

    #[test]
    fn test_keeps_zone_order() {
        let zones = vec![zone("zone-2", 10.0, 10.0), zone("zone-0", 20.0, 10.0)];
        let allocation = allocate(&zones, 6.0).unwrap();
        let ids: Vec<&str> = allocation.iter().map(|a| a.zone_id.as_str()).collect();
        assert_eq!(ids, ["zone-2", "zone-0"]);
    }

    #[test]
    fn test_empty_zone_set() {
        assert_eq!(allocate(&[], 10.0), Err(PlanError::EmptyZoneSet));
        assert_eq!(allocate(&[zone("zone-0", 0.0, 10.0)], 10.0), Err(PlanError::EmptyZoneSet));
    }
}
