//! Occupancy statistics
use lot_core::{FloorSnapshot, TypeOccupancy, VehicleType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lot-wide occupancy. Each floor is read under its own lock, so the figures
/// are consistent per floor but not across floors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotStats {
    pub name: String,
    pub floors: Vec<FloorSnapshot>,
    pub totals: BTreeMap<VehicleType, TypeOccupancy>,
}

impl LotStats {
    pub fn from_floors(name: impl Into<String>, floors: Vec<FloorSnapshot>) -> Self {
        let mut totals: BTreeMap<VehicleType, TypeOccupancy> = BTreeMap::new();

        for floor in &floors {
            for (vehicle_type, occupancy) in &floor.occupancy {
                let total = totals.entry(*vehicle_type).or_default();
                total.capacity += occupancy.capacity;
                total.free += occupancy.free;
            }
        }

        Self {
            name: name.into(),
            floors,
            totals,
        }
    }

    /// Free spots of a type across every floor
    pub fn free(&self, vehicle_type: VehicleType) -> usize {
        self.totals.get(&vehicle_type).map(|t| t.free).unwrap_or(0)
    }

    /// Total spots of a type across every floor
    pub fn capacity(&self, vehicle_type: VehicleType) -> usize {
        self.totals.get(&vehicle_type).map(|t| t.capacity).unwrap_or(0)
    }
}
