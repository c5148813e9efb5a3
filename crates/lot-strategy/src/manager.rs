//! ParkingManager: registry of allocation strategies
use crate::strategy::AllocationStrategy;
use lot_core::{ParkingFloor, SpotId, VehicleType};
use parking_lot::Mutex;
use tracing::debug;

/// Holds the registered strategies and dispatches park requests by selector.
///
/// The selector is a position in the registered list, so the registration
/// order is part of the caller contract: `0` is nearest floor, `1` is most
/// free spots.
#[derive(Debug, Clone)]
pub struct ParkingManager {
    strategies: Vec<AllocationStrategy>,
}

impl ParkingManager {
    pub fn new() -> Self {
        Self {
            strategies: vec![
                AllocationStrategy::NearestFloor,
                AllocationStrategy::MostFreeSpots,
            ],
        }
    }

    pub fn strategies(&self) -> &[AllocationStrategy] {
        &self.strategies
    }

    /// Resolve a selector against the registered list
    pub fn strategy(&self, index: usize) -> Option<AllocationStrategy> {
        self.strategies.get(index).copied()
    }

    /// Park using the strategy registered at `index`.
    ///
    /// An out-of-range selector is treated as an unserviceable request and
    /// yields `None` without touching any floor.
    pub fn park(
        &self,
        floors: &[Mutex<ParkingFloor>],
        vehicle_type: VehicleType,
        index: usize,
    ) -> Option<SpotId> {
        let Some(strategy) = self.strategy(index) else {
            debug!(index, "Unknown parking strategy selector");
            return None;
        };
        self.park_with(floors, vehicle_type, strategy)
    }

    pub fn park_with(
        &self,
        floors: &[Mutex<ParkingFloor>],
        vehicle_type: VehicleType,
        strategy: AllocationStrategy,
    ) -> Option<SpotId> {
        strategy.select(floors, vehicle_type)
    }
}

impl Default for ParkingManager {
    fn default() -> Self {
        Self::new()
    }
}
