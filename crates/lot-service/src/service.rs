//! ParkingLotService: the facade callers use
//!
//! Composes the floors, the strategy manager and the search index. Each floor
//! sits behind its own mutex; the index has its own lock. No call holds more
//! than one of these at a time.

use crate::config::{ConfigError, LotConfig};
use crate::events::{EventHandler, ParkingEvent, RejectReason};
use crate::stats::LotStats;
use lot_core::{FloorLayout, ParkingFloor, SpotId, VehicleType};
use lot_search::SearchIndex;
use lot_strategy::{AllocationStrategy, ParkingManager};
use parking_lot::Mutex;
use tracing::{debug, info};

pub struct ParkingLotService {
    name: String,
    floors: Vec<Mutex<ParkingFloor>>,
    manager: ParkingManager,
    index: SearchIndex,
    default_strategy: AllocationStrategy,
    handlers: Vec<EventHandler>,
}

impl ParkingLotService {
    /// Build the lot described by `config`.
    ///
    /// Fails if any floor layout is ragged or holds a spot for a vehicle type
    /// outside `config.vehicle_types`.
    pub fn new(config: LotConfig) -> Result<Self, ConfigError> {
        let floors = config
            .floors
            .iter()
            .enumerate()
            .map(|(index, layout)| {
                ParkingFloor::new(index, layout, &config.vehicle_types).map(Mutex::new)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let service = Self {
            name: config.name,
            floors,
            manager: ParkingManager::new(),
            index: SearchIndex::new(),
            default_strategy: config.default_strategy,
            handlers: Vec::new(),
        };

        let stats = service.stats();
        info!(
            lot = %service.name,
            floors = service.floors.len(),
            two_wheeler = stats.capacity(VehicleType::TwoWheeler),
            four_wheeler = stats.capacity(VehicleType::FourWheeler),
            "Parking lot ready"
        );

        Ok(service)
    }

    /// Lot tracking every vehicle type, with the default strategy
    pub fn from_layout(floors: Vec<FloorLayout>) -> Result<Self, ConfigError> {
        Self::new(LotConfig::new(floors))
    }

    /// Register a handler for parking events
    pub fn with_event_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&ParkingEvent) + Send + Sync + 'static,
    {
        self.handlers.push(Box::new(handler));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    pub fn default_strategy(&self) -> AllocationStrategy {
        self.default_strategy
    }

    /// Park with the strategy registered at `strategy_index`.
    ///
    /// On success both `vehicle_number` and `ticket_id` are indexed to the
    /// returned spot. On failure nothing changes.
    pub fn park(
        &self,
        vehicle_type: VehicleType,
        vehicle_number: &str,
        ticket_id: &str,
        strategy_index: usize,
    ) -> Option<SpotId> {
        let Some(strategy) = self.manager.strategy(strategy_index) else {
            debug!(strategy_index, vehicle_number, "Unknown strategy selector");
            self.reject(vehicle_type, vehicle_number, RejectReason::UnknownStrategy);
            return None;
        };

        self.park_with(vehicle_type, vehicle_number, ticket_id, strategy)
    }

    pub fn park_with(
        &self,
        vehicle_type: VehicleType,
        vehicle_number: &str,
        ticket_id: &str,
        strategy: AllocationStrategy,
    ) -> Option<SpotId> {
        let Some(spot) = self.manager.park_with(&self.floors, vehicle_type, strategy) else {
            debug!(%vehicle_type, vehicle_number, %strategy, "No spot available");
            self.reject(vehicle_type, vehicle_number, RejectReason::NoSpotAvailable);
            return None;
        };

        self.index.index(vehicle_number, ticket_id, spot);
        debug!(%spot, vehicle_number, ticket_id, %strategy, "Vehicle parked");

        self.emit(&ParkingEvent::Parked {
            spot,
            vehicle_type,
            vehicle_number: vehicle_number.to_string(),
            ticket_id: ticket_id.to_string(),
            strategy,
        });
        Some(spot)
    }

    /// Park with the configured default strategy
    pub fn park_default(
        &self,
        vehicle_type: VehicleType,
        vehicle_number: &str,
        ticket_id: &str,
    ) -> Option<SpotId> {
        self.park_with(vehicle_type, vehicle_number, ticket_id, self.default_strategy)
    }

    /// Free the spot named by a `floor-row-col` id.
    ///
    /// Malformed ids, unknown floors, empty cells and already free spots all
    /// give `false`. Search entries for the departed vehicle are kept.
    pub fn remove(&self, spot_id: &str) -> bool {
        match spot_id.parse::<SpotId>() {
            Ok(spot) => self.remove_spot(spot),
            Err(e) => {
                debug!(error = %e, "Rejected spot id");
                false
            }
        }
    }

    pub fn remove_spot(&self, spot: SpotId) -> bool {
        let Some(floor) = self.floors.get(spot.floor) else {
            debug!(%spot, "Spot id names an unknown floor");
            return false;
        };

        let released = floor.lock().release(spot.row, spot.col);
        if released {
            self.emit(&ParkingEvent::Released { spot });
        }
        released
    }

    /// Free spots of a type on one floor; 0 for an unknown floor
    pub fn free_spot_count(&self, floor: usize, vehicle_type: VehicleType) -> usize {
        self.floors
            .get(floor)
            .map(|f| f.lock().free_spot_count(vehicle_type))
            .unwrap_or(0)
    }

    /// Spot last indexed under a ticket id or vehicle number
    pub fn search(&self, query: &str) -> Option<SpotId> {
        self.index.lookup(query)
    }

    pub fn stats(&self) -> LotStats {
        let floors = self.floors.iter().map(|f| f.lock().snapshot()).collect();
        LotStats::from_floors(self.name.clone(), floors)
    }

    fn reject(&self, vehicle_type: VehicleType, vehicle_number: &str, reason: RejectReason) {
        self.emit(&ParkingEvent::Rejected {
            vehicle_type,
            vehicle_number: vehicle_number.to_string(),
            reason,
        });
    }

    fn emit(&self, event: &ParkingEvent) {
        for handler in &self.handlers {
            handler(event);
        }
    }
}

impl std::fmt::Debug for ParkingLotService {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("ParkingLotService")
            .field("name", &self.name)
            .field("floors", &self.floors.len())
            .field("default_strategy", &self.default_strategy)
            .field("indexed", &self.index.len())
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
