//! ParkingFloor: a grid of spots with cached free counters
//!
//! The counter for a vehicle type always equals the number of unoccupied
//! spots of that type. It is adjusted in the same call that toggles a spot,
//! so allocation can reject a full floor without scanning the grid.

use crate::data_model::{SpotId, VehicleType};
use crate::error::LayoutError;
use crate::layout::{Cell, FloorLayout};
use crate::spot::ParkingSpot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct ParkingFloor {
    index: usize,
    cols: usize,
    spots: Vec<Vec<Option<ParkingSpot>>>,
    free: BTreeMap<VehicleType, usize>,
    capacity: BTreeMap<VehicleType, usize>,
}

impl ParkingFloor {
    /// Build floor `index` from its layout.
    ///
    /// Every type in `tracked` gets a counter, even if the floor has no spot of
    /// that type. A spot whose type is not tracked is rejected, as is a row
    /// whose width differs from the first row.
    pub fn new(
        index: usize,
        layout: &FloorLayout,
        tracked: &[VehicleType],
    ) -> Result<Self, LayoutError> {
        let cols = layout.width();
        let mut free: BTreeMap<VehicleType, usize> = tracked.iter().map(|vt| (*vt, 0)).collect();
        let mut spots = Vec::with_capacity(layout.height());

        for (row, cells) in layout.rows.iter().enumerate() {
            if cells.len() != cols {
                return Err(LayoutError::RaggedRow {
                    floor: index,
                    row,
                    expected: cols,
                    found: cells.len(),
                });
            }

            let mut line = Vec::with_capacity(cols);
            for (col, cell) in cells.iter().enumerate() {
                let spot = match cell {
                    Cell::Empty => None,
                    Cell::Spot(vehicle_type) => {
                        let Some(count) = free.get_mut(vehicle_type) else {
                            return Err(LayoutError::UntrackedVehicleType {
                                floor: index,
                                row,
                                col,
                                vehicle_type: *vehicle_type,
                            });
                        };
                        *count += 1;
                        Some(ParkingSpot::new(SpotId::new(index, row, col), *vehicle_type))
                    }
                };
                line.push(spot);
            }
            spots.push(line);
        }

        Ok(Self {
            index,
            cols,
            spots,
            capacity: free.clone(),
            free,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn rows(&self) -> usize {
        self.spots.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The spot at `(row, col)`, if the cell exists and holds one
    pub fn spot(&self, row: usize, col: usize) -> Option<&ParkingSpot> {
        self.spots.get(row)?.get(col)?.as_ref()
    }

    /// All spots in scan order (row by row, left to right)
    pub fn spots(&self) -> impl Iterator<Item = &ParkingSpot> {
        self.spots.iter().flatten().flatten()
    }

    /// Cached free count; 0 for a type this floor does not track
    pub fn free_spot_count(&self, vehicle_type: VehicleType) -> usize {
        self.free.get(&vehicle_type).copied().unwrap_or(0)
    }

    /// Total spots of a type, free or occupied
    pub fn capacity(&self, vehicle_type: VehicleType) -> usize {
        self.capacity.get(&vehicle_type).copied().unwrap_or(0)
    }

    /// Occupy the first free spot of `vehicle_type` in scan order.
    ///
    /// Returns `None` when the floor has no free spot of that type.
    pub fn allocate(&mut self, vehicle_type: VehicleType) -> Option<SpotId> {
        let free = self.free.get_mut(&vehicle_type)?;
        if *free == 0 {
            return None;
        }

        let Some(spot) = self
            .spots
            .iter_mut()
            .flatten()
            .flatten()
            .find(|spot| spot.accepts(vehicle_type))
        else {
            warn!(
                floor = self.index,
                %vehicle_type,
                cached = *free,
                "Free counter is non-zero but no free spot was found"
            );
            return None;
        };

        spot.occupy();
        *free -= 1;

        debug!(floor = self.index, spot = %spot.id(), %vehicle_type, "Spot allocated");
        Some(spot.id())
    }

    /// Free the spot at `(row, col)`.
    ///
    /// Returns `false` without changing anything when the coordinates are
    /// outside the grid, the cell has no spot, or the spot is already free.
    pub fn release(&mut self, row: usize, col: usize) -> bool {
        let Some(spot) = self
            .spots
            .get_mut(row)
            .and_then(|line| line.get_mut(col))
            .and_then(Option::as_mut)
        else {
            return false;
        };

        if !spot.is_occupied() {
            return false;
        }

        spot.release();
        *self.free.entry(spot.vehicle_type()).or_insert(0) += 1;

        debug!(floor = self.index, spot = %spot.id(), "Spot released");
        true
    }

    pub fn snapshot(&self) -> FloorSnapshot {
        let occupancy = self
            .capacity
            .iter()
            .map(|(vehicle_type, capacity)| {
                (
                    *vehicle_type,
                    TypeOccupancy {
                        capacity: *capacity,
                        free: self.free_spot_count(*vehicle_type),
                    },
                )
            })
            .collect();

        FloorSnapshot {
            floor: self.index,
            occupancy,
        }
    }
}

/// Capacity and free count for one vehicle type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeOccupancy {
    pub capacity: usize,
    pub free: usize,
}

impl TypeOccupancy {
    pub fn occupied(&self) -> usize {
        self.capacity - self.free
    }
}

/// Point-in-time view of one floor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorSnapshot {
    pub floor: usize,
    pub occupancy: BTreeMap<VehicleType, TypeOccupancy>,
}
