//! ParkingSpot: the smallest allocatable unit
use crate::data_model::{SpotId, VehicleType};

/// A single spot. Its id and vehicle type are fixed at construction; only the
/// occupancy flag changes.
///
/// `occupy` and `release` are raw toggles. The floor checks type and
/// occupancy before calling them and keeps its free counters in step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkingSpot {
    id: SpotId,
    vehicle_type: VehicleType,
    occupied: bool,
}

impl ParkingSpot {
    pub fn new(id: SpotId, vehicle_type: VehicleType) -> Self {
        Self {
            id,
            vehicle_type,
            occupied: false,
        }
    }

    pub fn id(&self) -> SpotId {
        self.id
    }

    pub fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    /// Whether a vehicle of `vehicle_type` could be parked here right now
    pub fn accepts(&self, vehicle_type: VehicleType) -> bool {
        !self.occupied && self.vehicle_type == vehicle_type
    }

    pub fn occupy(&mut self) {
        self.occupied = true;
    }

    pub fn release(&mut self) {
        self.occupied = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut spot = ParkingSpot::new(SpotId::new(0, 1, 2), VehicleType::TwoWheeler);
        assert!(!spot.is_occupied());
        assert!(spot.accepts(VehicleType::TwoWheeler));
        assert!(!spot.accepts(VehicleType::FourWheeler));

        spot.occupy();
        assert!(spot.is_occupied());
        assert!(!spot.accepts(VehicleType::TwoWheeler));

        spot.release();
        assert!(!spot.is_occupied());
        assert_eq!(spot.id().to_string(), "0-1-2");
        assert_eq!(spot.vehicle_type(), VehicleType::TwoWheeler);
    }
}
