//! Allocation strategies
use lot_core::{ParkingFloor, SpotId, VehicleType};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Floor selection policy.
///
/// The discriminant is the ordinal callers pass as a strategy selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationStrategy {
    /// Try floors in index order and take the first free spot.
    ///
    /// "Nearest" only holds if floors are ordered by distance from the
    /// entrance.
    #[default]
    NearestFloor = 0,
    /// Pick the floor with the most free spots of the type and try only that
    /// floor. The earliest floor wins ties.
    MostFreeSpots = 1,
}

impl AllocationStrategy {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(AllocationStrategy::NearestFloor),
            1 => Some(AllocationStrategy::MostFreeSpots),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Allocate a spot for `vehicle_type` on one of `floors`
    pub fn select(
        self,
        floors: &[Mutex<ParkingFloor>],
        vehicle_type: VehicleType,
    ) -> Option<SpotId> {
        match self {
            AllocationStrategy::NearestFloor => nearest_floor(floors, vehicle_type),
            AllocationStrategy::MostFreeSpots => most_free_spots(floors, vehicle_type),
        }
    }
}

impl fmt::Display for AllocationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AllocationStrategy::NearestFloor => write!(f, "nearest_floor"),
            AllocationStrategy::MostFreeSpots => write!(f, "most_free_spots"),
        }
    }
}

fn nearest_floor(floors: &[Mutex<ParkingFloor>], vehicle_type: VehicleType) -> Option<SpotId> {
    floors
        .iter()
        .find_map(|floor| floor.lock().allocate(vehicle_type))
}

fn most_free_spots(floors: &[Mutex<ParkingFloor>], vehicle_type: VehicleType) -> Option<SpotId> {
    let mut best: Option<(&Mutex<ParkingFloor>, usize)> = None;

    for floor in floors {
        let free = floor.lock().free_spot_count(vehicle_type);
        if best.map_or(true, |(_, max)| free > max) {
            best = Some((floor, free));
        }
    }

    // Counts may have moved since they were read. One attempt only: no fallback
    // to the runner-up floor.
    let (floor, seen) = best?;
    let mut floor = floor.lock();
    let spot = floor.allocate(vehicle_type);

    if spot.is_none() && seen > 0 {
        warn!(
            floor = floor.index(),
            %vehicle_type,
            seen,
            "Selected floor was depleted before allocation"
        );
    }
    spot
}

#[cfg(test)]
mod tests {
    use super::*;
    use lot_core::FloorLayout;

    fn floors(layouts: Vec<Vec<Vec<u8>>>) -> Vec<Mutex<ParkingFloor>> {
        layouts
            .into_iter()
            .enumerate()
            .map(|(index, codes)| {
                let layout = FloorLayout::from_codes(codes).unwrap();
                Mutex::new(ParkingFloor::new(index, &layout, VehicleType::ALL).unwrap())
            })
            .collect()
    }

    #[test]
    fn test_index_roundtrip() {
        assert_eq!(AllocationStrategy::from_index(0), Some(AllocationStrategy::NearestFloor));
        assert_eq!(AllocationStrategy::from_index(1), Some(AllocationStrategy::MostFreeSpots));
        assert_eq!(AllocationStrategy::from_index(2), None);
        assert_eq!(AllocationStrategy::MostFreeSpots.index(), 1);
        assert_eq!(AllocationStrategy::default(), AllocationStrategy::NearestFloor);
    }

    #[test]
    fn test_serde_names() {
        let s: AllocationStrategy = serde_json::from_str("\"most_free_spots\"").unwrap();
        assert_eq!(s, AllocationStrategy::MostFreeSpots);
        assert_eq!(
            serde_json::to_string(&AllocationStrategy::NearestFloor).unwrap(),
            format!("\"{}\"", AllocationStrategy::NearestFloor)
        );
    }

    #[test]
    fn test_nearest_takes_lowest_floor() {
        let floors = floors(vec![vec![vec![2, 2]], vec![vec![2, 2, 2]]]);

        let spot = AllocationStrategy::NearestFloor.select(&floors, VehicleType::TwoWheeler);
        assert_eq!(spot.unwrap().to_string(), "0-0-0");
    }

    #[test]
    fn test_nearest_skips_full_floor() {
        let floors = floors(vec![vec![vec![4, 2]], vec![vec![0, 2]]]);

        let first = AllocationStrategy::NearestFloor.select(&floors, VehicleType::TwoWheeler);
        let second = AllocationStrategy::NearestFloor.select(&floors, VehicleType::TwoWheeler);
        let third = AllocationStrategy::NearestFloor.select(&floors, VehicleType::TwoWheeler);

        assert_eq!(first, Some(SpotId::new(0, 0, 1)));
        assert_eq!(second, Some(SpotId::new(1, 0, 1)));
        assert_eq!(third, None);
    }

    #[test]
    fn test_most_free_picks_emptiest_floor() {
        let floors = floors(vec![vec![vec![4, 2]], vec![vec![4, 4, 4]]]);

        let spot = AllocationStrategy::MostFreeSpots.select(&floors, VehicleType::FourWheeler);
        assert_eq!(spot, Some(SpotId::new(1, 0, 0)));
        assert_eq!(floors[0].lock().free_spot_count(VehicleType::FourWheeler), 1);
        assert_eq!(floors[1].lock().free_spot_count(VehicleType::FourWheeler), 2);
    }

    #[test]
    fn test_most_free_ties_go_to_first_floor() {
        let floors = floors(vec![vec![vec![2, 2]], vec![vec![2, 2]]]);

        let spot = AllocationStrategy::MostFreeSpots.select(&floors, VehicleType::TwoWheeler);
        assert_eq!(spot, Some(SpotId::new(0, 0, 0)));

        // Floor 1 now has more free spots
        let spot = AllocationStrategy::MostFreeSpots.select(&floors, VehicleType::TwoWheeler);
        assert_eq!(spot, Some(SpotId::new(1, 0, 0)));
    }

    #[test]
    fn test_exhaustion() {
        for strategy in [AllocationStrategy::NearestFloor, AllocationStrategy::MostFreeSpots] {
            let floors = floors(vec![vec![vec![4, 0]], vec![vec![2, 4]]]);

            assert!(strategy.select(&floors, VehicleType::FourWheeler).is_some());
            assert!(strategy.select(&floors, VehicleType::FourWheeler).is_some());
            assert_eq!(strategy.select(&floors, VehicleType::FourWheeler), None, "{}", strategy);
            assert_eq!(floors[1].lock().free_spot_count(VehicleType::TwoWheeler), 1);
        }
    }

    #[test]
    fn test_no_floors() {
        let floors = floors(vec![]);
        assert_eq!(AllocationStrategy::NearestFloor.select(&floors, VehicleType::TwoWheeler), None);
        assert_eq!(AllocationStrategy::MostFreeSpots.select(&floors, VehicleType::TwoWheeler), None);
    }
}
