//! Lot Core: spots, floors and the layout they are built from
//!
//! A floor is a fixed grid of optional spots plus a cached free counter per
//! vehicle type. Allocation is a scan in row-major order; release addresses a
//! spot by its grid coordinates.
//!
//! # Example
//!
//! ```
//! use lot_core::{FloorLayout, ParkingFloor, VehicleType};
//!
//! let layout = FloorLayout::from_codes(vec![vec![2, 0, 4], vec![4, 4, 2]]).unwrap();
//! let mut floor = ParkingFloor::new(0, &layout, VehicleType::ALL).unwrap();
//!
//! let spot = floor.allocate(VehicleType::FourWheeler).unwrap();
//! assert_eq!(spot.to_string(), "0-0-2");
//! assert_eq!(floor.free_spot_count(VehicleType::FourWheeler), 2);
//!
//! assert!(floor.release(spot.row, spot.col));
//! assert!(!floor.release(spot.row, spot.col));
//! ```

pub mod data_model;
pub mod error;
pub mod floor;
pub mod layout;
pub mod spot;

pub use data_model::{SpotId, VehicleType};
pub use error::{LayoutError, SpotIdError};
pub use floor::{FloorSnapshot, ParkingFloor, TypeOccupancy};
pub use layout::{Cell, FloorLayout};
pub use spot::ParkingSpot;

/// Separator between the floor, row and column parts of a spot id
pub const SPOT_ID_SEPARATOR: char = '-';
