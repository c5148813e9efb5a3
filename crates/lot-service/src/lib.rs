//! Lot Service: parking lot facade
//!
//! Wires floors, allocation strategies and the search index together behind
//! four operations: park, remove, free-count and search. Every negative
//! outcome (full lot, unknown strategy, bad spot id, unindexed key) is an
//! ordinary `None`/`false`; errors only come from building the lot.
//!
//! ```text
//! park ─→ ParkingManager ─→ AllocationStrategy ─→ ParkingFloor (locked)
//!   └──(on success)──→ SearchIndex
//! remove ─→ ParkingFloor (locked)
//! ```
//!
//! # Example
//!
//! ```
//! use lot_service::{LotConfig, ParkingLotService, VehicleType};
//!
//! let config = LotConfig::from_yaml_str("floors:\n  - [[2, 2], [4, 0]]\n  - [[4, 4]]\n").unwrap();
//! let lot = ParkingLotService::new(config).unwrap();
//!
//! let spot = lot.park(VehicleType::FourWheeler, "KA-01-1234", "T-1", 1).unwrap();
//! assert_eq!(spot.to_string(), "1-0-0");
//! assert_eq!(lot.search("T-1"), Some(spot));
//!
//! assert!(lot.remove("1-0-0"));
//! assert_eq!(lot.free_spot_count(1, VehicleType::FourWheeler), 2);
//! ```

pub mod config;
pub mod events;
pub mod logging;
pub mod service;
pub mod stats;

pub use config::{ConfigError, LotConfig};
pub use events::{EventHandler, ParkingEvent, RejectReason};
pub use logging::init_logging;
pub use service::ParkingLotService;
pub use stats::LotStats;

pub use lot_core::{Cell, FloorLayout, SpotId, VehicleType};
pub use lot_strategy::AllocationStrategy;
