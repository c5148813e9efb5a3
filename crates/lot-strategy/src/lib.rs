//! Lot Strategy: which floor a vehicle is parked on
//!
//! Floors are passed as a slice of per-floor mutexes. A strategy holds one
//! floor lock at a time, never two, so the "most free" comparison is advisory
//! while each individual allocation stays atomic.

pub mod manager;
pub mod strategy;

pub use manager::ParkingManager;
pub use strategy::AllocationStrategy;
