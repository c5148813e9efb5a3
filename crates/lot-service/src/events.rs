//! Parking events
//!
//! Handlers are plain functions registered when the service is built. They
//! run synchronously on the calling thread, after the state change and after
//! every floor lock has been released.

use lot_core::{SpotId, VehicleType};
use lot_strategy::AllocationStrategy;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ParkingEvent {
    /// A vehicle was given a spot and indexed
    Parked {
        spot: SpotId,
        vehicle_type: VehicleType,
        vehicle_number: String,
        ticket_id: String,
        strategy: AllocationStrategy,
    },
    /// A park request could not be served
    Rejected {
        vehicle_type: VehicleType,
        vehicle_number: String,
        reason: RejectReason,
    },
    /// An occupied spot was freed
    Released { spot: SpotId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Strategy selector outside the registered list
    UnknownStrategy,
    /// No floor yielded a spot of the requested type
    NoSpotAvailable,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RejectReason::UnknownStrategy => write!(f, "unknown strategy"),
            RejectReason::NoSpotAvailable => write!(f, "no spot available"),
        }
    }
}

pub type EventHandler = Box<dyn Fn(&ParkingEvent) + Send + Sync>;
