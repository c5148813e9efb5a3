//! Construction-time errors
//!
//! Allocation itself never fails loudly; these only surface while a lot is
//! being built from its layout or when a caller hands back a spot id that
//! cannot be parsed.
use crate::data_model::VehicleType;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("LAYOUT/unknown vehicle code {code} at row {row}, col {col}")]
    UnknownVehicleCode { row: usize, col: usize, code: i64 },

    #[error("LAYOUT/unknown cell value {0:?}")]
    UnknownCell(String),

    #[error("LAYOUT/floor {floor} row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        floor: usize,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("LAYOUT/{vehicle_type} spot at floor {floor} ({row}, {col}) is not a tracked vehicle type")]
    UntrackedVehicleType {
        floor: usize,
        row: usize,
        col: usize,
        vehicle_type: VehicleType,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpotIdError {
    #[error("SPOT/malformed spot id {0:?}")]
    Malformed(String),
}
