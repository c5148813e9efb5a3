//! Floor layouts as described in configuration.
//!
//! Cells use the numeric codes of existing lot files (`0` for no spot,
//! `2` and `4` for vehicle types) or the equivalent names (`none`,
//! `two_wheeler`, `four_wheeler`).

use crate::data_model::{RawCode, VehicleType};
use crate::error::LayoutError;
use serde::{Deserialize, Serialize};

/// One grid cell: either unusable (pillar, aisle) or a spot for a vehicle type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCode", into = "u8")]
pub enum Cell {
    Empty,
    Spot(VehicleType),
}

impl Cell {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Cell::Empty),
            other => VehicleType::from_code(other).map(Cell::Spot),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Spot(vt) => vt.code(),
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell.code()
    }
}

impl TryFrom<RawCode> for Cell {
    type Error = LayoutError;

    fn try_from(raw: RawCode) -> Result<Self, Self::Error> {
        match raw {
            RawCode::Name(name) if name == "none" => Ok(Cell::Empty),
            RawCode::Code(0) => Ok(Cell::Empty),
            other => VehicleType::try_from(other).map(Cell::Spot),
        }
    }
}

/// Row-major grid of cells for a single floor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FloorLayout {
    pub rows: Vec<Vec<Cell>>,
}

impl FloorLayout {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Build a layout from raw integer codes, rejecting anything that is not
    /// `0`, `2` or `4`.
    pub fn from_codes(codes: Vec<Vec<u8>>) -> Result<Self, LayoutError> {
        let rows = codes
            .into_iter()
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .into_iter()
                    .enumerate()
                    .map(|(col, code)| {
                        Cell::from_code(code).ok_or(LayoutError::UnknownVehicleCode {
                            row,
                            col,
                            code: i64::from(code),
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rows })
    }

    /// Width of the first row; every row must match it
    pub fn width(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of spots for a vehicle type
    pub fn count(&self, vehicle_type: VehicleType) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Spot(vehicle_type))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_codes() {
        let layout = FloorLayout::from_codes(vec![vec![0, 2, 4], vec![4, 4, 0]]).unwrap();

        assert_eq!(layout.height(), 2);
        assert_eq!(layout.width(), 3);
        assert_eq!(layout.rows[0][0], Cell::Empty);
        assert_eq!(layout.rows[0][1], Cell::Spot(VehicleType::TwoWheeler));
        assert_eq!(layout.count(VehicleType::FourWheeler), 3);
        assert_eq!(layout.count(VehicleType::TwoWheeler), 1);
    }

    #[test]
    fn test_from_codes_rejects_unknown() {
        let err = FloorLayout::from_codes(vec![vec![2, 2], vec![2, 3]]).unwrap_err();
        assert_eq!(
            err,
            LayoutError::UnknownVehicleCode { row: 1, col: 1, code: 3 }
        );
    }

    #[test]
    fn test_deserialize_mixed_cells() {
        let layout: FloorLayout =
            serde_json::from_str(r#"[[0, "two_wheeler", 4], ["none", 2, "four_wheeler"]]"#)
                .unwrap();

        assert_eq!(
            layout.rows[1],
            vec![
                Cell::Empty,
                Cell::Spot(VehicleType::TwoWheeler),
                Cell::Spot(VehicleType::FourWheeler),
            ]
        );
    }

    #[test]
    fn test_deserialize_rejects_unknown() {
        assert!(serde_json::from_str::<FloorLayout>("[[0, 7]]").is_err());
        assert!(serde_json::from_str::<FloorLayout>(r#"[["bus"]]"#).is_err());
        assert!(serde_json::from_str::<FloorLayout>("[[-2]]").is_err());
    }

    #[test]
    fn test_serializes_as_codes() {
        let layout = FloorLayout::from_codes(vec![vec![4, 0, 2]]).unwrap();
        assert_eq!(serde_json::to_string(&layout).unwrap(), "[[4,0,2]]");
    }
}
