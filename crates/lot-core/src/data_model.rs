//! Data Model: VehicleType, SpotId
use crate::error::{LayoutError, SpotIdError};
use crate::SPOT_ID_SEPARATOR;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of vehicle a spot accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "RawCode")]
pub enum VehicleType {
    TwoWheeler,
    FourWheeler,
}

impl VehicleType {
    /// Every known vehicle type, in code order
    pub const ALL: &'static [VehicleType] = &[VehicleType::TwoWheeler, VehicleType::FourWheeler];

    /// Numeric code used by layout files (2 or 4)
    pub fn code(self) -> u8 {
        match self {
            VehicleType::TwoWheeler => 2,
            VehicleType::FourWheeler => 4,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            2 => Some(VehicleType::TwoWheeler),
            4 => Some(VehicleType::FourWheeler),
            _ => None,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "two_wheeler" => Some(VehicleType::TwoWheeler),
            "four_wheeler" => Some(VehicleType::FourWheeler),
            _ => None,
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VehicleType::TwoWheeler => write!(f, "two_wheeler"),
            VehicleType::FourWheeler => write!(f, "four_wheeler"),
        }
    }
}

/// A layout value as written in config files: either a numeric code or a name
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawCode {
    Code(i64),
    Name(String),
}

impl TryFrom<RawCode> for VehicleType {
    type Error = LayoutError;

    fn try_from(raw: RawCode) -> Result<Self, Self::Error> {
        match raw {
            RawCode::Code(code) => u8::try_from(code)
                .ok()
                .and_then(VehicleType::from_code)
                .ok_or_else(|| LayoutError::UnknownCell(code.to_string())),
            RawCode::Name(name) => {
                VehicleType::from_name(&name).ok_or(LayoutError::UnknownCell(name))
            }
        }
    }
}

/// Identifier of a spot: floor, row and column.
///
/// Rendered as `"{floor}-{row}-{col}"`; callers hand this string back to
/// release the spot, so the format is stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SpotId {
    pub floor: usize,
    pub row: usize,
    pub col: usize,
}

impl SpotId {
    pub fn new(floor: usize, row: usize, col: usize) -> Self {
        Self { floor, row, col }
    }
}

impl fmt::Display for SpotId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            self.floor,
            self.row,
            self.col,
            sep = SPOT_ID_SEPARATOR
        )
    }
}

impl FromStr for SpotId {
    type Err = SpotIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || SpotIdError::Malformed(s.to_string());

        let mut parts = s.split(SPOT_ID_SEPARATOR).map(|p| p.parse::<usize>());
        let (Some(Ok(floor)), Some(Ok(row)), Some(Ok(col)), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };

        Ok(SpotId { floor, row, col })
    }
}

impl From<SpotId> for String {
    fn from(id: SpotId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for SpotId {
    type Error = SpotIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
