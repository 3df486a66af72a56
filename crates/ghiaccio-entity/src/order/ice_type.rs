//! Ice type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two kinds of ice sold by the business.
///
/// Wire and database labels keep the Italian product names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "ice_type")]
pub enum IceType {
    /// Ice for consumption (drinks, cocktails).
    #[sqlx(rename = "consumazione")]
    #[serde(rename = "consumazione")]
    Consumption,
    /// Ice for cooling (keeping goods cold).
    #[sqlx(rename = "raffreddare")]
    #[serde(rename = "raffreddare")]
    Cooling,
}

impl IceType {
    /// Return the wire label for this ice type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Consumption => "consumazione",
            Self::Cooling => "raffreddare",
        }
    }
}

impl fmt::Display for IceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IceType {
    type Err = ghiaccio_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "consumazione" => Ok(Self::Consumption),
            "raffreddare" => Ok(Self::Cooling),
            _ => Err(ghiaccio_core::AppError::validation(format!(
                "Invalid ice type: '{s}'. Expected one of: consumazione, raffreddare"
            ))),
        }
    }
}
