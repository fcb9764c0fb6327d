//! Coordinate reference system descriptors.
//!
//! The engines never decode projections themselves; a [`Crs`] is an opaque
//! identifier that callers pair with a pre-resolved [`crate::PointTransform`].

use crate::GeomError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A coordinate reference system identified by its EPSG code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Crs(pub u32);

impl Crs {
    /// Web Mercator (EPSG:3857), the default measurement source projection.
    pub const WEB_MERCATOR: Crs = Crs(3857);

    /// New Zealand Transverse Mercator (EPSG:2193), the grid working CRS.
    pub const NZTM: Crs = Crs(2193);

    /// WGS 84 geographic coordinates (EPSG:4326), used by elevation rasters.
    pub const WGS84: Crs = Crs(4326);

    /// The numeric EPSG code.
    pub fn code(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{}", self.0)
    }
}

impl FromStr for Crs {
    type Err = GeomError;

    /// Parse an `EPSG:NNNN` descriptor (case-insensitive prefix).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s
            .strip_prefix("EPSG:")
            .or_else(|| s.strip_prefix("epsg:"))
            .ok_or_else(|| GeomError::InvalidCrs(s.to_string()))?;
        code.parse::<u32>()
            .map(Crs)
            .map_err(|_| GeomError::InvalidCrs(s.to_string()))
    }
}

impl TryFrom<String> for Crs {
    type Error = GeomError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Crs> for String {
    fn from(crs: Crs) -> Self {
        crs.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_epsg() {
        assert_eq!("EPSG:2193".parse::<Crs>().unwrap(), Crs::NZTM);
        assert_eq!("epsg:3857".parse::<Crs>().unwrap(), Crs::WEB_MERCATOR);
        assert!("2193".parse::<Crs>().is_err());
        assert!("EPSG:abc".parse::<Crs>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Crs::WGS84.to_string(), "EPSG:4326");
    }
}
