//! Coordinate Reference System tag

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coordinate reference system identifier carried by a band.
///
/// eocube performs no reprojection; the CRS is opaque metadata that is
/// preserved from input bands onto computed bands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crs {
    /// EPSG code if known
    epsg: Option<u32>,
    /// Authority string (e.g. WKT or PROJ) if no EPSG code applies
    definition: Option<String>,
}

impl Crs {
    /// Create a CRS from an EPSG code
    pub fn from_epsg(code: u32) -> Self {
        Self {
            epsg: Some(code),
            definition: None,
        }
    }

    /// Create a CRS from an opaque definition string
    pub fn from_definition(definition: impl Into<String>) -> Self {
        Self {
            epsg: None,
            definition: Some(definition.into()),
        }
    }

    /// EPSG code, if known
    pub fn epsg(&self) -> Option<u32> {
        self.epsg
    }

    /// Definition string, if set
    pub fn definition(&self) -> Option<&str> {
        self.definition.as_deref()
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.epsg, self.definition.as_deref()) {
            (Some(code), _) => write!(f, "EPSG:{}", code),
            (None, Some(def)) => write!(f, "{}", def),
            (None, None) => write!(f, "unknown"),
        }
    }
}
