//! # eocube Core
//!
//! Core types for the eocube Earth observation library.
//!
//! This crate provides:
//! - `Band<T>`: named 2D grid with geospatial metadata and attributes
//! - `Dataset`: name-keyed collection of bands sharing one grid
//! - `GeoTransform` / `Crs`: georeferencing metadata carried through
//!   computations
//! - `Error` / `Result`: crate-wide error handling

pub mod crs;
pub mod dataset;
pub mod error;
pub mod raster;

pub use crs::Crs;
pub use dataset::Dataset;
pub use error::{Error, Result};
pub use raster::{AttrValue, Band, BandElement, GeoTransform};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::crs::Crs;
    pub use crate::dataset::Dataset;
    pub use crate::error::{Error, Result};
    pub use crate::raster::{AttrValue, Band, BandElement, GeoTransform};
}
