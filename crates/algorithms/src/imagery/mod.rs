//! Imagery analysis
//!
//! Spectral index computation over multi-band datasets:
//! - Index formulas: NDVI, NDWI, MNDWI, NBR, NDCI, BAEI, BSI, EVI, MSAVI
//! - Normalized difference: generic two-band kernel
//! - Engine: registry dispatch appending computed bands to a dataset

mod engine;
mod indices;

pub use engine::{calculate_indices, calculate_indices_by_name, BandIndex};
pub use indices::{
    baei, bsi, evi, mndwi, msavi, nbr, ndci, ndvi, ndwi, normalized_difference,
};
