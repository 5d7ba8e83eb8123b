//! # eocube Algorithms
//!
//! Analysis operations for eocube datasets.
//!
//! - **imagery**: spectral index computation (NDVI, NDWI, MNDWI, NBR,
//!   NDCI, BAEI, BSI, EVI, MSAVI) over multi-band datasets
//! - **masking**: attaching catalog metadata to data-quality mask bands

pub mod imagery;
pub mod masking;

mod maybe_rayon;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::imagery::{
        baei, bsi, calculate_indices, calculate_indices_by_name, evi, mndwi, msavi, nbr, ndci,
        ndvi, ndwi, normalized_difference, BandIndex,
    };
    pub use crate::masking::{
        set_mask_attributes, MaskEventSink, MaskInfo, TracingMaskSink,
    };
    pub use eocube_core::prelude::*;
}
