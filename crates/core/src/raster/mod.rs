//! Band data structures

mod attrs;
mod band;
mod element;
mod geotransform;

pub use attrs::AttrValue;
pub use band::Band;
pub use element::BandElement;
pub use geotransform::GeoTransform;
