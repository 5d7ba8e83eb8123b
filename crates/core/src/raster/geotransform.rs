//! Affine geotransformation for bands

use serde::{Deserialize, Serialize};

/// Affine transformation coefficients for georeferencing a band.
///
/// Converts between pixel coordinates (col, row) and geographic
/// coordinates (x, y). For north-up images `pixel_height` is negative
/// and both rotation terms are zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoTransform {
    /// X coordinate of the upper-left corner
    pub origin_x: f64,
    /// Y coordinate of the upper-left corner
    pub origin_y: f64,
    /// Cell size in the X direction
    pub pixel_width: f64,
    /// Cell size in the Y direction (usually negative)
    pub pixel_height: f64,
}

impl GeoTransform {
    /// Create a north-up geotransform
    pub fn new(origin_x: f64, origin_y: f64, pixel_width: f64, pixel_height: f64) -> Self {
        Self {
            origin_x,
            origin_y,
            pixel_width,
            pixel_height,
        }
    }

    /// Coordinates of the pixel center at (col, row)
    pub fn pixel_to_geo(&self, col: usize, row: usize) -> (f64, f64) {
        let x = self.origin_x + (col as f64 + 0.5) * self.pixel_width;
        let y = self.origin_y + (row as f64 + 0.5) * self.pixel_height;
        (x, y)
    }

    /// Fractional pixel coordinates (col, row) of a geographic point
    pub fn geo_to_pixel(&self, x: f64, y: f64) -> (f64, f64) {
        let col = (x - self.origin_x) / self.pixel_width;
        let row = (y - self.origin_y) / self.pixel_height;
        (col, row)
    }

    /// Cell size, assuming square cells
    pub fn cell_size(&self) -> f64 {
        self.pixel_width.abs()
    }

    /// Geographic bounds (min_x, min_y, max_x, max_y) for a grid of the
    /// given dimensions
    pub fn bounds(&self, cols: usize, rows: usize) -> (f64, f64, f64, f64) {
        let x_end = self.origin_x + cols as f64 * self.pixel_width;
        let y_end = self.origin_y + rows as f64 * self.pixel_height;
        (
            self.origin_x.min(x_end),
            self.origin_y.min(y_end),
            self.origin_x.max(x_end),
            self.origin_y.max(y_end),
        )
    }
}

impl Default for GeoTransform {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0, -1.0)
    }
}
