//! Named band grid type

use crate::crs::Crs;
use crate::error::{Error, Result};
use crate::raster::{AttrValue, BandElement, GeoTransform};
use ndarray::{Array2, ArrayView2, ArrayViewMut2};
use std::collections::BTreeMap;

/// A named 2D grid of cell values with geospatial metadata.
///
/// `Band<T>` is the unit the index engine and the mask attributer work
/// on: a grid of reflectance values (`Band<f64>`) or discrete category
/// codes (`Band<u8>`), addressed by `(row, col)`, carrying an affine
/// transform, an optional CRS, an optional no-data value and an open
/// metadata attribute map.
///
/// # Example
///
/// ```ignore
/// use eocube_core::Band;
///
/// let mut band: Band<f64> = Band::new("nir", 100, 100);
/// band.set(10, 20, 0.42)?;
/// let value = band.get(10, 20)?;
/// ```
#[derive(Debug, Clone)]
pub struct Band<T: BandElement> {
    /// Band name, e.g. `"red"`, `"nir"`, `"scl"`
    name: String,
    /// Cell values in row-major order (row, col)
    data: Array2<T>,
    /// Affine transformation
    transform: GeoTransform,
    /// Coordinate reference system
    crs: Option<Crs>,
    /// No-data value
    nodata: Option<T>,
    /// Open metadata attributes
    attrs: BTreeMap<String, AttrValue>,
}

impl<T: BandElement> Band<T> {
    /// Create a new band filled with zeros
    pub fn new(name: impl Into<String>, rows: usize, cols: usize) -> Self {
        Self::from_array(name, Array2::zeros((rows, cols)))
    }

    /// Create a new band filled with a specific value
    pub fn filled(name: impl Into<String>, rows: usize, cols: usize, value: T) -> Self {
        Self::from_array(name, Array2::from_elem((rows, cols), value))
    }

    /// Create a band from row-major values
    pub fn from_vec(name: impl Into<String>, data: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::InvalidDimensions {
                rows,
                cols,
                len: data.len(),
            });
        }
        let array = Array2::from_shape_vec((rows, cols), data)
            .map_err(|e| Error::Other(e.to_string()))?;
        Ok(Self::from_array(name, array))
    }

    /// Create a band from an ndarray
    pub fn from_array(name: impl Into<String>, data: Array2<T>) -> Self {
        Self {
            name: name.into(),
            data,
            transform: GeoTransform::default(),
            crs: None,
            nodata: None,
            attrs: BTreeMap::new(),
        }
    }

    /// Create an empty band of a different element type that inherits
    /// this band's name, transform and CRS
    pub fn empty_like<U: BandElement>(&self) -> Band<U> {
        Band {
            name: self.name.clone(),
            data: Array2::zeros(self.data.dim()),
            transform: self.transform,
            crs: self.crs.clone(),
            nodata: None,
            attrs: BTreeMap::new(),
        }
    }

    /// Consume the band and return it under a new name
    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    // Dimensions

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the band has no cells
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    // Data access

    /// Get value at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.data
            .get((row, col))
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            })
    }

    /// Get value at (row, col) without bounds checking
    ///
    /// # Safety
    /// Caller must ensure row < self.rows() and col < self.cols()
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> T {
        unsafe { *self.data.uget((row, col)) }
    }

    /// Set value at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row >= self.rows() || col >= self.cols() {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        self.data[(row, col)] = value;
        Ok(())
    }

    /// Get a view of the underlying data
    pub fn view(&self) -> ArrayView2<'_, T> {
        self.data.view()
    }

    /// Get a mutable view of the underlying data
    pub fn view_mut(&mut self) -> ArrayViewMut2<'_, T> {
        self.data.view_mut()
    }

    /// Get a reference to the underlying array
    pub fn data(&self) -> &Array2<T> {
        &self.data
    }

    /// Get a mutable reference to the underlying array
    pub fn data_mut(&mut self) -> &mut Array2<T> {
        &mut self.data
    }

    /// Consume the band and return the underlying array
    pub fn into_array(self) -> Array2<T> {
        self.data
    }

    // Metadata

    /// Band name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the geotransform
    pub fn transform(&self) -> &GeoTransform {
        &self.transform
    }

    /// Set the geotransform
    pub fn set_transform(&mut self, transform: GeoTransform) {
        self.transform = transform;
    }

    /// Get the CRS
    pub fn crs(&self) -> Option<&Crs> {
        self.crs.as_ref()
    }

    /// Set the CRS
    pub fn set_crs(&mut self, crs: Option<Crs>) {
        self.crs = crs;
    }

    /// Get the no-data value
    pub fn nodata(&self) -> Option<T> {
        self.nodata
    }

    /// Set the no-data value
    pub fn set_nodata(&mut self, nodata: Option<T>) {
        self.nodata = nodata;
    }

    /// Check if a value is no-data
    pub fn is_nodata(&self, value: T) -> bool {
        value.is_nodata(self.nodata)
    }

    // Attributes

    /// Get a metadata attribute by key
    pub fn attr(&self, key: &str) -> Option<&AttrValue> {
        self.attrs.get(key)
    }

    /// Set a metadata attribute, replacing any existing value for the key
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// All metadata attributes
    pub fn attrs(&self) -> &BTreeMap<String, AttrValue> {
        &self.attrs
    }
}
