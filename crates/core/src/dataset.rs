//! Dataset: a named collection of bands sharing one grid

use crate::error::{Error, Result};
use crate::raster::Band;
use std::collections::BTreeMap;

/// A collection of reflectance bands addressed by name, all sharing the
/// same shape and coordinate system.
///
/// Datasets are produced by an external loader and handed to the index
/// engine, which appends computed index bands under the index name.
/// Inserting a band whose name is already present replaces it, so
/// recomputing an index is idempotent.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    bands: BTreeMap<String, Band<f64>>,
}

impl Dataset {
    /// Create an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a band under its own name.
    ///
    /// The first band fixes the dataset shape; any later band must match
    /// it exactly. A band with an already-present name replaces the old
    /// one.
    pub fn insert(&mut self, band: Band<f64>) -> Result<()> {
        if let Some((rows, cols)) = self.shape() {
            let (r, c) = band.shape();
            if (r, c) != (rows, cols) {
                return Err(Error::ShapeMismatch {
                    expected_rows: rows,
                    expected_cols: cols,
                    actual_rows: r,
                    actual_cols: c,
                });
            }
        }
        self.bands.insert(band.name().to_string(), band);
        Ok(())
    }

    /// Get a band by name
    pub fn band(&self, name: &str) -> Option<&Band<f64>> {
        self.bands.get(name)
    }

    /// Whether a band with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.bands.contains_key(name)
    }

    /// Names of all bands, in sorted order
    pub fn band_names(&self) -> Vec<String> {
        self.bands.keys().cloned().collect()
    }

    /// Shared shape of all bands, or `None` for an empty dataset
    pub fn shape(&self) -> Option<(usize, usize)> {
        self.bands.values().next().map(|b| b.shape())
    }

    /// Number of bands
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    /// Whether the dataset holds no bands
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Iterate over (name, band) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Band<f64>)> {
        self.bands.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_lookup() {
        let mut ds = Dataset::new();
        ds.insert(Band::filled("red", 4, 4, 0.1)).unwrap();
        ds.insert(Band::filled("nir", 4, 4, 0.5)).unwrap();

        assert_eq!(ds.len(), 2);
        assert!(ds.contains("red"));
        assert_eq!(ds.band("nir").unwrap().get(0, 0).unwrap(), 0.5);
        assert_eq!(ds.shape(), Some((4, 4)));
        assert_eq!(ds.band_names(), vec!["nir".to_string(), "red".to_string()]);
    }

    #[test]
    fn insert_rejects_shape_mismatch() {
        let mut ds = Dataset::new();
        ds.insert(Band::filled("red", 4, 4, 0.1)).unwrap();

        let err = ds.insert(Band::filled("nir", 4, 5, 0.5)).unwrap_err();
        assert!(err.is_validation());
        // dataset unchanged
        assert_eq!(ds.len(), 1);
        assert!(!ds.contains("nir"));
    }

    #[test]
    fn insert_replaces_same_name() {
        let mut ds = Dataset::new();
        ds.insert(Band::filled("ndvi", 2, 2, 0.0)).unwrap();
        ds.insert(Band::filled("ndvi", 2, 2, 0.6)).unwrap();

        assert_eq!(ds.len(), 1);
        assert_eq!(ds.band("ndvi").unwrap().get(0, 0).unwrap(), 0.6);
    }
}
