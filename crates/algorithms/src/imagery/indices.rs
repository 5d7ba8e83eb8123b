//! Spectral index formulas
//!
//! The fixed elementwise formulas behind each supported index, exposed
//! as standalone band functions. Arithmetic follows raw IEEE-754
//! semantics: division by zero yields NaN or signed infinity and a
//! negative square-root argument yields NaN. The engine never clips,
//! clamps or suppresses these values; downstream masking decides what
//! to do with them.

use crate::maybe_rayon::*;
use eocube_core::raster::Band;
use eocube_core::{Error, Result};
use ndarray::Array2;

// ---------------------------------------------------------------------------
// Elementwise kernels
// ---------------------------------------------------------------------------

fn check_shape(a: &Band<f64>, b: &Band<f64>) -> Result<()> {
    if a.shape() != b.shape() {
        let (expected_rows, expected_cols) = a.shape();
        let (actual_rows, actual_cols) = b.shape();
        return Err(Error::ShapeMismatch {
            expected_rows,
            expected_cols,
            actual_rows,
            actual_cols,
        });
    }
    Ok(())
}

fn build_output(template: &Band<f64>, rows: usize, cols: usize, data: Vec<f64>) -> Result<Band<f64>> {
    let mut output = template.empty_like::<f64>();
    output.set_nodata(Some(f64::NAN));
    *output.data_mut() =
        Array2::from_shape_vec((rows, cols), data).map_err(|e| Error::Other(e.to_string()))?;
    Ok(output)
}

/// Apply a binary formula over two bands, row-parallel.
///
/// The output inherits the first band's name, transform and CRS.
fn zip2<F>(a: &Band<f64>, b: &Band<f64>, f: F) -> Result<Band<f64>>
where
    F: Fn(f64, f64) -> f64 + Sync + Send,
{
    check_shape(a, b)?;
    let (rows, cols) = a.shape();

    let data: Vec<f64> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![0.0; cols];
            for (col, out) in row_data.iter_mut().enumerate() {
                let av = unsafe { a.get_unchecked(row, col) };
                let bv = unsafe { b.get_unchecked(row, col) };
                *out = f(av, bv);
            }
            row_data
        })
        .collect();

    build_output(a, rows, cols, data)
}

/// Ternary variant of [`zip2`].
fn zip3<F>(a: &Band<f64>, b: &Band<f64>, c: &Band<f64>, f: F) -> Result<Band<f64>>
where
    F: Fn(f64, f64, f64) -> f64 + Sync + Send,
{
    check_shape(a, b)?;
    check_shape(a, c)?;
    let (rows, cols) = a.shape();

    let data: Vec<f64> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![0.0; cols];
            for (col, out) in row_data.iter_mut().enumerate() {
                let av = unsafe { a.get_unchecked(row, col) };
                let bv = unsafe { b.get_unchecked(row, col) };
                let cv = unsafe { c.get_unchecked(row, col) };
                *out = f(av, bv, cv);
            }
            row_data
        })
        .collect();

    build_output(a, rows, cols, data)
}

/// Quaternary variant of [`zip2`].
fn zip4<F>(a: &Band<f64>, b: &Band<f64>, c: &Band<f64>, d: &Band<f64>, f: F) -> Result<Band<f64>>
where
    F: Fn(f64, f64, f64, f64) -> f64 + Sync + Send,
{
    check_shape(a, b)?;
    check_shape(a, c)?;
    check_shape(a, d)?;
    let (rows, cols) = a.shape();

    let data: Vec<f64> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![0.0; cols];
            for (col, out) in row_data.iter_mut().enumerate() {
                let av = unsafe { a.get_unchecked(row, col) };
                let bv = unsafe { b.get_unchecked(row, col) };
                let cv = unsafe { c.get_unchecked(row, col) };
                let dv = unsafe { d.get_unchecked(row, col) };
                *out = f(av, bv, cv, dv);
            }
            row_data
        })
        .collect();

    build_output(a, rows, cols, data)
}

// ---------------------------------------------------------------------------
// Generic normalized difference
// ---------------------------------------------------------------------------

/// Compute the normalized difference between two bands:
///
/// `(band_a - band_b) / (band_a + band_b)`
///
/// Result is in [-1, 1] where defined; a zero denominator produces NaN
/// (0/0) or signed infinity. The output inherits the first band's name
/// and geospatial metadata.
pub fn normalized_difference(band_a: &Band<f64>, band_b: &Band<f64>) -> Result<Band<f64>> {
    zip2(band_a, band_b, |a, b| (a - b) / (a + b))
}

// ---------------------------------------------------------------------------
// Normalized-difference family
// ---------------------------------------------------------------------------

/// Normalised Difference Vegetation Index
///
/// `NDVI = (NIR - Red) / (NIR + Red)`
///
/// Dense vegetation sits around 0.6-0.9, bare soil near 0.1-0.2, water
/// below zero.
pub fn ndvi(nir: &Band<f64>, red: &Band<f64>) -> Result<Band<f64>> {
    Ok(normalized_difference(nir, red)?.renamed("ndvi"))
}

/// Normalised Difference Water Index (McFeeters, 1996)
///
/// `NDWI = (Green - NIR) / (Green + NIR)`
///
/// Positive values indicate open water.
pub fn ndwi(green: &Band<f64>, nir: &Band<f64>) -> Result<Band<f64>> {
    Ok(normalized_difference(green, nir)?.renamed("ndwi"))
}

/// Modified Normalised Difference Water Index (Xu, 2006)
///
/// `MNDWI = (Green - SWIR1) / (Green + SWIR1)`
///
/// Discriminates water from built-up areas better than NDWI.
pub fn mndwi(green: &Band<f64>, swir_1: &Band<f64>) -> Result<Band<f64>> {
    Ok(normalized_difference(green, swir_1)?.renamed("mndwi"))
}

/// Normalised Burn Ratio
///
/// `NBR = (NIR - SWIR2) / (NIR + SWIR2)`
///
/// Low values indicate burned areas.
pub fn nbr(nir: &Band<f64>, swir_2: &Band<f64>) -> Result<Band<f64>> {
    Ok(normalized_difference(nir, swir_2)?.renamed("nbr"))
}

/// Normalised Difference Chlorophyll Index (Mishra & Mishra, 2012)
///
/// `NDCI = (RedEdge1 - Red) / (RedEdge1 + Red)`
///
/// Tracks chlorophyll-a concentration in turbid waters.
pub fn ndci(red_edge_1: &Band<f64>, red: &Band<f64>) -> Result<Band<f64>> {
    Ok(normalized_difference(red_edge_1, red)?.renamed("ndci"))
}

// ---------------------------------------------------------------------------
// Other formulas
// ---------------------------------------------------------------------------

/// Built-up Area Extraction Index (Bouzekri et al., 2015)
///
/// `BAEI = (Red + 0.3) / (Green + SWIR1)`
///
/// Ratio index, not bounded to [-1, 1]; built-up surfaces score high.
pub fn baei(red: &Band<f64>, green: &Band<f64>, swir_1: &Band<f64>) -> Result<Band<f64>> {
    Ok(zip3(red, green, swir_1, |r, g, sw| (r + 0.3) / (g + sw))?.renamed("baei"))
}

/// Bare Soil Index
///
/// `BSI = ((SWIR1 + Red) - (NIR + Blue)) / ((SWIR1 + Red) + (NIR + Blue))`
///
/// High values indicate bare soil.
pub fn bsi(
    swir_1: &Band<f64>,
    red: &Band<f64>,
    nir: &Band<f64>,
    blue: &Band<f64>,
) -> Result<Band<f64>> {
    let band = zip4(swir_1, red, nir, blue, |sw, r, n, b| {
        let bright = sw + r;
        let dark = n + b;
        (bright - dark) / (bright + dark)
    })?;
    Ok(band.renamed("bsi"))
}

/// Enhanced Vegetation Index (Huete et al., 2002)
///
/// `EVI = 2.5 * (NIR - Red) / (NIR + 6*Red - 7.5*Blue + 1)`
///
/// More sensitive than NDVI over high-biomass canopies. Coefficients
/// are the standard MODIS constants and assume reflectance inputs.
pub fn evi(nir: &Band<f64>, red: &Band<f64>, blue: &Band<f64>) -> Result<Band<f64>> {
    let band = zip3(nir, red, blue, |n, r, b| {
        2.5 * (n - r) / (n + 6.0 * r - 7.5 * b + 1.0)
    })?;
    Ok(band.renamed("evi"))
}

/// Modified Soil Adjusted Vegetation Index (Qi et al., 1994)
///
/// `MSAVI = (2*NIR + 1 - sqrt((2*NIR + 1)^2 - 8*(NIR - Red))) / 2`
///
/// A negative discriminant yields NaN for that cell; this is expected
/// for inputs outside the reflectance range, not an error.
pub fn msavi(nir: &Band<f64>, red: &Band<f64>) -> Result<Band<f64>> {
    let band = zip2(nir, red, |n, r| {
        let k = 2.0 * n + 1.0;
        (k - (k * k - 8.0 * (n - r)).sqrt()) / 2.0
    })?;
    Ok(band.renamed("msavi"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
