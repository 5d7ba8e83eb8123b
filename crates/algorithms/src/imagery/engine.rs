//! Index registry and dataset-level dispatch
//!
//! [`BandIndex`] is the closed set of supported index identifiers; the
//! compiler enforces that every identifier has a formula and a band
//! requirement list. [`calculate_indices`] evaluates one or more
//! identifiers against a [`Dataset`] and returns an augmented copy with
//! each result appended as a new band named after its identifier.

use crate::imagery::indices;
use eocube_core::raster::Band;
use eocube_core::{Dataset, Error, Result};
use std::fmt;
use std::str::FromStr;

/// Supported spectral index identifiers.
///
/// Identifiers parse from and display as their lowercase token, which
/// is also the name of the band the engine appends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BandIndex {
    /// Built-up Area Extraction Index
    Baei,
    /// Bare Soil Index
    Bsi,
    /// Enhanced Vegetation Index
    Evi,
    /// Modified Normalised Difference Water Index
    Mndwi,
    /// Modified Soil Adjusted Vegetation Index
    Msavi,
    /// Normalised Burn Ratio
    Nbr,
    /// Normalised Difference Chlorophyll Index
    Ndci,
    /// Normalised Difference Vegetation Index
    Ndvi,
    /// Normalised Difference Water Index
    Ndwi,
}

impl BandIndex {
    /// Every supported index
    pub const ALL: [BandIndex; 9] = [
        BandIndex::Baei,
        BandIndex::Bsi,
        BandIndex::Evi,
        BandIndex::Mndwi,
        BandIndex::Msavi,
        BandIndex::Nbr,
        BandIndex::Ndci,
        BandIndex::Ndvi,
        BandIndex::Ndwi,
    ];

    /// The lowercase identifier token, also used as the output band name
    pub fn name(&self) -> &'static str {
        match self {
            BandIndex::Baei => "baei",
            BandIndex::Bsi => "bsi",
            BandIndex::Evi => "evi",
            BandIndex::Mndwi => "mndwi",
            BandIndex::Msavi => "msavi",
            BandIndex::Nbr => "nbr",
            BandIndex::Ndci => "ndci",
            BandIndex::Ndvi => "ndvi",
            BandIndex::Ndwi => "ndwi",
        }
    }

    /// Names of the dataset bands this index reads
    pub fn required_bands(&self) -> &'static [&'static str] {
        match self {
            BandIndex::Baei => &["red", "green", "swir_1"],
            BandIndex::Bsi => &["swir_1", "red", "nir", "blue"],
            BandIndex::Evi => &["nir", "red", "blue"],
            BandIndex::Mndwi => &["green", "swir_1"],
            BandIndex::Msavi => &["nir", "red"],
            BandIndex::Nbr => &["nir", "swir_2"],
            BandIndex::Ndci => &["red_edge_1", "red"],
            BandIndex::Ndvi => &["nir", "red"],
            BandIndex::Ndwi => &["green", "nir"],
        }
    }

    /// Evaluate this index against the dataset, returning the computed
    /// band (named after the identifier) without touching the dataset.
    ///
    /// Fails with a validation error naming the absent band(s) if any
    /// required band is missing; the formula is not evaluated in that
    /// case.
    pub fn compute(&self, ds: &Dataset) -> Result<Band<f64>> {
        self.validate_inputs(ds)?;

        let band = |name: &'static str| fetch(ds, self, name);

        match self {
            BandIndex::Baei => indices::baei(band("red")?, band("green")?, band("swir_1")?),
            BandIndex::Bsi => {
                indices::bsi(band("swir_1")?, band("red")?, band("nir")?, band("blue")?)
            }
            BandIndex::Evi => indices::evi(band("nir")?, band("red")?, band("blue")?),
            BandIndex::Mndwi => indices::mndwi(band("green")?, band("swir_1")?),
            BandIndex::Msavi => indices::msavi(band("nir")?, band("red")?),
            BandIndex::Nbr => indices::nbr(band("nir")?, band("swir_2")?),
            BandIndex::Ndci => indices::ndci(band("red_edge_1")?, band("red")?),
            BandIndex::Ndvi => indices::ndvi(band("nir")?, band("red")?),
            BandIndex::Ndwi => indices::ndwi(band("green")?, band("nir")?),
        }
    }

    fn validate_inputs(&self, ds: &Dataset) -> Result<()> {
        let missing: Vec<String> = self
            .required_bands()
            .iter()
            .filter(|name| !ds.contains(name))
            .map(|name| name.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::MissingBands {
                index: self.name().to_string(),
                missing,
                available: ds.band_names(),
            })
        }
    }
}

/// Look up a validated required band; reaching the error arm means the
/// dataset changed between validation and fetch.
fn fetch<'a>(ds: &'a Dataset, index: &BandIndex, name: &'static str) -> Result<&'a Band<f64>> {
    ds.band(name).ok_or_else(|| Error::MissingBands {
        index: index.name().to_string(),
        missing: vec![name.to_string()],
        available: ds.band_names(),
    })
}

impl FromStr for BandIndex {
    type Err = Error;

    /// Parse the lowercase identifier token.
    ///
    /// Matching is exact: identifiers are lowercase by convention and
    /// any other spelling is an unknown index.
    fn from_str(s: &str) -> Result<Self> {
        BandIndex::ALL
            .into_iter()
            .find(|index| index.name() == s)
            .ok_or_else(|| Error::UnknownIndex { name: s.to_string() })
    }
}

impl fmt::Display for BandIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compute the requested indices and return a dataset extended with one
/// band per identifier, named after it.
///
/// Identifiers are processed in caller order; a repeated identifier
/// recomputes and overwrites its band, which is idempotent for the same
/// inputs. Existing bands are never removed or altered.
///
/// On a validation error (a required band missing for some identifier)
/// the input dataset is untouched and no partially augmented dataset is
/// returned; callers that want to keep the results of earlier
/// identifiers in a failed batch should drive [`BandIndex::compute`]
/// themselves.
pub fn calculate_indices<I>(ds: &Dataset, indices: I) -> Result<Dataset>
where
    I: IntoIterator<Item = BandIndex>,
{
    let mut out = ds.clone();
    for index in indices {
        let band = index.compute(&out)?;
        out.insert(band)?;
    }
    Ok(out)
}

/// String-token variant of [`calculate_indices`].
///
/// Each token is validated immediately before its formula runs, in
/// caller order: an unrecognised token fails the call with an error
/// naming it, without evaluating that identifier or any later one.
pub fn calculate_indices_by_name<'a, I>(ds: &Dataset, names: I) -> Result<Dataset>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = ds.clone();
    for name in names {
        let index = BandIndex::from_str(name)?;
        let band = index.compute(&out)?;
        out.insert(band)?;
    }
    Ok(out)
}
