//! Error types for eocube

use thiserror::Error;

/// Main error type for eocube operations.
///
/// `UnknownIndex`, `MissingBands`, `ShapeMismatch` and `InvalidDimensions`
/// are validation errors: they are raised before any formula is evaluated
/// and their messages name the offending identifier or band(s).
#[derive(Error, Debug)]
pub enum Error {
    #[error("requested index `{name}` was not recognised")]
    UnknownIndex { name: String },

    #[error("index `{index}` requires band(s) {missing:?} not present in dataset (available: {available:?})")]
    MissingBands {
        index: String,
        missing: Vec<String>,
        available: Vec<String>,
    },

    #[error("band shape mismatch: expected ({expected_rows}, {expected_cols}), got ({actual_rows}, {actual_cols})")]
    ShapeMismatch {
        expected_rows: usize,
        expected_cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },

    #[error("invalid band dimensions: {rows}x{cols} does not hold {len} values")]
    InvalidDimensions {
        rows: usize,
        cols: usize,
        len: usize,
    },

    #[error("index out of bounds: ({row}, {col}) in band of size ({rows}, {cols})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether this error was raised by input validation, before any
    /// elementwise evaluation took place.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::UnknownIndex { .. }
                | Error::MissingBands { .. }
                | Error::ShapeMismatch { .. }
                | Error::InvalidDimensions { .. }
        )
    }
}

/// Result type alias for eocube operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_index_message_names_token() {
        let err = Error::UnknownIndex {
            name: "not_an_index".into(),
        };
        assert!(err.to_string().contains("not_an_index"));
        assert!(err.is_validation());
    }

    #[test]
    fn missing_bands_message_names_all_bands() {
        let err = Error::MissingBands {
            index: "bsi".into(),
            missing: vec!["swir_1".into(), "blue".into()],
            available: vec!["red".into(), "nir".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("swir_1"));
        assert!(msg.contains("blue"));
        assert!(msg.contains("bsi"));
    }

    #[test]
    fn out_of_bounds_is_not_validation() {
        let err = Error::IndexOutOfBounds {
            row: 9,
            col: 0,
            rows: 3,
            cols: 3,
        };
        assert!(!err.is_validation());
    }
}
