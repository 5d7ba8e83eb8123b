//! Band element trait for generic cell values

use num_traits::{NumCast, Zero};
use std::fmt::Debug;

/// Trait for types that can be stored in a band cell.
///
/// Reflectance bands use floating-point elements (`f32`/`f64`); mask
/// bands use small unsigned integers whose values are category codes.
pub trait BandElement:
    Copy + Clone + Debug + PartialOrd + PartialEq + NumCast + Zero + Send + Sync + 'static
{
    /// Default no-data value for this type
    fn default_nodata() -> Self;

    /// Check if this value represents no-data
    fn is_nodata(&self, nodata: Option<Self>) -> bool;
}

macro_rules! impl_band_element_int {
    ($t:ty) => {
        impl BandElement for $t {
            fn default_nodata() -> Self {
                <$t>::MAX
            }

            fn is_nodata(&self, nodata: Option<Self>) -> bool {
                match nodata {
                    Some(nd) => *self == nd,
                    None => false,
                }
            }
        }
    };
}

macro_rules! impl_band_element_float {
    ($t:ty) => {
        impl BandElement for $t {
            fn default_nodata() -> Self {
                <$t>::NAN
            }

            fn is_nodata(&self, nodata: Option<Self>) -> bool {
                if self.is_nan() {
                    return true;
                }
                match nodata {
                    Some(nd) => (self - nd).abs() < <$t>::EPSILON,
                    None => false,
                }
            }
        }
    };
}

impl_band_element_int!(u8);
impl_band_element_int!(u16);
impl_band_element_int!(u32);
impl_band_element_int!(i16);
impl_band_element_int!(i32);
impl_band_element_float!(f32);
impl_band_element_float!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_nan_is_always_nodata() {
        assert!(f64::NAN.is_nodata(None));
        assert!(f64::NAN.is_nodata(Some(-9999.0)));
    }

    #[test]
    fn int_nodata_requires_explicit_value() {
        let code: u8 = 255;
        assert!(!code.is_nodata(None));
        assert!(code.is_nodata(Some(255)));
        assert!(!code.is_nodata(Some(0)));
    }

    #[test]
    fn float_explicit_nodata_matches() {
        let v: f64 = -9999.0;
        assert!(v.is_nodata(Some(-9999.0)));
        assert!(!0.5_f64.is_nodata(Some(-9999.0)));
    }
}
