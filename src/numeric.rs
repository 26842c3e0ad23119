//! Floating-point representations a quantity can be instantiated with.

use nalgebra as na;
use serde::{Serialize, de::DeserializeOwned};

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Numeric payload of a quantity (`f32` or `f64`).
///
/// Builds on [`na::RealField`] so vector payloads can live in a
/// [`na::Vector3`]. Conversions between precisions are never implicit: use
/// the `cast` method every quantity type offers.
pub trait Numeric:
    na::RealField
    + Copy
    + Default
    + Serialize
    + DeserializeOwned
    + sealed::Sealed
{
    /// Widen (or keep) to `f64`.
    fn as_f64(self) -> f64;

    /// Bit pattern used for hashing. `-0.0` is folded onto `0.0` so values
    /// that compare equal hash equally.
    fn hash_bits(self) -> u64;
}

impl Numeric for f32 {
    #[inline]
    fn as_f64(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn hash_bits(self) -> u64 {
        let folded = if self == 0.0 { 0.0_f32 } else { self };
        u64::from(folded.to_bits())
    }
}

impl Numeric for f64 {
    #[inline]
    fn as_f64(self) -> f64 {
        self
    }

    #[inline]
    fn hash_bits(self) -> u64 {
        let folded = if self == 0.0 { 0.0_f64 } else { self };
        folded.to_bits()
    }
}

/// Convert a table constant into the payload type.
#[inline]
pub(crate) fn constant<N: Numeric>(value: f64) -> N {
    na::convert::<f64, N>(value)
}

/// Explicit precision change between payload types.
#[inline]
pub(crate) fn cast<N: Numeric, M: Numeric>(value: N) -> M {
    constant::<M>(value.as_f64())
}
