use super::Kind;
use crate::format::{self, Dialect, FormatSettings};
use crate::numeric::{self, Numeric};
use nalgebra as na;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A named quantity of dimension one (strain, ratio, ...).
///
/// Distinct kinds stay distinct types even though none of them carry a unit.
#[repr(transparent)]
pub struct DimensionlessScalar<K, N = f64> {
    value: N,
    kind: PhantomData<K>,
}

impl<K: Kind, N: Numeric> DimensionlessScalar<K, N> {
    #[inline]
    pub const fn new(value: N) -> Self {
        Self {
            value,
            kind: PhantomData,
        }
    }

    pub fn zero() -> Self {
        Self::new(numeric::constant(0.0))
    }

    /// Same as [`Self::new`]; lets generated operators build any holder
    /// through one name.
    #[inline]
    pub(crate) const fn from_standard(value: N) -> Self {
        Self::new(value)
    }

    #[inline]
    pub fn value(&self) -> N {
        self.value
    }

    #[inline]
    pub fn value_mut(&mut self) -> &mut N {
        &mut self.value
    }

    #[inline]
    pub fn set_value(&mut self, value: N) {
        self.value = value;
    }

    pub fn cast<M: Numeric>(self) -> DimensionlessScalar<K, M> {
        DimensionlessScalar::new(numeric::cast(self.value))
    }

    pub fn abs(self) -> Self {
        Self::new(na::ComplexField::abs(self.value))
    }

    pub fn sqrt(self) -> N {
        na::ComplexField::sqrt(self.value)
    }

    pub fn cbrt(self) -> N {
        na::ComplexField::cbrt(self.value)
    }

    pub fn exp(self) -> N {
        na::ComplexField::exp(self.value)
    }

    /// Natural logarithm.
    pub fn ln(self) -> N {
        na::ComplexField::ln(self.value)
    }

    pub fn log2(self) -> N {
        na::ComplexField::log2(self.value)
    }

    pub fn log10(self) -> N {
        na::ComplexField::log10(self.value)
    }

    pub fn powf(self, exponent: N) -> N {
        na::ComplexField::powf(self.value, exponent)
    }

    pub fn render(&self, dialect: Dialect, settings: &FormatSettings) -> String {
        format::scalar(dialect, self.value, None, settings)
    }

    pub fn print(&self) -> String {
        self.render(Dialect::Plain, &FormatSettings::DEFAULT)
    }

    pub fn json(&self) -> String {
        self.render(Dialect::Json, &FormatSettings::DEFAULT)
    }

    pub fn xml(&self) -> String {
        self.render(Dialect::Xml, &FormatSettings::DEFAULT)
    }

    pub fn yaml(&self) -> String {
        self.render(Dialect::Yaml, &FormatSettings::DEFAULT)
    }
}

impl<K, N: Copy> Clone for DimensionlessScalar<K, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, N: Copy> Copy for DimensionlessScalar<K, N> {}

impl<K: Kind, N: Numeric> Default for DimensionlessScalar<K, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<K: Kind, N: Numeric> fmt::Debug for DimensionlessScalar<K, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", K::NAME, self.value)
    }
}

impl<K: Kind, N: Numeric> fmt::Display for DimensionlessScalar<K, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print())
    }
}

impl<K, N: PartialEq> PartialEq for DimensionlessScalar<K, N> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K, N: PartialOrd> PartialOrd for DimensionlessScalar<K, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<K, N: Numeric> Hash for DimensionlessScalar<K, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.value.hash_bits());
    }
}

impl<K: Kind, N: Numeric> Add for DimensionlessScalar<K, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value)
    }
}

impl<K: Kind, N: Numeric> AddAssign for DimensionlessScalar<K, N> {
    fn add_assign(&mut self, rhs: Self) {
        self.value += rhs.value;
    }
}

impl<K: Kind, N: Numeric> Sub for DimensionlessScalar<K, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value)
    }
}

impl<K: Kind, N: Numeric> SubAssign for DimensionlessScalar<K, N> {
    fn sub_assign(&mut self, rhs: Self) {
        self.value -= rhs.value;
    }
}

impl<K: Kind, N: Numeric> Neg for DimensionlessScalar<K, N> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}

impl<K: Kind, N: Numeric> Div for DimensionlessScalar<K, N> {
    type Output = N;

    fn div(self, rhs: Self) -> N {
        self.value / rhs.value
    }
}

impl<K: Kind, N: Numeric> Sum for DimensionlessScalar<K, N> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |total, item| total + item)
    }
}

macro_rules! impl_number_ops {
    ($($number:ty),*) => {$(
        impl<K: Kind> Mul<$number> for DimensionlessScalar<K, $number> {
            type Output = Self;

            fn mul(self, rhs: $number) -> Self {
                Self::new(self.value * rhs)
            }
        }

        impl<K: Kind> Mul<DimensionlessScalar<K, $number>> for $number {
            type Output = DimensionlessScalar<K, $number>;

            fn mul(self, rhs: DimensionlessScalar<K, $number>) -> Self::Output {
                rhs * self
            }
        }

        impl<K: Kind> MulAssign<$number> for DimensionlessScalar<K, $number> {
            fn mul_assign(&mut self, rhs: $number) {
                self.value *= rhs;
            }
        }

        impl<K: Kind> Div<$number> for DimensionlessScalar<K, $number> {
            type Output = Self;

            fn div(self, rhs: $number) -> Self {
                Self::new(self.value / rhs)
            }
        }

        impl<K: Kind> DivAssign<$number> for DimensionlessScalar<K, $number> {
            fn div_assign(&mut self, rhs: $number) {
                self.value /= rhs;
            }
        }
    )*};
}

impl_number_ops!(f32, f64);

/// Serialized as the bare number.
impl<K: Kind, N: Numeric> Serialize for DimensionlessScalar<K, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, K: Kind, N: Numeric> Deserialize<'de> for DimensionlessScalar<K, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        N::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantities::ScalarStrain;
    use approx::assert_relative_eq;

    #[test]
    fn test_arithmetic() {
        let a = ScalarStrain::new(0.25);
        let b = ScalarStrain::new(0.75);

        assert_eq!(a + b, ScalarStrain::new(1.0));
        assert_eq!(b - a, ScalarStrain::new(0.5));
        assert_eq!(-a, ScalarStrain::new(-0.25));
        assert_eq!(a * 4.0, ScalarStrain::new(1.0));
        assert_eq!(4.0_f64 * a, a * 4.0);
        assert_eq!(b / a, 3.0);

        let mut c = a;
        c += b;
        c -= a;
        c *= 2.0;
        c /= 3.0;
        assert_eq!(c, ScalarStrain::new(0.5));
    }

    #[test]
    fn test_math() {
        assert_eq!(ScalarStrain::new(-2.0).abs(), ScalarStrain::new(2.0));
        assert_relative_eq!(ScalarStrain::new(16.0).sqrt(), 4.0);
        assert_relative_eq!(ScalarStrain::new(27.0).cbrt(), 3.0);
        assert_relative_eq!(ScalarStrain::new(0.0).exp(), 1.0);
        assert_relative_eq!(ScalarStrain::new(1.0).ln(), 0.0);
        assert_relative_eq!(ScalarStrain::new(8.0).log2(), 3.0);
        assert_relative_eq!(ScalarStrain::new(1000.0).log10(), 3.0);
        assert_relative_eq!(ScalarStrain::new(2.0).powf(10.0), 1024.0);
    }

    #[test]
    fn test_formatting_has_no_unit() {
        let strain = ScalarStrain::new(0.5);
        assert_eq!(strain.print(), "0.5000000000000000");
        assert_eq!(strain.json(), "0.5000000000000000");
        assert_eq!(strain.xml(), "0.5000000000000000");
        assert_eq!(format!("{strain:?}"), "ScalarStrain(0.5)");
    }

    #[test]
    fn test_serde() {
        let strain = ScalarStrain::new(0.125);
        let json = serde_json::to_string(&strain).unwrap();
        assert_eq!(json, "0.125");
        assert_eq!(serde_json::from_str::<ScalarStrain>(&json).unwrap(), strain);
    }

    #[test]
    fn test_layout() {
        assert_eq!(size_of::<ScalarStrain<f64>>(), size_of::<f64>());
        assert_eq!(size_of::<ScalarStrain<f32>>(), size_of::<f32>());
    }
}
