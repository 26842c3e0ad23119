use super::direction::rescale;
use super::{DimensionalKind, DimensionalScalar, Direction, Record};
use crate::error::QuantityError;
use crate::format::{self, Dialect, FormatSettings};
use crate::numeric::{self, Numeric};
use crate::quantities::Angle;
use crate::units::{self, StaticUnit, Unit};
use nalgebra as na;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A three-component vector quantity with a unit category.
///
/// All components share one unit; conversion scales them uniformly. The
/// payload is held in the standard unit and occupies exactly three `N`.
#[repr(transparent)]
pub struct DimensionalVector<K, N = f64> {
    value: na::Vector3<N>,
    kind: PhantomData<K>,
}

impl<K: DimensionalKind, N: Numeric> DimensionalVector<K, N> {
    #[inline]
    pub fn new(value: na::Vector3<N>, unit: K::Unit) -> Self {
        Self::from_standard(units::vector_to_standard(value, unit))
    }

    pub fn from_components(x: N, y: N, z: N, unit: K::Unit) -> Self {
        Self::new(na::Vector3::new(x, y, z), unit)
    }

    #[inline]
    pub fn create<U: StaticUnit<Unit = K::Unit>>(value: na::Vector3<N>) -> Self {
        Self::from_standard(value * numeric::constant::<N>(U::FACTOR))
    }

    pub fn zero() -> Self {
        Self::from_standard(na::Vector3::zeros())
    }

    #[inline]
    pub(crate) const fn from_standard(value: na::Vector3<N>) -> Self {
        Self {
            value,
            kind: PhantomData,
        }
    }

    /// Vector of length `magnitude` pointing along `direction`.
    pub fn from_magnitude_direction(
        magnitude: DimensionalScalar<K, N>,
        direction: Direction<N>,
    ) -> Self {
        Self::from_standard(direction.value() * magnitude.value())
    }

    #[inline]
    pub fn value(&self) -> na::Vector3<N> {
        self.value
    }

    #[inline]
    pub fn value_in(&self, unit: K::Unit) -> na::Vector3<N> {
        units::vector_from_standard(self.value, unit)
    }

    #[inline]
    pub fn static_value<U: StaticUnit<Unit = K::Unit>>(&self) -> na::Vector3<N> {
        self.value / numeric::constant::<N>(U::FACTOR)
    }

    /// Direct access to the standard-unit payload.
    #[inline]
    pub fn value_mut(&mut self) -> &mut na::Vector3<N> {
        &mut self.value
    }

    #[inline]
    pub fn set_value(&mut self, value: na::Vector3<N>) {
        self.value = value;
    }

    pub fn x(&self) -> DimensionalScalar<K, N> {
        DimensionalScalar::from_standard(self.value.x)
    }

    pub fn y(&self) -> DimensionalScalar<K, N> {
        DimensionalScalar::from_standard(self.value.y)
    }

    pub fn z(&self) -> DimensionalScalar<K, N> {
        DimensionalScalar::from_standard(self.value.z)
    }

    /// Euclidean norm, as a scalar of the same kind. Exact to rounding over
    /// the whole finite range.
    pub fn magnitude(&self) -> DimensionalScalar<K, N> {
        let norm = match rescale(&self.value, K::VECTOR_NAME) {
            Ok((scale, scaled)) => scale * scaled.norm(),
            // Zero stays zero, infinities and NaN propagate.
            Err(_) => self.value.norm(),
        };
        DimensionalScalar::from_standard(norm)
    }

    pub fn direction(&self) -> Result<Direction<N>, QuantityError> {
        Direction::from_vector(self.value).map_err(|e| match e {
            QuantityError::NonFinite(_) => QuantityError::NonFinite(K::VECTOR_NAME),
            _ => QuantityError::ZeroMagnitude(K::VECTOR_NAME),
        })
    }

    /// Angle between this vector and another vector of any kind, in `[0, pi]`.
    ///
    /// # Errors
    ///
    /// [`QuantityError::ZeroMagnitude`] if either vector is zero, since the
    /// angle is undefined there, and [`QuantityError::NonFinite`] if either
    /// has an infinite or NaN component.
    pub fn angle<K2: DimensionalKind>(
        &self,
        other: &DimensionalVector<K2, N>,
    ) -> Result<Angle<N>, QuantityError> {
        let (_, lhs) = rescale(&self.value, K::VECTOR_NAME)?;
        let (_, rhs) = rescale(&other.value, K2::VECTOR_NAME)?;

        let sine = lhs.cross(&rhs).norm();
        let cosine = lhs.dot(&rhs);
        Ok(Angle::from_standard(na::RealField::atan2(sine, cosine)))
    }

    pub fn cast<M: Numeric>(self) -> DimensionalVector<K, M> {
        DimensionalVector::from_standard(self.value.map(numeric::cast))
    }

    pub fn render(&self, dialect: Dialect, unit: K::Unit, settings: &FormatSettings) -> String {
        format::vector(dialect, &self.value_in(unit), Some(unit.abbreviation()), settings)
    }

    pub fn print(&self) -> String {
        self.print_in(K::Unit::STANDARD)
    }

    pub fn print_in(&self, unit: K::Unit) -> String {
        self.render(Dialect::Plain, unit, &FormatSettings::DEFAULT)
    }

    pub fn json(&self) -> String {
        self.json_in(K::Unit::STANDARD)
    }

    pub fn json_in(&self, unit: K::Unit) -> String {
        self.render(Dialect::Json, unit, &FormatSettings::DEFAULT)
    }

    pub fn xml(&self) -> String {
        self.xml_in(K::Unit::STANDARD)
    }

    pub fn xml_in(&self, unit: K::Unit) -> String {
        self.render(Dialect::Xml, unit, &FormatSettings::DEFAULT)
    }

    pub fn yaml(&self) -> String {
        self.yaml_in(K::Unit::STANDARD)
    }

    pub fn yaml_in(&self, unit: K::Unit) -> String {
        self.render(Dialect::Yaml, unit, &FormatSettings::DEFAULT)
    }
}

impl<K, N: Copy> Clone for DimensionalVector<K, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, N: Copy> Copy for DimensionalVector<K, N> {}

impl<K: DimensionalKind, N: Numeric> Default for DimensionalVector<K, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<K: DimensionalKind, N: Numeric> fmt::Debug for DimensionalVector<K, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}([{:?}, {:?}, {:?}] {})",
            K::VECTOR_NAME,
            self.value.x,
            self.value.y,
            self.value.z,
            K::Unit::STANDARD
        )
    }
}

impl<K: DimensionalKind, N: Numeric> fmt::Display for DimensionalVector<K, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print())
    }
}

impl<K, N: Numeric> PartialEq for DimensionalVector<K, N> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/// Lexicographic on `(x, y, z)`.
impl<K, N: Numeric> PartialOrd for DimensionalVector<K, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        for (lhs, rhs) in self.value.iter().zip(other.value.iter()) {
            match lhs.partial_cmp(rhs)? {
                Ordering::Equal => continue,
                ordering => return Some(ordering),
            }
        }
        Some(Ordering::Equal)
    }
}

impl<K, N: Numeric> Hash for DimensionalVector<K, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for component in self.value.iter() {
            state.write_u64(component.hash_bits());
        }
    }
}

impl<K: DimensionalKind, N: Numeric> Add for DimensionalVector<K, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_standard(self.value + rhs.value)
    }
}

impl<K: DimensionalKind, N: Numeric> AddAssign for DimensionalVector<K, N> {
    fn add_assign(&mut self, rhs: Self) {
        self.value += rhs.value;
    }
}

impl<K: DimensionalKind, N: Numeric> Sub for DimensionalVector<K, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_standard(self.value - rhs.value)
    }
}

impl<K: DimensionalKind, N: Numeric> SubAssign for DimensionalVector<K, N> {
    fn sub_assign(&mut self, rhs: Self) {
        self.value -= rhs.value;
    }
}

impl<K: DimensionalKind, N: Numeric> Neg for DimensionalVector<K, N> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_standard(-self.value)
    }
}

impl<K: DimensionalKind, N: Numeric> Sum for DimensionalVector<K, N> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |total, item| total + item)
    }
}

macro_rules! impl_number_ops {
    ($($number:ty),*) => {$(
        impl<K: DimensionalKind> Mul<$number> for DimensionalVector<K, $number> {
            type Output = Self;

            fn mul(self, rhs: $number) -> Self {
                Self::from_standard(self.value * rhs)
            }
        }

        impl<K: DimensionalKind> Mul<DimensionalVector<K, $number>> for $number {
            type Output = DimensionalVector<K, $number>;

            fn mul(self, rhs: DimensionalVector<K, $number>) -> Self::Output {
                rhs * self
            }
        }

        impl<K: DimensionalKind> MulAssign<$number> for DimensionalVector<K, $number> {
            fn mul_assign(&mut self, rhs: $number) {
                self.value *= rhs;
            }
        }

        impl<K: DimensionalKind> Div<$number> for DimensionalVector<K, $number> {
            type Output = Self;

            fn div(self, rhs: $number) -> Self {
                Self::from_standard(self.value / rhs)
            }
        }

        impl<K: DimensionalKind> DivAssign<$number> for DimensionalVector<K, $number> {
            fn div_assign(&mut self, rhs: $number) {
                self.value /= rhs;
            }
        }
    )*};
}

impl_number_ops!(f32, f64);

impl<K: DimensionalKind, N: Numeric> Serialize for DimensionalVector<K, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Record {
            value: [self.value.x, self.value.y, self.value.z],
            unit: K::Unit::STANDARD,
        }
        .serialize(serializer)
    }
}

impl<'de, K: DimensionalKind, N: Numeric> Deserialize<'de> for DimensionalVector<K, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = Record::<[N; 3], K::Unit>::deserialize(deserializer)?;
        Ok(Self::new(na::Vector3::from(record.value), record.unit))
    }
}
