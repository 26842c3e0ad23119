use super::{DimensionalKind, DimensionalVector, Direction, Record};
use crate::format::{self, Dialect, FormatSettings};
use crate::numeric::{self, Numeric};
use crate::units::{self, StaticUnit, Unit};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A scalar quantity with a unit category.
///
/// `K` names the quantity (and through it the unit category and dimension),
/// `N` is the floating-point payload type. The payload is held in the
/// standard unit of `K::Unit`; the in-memory footprint is exactly one `N`.
///
/// ```
/// use quantity_core::quantities::Area;
/// use quantity_core::units::{area, AreaUnit};
///
/// let area: Area = Area::new(1.5, AreaUnit::SquareMillimetre);
/// assert_eq!(area, Area::create::<area::SquareMillimetre>(1.5));
/// assert!((area.value() - 1.5e-6).abs() < 1e-20);
/// ```
#[repr(transparent)]
pub struct DimensionalScalar<K, N = f64> {
    value: N,
    kind: PhantomData<K>,
}

impl<K: DimensionalKind, N: Numeric> DimensionalScalar<K, N> {
    /// Construct from a value expressed in `unit`.
    #[inline]
    pub fn new(value: N, unit: K::Unit) -> Self {
        Self::from_standard(units::to_standard(value, unit))
    }

    /// Construct from a value in a unit selected at compile time.
    #[inline]
    pub fn create<U: StaticUnit<Unit = K::Unit>>(value: N) -> Self {
        Self::from_standard(value * numeric::constant::<N>(U::FACTOR))
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_standard(numeric::constant(0.0))
    }

    /// Wrap a value that is already in the standard unit.
    #[inline]
    pub(crate) const fn from_standard(value: N) -> Self {
        Self {
            value,
            kind: PhantomData,
        }
    }

    /// Payload in the standard unit.
    #[inline]
    pub fn value(&self) -> N {
        self.value
    }

    #[inline]
    pub fn value_in(&self, unit: K::Unit) -> N {
        units::from_standard(self.value, unit)
    }

    /// Payload in a unit selected at compile time.
    #[inline]
    pub fn static_value<U: StaticUnit<Unit = K::Unit>>(&self) -> N {
        self.value / numeric::constant::<N>(U::FACTOR)
    }

    /// Direct access to the standard-unit payload. Whatever is written must
    /// already be in the standard unit.
    #[inline]
    pub fn value_mut(&mut self) -> &mut N {
        &mut self.value
    }

    #[inline]
    pub fn set_value(&mut self, value: N) {
        self.value = value;
    }

    /// Explicit change of floating-point precision.
    pub fn cast<M: Numeric>(self) -> DimensionalScalar<K, M> {
        DimensionalScalar::from_standard(numeric::cast(self.value))
    }

    pub fn abs(self) -> Self {
        Self::from_standard(na_abs(self.value))
    }

    pub fn render(&self, dialect: Dialect, unit: K::Unit, settings: &FormatSettings) -> String {
        format::scalar(dialect, self.value_in(unit), Some(unit.abbreviation()), settings)
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

#[inline]
fn na_abs<N: Numeric>(value: N) -> N {
    nalgebra::ComplexField::abs(value)
}

impl<K, N: Copy> Clone for DimensionalScalar<K, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, N: Copy> Copy for DimensionalScalar<K, N> {}

impl<K: DimensionalKind, N: Numeric> Default for DimensionalScalar<K, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<K: DimensionalKind, N: Numeric> fmt::Debug for DimensionalScalar<K, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?} {})", K::NAME, self.value, K::Unit::STANDARD)
    }
}

impl<K: DimensionalKind, N: Numeric> fmt::Display for DimensionalScalar<K, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print())
    }
}

impl<K, N: PartialEq> PartialEq for DimensionalScalar<K, N> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K, N: PartialOrd> PartialOrd for DimensionalScalar<K, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<K, N: Numeric> Hash for DimensionalScalar<K, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.value.hash_bits());
    }
}

impl<K: DimensionalKind, N: Numeric> Add for DimensionalScalar<K, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_standard(self.value + rhs.value)
    }
}

impl<K: DimensionalKind, N: Numeric> AddAssign for DimensionalScalar<K, N> {
    fn add_assign(&mut self, rhs: Self) {
        self.value += rhs.value;
    }
}

impl<K: DimensionalKind, N: Numeric> Sub for DimensionalScalar<K, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_standard(self.value - rhs.value)
    }
}

impl<K: DimensionalKind, N: Numeric> SubAssign for DimensionalScalar<K, N> {
    fn sub_assign(&mut self, rhs: Self) {
        self.value -= rhs.value;
    }
}

impl<K: DimensionalKind, N: Numeric> Neg for DimensionalScalar<K, N> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_standard(-self.value)
    }
}

/// Ratio of two quantities of the same kind.
impl<K: DimensionalKind, N: Numeric> Div for DimensionalScalar<K, N> {
    type Output = N;

    fn div(self, rhs: Self) -> N {
        self.value / rhs.value
    }
}

impl<K: DimensionalKind, N: Numeric> Sum for DimensionalScalar<K, N> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |total, item| total + item)
    }
}

impl<K: DimensionalKind, N: Numeric> Mul<Direction<N>> for DimensionalScalar<K, N> {
    type Output = DimensionalVector<K, N>;

    fn mul(self, direction: Direction<N>) -> DimensionalVector<K, N> {
        DimensionalVector::from_magnitude_direction(self, direction)
    }
}

macro_rules! impl_number_ops {
    ($($number:ty),*) => {$(
        impl<K: DimensionalKind> Mul<$number> for DimensionalScalar<K, $number> {
            type Output = Self;

            fn mul(self, rhs: $number) -> Self {
                Self::from_standard(self.value * rhs)
            }
        }

        impl<K: DimensionalKind> Mul<DimensionalScalar<K, $number>> for $number {
            type Output = DimensionalScalar<K, $number>;

            fn mul(self, rhs: DimensionalScalar<K, $number>) -> Self::Output {
                rhs * self
            }
        }

        impl<K: DimensionalKind> MulAssign<$number> for DimensionalScalar<K, $number> {
            fn mul_assign(&mut self, rhs: $number) {
                self.value *= rhs;
            }
        }

        impl<K: DimensionalKind> Div<$number> for DimensionalScalar<K, $number> {
            type Output = Self;

            fn div(self, rhs: $number) -> Self {
                Self::from_standard(self.value / rhs)
            }
        }

        impl<K: DimensionalKind> DivAssign<$number> for DimensionalScalar<K, $number> {
            fn div_assign(&mut self, rhs: $number) {
                self.value /= rhs;
            }
        }
    )*};
}

impl_number_ops!(f32, f64);

impl<K: DimensionalKind, N: Numeric> Serialize for DimensionalScalar<K, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Record {
            value: self.value,
            unit: K::Unit::STANDARD,
        }
        .serialize(serializer)
    }
}

/// Accepts any unit of the category and converts to the standard unit.
impl<'de, K: DimensionalKind, N: Numeric> Deserialize<'de> for DimensionalScalar<K, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = Record::<N, K::Unit>::deserialize(deserializer)?;
        Ok(Self::new(record.value, record.unit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantities::{Area, Length};
    use crate::units::{AreaUnit, LengthUnit, area, length};
    use approx::assert_relative_eq;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_stores_standard_unit() {
        let area = Area::new(1.11, AreaUnit::SquareMillimetre);
        assert_relative_eq!(area.value(), 1.11e-6, max_relative = 1e-12);
        assert_relative_eq!(area.value_in(AreaUnit::SquareMillimetre), 1.11, max_relative = 1e-12);
        assert_eq!(Area::new(1.11, AreaUnit::SquareMetre).value(), 1.11);
    }

    #[test]
    fn test_round_trip_every_unit() {
        for &unit in AreaUnit::ALL {
            let area = Area::new(1.11, unit);
            assert_relative_eq!(area.value_in(unit), 1.11, max_relative = 1e-12);
        }
        for &unit in LengthUnit::ALL {
            let length = Length::new(1.11, unit);
            assert_relative_eq!(length.value_in(unit), 1.11, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_static_unit_selection() {
        let area = Area::create::<area::SquareFoot>(2.0);
        assert_eq!(area, Area::new(2.0, AreaUnit::SquareFoot));
        assert_relative_eq!(area.static_value::<area::SquareFoot>(), 2.0, max_relative = 1e-12);
        assert_relative_eq!(area.static_value::<area::SquareInch>(), 288.0, max_relative = 1e-12);
        assert_eq!(Length::create::<length::Metre>(1.11).value(), 1.11);
    }

    #[test]
    fn test_mutation() {
        let mut length = Length::zero();
        length.set_value(2.5);
        assert_eq!(length.value(), 2.5);

        *length.value_mut() += 0.5;
        assert_eq!(length, Length::new(3.0, LengthUnit::Metre));
    }

    #[test]
    fn test_arithmetic() {
        let a = Length::new(3.0, LengthUnit::Metre);
        let b = Length::new(50.0, LengthUnit::Centimetre);

        assert_eq!(a + b, Length::new(3.5, LengthUnit::Metre));
        assert_eq!(a - b, Length::new(2.5, LengthUnit::Metre));
        assert_eq!(-a, Length::new(-3.0, LengthUnit::Metre));
        assert_eq!(a * 2.0, Length::new(6.0, LengthUnit::Metre));
        assert_eq!(2.0_f64 * a, a * 2.0);
        assert_eq!(a / 2.0, Length::new(1.5, LengthUnit::Metre));
        assert_eq!(a / b, 6.0);
        assert_eq!(Length::zero() + a, a);

        let mut c = a;
        c += b;
        c -= a;
        c *= 4.0;
        c /= 2.0;
        assert_eq!(c, Length::new(1.0, LengthUnit::Metre));

        let total: Length = [a, b, b].into_iter().sum();
        assert_eq!(total, Length::new(4.0, LengthUnit::Metre));
    }

    #[test]
    fn test_division_by_zero_follows_ieee() {
        let a = Length::<f64>::new(1.0, LengthUnit::Metre);
        assert!((a / 0.0).value().is_infinite());
        assert!((Length::<f64>::zero() / Length::zero()).is_nan());
    }

    #[test]
    fn test_comparison() {
        let small = Area::new(1.0, AreaUnit::SquareFoot);
        let large = Area::new(1.0, AreaUnit::SquareMetre);
        assert!(small < large);
        assert!(large >= small);
        assert!(small != large);

        let nan = Area::new(f64::NAN, AreaUnit::SquareMetre);
        assert_ne!(nan, nan);
        assert_eq!(nan.partial_cmp(&large), None);
    }

    #[test]
    fn test_negative_values_allowed() {
        let area = Area::new(-4.0, AreaUnit::SquareMetre);
        assert_eq!(area.value(), -4.0);
        assert_eq!(area.abs().value(), 4.0);
    }

    #[test]
    fn test_hash() {
        let a = Length::new(1.0, LengthUnit::Metre);
        assert_eq!(hash_of(&a), hash_of(&Length::new(100.0, LengthUnit::Centimetre)));
        assert_eq!(hash_of(&Length::new(0.0, LengthUnit::Metre)), hash_of(&Length::new(-0.0, LengthUnit::Metre)));
        assert_ne!(hash_of(&a), hash_of(&Length::new(2.0, LengthUnit::Metre)));
    }

    #[test]
    fn test_formatting() {
        let area = Area::new(1.11, AreaUnit::SquareMetre);
        assert_eq!(area.print(), "1.110000000000000 m^2");
        assert_eq!(area.to_string(), area.print());
        assert_eq!(area.json(), r#"{"value":1.110000000000000,"unit":"m^2"}"#);
        assert_eq!(area.xml(), "<value>1.110000000000000</value><unit>m^2</unit>");
        assert_eq!(area.yaml(), r#"{value:1.110000000000000,unit:"m^2"}"#);

        let length = Length::new(2.0, LengthUnit::Metre);
        assert_eq!(length.print_in(LengthUnit::Centimetre), "200.0000000000000 cm");
        assert_eq!(
            Length::new(123456.789, LengthUnit::Metre).print(),
            "123456.7890000000 m"
        );
        assert_eq!(
            length.json_in(LengthUnit::Kilometre),
            r#"{"value":0.002000000000000000,"unit":"km"}"#
        );
    }

    #[test]
    fn test_non_finite_json_is_null() {
        let length = Length::new(f64::INFINITY, LengthUnit::Metre);
        assert_eq!(length.json(), r#"{"value":null,"unit":"m"}"#);
        assert_eq!(length.print(), "inf m");
    }

    #[test]
    fn test_cast() {
        let length = Length::new(1.5, LengthUnit::Metre);
        let narrow: Length<f32> = length.cast();
        assert_eq!(narrow.value(), 1.5_f32);
        assert_eq!(narrow.cast::<f64>(), length);
    }

    #[test]
    fn test_layout() {
        assert_eq!(size_of::<Area<f64>>(), size_of::<f64>());
        assert_eq!(size_of::<Area<f32>>(), size_of::<f32>());
    }

    #[test]
    fn test_serde() {
        let length = Length::new(2.0, LengthUnit::Metre);
        let json = serde_json::to_string(&length).unwrap();
        assert_eq!(json, r#"{"value":2.0,"unit":"Metre"}"#);
        assert_eq!(serde_json::from_str::<Length>(&json).unwrap(), length);

        let converted: Length = serde_json::from_str(r#"{"value":3.0,"unit":"Foot"}"#).unwrap();
        assert_relative_eq!(converted.value(), 0.9144, max_relative = 1e-12);
    }
}
