//! Unit enumerations and their conversion tables.
//!
//! Every unit category is a closed enumeration implementing [`Unit`]. Each
//! enumerator also gets a zero-sized marker type implementing [`StaticUnit`]
//! so the unit can be picked at compile time (`Area::create::<SquareMillimetre>(1.0)`).
//!
//! Factors are `const` data: the number of canonical units in one of the
//! given unit. All conversions are linear about zero.

use crate::dimension::Dimension;
use serde::{Serialize, de::DeserializeOwned};
use std::fmt;
use std::hash::Hash;

/// A closed set of measurement units for one physical-dimension category.
pub trait Unit:
    Copy
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + fmt::Display
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    /// Dimension every unit of this category measures.
    type Dimension: Dimension;

    /// Canonical unit; quantities store their payload in it.
    const STANDARD: Self;

    /// Every member of the category, standard unit first.
    const ALL: &'static [Self];

    /// Canonical units per one of `self`.
    fn factor(self) -> f64;

    fn abbreviation(self) -> &'static str;
}

/// Zero-sized marker selecting a unit at compile time.
pub trait StaticUnit: Copy + Default + fmt::Debug + 'static {
    type Unit: Unit;

    const UNIT: Self::Unit;

    const FACTOR: f64;
}

/// Declares a unit category: the enumeration, its [`Unit`] impl, `Display`,
/// and one [`StaticUnit`] marker per enumerator. The first entry is the
/// standard unit and has a factor of exactly one.
macro_rules! unit_category {
    (
        $(#[$meta:meta])*
        $unit:ident: $dimension:ty {
            $standard:ident => $standard_abbreviation:literal,
            $($variant:ident => ($abbreviation:literal, $factor:expr)),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        pub enum $unit {
            $standard,
            $($variant,)*
        }

        impl $crate::units::Unit for $unit {
            type Dimension = $dimension;

            const STANDARD: Self = Self::$standard;

            const ALL: &'static [Self] = &[Self::$standard, $(Self::$variant,)*];

            #[inline]
            fn factor(self) -> f64 {
                match self {
                    Self::$standard => 1.0,
                    $(Self::$variant => $factor,)*
                }
            }

            fn abbreviation(self) -> &'static str {
                match self {
                    Self::$standard => $standard_abbreviation,
                    $(Self::$variant => $abbreviation,)*
                }
            }
        }

        impl std::fmt::Display for $unit {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::units::Unit::abbreviation(*self))
            }
        }

        #[doc = concat!("`", $standard_abbreviation, "` (standard)")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $standard;

        impl $crate::units::StaticUnit for $standard {
            type Unit = $unit;
            const UNIT: $unit = $unit::$standard;
            const FACTOR: f64 = 1.0;
        }

        $(
            #[doc = concat!("`", $abbreviation, "`")]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
            pub struct $variant;

            impl $crate::units::StaticUnit for $variant {
                type Unit = $unit;
                const UNIT: $unit = $unit::$variant;
                const FACTOR: f64 = $factor;
            }
        )*
    };
}

pub mod angle;
pub mod area;
pub mod conversion;
pub mod frequency;
pub mod length;
pub mod speed;
pub mod temperature;
pub mod thermal_expansion;
pub mod time;

pub use angle::AngleUnit;
pub use area::AreaUnit;
pub use conversion::*;
pub use frequency::FrequencyUnit;
pub use length::LengthUnit;
pub use speed::SpeedUnit;
pub use temperature::TemperatureDifferenceUnit;
pub use thermal_expansion::ThermalExpansionUnit;
pub use time::TimeUnit;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_category_well_formed<U: Unit>() {
        assert_eq!(U::ALL[0], U::STANDARD);
        assert_eq!(U::STANDARD.factor(), 1.0);

        for (index, unit) in U::ALL.iter().enumerate() {
            assert!(unit.factor().is_finite() && unit.factor() > 0.0, "{unit:?}");
            assert!(!unit.abbreviation().is_empty());
            assert_eq!(unit.to_string(), unit.abbreviation());
            // No duplicate members or abbreviations.
            for other in &U::ALL[index + 1..] {
                assert_ne!(unit, other);
                assert_ne!(unit.abbreviation(), other.abbreviation());
            }
        }
    }

    #[test]
    fn test_categories_well_formed() {
        assert_category_well_formed::<AngleUnit>();
        assert_category_well_formed::<AreaUnit>();
        assert_category_well_formed::<FrequencyUnit>();
        assert_category_well_formed::<LengthUnit>();
        assert_category_well_formed::<SpeedUnit>();
        assert_category_well_formed::<TemperatureDifferenceUnit>();
        assert_category_well_formed::<ThermalExpansionUnit>();
        assert_category_well_formed::<TimeUnit>();
    }

    #[test]
    fn test_static_unit_matches_runtime_factor() {
        assert_eq!(area::SquareMillimetre::UNIT, AreaUnit::SquareMillimetre);
        assert_eq!(area::SquareMillimetre::FACTOR, AreaUnit::SquareMillimetre.factor());
        assert_eq!(length::Foot::FACTOR, LengthUnit::Foot.factor());
        assert_eq!(angle::Radian::FACTOR, 1.0);
    }
}
