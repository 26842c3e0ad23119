//! Concrete quantity types.
//!
//! Each quantity is a kind tag plus type aliases over the generic holders in
//! [`crate::quantity`]. Adding a quantity means adding a kind and, if it
//! needs one, a unit category; no holder code changes.

mod angle;
mod area;
mod frequency;
mod length;
mod speed;
mod strain;
mod temperature;
mod thermal_expansion;
mod time;

pub use angle::{Angle, AngleKind};
pub use area::{Area, AreaKind, AreaVector};
pub use frequency::{Frequency, FrequencyKind};
pub use length::{Displacement, Length, LengthKind};
pub use speed::{Speed, SpeedKind, Velocity};
pub use strain::{ScalarStrain, ScalarStrainKind};
pub use temperature::{TemperatureDifference, TemperatureDifferenceKind};
pub use thermal_expansion::{
    LinearThermalExpansionCoefficient, LinearThermalExpansionCoefficientKind,
};
pub use time::{Time, TimeKind};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::PhysicalDimension;
    use crate::quantity::PhysicalQuantity;

    #[test]
    fn test_names() {
        assert_eq!(Area::<f64>::NAME, "Area");
        assert_eq!(AreaVector::<f64>::NAME, "AreaVector");
        assert_eq!(Displacement::<f64>::NAME, "Displacement");
        assert_eq!(Velocity::<f64>::NAME, "Velocity");
        assert_eq!(ScalarStrain::<f64>::NAME, "ScalarStrain");
        assert_eq!(f64::NAME, "Number");
    }

    #[test]
    fn test_dimensions() {
        assert_eq!(Length::<f64>::DIMENSION, PhysicalDimension::new(1, 0, 0, 0, 0, 0, 0));
        assert_eq!(Area::<f64>::DIMENSION, PhysicalDimension::new(2, 0, 0, 0, 0, 0, 0));
        assert_eq!(Speed::<f64>::DIMENSION, PhysicalDimension::new(1, 0, -1, 0, 0, 0, 0));
        assert_eq!(Velocity::<f64>::DIMENSION, Speed::<f64>::DIMENSION);
        assert_eq!(Frequency::<f64>::DIMENSION, PhysicalDimension::new(0, 0, -1, 0, 0, 0, 0));
        assert_eq!(
            LinearThermalExpansionCoefficient::<f64>::DIMENSION,
            TemperatureDifference::<f64>::DIMENSION.inverse()
        );
        assert!(Angle::<f64>::DIMENSION.is_dimensionless());
        assert!(ScalarStrain::<f64>::DIMENSION.is_dimensionless());
    }
}
