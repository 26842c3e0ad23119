use crate::quantity::{DimensionalScalar, kind};
use crate::units::TemperatureDifferenceUnit;

kind!(
    /// Temperature interval. Offsets between scales do not apply, so one
    /// degree Celsius equals one kelvin.
    TemperatureDifferenceKind,
    "TemperatureDifference",
    "TemperatureGradient",
    TemperatureDifferenceUnit
);

pub type TemperatureDifference<N = f64> = DimensionalScalar<TemperatureDifferenceKind, N>;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_interval_scales() {
        let difference = TemperatureDifference::new(9.0, TemperatureDifferenceUnit::Fahrenheit);
        assert_relative_eq!(difference.value(), 5.0, max_relative = 1e-12);
        assert_relative_eq!(
            difference.value_in(TemperatureDifferenceUnit::Celsius),
            5.0,
            max_relative = 1e-12
        );
    }
}
