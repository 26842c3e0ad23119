//! Conversions to and from [`uom`] quantities.
//!
//! Both sides keep their payload in the SI canonical unit, so converting is
//! a move of the raw value.

use crate::quantities::{Angle, Area, Frequency, Length, Speed, TemperatureDifference, Time};
use uom::si::f64 as si;

macro_rules! uom_interop {
    ($($quantity:ident <=> $uom:ident in $base:path),* $(,)?) => {$(
        impl From<si::$uom> for $quantity<f64> {
            fn from(quantity: si::$uom) -> Self {
                Self::from_standard(quantity.value)
            }
        }

        impl From<$quantity<f64>> for si::$uom {
            fn from(quantity: $quantity<f64>) -> Self {
                si::$uom::new::<$base>(quantity.value())
            }
        }
    )*};
}

uom_interop! {
    Angle <=> Angle in uom::si::angle::radian,
    Area <=> Area in uom::si::area::square_meter,
    Frequency <=> Frequency in uom::si::frequency::hertz,
    Length <=> Length in uom::si::length::meter,
    Speed <=> Velocity in uom::si::velocity::meter_per_second,
    TemperatureDifference <=> TemperatureInterval in uom::si::temperature_interval::kelvin,
    Time <=> Time in uom::si::time::second,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{AngleUnit, LengthUnit, SpeedUnit, TemperatureDifferenceUnit};
    use approx::assert_relative_eq;
    use uom::si::angle::degree;
    use uom::si::length::foot;
    use uom::si::temperature_interval::degree_fahrenheit;
    use uom::si::velocity::knot;

    #[test]
    fn test_into_uom() {
        let length = si::Length::from(Length::new(3.0, LengthUnit::Foot));
        assert_relative_eq!(length.get::<foot>(), 3.0, max_relative = 1e-12);

        let angle = si::Angle::from(Angle::new(90.0, AngleUnit::Degree));
        assert_relative_eq!(angle.get::<degree>(), 90.0, max_relative = 1e-12);
    }

    #[test]
    fn test_from_uom() {
        let speed = Speed::from(si::Velocity::new::<knot>(10.0));
        assert_relative_eq!(speed.value_in(SpeedUnit::Knot), 10.0, max_relative = 1e-12);

        let difference =
            TemperatureDifference::from(si::TemperatureInterval::new::<degree_fahrenheit>(18.0));
        assert_relative_eq!(
            difference.value_in(TemperatureDifferenceUnit::Kelvin),
            10.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_relations_agree_with_uom() {
        let width = Length::new(2.0, LengthUnit::Metre);
        let height = Length::new(3.0, LengthUnit::Foot);

        let ours = width * height;
        let theirs = si::Length::from(width) * si::Length::from(height);
        assert_relative_eq!(ours.value(), theirs.value, max_relative = 1e-12);
        assert_eq!(Area::from(si::Area::from(ours)), ours);
    }
}
