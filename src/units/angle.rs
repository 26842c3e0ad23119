use crate::dimension::DimensionlessDimension;
use std::f64::consts::PI;

unit_category! {
    /// Units of plane angle. Canonical unit: radian. Angles are
    /// dimensionless but still carry a unit.
    AngleUnit: DimensionlessDimension {
        Radian => "rad",
        Degree => ("deg", PI / 180.0),
        Arcminute => ("arcmin", PI / 10_800.0),
        Arcsecond => ("arcsec", PI / 648_000.0),
        Revolution => ("rev", 2.0 * PI),
        Gradian => ("grad", PI / 200.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Unit;
    use approx::assert_relative_eq;
    use uom::si::angle::{degree, minute as angle_minute, radian, second as angle_second};
    use uom::si::f64::Angle;

    #[test]
    fn test_factors_match_uom() {
        let cases = [
            (AngleUnit::Radian, Angle::new::<radian>(1.0)),
            (AngleUnit::Degree, Angle::new::<degree>(1.0)),
            (AngleUnit::Arcminute, Angle::new::<angle_minute>(1.0)),
            (AngleUnit::Arcsecond, Angle::new::<angle_second>(1.0)),
        ];

        for (unit, reference) in cases {
            assert_relative_eq!(unit.factor(), reference.value, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_full_turn() {
        assert_relative_eq!(AngleUnit::Revolution.factor(), 360.0 * AngleUnit::Degree.factor());
        assert_relative_eq!(AngleUnit::Revolution.factor(), 400.0 * AngleUnit::Gradian.factor());
    }
}
