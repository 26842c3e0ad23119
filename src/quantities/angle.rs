use crate::numeric::Numeric;
use crate::quantity::{DimensionalScalar, kind};
use crate::units::AngleUnit;
use nalgebra as na;

kind!(AngleKind, "Angle", "AngleVector", AngleUnit);

/// Plane angle, held in radians.
pub type Angle<N = f64> = DimensionalScalar<AngleKind, N>;

impl<N: Numeric> Angle<N> {
    pub fn sin(self) -> N {
        na::ComplexField::sin(self.value())
    }

    pub fn cos(self) -> N {
        na::ComplexField::cos(self.value())
    }

    pub fn tan(self) -> N {
        na::ComplexField::tan(self.value())
    }
}
