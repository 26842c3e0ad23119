use crate::quantity::{DimensionalScalar, DimensionalVector, kind};
use crate::units::LengthUnit;

kind!(LengthKind, "Length", "Displacement", LengthUnit);

pub type Length<N = f64> = DimensionalScalar<LengthKind, N>;

pub type Displacement<N = f64> = DimensionalVector<LengthKind, N>;
