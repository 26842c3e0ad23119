use crate::quantity::{DimensionalScalar, DimensionalVector, kind};
use crate::units::SpeedUnit;

kind!(SpeedKind, "Speed", "Velocity", SpeedUnit);

pub type Speed<N = f64> = DimensionalScalar<SpeedKind, N>;

pub type Velocity<N = f64> = DimensionalVector<SpeedKind, N>;
