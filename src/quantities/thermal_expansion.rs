use crate::quantity::{DimensionalScalar, kind};
use crate::units::ThermalExpansionUnit;

kind!(
    LinearThermalExpansionCoefficientKind,
    "LinearThermalExpansionCoefficient",
    "LinearThermalExpansionCoefficientVector",
    ThermalExpansionUnit
);

/// Strain per unit of temperature change.
pub type LinearThermalExpansionCoefficient<N = f64> =
    DimensionalScalar<LinearThermalExpansionCoefficientKind, N>;
