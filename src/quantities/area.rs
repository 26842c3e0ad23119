use crate::quantity::{DimensionalScalar, DimensionalVector, kind};
use crate::units::AreaUnit;

kind!(
    /// Extent of a surface.
    AreaKind, "Area", "AreaVector", AreaUnit
);

pub type Area<N = f64> = DimensionalScalar<AreaKind, N>;

/// Oriented area. The direction is the surface normal.
pub type AreaVector<N = f64> = DimensionalVector<AreaKind, N>;
