use crate::quantity::{DimensionlessScalar, kind};

kind!(
    /// Relative change in length.
    ScalarStrainKind, "ScalarStrain", "StrainVector"
);

pub type ScalarStrain<N = f64> = DimensionlessScalar<ScalarStrainKind, N>;
