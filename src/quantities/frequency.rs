use crate::quantity::{DimensionalScalar, kind};
use crate::units::FrequencyUnit;

kind!(FrequencyKind, "Frequency", "FrequencyVector", FrequencyUnit);

pub type Frequency<N = f64> = DimensionalScalar<FrequencyKind, N>;
