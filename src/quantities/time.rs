use crate::quantity::{DimensionalScalar, kind};
use crate::units::TimeUnit;

kind!(TimeKind, "Time", "TimeVector", TimeUnit);

/// Duration. Not a point in time.
pub type Time<N = f64> = DimensionalScalar<TimeKind, N>;
