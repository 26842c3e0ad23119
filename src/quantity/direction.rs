use super::{DimensionalKind, DimensionalScalar, DimensionalVector};
use crate::error::QuantityError;
use crate::format::{self, Dialect, FormatSettings};
use crate::numeric::{self, Numeric};
use crate::quantities::Angle;
use nalgebra as na;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Mul, Neg};

/// Unit-magnitude dimensionless 3-vector.
///
/// Projects a scalar quantity onto a vector quantity of the same kind:
/// `Area * Direction` and `Direction * Area` both give an `AreaVector`.
#[derive(Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Direction<N: Numeric = f64> {
    value: na::Unit<na::Vector3<N>>,
}

impl<N: Numeric> Direction<N> {
    /// Normalise `(x, y, z)`. Fails for the zero vector.
    pub fn new(x: N, y: N, z: N) -> Result<Self, QuantityError> {
        Self::from_vector(na::Vector3::new(x, y, z))
    }

    /// Normalise any finite non-zero vector, whatever its scale.
    pub fn from_vector(vector: na::Vector3<N>) -> Result<Self, QuantityError> {
        let (_, scaled) = rescale(&vector, "Direction")?;
        Ok(Self {
            value: na::Unit::new_normalize(scaled),
        })
    }

    pub fn unit_x() -> Self {
        Self {
            value: na::Vector3::x_axis(),
        }
    }

    pub fn unit_y() -> Self {
        Self {
            value: na::Vector3::y_axis(),
        }
    }

    pub fn unit_z() -> Self {
        Self {
            value: na::Vector3::z_axis(),
        }
    }

    pub fn value(&self) -> na::Vector3<N> {
        self.value.into_inner()
    }

    pub fn x(&self) -> N {
        self.value.x
    }

    pub fn y(&self) -> N {
        self.value.y
    }

    pub fn z(&self) -> N {
        self.value.z
    }

    pub fn dot(&self, other: &Self) -> N {
        self.value().dot(&other.value())
    }

    /// Cross product, normalised. Fails for parallel directions.
    pub fn cross(&self, other: &Self) -> Result<Self, QuantityError> {
        Self::from_vector(self.value().cross(&other.value()))
    }

    pub fn angle(&self, other: &Self) -> Angle<N> {
        Angle::from_standard(unit_angle(self.dot(other)))
    }

    pub fn cast<M: Numeric>(self) -> Direction<M> {
        Direction {
            value: na::Unit::new_unchecked(self.value.into_inner().map(numeric::cast)),
        }
    }

    pub fn render(&self, dialect: Dialect, settings: &FormatSettings) -> String {
        format::vector(dialect, &self.value(), None, settings)
    }

    pub fn print(&self) -> String {
        self.render(Dialect::Plain, &FormatSettings::DEFAULT)
    }

    pub fn json(&self) -> String {
        self.render(Dialect::Json, &FormatSettings::DEFAULT)
    }

    pub fn xml(&self) -> String {
        self.render(Dialect::Xml, &FormatSettings::DEFAULT)
    }

    pub fn yaml(&self) -> String {
        self.render(Dialect::Yaml, &FormatSettings::DEFAULT)
    }
}

/// Split `vector` into its largest absolute component and the vector divided
/// by it. The scaled vector has components in `[-1, 1]` and one of magnitude
/// one, so squaring it neither overflows nor underflows.
pub(crate) fn rescale<N: Numeric>(
    vector: &na::Vector3<N>,
    name: &'static str,
) -> Result<(N, na::Vector3<N>), QuantityError> {
    if !vector.iter().all(|component| na::ComplexField::is_finite(component)) {
        return Err(QuantityError::NonFinite(name));
    }

    let scale = vector
        .iter()
        .map(|&component| na::ComplexField::abs(component))
        .fold(numeric::constant::<N>(0.0), na::RealField::max);
    if scale == numeric::constant(0.0) {
        return Err(QuantityError::ZeroMagnitude(name));
    }

    Ok((scale, vector / scale))
}

/// `acos` of a cosine computed from unit vectors, clamped against rounding
/// just outside `[-1, 1]`.
fn unit_angle<N: Numeric>(cosine: N) -> N {
    let one = numeric::constant::<N>(1.0);
    na::ComplexField::acos(na::RealField::clamp(cosine, -one, one))
}

impl<N: Numeric> fmt::Debug for Direction<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Direction({:?}, {:?}, {:?})", self.x(), self.y(), self.z())
    }
}

impl<N: Numeric> fmt::Display for Direction<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print())
    }
}

impl<N: Numeric> Hash for Direction<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for component in self.value.iter() {
            state.write_u64(component.hash_bits());
        }
    }
}

impl<N: Numeric> Neg for Direction<N> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            value: na::Unit::new_unchecked(-self.value()),
        }
    }
}

impl<K: DimensionalKind, N: Numeric> Mul<DimensionalScalar<K, N>> for Direction<N> {
    type Output = DimensionalVector<K, N>;

    fn mul(self, magnitude: DimensionalScalar<K, N>) -> DimensionalVector<K, N> {
        DimensionalVector::from_magnitude_direction(magnitude, self)
    }
}
