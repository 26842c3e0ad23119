use super::Unit;
use crate::numeric::{Numeric, constant};
use nalgebra as na;

/// Convert a value expressed in `unit` into the category's standard unit.
#[inline]
pub fn to_standard<U: Unit, N: Numeric>(value: N, unit: U) -> N {
    if unit == U::STANDARD {
        value
    } else {
        value * constant::<N>(unit.factor())
    }
}

/// Convert a standard-unit value into `unit`.
#[inline]
pub fn from_standard<U: Unit, N: Numeric>(value: N, unit: U) -> N {
    if unit == U::STANDARD {
        value
    } else {
        value / constant::<N>(unit.factor())
    }
}

/// Convert a value between two units of the same category.
#[inline]
pub fn convert<U: Unit, N: Numeric>(value: N, from: U, to: U) -> N {
    if from == to {
        value
    } else {
        from_standard(to_standard(value, from), to)
    }
}

/// In-place variant of [`convert`].
#[inline]
pub fn convert_in_place<U: Unit, N: Numeric>(value: &mut N, from: U, to: U) {
    *value = convert(*value, from, to);
}

/// Vector variant of [`to_standard`]; one factor applies to every component.
#[inline]
pub fn vector_to_standard<U: Unit, N: Numeric>(value: na::Vector3<N>, unit: U) -> na::Vector3<N> {
    if unit == U::STANDARD {
        value
    } else {
        value * constant::<N>(unit.factor())
    }
}

/// Vector variant of [`from_standard`].
#[inline]
pub fn vector_from_standard<U: Unit, N: Numeric>(
    value: na::Vector3<N>,
    unit: U,
) -> na::Vector3<N> {
    if unit == U::STANDARD {
        value
    } else {
        value / constant::<N>(unit.factor())
    }
}

/// Vector variant of [`convert`].
#[inline]
pub fn convert_vector<U: Unit, N: Numeric>(
    value: na::Vector3<N>,
    from: U,
    to: U,
) -> na::Vector3<N> {
    if from == to {
        value
    } else {
        vector_from_standard(vector_to_standard(value, from), to)
    }
}
