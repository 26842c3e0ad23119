//! Generic quantity value holders.
//!
//! A concrete physical quantity is a zero-sized *kind* tag plugged into one
//! of the generic holders:
//!
//! - [`DimensionalScalar`]: one number with a unit category,
//! - [`DimensionalVector`]: three numbers sharing one unit category,
//! - [`DimensionlessScalar`]: one number without a unit.
//!
//! The payload is always stored in the category's standard unit. Values in
//! other units are converted when they come in (`new`, `create`) and when
//! they go out (`value_in`, `static_value`, `print_in`, ...), never while
//! held.
//!
//! Mixing kinds is a type error:
//!
//! ```compile_fail
//! use quantity_core::quantities::{Area, Length};
//! use quantity_core::units::{AreaUnit, LengthUnit};
//!
//! let area = Area::new(1.0, AreaUnit::SquareMetre);
//! let length = Length::new(1.0, LengthUnit::Metre);
//! let _ = area + length;
//! ```

mod dimensionless;
mod direction;
mod scalar;
mod vector;

pub use dimensionless::DimensionlessScalar;
pub use direction::Direction;
pub use scalar::DimensionalScalar;
pub use vector::DimensionalVector;

use crate::dimension::{Dimension, PhysicalDimension};
use crate::numeric::Numeric;
use crate::units::Unit;

/// Tag naming one physical quantity.
pub trait Kind: 'static {
    /// Name of the scalar form.
    const NAME: &'static str;

    /// Name of the vector form.
    const VECTOR_NAME: &'static str;
}

/// Kind that is measured in a unit category.
pub trait DimensionalKind: Kind {
    type Unit: Unit;
}

/// Static description shared by every quantity type (and by bare numbers,
/// which are dimensionless).
pub trait PhysicalQuantity {
    const NAME: &'static str;

    const DIMENSION: PhysicalDimension;
}

impl PhysicalQuantity for f32 {
    const NAME: &'static str = "Number";
    const DIMENSION: PhysicalDimension = PhysicalDimension::DIMENSIONLESS;
}

impl PhysicalQuantity for f64 {
    const NAME: &'static str = "Number";
    const DIMENSION: PhysicalDimension = PhysicalDimension::DIMENSIONLESS;
}

impl<K: DimensionalKind, N: Numeric> PhysicalQuantity for DimensionalScalar<K, N> {
    const NAME: &'static str = K::NAME;
    const DIMENSION: PhysicalDimension = <<K::Unit as Unit>::Dimension as Dimension>::PHYSICAL;
}

impl<K: DimensionalKind, N: Numeric> PhysicalQuantity for DimensionalVector<K, N> {
    const NAME: &'static str = K::VECTOR_NAME;
    const DIMENSION: PhysicalDimension = <<K::Unit as Unit>::Dimension as Dimension>::PHYSICAL;
}

impl<K: Kind, N: Numeric> PhysicalQuantity for DimensionlessScalar<K, N> {
    const NAME: &'static str = K::NAME;
    const DIMENSION: PhysicalDimension = PhysicalDimension::DIMENSIONLESS;
}

impl<N: Numeric> PhysicalQuantity for Direction<N> {
    const NAME: &'static str = "Direction";
    const DIMENSION: PhysicalDimension = PhysicalDimension::DIMENSIONLESS;
}

/// Declares a kind tag: `kind!(AreaKind, "Area", "AreaVector", AreaUnit)`.
/// Omitting the unit declares a dimensionless kind.
macro_rules! kind {
    ($(#[$meta:meta])* $kind:ident, $name:literal, $vector_name:literal, $unit:ty) => {
        $crate::quantity::kind!($(#[$meta])* $kind, $name, $vector_name);

        impl $crate::quantity::DimensionalKind for $kind {
            type Unit = $unit;
        }
    };
    ($(#[$meta:meta])* $kind:ident, $name:literal, $vector_name:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $kind {}

        impl $crate::quantity::Kind for $kind {
            const NAME: &'static str = $name;
            const VECTOR_NAME: &'static str = $vector_name;
        }
    };
}

pub(crate) use kind;

/// Serialized shape of dimensional quantities: `{"value": .., "unit": ..}`.
#[derive(serde::Serialize, serde::Deserialize)]
struct Record<V, U> {
    value: V,
    unit: U,
}
