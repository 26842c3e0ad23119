//! Statically typed physical quantities.
//!
//! Quantities carry their physical dimension in the type system, store their
//! value in a canonical unit, and accept or report values in any unit of
//! their category. Only dimensionally meaningful arithmetic compiles.
//!
//! ```
//! use quantity_core::quantities::{LinearThermalExpansionCoefficient, TemperatureDifference};
//! use quantity_core::units::{TemperatureDifferenceUnit, ThermalExpansionUnit};
//!
//! let alpha: LinearThermalExpansionCoefficient = LinearThermalExpansionCoefficient::new(12.0e-6, ThermalExpansionUnit::PerKelvin);
//! let heating: TemperatureDifference = TemperatureDifference::new(50.0, TemperatureDifferenceUnit::Celsius);
//!
//! let strain = alpha * heating;
//! assert!((strain.value() - 6.0e-4).abs() < 1e-15);
//! ```

pub mod dimension;
pub mod error;
pub mod format;
pub mod interop;
pub mod numeric;
pub mod quantities;
pub mod quantity;
pub mod relations;
pub mod units;

pub use error::QuantityError;
pub use format::{Dialect, FormatSettings};
pub use numeric::Numeric;
pub use quantity::{
    DimensionalKind, DimensionalScalar, DimensionalVector, DimensionlessScalar, Direction, Kind,
    PhysicalQuantity,
};
