//! Physical dimensions.
//!
//! A dimension is a set of exponents over the seven SI base dimensions.
//! Each quantity type fixes its dimension at compile time through the
//! [`Dimension`] trait; the runtime [`PhysicalDimension`] value only exists
//! to inspect and check those exponents.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Neg, Sub};
use uom::typenum::{Integer, N1, P1, P2, Z0};

/// Exponents of the seven base dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PhysicalDimension {
    pub length: i32,
    pub mass: i32,
    pub time: i32,
    pub electric_current: i32,
    pub temperature: i32,
    pub substance_amount: i32,
    pub luminous_intensity: i32,
}

impl PhysicalDimension {
    pub const DIMENSIONLESS: Self = Self::new(0, 0, 0, 0, 0, 0, 0);

    pub const fn new(
        length: i32,
        mass: i32,
        time: i32,
        electric_current: i32,
        temperature: i32,
        substance_amount: i32,
        luminous_intensity: i32,
    ) -> Self {
        Self {
            length,
            mass,
            time,
            electric_current,
            temperature,
            substance_amount,
            luminous_intensity,
        }
    }

    pub const fn is_dimensionless(&self) -> bool {
        self.length == 0
            && self.mass == 0
            && self.time == 0
            && self.electric_current == 0
            && self.temperature == 0
            && self.substance_amount == 0
            && self.luminous_intensity == 0
    }

    /// Dimension of a product of two quantities.
    pub const fn product(self, other: Self) -> Self {
        Self::new(
            self.length + other.length,
            self.mass + other.mass,
            self.time + other.time,
            self.electric_current + other.electric_current,
            self.temperature + other.temperature,
            self.substance_amount + other.substance_amount,
            self.luminous_intensity + other.luminous_intensity,
        )
    }

    /// Dimension of a quotient of two quantities.
    pub const fn quotient(self, other: Self) -> Self {
        self.product(other.inverse())
    }

    pub const fn inverse(self) -> Self {
        Self::new(
            -self.length,
            -self.mass,
            -self.time,
            -self.electric_current,
            -self.temperature,
            -self.substance_amount,
            -self.luminous_intensity,
        )
    }
}

impl Add for PhysicalDimension {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.product(rhs)
    }
}

impl Sub for PhysicalDimension {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.quotient(rhs)
    }
}

impl Neg for PhysicalDimension {
    type Output = Self;

    fn neg(self) -> Self {
        self.inverse()
    }
}

impl fmt::Display for PhysicalDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "1");
        }

        let symbols = [
            ("L", self.length),
            ("M", self.mass),
            ("T", self.time),
            ("I", self.electric_current),
            ("Θ", self.temperature),
            ("N", self.substance_amount),
            ("J", self.luminous_intensity),
        ];

        let mut first = true;
        for (symbol, exponent) in symbols {
            if exponent == 0 {
                continue;
            }
            if !first {
                write!(f, "·")?;
            }
            first = false;
            if exponent == 1 {
                write!(f, "{symbol}")?;
            } else {
                write!(f, "{symbol}^{exponent}")?;
            }
        }
        Ok(())
    }
}

/// Compile-time dimension of a quantity type.
///
/// Exponents are `typenum` integers so that two types with different
/// dimensions are different types.
pub trait Dimension: 'static {
    type Length: Integer;
    type Mass: Integer;
    type Time: Integer;
    type ElectricCurrent: Integer;
    type Temperature: Integer;
    type SubstanceAmount: Integer;
    type LuminousIntensity: Integer;

    const PHYSICAL: PhysicalDimension = PhysicalDimension::new(
        <Self::Length as Integer>::I32,
        <Self::Mass as Integer>::I32,
        <Self::Time as Integer>::I32,
        <Self::ElectricCurrent as Integer>::I32,
        <Self::Temperature as Integer>::I32,
        <Self::SubstanceAmount as Integer>::I32,
        <Self::LuminousIntensity as Integer>::I32,
    );
}

/// Dimension marker: `L^l · M^m · T^t · I^i · Θ^th · N^n · J^j`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dim<L, M, T, I, Th, N, J>(PhantomData<(L, M, T, I, Th, N, J)>);

impl<L, M, T, I, Th, N, J> Dimension for Dim<L, M, T, I, Th, N, J>
where
    L: Integer + 'static,
    M: Integer + 'static,
    T: Integer + 'static,
    I: Integer + 'static,
    Th: Integer + 'static,
    N: Integer + 'static,
    J: Integer + 'static,
{
    type Length = L;
    type Mass = M;
    type Time = T;
    type ElectricCurrent = I;
    type Temperature = Th;
    type SubstanceAmount = N;
    type LuminousIntensity = J;
}

pub type DimensionlessDimension = Dim<Z0, Z0, Z0, Z0, Z0, Z0, Z0>;
pub type LengthDimension = Dim<P1, Z0, Z0, Z0, Z0, Z0, Z0>;
pub type AreaDimension = Dim<P2, Z0, Z0, Z0, Z0, Z0, Z0>;
pub type TimeDimension = Dim<Z0, Z0, P1, Z0, Z0, Z0, Z0>;
pub type SpeedDimension = Dim<P1, Z0, N1, Z0, Z0, Z0, Z0>;
pub type FrequencyDimension = Dim<Z0, Z0, N1, Z0, Z0, Z0, Z0>;
pub type TemperatureDimension = Dim<Z0, Z0, Z0, Z0, P1, Z0, Z0>;
pub type InverseTemperatureDimension = Dim<Z0, Z0, Z0, Z0, N1, Z0, Z0>;
