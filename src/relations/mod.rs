//! Arithmetic between different quantities.
//!
//! Relations are grouped by theme and declared in one table per theme:
//!
//! ```text
//! Length ^ 2 = Area;          // Length * Length
//! Speed * Time = Length;      // Speed * Time and Time * Speed
//! Length / Time = Speed;
//! Time * Frequency = Number;  // bare number
//! ```
//!
//! A `*` entry always registers both operand orders. Each table also
//! produces the [`Relation`] records listed by [`relations`], so the
//! dimensional bookkeeping of every operator can be checked at runtime.

use crate::dimension::PhysicalDimension;
use crate::quantity::PhysicalQuantity;
use std::fmt;

/// Result type of relations that cancel every dimension.
pub type Number<N = f64> = N;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Product,
    Quotient,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Self::Product => '*',
            Self::Quotient => '/',
        }
    }
}

/// One registered operator: `lhs <operator> rhs = output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relation {
    pub lhs: &'static str,
    pub operator: Operator,
    pub rhs: &'static str,
    pub output: &'static str,
    pub lhs_dimension: PhysicalDimension,
    pub rhs_dimension: PhysicalDimension,
    pub output_dimension: PhysicalDimension,
}

impl Relation {
    pub const fn product<A, B, C>() -> Self
    where
        A: PhysicalQuantity,
        B: PhysicalQuantity,
        C: PhysicalQuantity,
    {
        Self::new::<A, B, C>(Operator::Product)
    }

    pub const fn quotient<A, B, C>() -> Self
    where
        A: PhysicalQuantity,
        B: PhysicalQuantity,
        C: PhysicalQuantity,
    {
        Self::new::<A, B, C>(Operator::Quotient)
    }

    const fn new<A, B, C>(operator: Operator) -> Self
    where
        A: PhysicalQuantity,
        B: PhysicalQuantity,
        C: PhysicalQuantity,
    {
        Self {
            lhs: A::NAME,
            operator,
            rhs: B::NAME,
            output: C::NAME,
            lhs_dimension: A::DIMENSION,
            rhs_dimension: B::DIMENSION,
            output_dimension: C::DIMENSION,
        }
    }

    /// Dimension the operands actually produce.
    pub fn expected_dimension(&self) -> PhysicalDimension {
        match self.operator {
            Operator::Product => self.lhs_dimension.product(self.rhs_dimension),
            Operator::Quotient => self.lhs_dimension.quotient(self.rhs_dimension),
        }
    }

    /// Whether the declared output matches the operands' dimensions.
    pub fn is_consistent(&self) -> bool {
        self.expected_dimension() == self.output_dimension
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.lhs,
            self.operator.symbol(),
            self.rhs,
            self.output
        )
    }
}

/// Declares a relation table: the operator impls plus a `RELATIONS` const.
macro_rules! relations {
    (@impl) => {};
    (@impl $lhs:ident * $rhs:ident = Number; $($rest:tt)*) => {
        impl<N: $crate::numeric::Numeric> std::ops::Mul<$rhs<N>> for $lhs<N> {
            type Output = N;

            fn mul(self, rhs: $rhs<N>) -> N {
                self.value() * rhs.value()
            }
        }

        impl<N: $crate::numeric::Numeric> std::ops::Mul<$lhs<N>> for $rhs<N> {
            type Output = N;

            fn mul(self, rhs: $lhs<N>) -> N {
                rhs * self
            }
        }

        relations!(@impl $($rest)*);
    };
    (@impl $lhs:ident ^ 2 = $output:ident; $($rest:tt)*) => {
        impl<N: $crate::numeric::Numeric> std::ops::Mul for $lhs<N> {
            type Output = $output<N>;

            fn mul(self, rhs: Self) -> $output<N> {
                <$output<N>>::from_standard(self.value() * rhs.value())
            }
        }

        relations!(@impl $($rest)*);
    };
    (@impl $lhs:ident * $rhs:ident = $output:ident; $($rest:tt)*) => {
        impl<N: $crate::numeric::Numeric> std::ops::Mul<$rhs<N>> for $lhs<N> {
            type Output = $output<N>;

            fn mul(self, rhs: $rhs<N>) -> $output<N> {
                <$output<N>>::from_standard(self.value() * rhs.value())
            }
        }

        impl<N: $crate::numeric::Numeric> std::ops::Mul<$lhs<N>> for $rhs<N> {
            type Output = $output<N>;

            fn mul(self, rhs: $lhs<N>) -> $output<N> {
                rhs * self
            }
        }

        relations!(@impl $($rest)*);
    };
    (@impl $lhs:ident / $rhs:ident = $output:ident; $($rest:tt)*) => {
        impl<N: $crate::numeric::Numeric> std::ops::Div<$rhs<N>> for $lhs<N> {
            type Output = $output<N>;

            fn div(self, rhs: $rhs<N>) -> $output<N> {
                <$output<N>>::from_standard(self.value() / rhs.value())
            }
        }

        relations!(@impl $($rest)*);
    };

    (@entries [$($entry:expr,)*]) => {
        &[$($entry,)*]
    };
    (@entries [$($entry:expr,)*] $lhs:ident ^ 2 = $output:ident; $($rest:tt)*) => {
        relations!(@entries [
            $($entry,)*
            $crate::relations::Relation::product::<$lhs, $lhs, $output>(),
        ] $($rest)*)
    };
    (@entries [$($entry:expr,)*] $lhs:ident * $rhs:ident = $output:ident; $($rest:tt)*) => {
        relations!(@entries [
            $($entry,)*
            $crate::relations::Relation::product::<$lhs, $rhs, $output>(),
            $crate::relations::Relation::product::<$rhs, $lhs, $output>(),
        ] $($rest)*)
    };
    (@entries [$($entry:expr,)*] $lhs:ident / $rhs:ident = $output:ident; $($rest:tt)*) => {
        relations!(@entries [
            $($entry,)*
            $crate::relations::Relation::quotient::<$lhs, $rhs, $output>(),
        ] $($rest)*)
    };

    ($($table:tt)*) => {
        relations!(@impl $($table)*);

        pub(super) const RELATIONS: &[$crate::relations::Relation] =
            relations!(@entries [] $($table)*);
    };
}

mod geometry;
mod kinematics;
mod thermal;

/// Every registered cross-quantity operator.
pub fn relations() -> impl Iterator<Item = &'static Relation> {
    geometry::RELATIONS
        .iter()
        .chain(kinematics::RELATIONS)
        .chain(thermal::RELATIONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_relation_is_dimensionally_consistent() {
        for relation in relations() {
            assert!(
                relation.is_consistent(),
                "{relation}: expected {}, declared {}",
                relation.expected_dimension(),
                relation.output_dimension
            );
        }
    }

    #[test]
    fn test_products_are_registered_both_ways() {
        for relation in relations().filter(|r| r.operator == Operator::Product) {
            assert!(
                relations().any(|other| other.operator == Operator::Product
                    && other.lhs == relation.rhs
                    && other.rhs == relation.lhs
                    && other.output == relation.output),
                "{relation} has no mirror"
            );
        }
    }

    #[test]
    fn test_registry_contents() {
        let listed: Vec<String> = relations().map(|r| r.to_string()).collect();
        for expected in [
            "Length * Length = Area",
            "Area / Length = Length",
            "Time * Speed = Length",
            "Displacement / Time = Velocity",
            "Frequency * Time = Number",
            "TemperatureDifference * LinearThermalExpansionCoefficient = ScalarStrain",
            "ScalarStrain / LinearThermalExpansionCoefficient = TemperatureDifference",
        ] {
            assert!(listed.iter().any(|r| r == expected), "missing {expected}");
        }
    }

    #[test]
    fn test_inconsistent_relation_detected() {
        use crate::quantities::{Area, Length, Time};

        let wrong = Relation::product::<Length, Time, Area>();
        assert!(!wrong.is_consistent());
        assert_eq!(wrong.to_string(), "Length * Time = Area");
    }
}
