use crate::dimension::LengthDimension;

unit_category! {
    /// Units of length. Canonical unit: metre.
    LengthUnit: LengthDimension {
        Metre => "m",
        Kilometre => ("km", 1_000.0),
        Centimetre => ("cm", 0.01),
        Millimetre => ("mm", 0.001),
        Micrometre => ("μm", 0.000_001),
        NauticalMile => ("nmi", 1_852.0),
        Mile => ("mi", 1_609.344),
        Yard => ("yd", 0.914_4),
        Foot => ("ft", 0.304_8),
        Inch => ("in", 0.025_4),
    }
}
