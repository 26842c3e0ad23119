use crate::dimension::AreaDimension;

unit_category! {
    /// Units of area. Canonical unit: square metre.
    AreaUnit: AreaDimension {
        SquareMetre => "m^2",
        SquareKilometre => ("km^2", 1_000_000.0),
        Hectare => ("ha", 10_000.0),
        SquareCentimetre => ("cm^2", 0.000_1),
        SquareMillimetre => ("mm^2", 0.000_001),
        SquareMile => ("mi^2", 2_589_988.110_336),
        Acre => ("ac", 4_046.856_422_4),
        SquareYard => ("yd^2", 0.836_127_36),
        SquareFoot => ("ft^2", 0.092_903_04),
        SquareInch => ("in^2", 0.000_645_16),
    }
}
