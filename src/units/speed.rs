use crate::dimension::SpeedDimension;

unit_category! {
    /// Units of speed. Canonical unit: metre per second.
    SpeedUnit: SpeedDimension {
        MetrePerSecond => "m/s",
        MillimetrePerSecond => ("mm/s", 0.001),
        KilometrePerHour => ("km/hr", 1_000.0 / 3_600.0),
        MilePerHour => ("mi/hr", 0.447_04),
        FootPerSecond => ("ft/s", 0.304_8),
        Knot => ("kn", 1_852.0 / 3_600.0),
    }
}
