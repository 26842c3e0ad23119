use crate::dimension::TemperatureDimension;

unit_category! {
    /// Units of temperature difference. Canonical unit: kelvin.
    ///
    /// Differences carry no offset, so Celsius matches kelvin and
    /// Fahrenheit matches Rankine.
    TemperatureDifferenceUnit: TemperatureDimension {
        Kelvin => "K",
        Celsius => ("°C", 1.0),
        Rankine => ("°R", 5.0 / 9.0),
        Fahrenheit => ("°F", 5.0 / 9.0),
    }
}
