use crate::dimension::InverseTemperatureDimension;

unit_category! {
    /// Units of thermal expansion coefficient (inverse temperature).
    /// Canonical unit: per kelvin.
    ThermalExpansionUnit: InverseTemperatureDimension {
        PerKelvin => "/K",
        PerCelsius => ("/°C", 1.0),
        PerRankine => ("/°R", 9.0 / 5.0),
        PerFahrenheit => ("/°F", 9.0 / 5.0),
    }
}
