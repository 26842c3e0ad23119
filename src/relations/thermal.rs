use crate::quantities::{LinearThermalExpansionCoefficient, ScalarStrain, TemperatureDifference};

relations! {
    LinearThermalExpansionCoefficient * TemperatureDifference = ScalarStrain;
    ScalarStrain / TemperatureDifference = LinearThermalExpansionCoefficient;
    ScalarStrain / LinearThermalExpansionCoefficient = TemperatureDifference;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{TemperatureDifferenceUnit, ThermalExpansionUnit};
    use approx::assert_relative_eq;

    #[test]
    fn test_thermal_strain_is_symmetric() {
        let coefficient = LinearThermalExpansionCoefficient::new(2.0, ThermalExpansionUnit::PerKelvin);
        let difference = TemperatureDifference::new(4.0, TemperatureDifferenceUnit::Kelvin);

        assert_eq!(coefficient * difference, ScalarStrain::new(8.0));
        assert_eq!(difference * coefficient, ScalarStrain::new(8.0));
    }

    #[test]
    fn test_inverse_relations() {
        let strain = ScalarStrain::new(1.2e-3);
        let difference = TemperatureDifference::new(100.0, TemperatureDifferenceUnit::Celsius);

        let coefficient = strain / difference;
        assert_relative_eq!(coefficient.value(), 1.2e-5, max_relative = 1e-12);
        assert_relative_eq!((strain / coefficient).value(), 100.0, max_relative = 1e-12);
    }

    #[test]
    fn test_mixed_scales() {
        let coefficient = LinearThermalExpansionCoefficient::new(1.0e-5, ThermalExpansionUnit::PerFahrenheit);
        let difference = TemperatureDifference::new(10.0, TemperatureDifferenceUnit::Fahrenheit);
        assert_relative_eq!((coefficient * difference).value(), 1.0e-4, max_relative = 1e-12);
    }
}
