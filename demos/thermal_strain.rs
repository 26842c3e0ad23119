use quantity_core::quantities::*;
use quantity_core::relations::relations;
use quantity_core::units::*;
use quantity_core::{Direction, FormatSettings, Dialect};

fn main() {
    println!("=== Thermal Expansion of a Steel Rail ===\n");

    let s = "-".repeat(50);

    println!("Step 1: Strain from heating");
    println!("{}", s);
    let strain = heating_strain();

    println!("\n");

    println!("Step 2: Elongation");
    println!("{}", s);
    elongation(strain);

    println!("\n");

    println!("Step 3: Oriented cross-section");
    println!("{}", s);
    cross_section();

    println!("\n");

    println!("Registered relations");
    println!("{}", s);
    for relation in relations() {
        println!("  {}", relation);
    }
}

fn heating_strain() -> ScalarStrain {
    let alpha = LinearThermalExpansionCoefficient::new(6.5e-6, ThermalExpansionUnit::PerFahrenheit);
    let heating = TemperatureDifference::new(40.0, TemperatureDifferenceUnit::Celsius);
    let strain = alpha * heating;

    println!("Coefficient:  {}", alpha);
    println!("Heating:      {}", heating.print_in(TemperatureDifferenceUnit::Fahrenheit));
    println!("Strain:       {}", strain);
    strain
}

fn elongation(strain: ScalarStrain) {
    let rail = Length::new(120.0, LengthUnit::Foot);
    let growth = strain * rail;

    let short = FormatSettings {
        decimals: 3,
        ..FormatSettings::DEFAULT
    };
    println!("Rail length:  {}", rail.render(Dialect::Plain, LengthUnit::Metre, &short));
    println!("Elongation:   {}", growth.render(Dialect::Plain, LengthUnit::Millimetre, &short));
    println!("As JSON:      {}", growth.json_in(LengthUnit::Millimetre));
}

fn cross_section() {
    let area = Area::new(64.0, AreaUnit::SquareCentimetre);
    let normal = match Direction::new(1.0, 1.0, 0.0) {
        Ok(normal) => normal,
        Err(e) => {
            println!("Bad normal: {}", e);
            return;
        }
    };

    let oriented = area * normal;
    println!("Oriented area: {}", oriented.print_in(AreaUnit::SquareCentimetre));
    println!("Magnitude:     {}", oriented.magnitude().print_in(AreaUnit::SquareCentimetre));

    let axis = AreaVector::from_components(0.0, 0.0, 1.0, AreaUnit::SquareMetre);
    match oriented.angle(&axis) {
        Ok(angle) => println!("Angle to z:    {}", angle.print_in(AngleUnit::Degree)),
        Err(e) => println!("Angle to z:    {}", e),
    }
}
