//! Text rendering of quantity payloads.
//!
//! Four dialects share one numeric routine and differ only in punctuation:
//!
//! | dialect | scalar                                       |
//! |---------|----------------------------------------------|
//! | plain   | `1.110000000000000 m^2`                      |
//! | JSON    | `{"value":1.110000000000000,"unit":"m^2"}`   |
//! | XML     | `<value>1.110000000000000</value><unit>m^2</unit>` |
//! | YAML    | `{value:1.110000000000000,unit:"m^2"}`       |
//!
//! Dimensionless payloads render without the unit wrapper.

mod settings;

pub use settings::FormatSettings;

use crate::numeric::Numeric;
use nalgebra as na;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Plain,
    Json,
    Xml,
    Yaml,
}

/// Render one number. Locale independent.
///
/// Every finite value carries `decimals + 1` significant digits, whichever
/// notation it ends up in.
pub fn number<N: Numeric>(value: N, settings: &FormatSettings) -> String {
    let value = value.as_f64();
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // Fold -0.0 so it never prints a sign.
    let value = if value == 0.0 { 0.0 } else { value };
    let magnitude = value.abs();
    let decimals = settings.decimals;
    let scientific = format!("{value:.decimals$e}");

    if magnitude != 0.0
        && !(settings.fixed_lower_bound..settings.fixed_upper_bound).contains(&magnitude)
    {
        return scientific;
    }

    // Exponent after rounding, so 999.99... that rounds up counts as 1e3.
    let exponent = scientific
        .rsplit_once('e')
        .and_then(|(_, exponent)| exponent.parse::<i64>().ok())
        .unwrap_or(0);
    let fixed_decimals = usize::try_from(decimals as i64 - exponent).unwrap_or(0);
    format!("{value:.fixed_decimals$}")
}

/// `number` for the JSON dialect, which has no spelling for NaN or infinity.
fn json_number<N: Numeric>(value: N, settings: &FormatSettings) -> String {
    if value.as_f64().is_finite() {
        number(value, settings)
    } else {
        "null".to_string()
    }
}

fn dialect_number<N: Numeric>(dialect: Dialect, value: N, settings: &FormatSettings) -> String {
    match dialect {
        Dialect::Json => json_number(value, settings),
        _ => number(value, settings),
    }
}

pub fn scalar<N: Numeric>(
    dialect: Dialect,
    value: N,
    unit: Option<&str>,
    settings: &FormatSettings,
) -> String {
    let value = dialect_number(dialect, value, settings);
    let Some(unit) = unit else {
        return value;
    };

    match dialect {
        Dialect::Plain => format!("{value} {unit}"),
        Dialect::Json => format!(r#"{{"value":{value},"unit":"{unit}"}}"#),
        Dialect::Xml => format!("<value>{value}</value><unit>{unit}</unit>"),
        Dialect::Yaml => format!(r#"{{value:{value},unit:"{unit}"}}"#),
    }
}

pub fn vector<N: Numeric>(
    dialect: Dialect,
    value: &na::Vector3<N>,
    unit: Option<&str>,
    settings: &FormatSettings,
) -> String {
    let x = dialect_number(dialect, value.x, settings);
    let y = dialect_number(dialect, value.y, settings);
    let z = dialect_number(dialect, value.z, settings);

    let components = match dialect {
        Dialect::Plain => format!("({x}, {y}, {z})"),
        Dialect::Json => format!(r#"{{"x":{x},"y":{y},"z":{z}}}"#),
        Dialect::Xml => format!("<x>{x}</x><y>{y}</y><z>{z}</z>"),
        Dialect::Yaml => format!("{{x:{x},y:{y},z:{z}}}"),
    };
    let Some(unit) = unit else {
        return components;
    };

    match dialect {
        Dialect::Plain => format!("{components} {unit}"),
        Dialect::Json => format!(r#"{{"value":{components},"unit":"{unit}"}}"#),
        Dialect::Xml => format!("<value>{components}</value><unit>{unit}</unit>"),
        Dialect::Yaml => format!(r#"{{value:{components},unit:"{unit}"}}"#),
    }
}
