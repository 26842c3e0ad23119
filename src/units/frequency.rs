use crate::dimension::FrequencyDimension;

unit_category! {
    /// Units of frequency. Canonical unit: hertz.
    FrequencyUnit: FrequencyDimension {
        Hertz => "Hz",
        Kilohertz => ("kHz", 1_000.0),
        Megahertz => ("MHz", 1_000_000.0),
        Gigahertz => ("GHz", 1_000_000_000.0),
        PerMinute => ("/min", 1.0 / 60.0),
        PerHour => ("/hr", 1.0 / 3_600.0),
    }
}
