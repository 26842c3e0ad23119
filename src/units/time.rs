use crate::dimension::TimeDimension;

unit_category! {
    /// Units of time. Canonical unit: second.
    TimeUnit: TimeDimension {
        Second => "s",
        Nanosecond => ("ns", 0.000_000_001),
        Microsecond => ("μs", 0.000_001),
        Millisecond => ("ms", 0.001),
        Minute => ("min", 60.0),
        Hour => ("hr", 3_600.0),
        Day => ("d", 86_400.0),
    }
}
