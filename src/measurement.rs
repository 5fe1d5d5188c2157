//! This module defines the traits that let the harness read different clocks. It also includes
//! the [WallTime](struct.WallTime.html) struct, the default wall-clock time measurement.

use crate::format;
use std::time::{Duration, Instant};

/// Formats measured values for display. The functions of this trait take measured values in
/// f64 form, at the same scale as the associated [Measurement](trait.Measurement.html) produces
/// them (eg. nanoseconds for [WallTime](struct.WallTime.html)).
pub trait ValueFormatter {
    /// Format the value (with appropriate unit) for humans.
    fn format_value(&self, value: f64) -> String;

    /// Scale the values and return a unit string designed for machines.
    ///
    /// This is used by the plain and JSON reports. Implementations should modify the given
    /// values slice to apply the desired scaling (if any) and return a string representing the
    /// unit the modified values are in.
    fn scale_for_machines(&self, values: &mut [f64]) -> &'static str;
}

/// Trait for all types which define something the harness can measure.
///
/// `start` is called right before the first timed call and produces some intermediate value
/// (for example, the wall-clock time at that point). `end` is called after the last timed call
/// with the value returned by `start`.
pub trait Measurement {
    /// Intermediate value produced by `start` and consumed by `end`.
    type Intermediate;

    /// The measured value, eg. the elapsed wall-clock time between `start` and `end`.
    type Value;

    /// Called before the timed calls.
    fn start(&self) -> Self::Intermediate;

    /// Called after the timed calls to get the measured value.
    fn end(&self, i: Self::Intermediate) -> Self::Value;

    /// Combine two values.
    fn add(&self, v1: &Self::Value, v2: &Self::Value) -> Self::Value;

    /// Return a "zero" value for the Value type which can be added to another value.
    fn zero(&self) -> Self::Value;

    /// Converts the measured value to f64 for reporting.
    fn to_f64(&self, value: &Self::Value) -> f64;

    /// Return a trait-object reference to the value formatter for this measurement.
    fn formatter(&self) -> &dyn ValueFormatter;
}

pub(crate) struct DurationFormatter;
impl ValueFormatter for DurationFormatter {
    fn format_value(&self, ns: f64) -> String {
        format::time(ns)
    }

    fn scale_for_machines(&self, values: &mut [f64]) -> &'static str {
        for val in values {
            *val /= 1e9;
        }

        "s"
    }
}

/// `WallTime` is the default measurement. It measures the elapsed time from the first timed
/// call to the end of the last one.
pub struct WallTime;
impl Measurement for WallTime {
    type Intermediate = Instant;
    type Value = Duration;

    fn start(&self) -> Self::Intermediate {
        Instant::now()
    }
    fn end(&self, i: Self::Intermediate) -> Self::Value {
        i.elapsed()
    }
    fn add(&self, v1: &Self::Value, v2: &Self::Value) -> Self::Value {
        *v1 + *v2
    }
    fn zero(&self) -> Self::Value {
        Duration::from_secs(0)
    }
    fn to_f64(&self, val: &Self::Value) -> f64 {
        val.as_nanos() as f64
    }
    fn formatter(&self) -> &dyn ValueFormatter {
        &DurationFormatter
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn wall_time_is_monotonic() {
        let m = WallTime;
        let start = m.start();
        let elapsed = m.end(start);
        assert!(m.to_f64(&elapsed) >= 0.0);
    }

    #[test]
    fn wall_time_adds_durations() {
        let m = WallTime;
        let sum = m.add(&Duration::from_millis(250), &Duration::from_millis(750));
        assert_eq!(sum, Duration::from_secs(1));
        assert_eq!(m.add(&m.zero(), &sum), sum);
        assert_eq!(m.to_f64(&sum), 1e9);
    }

    #[test]
    fn machine_scale_is_seconds() {
        let mut values = [1.5e9, 2.5e8];
        let unit = WallTime.formatter().scale_for_machines(&mut values);
        assert_eq!(unit, "s");
        assert_eq!(values, [1.5, 0.25]);
    }
}
