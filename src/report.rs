//! Rendering of finished timings.

use std::io::Write;

use crate::cli::OutputFormat;
use crate::format;
use crate::measurement::ValueFormatter;
use crate::{Error, Timing};

/// Something that can write a finished [`Timing`](../struct.Timing.html).
pub trait Report {
    /// Writes `timing` to `out`. `formatter` belongs to the measurement that produced it.
    fn measurement_complete(
        &self,
        timing: &Timing,
        formatter: &dyn ValueFormatter,
        out: &mut dyn Write,
    ) -> Result<(), Error>;
}

/// Returns the report that renders `format`.
pub fn for_format(format: OutputFormat) -> Box<dyn Report> {
    match format {
        OutputFormat::Plain => Box::new(PlainReport),
        OutputFormat::Summary => Box::new(SummaryReport),
        OutputFormat::Json => Box::new(JsonReport),
    }
}

/// A single line holding the total, scaled for machines. With `WallTime` that is seconds.
pub struct PlainReport;
impl Report for PlainReport {
    fn measurement_complete(
        &self,
        timing: &Timing,
        formatter: &dyn ValueFormatter,
        out: &mut dyn Write,
    ) -> Result<(), Error> {
        let mut values = [timing.total];
        formatter.scale_for_machines(&mut values);

        writeln!(out, "{}", values[0])?;
        Ok(())
    }
}

/// The computed value and the human-formatted per-run time, followed by the
/// `Total: <t> secs, <t> secs/run` line.
pub struct SummaryReport;
impl Report for SummaryReport {
    fn measurement_complete(
        &self,
        timing: &Timing,
        formatter: &dyn ValueFormatter,
        out: &mut dyn Write,
    ) -> Result<(), Error> {
        writeln!(
            out,
            "fib({}) = {} over {}, {}/run",
            timing.input,
            timing.value,
            format::run_count(timing.runs),
            formatter.format_value(timing.per_run()).trim(),
        )?;

        let mut values = [timing.total, timing.per_run()];
        let unit = formatter.scale_for_machines(&mut values);
        let unit = if unit == "s" { "secs" } else { unit };
        writeln!(
            out,
            "Total: {} {}, {} {}/run",
            values[0], unit, values[1], unit
        )?;
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonTiming<'a> {
    input: i64,
    runs: u64,
    value: i64,
    total: f64,
    per_run: f64,
    unit: &'a str,
}

/// One line of JSON with the timing scaled for machines.
pub struct JsonReport;
impl Report for JsonReport {
    fn measurement_complete(
        &self,
        timing: &Timing,
        formatter: &dyn ValueFormatter,
        out: &mut dyn Write,
    ) -> Result<(), Error> {
        let mut values = [timing.total, timing.per_run()];
        let unit = formatter.scale_for_machines(&mut values);

        let json = JsonTiming {
            input: timing.input,
            runs: timing.runs,
            value: timing.value,
            total: values[0],
            per_run: values[1],
            unit,
        };
        serde_json::to_writer(&mut *out, &json)?;
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::measurement::{Measurement, WallTime};
    use serde_json::Value;

    fn timing() -> Timing {
        Timing {
            input: 30,
            runs: 5,
            value: 832_040,
            total: 1.25e9,
        }
    }

    fn render(format: OutputFormat) -> String {
        let mut out = Vec::new();
        for_format(format)
            .measurement_complete(&timing(), WallTime.formatter(), &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plain_is_one_line_of_seconds() {
        assert_eq!(render(OutputFormat::Plain), "1.25\n");
    }

    #[test]
    fn summary_shows_total_and_per_run() {
        let summary = render(OutputFormat::Summary);
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "fib(30) = 832040 over 5 runs, 250.00 ms/run");
        assert_eq!(lines[1], "Total: 1.25 secs, 0.25 secs/run");
    }

    #[test]
    fn json_is_one_parseable_line() {
        let json = render(OutputFormat::Json);
        assert_eq!(json.lines().count(), 1);

        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["input"], 30);
        assert_eq!(value["runs"], 5);
        assert_eq!(value["value"], 832_040);
        assert_eq!(value["total"], 1.25);
        assert_eq!(value["per_run"], 0.25);
        assert_eq!(value["unit"], "s");
    }
}
