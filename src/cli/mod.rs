//! Command-line arguments of the `fibbench` binary.

mod error;
#[cfg(test)]
mod tests;
mod types;

pub use error::Error;
pub use types::{OutputFormat, TypeParseError};

use std::{env, ffi::OsString, process, str::FromStr};

use clap::{App, AppSettings, Arg, ArgMatches};

/// Parsed command-line arguments. `None` means "keep the harness default".
#[derive(Debug, Default, PartialEq)]
pub struct Args {
    /// `-n, --input`
    pub input: Option<i64>,
    /// `-r, --runs`
    pub runs: Option<u64>,
    /// `--output-format`
    pub output_format: OutputFormat,
    /// `--allow-negative`
    pub allow_negative: bool,
    /// `-v, --verbose`
    pub verbose: bool,
}

/// Parses the process arguments, exiting on `--help`, `--version` and invalid input.
pub fn parse_args() -> Args {
    let args = env::args_os().collect();
    match try_parse_args(args) {
        Ok(args) => args,
        Err(Error::DisplayHelp(help)) => {
            println!("{}", help);
            process::exit(0);
        }
        // clap has already printed the version
        Err(Error::DisplayVersion) => process::exit(0),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

/// Parses `args`, whose first element is the executable name.
pub fn try_parse_args(args: Vec<OsString>) -> Result<Args, Error> {
    let matches = app().get_matches_from_safe(args)?;

    let input = parse_value(&matches, "input", "--input")?;
    let runs: Option<u64> = parse_value(&matches, "runs", "--runs")?;
    if runs == Some(0) {
        return Err(Error::InvalidValue {
            flag: "--runs",
            value: String::from("0"),
        });
    }
    let output_format: OutputFormat = parse_value(&matches, "output-format", "--output-format")?
        .unwrap_or_default();

    Ok(Args {
        input,
        runs,
        output_format,
        allow_negative: matches.is_present("allow-negative"),
        verbose: matches.is_present("verbose"),
    })
}

fn parse_value<T: FromStr>(
    matches: &ArgMatches<'_>,
    name: &str,
    flag: &'static str,
) -> Result<Option<T>, Error> {
    match matches.value_of(name) {
        None => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|_| Error::InvalidValue {
            flag,
            value: value.to_owned(),
        }),
    }
}

fn app() -> App<'static, 'static> {
    App::new("fibbench")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Times repeated calls of a naive recursive Fibonacci function.")
        .setting(AppSettings::AllowNegativeNumbers)
        .arg(
            Arg::with_name("input")
                .short("n")
                .long("input")
                .takes_value(true)
                .value_name("N")
                .help("Fibonacci argument to time. [default: 30]"),
        )
        .arg(
            Arg::with_name("runs")
                .short("r")
                .long("runs")
                .takes_value(true)
                .value_name("RUNS")
                .help("Number of timed calls, at least 1. [default: 5]"),
        )
        .arg(
            Arg::with_name("output-format")
                .long("output-format")
                .takes_value(true)
                .possible_values(&["plain", "summary", "json"])
                .help(
                    "Change the output format. 'plain' prints the total elapsed seconds, \
                     'summary' adds the value and the per-run time, 'json' prints one JSON \
                     object. [default: plain]",
                ),
        )
        .arg(
            Arg::with_name("allow-negative")
                .long("allow-negative")
                .help(
                    "Time negative input instead of rejecting it. fib(n) returns any n < 2 \
                     unchanged.",
                ),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Print debug output on stderr."),
        )
        .after_help(
            "The log filter can also be set through the RUST_LOG environment variable.",
        )
}
