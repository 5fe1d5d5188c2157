use std::{ffi::OsString, iter};

use super::{error::Error, try_parse_args, Args, OutputFormat};

fn gen_args(args: &[&str]) -> Vec<OsString> {
    iter::once("<EXE>")
        .chain(args.iter().copied())
        .map(OsString::from)
        .collect()
}

#[test]
fn default() {
    let args = try_parse_args(gen_args(&[])).unwrap();
    assert_eq!(args, Args::default());
    assert_eq!(args.output_format, OutputFormat::Plain);
}

#[test]
fn help() {
    let err = try_parse_args(gen_args(&["--help"])).unwrap_err();
    match err {
        Error::DisplayHelp(help) => assert!(help.contains("--output-format")),
        other => panic!("expected DisplayHelp, got {:?}", other),
    }
}

#[test]
fn version() {
    let err = try_parse_args(gen_args(&["--version"])).unwrap_err();
    assert!(matches!(err, Error::DisplayVersion));
}

#[test]
fn input_and_runs() {
    let args = try_parse_args(gen_args(&["--input", "25", "-r", "3"])).unwrap();
    assert_eq!(
        args,
        Args {
            input: Some(25),
            runs: Some(3),
            ..Args::default()
        }
    );
}

#[test]
fn negative_input() {
    let args = try_parse_args(gen_args(&["-n", "-1", "--allow-negative"])).unwrap();
    assert_eq!(
        args,
        Args {
            input: Some(-1),
            allow_negative: true,
            ..Args::default()
        }
    );
}

#[test]
fn output_formats() {
    for &(value, format) in [
        ("plain", OutputFormat::Plain),
        ("summary", OutputFormat::Summary),
        ("json", OutputFormat::Json),
    ]
    .iter()
    {
        let args = try_parse_args(gen_args(&["--output-format", value])).unwrap();
        assert_eq!(args.output_format, format);
        assert_eq!(format.to_string(), value);
    }
}

#[test]
fn verbose() {
    let args = try_parse_args(gen_args(&["-v"])).unwrap();
    assert!(args.verbose);
}

#[test]
fn unknown_output_format() {
    let err = try_parse_args(gen_args(&["--output-format", "csv"])).unwrap_err();
    assert!(matches!(err, Error::Clap(_)));
}

#[test]
fn non_numeric_input() {
    let err = try_parse_args(gen_args(&["--input", "thirty"])).unwrap_err();
    match err {
        Error::InvalidValue { flag, value } => {
            assert_eq!(flag, "--input");
            assert_eq!(value, "thirty");
        }
        other => panic!("expected InvalidValue, got {:?}", other),
    }
}

#[test]
fn zero_runs() {
    let err = try_parse_args(gen_args(&["--runs", "0"])).unwrap_err();
    assert!(matches!(err, Error::InvalidValue { flag: "--runs", .. }));
}

#[test]
fn negative_runs() {
    let err = try_parse_args(gen_args(&["--runs", "-2"])).unwrap_err();
    assert!(matches!(err, Error::InvalidValue { flag: "--runs", .. }));
}

#[test]
fn trailing_args() {
    let err = try_parse_args(gen_args(&["30"])).unwrap_err();
    assert!(matches!(err, Error::Clap(_)));
}
