//! `fibbench`: times `fib(30)` five times and prints the total elapsed seconds.

use std::io::{self, Write};
use std::process;

use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fibbench::cli::{self, OutputFormat};
use fibbench::measurement::Measurement;
use fibbench::{report, Error, Harness};

fn main() {
    let args = cli::parse_args();
    init_logging(args.verbose);
    debug!(?args, "parsed arguments");

    let harness = Harness::default().configure_from_args(&args);
    if let Err(e) = run(&harness, args.output_format) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

// Logs go to stderr so that stdout only carries the result.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "fibbench=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(harness: &Harness, format: OutputFormat) -> Result<(), Error> {
    let timing = harness.run()?;
    debug!(value = timing.value, total_ns = timing.total, "benchmark finished");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::for_format(format).measurement_complete(
        &timing,
        harness.measurement().formatter(),
        &mut out,
    )?;
    out.flush()?;
    Ok(())
}
