use thiserror::Error;

/// Reasons argument parsing did not produce [`Args`](struct.Args.html).
#[derive(Debug, Error)]
pub enum Error {
    /// `--help` was given. Holds the rendered help text.
    #[error("Signals to display help")]
    DisplayHelp(String),
    /// `--version` was given. clap prints the version itself.
    #[error("Signals to display version")]
    DisplayVersion,
    /// clap rejected the arguments.
    #[error("{0}")]
    Clap(clap::Error),
    /// A value could not be parsed or is out of range.
    #[error("Invalid value for '{flag}': {value}")]
    InvalidValue {
        /// The offending flag.
        flag: &'static str,
        /// The value given for it.
        value: String,
    },
}

impl From<clap::Error> for Error {
    fn from(e: clap::Error) -> Self {
        match e.kind {
            clap::ErrorKind::HelpDisplayed => Self::DisplayHelp(e.message),
            clap::ErrorKind::VersionDisplayed => Self::DisplayVersion,
            _ => Self::Clap(e),
        }
    }
}
