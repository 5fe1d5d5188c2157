use std::{fmt, str::FromStr};

/// An unrecognized value for an enumerated option.
#[derive(Debug)]
pub struct TypeParseError(String);

impl fmt::Display for TypeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unexpected value: {}", self.0)
    }
}

impl std::error::Error for TypeParseError {}

/// How the binary prints its result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OutputFormat {
    /// The total elapsed seconds, on one line.
    Plain,
    /// The computed value, the per-run time and the total.
    Summary,
    /// One JSON object.
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Plain
    }
}

impl FromStr for OutputFormat {
    type Err = TypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(Self::Plain),
            "summary" => Ok(Self::Summary),
            "json" => Ok(Self::Json),
            invalid => Err(TypeParseError(invalid.to_owned())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Plain => "plain",
            Self::Summary => "summary",
            Self::Json => "json",
        })
    }
}
