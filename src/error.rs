use std::io;

use thiserror::Error;

/// Errors raised while validating or running a benchmark.
///
/// Faults that the recursion itself can hit (stack exhaustion, overflow in debug builds) are
/// not represented here; they abort the process.
#[derive(Debug, Error)]
pub enum Error {
    /// The Fibonacci argument was negative and the harness was configured to reject it.
    #[error("Fibonacci input must be non-negative, got {input}")]
    NegativeInput {
        /// The rejected argument.
        input: i128,
    },

    /// The Fibonacci number for this argument does not fit in the result type.
    #[error("Fibonacci input {input} is too large, the largest supported input is {max}")]
    InputTooLarge {
        /// The rejected argument.
        input: i128,
        /// The largest argument whose result fits.
        max: i128,
    },

    /// Checked addition overflowed while computing the Fibonacci number.
    #[error("Fibonacci number for input {input} overflows the result type")]
    Overflow {
        /// The argument whose result overflowed.
        input: i128,
    },

    /// Writing the report failed.
    #[error("Failed to write report: {0}")]
    Io(#[from] io::Error),

    /// Serializing the JSON report failed.
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
