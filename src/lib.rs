//! A naive recursive Fibonacci micro-benchmark.
//!
//! The crate has two halves: [`fib`](fib/fn.fib.html), the textbook doubly-recursive Fibonacci
//! function, and [`Harness`](struct.Harness.html), which calls it a fixed number of times and
//! measures the total wall-clock time.
//!
//! ## Example
//!
//! ```
//! use fibbench::Harness;
//!
//! let timing = Harness::default().input(20).runs(3).run().unwrap();
//! assert_eq!(timing.value, 6765);
//! assert_eq!(timing.runs, 3);
//! ```
//!
//! Nothing here is meant to be fast. The point is to execute the same exponential amount of
//! work on every run so that the elapsed time can be compared across machines and builds.

#![warn(missing_docs)]

#[macro_use]
extern crate serde_derive;

pub mod cli;
mod error;
pub mod fib;
pub mod format;
mod harness;
pub mod measurement;
pub mod report;

pub use crate::error::Error;
pub use crate::harness::{Bencher, Harness, NegativeInput, Timing};

/// A function that is opaque to the optimizer, used to prevent the compiler from
/// optimizing away computations in a benchmark.
///
/// Without it the result of `fib(30)` could be folded into a constant, or the call dropped
/// altogether since nothing reads the value.
pub fn black_box<T>(dummy: T) -> T {
    std::hint::black_box(dummy)
}
