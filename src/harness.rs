use tracing::debug;

use crate::cli::Args;
use crate::fib::{fib, MAX_I64_INPUT};
use crate::measurement::{Measurement, WallTime};
use crate::{black_box, Error};

/// What the harness does with a negative Fibonacci argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NegativeInput {
    /// Refuse to run and return [`Error::NegativeInput`](enum.Error.html).
    Reject,
    /// Time the call anyway. `fib(n)` returns any `n < 2` unchanged, so this reproduces the
    /// textbook function exactly.
    PassThrough,
}

/// Timer struct used to iterate a routine inside one measurement interval.
///
/// The harness hands a `Bencher` to the function passed to
/// [`Harness::run_function`](struct.Harness.html#method.run_function). That function must call
/// [`iter`](#method.iter) exactly as it would call its workload.
pub struct Bencher<'a, M: Measurement = WallTime> {
    iterated: bool,
    iters: u64,
    value: M::Value,
    measurement: &'a M,
}
impl<'a, M: Measurement> Bencher<'a, M> {
    /// Times `routine` by calling it once per configured run, with a single measurement
    /// around all of the calls.
    ///
    /// Output values are passed through [`black_box`](fn.black_box.html) so that the calls
    /// can't be optimized away. Calling `iter` more than once adds the elapsed values together.
    #[inline(never)]
    pub fn iter<O, R>(&mut self, mut routine: R)
    where
        R: FnMut() -> O,
    {
        self.iterated = true;
        let start = self.measurement.start();
        for _ in 0..self.iters {
            black_box(routine());
        }
        let elapsed = self.measurement.end(start);
        self.value = self.measurement.add(&self.value, &elapsed);
    }

    /// The number of calls `iter` makes.
    pub fn iters(&self) -> u64 {
        self.iters
    }

    fn assert_iterated(&mut self) {
        if !self.iterated {
            panic!("Timed function must call Bencher::iter");
        }
        self.iterated = false;
    }
}

/// Result of one harness run.
///
/// `total` is in the native unit of the measurement that produced it (nanoseconds for
/// [`WallTime`](measurement/struct.WallTime.html)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    /// The Fibonacci argument.
    pub input: i64,
    /// How many times `fib(input)` was called.
    pub runs: u64,
    /// The Fibonacci number the calls produced.
    pub value: i64,
    /// Total measured value across all runs.
    pub total: f64,
}

impl Timing {
    /// Mean measured value of a single run.
    pub fn per_run(&self) -> f64 {
        self.total / self.runs as f64
    }
}

/// The timing harness. Calls `fib(input)` `runs` times in a row and measures the total.
///
/// Configure it with the builder methods, starting from `Harness::default()`, which times
/// `fib(30)` five times with wall-clock time:
///
/// ```
/// use fibbench::{Harness, NegativeInput};
///
/// let harness = Harness::default()
///     .input(15)
///     .runs(2)
///     .negative_input(NegativeInput::Reject);
/// let timing = harness.run().unwrap();
/// assert_eq!(timing.value, 610);
/// assert!(timing.total >= 0.0);
/// ```
pub struct Harness<M: Measurement = WallTime> {
    input: i64,
    runs: u64,
    negative_input: NegativeInput,
    measurement: M,
}

impl Default for Harness {
    fn default() -> Harness {
        Harness {
            input: 30,
            runs: 5,
            negative_input: NegativeInput::Reject,
            measurement: WallTime,
        }
    }
}

impl<M: Measurement> Harness<M> {
    /// Changes the measurement used to time the runs.
    pub fn with_measurement<M2: Measurement>(self, m: M2) -> Harness<M2> {
        Harness {
            input: self.input,
            runs: self.runs,
            negative_input: self.negative_input,
            measurement: m,
        }
    }

    /// Changes the Fibonacci argument. Defaults to 30.
    pub fn input(mut self, n: i64) -> Harness<M> {
        self.input = n;
        self
    }

    /// Changes the number of timed calls. Defaults to 5.
    ///
    /// # Panics
    ///
    /// Panics if n is zero.
    pub fn runs(mut self, n: u64) -> Harness<M> {
        assert!(n > 0, "runs must be at least 1");

        self.runs = n;
        self
    }

    /// Changes how negative input is handled. Defaults to `NegativeInput::Reject`.
    pub fn negative_input(mut self, policy: NegativeInput) -> Harness<M> {
        self.negative_input = policy;
        self
    }

    /// Overrides the configuration with the values given on the command line.
    #[must_use]
    pub fn configure_from_args(mut self, args: &Args) -> Harness<M> {
        if let Some(input) = args.input {
            self = self.input(input);
        }
        if let Some(runs) = args.runs {
            self = self.runs(runs);
        }
        if args.allow_negative {
            self = self.negative_input(NegativeInput::PassThrough);
        }
        self
    }

    /// The measurement this harness times with.
    pub fn measurement(&self) -> &M {
        &self.measurement
    }

    /// Validates the input, then times `runs` calls of `fib(input)`.
    pub fn run(&self) -> Result<Timing, Error> {
        let input = self.validate()?;
        debug!(input, runs = self.runs, "timing fib");

        let mut value = 0;
        let total = self.run_function(|b| {
            b.iter(|| {
                value = fib(black_box(input));
                value
            })
        });

        Ok(Timing {
            input,
            runs: self.runs,
            value,
            total,
        })
    }

    /// Times an arbitrary routine. `f` receives a [`Bencher`](struct.Bencher.html) and must
    /// call `Bencher::iter` with the code to be timed. Returns the total measured value as f64.
    ///
    /// # Panics
    ///
    /// Panics if `f` never calls `Bencher::iter`.
    pub fn run_function<F>(&self, mut f: F) -> f64
    where
        F: FnMut(&mut Bencher<'_, M>),
    {
        let mut b = Bencher {
            iterated: false,
            iters: self.runs,
            value: self.measurement.zero(),
            measurement: &self.measurement,
        };

        f(&mut b);
        b.assert_iterated();

        let total = self.measurement.to_f64(&b.value);
        let elapsed = self.measurement.formatter().format_value(total);
        debug!(runs = self.runs, elapsed = elapsed.trim(), "runs complete");
        total
    }

    fn validate(&self) -> Result<i64, Error> {
        if self.input < 0 && self.negative_input == NegativeInput::Reject {
            Err(Error::NegativeInput {
                input: self.input.into(),
            })
        } else if self.input > MAX_I64_INPUT {
            Err(Error::InputTooLarge {
                input: self.input.into(),
                max: MAX_I64_INPUT.into(),
            })
        } else {
            Ok(self.input)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_times_fib_30_five_times() {
        let harness = Harness::default();
        assert_eq!(harness.input, 30);
        assert_eq!(harness.runs, 5);
        assert_eq!(harness.negative_input, NegativeInput::Reject);
    }

    #[test]
    fn rejects_negative_input_by_default() {
        match Harness::default().input(-1).run() {
            Err(Error::NegativeInput { input }) => assert_eq!(input, -1),
            other => panic!("expected NegativeInput, got {:?}", other),
        }
    }

    #[test]
    fn passes_negative_input_through_when_asked() {
        let timing = Harness::default()
            .input(-1)
            .negative_input(NegativeInput::PassThrough)
            .run()
            .unwrap();
        assert_eq!(timing.value, -1);
        assert_eq!(timing.runs, 5);
    }

    #[test]
    fn rejects_input_that_overflows_i64() {
        assert!(Harness::default().input(MAX_I64_INPUT).validate().is_ok());
        match Harness::default().input(MAX_I64_INPUT + 1).run() {
            Err(Error::InputTooLarge { input, max }) => {
                assert_eq!(input, 93);
                assert_eq!(max, 92);
            }
            other => panic!("expected InputTooLarge, got {:?}", other),
        }
    }

    #[test]
    fn routine_runs_once_per_configured_run() {
        let mut calls = 0;
        Harness::default().runs(7).run_function(|b| {
            assert_eq!(b.iters(), 7);
            b.iter(|| calls += 1)
        });
        assert_eq!(calls, 7);
    }

    #[test]
    #[should_panic(expected = "Bencher::iter")]
    fn routine_must_iterate() {
        Harness::default().run_function(|_| {});
    }

    #[test]
    #[should_panic(expected = "runs must be at least 1")]
    fn zero_runs_is_rejected() {
        let _ = Harness::default().runs(0);
    }

    #[test]
    fn per_run_is_the_mean() {
        let timing = Timing {
            input: 30,
            runs: 4,
            value: 832_040,
            total: 10.0,
        };
        assert_eq!(timing.per_run(), 2.5);
    }
}
