//! The benchmarked workload: the naive doubly-recursive Fibonacci function.
//!
//! Every function here recomputes overlapping subproblems on purpose. `fib(n)` performs
//! `2 * fib(n + 1) - 1` calls, which is what makes it a useful fixed-size CPU workload.

use num_traits::PrimInt;

use crate::Error;

/// The largest argument whose Fibonacci number fits in an `i64`.
pub const MAX_I64_INPUT: i64 = 92;

/// Returns the `n`-th Fibonacci number, with `fib(0) = 0` and `fib(1) = 1`.
///
/// Any `n < 2` is returned unchanged, so a negative argument comes back as itself
/// (`fib(-1) == -1`). Use [`try_fib`](fn.try_fib.html) to reject negative input instead.
///
/// Overflow follows native integer arithmetic: it panics in debug builds and wraps in release
/// builds.
pub fn fib<T: PrimInt>(n: T) -> T {
    let two = T::one() + T::one();
    if n < two {
        n
    } else {
        fib(n - two) + fib(n - T::one())
    }
}

/// Like [`fib`](fn.fib.html), but fails on negative input and on overflow of `T`.
pub fn try_fib<T: PrimInt>(n: T) -> Result<T, Error> {
    if n < T::zero() {
        return Err(Error::NegativeInput { input: widen(n) });
    }
    checked(n).ok_or_else(|| Error::Overflow { input: widen(n) })
}

/// Like [`fib`](fn.fib.html), but also returns how many times the function was entered,
/// counting the outermost call.
pub fn counted<T: PrimInt>(n: T) -> (T, u64) {
    let mut calls = 0;
    let value = count_calls(n, &mut calls);
    (value, calls)
}

fn checked<T: PrimInt>(n: T) -> Option<T> {
    let two = T::one() + T::one();
    if n < two {
        Some(n)
    } else {
        checked(n - two)?.checked_add(&checked(n - T::one())?)
    }
}

fn count_calls<T: PrimInt>(n: T, calls: &mut u64) -> T {
    *calls += 1;
    let two = T::one() + T::one();
    if n < two {
        n
    } else {
        count_calls(n - two, calls) + count_calls(n - T::one(), calls)
    }
}

// Unsigned values above i128::MAX can't be negative, and they are far too large to recurse on.
fn widen<T: PrimInt>(n: T) -> i128 {
    n.to_i128().unwrap_or(i128::MAX)
}
