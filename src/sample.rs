//! Function evaluation and fixed-step sampling.
//!
//! A plotted function is anything implementing [`PlotFn`]. Plain
//! `Fn(f64) -> f64` closures and `fn` items qualify directly; a NaN or
//! infinite result counts as a domain error at that sample. Functions that
//! report their own errors can be wrapped in [`Fallible`].
//!
//! Sample positions come from a [`Stride`]: a closed-form arithmetic walk
//! from `start` by a fixed `step` while `x <= end`.

use std::fmt;
use thiserror::Error;

/// Failure to evaluate a function at one sample.
///
/// Recovered locally by the renderers: the sample is skipped and rendering
/// continues.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SampleError {
    /// The function returned NaN or an infinity.
    #[error("non-finite value {y} at x = {x}")]
    NonFinite {
        /// Sample position.
        x: f64,
        /// Value returned.
        y: f64,
    },

    /// The function reported a domain error.
    #[error("domain error at x = {x}: {reason}")]
    Domain {
        /// Sample position.
        x: f64,
        /// Error message from the function.
        reason: String,
    },
}

/// A scalar function `y = f(x)` that may fail at individual points.
pub trait PlotFn {
    /// Evaluate at `x`.
    fn eval(&self, x: f64) -> Result<f64, SampleError>;
}

impl<F: Fn(f64) -> f64> PlotFn for F {
    fn eval(&self, x: f64) -> Result<f64, SampleError> {
        finite(x, self(x))
    }
}

/// Adapter for functions returning `Result`.
///
/// ```
/// use fnplot::sample::{Fallible, PlotFn};
///
/// let log = Fallible(|x: f64| if x > 0.0 { Ok(x.ln()) } else { Err("log of non-positive") });
/// assert!(log.eval(1.0).is_ok());
/// assert!(log.eval(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F, E> PlotFn for Fallible<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: fmt::Display,
{
    fn eval(&self, x: f64) -> Result<f64, SampleError> {
        match (self.0)(x) {
            Ok(y) => finite(x, y),
            Err(err) => Err(SampleError::Domain {
                x,
                reason: err.to_string(),
            }),
        }
    }
}

#[inline]
fn finite(x: f64, y: f64) -> Result<f64, SampleError> {
    if y.is_finite() {
        Ok(y)
    } else {
        Err(SampleError::NonFinite { x, y })
    }
}

/// How sample positions advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum Stepping {
    /// `x_i = start + i * step`. No drift over long intervals.
    #[default]
    Indexed,
    /// `x += step` after every sample. Drift may move the last sample
    /// slightly before or after `end`.
    Accumulated,
}

/// Slack absorbing floating-point error when counting indexed samples, so
/// an `end` that is an exact multiple of `step` is always sampled.
const INDEX_SLACK: f64 = 1e-9;

/// Iterator over sample positions in `[start, end]`.
///
/// `step` must be finite and positive; callers validate before building a
/// stride.
#[derive(Debug, Clone)]
pub struct Stride {
    start: f64,
    end: f64,
    step: f64,
    stepping: Stepping,
    index: u64,
    count: u64,
    x: f64,
}

impl Stride {
    /// Walk from `start` to `end` by `step`.
    #[must_use]
    pub fn new(start: f64, end: f64, step: f64, stepping: Stepping) -> Self {
        let count = match stepping {
            Stepping::Indexed if end >= start => indexed_count(start, end, step),
            _ => 0,
        };
        Self {
            start,
            end,
            step,
            stepping,
            index: 0,
            count,
            x: start,
        }
    }

    /// The position the stride would produce next, ignoring the `end` bound.
    ///
    /// After yielding `x`, this is the right-hand end of the segment that
    /// starts at `x`.
    #[must_use]
    pub fn next_position(&self) -> f64 {
        match self.stepping {
            Stepping::Indexed => self.start + self.index as f64 * self.step,
            Stepping::Accumulated => self.x,
        }
    }
}

/// Samples in `[start, end]`, saturating at `u64::MAX`.
fn indexed_count(start: f64, end: f64, step: f64) -> u64 {
    let n = ((end - start) / step + INDEX_SLACK).floor();
    if n >= u64::MAX as f64 {
        u64::MAX
    } else {
        n as u64 + 1
    }
}

impl Iterator for Stride {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        match self.stepping {
            Stepping::Indexed => {
                if self.index >= self.count {
                    return None;
                }
                let x = self.start + self.index as f64 * self.step;
                self.index += 1;
                Some(x)
            }
            Stepping::Accumulated => {
                if self.x > self.end {
                    return None;
                }
                let x = self.x;
                self.x += self.step;
                if self.x == x {
                    // Step below the precision of x; stop instead of spinning.
                    log::debug!(target: "fnplot", "step {} vanishes at x = {x}", self.step);
                    self.end = f64::NEG_INFINITY;
                }
                self.index += 1;
                Some(x)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.stepping {
            Stepping::Indexed => {
                let left = (self.count - self.index) as usize;
                (left, Some(left))
            }
            Stepping::Accumulated => (0, None),
        }
    }
}
