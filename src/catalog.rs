//! Named functions for scene files.

use crate::error::{Error, Result};

/// A catalog entry.
pub type NamedFn = fn(f64) -> f64;

/// `x * x`
#[must_use]
pub fn square(x: f64) -> f64 {
    x * x
}

/// `-3x^2 + 2x + 1`
#[must_use]
pub fn quadratic(x: f64) -> f64 {
    -3.0 * square(x) + 2.0 * x + 1.0
}

/// `x sin x`
#[must_use]
pub fn x_sin_x(x: f64) -> f64 {
    x * x.sin()
}

/// `x / tan x`, NaN at multiples of pi/2 where tan is zero or infinite.
#[must_use]
pub fn x_over_tan_x(x: f64) -> f64 {
    x / x.tan()
}

/// `sin(60 / x)`, defined as 0 at the origin.
#[must_use]
pub fn sin_60_over_x(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        (60.0 / x).sin()
    }
}

/// `sin(6x^2)`
#[must_use]
pub fn sin_6x2(x: f64) -> f64 {
    (6.0 * x * x).sin()
}

/// `1 / x`, infinite at the origin.
#[must_use]
pub fn reciprocal(x: f64) -> f64 {
    1.0 / x
}

const ENTRIES: &[(&str, NamedFn)] = &[
    ("sin", f64::sin),
    ("cos", f64::cos),
    ("tan", f64::tan),
    ("exp", f64::exp),
    ("ln", f64::ln),
    ("sqrt", f64::sqrt),
    ("abs", f64::abs),
    ("square", square),
    ("quadratic", quadratic),
    ("x_sin_x", x_sin_x),
    ("x_over_tan_x", x_over_tan_x),
    ("sin_60_over_x", sin_60_over_x),
    ("sin_6x2", sin_6x2),
    ("reciprocal", reciprocal),
];

/// Look up a function by name.
#[must_use]
pub fn get(name: &str) -> Option<NamedFn> {
    ENTRIES.iter().find(|(n, _)| *n == name).map(|(_, f)| *f)
}

/// Look up a function by name, failing on unknown names.
///
/// # Errors
///
/// Returns [`Error::UnknownFunction`] if `name` is not in the catalog.
pub fn resolve(name: &str) -> Result<NamedFn> {
    get(name).ok_or_else(|| Error::UnknownFunction(name.to_string()))
}

/// All catalog names in a stable order.
pub fn names() -> impl Iterator<Item = &'static str> {
    ENTRIES.iter().map(|(n, _)| *n)
}
