//! Standard normal distribution functions.
//!
//! `N(x)` goes through the complementary error function so the lower tail keeps
//! full relative precision (`1 - N(|x|)` would cancel to zero long before
//! `N(-|x|)` underflows).

use std::f64::consts::{PI, SQRT_2};

use statrs::function::erf::erfc;

/// Standard normal cumulative distribution function `N(x)`.
///
/// Defined on the extended reals: `N(-inf) = 0`, `N(+inf) = 1`.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal probability density `phi(x)`.
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}
