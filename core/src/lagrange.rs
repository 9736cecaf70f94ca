//! Exact Lagrange interpolation over integer sample points.
//!
//! Everything here is rational arithmetic: no modulus, no rounding. A
//! point set with two equal x-coordinates has no interpolating
//! polynomial, which shows up as a `DivisionByZero` from the basis
//! product; callers treat such a set as degenerate and skip it.

use math::error::Result;
use math::prelude::*;
use num_bigint::BigInt;
use num_traits::{One, Zero};

/// The i-th Lagrange basis polynomial for the point set `xs`, evaluated
/// at zero: `prod_{j != i} (0 - x_j) / (x_i - x_j)`.
pub fn lambda_at_zero(xs: &[i64], i: usize) -> Result<Rational> {
    let xi = xs[i];
    let mut lambda = Rational::one();
    for (j, &xj) in xs.iter().enumerate() {
        if j == i {
            continue;
        }
        let factor = Rational::new(
            -BigInt::from(xj),
            BigInt::from(xi) - BigInt::from(xj),
        )?;
        lambda = &lambda * &factor;
    }
    Ok(lambda)
}

/// P(0) of the unique polynomial through `(xs, ys)`: `sum y_i * lambda_i`.
pub fn interpolate_at_zero(xs: &[i64], ys: &[BigInt]) -> Result<Rational> {
    assert_eq!(xs.len(), ys.len());
    let mut sum = Rational::zero();
    for (i, y) in ys.iter().enumerate() {
        let lambda = lambda_at_zero(xs, i)?;
        sum = &sum + &(&Rational::from(y.clone()) * &lambda);
    }
    Ok(sum)
}

/// Evaluate the unique polynomial through `(xs, ys)` at `xq`.
///
/// When `xq` hits a sample point the stored value is returned directly;
/// the general basis formula would put 0/0 in the product there.
pub fn interpolate_at(xs: &[i64], ys: &[BigInt], xq: i64) -> Result<Rational> {
    assert_eq!(xs.len(), ys.len());
    if let Some(i) = xs.iter().position(|&x| x == xq) {
        return Ok(Rational::from(ys[i].clone()));
    }

    let mut sum = Rational::zero();
    for (i, y) in ys.iter().enumerate() {
        let xi = xs[i];
        let mut basis = Rational::one();
        for (j, &xj) in xs.iter().enumerate() {
            if j == i {
                continue;
            }
            let factor = Rational::new(
                BigInt::from(xq) - BigInt::from(xj),
                BigInt::from(xi) - BigInt::from(xj),
            )?;
            basis = &basis * &factor;
        }
        sum = &sum + &(&Rational::from(y.clone()) * &basis);
    }
    Ok(sum)
}
