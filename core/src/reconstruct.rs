//! Robust reconstruction: search every threshold-sized share subset for
//! the polynomial consistent with the largest number of supplied shares,
//! then read the secret off that polynomial at zero.

use num_bigint::BigInt;
use serde::Serialize;

use crate::combinations::Combinations;
use crate::error::{ReconstructError, ReconstructResult};
use crate::lagrange;
use crate::share::Share;

/// Outcome of a reconstruction run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Reconstruction {
    /// P(0) of the winning subset's interpolating polynomial.
    pub secret: BigInt,
    /// How many of the supplied shares that polynomial reproduces.
    pub inlier_count: usize,
    /// Original-list positions the polynomial does not reproduce, in
    /// ascending order.
    pub wrong_positions: Vec<usize>,
}

impl Reconstruction {
    /// The declared indices (x-coordinates) of the wrong shares, for
    /// presentation against the caller's original share list.
    pub fn wrong_share_indices(&self, shares: &[Share]) -> Vec<i64> {
        self.wrong_positions.iter().map(|&p| shares[p].x).collect()
    }
}

struct Candidate {
    secret: BigInt,
    inlier_count: usize,
    inlier_mask: Vec<bool>,
}

/// Exhaustive-search reconstructor for a fixed threshold.
///
/// The search cost is C(n, k) subset evaluations of O(n * k) rational
/// operations each; n and k are share counts, tens at most in the
/// intended use.
#[derive(Clone, Debug)]
pub struct RobustReconstructor {
    threshold: usize,
}

impl RobustReconstructor {
    /// Initialize a reconstructor for polynomials of degree
    /// `threshold - 1`.
    pub fn new(threshold: usize) -> ReconstructResult<Self> {
        if threshold == 0 {
            return Err(ReconstructError::InvalidThreshold(threshold));
        }
        Ok(Self { threshold })
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Reconstruct the secret from `shares`, tolerating corrupted
    /// entries.
    ///
    /// Every threshold-sized subset is interpolated; subsets with
    /// coincident x-coordinates or a fractional value at zero are
    /// skipped. Surviving subsets are scored by how many of the supplied
    /// shares their polynomial reproduces exactly, and the
    /// highest-scoring subset wins. Ties keep the subset that enumerates
    /// first, so the result is deterministic.
    pub fn reconstruct(
        &self,
        shares: &[Share],
    ) -> ReconstructResult<Reconstruction> {
        if shares.len() < self.threshold {
            return Err(ReconstructError::InsufficientShares {
                required: self.threshold,
                provided: shares.len(),
            });
        }

        let mut best: Option<Candidate> = None;
        for subset in Combinations::new(shares.len(), self.threshold) {
            let Some(candidate) = evaluate_subset(shares, &subset) else {
                continue;
            };
            let improves = best
                .as_ref()
                .map_or(true, |b| candidate.inlier_count > b.inlier_count);
            if improves {
                best = Some(candidate);
            }
        }

        let best =
            best.ok_or(ReconstructError::NoConsistentReconstruction)?;
        let wrong_positions = best
            .inlier_mask
            .iter()
            .enumerate()
            .filter(|&(_, &inlier)| !inlier)
            .map(|(position, _)| position)
            .collect();

        Ok(Reconstruction {
            secret: best.secret,
            inlier_count: best.inlier_count,
            wrong_positions,
        })
    }
}

/// Evaluate one subset: interpolate its polynomial, reject degenerate and
/// fractional candidates, and count the shares the polynomial reproduces.
fn evaluate_subset(shares: &[Share], subset: &[usize]) -> Option<Candidate> {
    let xs: Vec<i64> = subset.iter().map(|&p| shares[p].x).collect();
    let ys: Vec<BigInt> = subset.iter().map(|&p| shares[p].y.clone()).collect();

    let at_zero = lagrange::interpolate_at_zero(&xs, &ys).ok()?;
    let secret = at_zero.into_integer()?;

    let mut inlier_mask = vec![false; shares.len()];
    let mut inlier_count = 0;
    for (position, share) in shares.iter().enumerate() {
        match lagrange::interpolate_at(&xs, &ys, share.x) {
            Ok(value) if value.is_integer() && value.numer() == &share.y => {
                inlier_mask[position] = true;
                inlier_count += 1;
            }
            _ => {}
        }
    }

    Some(Candidate {
        secret,
        inlier_count,
        inlier_mask,
    })
}
