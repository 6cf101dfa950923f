//! Sampling primitives: a cumulative-weight table for discrete draws and an
//! integer exponential countdown.
//!
//! Both are pure functions of their inputs and the supplied [`SimRng`], so
//! they can be tested without running the simulation loop.

use lift_core::SimRng;

use crate::{ArrivalError, ArrivalResult};

// ── WeightedTable ─────────────────────────────────────────────────────────────

/// Discrete distribution over `0..len` stored as running weight totals.
///
/// `cumulative[i]` is the sum of weights `0..=i`; a draw picks a uniform
/// point in `[0, total)` and binary-searches for the first slot whose
/// running total exceeds it.  Zero-weight slots are never selected.
#[derive(Debug, Clone)]
pub struct WeightedTable {
    cumulative: Vec<f64>,
}

impl WeightedTable {
    /// Build a table from raw weights.
    ///
    /// Fails with [`ArrivalError::SamplingDegenerate`] if any weight is
    /// negative or non-finite, or if all weights are zero.
    pub fn from_weights<I>(weights: I) -> ArrivalResult<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut running = 0.0;
        let mut cumulative = Vec::new();
        for (i, w) in weights.into_iter().enumerate() {
            if !w.is_finite() || w < 0.0 {
                return Err(ArrivalError::SamplingDegenerate(format!(
                    "weight {i} is {w}"
                )));
            }
            running += w;
            cumulative.push(running);
        }
        if !(running > 0.0) {
            return Err(ArrivalError::SamplingDegenerate(format!(
                "all {} weights are zero",
                cumulative.len()
            )));
        }
        Ok(Self { cumulative })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// Sum of all weights.
    #[inline]
    pub fn total(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Weight of slot `i`, or `None` past the end of the table.
    pub fn weight(&self, i: usize) -> Option<f64> {
        (i < self.len()).then(|| self.slot_weight(i))
    }

    /// Draw a slot index.
    pub fn sample(&self, rng: &mut SimRng) -> usize {
        let u = rng.random::<f64>() * self.total();
        self.locate(u)
    }

    /// Draw a slot index other than `excluded`, as if `excluded` had weight 0.
    ///
    /// Equivalent to redrawing with [`sample`][Self::sample] until the result
    /// differs from `excluded`, but never loops.
    pub fn sample_excluding(&self, rng: &mut SimRng, excluded: usize) -> ArrivalResult<usize> {
        if excluded >= self.len() {
            return Ok(self.sample(rng));
        }
        let below = if excluded == 0 { 0.0 } else { self.cumulative[excluded - 1] };
        let skip = self.slot_weight(excluded);
        let remaining = self.total() - skip;
        if !(remaining > 0.0) {
            return Err(ArrivalError::SamplingDegenerate(format!(
                "no weight left after excluding slot {excluded}"
            )));
        }

        // Draw over the remaining mass, then jump over the excluded slot.
        let u = rng.random::<f64>() * remaining;
        let target = if u < below { u } else { u + skip };
        let idx = self.locate(target);
        if idx != excluded {
            return Ok(idx);
        }
        // Rounding put the point on the excluded slot's upper edge.
        self.positive_after(excluded)
            .or_else(|| self.positive_before(excluded))
            .ok_or_else(|| {
                ArrivalError::SamplingDegenerate(format!(
                    "no weight left after excluding slot {excluded}"
                ))
            })
    }

    /// Callers guarantee `i < len`.
    fn slot_weight(&self, i: usize) -> f64 {
        let below = if i == 0 { 0.0 } else { self.cumulative[i - 1] };
        self.cumulative[i] - below
    }

    fn locate(&self, u: f64) -> usize {
        let idx = self.cumulative.partition_point(|&c| c <= u);
        idx.min(self.len() - 1)
    }

    fn positive_after(&self, i: usize) -> Option<usize> {
        (i + 1..self.len()).find(|&j| self.slot_weight(j) > 0.0)
    }

    fn positive_before(&self, i: usize) -> Option<usize> {
        (0..i).rev().find(|&j| self.slot_weight(j) > 0.0)
    }
}

// ── Exponential countdown ─────────────────────────────────────────────────────

/// Ticks until the next event of a Poisson process with `rate` events per
/// tick, rounded down.  Zero means "this tick".
///
/// Uses inverse-CDF sampling: `-ln(1 - U) / rate` with `U` uniform in `[0, 1)`,
/// so the logarithm's argument is never zero.
pub fn exponential_countdown(rng: &mut SimRng, rate: f64) -> ArrivalResult<u64> {
    if !(rate.is_finite() && rate > 0.0) {
        return Err(ArrivalError::SamplingDegenerate(format!(
            "arrival rate must be positive and finite, got {rate}"
        )));
    }
    let u: f64 = rng.random();
    let interval = -(1.0 - u).ln() / rate;
    // `as` saturates, so an astronomically long interval becomes u64::MAX.
    Ok(interval.max(0.0).floor() as u64)
}
