//! The set of currently possible hops and the two sampling primitives of
//! the kinetic Monte Carlo algorithm.
//!
//! - [`TransitionSet::sample_event`] picks a hop with probability
//!   proportional to its rate (inverse-CDF over cumulative rates).
//! - [`TransitionSet::sample_waiting_time`] draws the exponentially
//!   distributed time to the next event, `Δt = -ln(u) / R_total`.
//!
//! The two use separate uniform draws, so the chosen hop and the waiting
//! time are independent.

use kmc_core::TransitionError;
use rand::distr::Open01;
use rand::Rng;

use crate::jump::Jump;

/// All hops possible at one instant, with precomputed cumulative rates.
#[derive(Clone, Debug)]
pub struct TransitionSet {
    jumps: Vec<Jump>,
    cumulative: Vec<f64>,
    total_rate: f64,
}

impl TransitionSet {
    /// Build a set from candidate jumps.
    ///
    /// # Errors
    ///
    /// [`TransitionError::InvalidRate`] if any rate is negative, NaN or
    /// infinite.
    pub fn new(jumps: Vec<Jump>) -> Result<Self, TransitionError> {
        let mut cumulative = Vec::with_capacity(jumps.len());
        let mut total_rate = 0.0;
        for (index, jump) in jumps.iter().enumerate() {
            let rate = jump.rate();
            if !rate.is_finite() || rate < 0.0 {
                return Err(TransitionError::InvalidRate { index, rate });
            }
            total_rate += rate;
            cumulative.push(total_rate);
        }
        if !total_rate.is_finite() {
            return Err(TransitionError::InvalidRate {
                index: jumps.len().saturating_sub(1),
                rate: total_rate,
            });
        }
        Ok(Self {
            jumps,
            cumulative,
            total_rate,
        })
    }

    /// Number of candidate hops (including zero-rate ones).
    pub fn len(&self) -> usize {
        self.jumps.len()
    }

    /// Whether there are no candidate hops.
    pub fn is_empty(&self) -> bool {
        self.jumps.is_empty()
    }

    /// Sum of all rates.
    pub fn total_rate(&self) -> f64 {
        self.total_rate
    }

    /// The candidate hops, in enumeration order.
    pub fn jumps(&self) -> &[Jump] {
        &self.jumps
    }

    /// Selection probability of each hop, `rate / R_total`.
    ///
    /// Empty when the total rate is zero.
    pub fn probabilities(&self) -> Vec<f64> {
        if self.total_rate <= 0.0 {
            return Vec::new();
        }
        self.jumps
            .iter()
            .map(|j| j.rate() / self.total_rate)
            .collect()
    }

    fn ensure_available(&self) -> Result<(), TransitionError> {
        if self.jumps.is_empty() || self.total_rate <= 0.0 {
            return Err(TransitionError::NoTransitionsAvailable);
        }
        Ok(())
    }

    /// Pick one hop with probability proportional to its rate.
    ///
    /// One uniform draw `u ∈ [0, 1)` selects the first hop whose
    /// cumulative rate exceeds `u · R_total`. Zero-rate hops are never
    /// selected; equal rates are resolved by list order.
    pub fn sample_event<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Jump, TransitionError> {
        self.ensure_available()?;
        let threshold = rng.random::<f64>() * self.total_rate;
        let index = self.cumulative.partition_point(|&c| c <= threshold);
        let index = if index < self.jumps.len() {
            index
        } else {
            // Rounding put the threshold at the very top of the range.
            self.jumps
                .iter()
                .rposition(|j| j.rate() > 0.0)
                .ok_or(TransitionError::NoTransitionsAvailable)?
        };
        Ok(&self.jumps[index])
    }

    /// Draw the waiting time to the next event, `-ln(u) / R_total` with
    /// `u` uniform on the open interval `(0, 1)`.
    pub fn sample_waiting_time<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, TransitionError> {
        self.ensure_available()?;
        let u: f64 = rng.sample(Open01);
        Ok(-u.ln() / self.total_rate)
    }

    /// Draw the next event and its waiting time (event first).
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<(&Jump, f64), TransitionError> {
        let jump = self.sample_event(rng)?;
        let waiting_time = self.sample_waiting_time(rng)?;
        Ok((jump, waiting_time))
    }
}
