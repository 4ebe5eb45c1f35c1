//! Parallel reduction over partitioned draw chunks.
//!
//! The reduction is embarrassingly parallel: each draw is independent given
//! its own stream position. The draw budget is partitioned into fixed-size
//! chunks, each chunk runs on its own counter-derived substream (see
//! [`NormalSource::substream`]), and the partial accumulators are merged in
//! chunk-index order.
//!
//! Because the partition depends only on the sample count (never on the
//! rayon thread count) and the merge order is fixed, a parallel invocation
//! is bit-for-bit reproducible across machines and thread pools. The
//! parallel result differs from the sequential one, since the draws come
//! from different stream positions, but it is just as valid an estimator
//! and just as deterministic.

use rayon::prelude::*;
use tracing::debug;

use super::engine::{
    accumulate, finalise, sample_count, Accumulator, DeltaEstimator, MonteCarloPricer,
};
use super::error::PricingError;
use super::result::PricingResult;
use crate::model::GbmParams;
use crate::payoff::Payoff;
use crate::rng::NormalSource;

/// Samples per worker chunk.
///
/// Fixed so the partition (and therefore the result) is independent of the
/// executing thread pool.
pub const SAMPLES_PER_CHUNK: usize = 16_384;

impl MonteCarloPricer {
    /// Prices a European contract with the draws partitioned across the
    /// rayon thread pool; the result carries no delta.
    ///
    /// # Errors
    ///
    /// Same validation as [`MonteCarloPricer::price_european`].
    pub fn price_european_parallel(
        &self,
        params: GbmParams,
        payoff: Payoff,
    ) -> Result<PricingResult, PricingError> {
        self.price_with_greeks_parallel(params, payoff, DeltaEstimator::None)
    }

    /// Parallel counterpart of [`MonteCarloPricer::price_with_greeks`].
    ///
    /// Takes `&self`: the pricer's own stream is untouched, every chunk
    /// derives its substream from the configured seed and its chunk index.
    /// The finite-difference passes reuse the same substreams, so common
    /// random numbers hold in parallel exactly as they do sequentially.
    ///
    /// # Errors
    ///
    /// Same validation as [`MonteCarloPricer::price_with_greeks`].
    pub fn price_with_greeks_parallel(
        &self,
        params: GbmParams,
        payoff: Payoff,
        estimator: DeltaEstimator,
    ) -> Result<PricingResult, PricingError> {
        params.validate()?;

        debug!(
            n_draws = self.config().n_draws(),
            estimator = ?estimator,
            "parallel monte carlo pricing invocation"
        );

        match estimator {
            DeltaEstimator::None => Ok(self.run_parallel(params, payoff, false)),
            DeltaEstimator::Pathwise => {
                if !payoff.supports_pathwise() {
                    return Err(PricingError::PathwiseUnsupported);
                }
                Ok(self.run_parallel(params, payoff, true))
            }
            DeltaEstimator::FiniteDifference { bump } => {
                if !bump.is_finite() || bump <= 0.0 || bump >= params.spot {
                    return Err(PricingError::InvalidBump { bump });
                }

                let base = self.run_parallel(params, payoff, false);
                let up = self.run_parallel(params.with_spot_bump(bump), payoff, false);
                let down = self.run_parallel(params.with_spot_bump(-bump), payoff, false);

                Ok(PricingResult {
                    delta: Some((up.price - down.price) / (2.0 * bump)),
                    ..base
                })
            }
        }
    }

    fn run_parallel(&self, params: GbmParams, payoff: Payoff, pathwise: bool) -> PricingResult {
        let variance_reduction = self.config().variance_reduction();
        let n_samples = sample_count(self.config().n_draws(), variance_reduction);
        let seed = self.config().seed();
        let n_chunks = n_samples.div_ceil(SAMPLES_PER_CHUNK);

        let partials: Vec<Accumulator> = (0..n_chunks)
            .into_par_iter()
            .map(|chunk| {
                let start = chunk * SAMPLES_PER_CHUNK;
                let len = SAMPLES_PER_CHUNK.min(n_samples - start);
                let mut rng = NormalSource::substream(seed, chunk as u64);
                accumulate(&mut rng, len, variance_reduction, params, payoff, pathwise)
            })
            .collect();

        // Fixed merge order: chunk 0 first, regardless of which thread
        // finished when.
        let acc = partials
            .into_iter()
            .fold(Accumulator::default(), Accumulator::merge);

        finalise(acc, params.discount_factor(), pathwise)
    }
}
