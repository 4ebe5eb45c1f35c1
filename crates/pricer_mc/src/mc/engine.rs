//! Monte Carlo pricing engine.
//!
//! [`MonteCarloPricer`] is the one reduction loop in the crate. It draws
//! standard normals from its exclusively owned [`NormalSource`], evaluates an
//! injected payoff policy and an injected delta-contribution policy per draw,
//! accumulates both sums, and discounts once at the end. The engine itself
//! encodes no option semantics; everything contract-specific arrives through
//! the two policies.
//!
//! The historical near-duplicate variants (plain / antithetic / with-Greeks /
//! antithetic-with-Greeks) collapse into this single loop parameterised by
//! two orthogonal switches: [`VarianceReduction`] on the configuration and
//! [`DeltaEstimator`] per call.
//!
//! # Stream discipline
//!
//! Every public pricing call resets the stream to the configured seed, so an
//! invocation is a pure function of (parameters, payoff, config). The
//! finite-difference estimator relies on this: its up- and down-bumped
//! re-pricings replay the identical draw sequence (common random numbers),
//! so their difference reflects only the spot bump and not fresh sampling
//! noise.

use tracing::debug;

use super::config::{MonteCarloConfig, VarianceReduction};
use super::error::{ConfigError, PricingError};
use super::result::PricingResult;
use crate::model::GbmParams;
use crate::payoff::Payoff;
use crate::rng::NormalSource;

/// Delta-estimation strategy for a pricing invocation.
///
/// Orthogonal to the variance-reduction setting: any estimator composes with
/// plain or antithetic sampling.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DeltaEstimator {
    /// Price only; the result carries no delta.
    #[default]
    None,

    /// Single-pass pathwise differentiation.
    ///
    /// Reuses the pricing draws and accumulates the analytic payoff
    /// derivative per path. Cheap and low-noise, but only available for
    /// payoffs with a closed-form sensitivity (calls and puts).
    Pathwise,

    /// Central finite difference over two full re-pricings at `spot ± bump`.
    ///
    /// Payoff-agnostic but twice the simulation work. Both re-pricings
    /// replay the same draw sequence (common random numbers).
    FiniteDifference {
        /// Spot perturbation size (h). Must be finite, positive and smaller
        /// than the spot.
        bump: f64,
    },
}

/// Running sums of one reduction pass.
///
/// `payoff_sq_sum` tracks the second moment of the per-sample payoff (for
/// antithetic sampling the sample is the pair average), which yields the
/// standard error without a second pass over the draws.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Accumulator {
    pub(crate) payoff_sum: f64,
    pub(crate) payoff_sq_sum: f64,
    pub(crate) delta_sum: f64,
    pub(crate) n_samples: usize,
}

impl Accumulator {
    /// Folds another partial accumulator into this one.
    pub(crate) fn merge(mut self, other: Accumulator) -> Accumulator {
        self.payoff_sum += other.payoff_sum;
        self.payoff_sq_sum += other.payoff_sq_sum;
        self.delta_sum += other.delta_sum;
        self.n_samples += other.n_samples;
        self
    }
}

/// The generic reduction: `n_samples` draws folded through the two policies.
///
/// Each draw is consumed exactly once; both policies observe the same draw.
fn reduce<P, D>(
    rng: &mut NormalSource,
    n_samples: usize,
    mut payoff_policy: P,
    mut delta_policy: D,
) -> Accumulator
where
    P: FnMut(f64) -> f64,
    D: FnMut(f64) -> f64,
{
    let mut acc = Accumulator::default();
    for _ in 0..n_samples {
        let z = rng.next_normal();
        let p = payoff_policy(z);
        acc.payoff_sum += p;
        acc.payoff_sq_sum += p * p;
        acc.delta_sum += delta_policy(z);
        acc.n_samples += 1;
    }
    acc
}

/// Runs the reduction for one (possibly partial) batch of samples.
///
/// Builds the payoff and delta policies for the requested variance-reduction
/// strategy and folds `n_samples` draws from `rng` through them. With
/// antithetic sampling a "sample" is one draw expanded into the pair
/// `(Z, -Z)`; the two path payoffs are averaged before accumulation, and the
/// delta contributions identically.
pub(crate) fn accumulate(
    rng: &mut NormalSource,
    n_samples: usize,
    variance_reduction: VarianceReduction,
    params: GbmParams,
    payoff: Payoff,
    pathwise: bool,
) -> Accumulator {
    let spot = params.spot;
    let delta_of = move |z: f64| {
        let terminal = params.terminal_price(z);
        payoff.pathwise_delta(terminal, spot).unwrap_or(0.0)
    };

    match variance_reduction {
        VarianceReduction::None => {
            let payoff_policy = |z: f64| payoff.evaluate(params.terminal_price(z));
            if pathwise {
                reduce(rng, n_samples, payoff_policy, delta_of)
            } else {
                reduce(rng, n_samples, payoff_policy, |_| 0.0)
            }
        }
        VarianceReduction::Antithetic => {
            let payoff_policy = |z: f64| {
                0.5 * (payoff.evaluate(params.terminal_price(z))
                    + payoff.evaluate(params.terminal_price(-z)))
            };
            if pathwise {
                reduce(rng, n_samples, payoff_policy, |z| {
                    0.5 * (delta_of(z) + delta_of(-z))
                })
            } else {
                reduce(rng, n_samples, payoff_policy, |_| 0.0)
            }
        }
    }
}

/// Number of reduction samples for a draw count under the given strategy.
///
/// Antithetic sampling consumes draws in pairs; an odd draw count silently
/// drops one path (integer division), which is the documented truncation
/// policy.
pub(crate) fn sample_count(n_draws: usize, variance_reduction: VarianceReduction) -> usize {
    match variance_reduction {
        VarianceReduction::None => n_draws,
        VarianceReduction::Antithetic => n_draws / 2,
    }
}

/// Turns an accumulator into a discounted result.
///
/// Discounting is applied exactly once here, never per path.
pub(crate) fn finalise(acc: Accumulator, discount_factor: f64, with_delta: bool) -> PricingResult {
    let n = acc.n_samples as f64;
    let mean = acc.payoff_sum / n;

    let std_error = if acc.n_samples > 1 {
        let variance = ((acc.payoff_sq_sum - n * mean * mean) / (n - 1.0)).max(0.0);
        (variance / n).sqrt()
    } else {
        0.0
    };

    PricingResult {
        price: discount_factor * mean,
        std_error: discount_factor * std_error,
        delta: with_delta.then(|| discount_factor * acc.delta_sum / n),
    }
}

/// Monte Carlo pricing engine for European-style contracts.
///
/// Owns its random stream for the lifetime of each invocation; concurrent
/// invocations need separate pricer instances.
///
/// # Examples
///
/// ```rust
/// use pricer_mc::mc::{MonteCarloConfig, MonteCarloPricer, DeltaEstimator};
/// use pricer_mc::model::GbmParams;
/// use pricer_mc::payoff::Payoff;
///
/// let config = MonteCarloConfig::builder()
///     .n_draws(100_000)
///     .seed(42)
///     .build()
///     .unwrap();
/// let mut pricer = MonteCarloPricer::new(config).unwrap();
///
/// let params = GbmParams { spot: 100.0, rate: 0.05, volatility: 0.2, maturity: 1.0 };
/// let result = pricer
///     .price_with_greeks(params, Payoff::call(105.0), DeltaEstimator::Pathwise)
///     .unwrap();
///
/// println!("price {:.4} delta {:.4}", result.price, result.delta.unwrap());
/// ```
pub struct MonteCarloPricer {
    config: MonteCarloConfig,
    rng: NormalSource,
}

impl MonteCarloPricer {
    /// Creates a new pricer with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is invalid.
    pub fn new(config: MonteCarloConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = NormalSource::from_seed(config.seed());
        Ok(Self { config, rng })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Rewinds the random stream to the configured seed.
    ///
    /// Called at the start of every public pricing invocation, and between
    /// the passes of the finite-difference estimator to enforce common
    /// random numbers.
    pub fn reset(&mut self) {
        self.rng = NormalSource::from_seed(self.config.seed());
    }

    /// Prices a European contract; the result carries no delta.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError`] if the market parameters fail validation.
    pub fn price_european(
        &mut self,
        params: GbmParams,
        payoff: Payoff,
    ) -> Result<PricingResult, PricingError> {
        self.price_with_greeks(params, payoff, DeltaEstimator::None)
    }

    /// Prices a European contract with the requested delta estimator.
    ///
    /// All validation happens before the first draw is consumed; the
    /// invocation is atomic.
    ///
    /// # Errors
    ///
    /// - parameter validation errors from [`GbmParams::validate`]
    /// - [`PricingError::PathwiseUnsupported`] if pathwise estimation is
    ///   requested for a [`Payoff::Custom`]
    /// - [`PricingError::InvalidBump`] if the finite-difference bump is not
    ///   finite, not positive, or at least as large as the spot
    pub fn price_with_greeks(
        &mut self,
        params: GbmParams,
        payoff: Payoff,
        estimator: DeltaEstimator,
    ) -> Result<PricingResult, PricingError> {
        params.validate()?;

        debug!(
            n_draws = self.config.n_draws(),
            variance_reduction = ?self.config.variance_reduction(),
            estimator = ?estimator,
            spot = params.spot,
            "monte carlo pricing invocation"
        );

        match estimator {
            DeltaEstimator::None => {
                self.reset();
                Ok(self.run(params, payoff, false))
            }
            DeltaEstimator::Pathwise => {
                if !payoff.supports_pathwise() {
                    return Err(PricingError::PathwiseUnsupported);
                }
                self.reset();
                Ok(self.run(params, payoff, true))
            }
            DeltaEstimator::FiniteDifference { bump } => {
                if !bump.is_finite() || bump <= 0.0 || bump >= params.spot {
                    return Err(PricingError::InvalidBump { bump });
                }

                self.reset();
                let base = self.run(params, payoff, false);

                // Replay the identical draws for both bumped passes.
                self.reset();
                let up = self.run(params.with_spot_bump(bump), payoff, false);
                self.reset();
                let down = self.run(params.with_spot_bump(-bump), payoff, false);

                Ok(PricingResult {
                    delta: Some((up.price - down.price) / (2.0 * bump)),
                    ..base
                })
            }
        }
    }

    /// One full sequential reduction pass over the configured draw budget.
    fn run(&mut self, params: GbmParams, payoff: Payoff, pathwise: bool) -> PricingResult {
        let variance_reduction = self.config.variance_reduction();
        let n_samples = sample_count(self.config.n_draws(), variance_reduction);
        let acc = accumulate(
            &mut self.rng,
            n_samples,
            variance_reduction,
            params,
            payoff,
            pathwise,
        );
        finalise(acc, params.discount_factor(), pathwise)
    }
}
