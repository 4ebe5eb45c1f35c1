//! Function-level pricing API for European options.
//!
//! Thin wrappers that assemble a configuration, run one pricing invocation
//! on a fresh [`MonteCarloPricer`](crate::mc::MonteCarloPricer) and return
//! the figure of interest. Each function takes an explicit `seed`: supplying
//! or defaulting the seed is the caller's responsibility, never the
//! engine's.
//!
//! # Examples
//!
//! ```rust
//! use pricer_mc::european;
//!
//! let price = european::price_call(100.0, 105.0, 0.05, 0.2, 1.0, 100_000, 42).unwrap();
//! assert!(price > 7.0 && price < 9.0);
//! ```

use crate::mc::{
    DeltaEstimator, MonteCarloConfig, MonteCarloPricer, PricingError, PricingResult,
    VarianceReduction,
};
use crate::model::GbmParams;
use crate::payoff::Payoff;

fn run(
    params: GbmParams,
    payoff: Payoff,
    n_draws: usize,
    variance_reduction: VarianceReduction,
    estimator: DeltaEstimator,
    seed: u64,
) -> Result<PricingResult, PricingError> {
    let config = MonteCarloConfig::builder()
        .n_draws(n_draws)
        .variance_reduction(variance_reduction)
        .seed(seed)
        .build()?;
    let mut pricer = MonteCarloPricer::new(config)?;
    pricer.price_with_greeks(params, payoff, estimator)
}

/// Plain Monte Carlo price of a European call.
///
/// # Errors
///
/// Returns [`PricingError`] if any parameter fails validation.
pub fn price_call(
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
    n_draws: usize,
    seed: u64,
) -> Result<f64, PricingError> {
    let params = GbmParams {
        spot,
        rate,
        volatility,
        maturity,
    };
    run(
        params,
        Payoff::call(strike),
        n_draws,
        VarianceReduction::None,
        DeltaEstimator::None,
        seed,
    )
    .map(|result| result.price)
}

/// Antithetic Monte Carlo price of a European call.
///
/// Uses `n_draws / 2` antithetic pairs; requires `n_draws >= 2`.
///
/// # Errors
///
/// Returns [`PricingError`] if any parameter fails validation.
pub fn price_call_antithetic(
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
    n_draws: usize,
    seed: u64,
) -> Result<f64, PricingError> {
    let params = GbmParams {
        spot,
        rate,
        volatility,
        maturity,
    };
    run(
        params,
        Payoff::call(strike),
        n_draws,
        VarianceReduction::Antithetic,
        DeltaEstimator::None,
        seed,
    )
    .map(|result| result.price)
}

/// Central finite-difference delta of a European call.
///
/// Re-prices at `spot ± bump` on common random numbers and returns
/// `(price_up - price_down) / (2 * bump)`.
///
/// # Errors
///
/// Returns [`PricingError::InvalidBump`] for a zero, negative, non-finite
/// or over-large bump, plus the usual parameter validation.
#[allow(clippy::too_many_arguments)]
pub fn delta_finite_difference(
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
    n_draws: usize,
    bump: f64,
    seed: u64,
) -> Result<f64, PricingError> {
    let params = GbmParams {
        spot,
        rate,
        volatility,
        maturity,
    };
    let result = run(
        params,
        Payoff::call(strike),
        n_draws,
        VarianceReduction::None,
        DeltaEstimator::FiniteDifference { bump },
        seed,
    )?;
    // FiniteDifference always populates the delta.
    Ok(result.delta.unwrap_or_default())
}

/// Single-pass price and pathwise delta of a European call.
///
/// # Errors
///
/// Returns [`PricingError`] if any parameter fails validation.
pub fn price_and_delta_pathwise(
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
    n_draws: usize,
    seed: u64,
) -> Result<PricingResult, PricingError> {
    let params = GbmParams {
        spot,
        rate,
        volatility,
        maturity,
    };
    run(
        params,
        Payoff::call(strike),
        n_draws,
        VarianceReduction::None,
        DeltaEstimator::Pathwise,
        seed,
    )
}

/// Antithetic single-pass price and pathwise delta of a European call.
///
/// # Errors
///
/// Returns [`PricingError`] if any parameter fails validation.
pub fn price_and_delta_antithetic_pathwise(
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
    n_draws: usize,
    seed: u64,
) -> Result<PricingResult, PricingError> {
    let params = GbmParams {
        spot,
        rate,
        volatility,
        maturity,
    };
    run(
        params,
        Payoff::call(strike),
        n_draws,
        VarianceReduction::Antithetic,
        DeltaEstimator::Pathwise,
        seed,
    )
}

/// Plain Monte Carlo price of an arbitrary European payoff.
///
/// Accepts any [`Payoff`] variant, including [`Payoff::Custom`]; the strike
/// (if any) lives inside the payoff.
///
/// # Errors
///
/// Returns [`PricingError`] if any parameter fails validation.
pub fn price_generic(
    spot: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
    n_draws: usize,
    payoff: Payoff,
    seed: u64,
) -> Result<f64, PricingError> {
    let params = GbmParams {
        spot,
        rate,
        volatility,
        maturity,
    };
    run(
        params,
        payoff,
        n_draws,
        VarianceReduction::None,
        DeltaEstimator::None,
        seed,
    )
    .map(|result| result.price)
}
