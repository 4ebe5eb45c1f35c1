//! Geometric Brownian Motion terminal-price model.
//!
//! The engine only ever needs the asset price *at maturity*, so the model is
//! the exact GBM solution applied in one step:
//!
//! ```text
//! S_T = S_0 * exp((r - 0.5*sigma^2)*T + sigma*sqrt(T)*Z),  Z ~ N(0, 1)
//! ```
//!
//! This is the single place the risk-neutral dynamics are encoded. Every
//! estimator in the crate routes through [`GbmParams::terminal_price`] (or
//! its antithetic twin using `-Z`), which guarantees consistent modelling
//! across the plain, antithetic, pathwise and finite-difference strategies.

use crate::mc::error::PricingError;

/// Market and contract parameters for one pricing invocation.
///
/// All fields are plain scalars, immutable for the lifetime of the
/// invocation. Strike is not part of the model; it belongs to the
/// [`Payoff`](crate::payoff::Payoff).
///
/// # Examples
///
/// ```rust
/// use pricer_mc::model::GbmParams;
///
/// let params = GbmParams {
///     spot: 100.0,
///     rate: 0.05,
///     volatility: 0.2,
///     maturity: 1.0,
/// };
/// assert!(params.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GbmParams {
    /// Initial spot price (S0).
    pub spot: f64,
    /// Risk-free rate, annualised (r).
    pub rate: f64,
    /// Volatility, annualised (sigma).
    pub volatility: f64,
    /// Time to maturity in years (T).
    pub maturity: f64,
}

impl GbmParams {
    /// Validates the parameters for use in a pricing invocation.
    ///
    /// # Errors
    ///
    /// - [`PricingError::InvalidSpot`] if `spot <= 0` or non-finite
    /// - [`PricingError::InvalidVolatility`] if `volatility < 0` or non-finite
    /// - [`PricingError::InvalidMaturity`] if `maturity < 0` or non-finite
    pub fn validate(&self) -> Result<(), PricingError> {
        if !self.spot.is_finite() || self.spot <= 0.0 {
            return Err(PricingError::InvalidSpot { spot: self.spot });
        }
        if !self.volatility.is_finite() || self.volatility < 0.0 {
            return Err(PricingError::InvalidVolatility {
                volatility: self.volatility,
            });
        }
        if !self.maturity.is_finite() || self.maturity < 0.0 {
            return Err(PricingError::InvalidMaturity {
                maturity: self.maturity,
            });
        }
        if !self.rate.is_finite() {
            return Err(PricingError::InvalidRate { rate: self.rate });
        }
        Ok(())
    }

    /// Maps a standard-normal draw to a simulated terminal price.
    ///
    /// Pure function of the parameters and the draw; no state, no side
    /// effects. With `volatility == 0` the diffusion term vanishes and the
    /// result is exactly `spot * exp(rate * maturity)` for every draw.
    #[inline]
    pub fn terminal_price(&self, z: f64) -> f64 {
        let drift = (self.rate - 0.5 * self.volatility * self.volatility) * self.maturity;
        let diffusion = self.volatility * self.maturity.sqrt() * z;
        self.spot * (drift + diffusion).exp()
    }

    /// Present-value discount factor `exp(-r * T)`.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// Returns a copy with the spot bumped by `bump` (used by the
    /// finite-difference estimator).
    #[inline]
    pub(crate) fn with_spot_bump(&self, bump: f64) -> Self {
        Self {
            spot: self.spot + bump,
            ..*self
        }
    }
}

impl Default for GbmParams {
    fn default() -> Self {
        Self {
            spot: 100.0,
            rate: 0.05,
            volatility: 0.2,
            maturity: 1.0,
        }
    }
}
