//! Error types for the Monte Carlo engine.
//!
//! All validation happens synchronously, before any draw is consumed: a
//! pricing invocation either returns a complete result or fails with one of
//! these errors, never a partial or NaN result.

use thiserror::Error;

/// Configuration error for the Monte Carlo pricer.
///
/// These errors occur at construction time, when an invalid simulation
/// configuration is provided.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Draw count outside the valid range `[1, MAX_DRAWS]`.
    #[error("Invalid draw count {0}: must be in range [1, 100_000_000]")]
    InvalidDrawCount(usize),

    /// Antithetic sampling needs at least one pair of paths.
    #[error("Invalid draw count {0} for antithetic sampling: at least 2 draws required")]
    AntitheticDrawCount(usize),

    /// A required configuration field was not set.
    #[error("Missing configuration field '{name}'")]
    MissingField {
        /// Name of the missing field.
        name: &'static str,
    },
}

/// Pricing invocation error.
///
/// Raised when market parameters or estimator settings fail validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Invalid simulation configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Invalid spot price (non-positive or non-finite).
    #[error("Invalid spot: S0 = {spot}")]
    InvalidSpot {
        /// The invalid spot value.
        spot: f64,
    },

    /// Invalid risk-free rate (non-finite).
    #[error("Invalid rate: r = {rate}")]
    InvalidRate {
        /// The invalid rate value.
        rate: f64,
    },

    /// Invalid volatility (negative or non-finite).
    #[error("Invalid volatility: sigma = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value.
        volatility: f64,
    },

    /// Invalid time to maturity (negative or non-finite).
    #[error("Invalid maturity: T = {maturity}")]
    InvalidMaturity {
        /// The invalid maturity value.
        maturity: f64,
    },

    /// Invalid finite-difference perturbation size.
    ///
    /// The bump must be finite, strictly positive and smaller than the spot
    /// (the down-bumped spot must remain positive).
    #[error("Invalid finite-difference bump: h = {bump}")]
    InvalidBump {
        /// The invalid bump value.
        bump: f64,
    },

    /// Pathwise delta requested for a payoff without a closed-form
    /// sensitivity (custom payoffs).
    #[error("Pathwise delta is not available for custom payoffs")]
    PathwiseUnsupported,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidDrawCount(0);
        assert!(err.to_string().contains("Invalid draw count 0"));

        let err = ConfigError::AntitheticDrawCount(1);
        assert!(err.to_string().contains("antithetic"));

        let err = ConfigError::MissingField { name: "seed" };
        assert!(err.to_string().contains("seed"));
    }

    #[test]
    fn test_pricing_error_display() {
        let err = PricingError::InvalidVolatility { volatility: -0.2 };
        assert!(err.to_string().contains("-0.2"));

        let err = PricingError::InvalidBump { bump: 0.0 };
        assert!(err.to_string().contains("h = 0"));
    }

    #[test]
    fn test_config_error_converts() {
        let err: PricingError = ConfigError::InvalidDrawCount(0).into();
        assert!(matches!(
            err,
            PricingError::Config(ConfigError::InvalidDrawCount(0))
        ));
    }
}
