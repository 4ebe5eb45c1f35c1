//! Monte Carlo simulation configuration.
//!
//! Configuration is validated at build time: a [`MonteCarloConfig`] that
//! exists is always runnable. The builder makes the seed a required field so
//! the engine can never fall back to an embedded default seed; callers that
//! want non-reproducible runs seed from entropy explicitly (see
//! [`NormalSource::from_entropy`](crate::rng::NormalSource::from_entropy)).

use super::error::ConfigError;

/// Maximum number of draws allowed per invocation.
pub const MAX_DRAWS: usize = 100_000_000;

/// Variance-reduction strategy applied by the reduction loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VarianceReduction {
    /// Plain sampling: one path per draw.
    #[default]
    None,

    /// Antithetic sampling: each draw Z yields the pair (Z, -Z) and the two
    /// path payoffs are averaged before entering the accumulator.
    ///
    /// `n_draws / 2` pairs are simulated; an odd draw count silently drops
    /// one path. Requires `n_draws >= 2`.
    Antithetic,
}

/// Monte Carlo simulation configuration.
///
/// Immutable once built. Use [`MonteCarloConfig::builder`] to construct.
///
/// # Examples
///
/// ```rust
/// use pricer_mc::mc::{MonteCarloConfig, VarianceReduction};
///
/// let config = MonteCarloConfig::builder()
///     .n_draws(100_000)
///     .variance_reduction(VarianceReduction::Antithetic)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_draws(), 100_000);
/// assert_eq!(config.seed(), 42);
/// ```
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonteCarloConfig {
    n_draws: usize,
    variance_reduction: VarianceReduction,
    seed: u64,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of random draws per invocation.
    #[inline]
    pub fn n_draws(&self) -> usize {
        self.n_draws
    }

    /// Returns the variance-reduction strategy.
    #[inline]
    pub fn variance_reduction(&self) -> VarianceReduction {
        self.variance_reduction
    }

    /// Returns the random-stream seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidDrawCount`] if `n_draws` is 0 or above [`MAX_DRAWS`]
    /// - [`ConfigError::AntitheticDrawCount`] if antithetic sampling is
    ///   requested with fewer than 2 draws (zero pairs would divide by zero)
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_draws == 0 || self.n_draws > MAX_DRAWS {
            return Err(ConfigError::InvalidDrawCount(self.n_draws));
        }
        if self.variance_reduction == VarianceReduction::Antithetic && self.n_draws < 2 {
            return Err(ConfigError::AntitheticDrawCount(self.n_draws));
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// `n_draws` and `seed` are required; `variance_reduction` defaults to
/// [`VarianceReduction::None`].
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_draws: Option<usize>,
    variance_reduction: VarianceReduction,
    seed: Option<u64>,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of random draws per invocation.
    #[inline]
    pub fn n_draws(mut self, n_draws: usize) -> Self {
        self.n_draws = Some(n_draws);
        self
    }

    /// Sets the variance-reduction strategy.
    #[inline]
    pub fn variance_reduction(mut self, variance_reduction: VarianceReduction) -> Self {
        self.variance_reduction = variance_reduction;
        self
    }

    /// Sets the random-stream seed.
    ///
    /// Required. The engine never supplies a default seed; reproducible
    /// demonstrations pick one explicitly, production callers may pass a
    /// value drawn from entropy.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] if `n_draws` or `seed` was not
    /// set, and the validation errors of [`MonteCarloConfig::validate`].
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let n_draws = self
            .n_draws
            .ok_or(ConfigError::MissingField { name: "n_draws" })?;
        let seed = self.seed.ok_or(ConfigError::MissingField { name: "seed" })?;

        let config = MonteCarloConfig {
            n_draws,
            variance_reduction: self.variance_reduction,
            seed,
        };

        config.validate()?;
        Ok(config)
    }
}
