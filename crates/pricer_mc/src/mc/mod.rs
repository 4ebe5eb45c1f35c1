//! Monte Carlo simulation engine.
//!
//! This module contains the generic reduction loop and everything that
//! parameterises it:
//!
//! ```text
//! MonteCarloPricer
//! ├── MonteCarloConfig   (draw count, variance reduction, seed)
//! ├── NormalSource       (exclusively owned draw stream)
//! └── per invocation
//!     ├── payoff policy   p(Z)  (injected, contract-specific)
//!     ├── delta policy    d(Z)  (injected, estimator-specific)
//!     └── finalise: discount the accumulated means exactly once
//! ```
//!
//! The two orthogonal switches, [`VarianceReduction`] on the configuration
//! and [`DeltaEstimator`] per call, replace what would otherwise be four
//! near-identical engine variants.
//!
//! # Examples
//!
//! ```rust
//! use pricer_mc::mc::{DeltaEstimator, MonteCarloConfig, MonteCarloPricer, VarianceReduction};
//! use pricer_mc::model::GbmParams;
//! use pricer_mc::payoff::Payoff;
//!
//! let config = MonteCarloConfig::builder()
//!     .n_draws(100_000)
//!     .variance_reduction(VarianceReduction::Antithetic)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! let mut pricer = MonteCarloPricer::new(config).unwrap();
//!
//! let params = GbmParams { spot: 100.0, rate: 0.05, volatility: 0.2, maturity: 1.0 };
//! let result = pricer
//!     .price_with_greeks(params, Payoff::call(105.0), DeltaEstimator::Pathwise)
//!     .unwrap();
//!
//! println!("price {:.4} +/- {:.4}", result.price, result.confidence_95());
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod parallel;
pub mod result;

// Re-exports for convenient access
pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, VarianceReduction, MAX_DRAWS};
pub use engine::{DeltaEstimator, MonteCarloPricer};
pub use error::{ConfigError, PricingError};
pub use parallel::SAMPLES_PER_CHUNK;
pub use result::PricingResult;
