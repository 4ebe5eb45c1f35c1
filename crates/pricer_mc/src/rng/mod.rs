//! # Random Number Generation
//!
//! Draw-source infrastructure for the Monte Carlo engine.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every source is seeded; the seed is retained so a
//!   pricing pass can be replayed draw-for-draw (this is what makes common
//!   random numbers possible in the finite-difference estimator).
//! - **Exclusive ownership**: a source is `&mut`-threaded through exactly one
//!   pricing invocation; nothing in this crate shares a generator.
//! - **No embedded default seed**: constructing a source requires either an
//!   explicit seed or operating-system entropy. The engine never picks a
//!   seed on the caller's behalf.
//!
//! ## Module Structure
//!
//! - [`prng`]: seeded standard-normal source backed by `rand::StdRng` and the
//!   `rand_distr` Ziggurat sampler, plus substream derivation for partitioned
//!   (parallel) reductions.

mod prng;

pub use prng::NormalSource;
