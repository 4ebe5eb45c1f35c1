//! Payoff type definitions.
//!
//! A payoff is a pure function of the terminal asset price. The closed
//! variant keeps the engine contract-agnostic: built-in call and put payoffs
//! carry their strike, and [`Payoff::Custom`] admits arbitrary user-supplied
//! payoff logic via a plain function pointer.
//!
//! Built-in payoffs also know their own pathwise spot sensitivity, which is
//! what the single-pass Greek estimator differentiates. Custom payoffs have
//! no closed-form derivative, so pathwise estimation is refused for them at
//! validation time (see [`PricingError::PathwiseUnsupported`]).
//!
//! [`PricingError::PathwiseUnsupported`]: crate::mc::error::PricingError::PathwiseUnsupported

/// Valuation-at-maturity function for a European-style contract.
///
/// Immutable once constructed; evaluation is a pure function of the terminal
/// price with no internal state.
///
/// # Examples
///
/// ```rust
/// use pricer_mc::payoff::Payoff;
///
/// let call = Payoff::call(100.0);
/// assert_eq!(call.evaluate(110.0), 10.0);
/// assert_eq!(call.evaluate(90.0), 0.0);
///
/// // Arbitrary payoff logic: a cash-or-nothing digital.
/// let digital = Payoff::Custom(|st| if st > 100.0 { 1.0 } else { 0.0 });
/// assert_eq!(digital.evaluate(101.0), 1.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub enum Payoff {
    /// European call: `max(S_T - strike, 0)`.
    Call {
        /// Strike price (K).
        strike: f64,
    },
    /// European put: `max(strike - S_T, 0)`.
    Put {
        /// Strike price (K).
        strike: f64,
    },
    /// User-supplied payoff function of the terminal price.
    Custom(fn(f64) -> f64),
}

impl Payoff {
    /// Creates a call payoff with the given strike.
    #[inline]
    pub fn call(strike: f64) -> Self {
        Self::Call { strike }
    }

    /// Creates a put payoff with the given strike.
    #[inline]
    pub fn put(strike: f64) -> Self {
        Self::Put { strike }
    }

    /// Evaluates the payoff at the terminal price.
    #[inline]
    pub fn evaluate(&self, terminal: f64) -> f64 {
        match self {
            Self::Call { strike } => (terminal - strike).max(0.0),
            Self::Put { strike } => (strike - terminal).max(0.0),
            Self::Custom(f) => f(terminal),
        }
    }

    /// Per-path analytic derivative of the payoff with respect to the spot.
    ///
    /// For GBM the terminal price is linear in the spot, so the pathwise
    /// delta contribution of a call is `(S_T / S_0) * 1{S_T > K}` and of a
    /// put `-(S_T / S_0) * 1{S_T < K}`. The indicator makes the derivative
    /// discontinuous at the strike but integrable in expectation.
    ///
    /// Returns `None` for [`Payoff::Custom`]: no generic derivative exists.
    #[inline]
    pub fn pathwise_delta(&self, terminal: f64, spot: f64) -> Option<f64> {
        match self {
            Self::Call { strike } => {
                Some(if terminal > *strike { terminal / spot } else { 0.0 })
            }
            Self::Put { strike } => {
                Some(if terminal < *strike { -terminal / spot } else { 0.0 })
            }
            Self::Custom(_) => None,
        }
    }

    /// Returns whether the single-pass pathwise estimator applies.
    #[inline]
    pub fn supports_pathwise(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_call_payoff() {
        let call = Payoff::call(100.0);
        assert_eq!(call.evaluate(110.0), 10.0);
        assert_eq!(call.evaluate(100.0), 0.0);
        assert_eq!(call.evaluate(90.0), 0.0);
    }

    #[test]
    fn test_put_payoff() {
        let put = Payoff::put(100.0);
        assert_eq!(put.evaluate(90.0), 10.0);
        assert_eq!(put.evaluate(100.0), 0.0);
        assert_eq!(put.evaluate(110.0), 0.0);
    }

    #[test]
    fn test_custom_payoff() {
        fn straddle(st: f64) -> f64 {
            (st - 100.0).abs()
        }
        let payoff = Payoff::Custom(straddle);
        assert_eq!(payoff.evaluate(120.0), 20.0);
        assert_eq!(payoff.evaluate(80.0), 20.0);
    }

    #[test]
    fn test_pathwise_delta_call() {
        let call = Payoff::call(100.0);
        // In the money: S_T / S_0.
        assert_eq!(call.pathwise_delta(110.0, 95.0), Some(110.0 / 95.0));
        // Out of the money: zero contribution.
        assert_eq!(call.pathwise_delta(90.0, 95.0), Some(0.0));
    }

    #[test]
    fn test_pathwise_delta_put() {
        let put = Payoff::put(100.0);
        assert_eq!(put.pathwise_delta(90.0, 95.0), Some(-90.0 / 95.0));
        assert_eq!(put.pathwise_delta(110.0, 95.0), Some(0.0));
    }

    #[test]
    fn test_pathwise_unsupported_for_custom() {
        let payoff = Payoff::Custom(|st| st);
        assert_eq!(payoff.pathwise_delta(100.0, 100.0), None);
        assert!(!payoff.supports_pathwise());
        assert!(Payoff::call(100.0).supports_pathwise());
    }

    proptest! {
        #[test]
        fn prop_call_put_nonnegative(terminal in 0.0..1e6_f64, strike in 0.0..1e6_f64) {
            prop_assert!(Payoff::call(strike).evaluate(terminal) >= 0.0);
            prop_assert!(Payoff::put(strike).evaluate(terminal) >= 0.0);
        }

        #[test]
        fn prop_payoff_parity(terminal in 0.0..1e6_f64, strike in 0.0..1e6_f64) {
            // max(S-K,0) - max(K-S,0) = S - K, pointwise.
            let call = Payoff::call(strike).evaluate(terminal);
            let put = Payoff::put(strike).evaluate(terminal);
            prop_assert!((call - put - (terminal - strike)).abs() < 1e-9);
        }
    }
}
