//! Pricing result types.

/// Result of one Monte Carlo pricing invocation.
///
/// `delta` is populated only when a Greek estimator was requested; it is
/// `None` otherwise, so an unrequested sensitivity cannot be read by
/// accident.
///
/// # Examples
///
/// ```rust
/// use pricer_mc::mc::PricingResult;
///
/// let result = PricingResult {
///     price: 8.02,
///     std_error: 0.012,
///     delta: Some(0.54),
/// };
/// println!("Price: {} +/- {}", result.price, result.confidence_95());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Discounted Monte Carlo price estimate.
    pub price: f64,
    /// Standard error of the price estimate.
    pub std_error: f64,
    /// Delta estimate, present only when requested.
    pub delta: Option<f64>,
}

impl PricingResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_confidence_intervals() {
        let result = PricingResult {
            price: 10.0,
            std_error: 0.1,
            delta: None,
        };
        assert_relative_eq!(result.confidence_95(), 0.196, epsilon = 1e-12);
        assert_relative_eq!(result.confidence_99(), 0.2576, epsilon = 1e-12);
    }

    #[test]
    fn test_default_has_no_delta() {
        assert_eq!(PricingResult::default().delta, None);
    }
}
