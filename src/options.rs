//! Configuration structures for the OLS estimator.

use serde::{Deserialize, Serialize};

/// Choice of coefficient covariance estimator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CovarianceEstimator {
    /// Heteroskedasticity-robust sandwich `(X'X)^-1 X' diag(e^2) X (X'X)^-1` (HC0).
    #[default]
    White,
    /// HC0 scaled by `n / (n - k)` (HC1).
    WhiteCorrected,
    /// Classical `s^2 (X'X)^-1` with `s^2 = e'e / (n - k)`.
    Homoskedastic,
}

impl CovarianceEstimator {
    /// Whether the estimator divides by the residual degrees of freedom.
    pub fn needs_residual_df(self) -> bool {
        !matches!(self, CovarianceEstimator::White)
    }
}

/// Controls how [`estimate_with_options`](crate::estimation::estimate_with_options) fits the model.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OlsOptions {
    /// Covariance estimator used for standard errors.
    pub covariance: CovarianceEstimator,
    /// Absolute singular value threshold for the rank check.
    ///
    /// `None` uses `max(n, k) * eps * sigma_max`.
    pub rank_tolerance: Option<f64>,
}

impl OlsOptions {
    /// Override the covariance estimator while preserving other defaults.
    pub fn with_covariance(mut self, covariance: CovarianceEstimator) -> Self {
        self.covariance = covariance;
        self
    }

    /// Set an explicit singular value threshold for the rank check.
    pub fn with_rank_tolerance(mut self, tolerance: f64) -> Self {
        self.rank_tolerance = Some(tolerance);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_white_covariance() {
        let options = OlsOptions::default();
        assert_eq!(options.covariance, CovarianceEstimator::White);
        assert!(options.rank_tolerance.is_none());
        assert!(!options.covariance.needs_residual_df());
        assert!(CovarianceEstimator::Homoskedastic.needs_residual_df());
    }
}
