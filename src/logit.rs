//! Binary logit by maximum likelihood.

use log::debug;
use nalgebra::linalg::Cholesky;
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::error::{OlsError, Result};
use crate::solving::{minimize, ObjectiveFunction, OptimizationSummary, OptimizerOptions};

/// Negative log-likelihood of the logit model `P(y = 1 | x) = 1 / (1 + exp(-x'beta))`.
#[derive(Clone, Debug)]
pub struct LogitObjective {
    y: DVector<f64>,
    x: DMatrix<f64>,
}

impl LogitObjective {
    /// Validates a 0/1 outcome vector against the design matrix.
    pub fn new(y: DVector<f64>, x: DMatrix<f64>) -> Result<Self> {
        if y.len() != x.nrows() {
            return Err(OlsError::dimension_mismatch("logit outcome length", x.nrows(), y.len()));
        }
        if x.ncols() == 0 {
            return Err(OlsError::dimension_mismatch("regressors", 1, 0));
        }
        for (index, value) in y.iter().enumerate() {
            if *value != 0.0 && *value != 1.0 {
                return Err(OlsError::InvalidResponse {
                    index,
                    value: *value,
                });
            }
        }
        if x.iter().any(|value| !value.is_finite()) {
            return Err(OlsError::NumericalError {
                context: "design matrix validation",
            });
        }
        Ok(Self { y, x })
    }

    /// Number of coefficients.
    pub fn parameter_count(&self) -> usize {
        self.x.ncols()
    }

    fn linear_index(&self, params: &[f64]) -> Result<DVector<f64>> {
        if params.len() != self.x.ncols() {
            return Err(OlsError::dimension_mismatch(
                "logit parameters",
                self.x.ncols(),
                params.len(),
            ));
        }
        Ok(&self.x * DVector::from_column_slice(params))
    }
}

impl ObjectiveFunction for LogitObjective {
    fn value(&self, params: &[f64]) -> Result<f64> {
        let eta = self.linear_index(params)?;
        let nll = eta
            .iter()
            .zip(self.y.iter())
            .map(|(eta, y)| softplus(*eta) - y * eta)
            .sum::<f64>();
        if !nll.is_finite() {
            return Err(OlsError::NumericalError {
                context: "logit likelihood",
            });
        }
        Ok(nll)
    }

    fn gradient(&self, params: &[f64]) -> Result<Vec<f64>> {
        let eta = self.linear_index(params)?;
        let residual = eta.map(sigmoid) - &self.y;
        let grad = self.x.tr_mul(&residual);
        Ok(grad.iter().copied().collect())
    }
}

/// Predicted probabilities `P(y = 1 | x)` for each row of `x`.
pub fn predict_probabilities(beta: &DVector<f64>, x: &DMatrix<f64>) -> Result<DVector<f64>> {
    if beta.len() != x.ncols() {
        return Err(OlsError::dimension_mismatch("logit parameters", x.ncols(), beta.len()));
    }
    Ok((x * beta).map(sigmoid))
}

/// Result of a logit fit.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogitFit {
    /// Maximum-likelihood coefficients.
    pub beta: DVector<f64>,
    /// Standard errors from the inverse information matrix `(X'WX)^-1`.
    pub standard_errors: DVector<f64>,
    /// Log-likelihood at `beta`.
    pub log_likelihood: f64,
    /// Optimizer diagnostics.
    pub summary: OptimizationSummary,
}

/// Fits a logit model. `init` defaults to all zeros.
pub fn fit_logit(
    y: &DVector<f64>,
    x: &DMatrix<f64>,
    init: Option<&[f64]>,
    options: &OptimizerOptions,
) -> Result<LogitFit> {
    let objective = LogitObjective::new(y.clone(), x.clone())?;
    let k = objective.parameter_count();
    let start = match init {
        Some(values) if values.len() != k => {
            return Err(OlsError::dimension_mismatch("initial parameters", k, values.len()))
        }
        Some(values) => values.to_vec(),
        None => vec![0.0; k],
    };

    debug!("logit fit: n={}, k={}", x.nrows(), k);
    let summary = minimize(&objective, &start, options)?;
    let beta = DVector::from_column_slice(&summary.parameters);

    let p = predict_probabilities(&beta, x)?;
    let mut weighted = x.clone();
    for (mut row, p) in weighted.row_iter_mut().zip(p.iter()) {
        row *= (p * (1.0 - p)).sqrt();
    }
    let information = weighted.tr_mul(&weighted);
    let covariance = Cholesky::new(information)
        .ok_or_else(|| OlsError::singular("logit information matrix"))?
        .inverse();
    let standard_errors = covariance.diagonal().map(|value| value.max(0.0).sqrt());

    Ok(LogitFit {
        beta,
        standard_errors,
        log_likelihood: -summary.value,
        summary,
    })
}

fn sigmoid(eta: f64) -> f64 {
    if eta >= 0.0 {
        1.0 / (1.0 + (-eta).exp())
    } else {
        let e = eta.exp();
        e / (1.0 + e)
    }
}

/// `ln(1 + exp(eta))` without overflow.
fn softplus(eta: f64) -> f64 {
    eta.max(0.0) + (-eta.abs()).exp().ln_1p()
}
