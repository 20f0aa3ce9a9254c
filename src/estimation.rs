//! Ordinary least squares with sandwich (heteroskedasticity-robust) covariance.

use log::debug;
use nalgebra::linalg::Cholesky;
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::data::RegressionData;
use crate::error::{OlsError, Result};
use crate::options::{CovarianceEstimator, OlsOptions};

/// Estimates `Y = X beta + e` by OLS with White (HC0) standard errors.
///
/// `y` is n × m and `x` is n × k. Each response column is fitted against the
/// same design matrix and receives its own covariance matrix.
pub fn estimate(y: &DMatrix<f64>, x: &DMatrix<f64>) -> Result<OlsResult> {
    estimate_with_options(y, x, &OlsOptions::default())
}

/// Same as [`estimate`] with an explicit covariance estimator and rank tolerance.
pub fn estimate_with_options(
    y: &DMatrix<f64>,
    x: &DMatrix<f64>,
    options: &OlsOptions,
) -> Result<OlsResult> {
    let data = RegressionData::new(y.clone(), x.clone())?;
    OlsProblem::new(data).estimate(options)
}

/// Wrapper around validated data that runs the least-squares fit.
#[derive(Clone, Debug)]
pub struct OlsProblem {
    data: RegressionData,
}

impl OlsProblem {
    /// Constructs a new OLS problem from validated data.
    pub fn new(data: RegressionData) -> Self {
        Self { data }
    }

    /// Accessor for the underlying data.
    pub fn data(&self) -> &RegressionData {
        &self.data
    }

    /// Fits the model and computes the requested covariance for every response column.
    pub fn estimate(&self, options: &OlsOptions) -> Result<OlsResult> {
        let x = self.data.x();
        let y = self.data.y();
        let n = self.data.observation_count();
        let k = self.data.regressor_count();
        let m = self.data.response_count();

        debug!(
            "OLS fit: n={}, k={}, m={}, covariance={:?}",
            n, k, m, options.covariance
        );

        if options.covariance.needs_residual_df() && n <= k {
            return Err(OlsError::InsufficientObservations {
                needed: k + 1,
                found: n,
            });
        }

        check_full_rank(x, options.rank_tolerance)?;

        let x_t = x.transpose();
        let cholesky = Cholesky::new(&x_t * x).ok_or_else(|| OlsError::singular("X'X"))?;
        let beta = cholesky.solve(&(&x_t * y));
        if beta.iter().any(|value| !value.is_finite()) {
            return Err(OlsError::NumericalError {
                context: "coefficient solve",
            });
        }

        let residuals = y - x * &beta;
        let bread = cholesky.inverse();

        let mut standard_errors = DMatrix::zeros(k, m);
        let mut covariances = Vec::with_capacity(m);
        for column in 0..m {
            let e = residuals.column(column).clone_owned();
            let sigma = coefficient_covariance(x, &bread, &e, options.covariance);
            standard_errors.set_column(column, &diagonal_sqrt(&sigma));
            covariances.push(sigma);
        }

        if standard_errors.iter().any(|value| !value.is_finite()) {
            return Err(OlsError::NumericalError {
                context: "standard errors",
            });
        }

        Ok(OlsResult {
            beta,
            standard_errors,
            covariances,
            residuals,
            covariance_estimator: options.covariance,
        })
    }
}

/// Describes the output of an OLS fit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OlsResult {
    /// Coefficients, k × m (one column per response).
    pub beta: DMatrix<f64>,
    /// Standard errors, k × m, the square roots of each covariance diagonal.
    pub standard_errors: DMatrix<f64>,
    /// Coefficient covariance matrices, one k × k matrix per response column.
    pub covariances: Vec<DMatrix<f64>>,
    /// Residuals `Y - X beta`, n × m.
    pub residuals: DMatrix<f64>,
    /// Estimator used to build `covariances`.
    pub covariance_estimator: CovarianceEstimator,
}

impl OlsResult {
    /// Coefficient vector for response column `column`.
    pub fn coefficients(&self, column: usize) -> DVector<f64> {
        self.beta.column(column).into_owned()
    }

    /// Standard error vector for response column `column`.
    pub fn standard_errors_for(&self, column: usize) -> DVector<f64> {
        self.standard_errors.column(column).into_owned()
    }

    /// Covariance matrix for response column `column`, if it exists.
    pub fn covariance(&self, column: usize) -> Option<&DMatrix<f64>> {
        self.covariances.get(column)
    }

    /// t-statistics `beta / se` for response column `column`.
    pub fn t_statistics(&self, column: usize) -> DVector<f64> {
        self.beta
            .column(column)
            .component_div(&self.standard_errors.column(column))
    }
}

/// Rejects design matrices whose numerical rank is below their column count.
fn check_full_rank(x: &DMatrix<f64>, tolerance: Option<f64>) -> Result<()> {
    let (n, k) = x.shape();
    if k > n {
        return Err(OlsError::singular("X'X (more regressors than observations)"));
    }

    let singular_values = x.clone().svd(false, false).singular_values;
    let sigma_max = singular_values.max();
    let threshold =
        tolerance.unwrap_or_else(|| n.max(k) as f64 * f64::EPSILON * sigma_max);
    let rank = singular_values
        .iter()
        .filter(|value| **value > threshold)
        .count();

    if rank < k {
        debug!("design matrix rank {} < {} columns", rank, k);
        return Err(OlsError::singular("X'X"));
    }
    Ok(())
}

fn coefficient_covariance(
    x: &DMatrix<f64>,
    bread: &DMatrix<f64>,
    residuals: &DVector<f64>,
    estimator: CovarianceEstimator,
) -> DMatrix<f64> {
    let (n, k) = x.shape();
    match estimator {
        CovarianceEstimator::White => sandwich(x, bread, residuals),
        CovarianceEstimator::WhiteCorrected => {
            sandwich(x, bread, residuals) * (n as f64 / (n - k) as f64)
        }
        CovarianceEstimator::Homoskedastic => {
            let s2 = residuals.dot(residuals) / (n - k) as f64;
            bread * s2
        }
    }
}

/// `(X'X)^-1 X' diag(e^2) X (X'X)^-1`.
fn sandwich(x: &DMatrix<f64>, bread: &DMatrix<f64>, residuals: &DVector<f64>) -> DMatrix<f64> {
    let mut scaled = x.clone();
    for (mut row, e) in scaled.row_iter_mut().zip(residuals.iter()) {
        row *= *e;
    }
    let meat = scaled.transpose() * &scaled;
    bread * meat * bread
}

fn diagonal_sqrt(matrix: &DMatrix<f64>) -> DVector<f64> {
    // Round-off can leave tiny negative variances on exact fits.
    matrix.diagonal().map(|value| value.max(0.0).sqrt())
}
