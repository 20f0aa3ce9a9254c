//! Regression data containers and validation utilities used by the estimators.

use nalgebra::{DMatrix, DVector};

use crate::error::{OlsError, Result};

/// A validated pair of response matrix `Y` (n × m) and design matrix `X` (n × k).
#[derive(Clone, Debug)]
pub struct RegressionData {
    y: DMatrix<f64>,
    x: DMatrix<f64>,
}

impl RegressionData {
    /// Creates `RegressionData` from a response matrix and a design matrix.
    pub fn new(y: DMatrix<f64>, x: DMatrix<f64>) -> Result<Self> {
        RegressionDataBuilder::new(x).response(y).build()
    }

    /// Creates `RegressionData` with a single response column.
    pub fn from_vector(y: DVector<f64>, x: DMatrix<f64>) -> Result<Self> {
        RegressionDataBuilder::new(x).response_vector(y).build()
    }

    /// Number of observations (`n`).
    pub fn observation_count(&self) -> usize {
        self.x.nrows()
    }

    /// Number of regressors (`k`), including any intercept column.
    pub fn regressor_count(&self) -> usize {
        self.x.ncols()
    }

    /// Number of response columns (`m`).
    pub fn response_count(&self) -> usize {
        self.y.ncols()
    }

    /// Returns a read-only view of the response matrix (`Y`).
    pub fn y(&self) -> &DMatrix<f64> {
        &self.y
    }

    /// Returns a read-only view of the design matrix (`X`).
    pub fn x(&self) -> &DMatrix<f64> {
        &self.x
    }
}

/// Builder that validates dimensions before constructing [`RegressionData`].
#[derive(Debug)]
pub struct RegressionDataBuilder {
    x: DMatrix<f64>,
    y: Option<DMatrix<f64>>,
    intercept: bool,
}

impl RegressionDataBuilder {
    /// Start building regression data from a design matrix.
    pub fn new(x: DMatrix<f64>) -> Self {
        Self {
            x,
            y: None,
            intercept: false,
        }
    }

    /// Sets the response matrix (`Y`).
    pub fn response(mut self, y: DMatrix<f64>) -> Self {
        self.y = Some(y);
        self
    }

    /// Sets a single response column.
    pub fn response_vector(mut self, y: DVector<f64>) -> Self {
        let n = y.len();
        self.y = Some(DMatrix::from_column_slice(n, 1, y.as_slice()));
        self
    }

    /// Prepends a column of ones to the design matrix when building.
    pub fn with_intercept(mut self) -> Self {
        self.intercept = true;
        self
    }

    /// Finalizes construction after validating shapes and values.
    pub fn build(self) -> Result<RegressionData> {
        let y = self
            .y
            .ok_or_else(|| OlsError::dimension_mismatch("response columns", 1, 0))?;

        let x = if self.intercept {
            self.x.insert_column(0, 1.0)
        } else {
            self.x
        };

        let n = x.nrows();
        if n == 0 {
            return Err(OlsError::dimension_mismatch("observations", 1, 0));
        }
        if x.ncols() == 0 {
            return Err(OlsError::dimension_mismatch("regressors", 1, 0));
        }
        if y.ncols() == 0 {
            return Err(OlsError::dimension_mismatch("response columns", 1, 0));
        }
        if y.nrows() != n {
            return Err(OlsError::dimension_mismatch("Y rows", n, y.nrows()));
        }

        if x.iter().any(|value| !value.is_finite()) {
            return Err(OlsError::NumericalError {
                context: "design matrix validation",
            });
        }
        if y.iter().any(|value| !value.is_finite()) {
            return Err(OlsError::NumericalError {
                context: "response validation",
            });
        }

        Ok(RegressionData { y, x })
    }
}
