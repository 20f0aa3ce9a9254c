//! Ordinary least squares with heteroskedasticity-robust standard errors.
//!
//! The core of this crate is a small, pure OLS estimator: given a response
//! matrix `Y` (n × m) and a design matrix `X` (n × k) it returns the
//! least-squares coefficients, White ("sandwich") standard errors, and the
//! coefficient covariance matrix for every response column. Around it sit
//!
//! - validated regression inputs (`data` module),
//! - estimator configuration such as the covariance type (`options` module),
//! - a generic L-BFGS minimizer that accepts any objective (`solving` module),
//! - a logit maximum-likelihood fit built on that minimizer (`logit` module), and
//! - Monte Carlo helpers to check interval coverage (`simulation` module).
//!
//! # Quick start
//!
//! ```no_run
//! use olsrs::estimation::estimate;
//! use nalgebra::DMatrix;
//!
//! let x = DMatrix::from_row_slice(4, 2, &[1.0, 0.1, 1.0, 0.4, 1.0, 0.7, 1.0, 0.9]);
//! let y = DMatrix::from_row_slice(4, 1, &[1.2, 1.9, 2.4, 2.9]);
//!
//! let result = estimate(&y, &x).expect("full-rank design");
//! println!("beta = {}", result.beta);
//! println!("robust se = {}", result.standard_errors);
//! ```
//!
//! All functions are pure: repeated calls with the same inputs give
//! bit-identical outputs, and errors are returned rather than masked.

pub mod data;
pub mod error;
pub mod estimation;
pub mod logit;
pub mod options;
pub mod simulation;
pub mod solving;

pub use data::{RegressionData, RegressionDataBuilder};
pub use error::{OlsError, Result};
pub use estimation::{estimate, estimate_with_options, OlsProblem, OlsResult};
pub use logit::{fit_logit, LogitFit, LogitObjective};
pub use options::{CovarianceEstimator, OlsOptions};
pub use simulation::{coverage_experiment, CoverageOptions, CoverageReport, LinearDgp};
pub use solving::{minimize, FnObjective, ObjectiveFunction, OptimizationSummary, OptimizerOptions};
