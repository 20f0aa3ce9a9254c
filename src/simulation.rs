//! Monte Carlo helpers: synthetic linear-model data and OLS interval coverage.

use log::debug;
use nalgebra::{DMatrix, DVector};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal, Uniform};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::data::RegressionData;
use crate::error::{OlsError, Result};
use crate::estimation::estimate_with_options;
use crate::options::{CovarianceEstimator, OlsOptions};

/// Linear data-generating process `y = X beta + sigma * eps`, `eps ~ N(0, 1)`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LinearDgp {
    beta: DVector<f64>,
    noise_sd: f64,
}

impl LinearDgp {
    /// Creates a process with true coefficients `beta` and noise scale `noise_sd`.
    pub fn new(beta: DVector<f64>, noise_sd: f64) -> Result<Self> {
        if beta.is_empty() {
            return Err(OlsError::dimension_mismatch("true coefficients", 1, 0));
        }
        if !noise_sd.is_finite() || noise_sd < 0.0 {
            return Err(OlsError::NumericalError {
                context: "noise standard deviation",
            });
        }
        Ok(Self { beta, noise_sd })
    }

    /// True coefficients.
    pub fn beta(&self) -> &DVector<f64> {
        &self.beta
    }

    /// Draws an n × k design with a leading intercept column and U(0, 1) regressors.
    pub fn design<R: Rng + ?Sized>(&self, observations: usize, rng: &mut R) -> DMatrix<f64> {
        uniform_design(observations, self.beta.len(), rng)
    }

    /// Draws `X beta + noise` for a given design.
    pub fn response<R: Rng + ?Sized>(
        &self,
        x: &DMatrix<f64>,
        rng: &mut R,
    ) -> Result<DVector<f64>> {
        if x.ncols() != self.beta.len() {
            return Err(OlsError::dimension_mismatch(
                "design columns",
                self.beta.len(),
                x.ncols(),
            ));
        }
        let mut y = x * &self.beta;
        for value in y.iter_mut() {
            let eps: f64 = StandardNormal.sample(&mut *rng);
            *value += self.noise_sd * eps;
        }
        Ok(y)
    }

    /// Draws a full sample of `observations` rows from a seeded generator.
    pub fn sample(&self, observations: usize, seed: u64) -> Result<RegressionData> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let x = self.design(observations, &mut rng);
        let y = self.response(&x, &mut rng)?;
        RegressionData::from_vector(y, x)
    }
}

fn uniform_design<R: Rng + ?Sized>(
    observations: usize,
    regressors: usize,
    rng: &mut R,
) -> DMatrix<f64> {
    let unit = Uniform::new(0.0, 1.0);
    DMatrix::from_fn(observations, regressors, |_, column| {
        if column == 0 {
            1.0
        } else {
            unit.sample(&mut *rng)
        }
    })
}

/// Settings for [`coverage_experiment`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CoverageOptions {
    /// Number of independent Monte Carlo trials.
    pub trials: usize,
    /// Rows per simulated sample.
    pub observations: usize,
    /// Columns of the design, including the intercept.
    pub regressors: usize,
    /// Standard deviation of the Gaussian noise.
    pub noise_sd: f64,
    /// Half-width of the interval in standard errors.
    pub critical_value: f64,
    /// Covariance estimator used for the standard errors.
    pub covariance: CovarianceEstimator,
    /// Base seed; trial `t` uses `seed + t + 1`.
    pub seed: u64,
}

impl Default for CoverageOptions {
    fn default() -> Self {
        Self {
            trials: 1_000,
            observations: 1_000,
            regressors: 3,
            noise_sd: 1.0,
            critical_value: 1.96,
            covariance: CovarianceEstimator::White,
            seed: 0,
        }
    }
}

impl CoverageOptions {
    /// Override the number of trials.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Override the sample size and design width.
    pub fn with_shape(mut self, observations: usize, regressors: usize) -> Self {
        self.observations = observations;
        self.regressors = regressors;
        self
    }

    /// Override the noise scale.
    pub fn with_noise_sd(mut self, noise_sd: f64) -> Self {
        self.noise_sd = noise_sd;
        self
    }

    /// Override the interval half-width.
    pub fn with_critical_value(mut self, critical_value: f64) -> Self {
        self.critical_value = critical_value;
        self
    }

    /// Override the covariance estimator.
    pub fn with_covariance(mut self, covariance: CovarianceEstimator) -> Self {
        self.covariance = covariance;
        self
    }

    /// Override the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Aggregate outcome of a coverage experiment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Number of trials run.
    pub trials: usize,
    /// Share of trials whose interval contained the true coefficient, per coefficient.
    pub coverage: Vec<f64>,
    /// Mean of `beta_hat - beta` across trials, per coefficient.
    pub mean_error: Vec<f64>,
}

/// Checks how often `beta_hat +/- z * se` contains the true coefficient.
///
/// The design is drawn once and held fixed. Each trial draws true coefficients
/// from U(0, 1), a fresh response, and refits. Trials run in parallel but each
/// owns a generator seeded from its index, so the report is reproducible.
pub fn coverage_experiment(options: &CoverageOptions) -> Result<CoverageReport> {
    if options.trials == 0 {
        return Err(OlsError::dimension_mismatch("coverage trials", 1, 0));
    }
    if options.regressors == 0 {
        return Err(OlsError::dimension_mismatch("regressors", 1, 0));
    }
    if options.observations <= options.regressors {
        return Err(OlsError::InsufficientObservations {
            needed: options.regressors + 1,
            found: options.observations,
        });
    }

    let k = options.regressors;
    let mut design_rng = SmallRng::seed_from_u64(options.seed);
    let x = uniform_design(options.observations, k, &mut design_rng);
    let ols_options = OlsOptions::default().with_covariance(options.covariance);

    debug!(
        "coverage experiment: trials={}, n={}, k={}, z={}",
        options.trials, options.observations, k, options.critical_value
    );

    let outcomes = (0..options.trials)
        .into_par_iter()
        .map(|trial| -> Result<(Vec<bool>, DVector<f64>)> {
            let mut rng = SmallRng::seed_from_u64(options.seed.wrapping_add(trial as u64 + 1));
            let unit = Uniform::new(0.0, 1.0);
            let truth = DVector::from_fn(k, |_, _| unit.sample(&mut rng));
            let dgp = LinearDgp::new(truth, options.noise_sd)?;
            let y = dgp.response(&x, &mut rng)?;
            let y = DMatrix::from_column_slice(y.len(), 1, y.as_slice());

            let fit = estimate_with_options(&y, &x, &ols_options)?;
            let errors = fit.coefficients(0) - dgp.beta();
            let covered: Vec<bool> = errors
                .iter()
                .zip(fit.standard_errors.column(0).iter())
                .map(|(error, se)| error.abs() <= options.critical_value * se)
                .collect();
            Ok((covered, errors))
        })
        .collect::<Result<Vec<_>>>()?;

    let trials = outcomes.len() as f64;
    let mut coverage = vec![0.0; k];
    let mut mean_error = vec![0.0; k];
    for (covered, errors) in &outcomes {
        for j in 0..k {
            if covered[j] {
                coverage[j] += 1.0;
            }
            mean_error[j] += errors[j];
        }
    }
    for j in 0..k {
        coverage[j] /= trials;
        mean_error[j] /= trials;
    }

    Ok(CoverageReport {
        trials: outcomes.len(),
        coverage,
        mean_error,
    })
}
