//! Generic unconstrained minimization used by the maximum-likelihood estimators.
//!
//! Objectives are supplied as capabilities through [`ObjectiveFunction`], so any
//! likelihood (or a plain closure wrapped in [`FnObjective`]) can be handed to
//! [`minimize`]. The search itself is L-BFGS with a More–Thuente line search.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use argmin::core::{
    CostFunction, Executor, Gradient, State, TerminationReason, TerminationStatus,
};
use argmin::solver::linesearch::MoreThuenteLineSearch;
use argmin::solver::quasinewton::LBFGS;
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::error::{OlsError, Result};

/// Objective to be minimized over a flat parameter vector.
pub trait ObjectiveFunction {
    /// Evaluates the objective at `params`.
    fn value(&self, params: &[f64]) -> Result<f64>;

    /// Gradient at `params`. Defaults to central finite differences.
    fn gradient(&self, params: &[f64]) -> Result<Vec<f64>> {
        let mut grad = vec![0.0; params.len()];
        let mut shifted = params.to_vec();

        for i in 0..params.len() {
            let step = 1e-6 * params[i].abs().max(1.0);

            shifted[i] = params[i] + step;
            let forward = self.value(&shifted)?;
            shifted[i] = params[i] - step;
            let backward = self.value(&shifted)?;
            shifted[i] = params[i];

            grad[i] = (forward - backward) / (2.0 * step);
        }

        Ok(grad)
    }
}

/// Adapts a closure `Fn(&[f64]) -> f64` into an [`ObjectiveFunction`].
///
/// The gradient falls back to finite differences.
pub struct FnObjective<F> {
    function: F,
}

impl<F> FnObjective<F>
where
    F: Fn(&[f64]) -> f64,
{
    /// Wraps `function`.
    pub fn new(function: F) -> Self {
        Self { function }
    }
}

impl<F> ObjectiveFunction for FnObjective<F>
where
    F: Fn(&[f64]) -> f64,
{
    fn value(&self, params: &[f64]) -> Result<f64> {
        let value = (self.function)(params);
        if value.is_nan() {
            return Err(OlsError::NumericalError {
                context: "objective evaluation",
            });
        }
        Ok(value)
    }
}

/// Configuration for the L-BFGS search.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OptimizerOptions {
    /// Maximum number of quasi-Newton iterations.
    pub max_iterations: u64,
    /// Convergence tolerance on the gradient norm.
    pub gradient_tolerance: f64,
    /// Convergence tolerance on the change in objective value.
    pub cost_tolerance: f64,
    /// Number of correction pairs kept for the inverse Hessian approximation.
    pub memory: usize,
}

impl Default for OptimizerOptions {
    fn default() -> Self {
        Self {
            max_iterations: 500,
            gradient_tolerance: 1e-8,
            cost_tolerance: 1e-12,
            memory: 7,
        }
    }
}

impl OptimizerOptions {
    /// Override the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = max_iterations.max(1);
        self
    }

    /// Override the gradient-norm tolerance.
    pub fn with_gradient_tolerance(mut self, tolerance: f64) -> Self {
        self.gradient_tolerance = tolerance;
        self
    }

    /// Override the objective-change tolerance.
    pub fn with_cost_tolerance(mut self, tolerance: f64) -> Self {
        self.cost_tolerance = tolerance;
        self
    }

    /// Override the L-BFGS history length.
    pub fn with_memory(mut self, memory: usize) -> Self {
        self.memory = memory.max(1);
        self
    }
}

/// Diagnostics returned alongside the minimizer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OptimizationSummary {
    /// Best parameters found.
    pub parameters: Vec<f64>,
    /// Objective value at `parameters`.
    pub value: f64,
    /// Number of iterations performed.
    pub iterations: u64,
    /// Number of objective evaluations.
    pub evaluations: usize,
    /// Whether the solver met one of its tolerances.
    pub converged: bool,
    /// Termination reason reported by the solver.
    pub message: String,
}

struct ArgminProblem<'a> {
    objective: &'a dyn ObjectiveFunction,
    evaluations: Arc<AtomicUsize>,
}

impl CostFunction for ArgminProblem<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, params: &Self::Param) -> std::result::Result<f64, argmin::core::Error> {
        let count = self.evaluations.fetch_add(1, Ordering::Relaxed) + 1;
        let value = self
            .objective
            .value(params)
            .map_err(|e| argmin::core::Error::msg(e.to_string()))?;
        trace!("objective evaluation {}: {}", count, value);
        Ok(value)
    }
}

impl Gradient for ArgminProblem<'_> {
    type Param = Vec<f64>;
    type Gradient = Vec<f64>;

    fn gradient(&self, params: &Self::Param) -> std::result::Result<Vec<f64>, argmin::core::Error> {
        self.objective
            .gradient(params)
            .map_err(|e| argmin::core::Error::msg(e.to_string()))
    }
}

/// Minimizes `objective` starting from `init`.
pub fn minimize(
    objective: &dyn ObjectiveFunction,
    init: &[f64],
    options: &OptimizerOptions,
) -> Result<OptimizationSummary> {
    if init.is_empty() {
        return Err(OlsError::dimension_mismatch("initial parameters", 1, 0));
    }

    let evaluations = Arc::new(AtomicUsize::new(0));
    let problem = ArgminProblem {
        objective,
        evaluations: Arc::clone(&evaluations),
    };

    let linesearch = MoreThuenteLineSearch::new();
    let solver = LBFGS::new(linesearch, options.memory)
        .with_tolerance_grad(options.gradient_tolerance)
        .map_err(OlsError::optimization)?
        .with_tolerance_cost(options.cost_tolerance)
        .map_err(OlsError::optimization)?;

    let max_iterations = options.max_iterations;
    let result = Executor::new(problem, solver)
        .configure(|state| state.param(init.to_vec()).max_iters(max_iterations))
        .run()
        .map_err(OlsError::optimization)?;

    let state = result.state();
    let parameters = state
        .get_best_param()
        .ok_or_else(|| OlsError::OptimizationFailed {
            message: "solver returned no parameters".to_string(),
        })?
        .clone();
    let value = state.get_best_cost();
    let iterations = state.get_iter();
    let termination = state.get_termination_status();
    let converged = matches!(
        termination,
        TerminationStatus::Terminated(TerminationReason::SolverConverged)
            | TerminationStatus::Terminated(TerminationReason::TargetCostReached)
    );
    let message = termination.to_string();
    let evaluations = evaluations.load(Ordering::Relaxed);

    if !value.is_finite() {
        return Err(OlsError::NumericalError {
            context: "optimization",
        });
    }

    if converged {
        debug!("L-BFGS converged after {} iterations, value {}", iterations, value);
    } else {
        warn!(
            "L-BFGS stopped without converging after {} iterations: {}",
            iterations, message
        );
    }

    Ok(OptimizationSummary {
        parameters,
        value,
        iterations,
        evaluations,
        converged,
        message,
    })
}
