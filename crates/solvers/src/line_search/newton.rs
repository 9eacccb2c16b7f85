//! Newton's method on the step length.
//!
//! Iterates `λ ← λ - g'(λ) / g''(λ)` until `|g'(λ)| <= tolerance`. Each
//! candidate passes through [`StepSizeFunction::secure_limits`] first.
//!
//! Newton's search does not bracket the minimum and can wander off on
//! non-convex functions. A zero or non-finite curvature, or a non-finite
//! update, ends the search as [`Status::IllConditioned`] with the last finite
//! step length.

use std::time::Instant;

use descent_core::StepSizeFunction;

use crate::{
    ConfigError, Performance, config,
    params::{Param, ParamSet, ParamSpec, declare},
};

use super::{Solution, Status, Step};

/// Configuration for Newton's search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    lambda: f64,
    tolerance: f64,
    max_iters: usize,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1.0, 1e-6, 100).unwrap()
    }
}

impl Config {
    /// Creates a new config from a starting step length.
    ///
    /// # Errors
    ///
    /// Returns an error if `lambda` is non-finite, or if the tolerance is
    /// negative or non-finite.
    pub fn new(lambda: f64, tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            lambda: config::lambda(lambda)?,
            tolerance: config::tolerance(tolerance)?,
            max_iters,
        })
    }

    /// Creates a config from the `lambda`, `tolerance`, and `maxIterations`
    /// parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter is missing or invalid.
    pub fn from_params(params: &ParamSet) -> Result<Self, ConfigError> {
        Self::new(
            params.get(Param::Lambda)?,
            params.get(Param::Tolerance)?,
            config::max_iters(params.get(Param::MaxIterations)?)?,
        )
    }

    /// Returns the starting step length.
    #[must_use]
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Returns the slope magnitude at which the search stops.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}

/// Returns the parameters Newton's search reads.
#[must_use]
pub fn params() -> Vec<(Param, ParamSpec)> {
    declare(&[Param::Lambda, Param::Tolerance, Param::MaxIterations])
}

/// Finds a critical point of `g` starting from the configured step length.
#[allow(clippy::float_cmp)]
pub fn minimize<G: StepSizeFunction + ?Sized>(g: &G, config: &Config) -> Solution {
    let started = Instant::now();

    let mut lambda = g.secure_limits(config.lambda());
    let mut steps = vec![Step::Point(lambda)];
    let mut iters = 0;

    let status = loop {
        let slope = g.derivative(lambda);
        if !slope.is_finite() {
            break Status::IllConditioned;
        }
        if slope.abs() <= config.tolerance() {
            break Status::Converged;
        }
        if iters >= config.max_iters() {
            break Status::MaxIters;
        }

        let curvature = g.second_derivative(lambda);
        let next = g.secure_limits(lambda - slope / curvature);
        if curvature == 0.0 || !next.is_finite() {
            break Status::IllConditioned;
        }

        lambda = next;
        steps.push(Step::Point(lambda));
        iters += 1;
    };

    Solution {
        status,
        x: lambda,
        objective: g.value(lambda),
        steps,
        performance: Performance::since(started, iters),
    }
}
