//! Dichotomous search.
//!
//! Each iteration probes `g` at `mid - ε` and `mid + ε` and keeps the part of
//! the bracket on the side of the better probe. The bracket roughly halves
//! every iteration, but it can never become narrower than `2ε`, so `ε` must be
//! well below the tolerance for the search to converge.

use std::time::Instant;

use descent_core::StepSizeFunction;

use crate::{
    ConfigError, Performance, config,
    params::{Param, ParamSet, ParamSpec, declare},
};

use super::{Bracket, Solution, Status, Step};

/// Configuration for dichotomous search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    bracket: Bracket,
    tolerance: f64,
    epsilon: f64,
    max_iters: usize,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new([-10.0, 10.0], 1e-6, 1e-8, 100).unwrap()
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint is non-finite, or if the tolerance
    /// or epsilon is negative or non-finite.
    pub fn new(
        bracket: [f64; 2],
        tolerance: f64,
        epsilon: f64,
        max_iters: usize,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            bracket: Bracket::new(bracket)?,
            tolerance: config::tolerance(tolerance)?,
            epsilon: config::epsilon(epsilon)?,
            max_iters,
        })
    }

    /// Creates a config from the `a`, `b`, `tolerance`, `epsilon`, and
    /// `maxIterations` parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter is missing or invalid.
    pub fn from_params(params: &ParamSet) -> Result<Self, ConfigError> {
        Self::new(
            [params.get(Param::A)?, params.get(Param::B)?],
            params.get(Param::Tolerance)?,
            params.get(Param::Epsilon)?,
            config::max_iters(params.get(Param::MaxIterations)?)?,
        )
    }

    #[must_use]
    pub fn bracket(&self) -> Bracket {
        self.bracket
    }

    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the offset of each probe from the midpoint.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}

/// Returns the parameters dichotomous search reads.
#[must_use]
pub fn params() -> Vec<(Param, ParamSpec)> {
    declare(&[
        Param::A,
        Param::B,
        Param::Tolerance,
        Param::Epsilon,
        Param::MaxIterations,
    ])
}

/// Finds the step length minimizing `g` within the configured bracket.
pub fn minimize<G: StepSizeFunction + ?Sized>(g: &G, config: &Config) -> Solution {
    let started = Instant::now();

    let [mut left, mut right] = config.bracket().as_array();
    let mut steps = vec![Step::Bracket([left, right])];
    let mut iters = 0;

    let status = loop {
        if right - left <= config.tolerance() {
            break Status::Converged;
        }
        if iters >= config.max_iters() {
            break Status::MaxIters;
        }

        let mid = 0.5 * (left + right);
        let lambda = mid - config.epsilon();
        let mu = mid + config.epsilon();

        if g.value(lambda) < g.value(mu) {
            right = mu.min(right);
        } else {
            left = lambda.max(left);
        }

        steps.push(Step::Bracket([left, right]));
        iters += 1;
    };

    let x = 0.5 * (left + right);
    Solution {
        status,
        x,
        objective: g.value(x),
        steps,
        performance: Performance::since(started, iters),
    }
}
