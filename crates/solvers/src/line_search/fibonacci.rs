//! Fibonacci search.
//!
//! The number of reductions is fixed up front: `n` is the smallest index with
//! `(b - a) / F(n) <= tolerance`, where `F(0) = F(1) = 1`. Interior points sit
//! at consecutive Fibonacci ratios of the bracket, so one of them carries over
//! to the next iteration. After `n - 2` reductions both interior points meet at
//! the midpoint, and a final comparison against a point `ε` to the right picks
//! the half to keep.
//!
//! The index search is capped at [`MAX_INDEX`]; a tolerance too small for that
//! cap simply runs the reductions `F(MAX_INDEX)` allows.

use std::time::Instant;

use descent_core::StepSizeFunction;

use crate::{
    ConfigError, Performance, config,
    params::{Param, ParamSet, ParamSpec, declare},
};

use super::{Bracket, Solution, Status, Step};

/// Largest Fibonacci index the search will use.
pub const MAX_INDEX: usize = 90;

/// Configuration for Fibonacci search.
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

    /// Returns the offset used by the final comparison.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}

/// Returns the parameters Fibonacci search reads.
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

/// Returns `F(0..=n)` for the smallest `n` with `width / F(n) <= tolerance`,
/// stopping early at [`MAX_INDEX`].
fn sequence(width: f64, tolerance: f64) -> Vec<f64> {
    let mut fib = vec![1.0, 1.0];
    while fib.len() <= MAX_INDEX && width / fib[fib.len() - 1] > tolerance {
        let next = fib[fib.len() - 1] + fib[fib.len() - 2];
        fib.push(next);
    }
    fib
}

/// Finds the step length minimizing `g` within the configured bracket.
pub fn minimize<G: StepSizeFunction + ?Sized>(g: &G, config: &Config) -> Solution {
    let started = Instant::now();

    let [mut left, mut right] = config.bracket().as_array();
    let mut steps = vec![Step::Bracket([left, right])];

    let finish = |left: f64, right: f64, status, steps, iters| {
        let x = 0.5 * (left + right);
        Solution {
            status,
            x,
            objective: g.value(x),
            steps,
            performance: Performance::since(started, iters),
        }
    };

    if right - left <= config.tolerance() {
        return finish(left, right, Status::Converged, steps, 0);
    }

    let fib = sequence(right - left, config.tolerance());
    let n = fib.len() - 1;

    let width = right - left;
    let mut lambda = left + fib[n - 2] / fib[n] * width;
    let mut mu = left + fib[n - 1] / fib[n] * width;
    let mut lambda_value = g.value(lambda);
    let mut mu_value = g.value(mu);

    let mut k = 1;
    let status = loop {
        if k + 2 > n {
            break Status::Converged;
        }
        if k > config.max_iters() {
            break Status::MaxIters;
        }

        if lambda_value > mu_value {
            left = lambda;
            lambda = mu;
            lambda_value = mu_value;
            mu = left + fib[n - k - 1] / fib[n - k] * (right - left);
            mu_value = g.value(mu);
        } else {
            right = mu;
            mu = lambda;
            mu_value = lambda_value;
            lambda = left + fib[n - k - 2] / fib[n - k] * (right - left);
            lambda_value = g.value(lambda);
        }

        steps.push(Step::Bracket([left, right]));
        k += 1;
    };

    // λ and μ coincide after the last reduction; probe just to the right.
    let probe = mu + config.epsilon();
    if lambda_value > g.value(probe) {
        left = lambda;
    } else {
        right = probe.min(right);
    }
    steps.push(Step::Bracket([left, right]));

    finish(left, right, status, steps, k - 1)
}
