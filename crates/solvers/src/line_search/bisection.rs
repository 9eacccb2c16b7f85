//! Bisection on the sign of `g'`.
//!
//! Each iteration evaluates the derivative at the bracket midpoint. A positive
//! slope means the minimum lies to the left, so the right end moves to the
//! midpoint; a negative slope moves the left end. A slope of exactly zero ends
//! the search at that midpoint.
//!
//! The search stops once the bracket is no wider than the tolerance, or at the
//! iteration cap. A non-finite slope ends it as [`Status::IllConditioned`].

use std::time::Instant;

use descent_core::StepSizeFunction;

use crate::{
    ConfigError, Performance, config,
    params::{Param, ParamSet, ParamSpec, declare},
};

use super::{Bracket, Solution, Status, Step};

/// Configuration for bisection search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    bracket: Bracket,
    tolerance: f64,
    max_iters: usize,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new([-10.0, 10.0], 1e-6, 100).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated bracket and tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint is non-finite, or if the tolerance
    /// is negative or non-finite.
    pub fn new(bracket: [f64; 2], tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            bracket: Bracket::new(bracket)?,
            tolerance: config::tolerance(tolerance)?,
            max_iters,
        })
    }

    /// Creates a config from the `a`, `b`, `tolerance`, and `maxIterations`
    /// parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter is missing or invalid.
    pub fn from_params(params: &ParamSet) -> Result<Self, ConfigError> {
        Self::new(
            [params.get(Param::A)?, params.get(Param::B)?],
            params.get(Param::Tolerance)?,
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

    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}

/// Returns the parameters bisection search reads.
#[must_use]
pub fn params() -> Vec<(Param, ParamSpec)> {
    declare(&[Param::A, Param::B, Param::Tolerance, Param::MaxIterations])
}

/// Finds a critical point of `g` within the configured bracket.
#[allow(clippy::float_cmp)]
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
        let slope = g.derivative(mid);
        iters += 1;

        if slope == 0.0 {
            break Status::Converged;
        }
        if !slope.is_finite() {
            break Status::IllConditioned;
        }

        if slope > 0.0 {
            right = mid;
        } else {
            left = mid;
        }
        steps.push(Step::Bracket([left, right]));
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
