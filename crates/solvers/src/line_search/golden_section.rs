//! Golden section search over a bracket of step lengths.
//!
//! # Algorithm
//!
//! Two interior points sit at fractions `1 - 1/φ` and `1/φ` (about 0.382 and
//! 0.618) of the bracket.
//! Each iteration compares their values and discards the outer sub-interval
//! next to the worse one. The surviving interior point lands at the right
//! fraction of the smaller bracket, so only one new evaluation is needed per
//! iteration.
//!
//! The search stops once the bracket is no wider than the tolerance, or at the
//! iteration cap. The reported step length is the bracket midpoint.
//!
//! # Limitations
//!
//! - **Derivative-free**: converges linearly, by a factor of about 0.618 per
//!   iteration
//! - **Unimodal assumption**: a bracket holding several minima may end on any
//!   of them

mod bracket;

#[cfg(test)]
mod tests;

use std::time::Instant;

use descent_core::StepSizeFunction;

use crate::{
    ConfigError, Performance, config,
    params::{Param, ParamSet, ParamSpec, declare},
};

use super::{Bracket, Solution, Status, Step};

use bracket::GoldenBracket;

/// Configuration for golden section search.
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

    /// Returns the bracket width at which the search stops.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of shrink iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}

/// Returns the parameters golden section search reads.
#[must_use]
pub fn params() -> Vec<(Param, ParamSpec)> {
    declare(&[Param::A, Param::B, Param::Tolerance, Param::MaxIterations])
}

/// Finds the step length minimizing `g` within the configured bracket.
pub fn minimize<G: StepSizeFunction + ?Sized>(g: &G, config: &Config) -> Solution {
    let started = Instant::now();

    let mut bracket = GoldenBracket::new(config.bracket());
    let mut steps = vec![Step::Bracket(bracket.as_array())];

    let mut left_value = g.value(bracket.inner_left);
    let mut right_value = g.value(bracket.inner_right);
    let mut iters = 0;

    let status = loop {
        if bracket.width() <= config.tolerance() {
            break Status::Converged;
        }
        if iters >= config.max_iters() {
            break Status::MaxIters;
        }

        if left_value <= right_value {
            // Left is better → shrink right
            bracket.shrink_right();
            right_value = left_value;
            left_value = g.value(bracket.inner_left);
        } else {
            // Right is better → shrink left
            bracket.shrink_left();
            left_value = right_value;
            right_value = g.value(bracket.inner_right);
        }

        steps.push(Step::Bracket(bracket.as_array()));
        iters += 1;
    };

    let x = bracket.midpoint();
    Solution {
        status,
        x,
        objective: g.value(x),
        steps,
        performance: Performance::since(started, iters),
    }
}
