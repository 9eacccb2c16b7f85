//! A fixed step length.
//!
//! Useful for comparing descent methods against an untuned step, and as the
//! cheapest possible line search.

use std::time::Instant;

use descent_core::StepSizeFunction;

use crate::{
    ConfigError, Performance, config,
    params::{Param, ParamSet, ParamSpec, declare},
};

use super::{Solution, Status, Step};

/// Configuration for a constant step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    lambda: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self { lambda: 1.0 }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Lambda`] if `lambda` is not finite.
    pub fn new(lambda: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            lambda: config::lambda(lambda)?,
        })
    }

    /// Creates a config from the `lambda` parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is missing or invalid.
    pub fn from_params(params: &ParamSet) -> Result<Self, ConfigError> {
        Self::new(params.get(Param::Lambda)?)
    }

    #[must_use]
    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

/// Returns the parameters a constant step reads.
#[must_use]
pub fn params() -> Vec<(Param, ParamSpec)> {
    declare(&[Param::Lambda])
}

/// Returns the configured step length without searching.
pub fn minimize<G: StepSizeFunction + ?Sized>(g: &G, config: &Config) -> Solution {
    let started = Instant::now();
    let x = config.lambda();

    Solution {
        status: Status::Converged,
        x,
        objective: g.value(x),
        steps: vec![Step::Point(x)],
        performance: Performance::since(started, 0),
    }
}
