//! Heavy ball (Polyak momentum): `d = -∇f(x) + β·(x - x_prev)`.
//!
//! The previous point starts equal to the initial point, so the first
//! direction is plain steepest descent.

use descent_core::{ObjectiveFunction, Point};

use crate::{
    ConfigError,
    line_search::LineSearch,
    params::{Param, ParamSet, ParamSpec, declare},
};

use super::{Kind, Solution, iterate::iterate};

/// Display metadata for the momentum coefficient.
const MOMENTUM: ParamSpec = ParamSpec::linear(0.0, 2.0, 0.01, 0.5);

/// Configuration for the heavy ball method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    stopping: super::Config,
    beta: f64,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-6, 100, 0.5).unwrap()
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance or momentum is negative or non-finite.
    pub fn new(tolerance: f64, max_iters: usize, beta: f64) -> Result<Self, ConfigError> {
        if !beta.is_finite() || beta < 0.0 {
            return Err(ConfigError::Momentum);
        }

        Ok(Self {
            stopping: super::Config::new(tolerance, max_iters)?,
            beta,
        })
    }

    /// Creates a config from the `tolerance`, `maxIterations`, and `beta`
    /// parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter is missing or invalid.
    pub fn from_params(params: &ParamSet) -> Result<Self, ConfigError> {
        let stopping = super::Config::from_params(params)?;
        Self::new(
            stopping.tolerance(),
            stopping.max_iters(),
            params.get(Param::Beta)?,
        )
    }

    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.stopping.tolerance()
    }

    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.stopping.max_iters()
    }

    /// Returns the momentum coefficient.
    #[must_use]
    pub fn beta(&self) -> f64 {
        self.beta
    }
}

/// Returns the parameters the heavy ball method reads.
///
/// `beta` here is a momentum coefficient, so it overrides the shared range.
#[must_use]
pub fn params() -> Vec<(Param, ParamSpec)> {
    let mut params = declare(&[Param::Tolerance, Param::MaxIterations]);
    params.push((Param::Beta, MOMENTUM));
    params
}

/// Minimizes `objective` from `x0` with momentum.
pub fn minimize<F, const N: usize>(
    objective: &F,
    x0: Point<N>,
    config: &Config,
    line_search: &LineSearch,
) -> Solution<N>
where
    F: ObjectiveFunction<N> + ?Sized,
{
    let beta = config.beta();
    iterate(
        Kind::HeavyBall,
        objective,
        x0,
        &config.stopping,
        line_search,
        |x, x_prev, gradient| Some(-gradient + (x - x_prev) * beta),
    )
}
