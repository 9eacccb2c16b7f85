//! Multivariate descent methods.
//!
//! Every method repeats the same outer step: pick a direction `d` at the
//! current point `x`, hand the restriction `g(λ) = f(x + λ·d)` to a
//! [`LineSearch`], and move to `x + λ·d`. The methods differ only in how they
//! choose `d`:
//!
//! - [`gradient`]: steepest descent, `d = -∇f(x)`
//! - [`newton`]: `d = -H(x)⁻¹ ∇f(x)`
//! - [`conjugate_gradient`]: Fletcher–Reeves directions with periodic restarts
//! - [`heavy_ball`]: steepest descent plus momentum `β·(x - x_prev)`
//!
//! A run stops when `‖∇f(x)‖ <= tolerance` or at the iteration cap, and never
//! returns an error: the [`Status`] on the [`Solution`] says how it ended.

pub mod conjugate_gradient;
pub mod gradient;
pub mod heavy_ball;
pub mod newton;

mod iterate;
mod solution;

pub use solution::{Solution, Status};

use std::fmt;

use descent_core::{ObjectiveFunction, Point};

use crate::{
    ConfigError, config,
    line_search::LineSearch,
    params::{Param, ParamSet, ParamSpec, declare},
};

/// Names the descent methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    Newton,
    GradientDescent,
    ConjugateGradient,
    HeavyBall,
}

impl Kind {
    /// All methods, in display order.
    pub const ALL: [Kind; 4] = [
        Kind::Newton,
        Kind::GradientDescent,
        Kind::ConjugateGradient,
        Kind::HeavyBall,
    ];

    /// Returns a human-readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Kind::Newton => "Newton's Method",
            Kind::GradientDescent => "Gradient Descent",
            Kind::ConjugateGradient => "Conjugate Gradient",
            Kind::HeavyBall => "Heavy Ball",
        }
    }

    /// Returns the parameters this method reads, with their display metadata.
    #[must_use]
    pub fn params(self) -> Vec<(Param, ParamSpec)> {
        match self {
            Kind::Newton | Kind::GradientDescent | Kind::ConjugateGradient => {
                declare(&[Param::Tolerance, Param::MaxIterations])
            }
            Kind::HeavyBall => heavy_ball::params(),
        }
    }

    /// Returns this method's parameters, each at its default.
    #[must_use]
    pub fn default_params(self) -> ParamSet {
        ParamSet::from_specs(self.params())
    }

    /// Builds a validated method from a parameter set.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter this method reads is missing from
    /// `params` or fails validation.
    pub fn configure(self, params: &ParamSet) -> Result<Method, ConfigError> {
        Ok(match self {
            Kind::Newton => Method::Newton(Config::from_params(params)?),
            Kind::GradientDescent => Method::GradientDescent(Config::from_params(params)?),
            Kind::ConjugateGradient => Method::ConjugateGradient(Config::from_params(params)?),
            Kind::HeavyBall => Method::HeavyBall(heavy_ball::Config::from_params(params)?),
        })
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stopping criteria shared by every descent method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
    max_iters: usize,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-6, 100).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated gradient-norm tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Tolerance`] if the tolerance is negative or
    /// non-finite.
    pub fn new(tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            tolerance: config::tolerance(tolerance)?,
            max_iters,
        })
    }

    /// Creates a config from the `tolerance` and `maxIterations` parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter is missing or invalid.
    pub fn from_params(params: &ParamSet) -> Result<Self, ConfigError> {
        Self::new(
            params.get(Param::Tolerance)?,
            config::max_iters(params.get(Param::MaxIterations)?)?,
        )
    }

    /// Returns the gradient norm at which a run stops.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of line searches.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}

/// A configured descent method of any kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Method {
    Newton(Config),
    GradientDescent(Config),
    ConjugateGradient(Config),
    HeavyBall(heavy_ball::Config),
}

impl Method {
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Method::Newton(_) => Kind::Newton,
            Method::GradientDescent(_) => Kind::GradientDescent,
            Method::ConjugateGradient(_) => Kind::ConjugateGradient,
            Method::HeavyBall(_) => Kind::HeavyBall,
        }
    }

    /// Minimizes `objective` from `x0`, choosing step lengths with `line_search`.
    pub fn run<F, const N: usize>(
        &self,
        objective: &F,
        x0: Point<N>,
        line_search: &LineSearch,
    ) -> Solution<N>
    where
        F: ObjectiveFunction<N> + ?Sized,
    {
        match self {
            Method::Newton(config) => newton::minimize(objective, x0, config, line_search),
            Method::GradientDescent(config) => {
                gradient::minimize(objective, x0, config, line_search)
            }
            Method::ConjugateGradient(config) => {
                conjugate_gradient::minimize(objective, x0, config, line_search)
            }
            Method::HeavyBall(config) => heavy_ball::minimize(objective, x0, config, line_search),
        }
    }
}
