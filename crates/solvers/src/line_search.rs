//! One-dimensional searches for a step length.
//!
//! A line search minimizes a [`StepSizeFunction`] `g(λ)`, usually the
//! restriction of an objective to the line `x + λ·d`, and reports the chosen
//! `λ` together with its trace.
//!
//! # Methods
//!
//! - [`constant`]: returns a fixed step length
//! - [`golden_section`]: shrinks a bracket by the golden ratio
//! - [`bisection`]: halves a bracket using the sign of `g'`
//! - [`dichotomous`]: compares two probes straddling the midpoint
//! - [`fibonacci`]: shrinks a bracket by consecutive Fibonacci ratios
//! - [`newton`]: Newton's iteration on `g'`
//! - [`uniform`]: samples a grid and refines around the best sample
//! - [`armijo`]: backtracks until sufficient decrease
//!
//! Each module has a validated `Config` and a `minimize` function. The
//! [`LineSearch`] enum wraps one config so a descent method can be handed any
//! of them, and [`Kind`] names the methods for parameter handling.
//!
//! No search returns an error. Every search stops within its iteration cap and
//! the [`Status`] says how it ended.

pub mod armijo;
pub mod bisection;
pub mod constant;
pub mod dichotomous;
pub mod fibonacci;
pub mod golden_section;
pub mod newton;
pub mod uniform;

mod bracket;
mod solution;

pub use bracket::{Bracket, BracketError};
pub use solution::{Solution, Status, Step};

use std::fmt;

use descent_core::StepSizeFunction;
use log::trace;

use crate::{
    ConfigError,
    params::{Param, ParamSet, ParamSpec},
};

/// Names the line-search methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    Constant,
    GoldenSection,
    Bisection,
    Dichotomous,
    Fibonacci,
    Newton,
    Uniform,
    Armijo,
}

impl Kind {
    /// All methods, in display order.
    pub const ALL: [Kind; 8] = [
        Kind::Constant,
        Kind::GoldenSection,
        Kind::Bisection,
        Kind::Dichotomous,
        Kind::Fibonacci,
        Kind::Newton,
        Kind::Uniform,
        Kind::Armijo,
    ];

    /// Returns a human-readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Kind::Constant => "Constant",
            Kind::GoldenSection => "Golden Section Search",
            Kind::Bisection => "Bisection Search",
            Kind::Dichotomous => "Dichotomous Search",
            Kind::Fibonacci => "Fibonacci Search",
            Kind::Newton => "Newton's Search",
            Kind::Uniform => "Uniform Search",
            Kind::Armijo => "Armijo Search",
        }
    }

    /// Returns the parameters this method reads, with their display metadata.
    #[must_use]
    pub fn params(self) -> Vec<(Param, ParamSpec)> {
        match self {
            Kind::Constant => constant::params(),
            Kind::GoldenSection => golden_section::params(),
            Kind::Bisection => bisection::params(),
            Kind::Dichotomous => dichotomous::params(),
            Kind::Fibonacci => fibonacci::params(),
            Kind::Newton => newton::params(),
            Kind::Uniform => uniform::params(),
            Kind::Armijo => armijo::params(),
        }
    }

    /// Returns this method's parameters, each at its default.
    #[must_use]
    pub fn default_params(self) -> ParamSet {
        ParamSet::from_specs(self.params())
    }

    /// Builds a validated line search from a parameter set.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter this method reads is missing from
    /// `params` or fails the method's validation.
    pub fn configure(self, params: &ParamSet) -> Result<LineSearch, ConfigError> {
        Ok(match self {
            Kind::Constant => LineSearch::Constant(constant::Config::from_params(params)?),
            Kind::GoldenSection => {
                LineSearch::GoldenSection(golden_section::Config::from_params(params)?)
            }
            Kind::Bisection => LineSearch::Bisection(bisection::Config::from_params(params)?),
            Kind::Dichotomous => {
                LineSearch::Dichotomous(dichotomous::Config::from_params(params)?)
            }
            Kind::Fibonacci => LineSearch::Fibonacci(fibonacci::Config::from_params(params)?),
            Kind::Newton => LineSearch::Newton(newton::Config::from_params(params)?),
            Kind::Uniform => LineSearch::Uniform(uniform::Config::from_params(params)?),
            Kind::Armijo => LineSearch::Armijo(armijo::Config::from_params(params)?),
        })
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A configured line search of any kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineSearch {
    Constant(constant::Config),
    GoldenSection(golden_section::Config),
    Bisection(bisection::Config),
    Dichotomous(dichotomous::Config),
    Fibonacci(fibonacci::Config),
    Newton(newton::Config),
    Uniform(uniform::Config),
    Armijo(armijo::Config),
}

impl LineSearch {
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            LineSearch::Constant(_) => Kind::Constant,
            LineSearch::GoldenSection(_) => Kind::GoldenSection,
            LineSearch::Bisection(_) => Kind::Bisection,
            LineSearch::Dichotomous(_) => Kind::Dichotomous,
            LineSearch::Fibonacci(_) => Kind::Fibonacci,
            LineSearch::Newton(_) => Kind::Newton,
            LineSearch::Uniform(_) => Kind::Uniform,
            LineSearch::Armijo(_) => Kind::Armijo,
        }
    }

    /// Runs the configured search on `g`.
    pub fn run<G: StepSizeFunction + ?Sized>(&self, g: &G) -> Solution {
        let solution = match self {
            LineSearch::Constant(config) => constant::minimize(g, config),
            LineSearch::GoldenSection(config) => golden_section::minimize(g, config),
            LineSearch::Bisection(config) => bisection::minimize(g, config),
            LineSearch::Dichotomous(config) => dichotomous::minimize(g, config),
            LineSearch::Fibonacci(config) => fibonacci::minimize(g, config),
            LineSearch::Newton(config) => newton::minimize(g, config),
            LineSearch::Uniform(config) => uniform::minimize(g, config),
            LineSearch::Armijo(config) => armijo::minimize(g, config),
        };

        trace!(
            "{} finished {:?} after {} iterations: λ = {}",
            self.kind(),
            solution.status,
            solution.iters(),
            solution.x,
        );

        solution
    }
}

impl Default for LineSearch {
    fn default() -> Self {
        LineSearch::GoldenSection(golden_section::Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use descent_core::FnStepSize;

    fn shifted_parabola() -> impl StepSizeFunction {
        FnStepSize::new(
            |l: f64| (l - 0.3).powi(2) + 1.0,
            |l: f64| 2.0 * (l - 0.3),
            |_: f64| 2.0,
        )
    }

    #[test]
    fn every_kind_configures_from_its_defaults() {
        for kind in Kind::ALL {
            let params = kind.default_params();
            let search = kind.configure(&params).unwrap();

            assert_eq!(search.kind(), kind);
        }
    }

    #[test]
    fn declared_params_match_methods() {
        let names = |kind: Kind| -> Vec<Param> {
            kind.params().into_iter().map(|(param, _)| param).collect()
        };

        assert_eq!(names(Kind::Constant), [Param::Lambda]);
        assert_eq!(
            names(Kind::Fibonacci),
            [
                Param::A,
                Param::B,
                Param::Tolerance,
                Param::Epsilon,
                Param::MaxIterations
            ]
        );
        assert_eq!(
            names(Kind::Armijo),
            [
                Param::Lambda,
                Param::Alpha,
                Param::Beta,
                Param::MaxIterations
            ]
        );
    }

    #[test]
    fn configure_rejects_missing_params() {
        let params = Kind::Constant.default_params();

        assert_eq!(
            Kind::Bisection.configure(&params),
            Err(ConfigError::Param(crate::params::ParamError::Undeclared(
                Param::A
            )))
        );
    }

    #[test]
    fn bracketing_searches_agree_on_a_parabola() {
        let g = shifted_parabola();
        // Probes must sit well inside the tolerance or the width stalls at 2ε.
        let params = |kind: Kind| {
            let params = kind
                .default_params()
                .with(Param::A, -1.0)
                .and_then(|params| params.with(Param::B, 2.0))
                .and_then(|params| params.with(Param::Tolerance, -5.0))
                .unwrap();
            if params.declares(Param::Epsilon) {
                params.with(Param::Epsilon, -7.0).unwrap()
            } else {
                params
            }
        };

        for kind in [
            Kind::GoldenSection,
            Kind::Bisection,
            Kind::Dichotomous,
            Kind::Fibonacci,
            Kind::Uniform,
        ] {
            let search = kind.configure(&params(kind)).unwrap();
            let solution = search.run(&g);

            assert_eq!(solution.status, Status::Converged, "{kind}");
            assert_relative_eq!(solution.x, 0.3, epsilon = 1e-4);
        }
    }

    #[test]
    fn runs_are_repeatable() {
        let g = shifted_parabola();

        for kind in Kind::ALL {
            let search = kind.configure(&kind.default_params()).unwrap();
            let first = search.run(&g);
            let second = search.run(&g);

            assert_eq!(first.status, second.status);
            assert_eq!(first.steps, second.steps);
            assert_eq!(first.x.to_bits(), second.x.to_bits());
            assert_eq!(first.iters(), second.iters());
        }
    }
}
