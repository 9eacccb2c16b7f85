//! Armijo backtracking.
//!
//! Starting from `λ`, accepts the step once it gives sufficient decrease,
//!
//! ```text
//! g(λ) <= g(0) + alpha·λ·g'(0)
//! ```
//!
//! and otherwise shrinks it by `beta`. A non-finite `g(λ)` never passes the
//! test, so the search backtracks out of regions where the objective blows up.

use std::time::Instant;

use descent_core::StepSizeFunction;

use crate::{
    ConfigError, Performance, config,
    params::{Param, ParamSet, ParamSpec, declare},
};

use super::{Solution, Status, Step};

/// Configuration for Armijo backtracking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    lambda: f64,
    alpha: f64,
    beta: f64,
    max_iters: usize,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1.0, 0.01, 0.7, 100).unwrap()
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// # Errors
    ///
    /// Returns an error if `lambda` is non-finite, if `alpha` is outside
    /// `[0, 1]`, or if `beta` is outside `(0, 1]`.
    ///
    /// With `beta = 1` the step never shrinks, so a rejected first step runs
    /// to `max_iters`.
    pub fn new(lambda: f64, alpha: f64, beta: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(ConfigError::Alpha);
        }
        if !(beta > 0.0 && beta <= 1.0) {
            return Err(ConfigError::Contraction);
        }

        Ok(Self {
            lambda: config::lambda(lambda)?,
            alpha,
            beta,
            max_iters,
        })
    }

    /// Creates a config from the `lambda`, `alpha`, `beta`, and
    /// `maxIterations` parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter is missing or invalid.
    pub fn from_params(params: &ParamSet) -> Result<Self, ConfigError> {
        Self::new(
            params.get(Param::Lambda)?,
            params.get(Param::Alpha)?,
            params.get(Param::Beta)?,
            config::max_iters(params.get(Param::MaxIterations)?)?,
        )
    }

    /// Returns the first step length tried.
    #[must_use]
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Returns the sufficient-decrease coefficient.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the factor applied to a rejected step length.
    #[must_use]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}

/// Returns the parameters Armijo backtracking reads.
#[must_use]
pub fn params() -> Vec<(Param, ParamSpec)> {
    declare(&[Param::Lambda, Param::Alpha, Param::Beta, Param::MaxIterations])
}

/// Backtracks from the configured step length until sufficient decrease.
pub fn minimize<G: StepSizeFunction + ?Sized>(g: &G, config: &Config) -> Solution {
    let started = Instant::now();

    let origin_value = g.value(0.0);
    let origin_slope = g.derivative(0.0);
    let sufficient = |lambda: f64, value: f64| {
        value <= origin_value + config.alpha() * lambda * origin_slope
    };

    let mut lambda = g.secure_limits(config.lambda());
    let mut value = g.value(lambda);
    let mut steps = vec![Step::Point(lambda)];
    let mut iters = 0;

    let status = loop {
        if sufficient(lambda, value) {
            break Status::Converged;
        }
        if iters >= config.max_iters() {
            break Status::MaxIters;
        }

        lambda = g.secure_limits(lambda * config.beta());
        value = g.value(lambda);
        steps.push(Step::Point(lambda));
        iters += 1;
    };

    Solution {
        status,
        x: lambda,
        objective: value,
        steps,
        performance: Performance::since(started, iters),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use descent_core::FnStepSize;

    use crate::line_search::Kind;

    #[test]
    fn backtracks_until_sufficient_decrease() {
        // g(λ) = (λ - 0.3)², g(0) = 0.09, g'(0) = -0.6.
        let g = FnStepSize::new(
            |l: f64| (l - 0.3).powi(2),
            |l: f64| 2.0 * (l - 0.3),
            |_: f64| 2.0,
        );
        let solution = minimize(&g, &Config::new(1.0, 0.5, 0.5, 20).unwrap());

        // 1 → 0.5 → 0.25 passes: 0.0025 <= 0.09 - 0.075.
        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters(), 2);
        assert_relative_eq!(solution.x, 0.25);
        assert_eq!(
            solution.steps,
            [Step::Point(1.0), Step::Point(0.5), Step::Point(0.25)]
        );
    }

    #[test]
    fn non_finite_values_never_pass() {
        let g = FnStepSize::new(
            |l: f64| if l > 0.1 { f64::NAN } else { -l },
            |_: f64| -1.0,
            |_: f64| 0.0,
        );
        let solution = minimize(&g, &Config::new(1.0, 0.01, 0.5, 20).unwrap());

        assert_eq!(solution.status, Status::Converged);
        assert!(solution.x <= 0.1);
        assert!(solution.objective.is_finite());
    }

    #[test]
    fn ascent_direction_hits_the_cap() {
        let g = FnStepSize::new(|l: f64| l, |_: f64| 1.0, |_: f64| 0.0);
        let solution = minimize(&g, &Config::new(1.0, 0.5, 0.5, 6).unwrap());

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters(), 6);
    }

    #[test]
    fn config_rejects_bad_coefficients() {
        assert_eq!(Config::new(1.0, 1.5, 0.5, 10), Err(ConfigError::Alpha));
        assert_eq!(Config::new(1.0, -0.1, 0.5, 10), Err(ConfigError::Alpha));
        assert_eq!(Config::new(1.0, 0.1, 0.0, 10), Err(ConfigError::Contraction));
        assert_eq!(Config::new(1.0, 0.1, 1.5, 10), Err(ConfigError::Contraction));
        assert_eq!(Config::new(1.0, 0.1, f64::NAN, 10), Err(ConfigError::Contraction));
    }

    #[test]
    fn every_declared_coefficient_configures() {
        for (param, value) in [
            (Param::Alpha, 0.0),
            (Param::Alpha, 1.0),
            (Param::Beta, 0.5),
            (Param::Beta, 1.0),
        ] {
            let params = Kind::Armijo.default_params().with(param, value).unwrap();

            assert!(Kind::Armijo.configure(&params).is_ok(), "{param} = {value}");
        }
    }

    #[test]
    fn unit_contraction_keeps_the_step_until_the_cap() {
        let g = FnStepSize::new(|l: f64| l * l, |l: f64| 2.0 * l, |_: f64| 2.0);
        let solution = minimize(&g, &Config::new(3.0, 0.5, 1.0, 4).unwrap());

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters(), 4);
        assert_relative_eq!(solution.x, 3.0);
    }
}
