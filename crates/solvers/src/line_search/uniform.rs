//! Uniform (grid) search.
//!
//! Each round samples `g` at `interval_count` equally spaced points starting
//! at the left end of the bracket and keeps the best sample seen so far. The
//! next round searches the bracket of half-width one interval centered on that
//! best sample, with the sample count scaled by `interval_multiplier`.
//!
//! The search stops when the interval size is within the tolerance, at the
//! iteration cap, or as [`Status::Stalled`] when the scaled sample count drops
//! below one.

use std::time::Instant;

use descent_core::StepSizeFunction;

use crate::{
    ConfigError, Performance, config,
    params::{Param, ParamSet, ParamSpec, declare},
};

use super::{Bracket, Solution, Status, Step};

/// Configuration for uniform search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    bracket: Bracket,
    tolerance: f64,
    max_iters: usize,
    interval_count: usize,
    interval_multiplier: f64,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new([-10.0, 10.0], 1e-6, 100, 20, 1.0).unwrap()
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint is non-finite, if the tolerance or
    /// multiplier is negative or non-finite, or if `interval_count` is zero.
    pub fn new(
        bracket: [f64; 2],
        tolerance: f64,
        max_iters: usize,
        interval_count: usize,
        interval_multiplier: f64,
    ) -> Result<Self, ConfigError> {
        if interval_count == 0 {
            return Err(ConfigError::IntervalCount);
        }
        if !interval_multiplier.is_finite() || interval_multiplier < 0.0 {
            return Err(ConfigError::IntervalMultiplier);
        }

        Ok(Self {
            bracket: Bracket::new(bracket)?,
            tolerance: config::tolerance(tolerance)?,
            max_iters,
            interval_count,
            interval_multiplier,
        })
    }

    /// Creates a config from the `a`, `b`, `tolerance`, `maxIterations`,
    /// `intervalCount`, and `intervalMultiplier` parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter is missing or invalid.
    pub fn from_params(params: &ParamSet) -> Result<Self, ConfigError> {
        Self::new(
            [params.get(Param::A)?, params.get(Param::B)?],
            params.get(Param::Tolerance)?,
            config::max_iters(params.get(Param::MaxIterations)?)?,
            config::interval_count(params.get(Param::IntervalCount)?)?,
            params.get(Param::IntervalMultiplier)?,
        )
    }

    #[must_use]
    pub fn bracket(&self) -> Bracket {
        self.bracket
    }

    /// Returns the interval size at which the search stops.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of sampling rounds.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the number of samples in the first round.
    #[must_use]
    pub fn interval_count(&self) -> usize {
        self.interval_count
    }

    /// Returns the factor applied to the sample count after each round.
    #[must_use]
    pub fn interval_multiplier(&self) -> f64 {
        self.interval_multiplier
    }
}

/// Returns the parameters uniform search reads.
#[must_use]
pub fn params() -> Vec<(Param, ParamSpec)> {
    declare(&[
        Param::A,
        Param::B,
        Param::Tolerance,
        Param::MaxIterations,
        Param::IntervalCount,
        Param::IntervalMultiplier,
    ])
}

/// Finds the step length minimizing `g` by repeated sampling.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn minimize<G: StepSizeFunction + ?Sized>(g: &G, config: &Config) -> Solution {
    let started = Instant::now();

    let mut left = config.bracket().left();
    let mut count = config.interval_count();
    let mut size = config.bracket().width() / count as f64;

    let mut best_x = left;
    let mut best_value = f64::INFINITY;
    let mut steps = vec![Step::Point(left)];
    let mut iters = 0;

    let status = loop {
        if size <= config.tolerance() {
            break Status::Converged;
        }
        if iters >= config.max_iters() {
            break Status::MaxIters;
        }

        for i in 0..count {
            let x = left + i as f64 * size;
            let value = g.value(x);
            if value < best_value {
                best_x = x;
                best_value = value;
                steps.push(Step::Point(x));
            }
        }
        iters += 1;

        left = best_x - size;
        let width = 2.0 * size;
        count = (count as f64 * config.interval_multiplier()).floor() as usize;
        if count == 0 {
            break Status::Stalled;
        }
        size = width / count as f64;
    };

    Solution {
        status,
        x: best_x,
        objective: g.value(best_x),
        steps,
        performance: Performance::since(started, iters),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use descent_core::FnStepSize;

    fn parabola(center: f64) -> impl StepSizeFunction {
        FnStepSize::new(
            move |l: f64| (l - center).powi(2),
            move |l: f64| 2.0 * (l - center),
            |_: f64| 2.0,
        )
    }

    #[test]
    fn refines_around_best_sample() {
        let config = Config::new([-10.0, 10.0], 5e-7, 100, 20, 1.0).unwrap();
        let solution = minimize(&parabola(1.234), &config);

        // Each round shrinks the interval size tenfold, from 1 down to 1e-7.
        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters(), 7);
        assert_relative_eq!(solution.x, 1.234, epsilon = 1e-6);
    }

    #[test]
    fn best_sample_is_never_lost() {
        let config = Config::new([-10.0, 10.0], 1e-6, 3, 20, 1.0).unwrap();
        let solution = minimize(&parabola(1.234), &config);

        let values: Vec<f64> = solution
            .steps
            .iter()
            .skip(1)
            .map(|step| match step {
                Step::Point(x) => (x - 1.234).powi(2),
                Step::Bracket(_) => panic!("uniform search records points only"),
            })
            .collect();
        assert!(values.windows(2).all(|pair| pair[1] < pair[0]));
        assert_eq!(solution.steps.last(), Some(&Step::Point(solution.x)));
    }

    #[test]
    fn zero_multiplier_stalls_after_one_round() {
        let config = Config::new([-10.0, 10.0], 1e-6, 100, 20, 0.0).unwrap();
        let solution = minimize(&parabola(1.0), &config);

        assert_eq!(solution.status, Status::Stalled);
        assert_eq!(solution.iters(), 1);
        assert_relative_eq!(solution.x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn config_rejects_zero_count() {
        assert_eq!(
            Config::new([0.0, 1.0], 1e-6, 10, 0, 1.0),
            Err(ConfigError::IntervalCount)
        );
        assert_eq!(
            Config::new([0.0, 1.0], 1e-6, 10, 5, -1.0),
            Err(ConfigError::IntervalMultiplier)
        );
    }
}
