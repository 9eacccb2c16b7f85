//! Steepest descent: `d = -∇f(x)`.

use descent_core::{ObjectiveFunction, Point};

use crate::line_search::LineSearch;

use super::{Config, Kind, Solution, iterate::iterate};

/// Minimizes `objective` from `x0` along the negative gradient.
pub fn minimize<F, const N: usize>(
    objective: &F,
    x0: Point<N>,
    config: &Config,
    line_search: &LineSearch,
) -> Solution<N>
where
    F: ObjectiveFunction<N> + ?Sized,
{
    iterate(
        Kind::GradientDescent,
        objective,
        x0,
        config,
        line_search,
        |_, _, gradient| Some(-gradient),
    )
}
