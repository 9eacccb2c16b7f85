//! Fletcher–Reeves conjugate gradient with periodic restarts.
//!
//! Each outer iteration starts from the steepest-descent direction and runs up
//! to [`RESTART_INTERVAL`] line searches, updating the direction after each one:
//!
//! ```text
//! d ← -∇f(y) + (‖∇f(y)‖² / ‖∇f(y_prev)‖²) · d
//! ```
//!
//! Every line search counts as one iteration toward the cap. The inner loop
//! ends early once the gradient norm is within the tolerance.

use std::time::Instant;

use descent_core::{ObjectiveFunction, Point};
use log::debug;

use crate::{
    Performance,
    line_search::{self, LineSearch},
};

use super::{Config, Kind, Solution, Status};

/// Number of line searches between restarts to steepest descent.
pub const RESTART_INTERVAL: usize = 2;

/// Minimizes `objective` from `x0` along conjugate directions.
pub fn minimize<F, const N: usize>(
    objective: &F,
    x0: Point<N>,
    config: &Config,
    line_search: &LineSearch,
) -> Solution<N>
where
    F: ObjectiveFunction<N> + ?Sized,
{
    minimize_with_restart(objective, x0, config, line_search, RESTART_INTERVAL)
}

/// Like [`minimize`], restarting every `restart` line searches.
///
/// A `restart` of zero is treated as one, which is plain steepest descent.
pub fn minimize_with_restart<F, const N: usize>(
    objective: &F,
    x0: Point<N>,
    config: &Config,
    line_search: &LineSearch,
    restart: usize,
) -> Solution<N>
where
    F: ObjectiveFunction<N> + ?Sized,
{
    let started = Instant::now();

    let mut x = x0;
    let mut steps = vec![x0];
    let mut searches = Performance::default();
    let mut iters = 0;

    let status = 'outer: loop {
        let gradient = objective.gradient(&x);
        let norm = gradient.norm();
        if !norm.is_finite() {
            break Status::Diverged;
        }
        if norm <= config.tolerance() {
            break Status::Converged;
        }
        if iters >= config.max_iters() {
            break Status::MaxIters;
        }

        let mut direction = -gradient;
        let mut previous_norm_squared = norm * norm;

        for _ in 0..restart.max(1) {
            if iters >= config.max_iters() {
                break;
            }

            let step = line_search.run(&objective.step_size_function(&x, &direction));
            searches.accumulate(&step.performance);
            if step.status == line_search::Status::IllConditioned || !step.x.is_finite() {
                break 'outer Status::IllConditionedStep;
            }

            x += direction * step.x;
            steps.push(x);
            iters += 1;

            let gradient = objective.gradient(&x);
            let norm_squared = gradient.norm_squared();
            debug!(
                "{} iteration {iters}: λ = {:e}, ‖∇f‖ = {:e}",
                Kind::ConjugateGradient,
                step.x,
                norm_squared.sqrt()
            );
            if !norm_squared.is_finite() || norm_squared.sqrt() <= config.tolerance() {
                break;
            }

            direction = -gradient + direction * (norm_squared / previous_norm_squared);
            previous_norm_squared = norm_squared;
        }
    };

    Solution::finish(
        Kind::ConjugateGradient,
        objective,
        status,
        x,
        steps,
        Performance::since(started, iters),
        searches,
    )
}
