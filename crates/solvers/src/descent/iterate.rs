use std::time::Instant;

use descent_core::{ObjectiveFunction, Point};
use log::debug;

use crate::{
    Performance,
    line_search::{self, LineSearch},
};

use super::{Config, Kind, Solution, Status};

/// Runs the outer descent loop with directions from `direction`.
///
/// `direction` receives the current point, the previous point, and the
/// gradient at the current point. Returning `None` ends the run as
/// [`Status::SingularHessian`].
pub(super) fn iterate<F, D, const N: usize>(
    kind: Kind,
    objective: &F,
    x0: Point<N>,
    config: &Config,
    line_search: &LineSearch,
    mut direction: D,
) -> Solution<N>
where
    F: ObjectiveFunction<N> + ?Sized,
    D: FnMut(&Point<N>, &Point<N>, &Point<N>) -> Option<Point<N>>,
{
    let started = Instant::now();

    let mut x = x0;
    let mut x_prev = x0;
    let mut steps = vec![x0];
    let mut searches = Performance::default();
    let mut iters = 0;

    let status = loop {
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

        let Some(d) = direction(&x, &x_prev, &gradient) else {
            break Status::SingularHessian;
        };

        let step = line_search.run(&objective.step_size_function(&x, &d));
        searches.accumulate(&step.performance);
        if step.status == line_search::Status::IllConditioned || !step.x.is_finite() {
            break Status::IllConditionedStep;
        }

        x_prev = x;
        x += d * step.x;
        steps.push(x);
        iters += 1;

        debug!("{kind} iteration {iters}: λ = {:e}, ‖∇f‖ = {norm:e}", step.x);
    };

    Solution::finish(
        kind,
        objective,
        status,
        x,
        steps,
        Performance::since(started, iters),
        searches,
    )
}
