use descent_core::{ObjectiveFunction, Point};
use log::warn;

use crate::{Performance, is_known_minimum};

use super::Kind;

/// Indicates how a descent run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The gradient norm fell within the tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Newton's method met a singular Hessian or a non-finite direction.
    SingularHessian,

    /// The line search was ill-conditioned or returned a non-finite step.
    ///
    /// The iterate is left where it was before that search.
    IllConditionedStep,

    /// The gradient norm became NaN or infinite.
    Diverged,
}

/// The result of a descent run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution<const N: usize> {
    /// Final status.
    pub status: Status,

    /// Whether the final objective value matches a known minimum.
    pub found_minimum: bool,

    /// Final iterate.
    pub x: Point<N>,

    /// Objective value at `x`.
    pub objective: f64,

    /// Every accepted iterate, starting with the initial point.
    pub steps: Vec<Point<N>>,

    /// Outer iterations and elapsed time.
    pub performance: Performance,

    /// Work summed over every line search the run made.
    pub line_search: Performance,
}

impl<const N: usize> Solution<N> {
    /// Returns the number of outer iterations.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.performance.iterations
    }

    /// Evaluates the final iterate and checks it against the known minima.
    pub(super) fn finish<F>(
        kind: Kind,
        objective: &F,
        status: Status,
        x: Point<N>,
        steps: Vec<Point<N>>,
        performance: Performance,
        line_search: Performance,
    ) -> Self
    where
        F: ObjectiveFunction<N> + ?Sized,
    {
        let value = objective.value(&x);

        match status {
            Status::Converged | Status::MaxIters => {}
            Status::SingularHessian => {
                warn!(
                    "{kind}: singular Hessian after {} iterations",
                    performance.iterations
                );
            }
            Status::IllConditionedStep => {
                warn!(
                    "{kind}: ill-conditioned line search after {} iterations",
                    performance.iterations
                );
            }
            Status::Diverged => {
                warn!(
                    "{kind}: gradient diverged after {} iterations",
                    performance.iterations
                );
            }
        }

        Self {
            status,
            found_minimum: is_known_minimum(objective, value),
            x,
            objective: value,
            steps,
            performance,
            line_search,
        }
    }
}
