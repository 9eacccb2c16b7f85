//! Newton's method: `d = -H(x)⁻¹ ∇f(x)`.
//!
//! On a quadratic with a positive definite Hessian the first direction points
//! straight at the minimizer. Far from a minimum the Hessian may be indefinite
//! and the direction may point uphill, so the line search bracket should allow
//! negative step lengths. A Hessian that cannot be inverted, or a direction
//! with a non-finite component, ends the run as [`Status::SingularHessian`].
//!
//! [`Status::SingularHessian`]: super::Status::SingularHessian

use descent_core::{ObjectiveFunction, Point};

use crate::line_search::LineSearch;

use super::{Config, Kind, Solution, iterate::iterate};

/// Minimizes `objective` from `x0` along Newton directions.
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
        Kind::Newton,
        objective,
        x0,
        config,
        line_search,
        |x, _, gradient| {
            objective
                .hessian(x)
                .try_inverse()
                .map(|inverse| -(inverse * gradient))
                .filter(|direction| direction.iter().all(|v| v.is_finite()))
        },
    )
}
