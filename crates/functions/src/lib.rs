//! Bundled two-dimensional test functions.
//!
//! Each function implements [`ObjectiveFunction<2>`] with hand-written
//! gradients and Hessians, lists its known minima, and carries the domain a
//! visualization layer should plot.
//!
//! - [`Himmelblau`]: quartic with four minima of equal value
//! - [`Matyas`]: convex quadratic with its minimum at the origin
//! - [`ExponentialBowl`]: Gaussian dip on a shallow paraboloid
//! - [`Rosenbrock`]: the curved valley with its minimum at `(1, 1)`
//!
//! [`ObjectiveFunction<2>`]: descent_core::ObjectiveFunction

/// Implements the parts of [`ObjectiveFunction`] that every bundled function
/// shares: the line restriction and the stored minima and domain.
///
/// [`ObjectiveFunction`]: descent_core::ObjectiveFunction
macro_rules! common_objective_items {
    () => {
        type StepSize<'a> = descent_core::LineRestriction<'a, Self, 2>;

        fn step_size_function<'a>(
            &'a self,
            x: &descent_core::Point<2>,
            direction: &descent_core::Point<2>,
        ) -> Self::StepSize<'a> {
            descent_core::LineRestriction::new(self, *x, *direction)
        }

        fn minima(&self) -> &descent_core::Minima<2> {
            &self.minima
        }

        fn domain(&self) -> &descent_core::Domain<2> {
            &self.domain
        }
    };
}

pub(crate) use common_objective_items;

mod exponential_bowl;
mod himmelblau;
mod matyas;
mod rosenbrock;

pub use exponential_bowl::ExponentialBowl;
pub use himmelblau::Himmelblau;
pub use matyas::Matyas;
pub use rosenbrock::Rosenbrock;
