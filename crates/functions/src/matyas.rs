use descent_core::{
    Domain, Hessian, Minima, ObjectiveFunction, Point,
    nalgebra::{Matrix2, Vector2},
};

use crate::common_objective_items;

/// Matyas function: `f(x, y) = 0.26(x² + y²) - 0.48xy`.
///
/// Convex with a single minimum of zero at the origin.
#[derive(Debug, Clone)]
pub struct Matyas {
    minima: Minima<2>,
    domain: Domain<2>,
}

impl Matyas {
    #[must_use]
    pub fn new() -> Self {
        Self {
            minima: Minima::evaluate(vec![Vector2::zeros()], value),
            domain: Domain::new([[-10.0, 10.0], [10.0, -10.0]]),
        }
    }
}

impl Default for Matyas {
    fn default() -> Self {
        Self::new()
    }
}

fn value(p: &Point<2>) -> f64 {
    0.26 * (p.x.powi(2) + p.y.powi(2)) - 0.48 * p.x * p.y
}

impl ObjectiveFunction<2> for Matyas {
    common_objective_items!();

    fn value(&self, x: &Point<2>) -> f64 {
        value(x)
    }

    fn gradient(&self, p: &Point<2>) -> Point<2> {
        Vector2::new(0.52 * p.x - 0.48 * p.y, 0.52 * p.y - 0.48 * p.x)
    }

    fn hessian(&self, _p: &Point<2>) -> Hessian<2> {
        Matrix2::new(0.52, -0.48, -0.48, 0.52)
    }
}
