use descent_core::{
    Domain, Hessian, Minima, ObjectiveFunction, Point,
    nalgebra::{Matrix2, Vector2},
};

use crate::common_objective_items;

/// Rosenbrock's function: `f(x, y) = (1 - x)² + 100(y - x²)²`.
#[derive(Debug, Clone)]
pub struct Rosenbrock {
    minima: Minima<2>,
    domain: Domain<2>,
}

impl Rosenbrock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            minima: Minima::evaluate(vec![Vector2::new(1.0, 1.0)], value),
            domain: Domain::new([[-2.0, 2.0], [2.0, -2.0]]),
        }
    }
}

impl Default for Rosenbrock {
    fn default() -> Self {
        Self::new()
    }
}

fn value(p: &Point<2>) -> f64 {
    (1.0 - p.x).powi(2) + 100.0 * (p.y - p.x.powi(2)).powi(2)
}

impl ObjectiveFunction<2> for Rosenbrock {
    common_objective_items!();

    fn value(&self, x: &Point<2>) -> f64 {
        value(x)
    }

    fn gradient(&self, p: &Point<2>) -> Point<2> {
        let (x, y) = (p.x, p.y);
        Vector2::new(
            -2.0 * (1.0 - x) - 400.0 * x * (y - x.powi(2)),
            200.0 * (y - x.powi(2)),
        )
    }

    fn hessian(&self, p: &Point<2>) -> Hessian<2> {
        let (x, y) = (p.x, p.y);
        Matrix2::new(
            2.0 - 400.0 * y + 1200.0 * x.powi(2),
            -400.0 * x,
            -400.0 * x,
            200.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimum_is_exact() {
        let f = Rosenbrock::new();
        let x = Vector2::new(1.0, 1.0);

        assert_eq!(f.value(&x), 0.0);
        assert_eq!(f.gradient(&x), Vector2::zeros());
        assert_eq!(f.minima().values(), &[0.0]);
    }

    #[test]
    fn valley_floor_has_no_curvature_penalty() {
        let f = Rosenbrock::new();

        // Along y = x², only the (1 - x)² term remains.
        assert_eq!(f.value(&Vector2::new(-1.0, 1.0)), 4.0);
    }
}
