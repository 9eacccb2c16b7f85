use descent_core::{
    Domain, Hessian, Minima, ObjectiveFunction, Point,
    nalgebra::{Matrix2, Vector2},
};

use crate::common_objective_items;

/// `f(x, y) = x·exp(-(x² + y²)) + (x² + y²) / 20`.
///
/// A Gaussian-weighted ramp on top of a shallow paraboloid, with one minimum
/// on the negative `x` axis.
#[derive(Debug, Clone)]
pub struct ExponentialBowl {
    minima: Minima<2>,
    domain: Domain<2>,
}

impl ExponentialBowl {
    #[must_use]
    pub fn new() -> Self {
        Self {
            minima: Minima::evaluate(vec![Vector2::new(-0.669_072, 0.0)], value),
            domain: Domain::new([[-20.0, 20.0], [20.0, -20.0]]),
        }
    }
}

impl Default for ExponentialBowl {
    fn default() -> Self {
        Self::new()
    }
}

fn value(p: &Point<2>) -> f64 {
    let r2 = p.norm_squared();
    p.x * (-r2).exp() + r2 / 20.0
}

impl ObjectiveFunction<2> for ExponentialBowl {
    common_objective_items!();

    fn value(&self, x: &Point<2>) -> f64 {
        value(x)
    }

    fn gradient(&self, p: &Point<2>) -> Point<2> {
        let (x, y) = (p.x, p.y);
        let e = (-p.norm_squared()).exp();
        Vector2::new(
            e * (1.0 - 2.0 * x.powi(2)) + x / 10.0,
            -2.0 * x * y * e + y / 10.0,
        )
    }

    fn hessian(&self, p: &Point<2>) -> Hessian<2> {
        let (x, y) = (p.x, p.y);
        let e = (-p.norm_squared()).exp();
        let cross = e * (4.0 * x.powi(2) * y - 2.0 * y);
        Matrix2::new(
            e * (4.0 * x.powi(3) - 6.0 * x) + 0.1,
            cross,
            cross,
            e * (4.0 * x * y.powi(2) - 2.0 * x) + 0.1,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn listed_minimum_is_stationary() {
        let f = ExponentialBowl::new();
        let x = f.minima().points()[0];

        assert_relative_eq!(f.gradient(&x).norm(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn hessian_matches_gradient_difference() {
        let f = ExponentialBowl::new();
        let x = Vector2::new(0.3, -0.8);
        let h = 1e-6;

        let column_y =
            (f.gradient(&(x + Vector2::new(0.0, h))) - f.gradient(&(x - Vector2::new(0.0, h))))
                / (2.0 * h);
        let hessian = f.hessian(&x);

        assert_relative_eq!(hessian[(0, 1)], column_y.x, epsilon = 1e-6);
        assert_relative_eq!(hessian[(1, 1)], column_y.y, epsilon = 1e-6);
    }
}
