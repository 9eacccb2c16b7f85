use descent_core::{
    Domain, Hessian, Minima, ObjectiveFunction, Point,
    nalgebra::{Matrix2, Vector2},
};

use crate::common_objective_items;

/// Himmelblau's function: `f(x, y) = (x² + y - 11)² + (x + y² - 7)²`.
///
/// Four minima with value zero; the first three are listed to six decimals,
/// so their stored reference values are tiny but not exactly zero.
#[derive(Debug, Clone)]
pub struct Himmelblau {
    minima: Minima<2>,
    domain: Domain<2>,
}

impl Himmelblau {
    #[must_use]
    pub fn new() -> Self {
        let minima = Minima::evaluate(
            vec![
                Vector2::new(3.584_428, -1.848_126),
                Vector2::new(-2.805_118, 3.131_312),
                Vector2::new(-3.779_310, -3.283_186),
                Vector2::new(3.0, 2.0),
            ],
            value,
        );

        Self {
            minima,
            domain: Domain::new([[-6.0, 6.0], [6.0, -6.0]]),
        }
    }
}

impl Default for Himmelblau {
    fn default() -> Self {
        Self::new()
    }
}

fn value(p: &Point<2>) -> f64 {
    let (x, y) = (p.x, p.y);
    (x.powi(2) + y - 11.0).powi(2) + (x + y.powi(2) - 7.0).powi(2)
}

impl ObjectiveFunction<2> for Himmelblau {
    common_objective_items!();

    fn value(&self, x: &Point<2>) -> f64 {
        value(x)
    }

    fn gradient(&self, p: &Point<2>) -> Point<2> {
        let (x, y) = (p.x, p.y);
        let u = x.powi(2) + y - 11.0;
        let v = x + y.powi(2) - 7.0;
        Vector2::new(4.0 * x * u + 2.0 * v, 2.0 * u + 4.0 * y * v)
    }

    fn hessian(&self, p: &Point<2>) -> Hessian<2> {
        let (x, y) = (p.x, p.y);
        let cross = 4.0 * (x + y);
        Matrix2::new(
            12.0 * x.powi(2) + 4.0 * y - 42.0,
            cross,
            cross,
            4.0 * x + 12.0 * y.powi(2) - 26.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn exact_minimum_is_zero() {
        let f = Himmelblau::new();
        let x = Vector2::new(3.0, 2.0);

        assert_relative_eq!(f.value(&x), 0.0);
        assert_relative_eq!(f.gradient(&x).norm(), 0.0);
    }

    #[test]
    fn listed_minima_are_near_zero() {
        let f = Himmelblau::new();

        assert_eq!(f.minima().len(), 4);
        for value in f.minima().values() {
            assert!(*value >= 0.0 && *value < 1e-9, "value = {value}");
        }
    }

    #[test]
    fn gradient_matches_finite_difference() {
        let f = Himmelblau::new();
        let x = Vector2::new(1.3, -0.7);
        let h = 1e-6;

        let dx = (f.value(&(x + Vector2::new(h, 0.0))) - f.value(&(x - Vector2::new(h, 0.0))))
            / (2.0 * h);
        let dy = (f.value(&(x + Vector2::new(0.0, h))) - f.value(&(x - Vector2::new(0.0, h))))
            / (2.0 * h);

        let gradient = f.gradient(&x);
        assert_relative_eq!(gradient.x, dx, epsilon = 1e-5);
        assert_relative_eq!(gradient.y, dy, epsilon = 1e-5);
    }

    #[test]
    fn hessian_matches_gradient_difference() {
        let f = Himmelblau::new();
        let x = Vector2::new(-2.1, 0.4);
        let h = 1e-6;

        let column_x =
            (f.gradient(&(x + Vector2::new(h, 0.0))) - f.gradient(&(x - Vector2::new(h, 0.0))))
                / (2.0 * h);
        let hessian = f.hessian(&x);

        assert_relative_eq!(hessian[(0, 0)], column_x.x, epsilon = 1e-4);
        assert_relative_eq!(hessian[(1, 0)], column_x.y, epsilon = 1e-4);
        assert_relative_eq!(hessian[(0, 1)], hessian[(1, 0)]);
    }
}
