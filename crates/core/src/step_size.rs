use crate::{ObjectiveFunction, Point};

/// A scalar function of the step length `λ` along a fixed direction.
///
/// Line searches minimize a `StepSizeFunction`. Derivative-free searches only
/// call [`value`](Self::value); bisection needs the first derivative, and
/// Newton's search needs both.
pub trait StepSizeFunction {
    /// Evaluates `g(λ)`.
    fn value(&self, lambda: f64) -> f64;

    /// Evaluates `g'(λ)`.
    fn derivative(&self, lambda: f64) -> f64;

    /// Evaluates `g''(λ)`.
    fn second_derivative(&self, lambda: f64) -> f64;

    /// Adjusts a candidate step length into a numerically safe range.
    ///
    /// The default leaves `λ` untouched.
    fn secure_limits(&self, lambda: f64) -> f64 {
        lambda
    }
}

impl<G: StepSizeFunction + ?Sized> StepSizeFunction for &G {
    fn value(&self, lambda: f64) -> f64 {
        (**self).value(lambda)
    }

    fn derivative(&self, lambda: f64) -> f64 {
        (**self).derivative(lambda)
    }

    fn second_derivative(&self, lambda: f64) -> f64 {
        (**self).second_derivative(lambda)
    }

    fn secure_limits(&self, lambda: f64) -> f64 {
        (**self).secure_limits(lambda)
    }
}

/// The restriction of an objective to the line `x + λ·d`.
///
/// Derivatives follow from the chain rule:
///
/// ```text
/// g(λ)   = f(x + λ·d)
/// g'(λ)  = ∇f(x + λ·d) · d
/// g''(λ) = dᵀ · H(x + λ·d) · d
/// ```
#[derive(Debug, Clone)]
pub struct LineRestriction<'a, F: ?Sized, const N: usize> {
    objective: &'a F,
    origin: Point<N>,
    direction: Point<N>,
}

impl<'a, F: ?Sized, const N: usize> LineRestriction<'a, F, N> {
    /// Restricts `objective` to the line through `origin` along `direction`.
    #[must_use]
    pub fn new(objective: &'a F, origin: Point<N>, direction: Point<N>) -> Self {
        Self {
            objective,
            origin,
            direction,
        }
    }

    /// Returns the point at step length `lambda`.
    #[must_use]
    pub fn point_at(&self, lambda: f64) -> Point<N> {
        self.origin + self.direction * lambda
    }

    /// Returns the direction of the line.
    #[must_use]
    pub fn direction(&self) -> &Point<N> {
        &self.direction
    }
}

impl<F, const N: usize> StepSizeFunction for LineRestriction<'_, F, N>
where
    F: ObjectiveFunction<N> + ?Sized,
{
    fn value(&self, lambda: f64) -> f64 {
        self.objective.value(&self.point_at(lambda))
    }

    fn derivative(&self, lambda: f64) -> f64 {
        self.objective
            .gradient(&self.point_at(lambda))
            .dot(&self.direction)
    }

    fn second_derivative(&self, lambda: f64) -> f64 {
        let hessian = self.objective.hessian(&self.point_at(lambda));
        self.direction.dot(&(hessian * self.direction))
    }
}

/// A [`StepSizeFunction`] assembled from three closures.
///
/// Handy for scalar problems that are not restrictions of a larger objective.
///
/// ```
/// use descent_core::{FnStepSize, StepSizeFunction};
///
/// let g = FnStepSize::new(
///     |l: f64| (l - 2.0).powi(2),
///     |l: f64| 2.0 * (l - 2.0),
///     |_: f64| 2.0,
/// );
/// assert_eq!(g.value(2.0), 0.0);
/// assert_eq!(g.derivative(0.0), -4.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnStepSize<V, D, D2> {
    value: V,
    derivative: D,
    second_derivative: D2,
}

impl<V, D, D2> FnStepSize<V, D, D2>
where
    V: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
    D2: Fn(f64) -> f64,
{
    /// Creates a step-size function from `g`, `g'`, and `g''`.
    pub fn new(value: V, derivative: D, second_derivative: D2) -> Self {
        Self {
            value,
            derivative,
            second_derivative,
        }
    }
}

impl<V, D, D2> StepSizeFunction for FnStepSize<V, D, D2>
where
    V: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
    D2: Fn(f64) -> f64,
{
    fn value(&self, lambda: f64) -> f64 {
        (self.value)(lambda)
    }

    fn derivative(&self, lambda: f64) -> f64 {
        (self.derivative)(lambda)
    }

    fn second_derivative(&self, lambda: f64) -> f64 {
        (self.second_derivative)(lambda)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use nalgebra::Vector2;

    use crate::{Domain, Hessian, Minima};

    /// Paraboloid: f(x, y) = x² + 3y².
    struct Paraboloid {
        minima: Minima<2>,
        domain: Domain<2>,
    }

    impl Paraboloid {
        fn new() -> Self {
            Self {
                minima: Minima::evaluate(vec![Vector2::zeros()], |p| {
                    p.x.powi(2) + 3.0 * p.y.powi(2)
                }),
                domain: Domain::new([[-1.0, 1.0], [-1.0, 1.0]]),
            }
        }
    }

    impl ObjectiveFunction<2> for Paraboloid {
        type StepSize<'a> = LineRestriction<'a, Self, 2>;

        fn value(&self, x: &Point<2>) -> f64 {
            x.x.powi(2) + 3.0 * x.y.powi(2)
        }

        fn gradient(&self, x: &Point<2>) -> Point<2> {
            Vector2::new(2.0 * x.x, 6.0 * x.y)
        }

        fn hessian(&self, _x: &Point<2>) -> Hessian<2> {
            Hessian::<2>::new(2.0, 0.0, 0.0, 6.0)
        }

        fn step_size_function<'a>(
            &'a self,
            x: &Point<2>,
            direction: &Point<2>,
        ) -> Self::StepSize<'a> {
            LineRestriction::new(self, *x, *direction)
        }

        fn minima(&self) -> &Minima<2> {
            &self.minima
        }

        fn domain(&self) -> &Domain<2> {
            &self.domain
        }
    }

    #[test]
    fn restriction_matches_chain_rule() {
        let f = Paraboloid::new();
        let g = f.step_size_function(&Vector2::new(1.0, 1.0), &Vector2::new(-1.0, 2.0));

        // g(λ) = (1 - λ)² + 3(1 + 2λ)²
        assert_relative_eq!(g.value(0.5), 0.25 + 3.0 * 4.0);
        // g'(λ) = -2(1 - λ) + 12(1 + 2λ)
        assert_relative_eq!(g.derivative(0.5), -1.0 + 24.0);
        // g''(λ) = 2 + 24
        assert_relative_eq!(g.second_derivative(0.5), 26.0);
        assert_relative_eq!(g.secure_limits(0.3), 0.3);
    }

    #[test]
    fn restriction_point_at_walks_the_line() {
        let f = Paraboloid::new();
        let g = LineRestriction::new(&f, Vector2::new(1.0, 0.0), Vector2::new(0.0, 2.0));

        assert_eq!(g.point_at(1.5), Vector2::new(1.0, 3.0));
    }

    #[test]
    fn references_forward_to_inner_function() {
        fn at_three<G: StepSizeFunction>(g: G) -> [f64; 3] {
            [g.value(3.0), g.derivative(3.0), g.second_derivative(3.0)]
        }

        let g = FnStepSize::new(|l: f64| l * l, |l: f64| 2.0 * l, |_: f64| 2.0);

        assert_eq!(at_three(&g), [9.0, 6.0, 2.0]);
    }
}
