use nalgebra::{SMatrix, SVector};

use crate::StepSizeFunction;

/// A point in the `N`-dimensional search space.
pub type Point<const N: usize> = SVector<f64, N>;

/// The matrix of second partial derivatives at a point.
pub type Hessian<const N: usize> = SMatrix<f64, N, N>;

/// Defines a differentiable function to be minimized.
///
/// An objective exposes its value, gradient, and Hessian at any point, and
/// can reproject itself onto a line through a point as a [`StepSizeFunction`].
/// It also carries the reference minima used to judge whether a run found a
/// known minimum, and the domain a visualization layer should display.
///
/// Objectives are immutable once constructed; solvers only borrow them.
///
/// The const generic `N` is the number of variables.
pub trait ObjectiveFunction<const N: usize> {
    /// The one-dimensional function produced by [`Self::step_size_function`].
    type StepSize<'a>: StepSizeFunction
    where
        Self: 'a;

    /// Evaluates the objective at `x`.
    fn value(&self, x: &Point<N>) -> f64;

    /// Returns the gradient at `x`.
    fn gradient(&self, x: &Point<N>) -> Point<N>;

    /// Returns the Hessian at `x`.
    ///
    /// Only second-order methods call this.
    fn hessian(&self, x: &Point<N>) -> Hessian<N>;

    /// Returns `g(λ) = f(x + λ·direction)` together with its derivatives in `λ`.
    fn step_size_function<'a>(
        &'a self,
        x: &Point<N>,
        direction: &Point<N>,
    ) -> Self::StepSize<'a>;

    /// Returns the known minimizers and their objective values.
    fn minima(&self) -> &Minima<N>;

    /// Returns the display domain.
    fn domain(&self) -> &Domain<N>;
}

/// Reference minimizers of an objective together with their values.
///
/// Values are computed once, when the minima are attached to an objective.
#[derive(Debug, Clone, PartialEq)]
pub struct Minima<const N: usize> {
    points: Vec<Point<N>>,
    values: Vec<f64>,
}

impl<const N: usize> Minima<N> {
    /// Evaluates `value` at each point and stores the results alongside.
    #[must_use]
    pub fn evaluate(points: Vec<Point<N>>, value: impl Fn(&Point<N>) -> f64) -> Self {
        let values = points.iter().map(value).collect();
        Self { points, values }
    }

    /// Returns the reference minimizers, in the order they were given.
    #[must_use]
    pub fn points(&self) -> &[Point<N>] {
        &self.points
    }

    /// Returns the objective value at each reference minimizer.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of reference minima.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if no reference minima are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Display ranges for each axis of an objective.
///
/// Ranges are kept exactly as given. A reversed range (`[6.0, -6.0]`) is how
/// the display layer flips an axis, so it is not normalized here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain<const N: usize> {
    ranges: [[f64; 2]; N],
}

impl<const N: usize> Domain<N> {
    /// Creates a domain from one `[start, end]` range per axis.
    #[must_use]
    pub fn new(ranges: [[f64; 2]; N]) -> Self {
        Self { ranges }
    }

    /// Returns the `[start, end]` range of an axis.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= N`.
    #[must_use]
    pub fn range(&self, axis: usize) -> [f64; 2] {
        self.ranges[axis]
    }

    /// Returns all axis ranges.
    #[must_use]
    pub fn ranges(&self) -> &[[f64; 2]; N] {
        &self.ranges
    }

    /// Returns true if every coordinate of `x` lies within its axis range.
    #[must_use]
    pub fn contains(&self, x: &Point<N>) -> bool {
        self.ranges.iter().zip(x.iter()).all(|([start, end], &xi)| {
            let (low, high) = if start <= end {
                (*start, *end)
            } else {
                (*end, *start)
            };
            (low..=high).contains(&xi)
        })
    }
}
