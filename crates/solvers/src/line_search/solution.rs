use crate::Performance;

/// Indicates how a line search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Met the stopping criterion of the method.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Could not refine further before meeting the tolerance.
    ///
    /// Uniform search reports this when its sample count drops below one.
    Stalled,

    /// Hit a zero or non-finite curvature, or produced a non-finite step.
    ///
    /// The reported `x` is the last finite step length.
    IllConditioned,
}

/// One recorded state of a line search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    /// A candidate step length.
    Point(f64),

    /// The current `[left, right]` bracket.
    Bracket([f64; 2]),
}

/// The result of a line search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Final status.
    pub status: Status,

    /// Chosen step length.
    pub x: f64,

    /// Value of the step-size function at `x`.
    pub objective: f64,

    /// Recorded states, starting with the initial point or bracket.
    pub steps: Vec<Step>,

    /// Iterations and elapsed time.
    pub performance: Performance,
}

impl Solution {
    /// Returns the number of loop bodies executed.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.performance.iterations
    }
}
