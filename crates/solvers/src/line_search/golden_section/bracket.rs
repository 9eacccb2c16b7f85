use crate::line_search::Bracket;

/// The golden ratio.
const PHI: f64 = 1.618_033_988_749_895;

/// Fraction of the bracket width at which the inner right point sits.
///
/// Each shrink keeps one interior point exactly at the other's position in
/// the new bracket because `INV_PHI² = 1 - INV_PHI`.
const INV_PHI: f64 = PHI - 1.0;

/// Golden section search bracket.
///
/// Maintains the outer interval [left, right] and two interior points
/// positioned by [`INV_PHI`].
#[derive(Debug, Clone, Copy)]
pub(super) struct GoldenBracket {
    /// Outer left bound.
    pub(super) left: f64,

    /// Outer right bound.
    pub(super) right: f64,

    /// Inner left point at `left + (1 - INV_PHI) * width`.
    pub(super) inner_left: f64,

    /// Inner right point at `left + INV_PHI * width`.
    pub(super) inner_right: f64,
}

impl GoldenBracket {
    /// Places both interior points inside a validated bracket.
    pub(super) fn new(bracket: Bracket) -> Self {
        let left = bracket.left();
        let right = bracket.right();
        let width = bracket.width();
        Self {
            left,
            right,
            inner_left: left + (1.0 - INV_PHI) * width,
            inner_right: left + INV_PHI * width,
        }
    }

    /// Returns the width of the current bounds.
    pub(super) fn width(&self) -> f64 {
        self.right - self.left
    }

    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Shrinks the bounds to `[left, inner_right]` and computes a new `inner_left`.
    ///
    /// The old `inner_left` becomes the new `inner_right`.
    pub(super) fn shrink_right(&mut self) {
        self.right = self.inner_right;
        self.inner_right = self.inner_left;
        self.inner_left = self.left + (1.0 - INV_PHI) * self.width();
    }

    /// Shrinks the bounds to `[inner_left, right]` and computes a new `inner_right`.
    ///
    /// The old `inner_right` becomes the new `inner_left`.
    pub(super) fn shrink_left(&mut self) {
        self.left = self.inner_left;
        self.inner_left = self.inner_right;
        self.inner_right = self.left + INV_PHI * self.width();
    }
}
