use thiserror::Error;

/// Errors that can occur when constructing a [`Bracket`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    #[error("bracket endpoints must be finite")]
    NonFinite,
}

/// A finite interval `[left, right]` of step lengths with `left <= right`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Bracket {
    left: f64,
    right: f64,
}

impl Bracket {
    /// Creates a bracket, swapping the endpoints if they are reversed.
    ///
    /// # Errors
    ///
    /// Returns [`BracketError::NonFinite`] if either endpoint is NaN or infinite.
    pub fn new([a, b]: [f64; 2]) -> Result<Self, BracketError> {
        if !a.is_finite() || !b.is_finite() {
            return Err(BracketError::NonFinite);
        }

        let (left, right) = if a <= b { (a, b) } else { (b, a) };
        Ok(Self { left, right })
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.right
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns true if `x` lies within the closed interval.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        (self.left..=self.right).contains(&x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn reversed_endpoints_are_swapped() {
        let bracket = Bracket::new([1.0, -2.0]).unwrap();

        assert_eq!(bracket.as_array(), [-2.0, 1.0]);
        assert_relative_eq!(bracket.width(), 3.0);
        assert_relative_eq!(bracket.midpoint(), -0.5);
        assert!(bracket.contains(0.0));
        assert!(!bracket.contains(1.5));
    }

    #[test]
    fn non_finite_endpoints_are_rejected() {
        assert_eq!(Bracket::new([0.0, f64::NAN]), Err(BracketError::NonFinite));
        assert_eq!(
            Bracket::new([f64::NEG_INFINITY, 0.0]),
            Err(BracketError::NonFinite)
        );
    }

    #[test]
    fn degenerate_bracket_is_allowed() {
        let bracket = Bracket::new([2.0, 2.0]).unwrap();

        assert_relative_eq!(bracket.width(), 0.0);
        assert!(bracket.contains(2.0));
    }
}
