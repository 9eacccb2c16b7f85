use thiserror::Error;

use crate::{line_search::BracketError, params::ParamError};

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error(transparent)]
    Param(#[from] ParamError),

    #[error("invalid bracket: {0}")]
    Bracket(#[from] BracketError),

    #[error("tolerance must be finite and non-negative")]
    Tolerance,

    #[error("epsilon must be finite and non-negative")]
    Epsilon,

    #[error("lambda must be finite")]
    Lambda,

    #[error("max iterations must be a finite non-negative whole number")]
    MaxIters,

    #[error("interval count must be at least one")]
    IntervalCount,

    #[error("interval multiplier must be finite and non-negative")]
    IntervalMultiplier,

    #[error("alpha must lie in [0, 1]")]
    Alpha,

    #[error("beta must lie in (0, 1]")]
    Contraction,

    #[error("momentum must be finite and non-negative")]
    Momentum,
}

pub(crate) fn tolerance(value: f64) -> Result<f64, ConfigError> {
    non_negative(value).ok_or(ConfigError::Tolerance)
}

pub(crate) fn epsilon(value: f64) -> Result<f64, ConfigError> {
    non_negative(value).ok_or(ConfigError::Epsilon)
}

pub(crate) fn lambda(value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::Lambda)
    }
}

/// Converts a parameter value to an iteration cap.
pub(crate) fn max_iters(value: f64) -> Result<usize, ConfigError> {
    whole(value).ok_or(ConfigError::MaxIters)
}

/// Converts a parameter value to a sample count of at least one.
pub(crate) fn interval_count(value: f64) -> Result<usize, ConfigError> {
    whole(value)
        .filter(|&count| count >= 1)
        .ok_or(ConfigError::IntervalCount)
}

fn non_negative(value: f64) -> Option<f64> {
    (value.is_finite() && value >= 0.0).then_some(value)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole(value: f64) -> Option<usize> {
    (value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= usize::MAX as f64)
        .then(|| value as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_must_be_whole() {
        assert_eq!(max_iters(200.0), Ok(200));
        assert_eq!(max_iters(0.0), Ok(0));
        assert_eq!(max_iters(2.5), Err(ConfigError::MaxIters));
        assert_eq!(max_iters(-10.0), Err(ConfigError::MaxIters));
        assert_eq!(max_iters(f64::INFINITY), Err(ConfigError::MaxIters));
        assert_eq!(interval_count(0.0), Err(ConfigError::IntervalCount));
        assert_eq!(interval_count(20.0), Ok(20));
    }

    #[test]
    fn tolerances_must_be_non_negative() {
        assert_eq!(tolerance(0.0), Ok(0.0));
        assert_eq!(tolerance(-1e-6), Err(ConfigError::Tolerance));
        assert_eq!(epsilon(f64::NAN), Err(ConfigError::Epsilon));
        assert_eq!(lambda(f64::NEG_INFINITY), Err(ConfigError::Lambda));
    }
}
