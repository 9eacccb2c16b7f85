//! Named algorithm parameters and their display metadata.
//!
//! Every solver declares the [`Param`]s it reads. A [`ParamSpec`] carries the
//! range, step, and default a control needs to present the parameter, plus a
//! [`Scale`] saying how the displayed value maps to the value the algorithm
//! uses. A [`ParamSet`] holds the current settings for one solver, keeping the
//! displayed and effective values side by side.
//!
//! Solvers never read a `ParamSet` directly. It is turned into a validated
//! config first, through `Config::from_params` or `Kind::configure`.

use std::{collections::BTreeMap, fmt, str::FromStr};

use thiserror::Error;

/// Names of the parameters the solvers understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum Param {
    /// Left end of the initial bracket.
    A,
    /// Right end of the initial bracket.
    B,
    /// Initial or fixed step length.
    Lambda,
    /// Stopping tolerance (bracket width, slope, or gradient norm).
    Tolerance,
    /// Probe offset for dichotomous and Fibonacci searches.
    Epsilon,
    /// Iteration cap.
    MaxIterations,
    /// Number of samples per round of uniform search.
    IntervalCount,
    /// Factor applied to the sample count after each round of uniform search.
    IntervalMultiplier,
    /// Sufficient-decrease coefficient for Armijo search.
    Alpha,
    /// Step contraction for Armijo search, or momentum for heavy ball.
    Beta,
}

impl Param {
    /// All parameters, in declaration order.
    pub const ALL: [Param; 10] = [
        Param::A,
        Param::B,
        Param::Lambda,
        Param::Tolerance,
        Param::Epsilon,
        Param::MaxIterations,
        Param::IntervalCount,
        Param::IntervalMultiplier,
        Param::Alpha,
        Param::Beta,
    ];

    /// Returns the name used by display layers.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Param::A => "a",
            Param::B => "b",
            Param::Lambda => "lambda",
            Param::Tolerance => "tolerance",
            Param::Epsilon => "epsilon",
            Param::MaxIterations => "maxIterations",
            Param::IntervalCount => "intervalCount",
            Param::IntervalMultiplier => "intervalMultiplier",
            Param::Alpha => "alpha",
            Param::Beta => "beta",
        }
    }

    /// Returns the shared default metadata for this parameter.
    ///
    /// Solvers use these unless they declare an override; heavy ball is the
    /// only one that does, for `beta`.
    #[must_use]
    pub fn default_spec(self) -> ParamSpec {
        match self {
            Param::A => ParamSpec::linear(-10.0, 10.0, 0.1, -10.0),
            Param::B => ParamSpec::linear(-10.0, 10.0, 0.1, 10.0),
            Param::Lambda => ParamSpec::linear(-10.0, 10.0, 0.005, 1.0),
            Param::Tolerance => ParamSpec::exponent(-10.0, 0.0, 1.0, -6.0),
            Param::Epsilon => ParamSpec::exponent(-10.0, 0.0, 1.0, -5.0),
            Param::MaxIterations => ParamSpec::linear(10.0, 2000.0, 10.0, 100.0),
            Param::IntervalCount => ParamSpec::linear(1.0, 100.0, 1.0, 20.0),
            Param::IntervalMultiplier => ParamSpec::linear(0.0, 10.0, 0.1, 1.0),
            Param::Alpha => ParamSpec::linear(0.0, 1.0, 0.01, 0.01),
            Param::Beta => ParamSpec::linear(0.5, 1.0, 0.01, 0.7),
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Param {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Param::ALL
            .into_iter()
            .find(|param| param.name() == s)
            .ok_or_else(|| ParamError::UnknownName(s.to_owned()))
    }
}

/// How a displayed value maps to the value an algorithm uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum Scale {
    /// The displayed value is used as is.
    Linear,

    /// The displayed value is a power of ten: the algorithm uses `10^value`.
    Exponent,
}

/// Display metadata for one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct ParamSpec {
    /// Smallest displayed value.
    pub minimum: f64,

    /// Largest displayed value.
    pub maximum: f64,

    /// Increment between displayed values.
    pub step: f64,

    /// Displayed value used when nothing else is set.
    pub default: f64,

    /// Mapping from displayed to effective value.
    pub scale: Scale,
}

impl ParamSpec {
    /// Creates metadata for a parameter used as displayed.
    #[must_use]
    pub const fn linear(minimum: f64, maximum: f64, step: f64, default: f64) -> Self {
        Self {
            minimum,
            maximum,
            step,
            default,
            scale: Scale::Linear,
        }
    }

    /// Creates metadata for a parameter displayed as a power-of-ten exponent.
    #[must_use]
    pub const fn exponent(minimum: f64, maximum: f64, step: f64, default: f64) -> Self {
        Self {
            minimum,
            maximum,
            step,
            default,
            scale: Scale::Exponent,
        }
    }

    /// Returns the value an algorithm should use for a displayed value.
    #[must_use]
    pub fn effective(&self, displayed: f64) -> f64 {
        match self.scale {
            Scale::Linear => displayed,
            Scale::Exponent => 10_f64.powf(displayed),
        }
    }

    /// Returns true if `displayed` lies within `[minimum, maximum]`.
    #[must_use]
    pub fn contains(&self, displayed: f64) -> bool {
        (self.minimum..=self.maximum).contains(&displayed)
    }
}

/// The current value of a parameter in both representations.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Setting {
    /// The value a control shows (an exponent for [`Scale::Exponent`]).
    pub displayed: f64,

    /// The value an algorithm uses.
    pub effective: f64,
}

/// Errors that can occur when reading or updating a [`ParamSet`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamError {
    #[error("unknown parameter name `{0}`")]
    UnknownName(String),

    #[error("parameter `{0}` is not declared by this solver")]
    Undeclared(Param),

    #[error("parameter `{param}` must be finite, got {value}")]
    NotFinite { param: Param, value: f64 },

    #[error("parameter `{param}` = {value} is outside [{minimum}, {maximum}]")]
    OutOfRange {
        param: Param,
        value: f64,
        minimum: f64,
        maximum: f64,
    },
}

/// The parameters one solver declares, with their current settings.
///
/// A set always holds exactly the declared parameters. It is a plain value:
/// [`with`](Self::with) returns an updated copy rather than mutating shared
/// state, so one set can be handed to any number of runs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct ParamSet {
    specs: BTreeMap<Param, ParamSpec>,
    settings: BTreeMap<Param, Setting>,
}

impl ParamSet {
    /// Creates a set from declared parameters, each at its default.
    #[must_use]
    pub fn from_specs(specs: impl IntoIterator<Item = (Param, ParamSpec)>) -> Self {
        let specs: BTreeMap<_, _> = specs.into_iter().collect();
        let settings = specs
            .iter()
            .map(|(&param, spec)| {
                let setting = Setting {
                    displayed: spec.default,
                    effective: spec.effective(spec.default),
                };
                (param, setting)
            })
            .collect();

        Self { specs, settings }
    }

    /// Returns a copy with `param` set to a new displayed value.
    ///
    /// # Errors
    ///
    /// Returns an error if `param` is not declared, or if `displayed` is
    /// non-finite or outside the declared range.
    pub fn with(mut self, param: Param, displayed: f64) -> Result<Self, ParamError> {
        let spec = self.spec(param).ok_or(ParamError::Undeclared(param))?;

        if !displayed.is_finite() {
            return Err(ParamError::NotFinite {
                param,
                value: displayed,
            });
        }
        if !spec.contains(displayed) {
            return Err(ParamError::OutOfRange {
                param,
                value: displayed,
                minimum: spec.minimum,
                maximum: spec.maximum,
            });
        }

        let setting = Setting {
            displayed,
            effective: spec.effective(displayed),
        };
        self.settings.insert(param, setting);
        Ok(self)
    }

    /// Like [`with`](Self::with), but looks the parameter up by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is unknown, or for any reason
    /// [`with`](Self::with) fails.
    pub fn with_named(self, name: &str, displayed: f64) -> Result<Self, ParamError> {
        let param = name.parse()?;
        self.with(param, displayed)
    }

    /// Returns the effective value of `param`.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::Undeclared`] if the solver did not declare `param`.
    pub fn get(&self, param: Param) -> Result<f64, ParamError> {
        self.setting(param)
            .map(|setting| setting.effective)
            .ok_or(ParamError::Undeclared(param))
    }

    /// Returns both representations of `param`, if declared.
    #[must_use]
    pub fn setting(&self, param: Param) -> Option<Setting> {
        self.settings.get(&param).copied()
    }

    /// Returns the display metadata of `param`, if declared.
    #[must_use]
    pub fn spec(&self, param: Param) -> Option<ParamSpec> {
        self.specs.get(&param).copied()
    }

    /// Returns true if `param` is declared.
    #[must_use]
    pub fn declares(&self, param: Param) -> bool {
        self.specs.contains_key(&param)
    }

    /// Iterates over the declared parameters and their settings.
    pub fn iter(&self) -> impl Iterator<Item = (Param, Setting)> + '_ {
        self.settings.iter().map(|(&param, &setting)| (param, setting))
    }
}

/// Looks up the shared default metadata for each parameter.
pub(crate) fn declare(params: &[Param]) -> Vec<(Param, ParamSpec)> {
    params
        .iter()
        .map(|&param| (param, param.default_spec()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn bracketing() -> ParamSet {
        ParamSet::from_specs(declare(&[
            Param::A,
            Param::B,
            Param::Tolerance,
            Param::MaxIterations,
        ]))
    }

    #[test]
    fn defaults_resolve_exponents() {
        let params = bracketing();

        let tolerance = params.setting(Param::Tolerance).unwrap();
        assert_relative_eq!(tolerance.displayed, -6.0);
        assert_relative_eq!(tolerance.effective, 1e-6, max_relative = 1e-12);

        assert_relative_eq!(params.get(Param::A).unwrap(), -10.0);
        assert_relative_eq!(params.get(Param::MaxIterations).unwrap(), 100.0);
    }

    #[test]
    fn holds_exactly_the_declared_names() {
        let params = bracketing();
        let names: Vec<_> = params.iter().map(|(param, _)| param).collect();

        assert_eq!(
            names,
            [Param::A, Param::B, Param::Tolerance, Param::MaxIterations]
        );
        assert!(!params.declares(Param::Epsilon));
        assert_eq!(
            params.get(Param::Epsilon),
            Err(ParamError::Undeclared(Param::Epsilon))
        );
    }

    #[test]
    fn with_returns_updated_copy() {
        let original = bracketing();
        let updated = original.clone().with(Param::Tolerance, -3.0).unwrap();

        assert_relative_eq!(original.get(Param::Tolerance).unwrap(), 1e-6, max_relative = 1e-12);
        assert_relative_eq!(updated.get(Param::Tolerance).unwrap(), 1e-3, max_relative = 1e-12);
    }

    #[test]
    fn with_rejects_bad_values() {
        let params = bracketing();

        assert!(matches!(
            params.clone().with(Param::A, 11.0),
            Err(ParamError::OutOfRange { param: Param::A, .. })
        ));
        assert!(matches!(
            params.clone().with(Param::B, f64::NAN),
            Err(ParamError::NotFinite { .. })
        ));
        assert_eq!(
            params.with(Param::Alpha, 0.5),
            Err(ParamError::Undeclared(Param::Alpha))
        );
    }

    #[test]
    fn names_round_trip() {
        for param in Param::ALL {
            assert_eq!(param.name().parse::<Param>(), Ok(param));
        }
        assert_eq!(
            "gamma".parse::<Param>(),
            Err(ParamError::UnknownName("gamma".into()))
        );
    }

    #[test]
    fn with_named_uses_display_names() {
        let params = bracketing().with_named("maxIterations", 250.0).unwrap();

        assert_relative_eq!(params.get(Param::MaxIterations).unwrap(), 250.0);
    }
}
