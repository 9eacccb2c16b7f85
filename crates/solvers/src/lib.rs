//! Line searches and descent methods for the Descent optimization engine.
//!
//! Two families of solvers live here:
//!
//! - [`line_search`]: one-dimensional searches that choose a step length `λ`
//!   for a [`StepSizeFunction`](descent_core::StepSizeFunction)
//! - [`descent`]: multivariate methods that pick a direction at each point
//!   and delegate the step length to a line search
//!
//! Every solver is configured through an immutable, validated `Config`. A
//! config can be built directly or from a [`params::ParamSet`], which carries
//! the display metadata a user interface needs for each parameter.
//!
//! Solvers never return errors once configured. Non-convergence, ill-posed
//! steps, and divergence are reported through each solution's `status`, and
//! [`is_known_minimum`] tells whether a final objective value matches one of
//! the objective's reference minima.
//!
//! # Example
//!
//! ```
//! use descent_core::nalgebra::Vector2;
//! use descent_functions::Himmelblau;
//! use descent_solvers::{descent, line_search};
//!
//! let method = descent::Method::GradientDescent(descent::Config::new(1e-6, 200)?);
//! let line_search = line_search::LineSearch::GoldenSection(
//!     line_search::golden_section::Config::new([0.0, 1.0], 1e-8, 200)?,
//! );
//!
//! let solution = method.run(&Himmelblau::new(), Vector2::new(3.5, -1.8), &line_search);
//! assert!(solution.found_minimum);
//! # Ok::<(), descent_solvers::ConfigError>(())
//! ```

pub mod descent;
pub mod line_search;
pub mod params;

mod config;
mod convergence;
mod performance;

pub use config::ConfigError;
pub use convergence::is_known_minimum;
pub use performance::Performance;
