//! Core traits and types for the Descent optimization engine.
//!
//! This crate defines the contracts that line searches and descent methods
//! build on:
//!
//! - [`ObjectiveFunction`]: a differentiable function of `N` variables with
//!   known reference minima
//! - [`StepSizeFunction`]: the one-dimensional restriction `g(λ) = f(x + λ·d)`
//!   handed to a line search
//! - [`LineRestriction`]: a [`StepSizeFunction`] derived from any objective's
//!   value, gradient, and Hessian
//! - [`FnStepSize`]: a [`StepSizeFunction`] built from closures
//!
//! Points and Hessians are `nalgebra` statically sized types; the dimension is
//! the const generic `N` throughout.

mod objective;
mod step_size;

pub use objective::{Domain, Hessian, Minima, ObjectiveFunction, Point};
pub use step_size::{FnStepSize, LineRestriction, StepSizeFunction};

pub use nalgebra;
