//! Core traits and types for odekit.
//!
//! This crate defines the shared abstractions that the integrators and the
//! comparison engine build on:
//!
//! - [`Derivative`] — the right-hand side `f(x, y)` of `y' = f(x, y)`
//! - [`ExactSolution`] — an optional closed-form solution `g(x)`
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`Grid`] — a validated, evenly spaced set of x values and its step count
//! - [`Trajectory`] — the index-aligned `(x, y)` sequences a scheme produces

mod callable;
mod grid;
mod observer;
mod trajectory;

pub use callable::{Derivative, ExactSolution};
pub use grid::{Grid, GridError};
pub use observer::Observer;
pub use trajectory::{Trajectory, TrajectoryError};
