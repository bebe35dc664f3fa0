//! Fixed-step solvers for initial value problems `y' = f(x, y), y(x0) = y0`.
//!
//! # Modules
//!
//! - [`fixed_step`] — the five explicit single-step schemes of the Euler family
//!   and an observable integration loop shared by all of them
//! - [`compare`] — runs one or all schemes on a common grid, builds a reference
//!   curve, and computes per-point and summary error statistics
//!
//! Everything here is synchronous and pure: each call owns its state and
//! returns a fresh result, so calls can run concurrently without locking.

pub mod compare;
pub mod fixed_step;
