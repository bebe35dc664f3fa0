//! Comparison and error analysis across the Euler family.
//!
//! # Workflow
//!
//! 1. Build the grid once: `n = round((xn - x0) / h)`, half away from zero.
//! 2. Run one method ([`solve_one`]) or all of them in [`Method::ALL`] order
//!    ([`solve_all`]) on that grid.
//! 3. Choose the reference curve: the exact solution sampled on the grid when
//!    one is supplied, otherwise the trajectory of [`Method::REFERENCE`].
//! 4. Derive point-wise errors with [`compute_errors`] and reduce them with
//!    [`summarize_errors`].
//!
//! Every call is a pure function of its inputs. No state is kept between
//! calls, and nothing here bounds the step count unless the caller opts in
//! with [`Config::with_max_steps`].
//!
//! # Example
//!
//! ```rust
//! use odekit_solvers::{compare, fixed_step::Method};
//!
//! let f = |_x: f64, y: f64| y;
//! let exact = |x: f64| x.exp();
//!
//! let result = compare::solve_all(&f, 0.0, 1.0, 1.0, 0.1, Some(&exact))?;
//! let euler = result.error_summary(Method::Euler).unwrap();
//! let heun = result.error_summary(Method::ImprovedEuler).unwrap();
//!
//! assert!(heun.final_error < euler.final_error);
//! # Ok::<(), compare::Error>(())
//! ```

mod comparison;
mod config;
mod error;
mod single;
mod stats;


pub use comparison::{ComparisonResult, Row};
pub use config::Config;
pub use error::Error;
pub use single::SingleResult;
pub use stats::{ErrorSummary, LOG_SCALE_FLOOR, compute_errors, log_scale_floor, summarize_errors};

use odekit_core::{Derivative, ExactSolution};

use crate::fixed_step::{self, Method};

/// Runs one method over `[x0, xn]` with step `h` using the default config.
///
/// # Errors
///
/// Returns [`Error::InvalidGrid`] if `h` is zero, a parameter is non-finite,
/// or `h` points away from `xn`.
pub fn solve_one<F>(
    method: Method,
    f: &F,
    x0: f64,
    y0: f64,
    xn: f64,
    h: f64,
    exact: Option<&dyn ExactSolution>,
) -> Result<SingleResult, Error>
where
    F: Derivative + ?Sized,
{
    solve_one_with(method, f, x0, y0, xn, h, exact, &Config::default())
}

/// Runs one method over `[x0, xn]` with step `h`.
///
/// When `exact` is supplied it is sampled at every grid point, and the result
/// carries the point-wise errors and their summary.
///
/// # Errors
///
/// Returns [`Error::InvalidGrid`] if the grid is degenerate or exceeds the
/// configured step ceiling.
#[allow(clippy::too_many_arguments)]
#[tracing::instrument(level = "debug", skip(f, exact, config), fields(has_exact = exact.is_some()))]
pub fn solve_one_with<F>(
    method: Method,
    f: &F,
    x0: f64,
    y0: f64,
    xn: f64,
    h: f64,
    exact: Option<&dyn ExactSolution>,
    config: &Config,
) -> Result<SingleResult, Error>
where
    F: Derivative + ?Sized,
{
    let grid = config.grid(x0, xn, h)?;
    tracing::debug!(steps = grid.steps(), "grid built");

    let trajectory = fixed_step::solve_unobserved(config.scheme(method), f, &grid, y0);
    let y_exact = exact.map(|g| g.sample(trajectory.x()));

    SingleResult::new(method, trajectory, y_exact)
}

/// Runs every method over `[x0, xn]` with step `h` using the default config.
///
/// # Errors
///
/// Returns [`Error::InvalidGrid`] if `h` is zero, a parameter is non-finite,
/// or `h` points away from `xn`.
pub fn solve_all<F>(
    f: &F,
    x0: f64,
    y0: f64,
    xn: f64,
    h: f64,
    exact: Option<&dyn ExactSolution>,
) -> Result<ComparisonResult, Error>
where
    F: Derivative + ?Sized,
{
    solve_all_with(f, x0, y0, xn, h, exact, &Config::default())
}

/// Runs every method over `[x0, xn]` with step `h` on a single shared grid.
///
/// The reference curve is `exact` sampled on the grid when supplied, otherwise
/// the trajectory of [`Method::REFERENCE`].
///
/// # Errors
///
/// Returns [`Error::InvalidGrid`] if the grid is degenerate or exceeds the
/// configured step ceiling.
#[tracing::instrument(level = "debug", skip(f, exact, config), fields(has_exact = exact.is_some()))]
pub fn solve_all_with<F>(
    f: &F,
    x0: f64,
    y0: f64,
    xn: f64,
    h: f64,
    exact: Option<&dyn ExactSolution>,
    config: &Config,
) -> Result<ComparisonResult, Error>
where
    F: Derivative + ?Sized,
{
    let grid = config.grid(x0, xn, h)?;
    tracing::debug!(steps = grid.steps(), "grid built");

    let trajectories: Vec<_> = Method::ALL
        .into_iter()
        .map(|method| {
            let trajectory = fixed_step::solve_unobserved(config.scheme(method), f, &grid, y0);
            (method, trajectory)
        })
        .collect();

    match exact {
        Some(g) => {
            let y_ref = g.sample(&grid.points());
            ComparisonResult::with_exact(trajectories, y_ref)
        }
        None => ComparisonResult::against_reference_method(trajectories),
    }
}
