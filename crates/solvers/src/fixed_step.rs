//! Explicit fixed-step schemes of the Euler family.
//!
//! Every scheme shares one skeleton. Starting from `(x0, y0)`, each step
//! computes `y[i+1]` from `y[i]` and one or more stage evaluations of `f`, then
//! advances `x[i+1] = x[i] + h` by repeated addition:
//!
//! ```text
//! Euler                    y + h f(x, y)
//! Improved Euler           y + h/2 (k1 + f(x + h, y + h k1))
//! Modified Euler           y + h f(x + h/2, y + h/2 k1)
//! Improved Modified Euler  y + h f(x + h/2, y + h/2 f(x, y + h k1))
//! AIME                     y + h f(x + h/2, y + h/2 k1)
//! ```
//!
//! where `k1 = f(x, y)`. Stage arguments are evaluated exactly as written,
//! never simplified, so results depend on the precise stage values. See
//! [`AimeForm`] for the nested AIME variant.
//!
//! Non-finite values returned by `f` are carried forward unchanged.
//!
//! # Observer Events
//!
//! [`solve`] emits an [`Event`] for the initial condition (step 0) and after
//! every step. Observers can return [`Action::StopEarly`] to end integration
//! and keep the trajectory computed so far.
//!
//! # Example
//!
//! ```rust
//! use odekit_solvers::fixed_step;
//!
//! let f = |x: f64, y: f64| x + y;
//! let trajectory = fixed_step::euler(&f, 0.0, 1.0, 0.5, 2);
//!
//! assert_eq!(trajectory.x(), &[0.0, 0.5, 1.0]);
//! assert_eq!(trajectory.y(), &[1.0, 1.5, 2.5]);
//! ```

mod action;
mod event;
mod method;
mod solution;


pub use action::Action;
pub use event::Event;
pub use method::{AimeForm, Method, ParseMethodError, Scheme};
pub use solution::{Solution, Status};

use odekit_core::{Derivative, Grid, Observer, Trajectory};

/// Integrates `f` over a validated grid with one scheme.
///
/// # Algorithm
///
/// 1. Emit the initial condition as step 0.
/// 2. For each of the grid's `n` steps:
///    - Compute the next y with the scheme's update rule.
///    - Advance x by the step size.
///    - Record the point and emit an [`Event`].
///    - If the observer returns [`Action::StopEarly`], terminate.
/// 3. Return the solution with the full trajectory.
pub fn solve<F, Obs>(
    scheme: impl Into<Scheme>,
    f: &F,
    grid: &Grid,
    y0: f64,
    observer: Obs,
) -> Solution
where
    F: Derivative + ?Sized,
    Obs: Observer<Event, Action>,
{
    march(
        scheme.into(),
        f,
        grid.x0(),
        y0,
        grid.step_size(),
        grid.steps(),
        observer,
    )
}

/// Integrates `f` over a validated grid without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
pub fn solve_unobserved<F>(
    scheme: impl Into<Scheme>,
    f: &F,
    grid: &Grid,
    y0: f64,
) -> Trajectory
where
    F: Derivative + ?Sized,
{
    solve(scheme, f, grid, y0, ()).trajectory
}

/// Integrates `f` for `n` steps of size `h` starting at `(x0, y0)`.
///
/// The caller must pass a non-zero `h`. With `n = 0` the result is the single
/// point `([x0], [y0])`.
pub fn integrate<F>(
    scheme: impl Into<Scheme>,
    f: &F,
    x0: f64,
    y0: f64,
    h: f64,
    n: usize,
) -> Trajectory
where
    F: Derivative + ?Sized,
{
    march(scheme.into(), f, x0, y0, h, n, ()).trajectory
}

/// Forward Euler, one stage per step.
pub fn euler<F>(f: &F, x0: f64, y0: f64, h: f64, n: usize) -> Trajectory
where
    F: Derivative + ?Sized,
{
    integrate(Method::Euler, f, x0, y0, h, n)
}

/// Improved Euler (Heun's method), two stages per step.
pub fn improved_euler<F>(f: &F, x0: f64, y0: f64, h: f64, n: usize) -> Trajectory
where
    F: Derivative + ?Sized,
{
    integrate(Method::ImprovedEuler, f, x0, y0, h, n)
}

/// Modified Euler (explicit midpoint), two stages per step.
pub fn modified_euler<F>(f: &F, x0: f64, y0: f64, h: f64, n: usize) -> Trajectory
where
    F: Derivative + ?Sized,
{
    integrate(Method::ModifiedEuler, f, x0, y0, h, n)
}

/// Improved Modified Euler, three stages per step with a nested evaluation.
pub fn improved_modified_euler<F>(f: &F, x0: f64, y0: f64, h: f64, n: usize) -> Trajectory
where
    F: Derivative + ?Sized,
{
    integrate(Method::ImprovedModifiedEuler, f, x0, y0, h, n)
}

/// AIME in its two-stage midpoint form.
pub fn aime<F>(f: &F, x0: f64, y0: f64, h: f64, n: usize) -> Trajectory
where
    F: Derivative + ?Sized,
{
    integrate(Method::Aime, f, x0, y0, h, n)
}

fn march<F, Obs>(
    scheme: Scheme,
    f: &F,
    x0: f64,
    y0: f64,
    h: f64,
    n: usize,
    mut observer: Obs,
) -> Solution
where
    F: Derivative + ?Sized,
    Obs: Observer<Event, Action>,
{
    let _span = tracing::debug_span!("march", method = %scheme.method(), steps = n, h).entered();

    let mut trajectory = Trajectory::starting_at(x0, y0, n);

    let event = Event {
        step: 0,
        x: x0,
        y: y0,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        tracing::debug!(step = 0, "stopped by observer");
        return Solution {
            status: Status::StoppedByObserver,
            trajectory,
            steps: 0,
        };
    }

    let (mut x, mut y) = (x0, y0);

    for step in 1..=n {
        y = scheme.advance(f, x, y, h);
        x += h;
        trajectory.push(x, y);

        let event = Event { step, x, y };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            tracing::debug!(step, "stopped by observer");
            warn_non_finite(scheme, &trajectory);
            return Solution {
                status: Status::StoppedByObserver,
                trajectory,
                steps: step,
            };
        }
    }

    warn_non_finite(scheme, &trajectory);

    Solution {
        status: Status::Complete,
        trajectory,
        steps: n,
    }
}

fn warn_non_finite(scheme: Scheme, trajectory: &Trajectory) {
    if let Some(index) = trajectory.first_non_finite() {
        tracing::warn!(
            method = %scheme.method(),
            index,
            x = trajectory.x()[index],
            "trajectory contains non-finite values"
        );
    }
}
