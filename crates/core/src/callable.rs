/// The right-hand side of a first-order ODE `y' = f(x, y)`.
///
/// Implementations are treated as opaque and possibly partial: a derivative
/// may return `NaN` or an infinity where it is undefined (for example the log
/// of a negative number). Solvers never validate or clamp the returned value,
/// they carry it forward into the trajectory.
///
/// Any `Fn(f64, f64) -> f64` closure is a `Derivative`.
///
/// # Example
///
/// ```rust
/// use odekit_core::Derivative;
///
/// let f = |x: f64, y: f64| y - x * x + 1.0;
/// assert_eq!(f.eval(0.0, 0.5), 1.5);
/// ```
pub trait Derivative {
    /// Evaluates `f(x, y)`.
    fn eval(&self, x: f64, y: f64) -> f64;
}

impl<F> Derivative for F
where
    F: Fn(f64, f64) -> f64,
{
    fn eval(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

/// A known solution `y = g(x)` used as the reference curve for error analysis.
///
/// Like [`Derivative`], it may be partial and return non-finite values.
/// Any `Fn(f64) -> f64` closure is an `ExactSolution`.
pub trait ExactSolution {
    /// Evaluates `g(x)`.
    fn eval(&self, x: f64) -> f64;

    /// Samples the solution at every x in `xs`.
    fn sample(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.eval(x)).collect()
    }
}

impl<F> ExactSolution for F
where
    F: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}
