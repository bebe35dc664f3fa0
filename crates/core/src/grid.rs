use thiserror::Error;

/// Errors that can occur when building a [`Grid`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GridError {
    /// The start, end, or step size is NaN or infinite.
    #[error("non-finite grid parameter(s)")]
    NonFinite,

    /// The step size is zero.
    #[error("step size must be non-zero")]
    ZeroStep,

    /// The step points away from the end of the interval, giving a negative
    /// step count.
    #[error("step size points away from the end of the interval ({steps} steps)")]
    WrongDirection { steps: f64 },

    /// The step count is too large to represent.
    #[error("step count overflows")]
    Overflow,

    /// The step count exceeds a caller-supplied ceiling.
    #[error("{steps} steps exceeds the limit of {limit}")]
    TooManySteps { steps: usize, limit: usize },
}

/// An evenly spaced grid `x0, x0 + h, ..., x0 + n*h`.
///
/// The step count `n` is derived from the interval and step size when the grid
/// is built. With [`Grid::new`] it is `round((xn - x0) / h)` using round half
/// away from zero, so the last grid point may differ from `xn` when the
/// interval is not a whole number of steps.
///
/// A grid does not bound `n` on its own. Callers handling untrusted input
/// should apply [`Grid::with_limit`] before integrating.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid {
    x0: f64,
    h: f64,
    steps: usize,
}

impl Grid {
    /// Creates a grid over `[x0, xn]`, rounding the step count to nearest.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is non-finite, `h` is zero, the
    /// rounded step count is negative, or the step count overflows.
    pub fn new(x0: f64, xn: f64, h: f64) -> Result<Self, GridError> {
        let ratio = Self::ratio(x0, xn, h)?;
        Self::from_count(x0, h, ratio.round())
    }

    /// Creates a grid over `[x0, xn]`, truncating the step count toward zero.
    ///
    /// The last grid point never passes `xn`.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Grid::new`].
    pub fn truncated(x0: f64, xn: f64, h: f64) -> Result<Self, GridError> {
        let ratio = Self::ratio(x0, xn, h)?;
        Self::from_count(x0, h, ratio.trunc())
    }

    /// Creates a grid with an explicit step count.
    ///
    /// # Errors
    ///
    /// Returns an error if `x0` or `h` is non-finite, `h` is zero, or
    /// `steps + 1` points cannot be counted.
    pub fn from_steps(x0: f64, h: f64, steps: usize) -> Result<Self, GridError> {
        if !x0.is_finite() || !h.is_finite() {
            return Err(GridError::NonFinite);
        }
        if h == 0.0 {
            return Err(GridError::ZeroStep);
        }
        if steps == usize::MAX {
            return Err(GridError::Overflow);
        }

        Ok(Self { x0, h, steps })
    }

    /// Rejects the grid if it has more than `limit` steps.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::TooManySteps`] when `steps() > limit`.
    pub fn with_limit(self, limit: usize) -> Result<Self, GridError> {
        if self.steps > limit {
            return Err(GridError::TooManySteps {
                steps: self.steps,
                limit,
            });
        }
        Ok(self)
    }

    /// Returns the first grid point.
    #[must_use]
    pub fn x0(&self) -> f64 {
        self.x0
    }

    /// Returns the step size.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.h
    }

    /// Returns the number of steps `n`.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the number of grid points, `n + 1`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps + 1
    }

    /// Always false, a grid holds at least its starting point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the grid points, accumulated by repeated addition of `h`.
    ///
    /// These match the x values the integrators produce bit for bit.
    #[must_use]
    pub fn points(&self) -> Vec<f64> {
        let mut xs = Vec::with_capacity(self.len());
        let mut x = self.x0;
        xs.push(x);
        for _ in 0..self.steps {
            x += self.h;
            xs.push(x);
        }
        xs
    }

    fn ratio(x0: f64, xn: f64, h: f64) -> Result<f64, GridError> {
        if !x0.is_finite() || !xn.is_finite() || !h.is_finite() {
            return Err(GridError::NonFinite);
        }
        if h == 0.0 {
            return Err(GridError::ZeroStep);
        }

        let ratio = (xn - x0) / h;
        if !ratio.is_finite() {
            return Err(GridError::Overflow);
        }
        Ok(ratio)
    }

    fn from_count(x0: f64, h: f64, count: f64) -> Result<Self, GridError> {
        if count < 0.0 {
            return Err(GridError::WrongDirection { steps: count });
        }

        // usize::MAX as f64 rounds up, so `>=` keeps the cast in range.
        #[allow(clippy::cast_precision_loss)]
        let ceiling = usize::MAX as f64;
        if count >= ceiling {
            return Err(GridError::Overflow);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = count as usize;

        Ok(Self { x0, h, steps })
    }
}
