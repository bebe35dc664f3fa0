use thiserror::Error;

/// Errors that can occur when building a [`Trajectory`] from raw sequences.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TrajectoryError {
    /// The x and y sequences have different lengths.
    #[error("x has {x} points but y has {y}")]
    LengthMismatch { x: usize, y: usize },

    /// The sequences are empty; a trajectory always holds its initial point.
    #[error("trajectory has no points")]
    Empty,
}

/// A discretized solution: index-aligned grid points and solution estimates.
///
/// `x()[i]` is a grid point and `y()[i]` the scheme's estimate of the solution
/// there. Both sequences always have the same, non-zero length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Trajectory {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Trajectory {
    /// Creates a trajectory from parallel sequences.
    ///
    /// # Errors
    ///
    /// Returns an error if the sequences are empty or differ in length.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, TrajectoryError> {
        if x.len() != y.len() {
            return Err(TrajectoryError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        if x.is_empty() {
            return Err(TrajectoryError::Empty);
        }
        Ok(Self { x, y })
    }

    /// Starts a trajectory at the initial condition, reserving room for
    /// `steps` more points.
    #[must_use]
    pub fn starting_at(x0: f64, y0: f64, steps: usize) -> Self {
        let capacity = steps.saturating_add(1);
        let mut x = Vec::with_capacity(capacity);
        let mut y = Vec::with_capacity(capacity);
        x.push(x0);
        y.push(y0);
        Self { x, y }
    }

    /// Appends a point.
    pub fn push(&mut self, x: f64, y: f64) {
        self.x.push(x);
        self.y.push(y);
    }

    /// Returns the grid points.
    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Returns the solution estimates.
    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false, a trajectory holds at least its initial point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the number of steps taken, `len() - 1`.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.len() - 1
    }

    /// Returns the initial point `(x0, y0)`.
    #[must_use]
    pub fn first(&self) -> (f64, f64) {
        (self.x[0], self.y[0])
    }

    /// Returns the final point.
    #[must_use]
    pub fn last(&self) -> (f64, f64) {
        let i = self.len() - 1;
        (self.x[i], self.y[i])
    }

    /// Iterates over `(x, y)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Returns the index of the first non-finite y value, if any.
    #[must_use]
    pub fn first_non_finite(&self) -> Option<usize> {
        self.y.iter().position(|v| !v.is_finite())
    }

    /// Consumes the trajectory, returning the `(x, y)` sequences.
    #[must_use]
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.x, self.y)
    }
}
