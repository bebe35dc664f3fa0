use odekit_core::Trajectory;

use crate::fixed_step::Method;

use super::{
    Error, ErrorSummary,
    stats::{compute_errors, summary_of},
};

/// The outcome of running a single method.
///
/// When an exact solution was supplied, the result carries it sampled on the
/// trajectory's grid along with the point-wise errors and their summary.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SingleResult {
    method: Method,
    trajectory: Trajectory,
    y_exact: Option<Vec<f64>>,
    errors: Option<Vec<f64>>,
    summary: Option<ErrorSummary>,
}

impl SingleResult {
    /// Builds a result, checking that `y_exact` lines up with the trajectory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if `y_exact` has a different length
    /// than the trajectory.
    pub fn new(
        method: Method,
        trajectory: Trajectory,
        y_exact: Option<Vec<f64>>,
    ) -> Result<Self, Error> {
        let errors = y_exact
            .as_deref()
            .map(|exact| compute_errors(trajectory.y(), exact))
            .transpose()?;
        let summary = errors.as_deref().and_then(summary_of);

        Ok(Self {
            method,
            trajectory,
            y_exact,
            errors,
            summary,
        })
    }

    /// Returns the method that produced the trajectory.
    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    /// Returns the trajectory.
    #[must_use]
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Returns the exact solution sampled on the grid, if one was supplied.
    #[must_use]
    pub fn y_exact(&self) -> Option<&[f64]> {
        self.y_exact.as_deref()
    }

    /// Returns true if an exact solution was supplied.
    #[must_use]
    pub fn has_exact(&self) -> bool {
        self.y_exact.is_some()
    }

    /// Returns `|y[i] - y_exact[i]|`, if an exact solution was supplied.
    #[must_use]
    pub fn errors(&self) -> Option<&[f64]> {
        self.errors.as_deref()
    }

    /// Returns the error summary, if an exact solution was supplied.
    #[must_use]
    pub fn error_summary(&self) -> Option<ErrorSummary> {
        self.summary
    }

    /// Consumes the result, returning the trajectory.
    #[must_use]
    pub fn into_trajectory(self) -> Trajectory {
        self.trajectory
    }
}
