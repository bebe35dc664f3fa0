use odekit_core::Trajectory;

use crate::fixed_step::Method;

use super::{
    Error, ErrorSummary,
    stats::{abs_diff, summary_of},
};

/// Every method's trajectory on one grid, plus the reference curve.
///
/// Trajectories are kept in the order they were supplied, which for
/// [`solve_all`](super::solve_all) is [`Method::ALL`]. All trajectories and
/// the reference have the same length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComparisonResult {
    trajectories: Vec<(Method, Trajectory)>,
    y_ref: Vec<f64>,
    uses_exact: bool,
}

/// One grid point of a comparison, for tabular display.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Row {
    /// The grid point.
    pub x: f64,

    /// Each method's estimate, in the comparison's method order.
    pub y: Vec<f64>,

    /// The reference value.
    pub reference: f64,
}

impl ComparisonResult {
    /// Builds a comparison against an exact solution sampled on the grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GridMismatch`] if the trajectories do not share one
    /// x-grid, or [`Error::LengthMismatch`] if `y_ref` differs in length from
    /// that grid.
    pub fn with_exact(
        trajectories: Vec<(Method, Trajectory)>,
        y_ref: Vec<f64>,
    ) -> Result<Self, Error> {
        Self::from_parts(trajectories, y_ref, true)
    }

    /// Builds a comparison that uses [`Method::REFERENCE`]'s own trajectory as
    /// the reference curve.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingReference`] if no trajectory for the reference
    /// method is present, or [`Error::GridMismatch`] if the trajectories do
    /// not share one x-grid.
    pub fn against_reference_method(
        trajectories: Vec<(Method, Trajectory)>,
    ) -> Result<Self, Error> {
        let y_ref = trajectories
            .iter()
            .find(|(method, _)| *method == Method::REFERENCE)
            .map(|(_, trajectory)| trajectory.y().to_vec())
            .ok_or(Error::MissingReference(Method::REFERENCE))?;

        Self::from_parts(trajectories, y_ref, false)
    }

    fn from_parts(
        trajectories: Vec<(Method, Trajectory)>,
        y_ref: Vec<f64>,
        uses_exact: bool,
    ) -> Result<Self, Error> {
        if let Some((_, first)) = trajectories.first() {
            let off_grid = trajectories.iter().find(|(_, t)| t.x() != first.x());
            if let Some((method, _)) = off_grid {
                return Err(Error::GridMismatch(*method));
            }
        }

        let mismatched = trajectories.iter().find(|(_, t)| t.len() != y_ref.len());
        if let Some((_, trajectory)) = mismatched {
            return Err(Error::LengthMismatch {
                expected: y_ref.len(),
                actual: trajectory.len(),
            });
        }

        Ok(Self {
            trajectories,
            y_ref,
            uses_exact,
        })
    }

    /// Returns the shared grid points.
    #[must_use]
    pub fn x(&self) -> &[f64] {
        self.trajectories
            .first()
            .map(|(_, trajectory)| trajectory.x())
            .unwrap_or_default()
    }

    /// Returns the reference curve.
    #[must_use]
    pub fn y_ref(&self) -> &[f64] {
        &self.y_ref
    }

    /// Returns true if the reference came from an exact solution rather than
    /// from [`Method::REFERENCE`].
    #[must_use]
    pub fn uses_exact(&self) -> bool {
        self.uses_exact
    }

    /// Returns the method acting as reference, or `None` when an exact
    /// solution was used.
    #[must_use]
    pub fn reference_method(&self) -> Option<Method> {
        (!self.uses_exact).then_some(Method::REFERENCE)
    }

    /// Returns the methods in order.
    pub fn methods(&self) -> impl Iterator<Item = Method> + '_ {
        self.trajectories.iter().map(|(method, _)| *method)
    }

    /// Iterates over `(method, trajectory)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (Method, &Trajectory)> {
        self.trajectories
            .iter()
            .map(|(method, trajectory)| (*method, trajectory))
    }

    /// Returns the trajectory for `method`.
    #[must_use]
    pub fn trajectory(&self, method: Method) -> Option<&Trajectory> {
        self.iter()
            .find(|(m, _)| *m == method)
            .map(|(_, trajectory)| trajectory)
    }

    /// Returns `|y[i] - y_ref[i]|` for `method`.
    ///
    /// This works for the reference method too, which yields all zeros.
    #[must_use]
    pub fn errors(&self, method: Method) -> Option<Vec<f64>> {
        self.trajectory(method)
            .map(|trajectory| abs_diff(trajectory.y(), &self.y_ref))
    }

    /// Returns the error summary for `method`.
    #[must_use]
    pub fn error_summary(&self, method: Method) -> Option<ErrorSummary> {
        self.errors(method).as_deref().and_then(summary_of)
    }

    /// Returns every method's error curve, in order.
    ///
    /// With `include_reference = false`, the reference method is left out when
    /// it is its own reference (its curve is identically zero).
    #[must_use]
    pub fn error_curves(&self, include_reference: bool) -> Vec<(Method, Vec<f64>)> {
        let skip = if include_reference {
            None
        } else {
            self.reference_method()
        };

        self.iter()
            .filter(|(method, _)| Some(*method) != skip)
            .map(|(method, trajectory)| (method, abs_diff(trajectory.y(), &self.y_ref)))
            .collect()
    }

    /// Returns one row per grid point: x, each method's y, and the reference.
    #[must_use]
    pub fn rows(&self) -> Vec<Row> {
        self.x()
            .iter()
            .enumerate()
            .map(|(i, &x)| Row {
                x,
                y: self.trajectories.iter().map(|(_, t)| t.y()[i]).collect(),
                reference: self.y_ref[i],
            })
            .collect()
    }
}
