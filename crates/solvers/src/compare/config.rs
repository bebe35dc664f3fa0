use odekit_core::{Grid, GridError};

use crate::fixed_step::{AimeForm, Method, Scheme};

/// Configuration for the comparison engine.
///
/// The default matches the reference behavior: AIME in its midpoint form and
/// no ceiling on the step count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    aime: AimeForm,
    max_steps: Option<usize>,
}

impl Config {
    /// Creates a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects which AIME update rule to run.
    #[must_use]
    pub fn with_aime_form(self, aime: AimeForm) -> Self {
        Self { aime, ..self }
    }

    /// Rejects grids with more than `limit` steps.
    ///
    /// Use this when `h` or the interval come from untrusted input.
    #[must_use]
    pub fn with_max_steps(self, limit: usize) -> Self {
        Self {
            max_steps: Some(limit),
            ..self
        }
    }

    /// Returns the AIME form.
    #[must_use]
    pub fn aime_form(&self) -> AimeForm {
        self.aime
    }

    /// Returns the step ceiling, if any.
    #[must_use]
    pub fn max_steps(&self) -> Option<usize> {
        self.max_steps
    }

    /// Returns the scheme this config runs for `method`.
    #[must_use]
    pub fn scheme(&self, method: Method) -> Scheme {
        Scheme::new(method).with_aime_form(self.aime)
    }

    /// Builds the grid for `[x0, xn]`, applying the step ceiling.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is degenerate or exceeds the ceiling.
    pub fn grid(&self, x0: f64, xn: f64, h: f64) -> Result<Grid, GridError> {
        let grid = Grid::new(x0, xn, h)?;
        match self.max_steps {
            Some(limit) => grid.with_limit(limit),
            None => Ok(grid),
        }
    }
}
