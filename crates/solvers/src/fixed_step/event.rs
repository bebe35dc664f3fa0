/// Event emitted by the fixed-step solver for each grid point.
///
/// Step 0 is the initial condition before any integration.
/// Steps 1..N are emitted after each integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step number (0 for the initial condition).
    pub step: usize,

    /// The grid point reached.
    pub x: f64,

    /// The solution estimate at `x`.
    pub y: f64,
}

impl Event {
    /// Returns true if the solution estimate is NaN or infinite.
    #[must_use]
    pub fn is_blown_up(&self) -> bool {
        !self.y.is_finite()
    }
}
