/// Observes solver events and optionally returns a control action.
///
/// Solvers call [`Observer::observe`] as they progress. Returning `Some(action)`
/// lets the observer steer the solver (for example, stopping early once a
/// trajectory blows up). Returning `None` lets the solver continue unchanged.
///
/// Closures `FnMut(&E) -> Option<A>` and the unit type `()` (which never acts)
/// implement this trait.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_never_acts() {
        let mut observer = ();
        let action: Option<()> = observer.observe(&1.0_f64);
        assert!(action.is_none());
    }

    #[test]
    fn closure_sees_every_event() {
        let mut seen = Vec::new();
        let mut observer = |event: &i32| {
            seen.push(*event);
            (*event > 1).then_some("stop")
        };

        assert_eq!(observer.observe(&1), None);
        assert_eq!(observer.observe(&2), Some("stop"));
        assert_eq!(seen, vec![1, 2]);
    }
}
