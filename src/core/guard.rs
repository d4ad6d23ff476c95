//! Guard predicates for gating transition actions.
//!
//! A guard is a side-effect-free boolean function evaluated when a
//! transition fires. Whether a rejecting guard also holds the state back
//! depends on the machine's [`GuardPolicy`](crate::machine::GuardPolicy).

use std::fmt;

/// Predicate that decides whether a transition's action runs.
///
/// # Example
///
/// ```rust
/// use state_switcher::core::Guard;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
///
/// let maintenance = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&maintenance);
/// let guard = Guard::new(move || !flag.load(Ordering::SeqCst));
///
/// assert!(guard.check());
/// maintenance.store(true, Ordering::SeqCst);
/// assert!(!guard.check());
/// ```
pub struct Guard {
    predicate: Box<dyn Fn() -> bool + Send + Sync>,
}

impl Guard {
    /// Create a guard from a predicate function.
    ///
    /// The predicate should be free of side effects and thread-safe
    /// (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Guard that always passes.
    pub fn always() -> Self {
        Self::new(|| true)
    }

    /// Guard that never passes.
    pub fn never() -> Self {
        Self::new(|| false)
    }

    /// Evaluate the predicate.
    pub fn check(&self) -> bool {
        (self.predicate)()
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn always_and_never() {
        assert!(Guard::always().check());
        assert!(!Guard::never().check());
    }

    #[test]
    fn guard_reads_captured_state() {
        let level = Arc::new(AtomicUsize::new(0));
        let observed = Arc::clone(&level);
        let guard = Guard::new(move || observed.load(Ordering::SeqCst) < 3);

        assert!(guard.check());
        level.store(3, Ordering::SeqCst);
        assert!(!guard.check());
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::new(|| 2 + 2 == 4);

        let result1 = guard.check();
        let result2 = guard.check();

        assert_eq!(result1, result2);
    }

    #[test]
    fn debug_does_not_require_debuggable_closure() {
        let guard = Guard::always();
        assert!(format!("{guard:?}").starts_with("Guard"));
    }
}
