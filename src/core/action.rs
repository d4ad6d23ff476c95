//! Side-effecting actions run when a transition fires.

use std::fmt;

/// Procedure executed after a transition whose guard passed.
///
/// The action receives the cause that triggered the transition.
///
/// # Example
///
/// ```rust
/// use state_switcher::core::Action;
/// use std::sync::{Arc, Mutex};
///
/// let log = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&log);
/// let action = Action::new(move |cause: &&str| sink.lock().unwrap().push(cause.to_string()));
///
/// action.run(&"Booked");
/// assert_eq!(*log.lock().unwrap(), vec!["Booked".to_string()]);
/// ```
pub struct Action<C> {
    procedure: Box<dyn Fn(&C) + Send + Sync>,
}

impl<C> Action<C> {
    /// Create an action from a closure.
    pub fn new<F>(procedure: F) -> Self
    where
        F: Fn(&C) + Send + Sync + 'static,
    {
        Action {
            procedure: Box::new(procedure),
        }
    }

    /// Execute the action for `cause`.
    pub fn run(&self, cause: &C) {
        (self.procedure)(cause)
    }
}

impl<C> fmt::Debug for Action<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn action_receives_cause() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let action = Action::new(move |cause: &u32| sink.lock().unwrap().push(*cause));

        action.run(&7);
        action.run(&9);

        assert_eq!(*seen.lock().unwrap(), vec![7, 9]);
    }
}
