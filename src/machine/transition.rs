//! Transition records stored in the machine's table.

use crate::core::{Action, Guard};

/// One edge of the transition table.
///
/// The source state is the table key and is not repeated here. A record is
/// immutable once registered; registering the same `(from, cause)` pair again
/// replaces it.
#[derive(Debug)]
pub struct Transition<S, C> {
    pub to: S,
    pub cause: C,
    pub guard: Option<Guard>,
    pub action: Option<Action<C>>,
}

impl<S, C> Transition<S, C> {
    pub fn new(to: S, cause: C) -> Self {
        Self {
            to,
            cause,
            guard: None,
            action: None,
        }
    }

    pub fn with_guard(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    pub fn with_action(mut self, action: Action<C>) -> Self {
        self.action = Some(action);
        self
    }

    /// Evaluate the guard. A transition without a guard always passes.
    pub fn guard_passes(&self) -> bool {
        self.guard.as_ref().is_none_or(Guard::check)
    }

    /// Run the action if one is registered. Returns whether it ran.
    pub fn run_action(&self, cause: &C) -> bool {
        match &self.action {
            Some(action) => {
                action.run(cause);
                true
            }
            None => false,
        }
    }
}
