//! Builder for constructing state transitions.

use crate::builder::error::BuildError;
use crate::core::{Action, Cause, Guard, State};
use crate::machine::Transition;

/// Builder for constructing transitions with a fluent API.
///
/// # Example
///
/// ```
/// use state_switcher::builder::TransitionBuilder;
/// use state_switcher::state_enum;
///
/// state_enum! {
///     enum Light {
///         Off,
///         On,
///     }
/// }
///
/// let (from, transition) = TransitionBuilder::new()
///     .from(Light::Off)
///     .to(Light::On)
///     .on("flip")
///     .when(|| true)
///     .then(|cause: &&str| println!("{cause}"))
///     .build()
///     .unwrap();
///
/// assert_eq!(from, Light::Off);
/// assert_eq!(transition.to, Light::On);
/// ```
pub struct TransitionBuilder<S: State, C: Cause> {
    from: Option<S>,
    to: Option<S>,
    cause: Option<C>,
    guard: Option<Guard>,
    action: Option<Action<C>>,
}

impl<S: State, C: Cause> TransitionBuilder<S, C> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            to: None,
            cause: None,
            guard: None,
            action: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Set the triggering cause (required).
    pub fn on(mut self, cause: C) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Add a guard (optional).
    pub fn guard(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard using a closure (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Set the action (optional).
    pub fn action(mut self, action: Action<C>) -> Self {
        self.action = Some(action);
        self
    }

    /// Set the action using a closure (optional).
    pub fn then<F>(mut self, procedure: F) -> Self
    where
        F: Fn(&C) + Send + Sync + 'static,
    {
        self.action = Some(Action::new(procedure));
        self
    }

    /// Build the transition, returning it with its source state.
    pub fn build(self) -> Result<(S, Transition<S, C>), BuildError<S, C>> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;
        let cause = self.cause.ok_or(BuildError::MissingCause)?;

        Ok((
            from,
            Transition {
                to,
                cause,
                guard: self.guard,
                action: self.action,
            },
        ))
    }
}

impl<S: State, C: Cause> Default for TransitionBuilder<S, C> {
    fn default() -> Self {
        Self::new()
    }
}
