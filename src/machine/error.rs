//! Errors raised by state machine registration and triggering.

use thiserror::Error;

/// Errors that can occur when registering or firing transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError<S, C> {
    /// A transition was registered from a state outside the declared universe.
    #[error("State {0:?} does not exist")]
    UnknownState(S),

    /// No transition is registered for the current state and cause.
    #[error("Has no transition for state {state:?} and cause {cause:?}")]
    NoTransition { state: S, cause: C },
}

pub type MachineResult<T, S, C> = Result<T, MachineError<S, C>>;
