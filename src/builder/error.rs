//! Build errors for state machine and transition builders.

use crate::machine::MachineError;
use thiserror::Error;

/// Errors that can occur when building state machines and transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError<S, C> {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("Transition cause not specified. Call .on(cause)")]
    MissingCause,

    /// Registering a built transition was rejected by the machine.
    #[error(transparent)]
    Machine(#[from] MachineError<S, C>),
}
