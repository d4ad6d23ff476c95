//! Table-driven state machine.
//!
//! The machine owns its current state and a table mapping
//! `state -> cause -> transition`. Triggering a cause looks up the edge for
//! the current state, moves to its target, and runs the action when the
//! guard allows it.

mod error;
mod state_machine;
mod transition;

pub use error::{MachineError, MachineResult};
pub use state_machine::{Fired, GuardPolicy, StateMachine, DEFAULT_HISTORY_LIMIT};
pub use transition::Transition;
