//! Core value types shared by the machine and the builder.
//!
//! - State and cause traits
//! - Guard predicates and side-effecting actions
//! - Transition history

mod action;
mod guard;
mod history;
mod state;

pub use action::Action;
pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::{Cause, State};
