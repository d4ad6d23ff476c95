//! State Switcher: a table-driven state machine behind a single-consumer actor
//!
//! A [`StateMachine`] maps `(current state, cause)` to a transition with an
//! optional guard and an optional action. An [`Actor`] owns an unbounded
//! mailbox and one processing task, so transitions fed from many producers
//! are still applied one at a time, in the order they arrive.
//!
//! # Core Concepts
//!
//! - **State**: a closed enumeration, declared with [`state_enum!`]
//! - **Cause**: any comparable value that triggers a transition
//! - **Guard**: predicate deciding whether a transition's action runs
//! - **Action**: side effect receiving the triggering cause
//! - **Actor**: mailbox plus processing loop with cooperative shutdown
//!
//! # Example
//!
//! ```rust
//! use state_switcher::builder::{simple_transition, StateMachineBuilder};
//! use state_switcher::state_enum;
//!
//! state_enum! {
//!     enum CellState {
//!         Open,
//!         Close,
//!     }
//! }
//!
//! let mut machine = StateMachineBuilder::new()
//!     .initial(CellState::Open)
//!     .transition(simple_transition(CellState::Open, CellState::Close, "Filled"))
//!     .unwrap()
//!     .transition(simple_transition(CellState::Close, CellState::Open, "Empty"))
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! machine.trigger("Filled").unwrap();
//! assert_eq!(machine.current_state(), &CellState::Close);
//! assert!(machine.trigger("Filled").is_err());
//! ```

pub mod actor;
pub mod builder;
pub mod core;
pub mod machine;

#[doc(hidden)]
pub use serde;

// Re-export commonly used types
pub use crate::actor::{Actor, ActorConfig, Handler, MachineActor};
pub use crate::core::{Action, Cause, Guard, State, StateHistory, StateTransition};
pub use crate::machine::{GuardPolicy, MachineError, StateMachine, Transition};
