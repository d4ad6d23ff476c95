//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders and macros for creating state machines
//! with minimal boilerplate while maintaining type safety.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Cause, State};

/// Start a transition with no guard and no action.
///
/// # Example
///
/// ```
/// use state_switcher::builder::{simple_transition, StateMachineBuilder};
/// use state_switcher::state_enum;
///
/// state_enum! {
///     enum MyState {
///         Start,
///         End,
///     }
/// }
///
/// let machine = StateMachineBuilder::new()
///     .initial(MyState::Start)
///     .transition(simple_transition(MyState::Start, MyState::End, "finish"))
///     .unwrap()
///     .build()
///     .unwrap();
/// assert!(machine.can_trigger(&"finish"));
/// ```
pub fn simple_transition<S: State, C: Cause>(from: S, to: S, cause: C) -> TransitionBuilder<S, C> {
    TransitionBuilder::new().from(from).to(to).on(cause)
}

/// Start a transition gated by a guard predicate.
///
/// # Example
///
/// ```
/// use state_switcher::builder::guarded_transition;
/// use state_switcher::state_enum;
///
/// state_enum! {
///     enum MyState {
///         Start,
///         End,
///     }
/// }
///
/// let (_, transition) = guarded_transition(MyState::Start, MyState::End, "finish", || false)
///     .build()
///     .unwrap();
/// assert!(!transition.guard_passes());
/// ```
pub fn guarded_transition<S, C, F>(from: S, to: S, cause: C, guard: F) -> TransitionBuilder<S, C>
where
    S: State,
    C: Cause,
    F: Fn() -> bool + Send + Sync + 'static,
{
    simple_transition(from, to, cause).when(guard)
}
