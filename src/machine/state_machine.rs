//! Table-driven state machine.

use crate::core::{Action, Cause, Guard, State, StateHistory, StateTransition};
use crate::machine::error::{MachineError, MachineResult};
use crate::machine::transition::Transition;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Transitions a machine keeps in its history unless configured otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 1024;

/// How a rejecting guard interacts with the state change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardPolicy {
    /// Move to the target state first, then evaluate the guard. A rejecting
    /// guard only suppresses the action; the state change stands.
    #[default]
    MoveThenCheck,

    /// Evaluate the guard first. A rejecting guard leaves the state unchanged
    /// and suppresses the action.
    CheckThenMove,
}

/// Outcome of a successful [`StateMachine::trigger`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<S> {
    pub from: S,
    /// State after the trigger returned.
    pub to: S,
    pub guard_passed: bool,
    pub action_ran: bool,
}

/// State machine mapping `(current state, cause)` to a transition.
///
/// The machine is not internally synchronized. Drive it from a single owner
/// such as [`MachineActor`](crate::actor::MachineActor), or wrap it in a lock.
///
/// # Example
///
/// ```rust
/// use state_switcher::machine::{MachineError, StateMachine};
/// use state_switcher::state_enum;
///
/// state_enum! {
///     enum Door {
///         Open,
///         Closed,
///     }
/// }
///
/// let mut machine = StateMachine::new(Door::Open);
/// machine.add_transition(Door::Open, Door::Closed, "push", None, None).unwrap();
///
/// machine.trigger("push").unwrap();
/// assert_eq!(machine.current_state(), &Door::Closed);
///
/// let err = machine.trigger("push").unwrap_err();
/// assert_eq!(err, MachineError::NoTransition { state: Door::Closed, cause: "push" });
/// ```
pub struct StateMachine<S: State, C: Cause> {
    current: S,
    table: HashMap<S, HashMap<C, Transition<S, C>>>,
    guard_policy: GuardPolicy,
    history: StateHistory<S, C>,
}

impl<S: State, C: Cause> StateMachine<S, C> {
    /// Create a machine in `start` with one empty cause map per declared state.
    pub fn new(start: S) -> Self {
        let table = S::VARIANTS
            .iter()
            .map(|state| (state.clone(), HashMap::new()))
            .collect();

        Self {
            current: start,
            table,
            guard_policy: GuardPolicy::default(),
            history: StateHistory::with_limit(DEFAULT_HISTORY_LIMIT),
        }
    }

    pub fn with_guard_policy(mut self, policy: GuardPolicy) -> Self {
        self.guard_policy = policy;
        self
    }

    /// Bound the history to the `limit` most recent transitions, or keep
    /// everything with `None`. Defaults to [`DEFAULT_HISTORY_LIMIT`].
    pub fn with_history_limit(mut self, limit: Option<usize>) -> Self {
        self.history.set_limit(limit);
        self
    }

    /// Register the edge `(from, cause) -> to`.
    ///
    /// A later registration for the same `(from, cause)` replaces the earlier
    /// one. `to` is not validated.
    pub fn add_transition(
        &mut self,
        from: S,
        to: S,
        cause: C,
        guard: Option<Guard>,
        action: Option<Action<C>>,
    ) -> MachineResult<(), S, C> {
        self.register(
            from,
            Transition {
                to,
                cause,
                guard,
                action,
            },
        )
    }

    /// Register a pre-built transition from `from`.
    pub fn register(&mut self, from: S, transition: Transition<S, C>) -> MachineResult<(), S, C> {
        let Some(edges) = self.table.get_mut(&from) else {
            return Err(MachineError::UnknownState(from));
        };

        debug!(
            from = from.name(),
            to = transition.to.name(),
            cause = ?transition.cause,
            guarded = transition.guard.is_some(),
            "Transition registered"
        );

        if edges.insert(transition.cause.clone(), transition).is_some() {
            trace!(from = from.name(), "Replaced existing transition");
        }

        Ok(())
    }

    /// Fire the transition registered for the current state and `cause`.
    ///
    /// Under [`GuardPolicy::MoveThenCheck`] the state moves before the guard
    /// is evaluated, so a rejecting guard only skips the action. On error the
    /// state is unchanged and nothing is recorded.
    pub fn trigger(&mut self, cause: C) -> MachineResult<Fired<S>, S, C> {
        let Some(transition) = self
            .table
            .get(&self.current)
            .and_then(|edges| edges.get(&cause))
        else {
            debug!(state = self.current.name(), cause = ?cause, "No transition");
            return Err(MachineError::NoTransition {
                state: self.current.clone(),
                cause,
            });
        };

        let from = self.current.clone();
        let guard_passed = match self.guard_policy {
            GuardPolicy::MoveThenCheck => {
                self.current = transition.to.clone();
                transition.guard_passes()
            }
            GuardPolicy::CheckThenMove => {
                let passed = transition.guard_passes();
                if passed {
                    self.current = transition.to.clone();
                }
                passed
            }
        };

        let action_ran = guard_passed && transition.run_action(&cause);

        debug!(
            from = from.name(),
            to = self.current.name(),
            cause = ?cause,
            guard_passed,
            action_ran,
            "Transition fired"
        );

        self.history.record(StateTransition {
            from: from.clone(),
            to: self.current.clone(),
            cause,
            guard_passed,
            timestamp: Utc::now(),
        });

        Ok(Fired {
            from,
            to: self.current.clone(),
            guard_passed,
            action_ran,
        })
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    pub fn guard_policy(&self) -> GuardPolicy {
        self.guard_policy
    }

    /// Look up the transition registered for `(from, cause)`.
    pub fn transition(&self, from: &S, cause: &C) -> Option<&Transition<S, C>> {
        self.table.get(from).and_then(|edges| edges.get(cause))
    }

    /// Whether `cause` has a registered edge from the current state.
    pub fn can_trigger(&self, cause: &C) -> bool {
        self.transition(&self.current, cause).is_some()
    }

    /// Causes registered from the current state, in no particular order.
    pub fn permitted_causes(&self) -> Vec<&C> {
        self.table
            .get(&self.current)
            .map(|edges| edges.keys().collect())
            .unwrap_or_default()
    }

    /// Number of registered edges across all states.
    pub fn transition_count(&self) -> usize {
        self.table.values().map(HashMap::len).sum()
    }

    /// Get state history (pure)
    pub fn history(&self) -> &StateHistory<S, C> {
        &self.history
    }
}
