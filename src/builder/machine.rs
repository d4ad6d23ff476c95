//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Cause, State};
use crate::machine::{GuardPolicy, StateMachine, Transition, DEFAULT_HISTORY_LIMIT};

/// Builder for constructing state machines with a fluent API.
///
/// Transitions are registered in the order they were added, so a later
/// transition for the same `(from, cause)` replaces an earlier one.
pub struct StateMachineBuilder<S: State, C: Cause> {
    initial: Option<S>,
    guard_policy: GuardPolicy,
    history_limit: Option<usize>,
    transitions: Vec<(S, Transition<S, C>)>,
}

impl<S: State, C: Cause> StateMachineBuilder<S, C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            guard_policy: GuardPolicy::default(),
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
            transitions: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    pub fn guard_policy(mut self, policy: GuardPolicy) -> Self {
        self.guard_policy = policy;
        self
    }

    /// See [`StateMachine::with_history_limit`].
    pub fn history_limit(mut self, limit: Option<usize>) -> Self {
        self.history_limit = limit;
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(
        mut self,
        builder: TransitionBuilder<S, C>,
    ) -> Result<Self, BuildError<S, C>> {
        self.transitions.push(builder.build()?);
        Ok(self)
    }

    /// Add a pre-built transition from `from`.
    pub fn add_transition(mut self, from: S, transition: Transition<S, C>) -> Self {
        self.transitions.push((from, transition));
        self
    }

    /// Build the state machine.
    /// Returns an error if the initial state is missing or a transition
    /// starts from an undeclared state. An empty table is valid, exactly as
    /// with [`StateMachine::new`].
    pub fn build(self) -> Result<StateMachine<S, C>, BuildError<S, C>> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut machine = StateMachine::new(initial)
            .with_guard_policy(self.guard_policy)
            .with_history_limit(self.history_limit);
        for (from, transition) in self.transitions {
            machine.register(from, transition)?;
        }

        Ok(machine)
    }
}

impl<S: State, C: Cause> Default for StateMachineBuilder<S, C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::MachineError;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Initial,
        Processing,
        Complete,
        Detached,
    }

    impl State for TestState {
        const VARIANTS: &'static [Self] = &[Self::Initial, Self::Processing, Self::Complete];

        fn name(&self) -> &str {
            match self {
                Self::Initial => "Initial",
                Self::Processing => "Processing",
                Self::Complete => "Complete",
                Self::Detached => "Detached",
            }
        }
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = StateMachineBuilder::<TestState, &str>::new().build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_accepts_empty_table() {
        let mut machine = StateMachineBuilder::<TestState, &str>::new()
            .initial(TestState::Initial)
            .build()
            .unwrap();

        assert_eq!(machine.transition_count(), 0);
        assert_eq!(
            machine.trigger("start").unwrap_err(),
            MachineError::NoTransition {
                state: TestState::Initial,
                cause: "start",
            }
        );
    }

    #[test]
    fn fluent_api_builds_machine() {
        let mut machine = StateMachineBuilder::new()
            .initial(TestState::Initial)
            .guard_policy(GuardPolicy::CheckThenMove)
            .history_limit(Some(1))
            .transition(
                TransitionBuilder::new()
                    .from(TestState::Initial)
                    .to(TestState::Processing)
                    .on("start"),
            )
            .unwrap()
            .add_transition(
                TestState::Processing,
                Transition::new(TestState::Complete, "finish"),
            )
            .build()
            .unwrap();

        assert_eq!(machine.current_state(), &TestState::Initial);
        assert_eq!(machine.guard_policy(), GuardPolicy::CheckThenMove);
        assert_eq!(machine.transition_count(), 2);

        machine.trigger("start").unwrap();
        machine.trigger("finish").unwrap();
        assert_eq!(machine.current_state(), &TestState::Complete);
        assert_eq!(machine.history().causes(), vec![&"finish"]);
    }

    #[test]
    fn builder_reports_undeclared_source_state() {
        let result = StateMachineBuilder::new()
            .initial(TestState::Initial)
            .add_transition(
                TestState::Detached,
                Transition::new(TestState::Initial, "reattach"),
            )
            .build();

        assert_eq!(
            result.err(),
            Some(BuildError::Machine(MachineError::UnknownState(TestState::Detached)))
        );
    }

    #[test]
    fn last_added_transition_wins() {
        let machine = StateMachineBuilder::new()
            .initial(TestState::Initial)
            .add_transition(
                TestState::Initial,
                Transition::new(TestState::Processing, "go"),
            )
            .add_transition(TestState::Initial, Transition::new(TestState::Complete, "go"))
            .build()
            .unwrap();

        assert_eq!(machine.transition_count(), 1);
        assert_eq!(
            machine.transition(&TestState::Initial, &"go").map(|t| t.to),
            Some(TestState::Complete)
        );
    }
}
