//! State transition history tracking.
//!
//! Every transition a machine fires is appended to its history, including
//! the cause and whether the guard passed. History is serializable for
//! inspection and export, and can be bounded to the most recent entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single fired transition.
///
/// # Example
///
/// ```rust
/// use state_switcher::core::StateTransition;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: "Open",
///     to: "Close",
///     cause: "Filled",
///     guard_passed: true,
///     timestamp: Utc::now(),
/// };
/// assert!(transition.changed_state());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition<S, C> {
    /// The state the machine was in when the cause arrived
    pub from: S,
    /// The state the machine was in after the trigger returned
    pub to: S,
    /// The cause that fired the transition
    pub cause: C,
    /// Whether the guard allowed the action to run
    pub guard_passed: bool,
    /// When the transition fired
    pub timestamp: DateTime<Utc>,
}

impl<S: PartialEq, C> StateTransition<S, C> {
    /// Whether the transition moved the machine to a different state.
    pub fn changed_state(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered history of fired transitions.
///
/// A history may be bounded. Once a bounded history is full, recording a
/// transition evicts the oldest one, so memory stays flat for machines that
/// run indefinitely.
///
/// # Example
///
/// ```rust
/// use state_switcher::core::{StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let mut history = StateHistory::new();
/// history.record(StateTransition {
///     from: 'a',
///     to: 'b',
///     cause: 1,
///     guard_passed: true,
///     timestamp: Utc::now(),
/// });
/// history.record(StateTransition {
///     from: 'b',
///     to: 'c',
///     cause: 2,
///     guard_passed: false,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.get_path(), vec![&'a', &'b', &'c']);
/// assert_eq!(history.causes(), vec![&1, &2]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateHistory<S, C> {
    transitions: VecDeque<StateTransition<S, C>>,
    #[serde(default)]
    limit: Option<usize>,
    /// Transitions discarded to respect `limit`.
    #[serde(default)]
    evicted: u64,
}

impl<S, C> Default for StateHistory<S, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, C> StateHistory<S, C> {
    /// Create a new empty, unbounded history.
    pub fn new() -> Self {
        Self {
            transitions: VecDeque::new(),
            limit: None,
            evicted: 0,
        }
    }

    /// Create a history that keeps at most `limit` transitions.
    ///
    /// A limit of zero keeps nothing.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::new()
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Change the bound, evicting the oldest transitions that no longer fit.
    pub fn set_limit(&mut self, limit: Option<usize>) {
        self.limit = limit;
        if let Some(limit) = limit {
            while self.transitions.len() > limit {
                self.transitions.pop_front();
                self.evicted += 1;
            }
        }
    }

    /// Number of transitions discarded because the history was full.
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    /// Append a transition, evicting the oldest one when full.
    pub fn record(&mut self, transition: StateTransition<S, C>) {
        if self.limit == Some(0) {
            self.evicted += 1;
            return;
        }
        if self.limit.is_some_and(|limit| self.transitions.len() >= limit) {
            self.transitions.pop_front();
            self.evicted += 1;
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest retained transition followed by
    /// the `to` state of every retained transition. Empty when nothing is
    /// retained.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Causes in the order they fired.
    pub fn causes(&self) -> Vec<&C> {
        self.transitions.iter().map(|t| &t.cause).collect()
    }

    /// Duration between the oldest and newest retained transition.
    ///
    /// Returns `None` if there are no transitions. Timestamps come from the
    /// wall clock, so a clock stepping backwards yields zero rather than a
    /// negative span.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.front()?, self.transitions.back()?);
        let duration = last.timestamp.signed_duration_since(first.timestamp);
        Some(duration.to_std().unwrap_or_default())
    }

    /// Most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S, C>> {
        self.transitions.back()
    }

    /// Retained transitions, oldest first.
    pub fn transitions(&self) -> &VecDeque<StateTransition<S, C>> {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    fn transition(from: TestState, to: TestState, cause: &str) -> StateTransition<TestState, String> {
        StateTransition {
            from,
            to,
            cause: cause.to_string(),
            guard_passed: true,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<TestState, String> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn record_appends_in_order() {
        let mut history = StateHistory::new();

        history.record(transition(TestState::Initial, TestState::Processing, "start"));
        history.record(transition(TestState::Processing, TestState::Complete, "finish"));

        assert_eq!(history.len(), 2);
        assert_eq!(
            history.get_path(),
            vec![&TestState::Initial, &TestState::Processing, &TestState::Complete]
        );
        assert_eq!(history.causes(), vec!["start", "finish"]);
        assert_eq!(history.last().unwrap().cause, "finish");
    }

    #[test]
    fn self_transition_does_not_change_state() {
        let t = transition(TestState::Initial, TestState::Initial, "noop");
        assert!(!t.changed_state());
        assert!(transition(TestState::Initial, TestState::Complete, "jump").changed_state());
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let mut history = StateHistory::new();
        history.record(transition(TestState::Initial, TestState::Processing, "start"));

        std::thread::sleep(std::time::Duration::from_millis(10));

        history.record(transition(TestState::Processing, TestState::Complete, "finish"));

        let duration = history.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let mut history = StateHistory::new();
        history.record(transition(TestState::Initial, TestState::Processing, "start"));

        assert_eq!(history.duration(), Some(std::time::Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = StateHistory::new();
        history.record(transition(TestState::Initial, TestState::Processing, "start"));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<TestState, String> = serde_json::from_str(&json).unwrap();

        assert_eq!(history.transitions(), deserialized.transitions());
    }

    #[test]
    fn bounded_history_evicts_oldest() {
        let mut history = StateHistory::with_limit(2);

        history.record(transition(TestState::Initial, TestState::Processing, "start"));
        history.record(transition(TestState::Processing, TestState::Complete, "finish"));
        history.record(transition(TestState::Complete, TestState::Initial, "reset"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.evicted(), 1);
        assert_eq!(history.causes(), vec!["finish", "reset"]);
        assert_eq!(
            history.get_path(),
            vec![&TestState::Processing, &TestState::Complete, &TestState::Initial]
        );
    }

    #[test]
    fn zero_limit_keeps_nothing() {
        let mut history = StateHistory::with_limit(0);

        history.record(transition(TestState::Initial, TestState::Processing, "start"));

        assert!(history.is_empty());
        assert_eq!(history.evicted(), 1);
    }

    #[test]
    fn set_limit_trims_existing_records() {
        let mut history = StateHistory::new();
        for cause in ["a", "b", "c", "d"] {
            history.record(transition(TestState::Initial, TestState::Initial, cause));
        }

        history.set_limit(Some(1));

        assert_eq!(history.limit(), Some(1));
        assert_eq!(history.causes(), vec!["d"]);
        assert_eq!(history.evicted(), 3);
    }

    #[test]
    fn backwards_clock_yields_zero_duration() {
        let mut history = StateHistory::new();
        let mut later = transition(TestState::Initial, TestState::Processing, "start");
        later.timestamp = Utc::now() + chrono::Duration::seconds(5);
        history.record(later);
        history.record(transition(TestState::Processing, TestState::Complete, "finish"));

        assert_eq!(history.duration(), Some(std::time::Duration::ZERO));
    }
}
