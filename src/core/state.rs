//! State and cause traits for table-driven state machines.
//!
//! States form a closed universe that is known at compile time. Causes are
//! open: any comparable value can trigger a transition, and causes that were
//! never registered are simply absent from the table.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// A state type is a finite enumeration. `VARIANTS` lists every value in the
/// universe; the machine seeds one (empty) cause map per entry, and
/// registering a transition from a value outside `VARIANTS` is rejected.
///
/// # Required Traits
///
/// - `Clone`: states are copied into history records
/// - `Eq` + `Hash`: states key the transition table
/// - `Debug`: states appear in errors and log fields
/// - `Send` + `Sync`: machines are driven from an actor task
///
/// # Example
///
/// ```rust
/// use state_switcher::core::State;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum DoorState {
///     Open,
///     Closed,
///     Locked,
/// }
///
/// impl State for DoorState {
///     const VARIANTS: &'static [Self] = &[Self::Open, Self::Closed, Self::Locked];
///
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Locked => "Locked",
///         }
///     }
/// }
///
/// assert_eq!(DoorState::VARIANTS.len(), 3);
/// assert_eq!(DoorState::Locked.name(), "Locked");
/// ```
///
/// Most enums should use [`state_enum!`](crate::state_enum) instead of a
/// hand-written impl, which keeps `VARIANTS` in sync with the declaration.
pub trait State: Clone + Eq + Hash + Debug + Send + Sync + 'static {
    /// Every value of the state universe.
    const VARIANTS: &'static [Self];

    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check whether `self` belongs to the declared universe.
    fn is_declared(&self) -> bool {
        Self::VARIANTS.contains(self)
    }

    /// Look up a declared state by its [`name`](State::name).
    fn from_name(name: &str) -> Option<Self> {
        Self::VARIANTS.iter().find(|state| state.name() == name).cloned()
    }
}

/// Marker trait for values that trigger transitions.
///
/// Blanket-implemented for every type with the required bounds, so plain
/// enums, integers and strings all work as causes.
pub trait Cause: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

impl<T> Cause for T where T: Clone + Eq + Hash + Debug + Send + Sync + 'static {}
