//! Actor-driven state machine.
//!
//! [`MachineActor`] serializes triggers through an [`Actor`] mailbox so a
//! machine can be fed from any number of producers while transitions are
//! still applied one at a time, in arrival order.

use crate::actor::config::ActorConfig;
use crate::actor::error::{ActorError, SendError};
use crate::actor::processor::{Actor, ActorRef, ActorReport, Handler};
use crate::core::{Cause, State, StateHistory};
use crate::machine::{MachineError, StateMachine};
use parking_lot::Mutex;
use std::future::{self, Future};
use std::sync::Arc;
use tracing::debug;

/// Handler that forwards each message to [`StateMachine::trigger`].
///
/// `NoTransition` is returned as the message's failure, so the actor's
/// [`SupervisionPolicy`](crate::actor::SupervisionPolicy) decides whether
/// the loop keeps going.
pub struct MachineHandler<S: State, C: Cause> {
    machine: Arc<Mutex<StateMachine<S, C>>>,
}

impl<S: State, C: Cause> MachineHandler<S, C> {
    pub fn new(machine: Arc<Mutex<StateMachine<S, C>>>) -> Self {
        Self { machine }
    }
}

impl<S: State, C: Cause> Handler<C> for MachineHandler<S, C> {
    type Error = MachineError<S, C>;

    fn handle(&mut self, cause: C) -> impl Future<Output = Result<(), Self::Error>> + Send {
        debug!(cause = ?cause, "Received");
        let result = self.machine.lock().trigger(cause).map(|_| ());
        future::ready(result)
    }
}

/// Final state of a stopped [`MachineActor`].
#[derive(Debug)]
pub struct MachineStopped<S, C> {
    pub state: S,
    pub history: StateHistory<S, C>,
    pub report: ActorReport,
}

/// A [`StateMachine`] owned by a single-consumer [`Actor`].
///
/// Reads of the current state are synchronized with the processing loop.
/// Actions run while the machine is locked and must not call back into the
/// same `MachineActor`.
///
/// # Example
///
/// ```rust
/// use state_switcher::actor::{ActorConfig, MachineActor, ShutdownMode};
/// use state_switcher::machine::StateMachine;
/// use state_switcher::state_enum;
///
/// state_enum! {
///     enum Light {
///         Off,
///         On,
///     }
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut machine = StateMachine::new(Light::Off);
/// machine.add_transition(Light::Off, Light::On, "flip", None, None).unwrap();
/// machine.add_transition(Light::On, Light::Off, "flip", None, None).unwrap();
///
/// let actor = MachineActor::spawn(
///     machine,
///     ActorConfig::new().with_shutdown(ShutdownMode::Graceful),
/// );
/// for _ in 0..3 {
///     actor.send("flip").unwrap();
/// }
///
/// let stopped = actor.stop().await.unwrap();
/// assert_eq!(stopped.state, Light::On);
/// assert_eq!(stopped.report.processed, 3);
/// # }
/// ```
pub struct MachineActor<S: State, C: Cause> {
    machine: Arc<Mutex<StateMachine<S, C>>>,
    actor: Actor<C>,
}

impl<S: State, C: Cause> MachineActor<S, C> {
    /// Move `machine` behind a lock and start the actor that drives it.
    pub fn spawn(machine: StateMachine<S, C>, config: ActorConfig) -> Self {
        let machine = Arc::new(Mutex::new(machine));
        let actor = Actor::spawn(MachineHandler::new(Arc::clone(&machine)), config);
        Self { machine, actor }
    }

    /// Enqueue a cause without blocking.
    pub fn send(&self, cause: C) -> Result<(), SendError<C>> {
        self.actor.send(cause)
    }

    pub fn handle(&self) -> ActorRef<C> {
        self.actor.handle()
    }

    pub fn id(&self) -> &str {
        self.actor.id()
    }

    pub fn is_running(&self) -> bool {
        self.actor.is_running()
    }

    pub fn current_state(&self) -> S {
        self.machine.lock().current_state().clone()
    }

    /// Snapshot of the retained transition history.
    ///
    /// The clone happens under the machine lock, so its cost is bounded by
    /// the machine's history limit.
    pub fn history(&self) -> StateHistory<S, C> {
        self.machine.lock().history().clone()
    }

    /// Run `f` with the machine locked.
    pub fn with_machine<R>(&self, f: impl FnOnce(&StateMachine<S, C>) -> R) -> R {
        f(&self.machine.lock())
    }

    /// Stop the actor and return the machine's final state.
    pub async fn stop(self) -> Result<MachineStopped<S, C>, ActorError> {
        let report = self.actor.stop().await?;
        let machine = self.machine.lock();

        Ok(MachineStopped {
            state: machine.current_state().clone(),
            history: machine.history().clone(),
            report,
        })
    }
}
