//! Single-consumer message actor.
//!
//! Producers enqueue messages with a non-blocking `send`; one processing
//! task hands them to a [`Handler`] strictly one at a time, in FIFO order.
//!
//! # Key Concepts
//!
//! - **Mailbox**: unbounded multi-producer, single-consumer queue
//! - **Shutdown**: cooperative; the in-flight message always completes
//! - **Supervision**: handler failures are logged and counted, or halt the loop
//! - **MachineActor**: an actor whose handler drives a [`StateMachine`](crate::machine::StateMachine)

mod config;
mod error;
mod machine_actor;
mod processor;

pub use config::{ActorConfig, ShutdownMode, SupervisionPolicy};
pub use error::{ActorError, SendError};
pub use machine_actor::{MachineActor, MachineHandler, MachineStopped};
pub use processor::{handler_fn, Actor, ActorRef, ActorReport, FnHandler, Handler};
