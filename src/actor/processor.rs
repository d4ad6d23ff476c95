//! Single-consumer message actor.
//!
//! An [`Actor`] owns an unbounded FIFO mailbox and one processing task. The
//! task takes one message at a time and awaits the handler to completion
//! before taking the next, so at most one message is ever in flight.

use crate::actor::config::{ActorConfig, ShutdownMode, SupervisionPolicy};
use crate::actor::error::{ActorError, SendError};
use serde::Serialize;
use std::fmt::Display;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, Notify};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, info_span, warn, Instrument};

/// Processes messages delivered by an [`Actor`].
///
/// Calls never overlap: the next message is not dequeued until the
/// returned future completes.
pub trait Handler<M>: Send + 'static {
    type Error: Display + Send;

    fn handle(&mut self, message: M) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

/// Adapter turning an async closure into a [`Handler`].
pub struct FnHandler<F>(F);

/// Build a handler from a closure returning a future.
///
/// ```rust
/// use state_switcher::actor::{handler_fn, Actor, ActorConfig};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let actor = Actor::spawn(
///     handler_fn(|n: u32| async move {
///         if n > 10 { Err(format!("{n} is too large")) } else { Ok(()) }
///     }),
///     ActorConfig::default(),
/// );
/// actor.send(3).unwrap();
/// let report = actor.stop().await.unwrap();
/// assert!(report.processed <= 1);
/// # }
/// ```
pub fn handler_fn<F>(f: F) -> FnHandler<F> {
    FnHandler(f)
}

impl<M, F, Fut, E> Handler<M> for FnHandler<F>
where
    F: FnMut(M) -> Fut + Send + 'static,
    Fut: Future<Output = Result<(), E>> + Send,
    E: Display + Send,
{
    type Error = E;

    fn handle(&mut self, message: M) -> impl Future<Output = Result<(), E>> + Send {
        (self.0)(message)
    }
}

/// Counters returned when an actor stops.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActorReport {
    /// Messages the handler completed successfully
    pub processed: u64,
    /// Messages the handler returned an error for
    pub failed: u64,
    /// Messages still queued at shutdown that were never handled
    pub dropped: u64,
    /// Error that halted the loop under [`SupervisionPolicy::Stop`]
    pub halted: Option<String>,
}

struct StopSignal {
    running: AtomicBool,
    notify: Notify,
}

impl StopSignal {
    fn new() -> Self {
        Self {
            running: AtomicBool::new(true),
            notify: Notify::new(),
        }
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    fn request(&self) {
        self.running.store(false, Ordering::Release);
        // Stores a permit when the loop is busy in the handler.
        self.notify.notify_one();
    }
}

/// Cloneable producer handle for an [`Actor`]'s mailbox.
pub struct ActorRef<M> {
    id: Arc<str>,
    sender: mpsc::UnboundedSender<M>,
}

impl<M> Clone for ActorRef<M> {
    fn clone(&self) -> Self {
        Self {
            id: Arc::clone(&self.id),
            sender: self.sender.clone(),
        }
    }
}

impl<M> ActorRef<M> {
    /// Enqueue a message without blocking.
    ///
    /// Fails, returning the message, once the actor has stopped accepting
    /// messages.
    pub fn send(&self, message: M) -> Result<(), SendError<M>> {
        self.sender.send(message).map_err(|mpsc::error::SendError(message)| {
            debug!(actor = %self.id, "Message rejected, mailbox closed");
            SendError(message)
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether the mailbox still accepts messages.
    pub fn is_running(&self) -> bool {
        !self.sender.is_closed()
    }
}

/// Owner of a mailbox and its processing task.
///
/// Must be spawned from within a tokio runtime. Dropping the actor without
/// calling [`stop`](Actor::stop) requests shutdown without waiting for it.
///
/// # Example
///
/// ```rust
/// use state_switcher::actor::{handler_fn, Actor, ActorConfig, ShutdownMode};
/// use std::sync::{Arc, Mutex};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
///
/// let actor = Actor::spawn(
///     handler_fn(move |word: &'static str| {
///         sink.lock().unwrap().push(word);
///         async { Ok::<(), String>(()) }
///     }),
///     ActorConfig::new().with_shutdown(ShutdownMode::Graceful),
/// );
///
/// actor.send("one").unwrap();
/// actor.send("two").unwrap();
/// let report = actor.stop().await.unwrap();
///
/// assert_eq!(report.processed, 2);
/// assert_eq!(*seen.lock().unwrap(), vec!["one", "two"]);
/// # }
/// ```
pub struct Actor<M: Send + 'static> {
    handle: ActorRef<M>,
    signal: Arc<StopSignal>,
    task: Option<JoinHandle<ActorReport>>,
}

impl<M: Send + 'static> Actor<M> {
    /// Create the mailbox and start the processing task.
    pub fn spawn<H>(handler: H, config: ActorConfig) -> Self
    where
        H: Handler<M>,
    {
        let id: Arc<str> = config.actor_id().into();
        let (sender, mailbox) = mpsc::unbounded_channel();
        let signal = Arc::new(StopSignal::new());

        let task = tokio::spawn(
            process_messages(mailbox, handler, Arc::clone(&signal), config.clone())
                .instrument(info_span!("actor", actor = %id)),
        );

        info!(
            actor = %id,
            shutdown = ?config.shutdown,
            supervision = ?config.supervision,
            "Actor started"
        );

        Self {
            handle: ActorRef { id, sender },
            signal,
            task: Some(task),
        }
    }

    /// Enqueue a message without blocking.
    pub fn send(&self, message: M) -> Result<(), SendError<M>> {
        self.handle.send(message)
    }

    /// Producer handle that can be cloned across tasks and threads.
    pub fn handle(&self) -> ActorRef<M> {
        self.handle.clone()
    }

    pub fn id(&self) -> &str {
        self.handle.id()
    }

    /// Whether the mailbox still accepts messages.
    pub fn is_running(&self) -> bool {
        self.signal.is_running() && self.handle.is_running()
    }

    /// Stop the processing loop and wait for it to exit.
    ///
    /// The in-flight message, if any, finishes. Queued messages are dropped
    /// or handled according to [`ShutdownMode`]. Once this returns, no
    /// further message is ever delivered to the handler.
    pub async fn stop(mut self) -> Result<ActorReport, ActorError> {
        self.signal.request();

        let Some(task) = self.task.take() else {
            return Ok(ActorReport::default());
        };

        let report = task.await.map_err(|source| ActorError::Join {
            actor: self.id().to_string(),
            source,
        })?;

        info!(
            actor = %self.id(),
            processed = report.processed,
            failed = report.failed,
            dropped = report.dropped,
            "Actor stopped"
        );

        Ok(report)
    }
}

impl<M: Send + 'static> Drop for Actor<M> {
    fn drop(&mut self) {
        self.signal.request();
    }
}

async fn process_messages<M, H>(
    mut mailbox: mpsc::UnboundedReceiver<M>,
    mut handler: H,
    signal: Arc<StopSignal>,
    config: ActorConfig,
) -> ActorReport
where
    M: Send + 'static,
    H: Handler<M>,
{
    let mut report = ActorReport::default();

    while signal.is_running() {
        let message = tokio::select! {
            biased;
            _ = signal.notify.notified() => break,
            next = mailbox.recv() => match next {
                Some(message) => message,
                None => break,
            },
        };

        if !dispatch(&mut handler, message, config.supervision, &mut report).await {
            break;
        }
    }

    mailbox.close();

    if config.shutdown == ShutdownMode::Graceful && report.halted.is_none() {
        while let Some(message) = mailbox.recv().await {
            if !dispatch(&mut handler, message, config.supervision, &mut report).await {
                break;
            }
        }
    }

    while mailbox.try_recv().is_ok() {
        report.dropped += 1;
    }

    if report.dropped > 0 {
        warn!(dropped = report.dropped, "Dropped queued messages on shutdown");
    }

    report
}

/// Handle one message. Returns `false` when the loop must halt.
async fn dispatch<M, H>(
    handler: &mut H,
    message: M,
    supervision: SupervisionPolicy,
    report: &mut ActorReport,
) -> bool
where
    H: Handler<M>,
{
    match handler.handle(message).await {
        Ok(()) => {
            report.processed += 1;
            true
        }
        Err(err) => {
            report.failed += 1;
            match supervision {
                SupervisionPolicy::Resume => {
                    warn!(error = %err, "Message handling failed");
                    true
                }
                SupervisionPolicy::Stop => {
                    error!(error = %err, "Message handling failed, halting actor");
                    report.halted = Some(err.to_string());
                    false
                }
            }
        }
    }
}
