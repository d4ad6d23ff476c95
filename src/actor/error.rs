//! Actor errors.

use std::fmt;
use thiserror::Error;

/// Errors surfaced when stopping an actor.
#[derive(Debug, Error)]
pub enum ActorError {
    /// The processing loop panicked or was cancelled.
    #[error("Actor '{actor}' processing loop failed: {source}")]
    Join {
        actor: String,
        #[source]
        source: tokio::task::JoinError,
    },
}

/// Returned by `send` when the mailbox no longer accepts messages.
///
/// The rejected message is handed back to the caller.
#[derive(Error, PartialEq, Eq)]
#[error("Actor mailbox is closed")]
pub struct SendError<M>(pub M);

impl<M> SendError<M> {
    pub fn into_inner(self) -> M {
        self.0
    }
}

impl<M> fmt::Debug for SendError<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SendError").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Opaque;

    #[test]
    fn send_error_returns_message() {
        let err = SendError(41);
        assert_eq!(err.to_string(), "Actor mailbox is closed");
        assert_eq!(err.into_inner(), 41);
    }

    #[test]
    fn send_error_debug_ignores_payload() {
        let err = SendError(Opaque);
        assert_eq!(format!("{err:?}"), "SendError { .. }");
    }
}
