//! Actor configuration.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What happens to queued messages when an actor stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShutdownMode {
    /// Finish the in-flight message, then drop everything still queued.
    #[default]
    Immediate,

    /// Refuse new messages, then handle everything already queued before
    /// the loop exits.
    Graceful,
}

/// What the processing loop does when the handler returns an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupervisionPolicy {
    /// Log the failure, count it, and keep processing.
    #[default]
    Resume,

    /// Log the failure and halt the loop. Queued messages are dropped.
    Stop,
}

/// Actor configuration
///
/// Every field has a default, so partial documents deserialize:
///
/// ```rust
/// use state_switcher::actor::{ActorConfig, ShutdownMode, SupervisionPolicy};
///
/// let config: ActorConfig = serde_json::from_str(r#"{ "shutdown": "graceful" }"#).unwrap();
/// assert_eq!(config.shutdown, ShutdownMode::Graceful);
/// assert_eq!(config.supervision, SupervisionPolicy::Resume);
/// assert!(config.name.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorConfig {
    /// Identifier used in log fields. Generated when absent.
    pub name: Option<String>,
    /// Queue handling on stop
    pub shutdown: ShutdownMode,
    /// Handler failure handling
    pub supervision: SupervisionPolicy,
}

impl ActorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_shutdown(mut self, shutdown: ShutdownMode) -> Self {
        self.shutdown = shutdown;
        self
    }

    pub fn with_supervision(mut self, supervision: SupervisionPolicy) -> Self {
        self.supervision = supervision;
        self
    }

    /// Configured name, or `actor-<8 hex chars>`.
    pub(crate) fn actor_id(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("actor-{}", &Uuid::new_v4().simple().to_string()[..8]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_behavior() {
        let config = ActorConfig::default();
        assert_eq!(config.shutdown, ShutdownMode::Immediate);
        assert_eq!(config.supervision, SupervisionPolicy::Resume);
    }

    #[test]
    fn named_config_keeps_its_name() {
        let config = ActorConfig::new().with_name("cell-7");
        assert_eq!(config.actor_id(), "cell-7");
    }

    #[test]
    fn generated_ids_are_prefixed_and_unique() {
        let config = ActorConfig::new();
        let first = config.actor_id();
        let second = config.actor_id();

        assert!(first.starts_with("actor-"));
        assert_eq!(first.len(), "actor-".len() + 8);
        assert_ne!(first, second);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = ActorConfig::new()
            .with_name("worker")
            .with_shutdown(ShutdownMode::Graceful)
            .with_supervision(SupervisionPolicy::Stop);

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"graceful\""));
        assert!(json.contains("\"stop\""));

        let parsed: ActorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
