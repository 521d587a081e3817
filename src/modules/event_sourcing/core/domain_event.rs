use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::modules::event_sourcing::core::command::Command;

/// Something that happened to one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainEvent {
    /// Type of entity the event pertains to, e.g. "Document".
    pub entity_type: String,
    pub entity_id: String,
    pub timestamp: DateTime<Utc>,
    /// Domain event name, e.g. "DocumentCreated".
    #[serde(rename = "type")]
    pub event_type: String,
    /// Correlation and causation ids and the like.
    #[serde(default)]
    pub metadata: Map<String, Value>,
    /// Fields that changed.
    #[serde(default)]
    pub payload: Map<String, Value>,
    pub user: String,
}

impl DomainEvent {
    pub fn builder() -> DomainEventBuilder {
        DomainEventBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct DomainEventBuilder {
    entity_type: String,
    entity_id: String,
    timestamp: Option<DateTime<Utc>>,
    event_type: String,
    metadata: Map<String, Value>,
    payload: Map<String, Value>,
    user: String,
}

impl DomainEventBuilder {
    /// Copy entity, event type, user and timestamp from the command that caused the event.
    pub fn caused_by(self, command: &impl Command) -> Self {
        self.entity_type(command.entity_type())
            .entity_id(command.entity_id())
            .event_type(command.event_type())
            .user(command.user())
            .timestamp(command.timestamp())
    }

    pub fn entity_type(mut self, v: impl Into<String>) -> Self {
        self.entity_type = v.into();
        self
    }

    pub fn entity_id(mut self, v: impl Into<String>) -> Self {
        self.entity_id = v.into();
        self
    }

    pub fn timestamp(mut self, v: DateTime<Utc>) -> Self {
        self.timestamp = Some(v);
        self
    }

    pub fn event_type(mut self, v: impl Into<String>) -> Self {
        self.event_type = v.into();
        self
    }

    pub fn metadata(mut self, v: Map<String, Value>) -> Self {
        self.metadata = v;
        self
    }

    pub fn payload(mut self, v: Map<String, Value>) -> Self {
        self.payload = v;
        self
    }

    pub fn user(mut self, v: impl Into<String>) -> Self {
        self.user = v.into();
        self
    }

    pub fn build(self) -> DomainEvent {
        DomainEvent {
            entity_type: self.entity_type,
            entity_id: self.entity_id,
            timestamp: self.timestamp.unwrap_or_else(Utc::now),
            event_type: self.event_type,
            metadata: self.metadata,
            payload: self.payload,
            user: self.user,
        }
    }
}
