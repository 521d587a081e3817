// In memory entity projection.
//
// Purpose
// - Exercise projectors and their callers without a database.
//
// Responsibilities
// - Merge each event's payload into a view keyed by (entity_type, entity_id).
// - Remember which events were applied per entity; a redelivered event is skipped.
// - Report the latest applied timestamp per entity as its watermark.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value, json};
use tokio::sync::RwLock;

use crate::modules::event_sourcing::core::domain_event::DomainEvent;
use crate::modules::event_sourcing::ports::projector::Projector;

#[derive(Debug, Clone, PartialEq)]
pub struct EntityView {
    pub entity_type: String,
    pub entity_id: String,
    pub fields: Map<String, Value>,
    /// Type of the most recently applied event.
    pub last_event_type: String,
    /// Latest timestamp among the applied events.
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}

#[derive(Debug)]
struct ProjectedEntity {
    view: EntityView,
    applied: HashSet<String>,
}

#[derive(Default)]
pub struct InMemoryProjection {
    entities: RwLock<HashMap<(String, String), ProjectedEntity>>,
    is_offline: bool,
}

/// Identity of an event within its entity. Payload maps are key-ordered, so the
/// rendering is stable for equal events.
fn event_key(event: &DomainEvent) -> String {
    json!([event.timestamp, event.event_type, event.user, event.payload]).to_string()
}

impl InMemoryProjection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn get(
        &self,
        entity_type: &str,
        entity_id: &str,
    ) -> anyhow::Result<Option<EntityView>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Projection repository offline"));
        }

        Ok(self
            .entities
            .read()
            .await
            .get(&(entity_type.to_string(), entity_id.to_string()))
            .map(|entity| entity.view.clone()))
    }

    /// Timestamp of the latest event applied to the entity.
    pub async fn watermark(
        &self,
        entity_type: &str,
        entity_id: &str,
    ) -> anyhow::Result<Option<DateTime<Utc>>> {
        Ok(self
            .get(entity_type, entity_id)
            .await?
            .map(|view| view.updated_at))
    }
}

#[async_trait]
impl Projector for InMemoryProjection {
    async fn apply(&self, event: &DomainEvent) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Projection repository offline"));
        }

        let key = (event.entity_type.clone(), event.entity_id.clone());
        let mut guard = self.entities.write().await;
        let entity = guard.entry(key).or_insert_with(|| ProjectedEntity {
            view: EntityView {
                entity_type: event.entity_type.clone(),
                entity_id: event.entity_id.clone(),
                fields: Map::new(),
                last_event_type: String::new(),
                updated_at: event.timestamp,
                updated_by: String::new(),
            },
            applied: HashSet::new(),
        });

        if !entity.applied.insert(event_key(event)) {
            tracing::debug!(
                entity_type = %event.entity_type,
                entity_id = %event.entity_id,
                event_type = %event.event_type,
                "event already applied, skipping"
            );
            return Ok(());
        }

        let view = &mut entity.view;
        view.fields
            .extend(event.payload.iter().map(|(k, v)| (k.clone(), v.clone())));
        view.last_event_type = event.event_type.clone();
        view.updated_at = view.updated_at.max(event.timestamp);
        view.updated_by = event.user.clone();
        Ok(())
    }
}
