// Projectors fold domain events into read models.
//
// Events can be delivered more than once, so implementations must be idempotent:
// applying an event that was already applied leaves the read model unchanged.

use async_trait::async_trait;

use crate::modules::event_sourcing::core::domain_event::DomainEvent;

#[async_trait]
pub trait Projector: Send + Sync {
    async fn apply(&self, event: &DomainEvent) -> anyhow::Result<()>;
}
