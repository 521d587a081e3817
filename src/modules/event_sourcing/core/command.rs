use chrono::{DateTime, Utc};

/// A requested action against one entity, derived from an inbound request.
pub trait Command {
    /// Name of the domain event the command produces when accepted.
    fn event_type(&self) -> String;

    fn entity_type(&self) -> &str;

    fn entity_id(&self) -> &str;

    /// User or system that issued the command.
    fn user(&self) -> &str;

    fn timestamp(&self) -> DateTime<Utc>;
}
