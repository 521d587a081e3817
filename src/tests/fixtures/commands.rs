// Shared command and event fixtures for the event sourcing tests.

use crate::modules::event_sourcing::core::domain_event::DomainEvent;
use crate::modules::event_sourcing::core::http_command::{HttpCommand, MultiValueMap};
use axum::http::Method;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Map, Value, json};

pub fn fixed_timestamp() -> DateTime<Utc> {
    Utc.timestamp_millis_opt(1_700_000_000_000).unwrap()
}

pub fn make_http_command() -> HttpCommand {
    HttpCommand::builder()
        .entity_type("Document")
        .entity_id("doc-0001")
        .user("user-fixed-0001")
        .timestamp(fixed_timestamp())
        .method(Method::POST)
        .path("/documents/doc-0001")
        .headers(MultiValueMap::from([(
            "content-type".to_string(),
            vec!["application/json".to_string()],
        )]))
        .query_params(MultiValueMap::from([(
            "siteId".to_string(),
            vec!["default".to_string()],
        )]))
        .body(r#"{"path":"test.pdf"}"#)
        .build()
}

pub fn payload(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("payload fixture must be a JSON object"),
    }
}

pub fn make_document_created_event() -> DomainEvent {
    DomainEvent::builder()
        .entity_type("Document")
        .entity_id("doc-0001")
        .timestamp(fixed_timestamp())
        .event_type("DocumentCreated")
        .payload(payload(json!({ "path": "test.pdf", "contentType": "application/pdf" })))
        .user("user-fixed-0001")
        .build()
}
