// A command carrying the raw shape of an HTTP request.
//
// The body is kept verbatim for the decider but never printed: Debug output redacts it.

use std::collections::BTreeMap;
use std::fmt;

use axum::http::Method;
use chrono::{DateTime, Utc};

use crate::modules::event_sourcing::core::command::Command;

pub type MultiValueMap = BTreeMap<String, Vec<String>>;

#[derive(Clone, PartialEq, Eq)]
pub struct HttpCommand {
    entity_type: String,
    entity_id: String,
    user: String,
    timestamp: DateTime<Utc>,
    method: Method,
    path: String,
    headers: MultiValueMap,
    query_params: MultiValueMap,
    body: Option<String>,
}

impl HttpCommand {
    pub fn builder() -> HttpCommandBuilder {
        HttpCommandBuilder::default()
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &MultiValueMap {
        &self.headers
    }

    pub fn query_params(&self) -> &MultiValueMap {
        &self.query_params
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

impl Command for HttpCommand {
    fn event_type(&self) -> String {
        format!("HTTP_{}", self.method.as_str().to_ascii_uppercase())
    }

    fn entity_type(&self) -> &str {
        &self.entity_type
    }

    fn entity_id(&self) -> &str {
        &self.entity_id
    }

    fn user(&self) -> &str {
        &self.user
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl fmt::Debug for HttpCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpCommand")
            .field("entity_type", &self.entity_type)
            .field("entity_id", &self.entity_id)
            .field("event_type", &self.event_type())
            .field("user", &self.user)
            .field("timestamp", &self.timestamp)
            .field("method", &self.method)
            .field("path", &self.path)
            .field("headers", &self.headers)
            .field("query_params", &self.query_params)
            .field("body", &self.body.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[derive(Debug, Default)]
pub struct HttpCommandBuilder {
    entity_type: String,
    entity_id: String,
    user: String,
    timestamp: Option<DateTime<Utc>>,
    method: Method,
    path: String,
    headers: MultiValueMap,
    query_params: MultiValueMap,
    body: Option<String>,
}

impl HttpCommandBuilder {
    pub fn entity_type(mut self, v: impl Into<String>) -> Self {
        self.entity_type = v.into();
        self
    }

    pub fn entity_id(mut self, v: impl Into<String>) -> Self {
        self.entity_id = v.into();
        self
    }

    pub fn user(mut self, v: impl Into<String>) -> Self {
        self.user = v.into();
        self
    }

    pub fn timestamp(mut self, v: DateTime<Utc>) -> Self {
        self.timestamp = Some(v);
        self
    }

    pub fn method(mut self, v: Method) -> Self {
        self.method = v;
        self
    }

    pub fn path(mut self, v: impl Into<String>) -> Self {
        self.path = v.into();
        self
    }

    pub fn headers(mut self, v: MultiValueMap) -> Self {
        self.headers = v;
        self
    }

    pub fn query_params(mut self, v: MultiValueMap) -> Self {
        self.query_params = v;
        self
    }

    pub fn body(mut self, v: impl Into<String>) -> Self {
        self.body = Some(v.into());
        self
    }

    pub fn build(self) -> HttpCommand {
        HttpCommand {
            entity_type: self.entity_type,
            entity_id: self.entity_id,
            user: self.user,
            timestamp: self.timestamp.unwrap_or_else(Utc::now),
            method: self.method,
            path: self.path,
            headers: self.headers,
            query_params: self.query_params,
            body: self.body,
        }
    }
}
