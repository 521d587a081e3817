use axum::http::{HeaderName, Request};
use url::form_urlencoded;

use crate::modules::event_sourcing::core::http_command::{HttpCommand, MultiValueMap};
use crate::modules::event_sourcing::ports::inbound_adapter::InboundAdapter;
use crate::shared::errors::api_error::ApiError;

pub const USER_HEADER: &str = "x-user-id";
pub const ANONYMOUS_USER: &str = "anonymous";

/// Builds an `HttpCommand` for one entity type. The entity id is the last path segment,
/// percent-decoded.
#[derive(Debug, Clone)]
pub struct HttpRequestAdapter {
    entity_type: String,
    user_header: HeaderName,
}

impl HttpRequestAdapter {
    pub fn new(entity_type: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            user_header: HeaderName::from_static(USER_HEADER),
        }
    }

    pub fn with_user_header(mut self, user_header: HeaderName) -> Self {
        self.user_header = user_header;
        self
    }
}

impl InboundAdapter<Request<String>> for HttpRequestAdapter {
    type Command = HttpCommand;

    fn to_command(&self, request: Request<String>) -> Result<HttpCommand, ApiError> {
        let (parts, body) = request.into_parts();
        let path = parts.uri.path().to_string();

        let segment = path
            .rsplit('/')
            .find(|segment| !segment.is_empty())
            .ok_or_else(|| {
                ApiError::bad_request(format!("no {} id in path '{path}'", self.entity_type))
            })?;
        let entity_id = urlencoding::decode(segment)
            .map_err(|_| {
                ApiError::bad_request(format!("invalid {} id '{segment}'", self.entity_type))
            })?
            .into_owned();

        let user = parts
            .headers
            .get(&self.user_header)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .unwrap_or(ANONYMOUS_USER)
            .to_string();

        let mut headers = MultiValueMap::new();
        for (name, value) in &parts.headers {
            match value.to_str() {
                Ok(v) => headers
                    .entry(name.as_str().to_string())
                    .or_default()
                    .push(v.to_string()),
                Err(_) => tracing::debug!(header = %name, "skipping non-ascii header value"),
            }
        }

        let mut query_params = MultiValueMap::new();
        if let Some(query) = parts.uri.query() {
            for (name, value) in form_urlencoded::parse(query.as_bytes()).into_owned() {
                query_params.entry(name).or_default().push(value);
            }
        }

        tracing::debug!(
            entity_type = %self.entity_type,
            entity_id = %entity_id,
            method = %parts.method,
            "built http command"
        );

        let builder = HttpCommand::builder()
            .entity_type(&self.entity_type)
            .entity_id(entity_id)
            .user(user)
            .method(parts.method)
            .path(path)
            .headers(headers)
            .query_params(query_params);

        Ok(if body.is_empty() {
            builder.build()
        } else {
            builder.body(body).build()
        })
    }
}
