// Opaque "next token" for paginated DynamoDB queries.
//
// A query's LastEvaluatedKey is flattened to a name -> string map, JSON encoded and
// then base64 encoded. The reverse direction rebuilds an ExclusiveStartKey with
// string attributes.

use std::collections::{BTreeMap, HashMap};

use aws_sdk_dynamodb::types::AttributeValue;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

use crate::shared::errors::api_error::ApiError;

#[derive(Debug, Error)]
pub enum PaginationTokenError {
    #[error("attribute '{name}' cannot be part of a pagination key")]
    UnsupportedAttribute { name: String },

    #[error("Invalid Next token")]
    InvalidToken,
}

impl From<PaginationTokenError> for ApiError {
    fn from(err: PaginationTokenError) -> Self {
        match err {
            PaginationTokenError::InvalidToken => ApiError::bad_request(err.to_string()),
            PaginationTokenError::UnsupportedAttribute { .. } => ApiError::Internal(err.into()),
        }
    }
}

/// String form of every attribute in a key map.
pub fn attribute_values_to_strings(
    attributes: &HashMap<String, AttributeValue>,
) -> Result<BTreeMap<String, String>, PaginationTokenError> {
    attributes
        .iter()
        .map(|(name, value)| {
            let text = match value {
                AttributeValue::S(s) => s.clone(),
                AttributeValue::N(n) => n.clone(),
                AttributeValue::Bool(b) => b.to_string(),
                AttributeValue::B(blob) => STANDARD.encode(blob.as_ref()),
                _ => {
                    return Err(PaginationTokenError::UnsupportedAttribute { name: name.clone() });
                }
            };
            Ok((name.clone(), text))
        })
        .collect()
}

pub fn map_to_base64(map: &BTreeMap<String, String>) -> String {
    // A string map always serializes.
    let json = serde_json::to_string(map).unwrap_or_default();
    STANDARD.encode(json)
}

pub fn attribute_values_to_token(
    attributes: &HashMap<String, AttributeValue>,
) -> Result<String, PaginationTokenError> {
    Ok(map_to_base64(&attribute_values_to_strings(attributes)?))
}

/// Rebuild a start key from a token. No token (or an empty one) means "first page".
pub fn token_to_attribute_values(
    token: Option<&str>,
) -> Result<Option<HashMap<String, AttributeValue>>, PaginationTokenError> {
    let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(None);
    };

    let bytes = STANDARD
        .decode(token)
        .map_err(|_| PaginationTokenError::InvalidToken)?;
    let map: BTreeMap<String, String> =
        serde_json::from_slice(&bytes).map_err(|_| PaginationTokenError::InvalidToken)?;

    Ok(Some(
        map.into_iter()
            .map(|(name, value)| (name, AttributeValue::S(value)))
            .collect(),
    ))
}
