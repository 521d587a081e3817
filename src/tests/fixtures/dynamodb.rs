use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;

/// A LastEvaluatedKey as returned by a GSI query over string keys.
pub fn make_last_evaluated_key() -> HashMap<String, AttributeValue> {
    HashMap::from([
        ("PK".to_string(), AttributeValue::S("docs#0001".into())),
        ("SK".to_string(), AttributeValue::S("document".into())),
        ("GSI1PK".to_string(), AttributeValue::S("docts#2024-01-01".into())),
        ("GSI1SK".to_string(), AttributeValue::S("2024-01-01T10:00:00Z".into())),
    ])
}
