// Convert Cognito Identity Provider results into plain JSON maps for API responses.

use aws_sdk_cognitoidentityprovider::operation::initiate_auth::InitiateAuthOutput;
use aws_sdk_cognitoidentityprovider::types::AuthenticationResultType;
use serde_json::{Map, Value};

pub const ACCESS_TOKEN: &str = "accessToken";
pub const ID_TOKEN: &str = "idToken";
pub const REFRESH_TOKEN: &str = "refreshToken";
pub const TOKEN_TYPE: &str = "tokenType";
pub const EXPIRES_IN: &str = "expiresIn";

/// Map the five token fields of an authentication result. `None` gives an empty map;
/// tokens missing on the result are kept as `null`.
pub fn authentication_result_to_map(
    result: Option<&AuthenticationResultType>,
) -> Map<String, Value> {
    let mut map = Map::new();
    let Some(result) = result else {
        return map;
    };

    map.insert(ACCESS_TOKEN.to_string(), optional_string(result.access_token()));
    map.insert(ID_TOKEN.to_string(), optional_string(result.id_token()));
    map.insert(REFRESH_TOKEN.to_string(), optional_string(result.refresh_token()));
    map.insert(TOKEN_TYPE.to_string(), optional_string(result.token_type()));
    map.insert(EXPIRES_IN.to_string(), Value::from(result.expires_in()));
    map
}

/// Shape of a login response: the challenge (if any) plus the tokens (if issued).
pub fn initiate_auth_to_map(output: &InitiateAuthOutput) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(
        "challengeName".to_string(),
        optional_string(output.challenge_name().map(|c| c.as_str())),
    );
    map.insert("session".to_string(), optional_string(output.session()));

    if let Some(result) = output.authentication_result() {
        map.insert(
            "authenticationResult".to_string(),
            Value::Object(authentication_result_to_map(Some(result))),
        );
    }
    map
}

fn optional_string(value: Option<&str>) -> Value {
    value.map_or(Value::Null, |v| Value::String(v.to_string()))
}
