// Cognito user pool login through the Identity Provider API.
//
// Boundaries
// - Validates input and maps SDK failures; the response shape lives in core::authentication_result.

use std::fmt::Debug;

use aws_sdk_cognitoidentityprovider::Client;
use aws_sdk_cognitoidentityprovider::error::SdkError;
use aws_sdk_cognitoidentityprovider::operation::initiate_auth::InitiateAuthError;
use aws_sdk_cognitoidentityprovider::types::AuthFlowType;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::modules::cognito::core::authentication_result::initiate_auth_to_map;
use crate::shared::errors::api_error::ApiError;

#[derive(Debug, Error)]
pub enum CognitoError {
    #[error("'username' and 'password' are required")]
    MissingCredentials,

    #[error("Incorrect username or password")]
    InvalidCredentials,

    #[error("cognito request failed: {0}")]
    Service(String),
}

impl From<CognitoError> for ApiError {
    fn from(err: CognitoError) -> Self {
        match err {
            CognitoError::MissingCredentials | CognitoError::InvalidCredentials => {
                ApiError::bad_request(err.to_string())
            }
            CognitoError::Service(_) => ApiError::Internal(err.into()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CognitoIdentityProvider {
    client: Client,
    client_id: String,
}

impl CognitoIdentityProvider {
    pub fn new(client: Client, client_id: impl Into<String>) -> Self {
        Self {
            client,
            client_id: client_id.into(),
        }
    }

    /// `USER_PASSWORD_AUTH` login against the configured app client.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Map<String, Value>, CognitoError> {
        if username.is_empty() || password.is_empty() {
            return Err(CognitoError::MissingCredentials);
        }

        let output = self
            .client
            .initiate_auth()
            .auth_flow(AuthFlowType::UserPasswordAuth)
            .client_id(&self.client_id)
            .auth_parameters("USERNAME", username)
            .auth_parameters("PASSWORD", password)
            .send()
            .await
            .map_err(map_initiate_auth_error)?;

        tracing::debug!(challenge = ?output.challenge_name(), "cognito login completed");
        Ok(initiate_auth_to_map(&output))
    }
}

fn map_initiate_auth_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<InitiateAuthError, R>,
) -> CognitoError {
    match err.into_service_error() {
        InitiateAuthError::NotAuthorizedException(_) => CognitoError::InvalidCredentials,
        err => CognitoError::Service(format!("InitiateAuth failed: {err:?}")),
    }
}

#[cfg(test)]
mod cognito_identity_provider_tests {
    use super::*;
    use crate::shared::errors::http_status_error::HttpStatusError;
    use aws_sdk_cognitoidentityprovider::config::{BehaviorVersion, Config, Region};
    use aws_sdk_cognitoidentityprovider::types::error::{
        NotAuthorizedException, TooManyRequestsException,
    };
    use axum::http::StatusCode;
    use rstest::{fixture, rstest};

    #[fixture]
    fn provider() -> CognitoIdentityProvider {
        let config = Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .build();
        CognitoIdentityProvider::new(Client::from_conf(config), "client-0001")
    }

    #[rstest]
    #[case("", "secret")]
    #[case("user@example.com", "")]
    #[tokio::test]
    async fn it_should_reject_missing_credentials_before_calling_cognito(
        provider: CognitoIdentityProvider,
        #[case] username: &str,
        #[case] password: &str,
    ) {
        let result = provider.login(username, password).await;
        assert!(matches!(result, Err(CognitoError::MissingCredentials)));
    }

    #[rstest]
    #[case(CognitoError::MissingCredentials, StatusCode::BAD_REQUEST)]
    #[case(CognitoError::InvalidCredentials, StatusCode::BAD_REQUEST)]
    #[case(CognitoError::Service("throttled".into()), StatusCode::INTERNAL_SERVER_ERROR)]
    fn it_should_map_to_api_errors(#[case] error: CognitoError, #[case] expected: StatusCode) {
        assert_eq!(ApiError::from(error).status_code(), expected);
    }

    #[rstest]
    fn it_should_keep_the_user_facing_message() {
        let api_error = ApiError::from(CognitoError::InvalidCredentials);
        assert_eq!(api_error.to_string(), "Incorrect username or password");
    }

    #[rstest]
    fn it_should_map_not_authorized_to_invalid_credentials() {
        let err = SdkError::service_error(
            InitiateAuthError::NotAuthorizedException(
                NotAuthorizedException::builder()
                    .message("Incorrect username or password.")
                    .build(),
            ),
            (),
        );

        let mapped = map_initiate_auth_error(err);

        assert!(matches!(mapped, CognitoError::InvalidCredentials));
        let api_error = ApiError::from(mapped);
        assert_eq!(api_error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(api_error.to_string(), "Incorrect username or password");
    }

    #[rstest]
    fn it_should_map_other_service_errors_to_internal() {
        let err = SdkError::service_error(
            InitiateAuthError::TooManyRequestsException(
                TooManyRequestsException::builder().message("slow down").build(),
            ),
            (),
        );

        let mapped = map_initiate_auth_error(err);

        assert!(
            matches!(&mapped, CognitoError::Service(m) if m.starts_with("InitiateAuth failed"))
        );
        assert_eq!(
            ApiError::from(mapped).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[rstest]
    fn it_should_map_transport_failures_to_internal() {
        let err: SdkError<InitiateAuthError, ()> = SdkError::construction_failure("no endpoint");

        assert!(matches!(
            map_initiate_auth_error(err),
            CognitoError::Service(_)
        ));
    }
}
