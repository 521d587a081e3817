use aws_config::{BehaviorVersion, SdkConfig};

use crate::modules::cognito::adapters::outbound::cognito_identity_provider::CognitoIdentityProvider;
use crate::modules::sqs::adapters::outbound::sqs_queues::SqsQueues;
use crate::shell::config::Settings;

/// Service adapters sharing one SDK configuration.
#[derive(Debug, Clone)]
pub struct AwsServices {
    /// Present only when a Cognito app client id is configured.
    pub cognito: Option<CognitoIdentityProvider>,
    pub dynamodb: aws_sdk_dynamodb::Client,
    pub sqs: SqsQueues,
}

impl AwsServices {
    /// Load region and credentials from the default provider chain.
    pub async fn load(settings: &Settings) -> Self {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        Self::from_sdk_config(&config, settings)
    }

    pub fn from_sdk_config(config: &SdkConfig, settings: &Settings) -> Self {
        let cognito = settings.cognito_client_id.as_ref().map(|client_id| {
            let client = aws_sdk_cognitoidentityprovider::Client::new(config);
            CognitoIdentityProvider::new(client, client_id)
        });
        if cognito.is_none() {
            tracing::debug!("no Cognito app client configured");
        }

        Self {
            cognito,
            dynamodb: aws_sdk_dynamodb::Client::new(config),
            sqs: SqsQueues::new(aws_sdk_sqs::Client::new(config)),
        }
    }
}
