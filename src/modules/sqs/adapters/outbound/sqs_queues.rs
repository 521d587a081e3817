use aws_sdk_sqs::Client;
use aws_sdk_sqs::types::QueueAttributeName;

use crate::modules::sqs::core::queue_arn::queue_url_to_arn;

#[derive(Debug, Clone)]
pub struct SqsQueues {
    client: Client,
}

impl SqsQueues {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Ask SQS for the queue's `QueueArn` attribute.
    pub async fn queue_arn(&self, queue_url: &str) -> anyhow::Result<String> {
        let output = self
            .client
            .get_queue_attributes()
            .queue_url(queue_url)
            .attribute_names(QueueAttributeName::QueueArn)
            .send()
            .await?;

        output
            .attributes()
            .and_then(|attributes| attributes.get(&QueueAttributeName::QueueArn))
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("queue {queue_url} returned no QueueArn attribute"))
    }

    /// Derive the ARN from the URL when it follows the public pattern, otherwise ask SQS.
    pub async fn resolve_queue_arn(&self, queue_url: &str) -> anyhow::Result<String> {
        match queue_url_to_arn(queue_url) {
            Ok(arn) => Ok(arn),
            Err(e) => {
                tracing::debug!(error = %e, queue_url, "falling back to GetQueueAttributes");
                self.queue_arn(queue_url).await
            }
        }
    }
}

#[cfg(test)]
mod sqs_queues_tests {
    use super::*;
    use aws_sdk_sqs::config::retry::RetryConfig;
    use aws_sdk_sqs::config::{BehaviorVersion, Config, Region};
    use rstest::{fixture, rstest};

    // No credentials and a local endpoint: any request that reaches the SDK fails fast.
    #[fixture]
    fn queues() -> SqsQueues {
        let config = Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .endpoint_url("http://127.0.0.1:9")
            .retry_config(RetryConfig::disabled())
            .build();
        SqsQueues::new(Client::from_conf(config))
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_resolve_a_public_queue_url_without_calling_sqs(queues: SqsQueues) {
        let arn = queues
            .resolve_queue_arn("https://sqs.us-east-2.amazonaws.com/123456789012/MyQueue")
            .await
            .unwrap();

        assert_eq!(arn, "arn:aws:sqs:us-east-2:123456789012:MyQueue");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_ask_sqs_for_other_queue_urls(queues: SqsQueues) {
        let result = queues
            .resolve_queue_arn("http://localhost:4566/000000000000/documents")
            .await;

        assert!(result.is_err());
    }
}
