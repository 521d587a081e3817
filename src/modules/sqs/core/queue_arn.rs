// Derive a queue ARN from its public queue URL without calling SQS.
//
// https://sqs.<region>.amazonaws.com/<account>/<name> -> arn:aws:sqs:<region>:<account>:<name>

use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueUrlError {
    #[error("invalid queue url '{0}'")]
    Malformed(String),

    #[error("queue url '{0}' must use https")]
    NotHttps(String),

    #[error("queue url '{0}' has no region in its host")]
    MissingRegion(String),

    #[error("queue url '{0}' must end with /<account>/<queue name>")]
    MissingPath(String),
}

pub fn queue_url_to_arn(queue_url: &str) -> Result<String, QueueUrlError> {
    let url = Url::parse(queue_url).map_err(|_| QueueUrlError::Malformed(queue_url.to_string()))?;
    if url.scheme() != "https" {
        return Err(QueueUrlError::NotHttps(queue_url.to_string()));
    }

    let region = url
        .host_str()
        .and_then(|host| host.split('.').nth(1))
        .filter(|region| !region.is_empty())
        .ok_or_else(|| QueueUrlError::MissingRegion(queue_url.to_string()))?;

    let (account, queue_name) = url
        .path()
        .trim_start_matches('/')
        .split_once('/')
        .filter(|(account, name)| !account.is_empty() && !name.is_empty())
        .ok_or_else(|| QueueUrlError::MissingPath(queue_url.to_string()))?;

    Ok(format!("arn:aws:sqs:{region}:{account}:{queue_name}"))
}
