use thiserror::Error;

/// Errors produced by the notification pipeline.
///
/// The first four variants fail the invocation when they reach the handler.
/// `Publish` is the one the handler deliberately swallows: a lost
/// notification must not make the log-forwarding invocation itself fail.
#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Failed to decode base64 log data: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Failed to decompress log data: {0}")]
    Decompress(#[source] std::io::Error),

    #[error("Failed to parse log payload: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Log payload is missing required fields: {0}")]
    Payload(#[source] serde_json::Error),

    #[error("Failed to publish SNS notification: {0}")]
    Publish(String),
}

// Generic implementation for AWS SDK errors
impl<E, R> From<aws_sdk_sns::error::SdkError<E, R>> for NotificationError
where
    E: std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug,
{
    fn from(error: aws_sdk_sns::error::SdkError<E, R>) -> Self {
        NotificationError::Publish(
            aws_sdk_sns::error::DisplayErrorContext(&error).to_string(),
        )
    }
}
