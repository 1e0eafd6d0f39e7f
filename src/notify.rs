use async_trait::async_trait;
use tracing::info;

use crate::errors::NotificationError;
use crate::payload::ErrorLogs;

/// Subject line for every notification.
pub const SUBJECT: &str = "Error for DMS Task";

/// Destination for formatted notifications.
///
/// The handler takes this as a trait so tests can observe the publish call
/// and simulate delivery failures without an SNS endpoint.
#[async_trait]
pub trait Publish {
    async fn publish(&self, subject: &str, message: &str) -> Result<(), NotificationError>;
}

/// Publishes notifications to an SNS topic.
pub struct SnsPublisher {
    client: aws_sdk_sns::Client,
    topic_arn: String,
}

impl SnsPublisher {
    pub fn new(client: aws_sdk_sns::Client, topic_arn: String) -> Self {
        Self { client, topic_arn }
    }
}

#[async_trait]
impl Publish for SnsPublisher {
    async fn publish(&self, subject: &str, message: &str) -> Result<(), NotificationError> {
        self.client
            .publish()
            .target_arn(&self.topic_arn)
            .subject(subject)
            .message(message)
            .send()
            .await?;

        info!(topic_arn = %self.topic_arn, "published DMS task error notification");
        Ok(())
    }
}

/// Renders the notification body.
///
/// The layout is fixed and the error text is split on newlines and embedded
/// as a Debug-formatted list, matching the message operators already have
/// alerting rules against.
pub fn format_message(logs: &ErrorLogs) -> String {
    let error_lines: Vec<&str> = logs.error_message.split('\n').collect();

    let mut message = String::new();
    message.push_str("\nDMS Task Error Summary\n\n");
    message.push_str("##########################################################\n");
    message.push_str(&format!(
        "# Replication Instance: {}\n",
        logs.replication_instance
    ));
    message.push_str(&format!("# DMS Task: {}\n", logs.dms_task));
    message.push_str("# Error Message: \n");
    message.push_str(&format!("# {:?}\n", error_lines));
    message.push_str("##########################################################\n");

    message
}
