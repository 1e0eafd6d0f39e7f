use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use tracing::error;

use crate::event::{self, CloudWatchLogsEvent};
use crate::notify::{self, Publish};
use crate::payload;

/// Response shape the invoking platform expects on success.
#[derive(Debug, Serialize)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    fn success() -> Result<Self, Error> {
        let body = serde_json::to_string(&serde_json::json!({
            "message": "SNS Event notification was successful."
        }))?;

        Ok(Self {
            status_code: 200,
            body,
        })
    }
}

/// Lambda entry point: decode the log batch, extract the error text, and
/// publish the notification.
///
/// Decode and extraction failures are logged and propagated, failing the
/// invocation so the platform surfaces it. A publish failure is logged and
/// dropped on purpose: the invocation still reports success. Flagged as
/// likely unintended upstream, but preserved until operators decide
/// otherwise.
pub async fn function_handler<P: Publish>(
    publisher: &P,
    event: LambdaEvent<CloudWatchLogsEvent>,
) -> Result<HandlerResponse, Error> {
    let decoded = event::decode_payload(&event.payload).map_err(|e| {
        error!("There was error executing function: {}", e);
        Error::from(e)
    })?;

    let logs = payload::extract_error_logs(decoded).map_err(|e| {
        error!("There was error executing function: {}", e);
        Error::from(e)
    })?;

    let message = notify::format_message(&logs);
    if let Err(e) = publisher.publish(notify::SUBJECT, &message).await {
        error!("An error occurred: {}", e);
    }

    HandlerResponse::success()
}
