use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::NotificationError;

/// Decoded CloudWatch Logs payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogPayload {
    pub log_group: String,
    pub log_stream: String,
    pub log_events: Vec<LogEvent>,
}

/// A single log line from the subscription filter batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    pub message: String,
}

/// Log identifiers and error text extracted from a [`LogPayload`].
///
/// For DMS subscription filters the log group names the replication
/// instance and the log stream names the task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLogs {
    pub replication_instance: String,
    pub dms_task: String,
    pub error_message: String,
}

/// Pulls the group/stream identifiers out of the decoded payload and
/// concatenates every log event message, in order, with no separators.
///
/// Returns [`NotificationError::Payload`] when `logGroup`, `logStream`,
/// `logEvents`, or an event `message` field is absent.
pub fn extract_error_logs(payload: serde_json::Value) -> Result<ErrorLogs, NotificationError> {
    debug!("decoded payload: {}", payload);

    let payload: LogPayload =
        serde_json::from_value(payload).map_err(NotificationError::Payload)?;

    debug!("log group: {}", payload.log_group);
    debug!("log stream: {}", payload.log_stream);

    let mut error_message = String::new();
    for log_event in &payload.log_events {
        error_message.push_str(&log_event.message);
    }

    Ok(ErrorLogs {
        replication_instance: payload.log_group,
        dms_task: payload.log_stream,
        error_message,
    })
}
