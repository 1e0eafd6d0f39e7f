use std::io::Read;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use flate2::read::GzDecoder;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::NotificationError;

/// Invocation event delivered by a CloudWatch Logs subscription filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudWatchLogsEvent {
    pub awslogs: AwsLogs,
}

/// The compressed, base64-encoded log batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwsLogs {
    pub data: String,
}

/// Decodes the `awslogs.data` blob: base64 -> gzip -> JSON.
///
/// Each stage maps to its own error variant so a malformed event is
/// distinguishable from a corrupt or truncated one in the logs.
pub fn decode_payload(event: &CloudWatchLogsEvent) -> Result<serde_json::Value, NotificationError> {
    debug!("raw log data: {}", event.awslogs.data);

    let compressed = STANDARD.decode(&event.awslogs.data)?;

    let mut decoder = GzDecoder::new(&compressed[..]);
    let mut json = String::new();
    decoder
        .read_to_string(&mut json)
        .map_err(NotificationError::Decompress)?;

    serde_json::from_str(&json).map_err(NotificationError::Parse)
}
