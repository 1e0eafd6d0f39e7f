/// DMS Events Notification - a Lambda function that alerts operators when an
/// AWS DMS replication task logs an error pattern.
///
/// A CloudWatch Logs subscription filter matches the error pattern upstream
/// and invokes this function with a compressed, base64-encoded batch of log
/// events. The function runs a linear pipeline:
/// 1. Decode the `awslogs.data` blob (base64 -> gzip -> JSON)
/// 2. Extract the log group/stream identifiers and concatenate the log
///    event messages into a single error string
/// 3. Publish a fixed-template summary to the configured SNS topic
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - SNS for operator notification
/// - flate2/base64 for CloudWatch Logs payload decoding
/// - Tokio for async runtime
///
/// Decode and extraction failures fail the invocation. A publish failure is
/// logged and suppressed: the invocation still reports success. That
/// asymmetry matches the deployed behavior this function replaces.
// Module declarations
pub mod config;
pub mod errors;
pub mod event;
pub mod handler;
pub mod notify;
pub mod payload;

pub use errors::NotificationError;
pub use handler::function_handler;
pub use notify::{Publish, SnsPublisher};

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at the start of the
/// Lambda process.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// dms_events_notification::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
