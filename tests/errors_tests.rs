use std::error::Error;

use dms_events_notification::errors::NotificationError;

#[test]
fn test_notification_error_implements_error_trait() {
    // Verify NotificationError implements the Error trait
    fn assert_error<T: Error>(_: &T) {}

    let error = NotificationError::Publish("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_notification_error_display() {
    // Verify Display implementation works correctly
    let error = NotificationError::Publish("topic not found".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to publish SNS notification: topic not found"
    );

    let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error = NotificationError::Parse(parse_err);
    assert!(format!("{error}").starts_with("Failed to parse log payload:"));

    let io_err = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad gzip header");
    let error = NotificationError::Decompress(io_err);
    assert_eq!(
        format!("{error}"),
        "Failed to decompress log data: bad gzip header"
    );
}

#[test]
fn test_notification_error_from_base64() {
    use base64::Engine as _;

    let decode_err = base64::engine::general_purpose::STANDARD
        .decode("not base64!!!")
        .unwrap_err();
    let error: NotificationError = decode_err.into();

    assert!(matches!(error, NotificationError::Base64(_)));
    assert!(format!("{error}").starts_with("Failed to decode base64 log data:"));
}

#[test]
fn test_payload_error_preserves_source() {
    let missing = serde_json::from_value::<std::collections::HashMap<String, String>>(
        serde_json::json!(42),
    )
    .unwrap_err();
    let error = NotificationError::Payload(missing);

    assert!(error.source().is_some());
}
