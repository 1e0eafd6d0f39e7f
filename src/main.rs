use dms_events_notification::config::AppConfig;
use dms_events_notification::event::CloudWatchLogsEvent;
use dms_events_notification::{SnsPublisher, function_handler, setup_logging};
use lambda_runtime::{Error, LambdaEvent, run, service_fn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_logging();

    let config = AppConfig::from_env().map_err(Error::from)?;
    let aws_config = aws_config::load_from_env().await;
    let sns_client = aws_sdk_sns::Client::new(&aws_config);
    let publisher = SnsPublisher::new(sns_client, config.sns_topic_arn);
    let publisher = &publisher;

    run(service_fn(move |event: LambdaEvent<CloudWatchLogsEvent>| {
        async move { function_handler(publisher, event).await }
    }))
    .await
}
