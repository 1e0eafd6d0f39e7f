use std::env;

/// Runtime configuration, read once at process start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// ARN of the SNS topic notifications are published to.
    pub sns_topic_arn: String,
}

impl AppConfig {
    /// Reads configuration from the environment. The `snsARN` variable name
    /// is kept for compatibility with existing deployments.
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            sns_topic_arn: env::var("snsARN").map_err(|e| format!("snsARN: {}", e))?,
        })
    }
}
