use crate::utils::error::ConfigResult;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Passthrough settings for the blocking HTTP leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpClientConfig {
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

impl HttpClientConfig {
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for HttpClientConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(seconds) = self.timeout_seconds {
            validate_range("timeout_seconds", seconds, 1, 3600)?;
        }
        if let Some(user_agent) = &self.user_agent {
            validate_non_empty_string("user_agent", user_agent)?;
        }
        Ok(())
    }
}
