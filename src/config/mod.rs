#[cfg(feature = "cli")]
pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};

pub const DEFAULT_ENDPOINT: &str = "https://script-ai-worker.femivideograph.workers.dev/process";

/// Fixed endpoint configuration, used when no CLI is involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    pub endpoint: String,
}

impl EndpointConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl ConfigProvider for EndpointConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Validate for EndpointConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)
    }
}
