//! Runtime configuration for the HTTP service.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use crate::hashtagger::{HashtagGenerator, HashtagGeneratorBuilder};
use crate::models::DEFAULT_MODEL;
use crate::ollama::{OllamaClientBuilder, OllamaError};

/// Address the service listens on by default.
pub const DEFAULT_ADDR: &str = "0.0.0.0:5000";

/// Process-wide settings, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket address to bind.
    pub addr: SocketAddr,
    /// Ollama base URL; `None` defers to `OLLAMA_HOST` or the built-in default.
    pub ollama_url: Option<String>,
    /// Model used when a request does not name one.
    pub default_model: String,
    /// Timeout applied to each gateway attempt.
    pub timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            ollama_url: None,
            default_model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

impl ServerConfig {
    /// Builds the shared generator described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns `OllamaError::InvalidUrl` if the Ollama URL is malformed.
    pub fn build_generator(&self) -> Result<Arc<HashtagGenerator>, OllamaError> {
        let mut builder = OllamaClientBuilder::new().timeout(self.timeout);
        if let Some(url) = &self.ollama_url {
            builder = builder.base_url(url);
        }
        let client = builder.build()?;

        Ok(Arc::new(
            HashtagGeneratorBuilder::new()
                .client(Arc::new(client))
                .default_model(&self.default_model)
                .build(),
        ))
    }
}
