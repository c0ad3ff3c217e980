use crate::errors::LookupError;
use serde::Deserialize;

/// Default lookup API endpoint, used when the organization has not
/// overridden it.
pub const DEFAULT_ENDPOINT: &str = "https://apiperu.dev";

/// Per-organization lookup API configuration.
///
/// Owned and edited by the host platform's administrators; read-only to the
/// lookup handler.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiPeruConfig {
    /// Base URL of the lookup service.
    pub endpoint: String,
    /// Bearer token issued by the lookup service.
    pub token: String,
}

impl ApiPeruConfig {
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }

    /// Loads configuration from the environment.
    ///
    /// `API_PERU_ENDPOINT` falls back to [`DEFAULT_ENDPOINT`];
    /// `API_PERU_TOKEN` is required.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            endpoint: std::env::var("API_PERU_ENDPOINT")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(|url| {
                    if !url.starts_with("http://") && !url.starts_with("https://") {
                        anyhow::bail!("API_PERU_ENDPOINT must start with http:// or https://");
                    }
                    Ok(url)
                })
                .transpose()?
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            token: std::env::var("API_PERU_TOKEN")
                .map_err(|_| anyhow::anyhow!("API_PERU_TOKEN environment variable required"))
                .and_then(|token| {
                    if token.trim().is_empty() {
                        anyhow::bail!("API_PERU_TOKEN cannot be empty");
                    }
                    Ok(token)
                })?,
        };

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Lookup endpoint: {}", config.endpoint);

        Ok(config)
    }

    /// Checks that both endpoint and token are present before any lookup.
    pub fn ensure_ready(&self) -> Result<(), LookupError> {
        if self.endpoint.trim().is_empty() || self.token.trim().is_empty() {
            return Err(LookupError::Configuration(
                "The API token or the endpoint is not configured for the company".to_string(),
            ));
        }
        Ok(())
    }
}
