use crate::config::ApiPeruConfig;
use crate::errors::LookupError;
use crate::models::{DniRecord, LookupEnvelope, LookupKind, RucRecord};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Client-side timeout for the single lookup round trip.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the Peru identification lookup API.
///
/// One POST per lookup; no retries, no caching.
pub struct ApiPeruService {
    client: Client,
    endpoint: String,
    token: String,
}

impl ApiPeruService {
    /// Creates a new `ApiPeruService` from the organization configuration.
    pub fn new(config: &ApiPeruConfig) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                LookupError::Network(format!("Failed to create lookup API client: {}", e))
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Query a RUC (business taxpayer number).
    pub async fn lookup_ruc(&self, ruc: &str) -> Result<RucRecord, LookupError> {
        self.post_lookup(LookupKind::Ruc, ruc).await
    }

    /// Query a DNI (national identity number).
    pub async fn lookup_dni(&self, dni: &str) -> Result<DniRecord, LookupError> {
        self.post_lookup(LookupKind::Dni, dni).await
    }

    /// Perform the POST for the given kind and decode the envelope.
    ///
    /// Any non-success status is a network failure; a body that is not the
    /// expected JSON shape is a decode failure; a parsed envelope without
    /// `success` is a failed lookup.
    async fn post_lookup<T>(&self, kind: LookupKind, number: &str) -> Result<T, LookupError>
    where
        T: DeserializeOwned + Default,
    {
        let url = format!("{}/{}", self.endpoint, kind.endpoint_path());

        tracing::info!("Querying {} lookup for: {}", kind, number);
        // Redact token from logs to prevent credential exposure
        tracing::debug!("Lookup URL: {} (Authorization: Bearer [REDACTED])", url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/json")
            .json(&kind.request_body(number))
            .send()
            .await
            .map_err(LookupError::from)?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Lookup API returned error status {}", status);
            return Err(LookupError::Network(format!(
                "Connection error with the API: status {}",
                status
            )));
        }

        let body = response.text().await.map_err(LookupError::from)?;

        let envelope: LookupEnvelope<T> = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to decode lookup response: {}", e);
            LookupError::ResponseDecode(format!(
                "Could not decode the API response. Check the response received: {}",
                e
            ))
        })?;

        if !envelope.success {
            tracing::warn!("{} lookup for {} reported no success", kind, number);
            return Err(LookupError::LookupFailed(kind));
        }

        tracing::info!("Successfully fetched {} data", kind);
        Ok(envelope.data.unwrap_or_default())
    }
}
