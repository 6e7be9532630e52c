//! HTTP client for the Opik REST API.

use url::Url;

use crate::{
    classify::classify,
    config::ClientConfig,
    model::{decode_str, Frozen, Model},
    types::{DatasetItemPublic, ExperimentItemPublic, ProviderApiKeyPublic},
    Error,
};

/// HTTP client for the Opik REST API.
///
/// Non-success responses are turned into [`crate::ApiError`] by the
/// classifier; success bodies are decoded into frozen records. Each request
/// builds a fresh `reqwest::Client` with the configured timeout.
pub struct Client {
    config: ClientConfig,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a client configured from the environment (see [`ClientConfig::from_env`]).
    pub fn new() -> Self {
        Self::from_config(ClientConfig::from_env())
    }

    pub fn from_config(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::from_config(ClientConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..ClientConfig::default()
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Appends `segments` to the base URL, percent-encoding each one.
    fn get_url(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = Url::parse(&self.config.base_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", self.config.base_url, e);
            Error::RequestFailed
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                tracing::error!("Base URL cannot carry a path: {}", self.config.base_url);
                Error::RequestFailed
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T: Model>(&self, segments: &[&str]) -> Result<Frozen<T>, Error> {
        let url = self.get_url(segments)?;
        let client = reqwest::Client::builder()
            .timeout(self.config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        tracing::debug!("GET {}", url);
        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            tracing::error!(
                "Request failed with status {}: {}",
                status,
                truncate_body(&body)
            );
            return Err(Error::Api(classify(status.as_u16(), &body)));
        }

        decode_str::<T>(&body).map_err(|e| {
            tracing::error!(
                "Failed to decode {}: {} | body: {}",
                T::schema().name,
                e,
                truncate_body(&body)
            );
            Error::Schema(e)
        })
    }

    /// Fetches a single dataset item by its ID.
    pub async fn get_dataset_item(
        &self,
        item_id: &str,
    ) -> Result<Frozen<DatasetItemPublic>, Error> {
        self.get(&["v1", "private", "datasets", "items", item_id])
            .await
    }

    /// Fetches a single experiment item by its ID.
    pub async fn get_experiment_item(
        &self,
        item_id: &str,
    ) -> Result<Frozen<ExperimentItemPublic>, Error> {
        self.get(&["v1", "private", "experiments", "items", item_id])
            .await
    }

    /// Fetches a stored LLM provider key by its ID.
    pub async fn get_provider_api_key(
        &self,
        key_id: &str,
    ) -> Result<Frozen<ProviderApiKeyPublic>, Error> {
        self.get(&["v1", "private", "llm-provider-key", key_id])
            .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
