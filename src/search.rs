// Travel search service client

use async_trait::async_trait;
use serde_json::Value;

use crate::config::{is_configured, TravelSearchConfig};
use crate::error::{ApiError, ClientError};
use crate::params::SearchParams;
use crate::transport::{build_http_client, send_json};

/// The remote hotel search. Returns the raw, untyped response body.
#[async_trait]
pub trait SearchService: Send + Sync {
    async fn search(&self, params: &SearchParams) -> Result<Value, ApiError>;
}

pub struct TravelSearchClient {
    client: reqwest::Client,
    config: TravelSearchConfig,
}

impl TravelSearchClient {
    pub fn new(config: TravelSearchConfig) -> Result<Self, ClientError> {
        if !is_configured(&config.application_id) {
            return Err(ClientError::ConfigError(
                "travel search application id is empty".to_string(),
            ));
        }
        let client = build_http_client(&config.http)?;
        Ok(Self { client, config })
    }

    /// Fixed identification parameters followed by the caller's fields.
    pub fn query_pairs(&self, params: &SearchParams) -> Vec<(String, String)> {
        let mut pairs = vec![
            (
                "applicationId".to_string(),
                self.config.application_id.clone(),
            ),
            ("format".to_string(), "json".to_string()),
            ("formatVersion".to_string(), "1".to_string()),
        ];
        pairs.extend(
            params
                .to_query_pairs()
                .into_iter()
                .filter(|(key, _)| !matches!(key.as_str(), "applicationId" | "format" | "formatVersion")),
        );
        pairs
    }
}

#[async_trait]
impl SearchService for TravelSearchClient {
    async fn search(&self, params: &SearchParams) -> Result<Value, ApiError> {
        let pairs = self.query_pairs(params);
        let config = &self.config;

        tracing::debug!(endpoint = %config.endpoint, params = pairs.len(), "sending hotel search");

        send_json(&config.http, "travel_search", || {
            self.client.get(&config.endpoint).query(&pairs)
        })
        .await
    }
}
