//! reqwest-backed search client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::config::GiphyConfig;
use crate::{GifSearchClient, NodeError};

/// Issues one `GET <endpoint>?api_key=..&q=..&lang=..` per search.
///
/// No retries. Non-2xx statuses and unparseable bodies are errors.
#[derive(Clone)]
pub struct HttpSearchClient {
    client: Client,
    endpoint: String,
    lang: String,
}

impl HttpSearchClient {
    pub fn new(config: &GiphyConfig) -> Result<Self, NodeError> {
        let mut builder = Client::builder().user_agent(concat!("giphy-node/", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| NodeError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            lang: config.lang.clone(),
        })
    }
}

#[async_trait]
impl GifSearchClient for HttpSearchClient {
    async fn search(&self, api_key: &str, query: &str) -> Result<Value, NodeError> {
        debug!(endpoint = %self.endpoint, query, "sending gif search");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("api_key", api_key), ("q", query), ("lang", self.lang.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(NodeError::Transport(format!("giphy returned {status}: {text}")));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| NodeError::MalformedResponse(e.to_string()))
    }
}
