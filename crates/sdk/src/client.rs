//! Dev Node Client Implementation

use crate::error::{Result, SdkError};
use crate::types::{ClientConfig, PositionalParams};
use async_trait::async_trait;
use devclock_core::{AdvanceReport, DevMethod, NodeRpc, Seconds, TimeAdvancer};
use jsonrpsee::core::client::ClientT;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use serde_json::Value;
use tracing::debug;

/// JSON-RPC client for a local development node
///
/// # Example
///
/// ```no_run
/// use devclock_sdk::{DevNodeClient, Seconds};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = DevNodeClient::connect("http://127.0.0.1:8545")?;
/// client.advancer().advance(Seconds::ONE_HOUR).await?;
/// # Ok(())
/// # }
/// ```
pub struct DevNodeClient {
    client: HttpClient,
    url: String,
}

impl DevNodeClient {
    /// Connect to a development node with the default request timeout
    ///
    /// No request is sent here; an unreachable node surfaces on the first call.
    ///
    /// # Arguments
    ///
    /// * `url` - RPC endpoint URL (e.g., `http://127.0.0.1:8545`)
    pub fn connect(url: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig {
            url: url.into(),
            ..Default::default()
        })
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let url = config.url;

        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(SdkError::InvalidUrl(format!(
                "{} (expected http:// or https://)",
                url
            )));
        }

        let client = HttpClientBuilder::default()
            .request_timeout(config.request_timeout)
            .build(&url)
            .map_err(|e| SdkError::Transport(format!("failed to create client: {}", e)))?;

        debug!(url = %url, timeout = ?config.request_timeout, "Dev node client created");

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Time advancer borrowing this client
    pub fn advancer(&self) -> TimeAdvancer<&Self> {
        TimeAdvancer::new(self)
    }

    async fn request(&self, method: DevMethod, params: Vec<Value>) -> Result<Value> {
        let response: Value = self
            .client
            .request(method.as_str(), PositionalParams(params))
            .await?;

        Ok(response)
    }
}

#[async_trait]
impl NodeRpc for DevNodeClient {
    async fn call(&self, method: DevMethod, params: Vec<Value>) -> devclock_core::Result<Value> {
        self.request(method, params).await.map_err(Into::into)
    }
}

/// Advance the node at `url` by `seconds` and mine one block.
///
/// The connection lives only for this call.
///
/// # Example
///
/// ```no_run
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// devclock_sdk::advance_time("http://127.0.0.1:8545", 480u64).await?;
/// # Ok(())
/// # }
/// ```
pub async fn advance_time(url: impl Into<String>, seconds: impl Into<Seconds>) -> Result<AdvanceReport> {
    let client = DevNodeClient::connect(url)?;
    let report = client.advancer().advance(seconds.into()).await?;

    Ok(report)
}
