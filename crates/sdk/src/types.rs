//! SDK Configuration & Wire Types

use jsonrpsee::core::traits::ToRpcParams;
use serde_json::value::RawValue;
use serde_json::Value;
use std::time::Duration;

/// Default endpoint of Hardhat/Anvil/Ganache
pub const DEFAULT_NODE_URL: &str = "http://127.0.0.1:8545";

/// Default per-request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub url: String,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_NODE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

/// Positional params that always serialize as a JSON array.
///
/// jsonrpsee's `rpc_params![]` omits the `params` member when empty; dev
/// nodes expect `evm_mine` to carry `[]`.
pub(crate) struct PositionalParams(pub(crate) Vec<Value>);

impl ToRpcParams for PositionalParams {
    fn to_rpc_params(self) -> Result<Option<Box<RawValue>>, serde_json::Error> {
        serde_json::value::to_raw_value(&self.0).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_params_serialize_as_array() {
        let raw = PositionalParams(Vec::new()).to_rpc_params().unwrap().unwrap();
        assert_eq!(raw.get(), "[]");
    }

    #[test]
    fn test_positional_params() {
        let raw = PositionalParams(vec![json!(480)])
            .to_rpc_params()
            .unwrap()
            .unwrap();
        assert_eq!(raw.get(), "[480]");
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.url, "http://127.0.0.1:8545");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }
}
