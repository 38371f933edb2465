// Dev-node RPC method names

use serde::{Deserialize, Serialize};

/// RPC methods devclock issues against a development node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DevMethod {
    /// Advance the simulated clock without producing a block
    #[serde(rename = "evm_increaseTime")]
    IncreaseTime,
    /// Produce one block, committing pending time changes
    #[serde(rename = "evm_mine")]
    Mine,
    #[serde(rename = "eth_getBlockByNumber")]
    GetBlockByNumber,
}

impl DevMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DevMethod::IncreaseTime => "evm_increaseTime",
            DevMethod::Mine => "evm_mine",
            DevMethod::GetBlockByNumber => "eth_getBlockByNumber",
        }
    }
}

impl std::fmt::Display for DevMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
