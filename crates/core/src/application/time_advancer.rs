//! Time Advancer
//!
//! Moves a development node's clock forward and mines a block so the new
//! time is visible to subsequent reads.
//!
//! Sequence (fixed, no branching):
//! 1. `evm_increaseTime [seconds]`
//! 2. `evm_mine []` (only after step 1 succeeded)
//!
//! Failures are not retried and no partial result is returned.

use crate::domain::{BlockTimestamp, DevMethod, Seconds};
use crate::error::Result;
use crate::port::NodeRpc;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info};

/// Raw results of one advance, as returned by the node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvanceReport {
    pub seconds: Seconds,
    /// Result of `evm_increaseTime` (Hardhat/Anvil return the total offset)
    pub increase_time: Value,
    /// Result of `evm_mine` (usually `"0x0"`)
    pub mine: Value,
}

/// Advances the clock of the node behind `R`
pub struct TimeAdvancer<R> {
    rpc: R,
}

impl<R: NodeRpc> TimeAdvancer<R> {
    pub fn new(rpc: R) -> Self {
        Self { rpc }
    }

    /// Advance the node clock by `seconds`, then mine one block.
    ///
    /// `Seconds::ZERO` still issues both calls.
    pub async fn advance(&self, seconds: Seconds) -> Result<AdvanceReport> {
        info!(seconds = seconds.get(), "Advancing node clock");

        let increase_time = self.send(DevMethod::IncreaseTime, vec![json!(seconds)]).await?;
        let mine = self.mine().await?;

        info!(seconds = seconds.get(), "Node clock advanced and block mined");

        Ok(AdvanceReport {
            seconds,
            increase_time,
            mine,
        })
    }

    /// Mine a single block
    pub async fn mine(&self) -> Result<Value> {
        self.send(DevMethod::Mine, Vec::new()).await
    }

    /// Timestamp of the node's latest block
    pub async fn latest_block_timestamp(&self) -> Result<BlockTimestamp> {
        let block = self
            .send(DevMethod::GetBlockByNumber, vec![json!("latest"), json!(false)])
            .await?;

        BlockTimestamp::from_block(&block)
    }

    async fn send(&self, method: DevMethod, params: Vec<Value>) -> Result<Value> {
        debug!(method = %method, params = ?params, "RPC request");
        let result = self.rpc.call(method, params).await;

        match &result {
            Ok(value) => debug!(method = %method, result = %value, "RPC response"),
            Err(e) => debug!(method = %method, error = %e, "RPC failed"),
        }

        result
    }
}
