//! devclock SDK - Dev Node Client Library
//!
//! Advances the clock of a local development node (Hardhat, Anvil, Ganache)
//! over JSON-RPC: `evm_increaseTime [seconds]` followed by `evm_mine []`.
//!
//! # Example
//!
//! ```no_run
//! use devclock_sdk::{DevNodeClient, Seconds};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DevNodeClient::connect("http://127.0.0.1:8545")?;
//!
//!     let report = client.advancer().advance(Seconds::new(480)).await?;
//!     println!("increaseTime -> {}", report.increase_time);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::{advance_time, DevNodeClient};
pub use devclock_core::{AdvanceReport, BlockTimestamp, ClockError, Seconds, TimeAdvancer};
pub use error::{Result, SdkError};
pub use types::{ClientConfig, DEFAULT_NODE_URL, DEFAULT_REQUEST_TIMEOUT};
