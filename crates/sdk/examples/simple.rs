//! Simple SDK Example
//!
//! Advances a local dev node by the sample 480 seconds and prints the new
//! latest-block timestamp.
//!
//! # Usage
//!
//! 1. Start a dev node:
//!    ```bash
//!    anvil            # or: npx hardhat node
//!    ```
//!
//! 2. Run this example:
//!    ```bash
//!    cargo run --package devclock-sdk --example simple
//!    ```

use devclock_sdk::{DevNodeClient, Seconds, DEFAULT_NODE_URL};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("devclock SDK - Simple Example");
    println!("=============================\n");

    // 1. Connect
    let client = DevNodeClient::connect(DEFAULT_NODE_URL)?;
    let advancer = client.advancer();

    let before = advancer.latest_block_timestamp().await?;
    println!("1. Latest block timestamp: {}", before);

    // 2. Advance by the default 480s (8 minutes, not an hour)
    let report = advancer.advance(Seconds::new(480)).await?;
    println!("2. Advanced by {}s", report.seconds);
    println!("     - evm_increaseTime -> {}", report.increase_time);
    println!("     - evm_mine         -> {}", report.mine);

    // 3. Observe
    let after = advancer.latest_block_timestamp().await?;
    println!("3. Latest block timestamp: {}", after);
    println!(
        "     - delta: {}s",
        after.unix_secs().saturating_sub(before.unix_secs())
    );

    Ok(())
}
