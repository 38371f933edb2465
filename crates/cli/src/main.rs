//! devclock - advance a local development node's clock from the shell
//!
//! ```text
//! devclock advance 3600 --verify
//! ```

mod config;
mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use devclock_core::{BlockTimestamp, Seconds};
use devclock_sdk::{AdvanceReport, DevNodeClient};
use std::path::PathBuf;
use tabled::{Table, Tabled};
use tracing::info;

use crate::config::Settings;

#[derive(Parser, Debug)]
#[command(name = "devclock")]
#[command(about = "Advance the clock of a local development node", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// RPC endpoint URL [default: http://127.0.0.1:8545]
    #[arg(long, global = true)]
    rpc_url: Option<String>,

    /// Per-request timeout in seconds [default: 30]
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// TOML config file [default: ~/.devclock/config.toml]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Increase node time, then mine a block
    Advance {
        /// Seconds to add to the node clock
        #[arg(default_value_t = Seconds::default())]
        seconds: Seconds,

        /// Print the latest block timestamp afterwards
        #[arg(long)]
        verify: bool,
    },

    /// Mine one block
    Mine,

    /// Show the latest block timestamp
    Timestamp,
}

#[derive(Tabled)]
struct CallRow {
    #[tabled(rename = "Call")]
    method: &'static str,
    #[tabled(rename = "Params")]
    params: String,
    #[tabled(rename = "Result")]
    result: String,
}

fn report_rows(report: &AdvanceReport) -> Vec<CallRow> {
    vec![
        CallRow {
            method: "evm_increaseTime",
            params: format!("[{}]", report.seconds),
            result: report.increase_time.to_string(),
        },
        CallRow {
            method: "evm_mine",
            params: "[]".to_string(),
            result: report.mine.to_string(),
        },
    ]
}

fn format_timestamp(ts: BlockTimestamp) -> String {
    let utc = i64::try_from(ts.unix_secs())
        .ok()
        .and_then(|secs| chrono::DateTime::from_timestamp(secs, 0));

    match utc {
        Some(dt) => format!("{} ({})", ts, dt.to_rfc3339()),
        None => ts.to_string(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)?;

    let settings = Settings::load(cli.config.as_deref())?.with_overrides(cli.rpc_url, cli.timeout);
    settings.validate()?;

    info!(rpc_url = %settings.rpc_url, "devclock v{}", devclock_core::VERSION);

    let client = DevNodeClient::with_config(settings.client_config())
        .context("Failed to create RPC client")?;
    let advancer = client.advancer();

    match cli.command {
        Commands::Advance { seconds, verify } => {
            let report = advancer
                .advance(seconds)
                .await
                .with_context(|| format!("Failed to advance {} by {}s", client.url(), seconds))?;

            println!(
                "{}",
                format!("✓ Node clock advanced by {}s", report.seconds)
                    .green()
                    .bold()
            );
            println!();
            println!("{}", Table::new(report_rows(&report)));

            if verify {
                let ts = advancer
                    .latest_block_timestamp()
                    .await
                    .context("Failed to read latest block")?;
                println!();
                println!("  {} {}", "Latest block time:".bold(), format_timestamp(ts));
            }
        }

        Commands::Mine => {
            let result = advancer
                .mine()
                .await
                .with_context(|| format!("Failed to mine on {}", client.url()))?;

            println!("{} {}", "✓ Block mined".green().bold(), result);
        }

        Commands::Timestamp => {
            let ts = advancer
                .latest_block_timestamp()
                .await
                .with_context(|| format!("Failed to read latest block from {}", client.url()))?;

            println!("  {} {}", "Latest block time:".bold(), format_timestamp(ts));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_advance_defaults_to_480() {
        let cli = Cli::try_parse_from(["devclock", "advance"]).unwrap();
        match cli.command {
            Commands::Advance { seconds, verify } => {
                assert_eq!(seconds.get(), 480);
                assert!(!verify);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_advance_with_seconds_and_flags() {
        let cli = Cli::try_parse_from([
            "devclock",
            "advance",
            "3600",
            "--verify",
            "--rpc-url",
            "http://localhost:7545",
        ])
        .unwrap();

        assert_eq!(cli.rpc_url.as_deref(), Some("http://localhost:7545"));
        match cli.command {
            Commands::Advance { seconds, verify } => {
                assert_eq!(seconds, Seconds::ONE_HOUR);
                assert!(verify);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_advance_rejects_negative_and_non_numeric() {
        assert!(Cli::try_parse_from(["devclock", "advance", "-5"]).is_err());
        assert!(Cli::try_parse_from(["devclock", "advance", "--", "-5"]).is_err());
        assert!(Cli::try_parse_from(["devclock", "advance", "one-hour"]).is_err());
    }

    #[test]
    fn test_mine_and_timestamp_parse() {
        assert!(matches!(
            Cli::try_parse_from(["devclock", "mine"]).unwrap().command,
            Commands::Mine
        ));
        assert!(matches!(
            Cli::try_parse_from(["devclock", "--timeout", "5", "timestamp"])
                .unwrap()
                .command,
            Commands::Timestamp
        ));
    }

    #[test]
    fn test_report_rows() {
        let report = AdvanceReport {
            seconds: Seconds::new(480),
            increase_time: json!(480),
            mine: json!("0x0"),
        };

        let rows = report_rows(&report);

        assert_eq!(rows[0].method, "evm_increaseTime");
        assert_eq!(rows[0].params, "[480]");
        assert_eq!(rows[1].method, "evm_mine");
        assert_eq!(rows[1].params, "[]");
        assert_eq!(rows[1].result, "\"0x0\"");
    }

    #[test]
    fn test_format_timestamp() {
        let formatted = format_timestamp(BlockTimestamp::new(1_704_110_400));
        assert_eq!(formatted, "1704110400 (2024-01-01T12:00:00+00:00)");
    }
}
