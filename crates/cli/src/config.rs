//! Layered settings: defaults < TOML file < DEVCLOCK_* env < flags

use anyhow::{bail, Context, Result};
use config::{Config, Environment, File, FileFormat, Map};
use devclock_sdk::{ClientConfig, DEFAULT_NODE_URL, DEFAULT_REQUEST_TIMEOUT};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

const DEFAULT_CONFIG_PATH: &str = "~/.devclock/config.toml";
const ENV_PREFIX: &str = "DEVCLOCK";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub rpc_url: String,
    pub request_timeout_secs: u64,
}

impl Settings {
    /// Load from defaults, config file and process environment.
    ///
    /// An explicit `path` must exist; the default path is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// `env` replaces the process environment when set
    pub(crate) fn load_with_env(
        path: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> Result<Self> {
        let file = match path {
            Some(path) => File::new(&path.to_string_lossy(), FileFormat::Toml).required(true),
            None => {
                let default_path = shellexpand::tilde(DEFAULT_CONFIG_PATH).into_owned();
                File::new(&default_path, FileFormat::Toml).required(false)
            }
        };

        let settings = Config::builder()
            .set_default("rpc_url", DEFAULT_NODE_URL)?
            .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT.as_secs())?
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(env),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize::<Settings>()
            .context("Invalid configuration")?;

        Ok(settings)
    }

    /// Command-line flags win over everything else
    pub fn with_overrides(mut self, rpc_url: Option<String>, timeout_secs: Option<u64>) -> Self {
        if let Some(url) = rpc_url {
            self.rpc_url = url;
        }
        if let Some(secs) = timeout_secs {
            self.request_timeout_secs = secs;
        }
        self
    }

    /// URL scheme is checked by `DevNodeClient::with_config`
    pub fn validate(&self) -> Result<()> {
        if self.request_timeout_secs == 0 {
            bail!("request_timeout_secs must be greater than zero");
        }
        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            url: self.rpc_url.clone(),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devclock_sdk::{DevNodeClient, SdkError};
    use std::io::Write;

    fn no_env() -> Option<Map<String, String>> {
        Some(Map::new())
    }

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let file = write_config("");

        let settings = Settings::load_with_env(Some(file.path()), no_env()).unwrap();

        assert_eq!(settings.rpc_url, "http://127.0.0.1:8545");
        assert_eq!(settings.request_timeout_secs, 30);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert!(Settings::load_with_env(Some(&path), no_env()).is_err());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = write_config("rpc_url = \"http://localhost:7545\"\n");

        let settings = Settings::load_with_env(Some(file.path()), no_env()).unwrap();

        assert_eq!(settings.rpc_url, "http://localhost:7545");
        assert_eq!(settings.request_timeout_secs, 30);
    }

    #[test]
    fn test_env_overrides_file() {
        let file = write_config("rpc_url = \"http://localhost:7545\"\nrequest_timeout_secs = 5\n");
        let mut env = Map::new();
        env.insert("DEVCLOCK_RPC_URL".to_string(), "http://10.0.0.2:8545".to_string());

        let settings = Settings::load_with_env(Some(file.path()), Some(env)).unwrap();

        assert_eq!(settings.rpc_url, "http://10.0.0.2:8545");
        assert_eq!(settings.request_timeout_secs, 5);
    }

    #[test]
    fn test_env_timeout_parsed() {
        let file = write_config("");
        let mut env = Map::new();
        env.insert("DEVCLOCK_REQUEST_TIMEOUT_SECS".to_string(), "12".to_string());

        let settings = Settings::load_with_env(Some(file.path()), Some(env)).unwrap();

        assert_eq!(settings.rpc_url, DEFAULT_NODE_URL);
        assert_eq!(settings.request_timeout_secs, 12);
    }

    #[test]
    fn test_flags_override_everything() {
        let file = write_config("rpc_url = \"http://localhost:7545\"\n");
        let settings = Settings::load_with_env(Some(file.path()), no_env())
            .unwrap()
            .with_overrides(Some("http://127.0.0.1:9999".to_string()), Some(3));

        assert_eq!(settings.rpc_url, "http://127.0.0.1:9999");
        assert_eq!(settings.client_config().request_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_validate() {
        let ok = Settings {
            rpc_url: DEFAULT_NODE_URL.to_string(),
            request_timeout_secs: 30,
        };
        assert!(ok.validate().is_ok());

        let zero_timeout = Settings {
            request_timeout_secs: 0,
            ..ok
        };
        assert!(zero_timeout
            .validate()
            .unwrap_err()
            .to_string()
            .contains("greater than zero"));
    }

    #[test]
    fn test_bad_scheme_rejected_by_client() {
        let settings = Settings {
            rpc_url: "ws://127.0.0.1:8545".to_string(),
            request_timeout_secs: 30,
        };

        assert!(settings.validate().is_ok());
        assert!(matches!(
            DevNodeClient::with_config(settings.client_config()),
            Err(SdkError::InvalidUrl(_))
        ));
    }
}
