//! Client configuration.
//!
//! Both base URLs are resolved once, at construction, and injected into the
//! connection; nothing re-derives them per call. The constants below are
//! defaults only — deployments override them through a config file or by
//! building a [`ClientConfig`] directly.

use std::path::{Path, PathBuf};

use eyre::{OptionExt, Result, WrapErr};
use serde::{Deserialize, Serialize};
use tokio::fs;
use url::Url;

/// Name of the config file inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

const LOCAL_API_URL: &str = "http://localhost:8000/api";
const LOCAL_INQUIRY_URL: &str = "http://localhost:8000";
const PRODUCTION_API_URL: &str = "https://talenthub-api.onrender.com/api";
const PRODUCTION_INQUIRY_URL: &str = "https://talenthub-api.onrender.com";

/// Base URLs for the two API families.
///
/// `api_url` carries the shared `/api` path prefix; `inquiry_url` is the
/// bare host the inquiry endpoints are addressed under.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ClientConfig {
    pub api_url: Url,
    pub inquiry_url: Url,
}

impl ClientConfig {
    pub const fn new(api_url: Url, inquiry_url: Url) -> Self {
        Self {
            api_url,
            inquiry_url,
        }
    }

    /// Base pair for a backend running on this machine.
    pub fn local() -> Self {
        Self {
            api_url: Url::parse(LOCAL_API_URL).expect("invalid local api url"),
            inquiry_url: Url::parse(LOCAL_INQUIRY_URL).expect("invalid local inquiry url"),
        }
    }

    /// Base pair for the hosted backend.
    pub fn production() -> Self {
        Self {
            api_url: Url::parse(PRODUCTION_API_URL).expect("invalid production api url"),
            inquiry_url: Url::parse(PRODUCTION_INQUIRY_URL).expect("invalid production inquiry url"),
        }
    }

    /// Select the base pair for the host the client is served from:
    /// loopback hosts get the local pair, everything else production.
    pub fn for_host(host: &str) -> Self {
        if host == "localhost" || host == "127.0.0.1" {
            Self::local()
        } else {
            Self::production()
        }
    }

    /// Load from [`CONFIG_FILE`] in the user's config directory, falling
    /// back to the production pair when no file exists.
    pub async fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::production());
        }

        Self::load_from(&path).await
    }

    pub async fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .await
            .wrap_err("Failed to read config file")?;

        toml::from_str(&contents).wrap_err("Failed to parse config file")
    }

    pub async fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path).await
    }

    pub async fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .wrap_err("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).wrap_err("Failed to serialize config")?;

        fs::write(path, contents)
            .await
            .wrap_err("Failed to write config file")?;

        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_eyre("could not find config directory")?;

        Ok(config_dir.join("talenthub").join(CONFIG_FILE))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loopback_hosts_select_the_local_pair() {
        assert_eq!(ClientConfig::for_host("localhost"), ClientConfig::local());
        assert_eq!(ClientConfig::for_host("127.0.0.1"), ClientConfig::local());
    }

    #[test]
    fn other_hosts_select_the_production_pair() {
        assert_eq!(
            ClientConfig::for_host("talenthub.io"),
            ClientConfig::production()
        );
    }

    #[test]
    fn local_api_url_keeps_the_api_prefix() {
        assert_eq!(ClientConfig::local().api_url.path(), "/api");
    }

    #[tokio::test]
    async fn config_round_trips_through_toml() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join(CONFIG_FILE);

        let config = ClientConfig::local();
        config.save_to(&path).await.expect("save failed");

        let loaded = ClientConfig::load_from(&path).await.expect("load failed");
        assert_eq!(loaded, config);
    }
}
