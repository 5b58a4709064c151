//! Runtime configuration read from the environment

use std::env;

use tracing::warn;

use crate::catalog::CatalogSettings;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STREAM_BASE_URL: &str = "https://music-app-stream.example.com";
pub const DEFAULT_DOWNLOAD_ROOT: &str = "/downloads";

/// Default `tracing` filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "music_catalog=info,tower_http=info";

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Populate the catalog with demo artists and tracks at startup
    pub seed_mock_data: bool,
    pub stream_base_url: String,
    pub download_root: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed_mock_data: true,
            stream_base_url: DEFAULT_STREAM_BASE_URL.to_string(),
            download_root: DEFAULT_DOWNLOAD_ROOT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `MUSIC_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Unparseable values fall back to the default with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("MUSIC_HOST").filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }

        if let Some(port) = lookup("MUSIC_PORT") {
            match port.trim().parse::<u16>() {
                Ok(port) => config.port = port,
                Err(_) => warn!(value = %port, "Invalid MUSIC_PORT, using {}", DEFAULT_PORT),
            }
        }

        if let Some(seed) = lookup("MUSIC_SEED") {
            match parse_flag(&seed) {
                Some(flag) => config.seed_mock_data = flag,
                None => warn!(value = %seed, "Invalid MUSIC_SEED, seeding stays enabled"),
            }
        }

        if let Some(url) = lookup("MUSIC_STREAM_BASE_URL").filter(|u| !u.trim().is_empty()) {
            config.stream_base_url = url.trim().trim_end_matches('/').to_string();
        }

        if let Some(root) = lookup("MUSIC_DOWNLOAD_DIR").filter(|r| !r.trim().is_empty()) {
            config.download_root = root.trim().trim_end_matches('/').to_string();
        }

        config
    }

    /// Address the HTTP listener binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Locator settings handed to the catalog
    pub fn catalog_settings(&self) -> CatalogSettings {
        CatalogSettings {
            stream_base_url: self.stream_base_url.clone(),
            download_root: self.download_root.clone(),
            ..CatalogSettings::default()
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
