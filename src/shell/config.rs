use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::Context;

pub const STORAGE_PATH_VAR: &str = "JSON_FS_STORAGE_PATH";
pub const HOST_VAR: &str = "HOST";
pub const PORT_VAR: &str = "PORT";
pub const STATIC_DIR_VAR: &str = "STATIC_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage_path: PathBuf,
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from("store.json"),
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8000,
            static_dir: PathBuf::from("client"),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from `lookup`, falling back to defaults for unset or empty keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let host = match get(HOST_VAR) {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("{HOST_VAR} is not an IP address: {raw}"))?,
            None => defaults.host,
        };
        let port = match get(PORT_VAR) {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("{PORT_VAR} is not a port number: {raw}"))?,
            None => defaults.port,
        };

        Ok(Self {
            storage_path: get(STORAGE_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.storage_path),
            host,
            port,
            static_dir: get(STATIC_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
