//! Server configuration, read from the environment the same way Dioxus fullstack servers pick
//! their address: `IP` and `PORT`.

use axum::http::HeaderValue;
use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    num::ParseIntError,
    path::PathBuf,
};
use thiserror::Error;

pub const IP_ENV: &str = "IP";
pub const PORT_ENV: &str = "PORT";
pub const ALLOWED_ORIGINS_ENV: &str = "CLICKER_ALLOWED_ORIGINS";
pub const DATA_FILE_ENV: &str = "CLICKER_DATA_FILE";

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &["http://localhost:3000", "http://client:3000"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid IP {value:?}: {source}")]
    InvalidIp {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid allowed origin {0:?}")]
    InvalidOrigin(String),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,

    /// Origins allowed to make credentialed cross-origin requests.
    pub allowed_origins: Vec<HeaderValue>,

    /// Where to persist the click log. `None` keeps it in memory for the life of the process.
    pub data_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .copied()
                .map(HeaderValue::from_static)
                .collect(),
            data_file: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(IP_ENV) {
            let ip = value
                .trim()
                .parse::<IpAddr>()
                .map_err(|source| ConfigError::InvalidIp { value, source })?;
            config.addr.set_ip(ip);
        }

        if let Some(value) = lookup(PORT_ENV) {
            let port = value
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?;
            config.addr.set_port(port);
        }

        if let Some(value) = lookup(ALLOWED_ORIGINS_ENV) {
            config.allowed_origins = value
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(|origin| match origin {
                    // a wildcard can't be used together with credentials
                    "*" => Err(ConfigError::InvalidOrigin(origin.to_string())),
                    _ => HeaderValue::from_str(origin)
                        .map_err(|_| ConfigError::InvalidOrigin(origin.to_string())),
                })
                .collect::<Result<_, _>>()?;
        }

        if let Some(value) = lookup(DATA_FILE_ENV) {
            let value = value.trim();
            if !value.is_empty() {
                config.data_file = Some(PathBuf::from(value));
            }
        }

        Ok(config)
    }
}
