//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Static assets served for any path the router does not claim (`/sw.js`, images).
    pub public_dir: PathBuf,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `PUBLIC_DIR`: default `public` next to the manifest
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let bind_addr = parse_or("BIND_ADDR", lookup("BIND_ADDR"), DEFAULT_BIND_ADDR)?;
        let public_dir = lookup("PUBLIC_DIR")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .map_or_else(default_public_dir, PathBuf::from);
        Ok(Self { bind_addr, port, public_dir })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn default_public_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public")
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value: value.to_owned() }),
    }
}
