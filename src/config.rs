//! Server configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_SUBMISSIONS_FILE: &str = "submissions.json";
pub const DEFAULT_WEBSITE_DIR: &str = "website";
pub const DEFAULT_STORE_QUEUE_CAPACITY: usize = 64;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid BIND_ADDR: {0}")]
    InvalidBindAddr(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub submissions_file: PathBuf,
    pub website_dir: PathBuf,
    pub store_queue_capacity: usize,
}

impl Config {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `SUBMISSIONS_FILE`: default `submissions.json`
    /// - `WEBSITE_DIR`: default `website`, relative to the working directory
    /// - `STORE_QUEUE_CAPACITY`: default 64
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or `BIND_ADDR` is set but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };
        let bind_addr = match std::env::var("BIND_ADDR") {
            Ok(raw) => raw.trim().parse::<IpAddr>().map_err(|_| ConfigError::InvalidBindAddr(raw))?,
            Err(_) => DEFAULT_BIND_ADDR,
        };
        let submissions_file = std::env::var("SUBMISSIONS_FILE")
            .map_or_else(|_| PathBuf::from(DEFAULT_SUBMISSIONS_FILE), PathBuf::from);
        let website_dir = std::env::var("WEBSITE_DIR")
            .map_or_else(|_| PathBuf::from(DEFAULT_WEBSITE_DIR), PathBuf::from);
        let store_queue_capacity = env_parse("STORE_QUEUE_CAPACITY", DEFAULT_STORE_QUEUE_CAPACITY).max(1);

        Ok(Self { bind_addr, port, submissions_file, website_dir, store_queue_capacity })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
