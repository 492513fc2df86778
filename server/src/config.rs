//! Host configuration parsed from environment variables.
//!
//! Optional:
//! - `PORT`: listen port, default 3000
//! - `HARBOUR_BIND_ADDR`: listen address, default `0.0.0.0`
//!
//! Leptos reads its own settings (site root, output name) separately.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid HARBOUR_BIND_ADDR: {0}")]
    InvalidBindAddr(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self { bind_addr: DEFAULT_BIND_ADDR, port: DEFAULT_PORT }
    }
}

impl HostConfig {
    /// Build host config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::var("PORT").ok().as_deref(), std::env::var("HARBOUR_BIND_ADDR").ok().as_deref())
    }

    /// Build host config from raw variable values. Blank values count as unset.
    pub fn from_vars(port: Option<&str>, bind_addr: Option<&str>) -> Result<Self, ConfigError> {
        let port = match non_blank(port) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?,
            None => DEFAULT_PORT,
        };
        let bind_addr = match non_blank(bind_addr) {
            Some(raw) => raw.parse::<IpAddr>().map_err(|_| ConfigError::InvalidBindAddr(raw.to_owned()))?,
            None => DEFAULT_BIND_ADDR,
        };
        Ok(Self { bind_addr, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}
