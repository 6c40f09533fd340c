//! Server configuration
//!
//! Reads config from env vars:
//!   SOLAR_HOST  — bind address (default: 0.0.0.0)
//!   SOLAR_PORT  — bind port (default: 5000)
//!   SOLAR_DEBUG — development mode: verbose logs, no-cache static assets (default: true)
//!   STATIC_DIR  — directory served under /static (default: <crate>/static)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub debug: bool,
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            debug: true,
            static_dir: default_static_dir(),
        }
    }
}

impl Config {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Missing keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("SOLAR_HOST") {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|e| ConfigError::invalid("SOLAR_HOST", raw, e))?,
            None => defaults.host,
        };

        let port = match lookup("SOLAR_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::invalid("SOLAR_PORT", raw, e))?,
            None => defaults.port,
        };

        let debug = match lookup("SOLAR_DEBUG") {
            Some(raw) => parse_flag(&raw)
                .ok_or_else(|| ConfigError::invalid("SOLAR_DEBUG", raw, "expected a boolean"))?,
            None => defaults.debug,
        };

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        Ok(Self {
            host,
            port,
            debug,
            static_dir,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "solar_system=debug,tower_http=debug"
        } else {
            "solar_system=info,tower_http=info"
        }
    }
}

fn default_static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
