//! Service configuration read from environment variables.
//!
//! Each config type exposes `from_env` for binaries and `from_lookup` so
//! tests can supply variables without touching the process environment.
//!
//! # Environment Variables
//!
//! - `SERVICE_PORT`: HTTP port for any of the services
//! - `HATS_CATALOG_PATH`: JSON catalog file for the producer (optional)
//! - `PRODUCER_URL`: Base URL the consumer calls (default `http://localhost:8080`)
//! - `PRODUCER_TIMEOUT_MS`: Consumer HTTP client timeout (default 5000)

use std::path::PathBuf;
use std::time::Duration;

use hats_lib::contract::STUB_PORT;

/// Default port of the producer.
pub const DEFAULT_PRODUCER_PORT: u16 = 8080;

/// Default port of the consumer.
pub const DEFAULT_CONSUMER_PORT: u16 = 8081;

/// Default producer base URL used by the consumer.
pub const DEFAULT_PRODUCER_URL: &str = "http://localhost:8080";

/// Default timeout for consumer calls to the producer, in milliseconds.
pub const DEFAULT_PRODUCER_TIMEOUT_MS: u64 = 5000;

/// Configuration of the live producer process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProducerConfig {
    /// Port to listen on.
    pub port: u16,
    /// Catalog file to serve instead of the built-in one.
    pub catalog_path: Option<PathBuf>,
}

impl ProducerConfig {
    /// Read configuration from the environment.
    pub fn from_env(default_port: u16) -> Self {
        Self::from_lookup(|key| std::env::var(key).ok(), default_port)
    }

    /// Read configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F, default_port: u16) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            port: parse_port(&lookup, default_port),
            catalog_path: lookup("HATS_CATALOG_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

/// Configuration of the contract stub producer.
///
/// The stub always serves the contract fixtures, so only the port is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubConfig {
    /// Port to listen on.
    pub port: u16,
}

impl StubConfig {
    /// Read configuration from the environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            port: parse_port(&lookup, STUB_PORT),
        }
    }
}

/// Configuration of the consumer process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumerConfig {
    /// Port to listen on.
    pub port: u16,
    /// Base URL of the producer, without a trailing slash.
    pub producer_url: String,
    /// Timeout applied to every producer call.
    pub producer_timeout: Duration,
}

impl ConsumerConfig {
    /// Read configuration from the environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let producer_url = lookup("PRODUCER_URL")
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PRODUCER_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_ms = lookup("PRODUCER_TIMEOUT_MS")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_PRODUCER_TIMEOUT_MS);

        Self {
            port: parse_port(&lookup, DEFAULT_CONSUMER_PORT),
            producer_url,
            producer_timeout: Duration::from_millis(timeout_ms),
        }
    }
}

fn parse_port<F>(lookup: &F, default_port: u16) -> u16
where
    F: Fn(&str) -> Option<String>,
{
    lookup("SERVICE_PORT")
        .and_then(|p| p.parse().ok())
        .unwrap_or(default_port)
}
