#[cfg(test)]
mod tests;

use std::net::SocketAddr;

use thiserror::Error;
use tracing::level_filters::LevelFilter;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
pub const USAGE: &str = "Usage: transaction-manager [bind_address:optional] [log_level:optional]";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid bind address '{address}': {source}")]
    InvalidBindAddress {
        address: String,
        source: std::net::AddrParseError
    }
}

/// Startup settings read from positional command line arguments.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub log_level: LevelFilter
}

impl ServerConfig {
    /// Builds the configuration from the full argument list, program name included.
    pub fn from_args(args: &[String]) -> Result<Self, ConfigError> {
        let address = args.get(1).map(String::as_str).unwrap_or(DEFAULT_BIND_ADDRESS);

        let bind_address = address.parse().map_err(|source| ConfigError::InvalidBindAddress {
            address: address.to_string(),
            source
        })?;

        let log_level = args.get(2)
            .map(|s| parse_log_level(s)).unwrap_or(LevelFilter::INFO);

        Ok(Self { bind_address, log_level })
    }
}

pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'info'", level);
            LevelFilter::INFO
        }
    }
}
