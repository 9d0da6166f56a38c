use super::{parse_log_level, ConfigError, ServerConfig, DEFAULT_BIND_ADDRESS};
use anyhow::Result;
use tracing::level_filters::LevelFilter;

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn test_config_defaults_without_arguments() -> Result<()> {
    let config = ServerConfig::from_args(&args(&["transaction-manager"]))?;

    assert_eq!(config.bind_address.to_string(), DEFAULT_BIND_ADDRESS);
    assert_eq!(config.log_level, LevelFilter::INFO);

    Ok(())
}

#[test]
fn test_config_reads_positional_arguments() -> Result<()> {
    let config = ServerConfig::from_args(&args(&["transaction-manager", "0.0.0.0:9000", "DEBUG"]))?;

    assert_eq!(config.bind_address.port(), 9000);
    assert_eq!(config.log_level, LevelFilter::DEBUG);

    Ok(())
}

#[test]
fn test_config_rejects_invalid_bind_address() {
    let result = ServerConfig::from_args(&args(&["transaction-manager", "localhost"]));

    assert!(matches!(result, Err(ConfigError::InvalidBindAddress { ref address, .. }) if address == "localhost"));
}

#[test]
fn test_unknown_log_level_falls_back_to_info() {
    assert_eq!(parse_log_level("verbose"), LevelFilter::INFO);
    assert_eq!(parse_log_level("warn"), LevelFilter::WARN);
    assert_eq!(parse_log_level("Trace"), LevelFilter::TRACE);
}
