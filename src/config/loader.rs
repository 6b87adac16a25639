//! Configuration loading from disk and environment.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::CatalogConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding the listener port.
pub const PORT_ENV: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<CatalogConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: CatalogConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Resolve the runtime configuration: the file if one is given, defaults
/// otherwise, then `PORT` from the environment on top.
pub fn resolve_config(path: Option<&Path>) -> Result<CatalogConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => CatalogConfig::default(),
    };

    if let Ok(port) = std::env::var(PORT_ENV) {
        apply_port_override(&mut config, &port)
            .map_err(|e| ConfigError::Validation(vec![e]))?;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Replace the port of `listener.bind_address`, keeping its host.
pub fn apply_port_override(config: &mut CatalogConfig, port: &str) -> Result<(), ValidationError> {
    let port: u16 = port
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidAddress {
            field: "PORT",
            value: port.to_string(),
        })?;

    let mut addr: SocketAddr = config
        .listener
        .bind_address
        .parse()
        .map_err(|_| ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        })?;
    addr.set_port(port);
    config.listener.bind_address = addr.to_string();

    tracing::debug!(bind_address = %config.listener.bind_address, "Port overridden from environment");
    Ok(())
}
