//! hf-network: hydrant network file format and validation.

pub mod demo;
pub mod schema;
pub mod validate;

use std::path::Path;

pub use demo::demo_network;
pub use schema::*;
pub use validate::{ValidationError, ValidationReport, validate, validate_network};

pub type NetworkResult<T> = Result<T, NetworkError>;

#[derive(thiserror::Error, Debug)]
pub enum NetworkError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationReport),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reject a configuration that fails [`validate`].
pub fn ensure_valid(config: &NetworkConfig) -> NetworkResult<()> {
    let report = validate(config);
    if report.is_valid() {
        Ok(())
    } else {
        Err(NetworkError::Validation(report))
    }
}

/// Files are parsed but not validated, so broken networks can still be
/// inspected and reported on.
pub fn load_yaml(path: &Path) -> NetworkResult<NetworkConfig> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&content)?)
}

pub fn save_yaml(path: &Path, config: &NetworkConfig) -> NetworkResult<()> {
    let content = serde_yaml::to_string(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> NetworkResult<NetworkConfig> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save_json(path: &Path, config: &NetworkConfig) -> NetworkResult<()> {
    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Load by extension: `.json` as JSON, anything else as YAML.
pub fn load(path: &Path) -> NetworkResult<NetworkConfig> {
    if is_json(path) {
        load_json(path)
    } else {
        load_yaml(path)
    }
}

/// Save by extension: `.json` as JSON, anything else as YAML.
pub fn save(path: &Path, config: &NetworkConfig) -> NetworkResult<()> {
    if is_json(path) {
        save_json(path, config)
    } else {
        save_yaml(path, config)
    }
}
