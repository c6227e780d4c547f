pub mod classify;
pub mod diff;

use anyhow::{Context, Result};
use docdiff::CompareConfig;
use std::fs;

/// Load a `CompareConfig` from an optional `--config` JSON path,
/// falling back to the built-in rule tables.
pub fn load_config(path: Option<&str>) -> Result<CompareConfig> {
    let Some(path) = path else {
        return Ok(CompareConfig::default());
    };
    let raw =
        fs::read_to_string(path).with_context(|| format!("Failed to read config: {}", path))?;
    let config: CompareConfig = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse config: {}", path))?;
    config
        .validate()
        .with_context(|| format!("Invalid config: {}", path))?;
    Ok(config)
}

/// Read one document as UTF-8 text.
pub fn read_document(path: &str) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read document: {}", path))
}
