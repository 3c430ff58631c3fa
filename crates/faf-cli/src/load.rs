//! Document loading
//!
//! `.faf` files are YAML; `.json` is accepted too. Both decode into the same
//! `serde_json::Value` tree the compiler walks.

use anyhow::Context;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Read and decode a document from disk
pub fn load_document(path: &Path) -> anyhow::Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    debug!("Read {} bytes from {}", content.len(), path.display());

    decode(&content, is_json(path)).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Decode document text as JSON or YAML
pub fn decode(content: &str, json: bool) -> anyhow::Result<Value> {
    let value: Value = if json {
        serde_json::from_str(content)?
    } else {
        serde_yaml::from_str(content)?
    };
    Ok(value)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
