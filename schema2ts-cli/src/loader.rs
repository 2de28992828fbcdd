//! Schema and option file loading.

use anyhow::{Context, Result};
use schema2ts::codegen::GeneratorOptions;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Reads and decodes every schema file, in order.
///
/// A file holding a JSON array contributes each element as a schema.
///
/// # Errors
/// Returns an error naming the file if it cannot be read or decoded.
pub fn load_schemas(paths: &[impl AsRef<Path>]) -> Result<Vec<Value>> {
    let mut schemas = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        match read_json(path)? {
            Value::Array(items) => schemas.extend(items),
            value => schemas.push(value),
        }
        tracing::debug!("loaded {}", path.display());
    }
    Ok(schemas)
}

/// Reads generator options from a JSON file.
///
/// # Errors
/// Returns an error naming the file if it cannot be read or holds an
/// unknown option.
pub fn load_options(path: &Path) -> Result<GeneratorOptions> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read options file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("invalid options file {}", path.display()))
}

/// Writes `declarations` with a trailing newline.
///
/// # Errors
/// Returns an error naming the file if it cannot be written.
pub fn write_output(path: &Path, declarations: &str) -> Result<()> {
    fs::write(path, format!("{}\n", declarations))
        .with_context(|| format!("failed to write {}", path.display()))
}

fn read_json(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read schema file {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid JSON in {}", path.display()))
}
