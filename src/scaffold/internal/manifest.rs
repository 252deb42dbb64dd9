//! package.json patching

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::config::Script;

/// Replace the `scripts` field of the manifest at `path`.
///
/// Other keys keep their values and order. Nothing is written unless the
/// existing file was read and parsed as a JSON object.
pub fn set_scripts(path: &Path, scripts: &[Script]) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let mut manifest: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    let fields = manifest
        .as_object_mut()
        .with_context(|| format!("{} is not a JSON object", path.display()))?;

    let scripts: Map<String, Value> = scripts
        .iter()
        .map(|s| (s.name.clone(), Value::String(s.command.clone())))
        .collect();
    fields.insert("scripts".to_string(), Value::Object(scripts));

    fs::write(path, render(&manifest)?)
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Four-space indented JSON with a trailing newline
fn render(manifest: &Value) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    manifest.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(String::from_utf8(buf)?)
}
