//! Reading citation files from disk.

use anyhow::{Context, Result};
use cff_document::{LoadedDocument, parse_file, parse_json};
use std::fs;
use std::path::Path;

/// Text format of a citation file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Yaml,
    Json,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Yaml,
        }
    }
}

/// A loaded citation file together with its source text.
pub struct Input {
    pub name: String,
    pub content: String,
    pub loaded: LoadedDocument,
}

pub fn load(path: &Path) -> Result<Input> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read citation file: {}", path.display()))?;

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("CITATION.cff")
        .to_string();

    let format = InputFormat::from_path(path);
    tracing::debug!(file = %path.display(), ?format, bytes = content.len(), "loading citation file");

    let loaded = load_str(&content, &name, format).map_err(|e| match e.location() {
        Some(loc) => anyhow::anyhow!(
            "Failed to parse citation file {} at line {}, column {}: {}",
            path.display(),
            loc.line,
            loc.column,
            e
        ),
        None => anyhow::anyhow!("Failed to parse citation file {}: {}", path.display(), e),
    })?;

    Ok(Input {
        name,
        content,
        loaded,
    })
}

fn load_str(content: &str, name: &str, format: InputFormat) -> cff_document::Result<LoadedDocument> {
    match format {
        InputFormat::Yaml => parse_file(content, name),
        InputFormat::Json => parse_json(content),
    }
}
