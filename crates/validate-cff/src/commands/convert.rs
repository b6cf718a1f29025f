//! `validate-cff convert`

use anyhow::{Context, Result};
use cff_model::CitationRecord;
use clap::ValueEnum;
use std::path::Path;
use std::process::ExitCode;

use super::load_record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

/// Serialize a record in the requested format.
pub fn render(record: &CitationRecord, to: OutputFormat) -> Result<String> {
    let document = cff_model::serialize(record);
    match to {
        OutputFormat::Yaml => {
            cff_document::to_yaml_string(&document).context("Failed to write YAML")
        }
        OutputFormat::Json => {
            let mut text = serde_json::to_string_pretty(&document.to_json())?;
            text.push('\n');
            Ok(text)
        }
    }
}

pub fn execute(path: &Path, to: OutputFormat) -> Result<ExitCode> {
    let Some(record) = load_record(path)? else {
        return Ok(ExitCode::FAILURE);
    };
    print!("{}", render(&record, to)?);
    Ok(ExitCode::SUCCESS)
}
