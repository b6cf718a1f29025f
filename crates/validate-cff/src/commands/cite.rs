//! `validate-cff cite`

use anyhow::Result;
use std::path::Path;
use std::process::ExitCode;

use super::load_record;
use crate::cite::{CiteFormat, format_citation};

pub fn execute(path: &Path, format: CiteFormat) -> Result<ExitCode> {
    let Some(record) = load_record(path)? else {
        return Ok(ExitCode::FAILURE);
    };
    println!("{}", format_citation(&record, format));
    Ok(ExitCode::SUCCESS)
}
