//! `validate-cff check`

use anyhow::Result;
use std::path::Path;
use std::process::ExitCode;

use crate::input;
use crate::report;

pub fn execute(path: &Path, json: bool) -> Result<ExitCode> {
    let input = input::load(path)?;
    let result = cff_model::parse(&input.loaded.document);

    if json {
        let value = match &result {
            Ok(_) => serde_json::Value::Array(Vec::new()),
            Err(errors) => report::errors_to_json(errors, &input),
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        match &result {
            Ok(record) => {
                println!("✓ {} is a valid citation file", path.display());
                println!("  cff-version: {}", record.cff_version());
                println!("  Authors: {}", record.authors().len());
            }
            Err(errors) => {
                report::print_errors(errors, &input);
                eprintln!(
                    "{} validation error{} in {}",
                    errors.len(),
                    if errors.len() == 1 { "" } else { "s" },
                    path.display()
                );
            }
        }
    }

    tracing::info!(file = %path.display(), valid = result.is_ok(), "checked citation file");
    Ok(if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
