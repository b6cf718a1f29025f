pub mod check;
pub mod cite;
pub mod convert;
pub mod show;

use anyhow::Result;
use cff_model::CitationRecord;
use std::path::Path;

use crate::input;
use crate::report;

/// Load `path` and parse it into a record, printing diagnostics on failure.
///
/// Returns `None` when the file loaded but did not validate.
pub(crate) fn load_record(path: &Path) -> Result<Option<CitationRecord>> {
    let input = input::load(path)?;
    match cff_model::parse(&input.loaded.document) {
        Ok(record) => Ok(Some(record)),
        Err(errors) => {
            tracing::debug!(count = errors.len(), "record failed validation");
            report::print_errors(&errors, &input);
            Ok(None)
        }
    }
}
