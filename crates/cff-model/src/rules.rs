//! Invariant checks shared by [`parse`](crate::parse) and [`validate`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::context::ValidationContext;
use crate::error::{ValidationError, ValidationErrors};
use crate::keys;
use crate::person::Person;
use crate::record::CitationRecord;

static ORCID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://orcid\.org/[0-9]{4}-[0-9]{4}-[0-9]{4}-[0-9]{3}[0-9X]$").unwrap()
});
static VERSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+$").unwrap());

/// True if `value` is an ORCID URI such as `https://orcid.org/0000-0003-2143-1478`.
pub fn is_valid_orcid(value: &str) -> bool {
    ORCID.is_match(value)
}

/// True if `value` is a dotted numeric triple such as `1.2.0`.
pub fn is_valid_version(value: &str) -> bool {
    VERSION.is_match(value)
}

/// Re-check every invariant of a record.
///
/// Records produced by [`parse`](crate::parse) always pass. Records built or
/// edited through the `with_*` methods may not.
///
/// # Errors
///
/// Returns every violation found, in field order.
pub fn validate(record: &CitationRecord) -> Result<(), ValidationErrors> {
    let mut ctx = ValidationContext::new();

    check_version(&mut ctx, record.cff_version());
    check_doi(&mut ctx, record.doi());
    ctx.with_key(keys::AUTHORS, |ctx| check_authors(ctx, record.authors()));

    if let Some(citation) = record.preferred_citation() {
        ctx.with_key(keys::PREFERRED_CITATION, |ctx| {
            ctx.with_key(keys::AUTHORS, |ctx| check_authors(ctx, citation.authors()));
            check_doi(ctx, citation.doi());
        });
    }

    ctx.finish(Some(()))
}

pub(crate) fn check_version(ctx: &mut ValidationContext, version: &str) {
    if !is_valid_version(version) {
        ctx.push(ValidationError::MalformedVersion(version.to_owned()));
    }
}

/// A `doi` under the current path must be non-blank.
pub(crate) fn check_doi(ctx: &mut ValidationContext, doi: &str) {
    if doi.trim().is_empty() {
        ctx.missing(keys::DOI);
    }
}

/// Checks the ORCID at the current path.
pub(crate) fn check_orcid(ctx: &mut ValidationContext, orcid: &str) {
    if !is_valid_orcid(orcid) {
        let path = ctx.path().clone();
        ctx.push(ValidationError::MalformedOrcid(path, orcid.to_owned()));
    }
}

/// Reports an empty author list at the current path. Returns false if empty.
pub(crate) fn check_not_empty<T>(ctx: &mut ValidationContext, authors: &[T]) -> bool {
    if authors.is_empty() {
        let path = ctx.path().clone();
        ctx.push(ValidationError::EmptyAuthorList(path));
        return false;
    }
    true
}

fn check_authors(ctx: &mut ValidationContext, authors: &[Person]) {
    if !check_not_empty(ctx, authors) {
        return;
    }
    for (i, person) in authors.iter().enumerate() {
        if let Some(orcid) = person.orcid() {
            ctx.with_index(i, |ctx| {
                ctx.with_key(keys::ORCID, |ctx| check_orcid(ctx, orcid));
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cff_document::FieldPath;

    #[test]
    fn test_orcid_shape() {
        assert!(is_valid_orcid("https://orcid.org/0000-0003-2143-1478"));
        assert!(is_valid_orcid("https://orcid.org/0000-0002-1825-009X"));
        assert!(!is_valid_orcid("0000-0003-2143-1478"));
        assert!(!is_valid_orcid("http://orcid.org/0000-0003-2143-1478"));
        assert!(!is_valid_orcid("https://orcid.org/0000-0003-2143-147"));
        assert!(!is_valid_orcid("https://orcid.org/0000-0003-2143-1478 "));
        assert!(!is_valid_orcid("https://orcid.org/0000-0003-2143-147x"));
        // Unicode digits are not ORCID digits
        assert!(!is_valid_orcid("https://orcid.org/0000-0003-2143-147٣"));
    }

    #[test]
    fn test_version_shape() {
        assert!(is_valid_version("1.2.0"));
        assert!(is_valid_version("10.20.30"));
        assert!(!is_valid_version("1.2"));
        assert!(!is_valid_version("1.2.0-rc1"));
        assert!(!is_valid_version("v1.2.0"));
        assert!(!is_valid_version(""));
    }

    #[test]
    fn test_validate_collects_every_violation() {
        let record = CitationRecord::new(
            "1.2",
            "Please cite.",
            "pyGeo",
            "  ",
            vec![Person::new("Martins", "Joaquim R. R. A.").with_orcid("orcid:0000")],
        );

        let errors = validate(&record).unwrap_err().into_vec();
        assert_eq!(
            errors,
            vec![
                ValidationError::MalformedVersion("1.2".into()),
                ValidationError::MissingRequiredField(FieldPath::key("doi")),
                ValidationError::MalformedOrcid(
                    FieldPath::from_dotted("authors.0.orcid"),
                    "orcid:0000".into()
                ),
            ]
        );
    }

    #[test]
    fn test_validate_accepts_a_sound_record() {
        let record = CitationRecord::new(
            "1.2.0",
            "Please cite.",
            "pyGeo",
            "10.5281/zenodo.8027706",
            vec![Person::new("Martins", "Joaquim R. R. A.")
                .with_orcid("https://orcid.org/0000-0003-2143-1478")],
        );
        assert!(validate(&record).is_ok());
    }

    #[test]
    fn test_validate_after_edit_catches_empty_authors() {
        let record = CitationRecord::new(
            "1.2.0",
            "Please cite.",
            "pyGeo",
            "10.5281/zenodo.8027706",
            vec![Person::new("Martins", "Joaquim R. R. A.")],
        );
        assert!(validate(&record).is_ok());

        let edited = record.with_authors(Vec::new());
        let errors = validate(&edited).unwrap_err();
        assert_eq!(
            errors.errors(),
            &[ValidationError::EmptyAuthorList(FieldPath::key("authors"))]
        );
    }
}
