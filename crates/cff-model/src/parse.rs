//! Document to model.

use cff_document::{Document, Mapping};
use chrono::NaiveDate;

use crate::context::ValidationContext;
use crate::error::{ExpectedShape, ValidationError, ValidationErrors};
use crate::keys;
use crate::person::{Person, Publisher};
use crate::record::CitationRecord;
use crate::reference::{PreferredCitation, ReferenceType};
use crate::rules;

/// Parse a generic document into a validated [`CitationRecord`].
///
/// The top level must be a mapping. Keys outside the recognized schema are
/// kept as pass-through data; recognized keys with the wrong shape are
/// errors. The whole document is always walked, so the error list holds
/// every problem, in document order.
///
/// # Errors
///
/// Returns [`ValidationErrors`] holding at least one [`ValidationError`](crate::ValidationError).
pub fn parse(document: &Document) -> Result<CitationRecord, ValidationErrors> {
    let mut ctx = ValidationContext::new();
    let record = parse_record(&mut ctx, document);
    ctx.finish(record)
}

fn parse_record(ctx: &mut ValidationContext, document: &Document) -> Option<CitationRecord> {
    let Some(map) = document.as_mapping() else {
        ctx.type_mismatch(ExpectedShape::Mapping);
        return None;
    };

    let cff_version = parse_version(ctx, map);
    let message = required_string(ctx, map, keys::MESSAGE);
    let title = required_string(ctx, map, keys::TITLE);
    let doi = required_doi(ctx, map);
    let authors = parse_authors(ctx, map);
    let preferred_citation = optional(ctx, map, keys::PREFERRED_CITATION, parse_preferred_citation);

    let record = CitationRecord::new(cff_version?, message?, title?, doi?, authors?)
        .with_extra(extra_keys(map, keys::RECORD_KEYS));
    Some(match preferred_citation? {
        Some(citation) => record.with_preferred_citation(citation),
        None => record,
    })
}

fn parse_version(ctx: &mut ValidationContext, map: &Mapping) -> Option<String> {
    match map.get(keys::CFF_VERSION) {
        None | Some(Document::Null) => {
            ctx.missing(keys::CFF_VERSION);
            None
        }
        Some(Document::String(version)) => {
            rules::check_version(ctx, version);
            rules::is_valid_version(version).then(|| version.clone())
        }
        // An unquoted `1.2` loads as a number, which is a malformed version
        // rather than a shape problem from the author's point of view.
        Some(Document::Real(f)) => {
            ctx.push(ValidationError::MalformedVersion(f.to_string()));
            None
        }
        Some(Document::Integer(i)) => {
            ctx.push(ValidationError::MalformedVersion(i.to_string()));
            None
        }
        Some(_) => {
            ctx.with_key(keys::CFF_VERSION, |ctx| ctx.type_mismatch(ExpectedShape::String));
            None
        }
    }
}

fn parse_authors(ctx: &mut ValidationContext, map: &Mapping) -> Option<Vec<Person>> {
    let Some(value) = map.get(keys::AUTHORS).filter(|v| !v.is_null()) else {
        ctx.missing(keys::AUTHORS);
        return None;
    };

    ctx.with_key(keys::AUTHORS, |ctx| {
        let Some(items) = value.as_sequence() else {
            ctx.type_mismatch(ExpectedShape::Sequence);
            return None;
        };
        if !rules::check_not_empty(ctx, items) {
            return None;
        }

        let mut authors = Vec::with_capacity(items.len());
        let mut complete = true;
        for (i, item) in items.iter().enumerate() {
            match ctx.with_index(i, |ctx| parse_person(ctx, item)) {
                Some(person) => authors.push(person),
                None => complete = false,
            }
        }
        complete.then_some(authors)
    })
}

fn parse_person(ctx: &mut ValidationContext, document: &Document) -> Option<Person> {
    let Some(map) = document.as_mapping() else {
        ctx.type_mismatch(ExpectedShape::Mapping);
        return None;
    };

    let family_names = required_string(ctx, map, keys::FAMILY_NAMES);
    let given_names = required_string(ctx, map, keys::GIVEN_NAMES);
    let orcid = optional_string(ctx, map, keys::ORCID);

    if let Some(Some(orcid)) = &orcid {
        ctx.with_key(keys::ORCID, |ctx| rules::check_orcid(ctx, orcid));
    }

    let person = Person::new(family_names?, given_names?)
        .with_extra(extra_keys(map, keys::PERSON_KEYS));
    match orcid? {
        Some(orcid) if rules::is_valid_orcid(&orcid) => Some(person.with_orcid(orcid)),
        Some(_) => None,
        None => Some(person),
    }
}

fn parse_preferred_citation(
    ctx: &mut ValidationContext,
    document: &Document,
) -> Option<PreferredCitation> {
    let Some(map) = document.as_mapping() else {
        ctx.type_mismatch(ExpectedShape::Mapping);
        return None;
    };

    let reference_type = parse_reference_type(ctx, map);
    let authors = parse_authors(ctx, map);
    let title = required_string(ctx, map, keys::TITLE);
    let journal = required_string(ctx, map, keys::JOURNAL);
    let publisher = required(ctx, map, keys::PUBLISHER, parse_publisher);
    let doi = required_doi(ctx, map);
    let issn = optional_string(ctx, map, keys::ISSN);
    let issue = optional_integer(ctx, map, keys::ISSUE);
    let volume = optional_integer(ctx, map, keys::VOLUME);
    let start = optional_integer(ctx, map, keys::START);
    let date_published = required(ctx, map, keys::DATE_PUBLISHED, parse_date);
    let url = optional_string(ctx, map, keys::URL);

    let mut citation = PreferredCitation::new(
        reference_type?,
        authors?,
        title?,
        journal?,
        publisher?,
        doi?,
        date_published?,
    )
    .with_extra(extra_keys(map, keys::REFERENCE_KEYS));

    if let Some(issn) = issn? {
        citation = citation.with_issn(issn);
    }
    if let Some(issue) = issue? {
        citation = citation.with_issue(issue);
    }
    if let Some(volume) = volume? {
        citation = citation.with_volume(volume);
    }
    if let Some(start) = start? {
        citation = citation.with_start(start);
    }
    if let Some(url) = url? {
        citation = citation.with_url(url);
    }
    Some(citation)
}

fn parse_reference_type(ctx: &mut ValidationContext, map: &Mapping) -> Option<ReferenceType> {
    let name = required_string(ctx, map, keys::TYPE)?;
    match name.parse() {
        Ok(reference_type) => Some(reference_type),
        Err(_) => {
            ctx.with_key(keys::TYPE, |ctx| ctx.type_mismatch(ExpectedShape::ReferenceType));
            None
        }
    }
}

fn parse_publisher(ctx: &mut ValidationContext, document: &Document) -> Option<Publisher> {
    let Some(map) = document.as_mapping() else {
        ctx.type_mismatch(ExpectedShape::Mapping);
        return None;
    };
    let name = required_string(ctx, map, keys::NAME)?;
    Some(Publisher::new(name).with_extra(extra_keys(map, keys::PUBLISHER_KEYS)))
}

fn parse_date(ctx: &mut ValidationContext, document: &Document) -> Option<NaiveDate> {
    let date = match document {
        Document::Date(date) => Some(*date),
        Document::String(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d").ok(),
        _ => None,
    };
    if date.is_none() {
        ctx.type_mismatch(ExpectedShape::Date);
    }
    date
}

/// The `doi` under the current mapping: present, a string, and not blank.
fn required_doi(ctx: &mut ValidationContext, map: &Mapping) -> Option<String> {
    let doi = required_string(ctx, map, keys::DOI)?;
    rules::check_doi(ctx, &doi);
    (!doi.trim().is_empty()).then_some(doi)
}

/// Read a required key with `parse_value`, which runs with the key on the path.
fn required<T>(
    ctx: &mut ValidationContext,
    map: &Mapping,
    key: &str,
    parse_value: impl FnOnce(&mut ValidationContext, &Document) -> Option<T>,
) -> Option<T> {
    match map.get(key) {
        None | Some(Document::Null) => {
            ctx.missing(key);
            None
        }
        Some(value) => ctx.with_key(key, |ctx| parse_value(ctx, value)),
    }
}

/// Read an optional key. The outer `Option` is `None` when the key was
/// present but invalid; the inner one when it was absent or null.
fn optional<T>(
    ctx: &mut ValidationContext,
    map: &Mapping,
    key: &str,
    parse_value: impl FnOnce(&mut ValidationContext, &Document) -> Option<T>,
) -> Option<Option<T>> {
    match map.get(key) {
        None | Some(Document::Null) => Some(None),
        Some(value) => ctx.with_key(key, |ctx| parse_value(ctx, value)).map(Some),
    }
}

fn required_string(ctx: &mut ValidationContext, map: &Mapping, key: &str) -> Option<String> {
    required(ctx, map, key, string_value)
}

fn optional_string(ctx: &mut ValidationContext, map: &Mapping, key: &str) -> Option<Option<String>> {
    optional(ctx, map, key, string_value)
}

fn optional_integer(ctx: &mut ValidationContext, map: &Mapping, key: &str) -> Option<Option<i64>> {
    optional(ctx, map, key, |ctx, value| match value {
        Document::Integer(i) => Some(*i),
        _ => {
            ctx.type_mismatch(ExpectedShape::Integer);
            None
        }
    })
}

fn string_value(ctx: &mut ValidationContext, value: &Document) -> Option<String> {
    match value {
        Document::String(s) => Some(s.clone()),
        _ => {
            ctx.type_mismatch(ExpectedShape::String);
            None
        }
    }
}

/// Entries of `map` whose keys are not in `recognized`, in their original order.
fn extra_keys(map: &Mapping, recognized: &[&str]) -> Mapping {
    map.iter()
        .filter(|(key, _)| !recognized.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
