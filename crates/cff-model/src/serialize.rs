//! Model to document.

use cff_document::{Document, Mapping};

use crate::keys;
use crate::person::{Person, Publisher};
use crate::record::CitationRecord;
use crate::reference::PreferredCitation;

/// Turn a record back into a generic document.
///
/// Recognized keys come first in a fixed order, followed by pass-through
/// keys in the order they were read. Parsing the result yields a record
/// equal to `record`.
pub fn serialize(record: &CitationRecord) -> Document {
    let mut map = Mapping::new();
    map.insert(keys::CFF_VERSION.into(), record.cff_version().into());
    map.insert(keys::MESSAGE.into(), record.message().into());
    map.insert(keys::TITLE.into(), record.title().into());
    map.insert(keys::DOI.into(), record.doi().into());
    map.insert(keys::AUTHORS.into(), people(record.authors()));
    if let Some(citation) = record.preferred_citation() {
        map.insert(keys::PREFERRED_CITATION.into(), preferred_citation(citation));
    }
    append_extra(&mut map, record.extra());
    Document::Mapping(map)
}

fn people(authors: &[Person]) -> Document {
    Document::Sequence(authors.iter().map(person).collect())
}

fn person(person: &Person) -> Document {
    let mut map = Mapping::new();
    map.insert(keys::FAMILY_NAMES.into(), person.family_names().into());
    map.insert(keys::GIVEN_NAMES.into(), person.given_names().into());
    if let Some(orcid) = person.orcid() {
        map.insert(keys::ORCID.into(), orcid.into());
    }
    append_extra(&mut map, person.extra());
    Document::Mapping(map)
}

fn publisher(publisher: &Publisher) -> Document {
    let mut map = Mapping::new();
    map.insert(keys::NAME.into(), publisher.name().into());
    append_extra(&mut map, publisher.extra());
    Document::Mapping(map)
}

fn preferred_citation(citation: &PreferredCitation) -> Document {
    let mut map = Mapping::new();
    map.insert(keys::TYPE.into(), citation.reference_type().as_str().into());
    map.insert(keys::AUTHORS.into(), people(citation.authors()));
    map.insert(keys::TITLE.into(), citation.title().into());
    map.insert(keys::JOURNAL.into(), citation.journal().into());
    map.insert(keys::PUBLISHER.into(), publisher(citation.publisher()));
    map.insert(keys::DOI.into(), citation.doi().into());
    if let Some(issn) = citation.issn() {
        map.insert(keys::ISSN.into(), issn.into());
    }
    if let Some(issue) = citation.issue() {
        map.insert(keys::ISSUE.into(), issue.into());
    }
    if let Some(volume) = citation.volume() {
        map.insert(keys::VOLUME.into(), volume.into());
    }
    if let Some(start) = citation.start() {
        map.insert(keys::START.into(), start.into());
    }
    map.insert(keys::DATE_PUBLISHED.into(), citation.date_published().into());
    if let Some(url) = citation.url() {
        map.insert(keys::URL.into(), url.into());
    }
    append_extra(&mut map, citation.extra());
    Document::Mapping(map)
}

/// Pass-through keys never override recognized ones.
fn append_extra(map: &mut Mapping, extra: &Mapping) {
    for (key, value) in extra {
        if !map.contains_key(key) {
            map.insert(key.clone(), value.clone());
        }
    }
}
