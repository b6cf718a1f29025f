//! The root citation record.

use cff_document::Mapping;

use crate::person::Person;
use crate::reference::PreferredCitation;

/// A complete citation record: how to cite a piece of software.
///
/// Records are immutable. The `with_*` methods consume the record and
/// return a new one, which should be passed through
/// [`validate`](crate::validate) before use.
#[derive(Debug, Clone, PartialEq)]
pub struct CitationRecord {
    cff_version: String,
    message: String,
    title: String,
    doi: String,
    authors: Vec<Person>,
    preferred_citation: Option<PreferredCitation>,
    extra: Mapping,
}

impl CitationRecord {
    pub fn new(
        cff_version: impl Into<String>,
        message: impl Into<String>,
        title: impl Into<String>,
        doi: impl Into<String>,
        authors: Vec<Person>,
    ) -> Self {
        Self {
            cff_version: cff_version.into(),
            message: message.into(),
            title: title.into(),
            doi: doi.into(),
            authors,
            preferred_citation: None,
            extra: Mapping::new(),
        }
    }

    pub fn with_preferred_citation(mut self, citation: PreferredCitation) -> Self {
        self.preferred_citation = Some(citation);
        self
    }

    pub fn without_preferred_citation(mut self) -> Self {
        self.preferred_citation = None;
        self
    }

    pub fn with_authors(mut self, authors: Vec<Person>) -> Self {
        self.authors = authors;
        self
    }

    pub fn with_doi(mut self, doi: impl Into<String>) -> Self {
        self.doi = doi.into();
        self
    }

    pub fn with_cff_version(mut self, cff_version: impl Into<String>) -> Self {
        self.cff_version = cff_version.into();
        self
    }

    /// Attach keys outside the recognized schema (`version`, `license`, ...).
    pub fn with_extra(mut self, extra: Mapping) -> Self {
        self.extra = extra;
        self
    }

    pub fn cff_version(&self) -> &str {
        &self.cff_version
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn doi(&self) -> &str {
        &self.doi
    }

    /// Authors in byline order.
    pub fn authors(&self) -> &[Person] {
        &self.authors
    }

    pub fn preferred_citation(&self) -> Option<&PreferredCitation> {
        self.preferred_citation.as_ref()
    }

    /// Unrecognized top-level keys, in their original order.
    pub fn extra(&self) -> &Mapping {
        &self.extra
    }

    /// First author whose family names equal `family_names` exactly.
    ///
    /// Duplicate family names are allowed; the earliest in byline order wins.
    pub fn find_author(&self, family_names: &str) -> Option<&Person> {
        self.authors
            .iter()
            .find(|person| person.family_names() == family_names)
    }

    /// The record's own DOI. Never falls back to the preferred citation's.
    pub fn primary_identifier(&self) -> &str {
        &self.doi
    }
}
