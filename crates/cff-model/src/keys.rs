//! Recognized CFF keys.

pub(crate) const CFF_VERSION: &str = "cff-version";
pub(crate) const MESSAGE: &str = "message";
pub(crate) const TITLE: &str = "title";
pub(crate) const DOI: &str = "doi";
pub(crate) const AUTHORS: &str = "authors";
pub(crate) const PREFERRED_CITATION: &str = "preferred-citation";

pub(crate) const FAMILY_NAMES: &str = "family-names";
pub(crate) const GIVEN_NAMES: &str = "given-names";
pub(crate) const ORCID: &str = "orcid";

pub(crate) const NAME: &str = "name";

pub(crate) const TYPE: &str = "type";
pub(crate) const JOURNAL: &str = "journal";
pub(crate) const PUBLISHER: &str = "publisher";
pub(crate) const ISSN: &str = "issn";
pub(crate) const ISSUE: &str = "issue";
pub(crate) const VOLUME: &str = "volume";
pub(crate) const START: &str = "start";
pub(crate) const DATE_PUBLISHED: &str = "date-published";
pub(crate) const URL: &str = "url";

pub(crate) const RECORD_KEYS: &[&str] = &[CFF_VERSION, MESSAGE, TITLE, DOI, AUTHORS, PREFERRED_CITATION];
pub(crate) const PERSON_KEYS: &[&str] = &[FAMILY_NAMES, GIVEN_NAMES, ORCID];
pub(crate) const PUBLISHER_KEYS: &[&str] = &[NAME];
pub(crate) const REFERENCE_KEYS: &[&str] = &[
    TYPE,
    AUTHORS,
    TITLE,
    JOURNAL,
    PUBLISHER,
    DOI,
    ISSN,
    ISSUE,
    VOLUME,
    START,
    DATE_PUBLISHED,
    URL,
];
