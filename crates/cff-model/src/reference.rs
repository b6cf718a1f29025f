//! The preferred citation: the publication people are asked to cite.

use chrono::NaiveDate;
use cff_document::Mapping;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::person::{Person, Publisher};

macro_rules! reference_types {
    ($($variant:ident => $name:literal,)*) => {
        /// Reference types defined by CFF 1.2.0.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ReferenceType {
            $($variant,)*
        }

        impl ReferenceType {
            /// Every reference type, in schema order.
            pub const ALL: &'static [ReferenceType] = &[$(ReferenceType::$variant,)*];

            /// The name used in citation files.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(ReferenceType::$variant => $name,)*
                }
            }
        }

        impl FromStr for ReferenceType {
            type Err = UnknownReferenceType;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(ReferenceType::$variant),)*
                    _ => Err(UnknownReferenceType(s.to_owned())),
                }
            }
        }
    };
}

reference_types! {
    Art => "art",
    Article => "article",
    Audiovisual => "audiovisual",
    Bill => "bill",
    Blog => "blog",
    Book => "book",
    Catalogue => "catalogue",
    ConferencePaper => "conference-paper",
    Conference => "conference",
    Data => "data",
    Database => "database",
    Dictionary => "dictionary",
    EditedWork => "edited-work",
    Encyclopedia => "encyclopedia",
    FilmBroadcast => "film-broadcast",
    Generic => "generic",
    GovernmentDocument => "government-document",
    Grant => "grant",
    Hearing => "hearing",
    HistoricalWork => "historical-work",
    LegalCase => "legal-case",
    LegalRule => "legal-rule",
    MagazineArticle => "magazine-article",
    Manual => "manual",
    Map => "map",
    Multimedia => "multimedia",
    Music => "music",
    NewspaperArticle => "newspaper-article",
    Pamphlet => "pamphlet",
    Patent => "patent",
    PersonalCommunication => "personal-communication",
    Proceedings => "proceedings",
    Report => "report",
    Serial => "serial",
    Slides => "slides",
    SoftwareCode => "software-code",
    SoftwareContainer => "software-container",
    SoftwareExecutable => "software-executable",
    SoftwareVirtualMachine => "software-virtual-machine",
    Software => "software",
    SoundRecording => "sound-recording",
    Standard => "standard",
    Statute => "statute",
    Thesis => "thesis",
    Unpublished => "unpublished",
    Video => "video",
    Website => "website",
}

impl fmt::Display for ReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not a CFF reference type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown reference type '{0}'")]
pub struct UnknownReferenceType(pub String);

/// An alternate (usually peer-reviewed) publication to cite instead of,
/// or alongside, the software itself.
#[derive(Debug, Clone, PartialEq)]
pub struct PreferredCitation {
    reference_type: ReferenceType,
    authors: Vec<Person>,
    title: String,
    journal: String,
    publisher: Publisher,
    doi: String,
    issn: Option<String>,
    issue: Option<i64>,
    volume: Option<i64>,
    start: Option<i64>,
    date_published: NaiveDate,
    url: Option<String>,
    extra: Mapping,
}

impl PreferredCitation {
    pub fn new(
        reference_type: ReferenceType,
        authors: Vec<Person>,
        title: impl Into<String>,
        journal: impl Into<String>,
        publisher: Publisher,
        doi: impl Into<String>,
        date_published: NaiveDate,
    ) -> Self {
        Self {
            reference_type,
            authors,
            title: title.into(),
            journal: journal.into(),
            publisher,
            doi: doi.into(),
            issn: None,
            issue: None,
            volume: None,
            start: None,
            date_published,
            url: None,
            extra: Mapping::new(),
        }
    }

    pub fn with_authors(mut self, authors: Vec<Person>) -> Self {
        self.authors = authors;
        self
    }

    pub fn with_doi(mut self, doi: impl Into<String>) -> Self {
        self.doi = doi.into();
        self
    }

    pub fn with_issn(mut self, issn: impl Into<String>) -> Self {
        self.issn = Some(issn.into());
        self
    }

    pub fn with_issue(mut self, issue: i64) -> Self {
        self.issue = Some(issue);
        self
    }

    pub fn with_volume(mut self, volume: i64) -> Self {
        self.volume = Some(volume);
        self
    }

    pub fn with_start(mut self, start: i64) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_extra(mut self, extra: Mapping) -> Self {
        self.extra = extra;
        self
    }

    pub fn reference_type(&self) -> ReferenceType {
        self.reference_type
    }

    /// Authors in byline order.
    pub fn authors(&self) -> &[Person] {
        &self.authors
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn journal(&self) -> &str {
        &self.journal
    }

    pub fn publisher(&self) -> &Publisher {
        &self.publisher
    }

    pub fn doi(&self) -> &str {
        &self.doi
    }

    pub fn issn(&self) -> Option<&str> {
        self.issn.as_deref()
    }

    pub fn issue(&self) -> Option<i64> {
        self.issue
    }

    pub fn volume(&self) -> Option<i64> {
        self.volume
    }

    /// First page.
    pub fn start(&self) -> Option<i64> {
        self.start
    }

    pub fn date_published(&self) -> NaiveDate {
        self.date_published
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn extra(&self) -> &Mapping {
        &self.extra
    }
}
