//! People and publishers.

use cff_document::Mapping;

/// An author, identified by name and optionally by ORCID.
///
/// The ORCID is kept as written so that [`validate`](crate::validate) can
/// report a malformed value instead of it being dropped at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    family_names: String,
    given_names: String,
    orcid: Option<String>,
    extra: Mapping,
}

impl Person {
    pub fn new(family_names: impl Into<String>, given_names: impl Into<String>) -> Self {
        Self {
            family_names: family_names.into(),
            given_names: given_names.into(),
            orcid: None,
            extra: Mapping::new(),
        }
    }

    pub fn with_orcid(mut self, orcid: impl Into<String>) -> Self {
        self.orcid = Some(orcid.into());
        self
    }

    /// Attach keys outside the recognized schema (`affiliation`, `email`, ...).
    pub fn with_extra(mut self, extra: Mapping) -> Self {
        self.extra = extra;
        self
    }

    pub fn family_names(&self) -> &str {
        &self.family_names
    }

    pub fn given_names(&self) -> &str {
        &self.given_names
    }

    pub fn orcid(&self) -> Option<&str> {
        self.orcid.as_deref()
    }

    /// Unrecognized keys, in their original order.
    pub fn extra(&self) -> &Mapping {
        &self.extra
    }

    /// "Given Family", as printed in a byline.
    pub fn full_name(&self) -> String {
        if self.given_names.is_empty() {
            self.family_names.clone()
        } else {
            format!("{} {}", self.given_names, self.family_names)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Publisher {
    name: String,
    extra: Mapping,
}

impl Publisher {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: Mapping::new(),
        }
    }

    pub fn with_extra(mut self, extra: Mapping) -> Self {
        self.extra = extra;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extra(&self) -> &Mapping {
        &self.extra
    }
}
