//! Validation errors.

use cff_document::FieldPath;
use std::fmt;
use thiserror::Error;

use crate::keys;

/// What a field should have looked like, for [`ValidationError::TypeMismatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpectedShape {
    String,
    Integer,
    Date,
    Mapping,
    Sequence,
    ReferenceType,
}

impl fmt::Display for ExpectedShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ExpectedShape::String => "a string",
            ExpectedShape::Integer => "an integer",
            ExpectedShape::Date => "a calendar date (YYYY-MM-DD)",
            ExpectedShape::Mapping => "a mapping",
            ExpectedShape::Sequence => "a sequence",
            ExpectedShape::ReferenceType => "a CFF reference type such as 'article'",
        };
        f.write_str(text)
    }
}

/// A single problem found in a citation record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is absent (or null, or an empty identifier).
    #[error("Missing required field '{0}'")]
    MissingRequiredField(FieldPath),

    /// An ORCID is present but not of the form `https://orcid.org/XXXX-XXXX-XXXX-XXXX`.
    #[error("Malformed ORCID '{1}' at '{0}'")]
    MalformedOrcid(FieldPath, String),

    /// An author list is present but empty.
    #[error("Author list '{0}' is empty")]
    EmptyAuthorList(FieldPath),

    /// `cff-version` is not a dotted numeric triple.
    #[error("Malformed cff-version '{0}', expected a version like 1.2.0")]
    MalformedVersion(String),

    /// A field is present with the wrong shape.
    #[error("Expected {1} at '{0}'")]
    TypeMismatch(FieldPath, ExpectedShape),
}

impl ValidationError {
    /// Path of the offending field.
    pub fn path(&self) -> FieldPath {
        match self {
            ValidationError::MissingRequiredField(path)
            | ValidationError::MalformedOrcid(path, _)
            | ValidationError::EmptyAuthorList(path)
            | ValidationError::TypeMismatch(path, _) => path.clone(),
            ValidationError::MalformedVersion(_) => FieldPath::key(keys::CFF_VERSION),
        }
    }

    /// Stable error code for this kind of problem.
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::MissingRequiredField(_) => "CFF-1-10",
            ValidationError::TypeMismatch(..) => "CFF-1-11",
            ValidationError::EmptyAuthorList(_) => "CFF-1-12",
            ValidationError::MalformedOrcid(..) => "CFF-1-13",
            ValidationError::MalformedVersion(_) => "CFF-1-14",
        }
    }

    /// Name of the variant, for machine-readable output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ValidationError::MissingRequiredField(_) => "MissingRequiredField",
            ValidationError::MalformedOrcid(..) => "MalformedOrcid",
            ValidationError::EmptyAuthorList(_) => "EmptyAuthorList",
            ValidationError::MalformedVersion(_) => "MalformedVersion",
            ValidationError::TypeMismatch(..) => "TypeMismatch",
        }
    }
}

/// Every problem found by one [`parse`](crate::parse) or
/// [`validate`](crate::validate) call, in document order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Wrap a list of errors, or `None` if there are none.
    pub fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.0.len();
        write!(
            f,
            "{} validation error{}",
            count,
            if count == 1 { "" } else { "s" }
        )?;
        for error in &self.0 {
            write!(f, "\n  [{}] {}", error.error_code(), error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ValidationError::MissingRequiredField(FieldPath::key("doi"));
        assert_eq!(err.to_string(), "Missing required field 'doi'");

        let err = ValidationError::TypeMismatch(FieldPath::key("authors"), ExpectedShape::Sequence);
        assert_eq!(err.to_string(), "Expected a sequence at 'authors'");

        let err = ValidationError::MalformedOrcid(
            FieldPath::from_dotted("authors.0.orcid"),
            "0000-0003-2143-1478".into(),
        );
        assert_eq!(
            err.to_string(),
            "Malformed ORCID '0000-0003-2143-1478' at 'authors.0.orcid'"
        );
    }

    #[test]
    fn test_version_error_reports_version_path() {
        let err = ValidationError::MalformedVersion("1.2".into());
        assert_eq!(err.path(), FieldPath::key("cff-version"));
        assert_eq!(err.error_code(), "CFF-1-14");
    }

    #[test]
    fn test_errors_display_lists_each_error() {
        let errors = ValidationErrors::from_vec(vec![
            ValidationError::MissingRequiredField(FieldPath::key("doi")),
            ValidationError::EmptyAuthorList(FieldPath::key("authors")),
        ])
        .unwrap();
        let text = errors.to_string();
        assert!(text.starts_with("2 validation errors"));
        assert!(text.contains("[CFF-1-10] Missing required field 'doi'"));
        assert!(text.contains("[CFF-1-12] Author list 'authors' is empty"));
    }

    #[test]
    fn test_from_vec_rejects_empty() {
        assert!(ValidationErrors::from_vec(Vec::new()).is_none());
    }
}
