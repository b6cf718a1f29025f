//! Errors raised while loading or emitting documents.

use crate::Location;
use thiserror::Error;

/// Result type alias for cff-document operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while turning text into a [`Document`](crate::Document) or back.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// YAML syntax error reported by the scanner.
    #[error("YAML syntax error: {message}")]
    Syntax {
        message: String,
        location: Option<Location>,
    },

    /// The input contained no document at all.
    #[error("no document found in input")]
    Empty,

    /// A mapping repeats a key.
    #[error("duplicate key '{key}'")]
    DuplicateKey { key: String, location: Location },

    /// A mapping key is a sequence, mapping or alias.
    #[error("mapping keys must be plain scalars")]
    ComplexKey { location: Location },

    /// An alias names an anchor that was never defined.
    #[error("alias refers to an undefined anchor")]
    UndefinedAnchor { location: Location },

    /// JSON syntax error.
    #[error("JSON syntax error: {message}")]
    Json {
        message: String,
        location: Option<Location>,
    },

    /// The YAML emitter failed.
    #[error("failed to emit YAML: {0}")]
    Emit(String),
}

impl Error {
    /// Source location of the problem, when known.
    pub fn location(&self) -> Option<&Location> {
        match self {
            Error::Syntax { location, .. } | Error::Json { location, .. } => location.as_ref(),
            Error::DuplicateKey { location, .. }
            | Error::ComplexKey { location }
            | Error::UndefinedAnchor { location } => Some(location),
            Error::Empty | Error::Emit(_) => None,
        }
    }
}

impl From<yaml_rust2::ScanError> for Error {
    fn from(err: yaml_rust2::ScanError) -> Self {
        Error::Syntax {
            message: err.info().to_owned(),
            location: Some(Location::from_marker(err.marker(), 0)),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        let location = (err.line() > 0).then(|| Location {
            offset: 0,
            len: 0,
            line: err.line(),
            column: err.column(),
        });
        Error::Json {
            message: err.to_string(),
            location,
        }
    }
}

impl From<yaml_rust2::EmitError> for Error {
    fn from(err: yaml_rust2::EmitError) -> Self {
        Error::Emit(err.to_string())
    }
}
