//! # cff-model
//!
//! A validated, immutable model of Citation File Format (CFF) records.
//!
//! [`parse`] walks a generic [`Document`] into a [`CitationRecord`],
//! collecting every problem it finds rather than stopping at the first.
//! [`validate`] re-checks a record built by hand, and [`serialize`] turns a
//! record back into a document that parses to an equal record.
//!
//! ```rust
//! let text = r#"
//! cff-version: 1.2.0
//! message: If you use this software, please cite it.
//! title: pyGeo
//! doi: 10.5281/zenodo.8027706
//! authors:
//!   - family-names: Martins
//!     given-names: Joaquim R. R. A.
//! "#;
//! let loaded = cff_document::parse(text).unwrap();
//! let record = cff_model::parse(&loaded.document).unwrap();
//! assert_eq!(record.primary_identifier(), "10.5281/zenodo.8027706");
//! assert!(record.find_author("Martins").is_some());
//! ```

mod context;
mod error;
mod keys;
mod parse;
mod person;
mod record;
mod reference;
mod rules;
mod serialize;

pub use cff_document::{Document, FieldPath, Mapping};
pub use error::{ExpectedShape, ValidationError, ValidationErrors};
pub use parse::parse;
pub use person::{Person, Publisher};
pub use record::CitationRecord;
pub use reference::{PreferredCitation, ReferenceType, UnknownReferenceType};
pub use rules::{is_valid_orcid, is_valid_version, validate};
pub use serialize::serialize;
