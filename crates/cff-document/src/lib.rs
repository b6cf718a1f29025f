//! # cff-document
//!
//! The generic structured document that citation metadata is read from and
//! written back to: a tree of mappings, sequences and typed scalars.
//!
//! Documents come from YAML (with a [`SourceMap`] recording where every node
//! was found) or from JSON, and can be emitted back to either format.
//!
//! ## Example
//!
//! ```rust
//! use cff_document::{parse, FieldPath};
//!
//! let loaded = parse("title: pyGeo\nauthors:\n  - family-names: Martins\n").unwrap();
//! let title = loaded.document.get("title").and_then(|t| t.as_str());
//! assert_eq!(title, Some("pyGeo"));
//!
//! let path = FieldPath::from_dotted("authors.0.family-names");
//! assert_eq!(loaded.source_map.value(&path).map(|loc| loc.line), Some(3));
//! ```

mod document;
mod emitter;
mod error;
mod json;
mod parser;
mod path;
mod source_map;

pub use document::{Document, Mapping, Shape};
pub use emitter::to_yaml_string;
pub use error::{Error, Result};
pub use json::parse_json;
pub use parser::{parse, parse_file, LoadedDocument};
pub use path::{FieldPath, PathSegment};
pub use source_map::{Location, SourceMap};
