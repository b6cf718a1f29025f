//! YAML loader that builds [`Document`] trees and their [`SourceMap`].

use crate::{Document, Error, FieldPath, Location, Mapping, Result, SourceMap};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser};
use yaml_rust2::scanner::{Marker, TScalarStyle};

/// A document together with the source locations of its nodes.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub document: Document,
    pub source_map: SourceMap,
}

/// Parse YAML from a string.
///
/// Only the first document of a multi-document stream is read.
///
/// # Example
///
/// ```rust
/// use cff_document::{parse, Document};
///
/// let loaded = parse("cff-version: 1.2.0\nissue: 87").unwrap();
/// assert_eq!(loaded.document.get("cff-version"), Some(&Document::from("1.2.0")));
/// assert_eq!(loaded.document.get("issue"), Some(&Document::Integer(87)));
/// ```
///
/// # Errors
///
/// Returns an error for invalid YAML, empty input, duplicate keys,
/// non-scalar keys and aliases to undefined anchors.
pub fn parse(content: &str) -> Result<LoadedDocument> {
    parse_impl(content, None)
}

/// Parse YAML from a string, recording `filename` in the source map.
///
/// # Errors
///
/// Same as [`parse`].
pub fn parse_file(content: &str, filename: &str) -> Result<LoadedDocument> {
    parse_impl(content, Some(filename))
}

fn parse_impl(content: &str, filename: Option<&str>) -> Result<LoadedDocument> {
    let mut parser = Parser::new_from_str(content);
    let mut builder = DocumentBuilder::new(filename);

    parser.load(&mut builder, false)?;

    builder.finish()
}

/// Event receiver that assembles the tree.
struct DocumentBuilder {
    source_map: SourceMap,
    stack: Vec<Frame>,
    anchors: HashMap<usize, Document>,
    root: Option<Document>,
    /// First structural error; later events are ignored once set.
    error: Option<Error>,
}

/// A collection still being read.
enum Frame {
    Sequence {
        path: FieldPath,
        start: Marker,
        anchor: usize,
        items: Vec<Document>,
    },
    Mapping {
        path: FieldPath,
        start: Marker,
        anchor: usize,
        entries: Mapping,
        /// Key read but whose value has not arrived yet.
        pending_key: Option<String>,
    },
}

impl DocumentBuilder {
    fn new(filename: Option<&str>) -> Self {
        Self {
            source_map: SourceMap::new(filename.map(str::to_owned)),
            stack: Vec::new(),
            anchors: HashMap::new(),
            root: None,
            error: None,
        }
    }

    fn finish(self) -> Result<LoadedDocument> {
        if let Some(error) = self.error {
            return Err(error);
        }
        let document = self.root.ok_or(Error::Empty)?;
        Ok(LoadedDocument {
            document,
            source_map: self.source_map,
        })
    }

    /// True when the next node is a key of the innermost mapping.
    fn expects_key(&self) -> bool {
        matches!(
            self.stack.last(),
            Some(Frame::Mapping {
                pending_key: None,
                ..
            })
        )
    }

    /// Path the next value node will occupy.
    fn next_value_path(&self) -> FieldPath {
        match self.stack.last() {
            None => FieldPath::root(),
            Some(Frame::Sequence { path, items, .. }) => path.child_index(items.len()),
            Some(Frame::Mapping {
                path, pending_key, ..
            }) => match pending_key {
                Some(key) => path.child_key(key.clone()),
                None => path.clone(),
            },
        }
    }

    fn push_complete(&mut self, node: Document) {
        match self.stack.last_mut() {
            None => {
                if self.root.is_none() {
                    self.root = Some(node);
                }
            }
            Some(Frame::Sequence { items, .. }) => items.push(node),
            Some(Frame::Mapping {
                entries,
                pending_key,
                ..
            }) => {
                if let Some(key) = pending_key.take() {
                    entries.insert(key, node);
                }
            }
        }
    }

    fn on_key(&mut self, key: String, location: Location) {
        let Some(Frame::Mapping {
            path,
            entries,
            pending_key,
            ..
        }) = self.stack.last_mut()
        else {
            return;
        };
        if entries.contains_key(&key) {
            self.error = Some(Error::DuplicateKey { key, location });
            return;
        }
        self.source_map.insert_key(path.child_key(key.clone()), location);
        *pending_key = Some(key);
    }

    fn on_scalar(&mut self, value: String, style: TScalarStyle, anchor: usize, marker: &Marker) {
        let quoted = matches!(
            style,
            TScalarStyle::SingleQuoted | TScalarStyle::DoubleQuoted
        );
        let len = value.chars().count() + if quoted { 2 } else { 0 };
        let location = Location::from_marker(marker, len);

        if self.expects_key() {
            self.on_key(value, location);
            return;
        }

        let node = if matches!(style, TScalarStyle::Plain) {
            plain_scalar(&value)
        } else {
            Document::String(value)
        };
        let path = self.next_value_path();
        self.source_map.insert_value(path, location);
        if anchor > 0 {
            self.anchors.insert(anchor, node.clone());
        }
        self.push_complete(node);
    }

    fn on_collection_end(&mut self, marker: &Marker) {
        let Some(frame) = self.stack.pop() else {
            return;
        };
        let (path, start, anchor, node) = match frame {
            Frame::Sequence {
                path,
                start,
                anchor,
                items,
            } => (path, start, anchor, Document::Sequence(items)),
            Frame::Mapping {
                path,
                start,
                anchor,
                entries,
                ..
            } => (path, start, anchor, Document::Mapping(entries)),
        };
        self.source_map
            .insert_value(path, Location::from_span(&start, marker));
        if anchor > 0 {
            self.anchors.insert(anchor, node.clone());
        }
        self.push_complete(node);
    }
}

impl MarkedEventReceiver for DocumentBuilder {
    fn on_event(&mut self, ev: Event, marker: Marker) {
        if self.error.is_some() {
            return;
        }

        match ev {
            Event::Nothing
            | Event::StreamStart
            | Event::StreamEnd
            | Event::DocumentStart
            | Event::DocumentEnd => {}

            Event::Scalar(value, style, anchor, _tag) => {
                self.on_scalar(value, style, anchor, &marker);
            }

            Event::SequenceStart(anchor, _tag) => {
                if self.expects_key() {
                    self.error = Some(Error::ComplexKey {
                        location: Location::from_marker(&marker, 0),
                    });
                    return;
                }
                let path = self.next_value_path();
                self.stack.push(Frame::Sequence {
                    path,
                    start: marker,
                    anchor,
                    items: Vec::new(),
                });
            }

            Event::MappingStart(anchor, _tag) => {
                if self.expects_key() {
                    self.error = Some(Error::ComplexKey {
                        location: Location::from_marker(&marker, 0),
                    });
                    return;
                }
                let path = self.next_value_path();
                self.stack.push(Frame::Mapping {
                    path,
                    start: marker,
                    anchor,
                    entries: Mapping::new(),
                    pending_key: None,
                });
            }

            Event::SequenceEnd | Event::MappingEnd => self.on_collection_end(&marker),

            Event::Alias(anchor) => {
                let location = Location::from_marker(&marker, 0);
                if self.expects_key() {
                    self.error = Some(Error::ComplexKey { location });
                    return;
                }
                match self.anchors.get(&anchor).cloned() {
                    Some(node) => {
                        let path = self.next_value_path();
                        self.source_map.insert_value(path, location);
                        self.push_complete(node);
                    }
                    None => self.error = Some(Error::UndefinedAnchor { location }),
                }
            }
        }
    }
}

static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-+]?[0-9]+$").unwrap());
static FLOAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[-+]?(\.[0-9]+|[0-9]+(\.[0-9]*)?)([eE][-+]?[0-9]+)?$").unwrap()
});
static DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

/// Type a plain (unquoted) scalar with the YAML 1.2 core schema, plus dates.
pub(crate) fn plain_scalar(value: &str) -> Document {
    match value {
        "" | "~" | "null" | "Null" | "NULL" => return Document::Null,
        "true" | "True" | "TRUE" => return Document::Bool(true),
        "false" | "False" | "FALSE" => return Document::Bool(false),
        ".inf" | ".Inf" | ".INF" | "+.inf" | "+.Inf" | "+.INF" => {
            return Document::Real(f64::INFINITY);
        }
        "-.inf" | "-.Inf" | "-.INF" => return Document::Real(f64::NEG_INFINITY),
        ".nan" | ".NaN" | ".NAN" => return Document::Real(f64::NAN),
        _ => {}
    }

    if INTEGER.is_match(value)
        && let Ok(i) = value.parse::<i64>()
    {
        return Document::Integer(i);
    }
    if let Some(hex) = value.strip_prefix("0x")
        && let Ok(i) = i64::from_str_radix(hex, 16)
    {
        return Document::Integer(i);
    }
    if let Some(octal) = value.strip_prefix("0o")
        && let Ok(i) = i64::from_str_radix(octal, 8)
    {
        return Document::Integer(i);
    }
    if FLOAT.is_match(value)
        && let Ok(f) = value.parse::<f64>()
    {
        return Document::Real(f);
    }
    if DATE.is_match(value)
        && let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d")
    {
        return Document::Date(date);
    }

    Document::String(value.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_scalar_typing() {
        assert_eq!(plain_scalar("87"), Document::Integer(87));
        assert_eq!(plain_scalar("-3"), Document::Integer(-3));
        assert_eq!(plain_scalar("0x1F"), Document::Integer(31));
        assert_eq!(plain_scalar("1.5"), Document::Real(1.5));
        assert_eq!(plain_scalar("true"), Document::Bool(true));
        assert_eq!(plain_scalar("~"), Document::Null);
        assert_eq!(
            plain_scalar("2023-07-03"),
            Document::Date(NaiveDate::from_ymd_opt(2023, 7, 3).unwrap())
        );
    }

    #[test]
    fn test_plain_scalar_keeps_strings() {
        // YAML 1.1 booleans are plain strings under the 1.2 core schema
        assert_eq!(plain_scalar("yes"), Document::from("yes"));
        assert_eq!(plain_scalar("1.2.0"), Document::from("1.2.0"));
        assert_eq!(plain_scalar("inf"), Document::from("inf"));
        assert_eq!(plain_scalar("2023-13-45"), Document::from("2023-13-45"));
        assert_eq!(
            plain_scalar("10.5281/zenodo.8027706"),
            Document::from("10.5281/zenodo.8027706")
        );
    }

    #[test]
    fn test_quoted_scalars_stay_strings() {
        let loaded = parse("a: \"42\"\nb: '2023-07-03'\nc: 42").unwrap();
        assert_eq!(loaded.document.get("a"), Some(&Document::from("42")));
        assert_eq!(loaded.document.get("b"), Some(&Document::from("2023-07-03")));
        assert_eq!(loaded.document.get("c"), Some(&Document::Integer(42)));
    }

    #[test]
    fn test_nested_structure() {
        let loaded = parse(
            r#"
preferred-citation:
  type: article
  authors:
    - family-names: Hajdik
      given-names: Hannah M.
    - family-names: Yildirim
      given-names: Anil
"#,
        )
        .unwrap();

        let authors = loaded
            .document
            .get("preferred-citation")
            .and_then(|pc| pc.get("authors"))
            .and_then(Document::as_sequence)
            .unwrap();
        assert_eq!(authors.len(), 2);
        assert_eq!(
            authors[1].get("family-names").and_then(Document::as_str),
            Some("Yildirim")
        );
    }

    #[test]
    fn test_source_map_records_keys_and_values() {
        let loaded = parse_file("title: pyGeo\ndoi: 10.5281/zenodo.8027706\n", "CITATION.cff")
            .unwrap();
        let map = &loaded.source_map;
        assert_eq!(map.file(), Some("CITATION.cff"));

        let doi = FieldPath::key("doi");
        let key = map.key(&doi).unwrap();
        assert_eq!((key.line, key.column), (2, 1));
        let value = map.value(&doi).unwrap();
        assert_eq!((value.line, value.column), (2, 6));
        assert_eq!(value.len, "10.5281/zenodo.8027706".len());
    }

    #[test]
    fn test_duplicate_key_is_an_error() {
        let err = parse("doi: a\ndoi: b\n").unwrap_err();
        match err {
            Error::DuplicateKey { key, location } => {
                assert_eq!(key, "doi");
                assert_eq!(location.line, 2);
            }
            other => panic!("expected DuplicateKey, got {:?}", other),
        }
    }

    #[test]
    fn test_aliases_are_resolved() {
        let loaded = parse(
            r#"
authors:
  - &martins {family-names: Martins, given-names: Joaquim R. R. A.}
preferred-citation:
  authors:
    - *martins
"#,
        )
        .unwrap();
        let root_author = &loaded.document.get("authors").unwrap().as_sequence().unwrap()[0];
        let cited_author = &loaded
            .document
            .get("preferred-citation")
            .and_then(|pc| pc.get("authors"))
            .unwrap()
            .as_sequence()
            .unwrap()[0];
        assert_eq!(root_author, cited_author);
    }

    #[test]
    fn test_undefined_alias_is_an_error() {
        let err = parse("a: *missing\n");
        assert!(err.is_err());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse("").unwrap_err(), Error::Empty);
    }

    #[test]
    fn test_syntax_error_has_location() {
        let err = parse("title: [unclosed\n").unwrap_err();
        assert!(matches!(err, Error::Syntax { .. }));
        assert!(err.location().is_some());
    }
}
