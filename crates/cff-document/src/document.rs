//! The generic document tree.

use chrono::NaiveDate;
use hashlink::LinkedHashMap;
use std::fmt;

/// A mapping with string keys that remembers insertion order.
pub type Mapping = LinkedHashMap<String, Document>;

/// A node of a structured document.
///
/// This is a closed set of tagged variants. Loaders decide the variant of
/// every scalar once, at load time, so consumers never coerce between
/// strings and numbers implicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// An explicit null (`~`, `null`, or a key with no value).
    Null,
    Bool(bool),
    Integer(i64),
    Real(f64),
    String(String),
    /// A calendar date written as an unquoted `YYYY-MM-DD` scalar.
    Date(NaiveDate),
    Sequence(Vec<Document>),
    Mapping(Mapping),
}

/// The shape of a [`Document`] node, without its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Null,
    Bool,
    Integer,
    Real,
    String,
    Date,
    Sequence,
    Mapping,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shape::Null => "null",
            Shape::Bool => "a boolean",
            Shape::Integer => "an integer",
            Shape::Real => "a number",
            Shape::String => "a string",
            Shape::Date => "a date",
            Shape::Sequence => "a sequence",
            Shape::Mapping => "a mapping",
        };
        f.write_str(name)
    }
}

impl Document {
    /// Build a mapping node from key/value pairs, keeping their order.
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Document)>,
    {
        Document::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn shape(&self) -> Shape {
        match self {
            Document::Null => Shape::Null,
            Document::Bool(_) => Shape::Bool,
            Document::Integer(_) => Shape::Integer,
            Document::Real(_) => Shape::Real,
            Document::String(_) => Shape::String,
            Document::Date(_) => Shape::Date,
            Document::Sequence(_) => Shape::Sequence,
            Document::Mapping(_) => Shape::Mapping,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Document::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Document::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Document::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Document::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Document::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Document]> {
        match self {
            Document::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Document::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a key if this node is a mapping.
    pub fn get(&self, key: &str) -> Option<&Document> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    /// Number of children: sequence length or mapping entry count.
    pub fn len(&self) -> usize {
        match self {
            Document::Sequence(items) => items.len(),
            Document::Mapping(map) => map.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&str> for Document {
    fn from(value: &str) -> Self {
        Document::String(value.to_owned())
    }
}

impl From<String> for Document {
    fn from(value: String) -> Self {
        Document::String(value)
    }
}

impl From<i64> for Document {
    fn from(value: i64) -> Self {
        Document::Integer(value)
    }
}

impl From<NaiveDate> for Document {
    fn from(value: NaiveDate) -> Self {
        Document::Date(value)
    }
}

impl From<Vec<Document>> for Document {
    fn from(value: Vec<Document>) -> Self {
        Document::Sequence(value)
    }
}

impl From<Mapping> for Document {
    fn from(value: Mapping) -> Self {
        Document::Mapping(value)
    }
}
