//! Conversion between [`Document`] and JSON.

use crate::{Document, LoadedDocument, Mapping, Result, SourceMap};
use serde_json::{Map, Number, Value};

/// Parse JSON text into a document.
///
/// JSON carries no usable node positions through `serde_json::Value`, so the
/// returned source map is empty.
///
/// # Errors
///
/// Returns [`Error::Json`](crate::Error::Json) for malformed input.
pub fn parse_json(content: &str) -> Result<LoadedDocument> {
    let value: Value = serde_json::from_str(content)?;
    Ok(LoadedDocument {
        document: Document::from_json(value),
        source_map: SourceMap::default(),
    })
}

impl Document {
    /// Convert a JSON value. Strings stay strings, even when they look like dates.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Null => Document::Null,
            Value::Bool(b) => Document::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Document::Integer(i),
                None => Document::Real(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => Document::String(s),
            Value::Array(items) => {
                Document::Sequence(items.into_iter().map(Document::from_json).collect())
            }
            Value::Object(object) => Document::Mapping(
                object
                    .into_iter()
                    .map(|(k, v)| (k, Document::from_json(v)))
                    .collect::<Mapping>(),
            ),
        }
    }

    /// Convert to JSON. Dates become `YYYY-MM-DD` strings; non-finite reals become null.
    pub fn to_json(&self) -> Value {
        match self {
            Document::Null => Value::Null,
            Document::Bool(b) => Value::Bool(*b),
            Document::Integer(i) => Value::Number((*i).into()),
            Document::Real(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
            Document::String(s) => Value::String(s.clone()),
            Document::Date(d) => Value::String(d.format("%Y-%m-%d").to_string()),
            Document::Sequence(items) => Value::Array(items.iter().map(Document::to_json).collect()),
            Document::Mapping(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect::<Map<String, Value>>(),
            ),
        }
    }
}
