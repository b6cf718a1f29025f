//! YAML output.

use crate::parser::plain_scalar;
use crate::{Document, Result};
use yaml_rust2::yaml::Hash;
use yaml_rust2::{Yaml, YamlEmitter};

/// Render a document as YAML text.
///
/// The leading `---` document marker is dropped so the output reads like a
/// hand-written citation file. Dates are written as plain `YYYY-MM-DD`
/// scalars, which load back as dates. Strings that would load back as
/// anything other than a string (`"2023-07-03"`, `"0o17"`) are double-quoted.
///
/// # Errors
///
/// Returns [`Error::Emit`](crate::Error::Emit) if the emitter fails.
pub fn to_yaml_string(document: &Document) -> Result<String> {
    let marker = quote_marker(document);
    let yaml = to_yaml(document, &marker);
    let mut out = String::new();
    YamlEmitter::new(&mut out).dump(&yaml)?;

    // The emitter always double-quotes marked strings; drop the marker to
    // leave the bare string inside the quotes.
    let out = out.replace(&format!("\"{}", marker), "\"");

    let mut text = match out.strip_prefix("---\n") {
        Some(body) => body.to_owned(),
        None => out,
    };
    text.push('\n');
    Ok(text)
}

/// A prefix the emitter is forced to quote (leading `@`, embedded `:`) and
/// that occurs in no string of `document`.
fn quote_marker(document: &Document) -> String {
    let mut strings = Vec::new();
    collect_strings(document, &mut strings);

    let mut marker = String::from("@cff:");
    while strings.iter().any(|s| s.contains(marker.as_str())) {
        marker.push('@');
    }
    marker
}

fn collect_strings<'a>(document: &'a Document, out: &mut Vec<&'a str>) {
    match document {
        Document::String(s) => out.push(s),
        Document::Sequence(items) => {
            for item in items {
                collect_strings(item, out);
            }
        }
        Document::Mapping(map) => {
            for (key, value) in map {
                out.push(key);
                collect_strings(value, out);
            }
        }
        _ => {}
    }
}

fn to_yaml(document: &Document, marker: &str) -> Yaml {
    match document {
        Document::Null => Yaml::Null,
        Document::Bool(b) => Yaml::Boolean(*b),
        Document::Integer(i) => Yaml::Integer(*i),
        Document::Real(f) => Yaml::Real(real_repr(*f)),
        Document::String(s) => match plain_scalar(s) {
            Document::String(_) => Yaml::String(s.clone()),
            _ => Yaml::String(format!("{}{}", marker, s)),
        },
        Document::Date(d) => Yaml::String(d.format("%Y-%m-%d").to_string()),
        Document::Sequence(items) => Yaml::Array(
            items.iter().map(|item| to_yaml(item, marker)).collect(),
        ),
        Document::Mapping(map) => {
            let mut hash = Hash::new();
            for (key, value) in map {
                hash.insert(Yaml::String(key.clone()), to_yaml(value, marker));
            }
            Yaml::Hash(hash)
        }
    }
}

fn real_repr(f: f64) -> String {
    if f.is_nan() {
        ".nan".to_owned()
    } else if f.is_infinite() {
        if f > 0.0 { ".inf" } else { "-.inf" }.to_owned()
    } else {
        // Debug keeps a fractional part ("8.0"), so the value reloads as a real
        format!("{:?}", f)
    }
}
