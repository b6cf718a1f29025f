//! Rendering validation errors for humans and machines.

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use cff_document::Location;
use cff_model::{ValidationError, ValidationErrors};
use serde_json::{Value, json};
use std::io::IsTerminal;
use std::ops::Range;

use crate::input::Input;

/// Suggest a fix for a validation error based on its kind.
///
/// Returns a hint ending with `?`, like the rest of our diagnostics.
pub fn suggest_fix(error: &ValidationError) -> Option<String> {
    match error {
        ValidationError::MissingRequiredField(path) => path
            .last()
            .map(|segment| format!("Add a non-empty `{}` field here?", segment)),
        ValidationError::MalformedOrcid(..) => Some(
            "Write the ORCID as a full URI, e.g. `https://orcid.org/0000-0003-2143-1478`?"
                .to_string(),
        ),
        ValidationError::EmptyAuthorList(_) => {
            Some("List at least one author with `family-names` and `given-names`?".to_string())
        }
        ValidationError::MalformedVersion(_) => {
            Some("Quote the version, e.g. `cff-version: \"1.2.0\"`?".to_string())
        }
        ValidationError::TypeMismatch(..) => None,
    }
}

/// Print every error to stderr, with color when stderr is a terminal.
pub fn print_errors(errors: &ValidationErrors, input: &Input) {
    let color = std::io::stderr().is_terminal();
    for error in errors {
        eprint!("{}", render_error(error, input, color));
    }
}

/// `MalformedVersion` carries the loaded value, and an unquoted `1.20` loads
/// as the number 1.2. Swap in the text the file actually contains.
fn as_written(error: &ValidationError, input: &Input) -> ValidationError {
    if let ValidationError::MalformedVersion(loaded) = error
        && let Some(location) = input.loaded.source_map.value(&error.path())
    {
        let text: String = input
            .content
            .chars()
            .skip(location.offset)
            .take(location.len)
            .collect();
        let text = text.trim_matches(|c| c == '"' || c == '\'');
        if !text.is_empty() && text != loaded {
            return ValidationError::MalformedVersion(text.to_string());
        }
    }
    error.clone()
}

/// Render one error against the source text, or as a plain line when the
/// error cannot be located.
pub fn render_error(error: &ValidationError, input: &Input, color: bool) -> String {
    let error = &as_written(error, input);
    let location = input.loaded.source_map.locate(&error.path());
    match location {
        Some(location) => render_located(error, input, location, color),
        None => render_plain(error),
    }
}

fn render_plain(error: &ValidationError) -> String {
    let mut out = format!("Error: [{}] {}\n", error.error_code(), error);
    if let Some(hint) = suggest_fix(error) {
        out.push_str(&format!("  ? {}\n", hint));
    }
    out
}

fn render_located(error: &ValidationError, input: &Input, location: &Location, color: bool) -> String {
    let id = input.name.clone();
    let span = first_line_span(&input.content, location);

    let mut report = Report::build(ReportKind::Error, id.clone(), span.start)
        .with_config(Config::default().with_color(color))
        .with_code(error.error_code())
        .with_message(error.to_string())
        .with_label(
            Label::new((id.clone(), span))
                .with_message(format!("at `{}`", error.path()))
                .with_color(Color::Red),
        );
    if let Some(hint) = suggest_fix(error) {
        report = report.with_help(hint);
    }

    let mut output = Vec::new();
    if report
        .finish()
        .write((id, Source::from(input.content.as_str())), &mut output)
        .is_err()
    {
        return render_plain(error);
    }
    String::from_utf8(output).unwrap_or_else(|_| render_plain(error))
}

/// Span of a located node, cut at the end of its first line so that a
/// whole mapping is not underlined.
fn first_line_span(content: &str, location: &Location) -> Range<usize> {
    let start = location.offset;
    let line_len = content
        .chars()
        .skip(start)
        .take(location.len.max(1))
        .take_while(|c| *c != '\n')
        .count();
    start..start + line_len.max(1)
}

/// Machine-readable form of the errors, one object per error.
pub fn errors_to_json(errors: &ValidationErrors, input: &Input) -> Value {
    let source_map = &input.loaded.source_map;
    let items: Vec<Value> = errors
        .iter()
        .map(|error| {
            let error = as_written(error, input);
            let location = source_map.locate(&error.path());
            json!({
                "code": error.error_code(),
                "kind": error.kind_name(),
                "path": error.path().to_string(),
                "message": error.to_string(),
                "line": location.map(|l| l.line),
                "column": location.map(|l| l.column),
            })
        })
        .collect();
    Value::Array(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cff_document::FieldPath;

    const RECORD: &str = "\
cff-version: 1.2.0
message: Please cite.
title: pyGeo
authors:
  - family-names: Martins
    given-names: Joaquim R. R. A.
    orcid: 0000-0003-2143-1478
";

    fn input() -> Input {
        Input {
            name: "CITATION.cff".to_string(),
            content: RECORD.to_string(),
            loaded: cff_document::parse_file(RECORD, "CITATION.cff").unwrap(),
        }
    }

    fn errors(input: &Input) -> ValidationErrors {
        cff_model::parse(&input.loaded.document).unwrap_err()
    }

    #[test]
    fn test_json_report() {
        let input = input();
        let json = errors_to_json(&errors(&input), &input);
        insta::assert_snapshot!(serde_json::to_string_pretty(&json).unwrap(), @r#"
        [
          {
            "code": "CFF-1-10",
            "kind": "MissingRequiredField",
            "path": "doi",
            "message": "Missing required field 'doi'",
            "line": 1,
            "column": 1
          },
          {
            "code": "CFF-1-13",
            "kind": "MalformedOrcid",
            "path": "authors.0.orcid",
            "message": "Malformed ORCID '0000-0003-2143-1478' at 'authors.0.orcid'",
            "line": 7,
            "column": 12
          }
        ]
        "#);
    }

    #[test]
    fn test_render_located_error() {
        let input = input();
        let errors = errors(&input);
        let orcid = &errors.errors()[1];

        let text = render_error(orcid, &input, false);
        assert!(text.contains("CFF-1-13"));
        assert!(text.contains("Malformed ORCID"));
        assert!(text.contains("CITATION.cff"));
        assert!(text.contains("https://orcid.org/"));
    }

    #[test]
    fn test_render_unlocated_error_is_one_line() {
        let input = Input {
            name: "citation.json".to_string(),
            content: "{}".to_string(),
            loaded: cff_document::parse_json("{}").unwrap(),
        };
        let error = ValidationError::MissingRequiredField(FieldPath::key("title"));

        let text = render_error(&error, &input, false);
        assert_eq!(
            text,
            "Error: [CFF-1-10] Missing required field 'title'\n  ? Add a non-empty `title` field here?\n"
        );
    }

    #[test]
    fn test_span_stops_at_end_of_line() {
        let content = "a: 1\nb: 2\n";
        let location = Location {
            offset: 0,
            len: content.len(),
            line: 1,
            column: 1,
        };
        assert_eq!(first_line_span(content, &location), 0..4);
    }

    #[test]
    fn test_type_mismatch_has_no_hint() {
        let error = ValidationError::TypeMismatch(
            FieldPath::from_dotted("preferred-citation.issue"),
            cff_model::ExpectedShape::Integer,
        );
        assert!(suggest_fix(&error).is_none());
    }

    #[test]
    fn test_version_is_reported_as_written() {
        let content = RECORD.replace("cff-version: 1.2.0", "cff-version: 1.20");
        let input = Input {
            name: "CITATION.cff".to_string(),
            loaded: cff_document::parse_file(&content, "CITATION.cff").unwrap(),
            content,
        };
        let errors = errors(&input);
        assert_eq!(
            errors.errors()[0],
            ValidationError::MalformedVersion("1.2".into())
        );

        let json = errors_to_json(&errors, &input);
        assert_eq!(json[0]["kind"], "MalformedVersion");
        assert_eq!(json[0]["path"], "cff-version");
        assert_eq!(
            json[0]["message"],
            "Malformed cff-version '1.20', expected a version like 1.2.0"
        );

        let text = render_error(&errors.errors()[0], &input, false);
        assert!(text.contains("'1.20'"), "{}", text);
    }
}
