//! Properties checked against generated records.

use chrono::NaiveDate;
use cff_document::{Document, FieldPath, Mapping};
use cff_model::{
    CitationRecord, Person, PreferredCitation, Publisher, ReferenceType, ValidationError,
    is_valid_orcid, is_valid_version, parse, serialize, validate,
};
use proptest::prelude::*;

/// Free text, including strings the loader would type as numbers, dates or
/// booleans if they were written unquoted.
fn gen_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z0-9][A-Za-z0-9 .:#'-]{0,20}",
        "[0-9]{4}-[0-9]{2}-[0-9]{2}",
        "[0-9]{1,5}",
        Just("true".to_string()),
        Just("null".to_string()),
    ]
}

fn gen_orcid() -> impl Strategy<Value = String> {
    "https://orcid\\.org/[0-9]{4}-[0-9]{4}-[0-9]{4}-[0-9]{3}[0-9X]"
}

fn gen_version() -> impl Strategy<Value = String> {
    "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}"
}

fn gen_date() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn gen_person() -> impl Strategy<Value = Person> {
    (gen_text(), gen_text(), proptest::option::of(gen_orcid())).prop_map(
        |(family, given, orcid)| {
            let person = Person::new(family, given);
            match orcid {
                Some(orcid) => person.with_orcid(orcid),
                None => person,
            }
        },
    )
}

fn gen_authors() -> impl Strategy<Value = Vec<Person>> {
    proptest::collection::vec(gen_person(), 1..=4)
}

/// Pass-through keys outside the recognized schema.
fn gen_extra() -> impl Strategy<Value = Mapping> {
    let key = proptest::sample::select(vec![
        "license",
        "version",
        "date-released",
        "repository-code",
        "abstract",
    ]);
    proptest::collection::vec((key, gen_text()), 0..=3).prop_map(|entries| {
        let mut map = Mapping::new();
        for (key, value) in entries {
            map.insert(key.to_string(), Document::from(value));
        }
        map
    })
}

fn gen_preferred_citation() -> impl Strategy<Value = PreferredCitation> {
    (
        proptest::sample::select(ReferenceType::ALL.to_vec()),
        gen_authors(),
        (gen_text(), gen_text(), gen_text(), gen_text()),
        gen_date(),
        proptest::option::of(0i64..10_000),
        proptest::option::of(0i64..10_000),
        proptest::option::of(gen_text()),
    )
        .prop_map(
            |(reference_type, authors, (title, journal, publisher, doi), date, issue, start, url)| {
                let mut citation = PreferredCitation::new(
                    reference_type,
                    authors,
                    title,
                    journal,
                    Publisher::new(publisher),
                    doi,
                    date,
                );
                if let Some(issue) = issue {
                    citation = citation.with_issue(issue);
                }
                if let Some(start) = start {
                    citation = citation.with_start(start);
                }
                if let Some(url) = url {
                    citation = citation.with_url(url);
                }
                citation
            },
        )
}

fn gen_record() -> impl Strategy<Value = CitationRecord> {
    (
        gen_version(),
        (gen_text(), gen_text(), gen_text()),
        gen_authors(),
        proptest::option::of(gen_preferred_citation()),
        gen_extra(),
    )
        .prop_map(|(version, (message, title, doi), authors, citation, extra)| {
            let record = CitationRecord::new(version, message, title, doi, authors).with_extra(extra);
            match citation {
                Some(citation) => record.with_preferred_citation(citation),
                None => record,
            }
        })
}

/// A valid record document with `key` replaced by `value`.
fn with_field(key: &str, value: Document) -> Document {
    let record = CitationRecord::new(
        "1.2.0",
        "Please cite.",
        "pyGeo",
        "10.5281/zenodo.8027706",
        vec![Person::new("Martins", "Joaquim R. R. A.")],
    );
    let Document::Mapping(mut map) = serialize(&record) else {
        unreachable!("records serialize to mappings");
    };
    map.insert(key.to_string(), value);
    Document::Mapping(map)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn test_generated_records_are_valid(record in gen_record()) {
        prop_assert!(validate(&record).is_ok());
    }

    #[test]
    fn test_serialize_then_parse_is_identity(record in gen_record()) {
        let reparsed = parse(&serialize(&record)).unwrap();
        prop_assert_eq!(reparsed, record);
    }

    #[test]
    fn test_round_trip_through_yaml_text(record in gen_record()) {
        let text = cff_document::to_yaml_string(&serialize(&record)).unwrap();
        let reloaded = cff_document::parse(&text).unwrap();
        let reparsed = parse(&reloaded.document);
        prop_assert_eq!(reparsed, Ok(record), "YAML was:\n{}", text);
    }

    #[test]
    fn test_round_trip_through_json_text(record in gen_record()) {
        let text = serde_json::to_string(&serialize(&record).to_json()).unwrap();
        let reloaded = cff_document::parse_json(&text).unwrap();
        prop_assert_eq!(parse(&reloaded.document), Ok(record));
    }

    #[test]
    fn test_any_malformed_orcid_is_reported(
        orcid in any::<String>().prop_filter("not an ORCID", |s| !is_valid_orcid(s))
    ) {
        let authors = Document::Sequence(vec![Document::mapping([
            ("family-names", Document::from("Martins")),
            ("given-names", Document::from("Joaquim R. R. A.")),
            ("orcid", Document::from(orcid.as_str())),
        ])]);
        let errors = parse(&with_field("authors", authors)).unwrap_err().into_vec();
        prop_assert_eq!(
            errors,
            vec![ValidationError::MalformedOrcid(
                FieldPath::from_dotted("authors.0.orcid"),
                orcid.clone(),
            )]
        );

        let record = CitationRecord::new(
            "1.2.0",
            "Please cite.",
            "pyGeo",
            "10.5281/zenodo.8027706",
            vec![Person::new("Martins", "Joaquim R. R. A.").with_orcid(orcid.as_str())],
        );
        let errors = validate(&record).unwrap_err().into_vec();
        prop_assert_eq!(
            errors,
            vec![ValidationError::MalformedOrcid(
                FieldPath::from_dotted("authors.0.orcid"),
                orcid,
            )]
        );
    }

    #[test]
    fn test_any_non_triple_version_is_reported(
        version in prop_oneof!["[0-9.]{0,8}", "[0-9a-z.+-]{1,12}", any::<String>()]
            .prop_filter("not a version triple", |s| !is_valid_version(s))
    ) {
        let errors = parse(&with_field("cff-version", Document::from(version.as_str())))
            .unwrap_err()
            .into_vec();
        prop_assert_eq!(errors, vec![ValidationError::MalformedVersion(version)]);
    }
}
