//! Ready-to-paste citations for a record.

use cff_model::{CitationRecord, Document, Person, PreferredCitation, ReferenceType};
use chrono::Datelike;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CiteFormat {
    /// APA-like reference line
    Text,
    /// BibTeX entry
    Bibtex,
}

/// Format the preferred citation, or the software itself when the record
/// has none.
pub fn format_citation(record: &CitationRecord, format: CiteFormat) -> String {
    match (format, record.preferred_citation()) {
        (CiteFormat::Text, Some(citation)) => text_for_citation(citation),
        (CiteFormat::Text, None) => text_for_software(record),
        (CiteFormat::Bibtex, Some(citation)) => bibtex_for_citation(citation),
        (CiteFormat::Bibtex, None) => bibtex_for_software(record),
    }
}

/// Initialize a given name (e.g., "Joaquim R. R. A." -> "J. R. R. A.").
fn initialize_name(given: &str) -> String {
    given
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .map(|c| format!("{}. ", c.to_uppercase()))
        .collect::<String>()
        .trim()
        .to_string()
}

fn apa_name(person: &Person) -> String {
    let initials = initialize_name(person.given_names());
    if initials.is_empty() {
        person.family_names().to_string()
    } else {
        format!("{}, {}", person.family_names(), initials)
    }
}

/// "A", "A, & B", "A, B, & C"
fn apa_authors(authors: &[Person]) -> String {
    let names: Vec<String> = authors.iter().map(apa_name).collect();
    match names.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{}, & {}", rest.join(", "), last),
    }
}

/// Append a period unless the text already ends a sentence.
fn sentence(text: &str) -> String {
    if text.ends_with(['.', '?', '!']) {
        text.to_string()
    } else {
        format!("{}.", text)
    }
}

fn doi_url(doi: &str) -> String {
    format!("https://doi.org/{}", doi)
}

fn text_for_citation(citation: &PreferredCitation) -> String {
    let mut out = format!(
        "{} ({}). {}",
        sentence(&apa_authors(citation.authors())),
        citation.date_published().year(),
        sentence(citation.title())
    );

    let mut source = citation.journal().to_string();
    if let Some(volume) = citation.volume() {
        source.push_str(&format!(", {}", volume));
        if let Some(issue) = citation.issue() {
            source.push_str(&format!("({})", issue));
        }
    }
    if let Some(start) = citation.start() {
        source.push_str(&format!(", {}", start));
    }
    out.push(' ');
    out.push_str(&sentence(&source));
    out.push(' ');
    out.push_str(&doi_url(citation.doi()));
    out
}

fn release_year(record: &CitationRecord) -> Option<i32> {
    match record.extra().get("date-released")? {
        Document::Date(date) => Some(date.year()),
        Document::String(text) => chrono::NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .map(|date| date.year()),
        _ => None,
    }
}

fn release_version(record: &CitationRecord) -> Option<String> {
    match record.extra().get("version")? {
        Document::String(text) => Some(text.clone()),
        Document::Integer(n) => Some(n.to_string()),
        Document::Real(n) => Some(n.to_string()),
        _ => None,
    }
}

fn text_for_software(record: &CitationRecord) -> String {
    let year = release_year(record).map_or_else(|| "n.d.".to_string(), |y| y.to_string());
    let mut title = record.title().to_string();
    if let Some(version) = release_version(record) {
        title.push_str(&format!(" (Version {})", version));
    }
    format!(
        "{} ({}). {} [Computer software]. {}",
        sentence(&apa_authors(record.authors())),
        year,
        title,
        doi_url(record.primary_identifier())
    )
}

fn bibtex_entry_type(reference_type: ReferenceType) -> &'static str {
    match reference_type {
        ReferenceType::Article | ReferenceType::MagazineArticle | ReferenceType::NewspaperArticle => {
            "article"
        }
        ReferenceType::Book | ReferenceType::EditedWork => "book",
        ReferenceType::ConferencePaper => "inproceedings",
        ReferenceType::Proceedings => "proceedings",
        ReferenceType::Report => "techreport",
        ReferenceType::Thesis => "phdthesis",
        ReferenceType::Manual => "manual",
        ReferenceType::Unpublished => "unpublished",
        ReferenceType::Software
        | ReferenceType::SoftwareCode
        | ReferenceType::SoftwareContainer
        | ReferenceType::SoftwareExecutable
        | ReferenceType::SoftwareVirtualMachine => "software",
        _ => "misc",
    }
}

fn bibtex_authors(authors: &[Person]) -> String {
    authors
        .iter()
        .map(|person| {
            if person.given_names().is_empty() {
                person.family_names().to_string()
            } else {
                format!("{}, {}", person.family_names(), person.given_names())
            }
        })
        .collect::<Vec<_>>()
        .join(" and ")
}

/// Citation key such as `Hajdik2023`.
fn bibtex_key(authors: &[Person], year: Option<i32>) -> String {
    let mut key: String = authors
        .first()
        .map(|person| {
            person
                .family_names()
                .chars()
                .filter(|c| c.is_alphanumeric())
                .collect()
        })
        .unwrap_or_default();
    if key.is_empty() {
        key.push_str("cite");
    }
    if let Some(year) = year {
        key.push_str(&year.to_string());
    }
    key
}

fn bibtex(entry_type: &str, key: &str, fields: &[(&str, String)]) -> String {
    let mut out = format!("@{}{{{},\n", entry_type, key);
    let body: Vec<String> = fields
        .iter()
        .map(|(name, value)| format!("  {} = {{{}}}", name, value))
        .collect();
    out.push_str(&body.join(",\n"));
    out.push_str("\n}");
    out
}

fn bibtex_for_citation(citation: &PreferredCitation) -> String {
    let year = citation.date_published().year();
    let container = match citation.reference_type() {
        ReferenceType::ConferencePaper => "booktitle",
        ReferenceType::Article | ReferenceType::MagazineArticle | ReferenceType::NewspaperArticle => {
            "journal"
        }
        _ => "howpublished",
    };

    let mut fields = vec![
        ("author", bibtex_authors(citation.authors())),
        ("title", citation.title().to_string()),
        (container, citation.journal().to_string()),
        ("year", year.to_string()),
    ];
    if let Some(volume) = citation.volume() {
        fields.push(("volume", volume.to_string()));
    }
    if let Some(issue) = citation.issue() {
        fields.push(("number", issue.to_string()));
    }
    if let Some(start) = citation.start() {
        fields.push(("pages", start.to_string()));
    }
    fields.push(("publisher", citation.publisher().name().to_string()));
    if let Some(issn) = citation.issn() {
        fields.push(("issn", issn.to_string()));
    }
    fields.push(("doi", citation.doi().to_string()));
    if let Some(url) = citation.url() {
        fields.push(("url", url.to_string()));
    }

    bibtex(
        bibtex_entry_type(citation.reference_type()),
        &bibtex_key(citation.authors(), Some(year)),
        &fields,
    )
}

fn bibtex_for_software(record: &CitationRecord) -> String {
    let year = release_year(record);
    let mut fields = vec![
        ("author", bibtex_authors(record.authors())),
        ("title", record.title().to_string()),
    ];
    if let Some(version) = release_version(record) {
        fields.push(("version", version));
    }
    if let Some(year) = year {
        fields.push(("year", year.to_string()));
    }
    fields.push(("doi", record.primary_identifier().to_string()));

    bibtex("software", &bibtex_key(record.authors(), year), &fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use cff_model::{Mapping, Publisher};

    fn authors() -> Vec<Person> {
        vec![
            Person::new("Hajdik", "Hannah M."),
            Person::new("Adler", "Eytan J."),
            Person::new("Martins", "Joaquim R. R. A.")
                .with_orcid("https://orcid.org/0000-0003-2143-1478"),
        ]
    }

    fn record() -> CitationRecord {
        CitationRecord::new(
            "1.2.0",
            "Please cite.",
            "pyGeo: A geometry package for multidisciplinary design optimization",
            "10.5281/zenodo.8027706",
            authors(),
        )
    }

    fn article() -> PreferredCitation {
        PreferredCitation::new(
            ReferenceType::Article,
            authors(),
            "pyGeo: A geometry package for multidisciplinary design optimization",
            "Journal of Open Source Software",
            Publisher::new("Open Journals"),
            "10.21105/joss.05319",
            NaiveDate::from_ymd_opt(2023, 7, 3).unwrap(),
        )
        .with_volume(8)
        .with_issue(87)
        .with_start(5319)
        .with_issn("2475-9066")
        .with_url("https://joss.theoj.org/papers/10.21105/joss.05319")
    }

    #[test]
    fn test_initialize_name() {
        assert_eq!(initialize_name("Hannah M."), "H. M.");
        assert_eq!(initialize_name("Joaquim R. R. A."), "J. R. R. A.");
        assert_eq!(initialize_name("anil"), "A.");
        assert_eq!(initialize_name(""), "");
    }

    #[test]
    fn test_apa_author_joining() {
        let one = [Person::new("Wu", "Ella")];
        assert_eq!(apa_authors(&one), "Wu, E.");

        let two = [Person::new("Wu", "Ella"), Person::new("Seraj", "Sabet")];
        assert_eq!(apa_authors(&two), "Wu, E., & Seraj, S.");

        assert_eq!(
            apa_authors(&authors()),
            "Hajdik, H. M., Adler, E. J., & Martins, J. R. R. A."
        );
    }

    #[test]
    fn test_text_for_preferred_citation() {
        let record = record().with_preferred_citation(article());
        insta::assert_snapshot!(format_citation(&record, CiteFormat::Text), @"Hajdik, H. M., Adler, E. J., & Martins, J. R. R. A. (2023). pyGeo: A geometry package for multidisciplinary design optimization. Journal of Open Source Software, 8(87), 5319. https://doi.org/10.21105/joss.05319");
    }

    #[test]
    fn test_bibtex_for_preferred_citation() {
        let record = record().with_preferred_citation(article());
        insta::assert_snapshot!(format_citation(&record, CiteFormat::Bibtex), @r"
        @article{Hajdik2023,
          author = {Hajdik, Hannah M. and Adler, Eytan J. and Martins, Joaquim R. R. A.},
          title = {pyGeo: A geometry package for multidisciplinary design optimization},
          journal = {Journal of Open Source Software},
          year = {2023},
          volume = {8},
          number = {87},
          pages = {5319},
          publisher = {Open Journals},
          issn = {2475-9066},
          doi = {10.21105/joss.05319},
          url = {https://joss.theoj.org/papers/10.21105/joss.05319}
        }
        ");
    }

    #[test]
    fn test_software_fallback_uses_root_doi() {
        let mut extra = Mapping::new();
        extra.insert("version".into(), Document::from("1.13.0"));
        extra.insert(
            "date-released".into(),
            Document::from(NaiveDate::from_ymd_opt(2023, 6, 12).unwrap()),
        );
        let record = record().with_extra(extra);

        assert_eq!(
            format_citation(&record, CiteFormat::Text),
            "Hajdik, H. M., Adler, E. J., & Martins, J. R. R. A. (2023). pyGeo: A geometry \
             package for multidisciplinary design optimization (Version 1.13.0) [Computer \
             software]. https://doi.org/10.5281/zenodo.8027706"
        );

        let bib = format_citation(&record, CiteFormat::Bibtex);
        assert!(bib.starts_with("@software{Hajdik2023,\n"));
        assert!(bib.contains("  version = {1.13.0},\n"));
        assert!(bib.ends_with("  doi = {10.5281/zenodo.8027706}\n}"));
    }

    #[test]
    fn test_software_without_release_date() {
        let text = format_citation(&record(), CiteFormat::Text);
        assert!(text.contains("(n.d.)"));
        assert!(format_citation(&record(), CiteFormat::Bibtex).starts_with("@software{Hajdik,\n"));
    }

    #[test]
    fn test_entry_types() {
        assert_eq!(bibtex_entry_type(ReferenceType::ConferencePaper), "inproceedings");
        assert_eq!(bibtex_entry_type(ReferenceType::SoftwareCode), "software");
        assert_eq!(bibtex_entry_type(ReferenceType::Website), "misc");
    }
}
