//! `validate-cff show`

use anyhow::{Result, bail};
use cff_model::Person;
use std::path::Path;
use std::process::ExitCode;

use super::load_record;

fn describe_person(person: &Person) -> String {
    match person.orcid() {
        Some(orcid) => format!("{} <{}>", person.full_name(), orcid),
        None => person.full_name(),
    }
}

pub fn execute(path: &Path, author: Option<&str>) -> Result<ExitCode> {
    let Some(record) = load_record(path)? else {
        return Ok(ExitCode::FAILURE);
    };

    if let Some(family_names) = author {
        let Some(person) = record.find_author(family_names) else {
            bail!("No author with family names '{}' in {}", family_names, path.display());
        };
        println!("{}", describe_person(person));
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", record.title());
    println!("  DOI: {}", record.primary_identifier());
    println!("  cff-version: {}", record.cff_version());
    println!("  Authors:");
    for person in record.authors() {
        println!("    - {}", describe_person(person));
    }

    if let Some(citation) = record.preferred_citation() {
        println!("  Preferred citation ({}):", citation.reference_type());
        println!("    Title: {}", citation.title());
        println!("    Journal: {}", citation.journal());
        println!("    Publisher: {}", citation.publisher().name());
        println!("    Published: {}", citation.date_published());
        println!("    DOI: {}", citation.doi());
        println!("    Authors: {}", citation.authors().len());
    }

    Ok(ExitCode::SUCCESS)
}
