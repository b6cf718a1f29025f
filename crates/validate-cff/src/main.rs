//! validate-cff - check and query Citation File Format records

mod cite;
mod commands;
mod input;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cite::CiteFormat;
use crate::commands::convert::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "validate-cff")]
#[command(version)]
#[command(about = "Validate, query and convert Citation File Format records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a citation file and report every problem found
    Check {
        /// Citation file (YAML, or JSON if the extension is .json)
        #[arg(value_name = "FILE", default_value = "CITATION.cff")]
        file: PathBuf,

        /// Print errors as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show identifiers, authors and the preferred citation
    Show {
        #[arg(value_name = "FILE", default_value = "CITATION.cff")]
        file: PathBuf,

        /// Only show the first author with these family names
        #[arg(long, value_name = "FAMILY")]
        author: Option<String>,
    },

    /// Print a ready-to-paste citation
    Cite {
        #[arg(value_name = "FILE", default_value = "CITATION.cff")]
        file: PathBuf,

        /// Citation format
        #[arg(short, long, value_enum, default_value_t = CiteFormat::Text)]
        format: CiteFormat,
    },

    /// Re-serialize a valid citation file as YAML or JSON
    Convert {
        #[arg(value_name = "FILE", default_value = "CITATION.cff")]
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum)]
        to: OutputFormat,
    },
}

fn main() -> ExitCode {
    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "validate_cff=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { file, json } => commands::check::execute(&file, json),
        Commands::Show { file, author } => commands::show::execute(&file, author.as_deref()),
        Commands::Cite { file, format } => commands::cite::execute(&file, format),
        Commands::Convert { file, to } => commands::convert::execute(&file, to),
    }
}
