use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use folio_parser::config::Config;
use folio_parser::{extract_document, extract_text, ingest_resume, split_sections, FormatPolicy};

#[derive(Parser, Debug)]
#[command(name = "folio-parse", version, about = "Parse a PDF or DOCX résumé into JSON")]
struct Cli {
    /// Résumé file (.pdf or .docx)
    file: PathBuf,

    /// Fail on unsupported extensions instead of emitting an empty record
    #[arg(long)]
    strict: bool,

    /// Single-line JSON output
    #[arg(long)]
    compact: bool,

    /// Print the section map instead of the parsed record
    #[arg(long, conflicts_with = "text")]
    sections: bool,

    /// Print the extracted plain text
    #[arg(long)]
    text: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries only the result.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_directive(&config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let policy = if cli.strict {
        FormatPolicy::Strict
    } else {
        config.format_policy
    };
    let pretty = config.pretty && !cli.compact;
    info!(file = %cli.file.display(), ?policy, "Parsing résumé");

    if cli.text || cli.sections {
        let text = match policy {
            FormatPolicy::Lenient => extract_text(&cli.file),
            FormatPolicy::Strict => extract_document(&cli.file),
        }
        .with_context(|| format!("Failed to extract text from {}", cli.file.display()))?;

        if cli.text {
            print!("{text}");
        } else {
            print_json(&split_sections(&text), pretty)?;
        }
        return Ok(());
    }

    let ingest = ingest_resume(&cli.file, policy)
        .with_context(|| format!("Failed to parse {}", cli.file.display()))?;
    print_json(&ingest, pretty)
}

/// Enables `level` for both the library and this binary's own events.
fn default_log_directive(level: &str) -> String {
    format!(
        "{}={level},{}={level}",
        env!("CARGO_PKG_NAME").replace('-', "_"),
        env!("CARGO_CRATE_NAME")
    )
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to serialise output")?;
    println!("{json}");
    Ok(())
}
