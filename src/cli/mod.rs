// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Three commands are supported:
//   1. `summarize` — extracts a PDF's text and summarises it
//   2. `extract`   — extracts a PDF's text only
//   3. `config`    — shows or saves the effective configuration
//
// Only this layer writes to stdout. Logs go to stderr.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, ConfigArgs, ExtractArgs, OutputFormat, SummarizeArgs};

use crate::domain::document::Document;
use crate::domain::summary::SummaryReport;
use crate::infra::config_store::ConfigStore;

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "pdf-summarizer",
    version = "0.1.0",
    about = "Extract the text of a PDF and summarise it by word frequency."
)]
pub struct Cli {
    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Log pipeline detail (debug level) to stderr
    #[arg(long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Summarize(args) => run_summarize(args),
            Commands::Extract(args) => run_extract(args),
            Commands::Config(args) => run_config(args),
        }
    }
}

/// Handles the `summarize` subcommand.
fn run_summarize(args: SummarizeArgs) -> Result<()> {
    use crate::application::summarize_use_case::SummarizeUseCase;

    let config = args.settings.resolve()?;
    tracing::debug!("Effective config: {:?}", config);

    let use_case = SummarizeUseCase::new(&config)?;
    let report = use_case.execute(&args.file)?;

    println!("{}", render_report(&report, args.format, !args.no_text)?);
    Ok(())
}

/// Handles the `extract` subcommand.
fn run_extract(args: ExtractArgs) -> Result<()> {
    use crate::application::extract_use_case::ExtractUseCase;

    let document = ExtractUseCase::new().execute(&args.file)?;
    println!("{}", render_document(&document, args.format)?);
    Ok(())
}

/// Handles the `config` subcommand.
fn run_config(args: ConfigArgs) -> Result<()> {
    let config = args.settings.resolve()?;
    match &args.write {
        Some(path) => {
            ConfigStore::save(path, &config)?;
            println!("Config written to {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&config)?),
    }
    Ok(())
}

fn render_report(report: &SummaryReport, format: OutputFormat, with_text: bool) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            if with_text {
                out.push_str("Extracted Text:\n");
                out.push_str(&report.extracted_text);
                out.push_str("\n\n");
            }
            out.push_str("Summary:\n");
            out.push_str(&report.summary);
            Ok(out)
        }
        OutputFormat::Json => {
            let mut value = serde_json::to_value(report)?;
            if !with_text {
                if let Some(fields) = value.as_object_mut() {
                    fields.remove("extracted_text");
                }
            }
            Ok(serde_json::to_string_pretty(&value)?)
        }
    }
}

fn render_document(document: &Document, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("Extracted Text:\n{}", document.text)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(document)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::summary::{ScoredSentence, Summary};

    fn report() -> SummaryReport {
        let document = Document::new("a.pdf", "Cats sit. Dogs run.");
        let summary = Summary::new(vec![ScoredSentence::new("Dogs run.", 2)]);
        SummaryReport::new(document, summary)
    }

    #[test]
    fn test_text_output_has_both_sections() {
        let out = render_report(&report(), OutputFormat::Text, true).unwrap();
        assert_eq!(out, "Extracted Text:\nCats sit. Dogs run.\n\nSummary:\nDogs run.");
    }

    #[test]
    fn test_no_text_drops_extracted_section() {
        let out = render_report(&report(), OutputFormat::Text, false).unwrap();
        assert_eq!(out, "Summary:\nDogs run.");

        let json = render_report(&report(), OutputFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("extracted_text").is_none());
        assert_eq!(value["summary"], "Dogs run.");
        assert_eq!(value["sentences"][0]["score"], 2);
    }

    #[test]
    fn test_cli_parses_summarize_flags() {
        let cli = Cli::try_parse_from([
            "pdf-summarizer",
            "summarize",
            "--file",
            "paper.pdf",
            "--max-sentences",
            "3",
            "--match-mode",
            "token",
            "--verbose",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Summarize(args) => {
                assert_eq!(args.settings.max_sentences, Some(3));
                assert_eq!(args.format, OutputFormat::Text);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_out_of_range_max_sentences() {
        for n in ["0", "51"] {
            let parsed = Cli::try_parse_from([
                "pdf-summarizer",
                "summarize",
                "--file",
                "paper.pdf",
                "--max-sentences",
                n,
            ]);
            assert!(parsed.is_err(), "{n} should be rejected");
        }
    }
}
